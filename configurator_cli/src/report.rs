//! Plain-text estimate report for the terminal.

use std::fmt::Write;

use configurator_core::format::{export_bom_text, format_area, format_price, format_price_range};
use configurator_core::validation::ValidationError;
use configurator_core::Estimate;

fn finding(out: &mut String, marker: &str, item: &ValidationError) {
    let _ = writeln!(out, "  {} {}: {}", marker, item.field, item.message);
    if let Some(suggestion) = &item.suggestion {
        let _ = writeln!(out, "      → {}", suggestion);
    }
}

pub fn render(title: &str, estimate: &Estimate) -> String {
    let mut out = String::new();
    let price = &estimate.price;
    let g = &estimate.geometry;

    let _ = writeln!(out, "{} ({})", title, estimate.product_type.display_name());
    if estimate.is_provisional() {
        let _ = writeln!(out, "VOORLOPIG: de configuratie bevat fouten");
    }
    out.push('\n');

    let _ = writeln!(out, "Afmetingen");
    let _ = writeln!(out, "  Grondoppervlak:  {}", format_area(g.footprint_area));
    let _ = writeln!(out, "  Overdekt:        {}", format_area(g.covered_area));
    let _ = writeln!(out, "  Dakoppervlak:    {}", format_area(g.roof_area));
    let _ = writeln!(out, "  Omtrek:          {:.1} m", g.perimeter);
    if g.post_count > 0 {
        let _ = writeln!(out, "  Palen:           {}", g.post_count);
    }
    out.push('\n');

    let validation = &estimate.validation;
    if !validation.errors.is_empty() || !validation.warnings.is_empty() {
        let _ = writeln!(out, "Controle");
        for error in &validation.errors {
            finding(&mut out, "✗", error);
        }
        for warning in &validation.warnings {
            finding(&mut out, "!", warning);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Prijsopbouw ({}, regio ×{})", price.country, price.region_multiplier);
    for line in &price.lines {
        let _ = writeln!(out, "  {:<16} {:>12}", line.label, format_price(line.amount, &price.currency));
    }
    let _ = writeln!(out, "  {:<16} {:>12}", "Subtotaal", format_price(price.subtotal, &price.currency));
    let _ = writeln!(
        out,
        "  {:<16} {:>12}",
        format!("BTW {:.0}%", price.vat_rate * 100.0),
        format_price(price.vat, &price.currency)
    );
    let _ = writeln!(out, "  {:<16} {:>12}", "Totaal", format_price(price.total, &price.currency));
    let _ = writeln!(out, "  Bandbreedte: {}", format_price_range(&price.range, &price.currency));
    if !price.installation_included {
        let _ = writeln!(out, "  Exclusief montage");
    }
    out.push('\n');

    out.push_str(&export_bom_text(&estimate.bom));
    out
}
