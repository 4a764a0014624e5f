//! Dutch (nl-NL) display formatting for prices, areas, material codes and
//! the plain-text parts list.

use once_cell::sync::Lazy;

use crate::bom::Bom;
use crate::config::{CanopyRoofMaterial, FloorMaterial, ShedRoofMaterial, WallMaterial};
use crate::pricing::PriceRange;

const RULE_WIDTH: usize = 60;

/// Group an integer with `.` every three digits: `12345` → `12.345`
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "EUR" => "€",
        other => other,
    }
}

/// Whole-unit price: `format_price(12345.0, "EUR")` → `"€ 12.345"`
pub fn format_price(amount: f64, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    if !amount.is_finite() {
        return format!("{} -", symbol);
    }
    format!("{} {}", symbol, group_thousands(amount.round() as i64))
}

/// `"€ 6.000 - € 8.000"`
pub fn format_price_range(range: &PriceRange, currency: &str) -> String {
    format!(
        "{} - {}",
        format_price(range.min, currency),
        format_price(range.max, currency)
    )
}

/// One decimal with a decimal comma: `20.0` → `"20,0 m²"`
pub fn format_area(area: f64) -> String {
    format!("{:.1} m²", area).replace('.', ",")
}

static MATERIAL_NAMES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut names = Vec::new();
    names.extend(WallMaterial::ALL.iter().map(|m| (m.code(), m.display_name())));
    names.extend(ShedRoofMaterial::ALL.iter().map(|m| (m.code(), m.display_name())));
    names.extend(FloorMaterial::ALL.iter().map(|m| (m.code(), m.display_name())));
    names.extend(CanopyRoofMaterial::ALL.iter().map(|m| (m.code(), m.display_name())));
    names
});

/// Dutch display name for a material code.
///
/// Codes shared by several material kinds resolve to the first kind
/// (`tiles` is a roof covering). Unknown codes pass through unchanged.
pub fn material_display_name(code: &str) -> &str {
    MATERIAL_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Parts list as plain text, grouped by category with notes at the end.
pub fn export_bom_text(bom: &Bom) -> String {
    let mut output = String::from("MATERIAALLIJST (BOM)\n");
    output.push_str(&"═".repeat(RULE_WIDTH));
    output.push_str("\n\n");

    for category in bom.categories() {
        output.push_str(&category.code().to_uppercase());
        output.push('\n');
        output.push_str(&"─".repeat(RULE_WIDTH));
        output.push('\n');

        for item in bom.items_in(category) {
            output.push_str(&format!("{} - {}\n", item.id, item.name));
            output.push_str(&format!("  {}\n", item.description));
            output.push_str(&format!("  Hoeveelheid: {} {}\n", item.quantity, item.unit));
            if let Some(dimensions) = &item.dimensions {
                output.push_str(&format!("  Afmetingen: {}\n", dimensions));
            }
            output.push('\n');
        }
    }

    if !bom.notes.is_empty() {
        output.push_str("\nOPMERKINGEN\n");
        output.push_str(&"─".repeat(RULE_WIDTH));
        output.push('\n');
        for note in &bom.notes {
            output.push_str(&format!("• {}\n", note));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::generate_bom;
    use crate::config::{CarportConfiguration, Configuration};
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "€ 0")]
    #[case(999.0, "€ 999")]
    #[case(1000.0, "€ 1.000")]
    #[case(12345.4, "€ 12.345")]
    #[case(1234567.0, "€ 1.234.567")]
    #[case(-2500.0, "€ -2.500")]
    fn test_format_price(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_price(amount, "EUR"), expected);
    }

    #[test]
    fn test_format_price_range() {
        let range = PriceRange {
            min: 6000.0,
            max: 8000.0,
            variance: 0.15,
        };
        assert_eq!(format_price_range(&range, "EUR"), "€ 6.000 - € 8.000");
        assert_eq!(format_price(f64::NAN, "EUR"), "€ -");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(20.0), "20,0 m²");
        assert_eq!(format_area(23.094), "23,1 m²");
    }

    #[rstest]
    #[case("timber", "Houtskeletbouw")]
    #[case("tiles", "Dakpannen")]
    #[case("green-roof", "Groen dak")]
    #[case("concrete", "Betonnen dekvloer")]
    #[case("steel-sheet", "Stalen dakplaten")]
    #[case("unobtainium", "unobtainium")]
    fn test_material_display_name(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(material_display_name(code), expected);
    }

    #[test]
    fn test_export_bom_text() {
        let bom = generate_bom(&Configuration::Carport(CarportConfiguration::default()));
        let text = export_bom_text(&bom);
        assert!(text.starts_with("MATERIAALLIJST (BOM)\n"));
        assert!(text.contains("PROFILE\n"));
        assert!(text.contains("POST-001 - Aluminium vierkante paal\n"));
        assert!(text.contains("  Hoeveelheid: 4 pcs\n"));
        assert!(text.contains("  Afmetingen: 100x100mm, L=2.8m\n"));
        assert!(text.contains("\nOPMERKINGEN\n"));
        assert!(text.ends_with("• Prijzen en levertijden kunnen variëren per leverancier\n"));
    }
}
