//! Carport and veranda parts lists.
//!
//! Both are powder-coated aluminium canopies and share most of their lines:
//! posts with an embed allowance, 1.05 m roof panels, anchors, one gutter
//! run, lighting and a fixings set. The differences are the beams (carport)
//! versus wall attachment and rafters (veranda), and the enclosure options.

use super::{meters, Bom, BomBuilder, BomCategory, BomUnit};
use crate::config::{
    CanopyRoofMaterial, CarportConfiguration, Footing, GutterType, LightingType, ProductType,
    RalColor, VerandaConfiguration, WallAttachment,
};
use crate::geometry::Geometry;
use crate::math::count_at_spacing;

/// Post length below ground level (m)
pub const POST_EMBED: f64 = 0.5;
/// Roof panel width (m)
pub const PANEL_WIDTH: f64 = 1.05;
/// Maximum distance between carport beams (m)
const BEAM_SPACING: f64 = 2.5;
const PURLIN_SPACING: f64 = 0.8;
const MIN_PURLINS: u32 = 3;
/// One wall bracket per meter of width
const BRACKET_SPACING: f64 = 1.0;
/// Width one terrace heater covers (m)
const HEATER_REACH: f64 = 4.0;

fn roof_panel_name(material: CanopyRoofMaterial) -> &'static str {
    match material {
        CanopyRoofMaterial::Polycarbonate => "Polycarbonaat dakpanelen",
        CanopyRoofMaterial::SteelSheet => "Stalen dakplaten",
        CanopyRoofMaterial::AluminumPanels => "Aluminium dakpanelen",
        CanopyRoofMaterial::Glass => "Gehard glas dakpanelen",
    }
}

fn finish_note(color: RalColor, custom: Option<&str>) -> String {
    format!(
        "Materialen zijn {} gepoedercoat aluminium",
        color.finish_code(custom)
    )
}

// ============================================================================
// Shared lines
// ============================================================================

fn posts(bom: &mut BomBuilder, name: &str, post_size: u32, height: f64, count: u32) {
    let dimensions = format!("{0}x{0}mm, L={1}m", post_size, meters(height + POST_EMBED));
    bom.add(
        "POST",
        BomCategory::Profile,
        name,
        dimensions.clone(),
        f64::from(count),
        BomUnit::Pieces,
    )
    .with_dimensions(dimensions);
}

fn roof_panels(bom: &mut BomBuilder, material: CanopyRoofMaterial, span: f64, length: f64) {
    let dimensions = format!("L={}m x B=1.05m", meters(length));
    bom.add(
        "ROOF",
        BomCategory::Panel,
        roof_panel_name(material),
        dimensions.clone(),
        f64::from(count_at_spacing(span, PANEL_WIDTH)),
        BomUnit::Pieces,
    )
    .with_dimensions(dimensions);
}

fn anchors(bom: &mut BomBuilder, footing: Footing, count: u32) {
    bom.add(
        "FOUND",
        BomCategory::Fixing,
        "Fundatie ankers",
        format!("Voor montage: {}", footing.display_name().to_lowercase()),
        f64::from(count),
        BomUnit::Set,
    );
}

/// One gutter run; downpipes are part of the run
fn gutter(bom: &mut BomBuilder, gutters: GutterType, length: f64) {
    if !gutters.is_selected() {
        return;
    }
    bom.add(
        "GUTTER",
        BomCategory::Drainage,
        gutters.display_name(),
        "Ø125mm goot inclusief 2 hemelwaterafvoeren Ø80mm en koppelstukken",
        length,
        BomUnit::Meter,
    )
    .with_dimensions(format!("Ø125mm, L={}m", meters(length)));
}

fn lighting(bom: &mut BomBuilder, lighting: LightingType, width: f64, depth: f64) {
    if !lighting.is_selected() {
        return;
    }
    bom.add(
        "LIGHT",
        BomCategory::Lighting,
        lighting.display_name(),
        "Inclusief bedrading en dimmer",
        f64::from(lighting.fixture_count(width, depth)),
        BomUnit::Pieces,
    );
}

fn fixings(bom: &mut BomBuilder) {
    bom.add(
        "HARD",
        BomCategory::Hardware,
        "Bevestigingsset",
        "Bouten, moeren, schroeven, etc.",
        1.0,
        BomUnit::Set,
    );
}

// ============================================================================
// Carport
// ============================================================================

pub fn carport_bom(c: &CarportConfiguration, g: &Geometry) -> Bom {
    let mut bom = BomBuilder::new();
    let covered_width = c.width + 2.0 * c.roof_overhang;
    let covered_depth = c.depth + 2.0 * c.roof_overhang;

    posts(&mut bom, "Aluminium vierkante paal", c.post_size, c.height, g.post_count);

    // Beams across the width, spaced along the depth, and the other way round
    for (count, length) in [
        (count_at_spacing(c.depth, BEAM_SPACING), c.width),
        (count_at_spacing(c.width, BEAM_SPACING), c.depth),
    ] {
        let dimensions = format!("{0}x{0}mm, L={1}m", c.beam_size, meters(length));
        bom.add(
            "BEAM",
            BomCategory::Profile,
            "Aluminium ligger",
            dimensions.clone(),
            f64::from(count),
            BomUnit::Pieces,
        )
        .with_dimensions(dimensions);
    }

    roof_panels(&mut bom, c.roof_material, covered_width, covered_depth);

    let purlin_dimensions = format!("60x40mm, L={}m", meters(covered_width));
    bom.add(
        "PURLIN",
        BomCategory::Profile,
        "Aluminium gordingen",
        purlin_dimensions.clone(),
        f64::from(count_at_spacing(c.depth, PURLIN_SPACING).max(MIN_PURLINS)),
        BomUnit::Pieces,
    )
    .with_dimensions(purlin_dimensions);

    anchors(&mut bom, c.footing, g.post_count);
    gutter(&mut bom, c.gutters, g.perimeter);
    lighting(&mut bom, c.lighting, c.width, c.depth);

    if let Some(area) = g.enclosure_area {
        let sides = c.side_panel.side_count();
        bom.add(
            "PANEL",
            BomCategory::Panel,
            "Aluminium zijwandpanelen",
            format!("{} zijde(n), H={}m x L={}m", sides, meters(c.height), meters(c.depth)),
            area,
            BomUnit::SquareMeter,
        )
        .with_dimensions(format!("H={}m", meters(c.height)));
    }

    if c.storage_area {
        bom.add(
            "STORE",
            BomCategory::Accessory,
            "Bergruimte achterzijde",
            "Afsluitbare berging met aluminium wanden en deur",
            1.0,
            BomUnit::Set,
        );
    }

    fixings(&mut bom);

    let notes = vec![
        finish_note(c.ral_color, c.custom_ral.as_deref()),
        "Montage op locatie door gecertificeerde monteurs aanbevolen".to_string(),
        "Vergunningen kunnen nodig zijn - raadpleeg lokale gemeente".to_string(),
        "Prijzen en levertijden kunnen variëren per leverancier".to_string(),
    ];
    bom.finish(ProductType::Carport, notes)
}

// ============================================================================
// Veranda
// ============================================================================

pub fn veranda_bom(c: &VerandaConfiguration, g: &Geometry) -> Bom {
    let mut bom = BomBuilder::new();
    let rafter_length = c.depth + c.roof_overhang;

    posts(&mut bom, "Aluminium paal", c.post_size, c.height, g.post_count);

    match c.wall_attachment {
        WallAttachment::LedgerBoard => {
            bom.add(
                "WALL",
                BomCategory::Fixing,
                c.wall_attachment.display_name(),
                format!("Voor wandmontage, L={}m", meters(c.width)),
                1.0,
                BomUnit::Pieces,
            )
            .with_dimensions(format!("L={}m", meters(c.width)));
        }
        WallAttachment::Bracket => {
            bom.add(
                "WALL",
                BomCategory::Fixing,
                c.wall_attachment.display_name(),
                format!("Voor wandmontage, L={}m", meters(c.width)),
                f64::from(count_at_spacing(c.width, BRACKET_SPACING)),
                BomUnit::Set,
            );
        }
    }

    bom.add(
        "RAFTER",
        BomCategory::Profile,
        "Aluminium spanten",
        format!(
            "60x40mm, L={}m, afstand {}mm",
            meters(rafter_length),
            c.rafter_spacing
        ),
        f64::from(g.rafter_count),
        BomUnit::Pieces,
    )
    .with_dimensions(format!("60x40mm, L={}m", meters(rafter_length)));

    roof_panels(&mut bom, c.roof_material, c.width, rafter_length);
    anchors(&mut bom, c.footing, g.post_count);
    // Veranda gutter follows the front edge only, the back is against the house
    gutter(&mut bom, c.gutters, c.width);
    lighting(&mut bom, c.lighting, c.width, c.depth);

    if let Some(area) = g.enclosure_area {
        bom.add(
            "GLASS",
            BomCategory::Panel,
            c.glass_type.display_name(),
            format!("Beglazing zijkant(en)/voorzijde, H={}m", meters(c.height)),
            area,
            BomUnit::SquareMeter,
        );
    }

    if c.heater {
        let heaters = count_at_spacing(c.width, HEATER_REACH).max(1);
        bom.add(
            "HEAT",
            BomCategory::Accessory,
            "Infrarood terrasverwarmer",
            "Elektrisch, wandmontage",
            f64::from(heaters),
            BomUnit::Pieces,
        );
    }

    if c.motorized_awning {
        bom.add(
            "AWNING",
            BomCategory::Accessory,
            "Elektrische zonwering",
            format!("Uitvalscherm, B={}m", meters(c.width)),
            1.0,
            BomUnit::Set,
        )
        .with_dimensions(format!("B={}m", meters(c.width)));
    }

    fixings(&mut bom);

    let notes = vec![
        finish_note(c.ral_color, c.custom_ral.as_deref()),
        "Wandbevestiging vereist draagkrachtige muur (baksteen/beton)".to_string(),
        "Montage door gecertificeerde monteurs aanbevolen".to_string(),
        "Bouwvergunning kan nodig zijn - raadpleeg lokale gemeente".to_string(),
        "Prijzen en levertijden kunnen variëren per leverancier".to_string(),
    ];
    bom.finish(ProductType::Veranda, notes)
}
