//! Shed parts list: timber frame on a concrete slab.

use super::{meters, Bom, BomBuilder, BomCategory, BomUnit};
use crate::config::{FloorMaterial, ProductType, RoofType, ShedConfiguration};
use crate::geometry::Geometry;
use crate::math::{count_at_spacing, round_display, sloped_length};
use crate::units::Degrees;

/// Slab thickness (m)
const SLAB_DEPTH: f64 = 0.15;
/// Gravel bed thickness (m)
const GRAVEL_DEPTH: f64 = 0.1;
const STUD_SPACING: f64 = 0.6;
const JOIST_SPACING: f64 = 0.4;
/// Rafter length allowance for the eaves
const RAFTER_EAVES: f64 = 1.1;

pub const SHED_NOTES: [&str; 4] = [
    "Materialen zijn indicatief en kunnen variëren per leverancier",
    "Hoeveelheden bevatten geen verspilling - reken 10-15% extra",
    "Raadpleeg een vakman voor exacte materiaallijst",
    "Lokale bouwvoorschriften kunnen extra eisen stellen",
];

fn rafter_length(c: &ShedConfiguration) -> f64 {
    let pitch = Degrees(c.roof_pitch);
    let run = match c.roof_type {
        RoofType::Gabled => sloped_length(c.length / 2.0, pitch),
        RoofType::MonoSlope => sloped_length(c.length, pitch),
        RoofType::Flat => c.length,
    };
    run * RAFTER_EAVES
}

pub fn shed_bom(c: &ShedConfiguration, g: &Geometry) -> Bom {
    let mut bom = BomBuilder::new();
    let wall_height = meters(c.wall_height);

    // Foundation
    bom.add(
        "FOUND",
        BomCategory::Foundation,
        "Betonnen fundering",
        format!(
            "Fundering 15cm diep voor {}m² oppervlak",
            round_display(g.footprint_area)
        ),
        g.footprint_area * SLAB_DEPTH,
        BomUnit::CubicMeter,
    );
    bom.add(
        "FOUND",
        BomCategory::Foundation,
        "Grindbed",
        "Grindlaag onder fundering, 10cm diep",
        g.footprint_area * GRAVEL_DEPTH,
        BomUnit::CubicMeter,
    );

    // Frame
    bom.add(
        "FRAM",
        BomCategory::Framing,
        "Hoekpalen",
        format!("Houten palen 90x90mm, L={}m", wall_height),
        f64::from(g.post_count),
        BomUnit::Pieces,
    )
    .with_dimensions(format!("90x90mm, L={}m", wall_height));
    bom.add(
        "FRAM",
        BomCategory::Framing,
        "Wandstijlen",
        format!("Wandstijlen 45x90mm, L={}m, afstand 60cm", wall_height),
        f64::from(count_at_spacing(g.perimeter, STUD_SPACING)),
        BomUnit::Pieces,
    )
    .with_dimensions(format!("45x90mm, L={}m", wall_height));
    bom.add(
        "FRAM",
        BomCategory::Framing,
        "Dakspanten",
        format!("Dakspanten 45x145mm voor {}", c.roof_type.display_name().to_lowercase()),
        f64::from(g.rafter_count),
        BomUnit::Pieces,
    )
    .with_dimensions(format!("45x145mm, L={}m", meters(rafter_length(c))));

    // Envelope
    let wall_name = c.wall_material.display_name();
    bom.add(
        "CLAD",
        BomCategory::Cladding,
        format!("Gevelbekleding {}", wall_name.to_lowercase()),
        format!("{} voor gevel, excl. deuren en ramen", wall_name),
        g.opaque_wall_area,
        BomUnit::SquareMeter,
    );

    let roof_name = c.roof_material.display_name();
    bom.add(
        "ROOF",
        BomCategory::Roofing,
        format!("Dakbedekking {}", roof_name.to_lowercase()),
        format!("{} voor {}m² dakvlak", roof_name, round_display(g.roof_area)),
        g.roof_area,
        BomUnit::SquareMeter,
    );
    if c.roof_type.is_pitched() {
        bom.add(
            "ROOF",
            BomCategory::Roofing,
            "Onderdak/dakbeschot",
            "OSB platen 18mm voor dakbeschot",
            g.roof_area,
            BomUnit::SquareMeter,
        );
    }

    if c.include_floor {
        let floor_name = c.floor_material.display_name();
        bom.add(
            "FLOOR",
            BomCategory::Floor,
            floor_name,
            format!("{} voor {}m²", floor_name, round_display(g.footprint_area)),
            g.footprint_area,
            BomUnit::SquareMeter,
        );
        if c.floor_material == FloorMaterial::Timber {
            bom.add(
                "FLOOR",
                BomCategory::Floor,
                "Vloerbalken",
                "Houten balken 45x145mm voor vloerconstructie",
                f64::from(count_at_spacing(c.width, JOIST_SPACING)),
                BomUnit::Pieces,
            )
            .with_dimensions(format!("45x145mm, L={}m", meters(c.length)));
        }
    }

    // Openings, one line per kind
    if c.door_count > 0 {
        let door_size = format!("{}m x {}m", meters(c.door_width), meters(c.door_height));
        bom.add(
            "DOOR",
            BomCategory::Opening,
            "Deur",
            format!("Deur {} inclusief kozijn", door_size),
            f64::from(c.door_count),
            BomUnit::Set,
        )
        .with_dimensions(door_size);
    }
    if c.window_count > 0 {
        let window_size = format!("{}m x {}m", meters(c.window_width), meters(c.window_height));
        bom.add(
            "WIN",
            BomCategory::Opening,
            "Raam",
            format!("Raam {} inclusief kozijn", window_size),
            f64::from(c.window_count),
            BomUnit::Set,
        )
        .with_dimensions(window_size);
    }

    bom.add(
        "HARD",
        BomCategory::Hardware,
        "Bevestigingsmaterialen",
        "Schroeven, spijkers, hoekverbindingen, etc.",
        1.0,
        BomUnit::Set,
    );
    bom.add(
        "HARD",
        BomCategory::Hardware,
        "Waterdichting",
        "Kit, membraan, bitumenstroken",
        1.0,
        BomUnit::Set,
    );

    let mut notes = vec![format!(
        "Afwerking: {} gevel met {}",
        wall_name.to_lowercase(),
        roof_name.to_lowercase()
    )];
    notes.extend(SHED_NOTES.iter().map(|note| note.to_string()));

    bom.finish(ProductType::Shed, notes)
}
