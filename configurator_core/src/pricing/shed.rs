//! Shed cost model: materials by quantity plus estimated labor hours.
//!
//! Unit prices are EUR (2025 estimates). The wall and roof-material
//! multipliers stack on top of the unit price for finish and fixing effort.

use super::{CostLine, PricingContext};
use crate::config::{RoofType, ShedConfiguration, ShedRoofMaterial, WallMaterial};
use crate::geometry::Geometry;

/// Price range variance for sheds
pub const VARIANCE: f64 = 0.15;

/// EUR per m³
const CONCRETE: f64 = 150.0;
/// EUR per m³ of softwood
const LUMBER: f64 = 450.0;
const SLAB_DEPTH: f64 = 0.15;
/// Timber volume per m² of wall / roof surface (m³)
const WALL_TIMBER_RATIO: f64 = 0.09;
const ROOF_TIMBER_RATIO: f64 = 0.05;

const DOOR: f64 = 350.0;
const WINDOW: f64 = 180.0;

/// EUR per m² and effort multiplier
fn wall_cost(material: WallMaterial) -> (f64, f64) {
    match material {
        WallMaterial::Timber => (45.0, 1.0),
        WallMaterial::Composite => (75.0, 1.4),
        WallMaterial::Metal => (65.0, 1.3),
    }
}

/// EUR per m² and effort multiplier
fn roof_cost(material: ShedRoofMaterial) -> (f64, f64) {
    match material {
        ShedRoofMaterial::Tiles => (35.0, 1.0),
        ShedRoofMaterial::MetalSheet => (55.0, 1.3),
        ShedRoofMaterial::GreenRoof => (120.0, 2.5),
        ShedRoofMaterial::Bitumen => (25.0, 0.8),
    }
}

fn roof_type_multiplier(roof_type: RoofType) -> f64 {
    match roof_type {
        RoofType::Flat => 1.0,
        RoofType::Gabled => 1.25,
        RoofType::MonoSlope => 1.15,
    }
}

/// Whole crew hours for the build.
///
/// About 12 h per 10 m² of footprint, more for pitched roofs, plus time
/// per opening and for the harder materials.
pub fn labor_hours(c: &ShedConfiguration, footprint: f64) -> f64 {
    let mut hours = footprint / 10.0 * 12.0;
    hours *= match c.roof_type {
        RoofType::Gabled => 1.3,
        RoofType::MonoSlope => 1.15,
        RoofType::Flat => 1.0,
    };
    hours += f64::from(c.door_count) * 2.0;
    hours += f64::from(c.window_count) * 1.5;
    if c.wall_material == WallMaterial::Composite {
        hours *= 1.2;
    }
    if c.roof_material == ShedRoofMaterial::GreenRoof {
        hours *= 1.5;
    }
    hours.round()
}

pub fn cost_lines(c: &ShedConfiguration, g: &Geometry, context: &PricingContext) -> Vec<CostLine> {
    let foundation = g.footprint_area * SLAB_DEPTH * CONCRETE;

    let timber = g.perimeter * c.wall_height * WALL_TIMBER_RATIO + g.roof_area * ROOF_TIMBER_RATIO;
    let framing = timber * LUMBER;

    let (wall_price, wall_factor) = wall_cost(c.wall_material);
    let walls = g.opaque_wall_area * wall_price * wall_factor;

    let (roof_price, roof_factor) = roof_cost(c.roof_material);
    let roof = g.roof_area * roof_price * roof_type_multiplier(c.roof_type) * roof_factor;

    let doors = f64::from(c.door_count) * DOOR;
    let windows = f64::from(c.window_count) * WINDOW;

    let labor = if context.installation_included() {
        labor_hours(c, g.footprint_area) * context.country.labor_rates().average()
    } else {
        0.0
    };

    vec![
        CostLine::new("foundation", "Fundering", foundation),
        CostLine::new("framing", "Houtskelet", framing),
        CostLine::new("walls", "Gevels", walls),
        CostLine::new("roof", "Dak", roof),
        CostLine::new("doors", "Deuren", doors),
        CostLine::new("windows", "Ramen", windows),
        CostLine::new("labor", "Arbeid", labor),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::geometry::derive_geometry;
    use crate::pricing::{calculate_price, Country};

    fn flat_shed() -> ShedConfiguration {
        // 4 x 5, flat, tiles, timber, 1 door, 2 windows
        ShedConfiguration {
            width: 4.0,
            length: 5.0,
            wall_height: 2.5,
            roof_type: RoofType::Flat,
            ..ShedConfiguration::default()
        }
    }

    #[test]
    fn test_labor_hours() {
        let shed = flat_shed();
        // 24 + 2 + 3
        assert_eq!(labor_hours(&shed, 20.0), 29.0);

        let gabled = ShedConfiguration {
            roof_type: RoofType::Gabled,
            wall_material: WallMaterial::Composite,
            ..shed
        };
        // (24 x 1.3 + 5) x 1.2 = 43.44
        assert_eq!(labor_hours(&gabled, 20.0), 43.0);
    }

    #[test]
    fn test_line_amounts() {
        let shed = flat_shed();
        let g = derive_geometry(&Configuration::Shed(shed.clone()));
        let lines = cost_lines(&shed, &g, &PricingContext::new(Country::NL));
        let amount = |key: &str| lines.iter().find(|l| l.key == key).unwrap().amount;

        // 20 m² x 0.15 m x 150
        assert!((amount("foundation") - 450.0).abs() < 1e-9);
        // (18 x 2.5 x 0.09 + 20 x 0.05) x 450
        assert!((amount("framing") - 2272.5).abs() < 1e-9);
        // 20 m² tiles, flat
        assert!((amount("roof") - 700.0).abs() < 1e-9);
        assert_eq!(amount("doors"), 350.0);
        assert_eq!(amount("windows"), 360.0);
        // 29 h x 60
        assert!((amount("labor") - 1740.0).abs() < 1e-9);
    }

    #[test]
    fn test_labor_excluded() {
        let config = Configuration::Shed(flat_shed());
        let with = calculate_price(&config, &PricingContext::new(Country::NL));
        let without = calculate_price(
            &config,
            &PricingContext::new(Country::NL).with_installation(false),
        );
        assert_eq!(without.line("labor"), Some(0.0));
        assert_eq!(with.subtotal - without.subtotal, 1740.0);
        assert!(!without.installation_included);
    }
}
