//! Canopy cost model, shared by carports and verandas.
//!
//! Both products are priced by one function fed with a [`CanopyCostTable`].
//! Lookups that miss (a non-standard post size, an option the product does
//! not sell) fall back to a neutral value instead of failing.

use super::{CostLine, PricingContext};
use crate::config::{
    CanopyRoofMaterial, CarportConfiguration, GlassType, GutterType, LightingType, RoofType,
    VerandaConfiguration, WallAttachment,
};
use crate::geometry::Geometry;

/// Where the gutter runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutterRun {
    /// Around the whole roof outline
    Perimeter,
    /// Along the front edge only
    Width,
}

/// Unit prices for one canopy product (EUR)
#[derive(Debug, Clone)]
pub struct CanopyCostTable {
    /// Posts, beams and rafters per m² of footprint
    pub structure_per_m2: f64,
    pub post_size_multipliers: &'static [(u32, f64)],
    pub roof_material_per_m2: &'static [(CanopyRoofMaterial, f64)],
    pub roof_type_multipliers: &'static [(RoofType, f64)],
    pub wall_attachment: &'static [(WallAttachment, f64)],
    pub glazing_per_m2: &'static [(GlassType, f64)],
    pub gutter_per_m: &'static [(GutterType, f64)],
    pub gutter_run: GutterRun,
    pub lighting_per_fixture: &'static [(LightingType, f64)],
    pub side_panel_per_m2: f64,
    pub storage_area: f64,
    pub heater: f64,
    pub awning_base: f64,
    pub awning_per_m: f64,
    pub installation_per_m2: f64,
    pub variance: f64,
}

const LIGHTING: &[(LightingType, f64)] = &[
    (LightingType::LedStrip, 150.0),
    (LightingType::RecessedSpots, 80.0),
    (LightingType::Pendant, 120.0),
];

const GUTTERS: &[(GutterType, f64)] = &[
    (GutterType::StandardPvc, 25.0),
    (GutterType::AluminumSeamless, 45.0),
];

pub static CARPORT_COSTS: CanopyCostTable = CanopyCostTable {
    structure_per_m2: 180.0,
    post_size_multipliers: &[(100, 1.0), (120, 1.2), (150, 1.5)],
    roof_material_per_m2: &[
        (CanopyRoofMaterial::Polycarbonate, 45.0),
        (CanopyRoofMaterial::SteelSheet, 65.0),
        (CanopyRoofMaterial::AluminumPanels, 85.0),
        (CanopyRoofMaterial::Glass, 150.0),
    ],
    roof_type_multipliers: &[
        (RoofType::Flat, 1.0),
        (RoofType::MonoSlope, 1.1),
        (RoofType::Gabled, 1.2),
    ],
    wall_attachment: &[],
    glazing_per_m2: &[],
    gutter_per_m: GUTTERS,
    gutter_run: GutterRun::Perimeter,
    lighting_per_fixture: LIGHTING,
    side_panel_per_m2: 95.0,
    storage_area: 800.0,
    heater: 0.0,
    awning_base: 0.0,
    awning_per_m: 0.0,
    installation_per_m2: 120.0,
    variance: 0.12,
};

pub static VERANDA_COSTS: CanopyCostTable = CanopyCostTable {
    structure_per_m2: 160.0,
    post_size_multipliers: &[(80, 0.9), (100, 1.0), (120, 1.2)],
    roof_material_per_m2: &[
        (CanopyRoofMaterial::Polycarbonate, 50.0),
        (CanopyRoofMaterial::SteelSheet, 70.0),
        (CanopyRoofMaterial::AluminumPanels, 90.0),
        (CanopyRoofMaterial::Glass, 180.0),
    ],
    roof_type_multipliers: &[(RoofType::Flat, 1.0), (RoofType::MonoSlope, 1.05)],
    wall_attachment: &[(WallAttachment::Bracket, 200.0), (WallAttachment::LedgerBoard, 300.0)],
    glazing_per_m2: &[
        (GlassType::SlidingGlass, 350.0),
        (GlassType::FixedGlass, 200.0),
        (GlassType::Polycarbonate, 80.0),
    ],
    gutter_per_m: GUTTERS,
    gutter_run: GutterRun::Width,
    lighting_per_fixture: LIGHTING,
    side_panel_per_m2: 0.0,
    storage_area: 0.0,
    heater: 400.0,
    awning_base: 800.0,
    awning_per_m: 50.0,
    installation_per_m2: 140.0,
    variance: 0.15,
};

fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K, fallback: f64) -> f64 {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

/// Product-independent view of a canopy order
#[derive(Debug, Clone, PartialEq)]
pub struct CanopySpec {
    pub width: f64,
    pub depth: f64,
    pub post_size: u32,
    pub roof_type: RoofType,
    pub roof_material: CanopyRoofMaterial,
    pub gutters: GutterType,
    pub lighting: LightingType,
    pub wall_attachment: Option<WallAttachment>,
    pub glass_type: GlassType,
    pub side_panels: bool,
    pub storage_area: bool,
    pub heater: bool,
    pub motorized_awning: bool,
}

impl From<&CarportConfiguration> for CanopySpec {
    fn from(c: &CarportConfiguration) -> Self {
        CanopySpec {
            width: c.width,
            depth: c.depth,
            post_size: c.post_size,
            roof_type: c.roof_type,
            roof_material: c.roof_material,
            gutters: c.gutters,
            lighting: c.lighting,
            wall_attachment: None,
            glass_type: GlassType::None,
            side_panels: c.side_panel.side_count() > 0,
            storage_area: c.storage_area,
            heater: false,
            motorized_awning: false,
        }
    }
}

impl From<&VerandaConfiguration> for CanopySpec {
    fn from(c: &VerandaConfiguration) -> Self {
        CanopySpec {
            width: c.width,
            depth: c.depth,
            post_size: c.post_size,
            roof_type: c.roof_type,
            roof_material: c.roof_material,
            gutters: c.gutters,
            lighting: c.lighting,
            wall_attachment: Some(c.wall_attachment),
            glass_type: c.glass_type,
            side_panels: false,
            storage_area: false,
            heater: c.heater,
            motorized_awning: c.motorized_awning,
        }
    }
}

fn options_cost(spec: &CanopySpec, g: &Geometry, table: &CanopyCostTable) -> f64 {
    let mut cost = 0.0;

    if spec.gutters.is_selected() {
        let run = match table.gutter_run {
            GutterRun::Perimeter => g.perimeter,
            GutterRun::Width => spec.width,
        };
        cost += run * lookup(table.gutter_per_m, spec.gutters, 0.0);
    }

    if spec.lighting.is_selected() {
        let fixtures = spec.lighting.fixture_count(spec.width, spec.depth);
        cost += f64::from(fixtures) * lookup(table.lighting_per_fixture, spec.lighting, 0.0);
    }

    if spec.side_panels {
        cost += g.enclosure_area.unwrap_or(0.0) * table.side_panel_per_m2;
    }

    if spec.storage_area {
        cost += table.storage_area;
    }

    if spec.heater {
        let heaters = (spec.width / 4.0).ceil().max(1.0);
        cost += heaters * table.heater;
    }

    if spec.motorized_awning {
        cost += table.awning_base + spec.width * table.awning_per_m;
    }

    cost
}

pub fn cost_lines(
    spec: &CanopySpec,
    g: &Geometry,
    table: &CanopyCostTable,
    context: &PricingContext,
) -> Vec<CostLine> {
    let post_factor = lookup(table.post_size_multipliers, spec.post_size, 1.0);
    let attachment = spec
        .wall_attachment
        .map(|a| lookup(table.wall_attachment, a, 0.0))
        .unwrap_or(0.0);
    let structure = g.footprint_area * table.structure_per_m2 * post_factor + attachment;

    let roofing = g.roof_area
        * lookup(table.roof_material_per_m2, spec.roof_material, 0.0)
        * lookup(table.roof_type_multipliers, spec.roof_type, 1.0);

    let installation = if context.installation_included() {
        g.footprint_area * table.installation_per_m2
    } else {
        0.0
    };

    let mut lines = vec![
        CostLine::new("structure", "Constructie", structure),
        CostLine::new("roofing", "Dakbedekking", roofing),
    ];
    if !table.glazing_per_m2.is_empty() {
        let glazing = if spec.glass_type.is_selected() {
            g.enclosure_area.unwrap_or(0.0) * lookup(table.glazing_per_m2, spec.glass_type, 0.0)
        } else {
            0.0
        };
        lines.push(CostLine::new("glazing", "Beglazing", glazing));
    }
    lines.push(CostLine::new("options", "Opties", options_cost(spec, g, table)));
    lines.push(CostLine::new("installation", "Montage", installation));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, GlassSides, SidePanel};
    use crate::pricing::{calculate_price, Country};
    use rstest::rstest;

    fn context() -> PricingContext {
        PricingContext::new(Country::NL)
    }

    #[rstest]
    #[case(100, 1.0)]
    #[case(120, 1.2)]
    #[case(150, 1.5)]
    #[case(110, 1.0)]
    fn test_carport_post_multiplier(#[case] size: u32, #[case] factor: f64) {
        assert_eq!(lookup(CARPORT_COSTS.post_size_multipliers, size, 1.0), factor);
    }

    #[test]
    fn test_default_carport_price() {
        // 3 x 5, flat, overhang 0.3, polycarbonate, PVC gutters, post 100
        let price = calculate_price(
            &Configuration::Carport(CarportConfiguration::default()),
            &context(),
        );
        // 15 m² x 180
        assert_eq!(price.line("structure"), Some(2700.0));
        // 3.6 x 5.6 = 20.16 m² x 45 = 907.2
        assert_eq!(price.line("roofing"), Some(907.0));
        // 18.4 m x 25
        assert_eq!(price.line("options"), Some(460.0));
        // 15 m² x 120
        assert_eq!(price.line("installation"), Some(1800.0));
        assert_eq!(price.line("glazing"), None);
        // 2700 + 907.2 + 460 + 1800
        assert_eq!(price.subtotal, 5867.0);
        assert_eq!(price.vat, 1232.0);
        assert_eq!(price.total, 7099.0);
    }

    #[test]
    fn test_carport_options_and_roof_type() {
        let carport = CarportConfiguration {
            roof_type: RoofType::MonoSlope,
            roof_pitch: 0.0,
            gutters: GutterType::None,
            lighting: LightingType::Pendant,
            side_panel: SidePanel::Both,
            storage_area: true,
            ..CarportConfiguration::default()
        };
        let price = calculate_price(&Configuration::Carport(carport), &context());
        // 907.2 x 1.1
        assert_eq!(price.line("roofing"), Some(998.0));
        // 2 pendants x 120 + 2 x 5 x 2.3 m² x 95 + 800
        assert_eq!(price.line("options"), Some(3225.0));
    }

    #[test]
    fn test_default_veranda_price() {
        // 4 x 3, mono 5°, overhang 0.2, polycarbonate, PVC, post 100, brackets
        let price = calculate_price(
            &Configuration::Veranda(VerandaConfiguration::default()),
            &context(),
        );
        // 12 m² x 160 + 200
        assert_eq!(price.line("structure"), Some(2120.0));
        assert_eq!(price.line("glazing"), Some(0.0));
        // 4 m x 25
        assert_eq!(price.line("options"), Some(100.0));
        assert_eq!(price.line("installation"), Some(1680.0));
        assert_eq!(price.range.variance, 0.15);
    }

    #[test]
    fn test_veranda_glazing_and_extras() {
        let veranda = VerandaConfiguration {
            glass_type: GlassType::FixedGlass,
            glass_sides: GlassSides::Front,
            gutters: GutterType::None,
            heater: true,
            motorized_awning: true,
            ..VerandaConfiguration::default()
        };
        let price = calculate_price(
            &Configuration::Veranda(veranda),
            &context().with_installation(false),
        );
        // 4.0 x 2.5 m² x 200
        assert_eq!(price.line("glazing"), Some(2000.0));
        // 1 heater x 400 + 800 + 4 x 50
        assert_eq!(price.line("options"), Some(1400.0));
        assert_eq!(price.line("installation"), Some(0.0));
    }
}
