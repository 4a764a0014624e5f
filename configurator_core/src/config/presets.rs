//! Named starter configurations.
//!
//! Presets are read-only. [`preset_by_name`] hands out an owned clone, so
//! editing the returned configuration never touches the table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{
    CanopyRoofMaterial, CarportConfiguration, Configuration, FloorMaterial, Footing, GlassSides,
    GlassType, GutterType, LightingType, ProductType, RalColor, RoofType, ShedConfiguration,
    ShedRoofMaterial, ShedType, VerandaConfiguration, WallAttachment, WallMaterial,
};

/// A named, pre-filled configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub config: Configuration,
}

impl Preset {
    fn new(name: &str, description: &str, config: impl Into<Configuration>) -> Self {
        Preset {
            name: name.to_string(),
            description: description.to_string(),
            config: config.into(),
        }
    }

    pub fn product_type(&self) -> ProductType {
        self.config.product_type()
    }
}

static PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset::new(
            "Tuinberging Compact",
            "Kleine berging voor tuingereedschap • 2.5×3m • Plat dak",
            ShedConfiguration {
                shed_type: ShedType::StorageShed,
                width: 2.5,
                length: 3.0,
                wall_height: 2.2,
                roof_type: RoofType::Flat,
                roof_pitch: 0.0,
                door_count: 1,
                door_width: 0.9,
                door_height: 2.0,
                window_count: 0,
                window_width: 0.6,
                window_height: 0.6,
                wall_material: WallMaterial::Timber,
                roof_material: ShedRoofMaterial::MetalSheet,
                floor_material: FloorMaterial::Concrete,
                include_floor: true,
            },
        ),
        Preset::new(
            "Tuinhuis Standaard",
            "Veelzijdig tuinhuis met ramen • 3.5×4m • Zadeldak",
            ShedConfiguration {
                window_count: 3,
                ..ShedConfiguration::default()
            },
        ),
        Preset::new(
            "Atelier met Licht",
            "Werkplaats met veel licht • 4×6m • Lessenaarsdak",
            ShedConfiguration {
                shed_type: ShedType::Workshop,
                width: 4.0,
                length: 6.0,
                wall_height: 2.6,
                roof_type: RoofType::MonoSlope,
                roof_pitch: 20.0,
                window_count: 6,
                window_width: 1.2,
                window_height: 1.2,
                roof_material: ShedRoofMaterial::MetalSheet,
                ..ShedConfiguration::default()
            },
        ),
        Preset::new(
            "Grote Schuur",
            "Royale schuur voor opslag • 6×8m • Zadeldak",
            ShedConfiguration {
                shed_type: ShedType::Barn,
                width: 6.0,
                length: 8.0,
                wall_height: 2.8,
                roof_type: RoofType::Gabled,
                roof_pitch: 30.0,
                door_count: 2,
                door_width: 2.4,
                door_height: 2.4,
                window_count: 4,
                window_width: 1.2,
                window_height: 1.0,
                wall_material: WallMaterial::Metal,
                roof_material: ShedRoofMaterial::MetalSheet,
                floor_material: FloorMaterial::Concrete,
                include_floor: true,
            },
        ),
        Preset::new(
            "Workshop Premium",
            "Luxe atelier met composiet afwerking • 5×7m",
            ShedConfiguration {
                shed_type: ShedType::Workshop,
                width: 5.0,
                length: 7.0,
                wall_height: 2.8,
                roof_pitch: 28.0,
                door_count: 2,
                window_count: 8,
                window_width: 1.2,
                window_height: 1.2,
                wall_material: WallMaterial::Composite,
                ..ShedConfiguration::default()
            },
        ),
        Preset::new(
            "Carport Enkel",
            "Enkele carport voor één auto • 3×5m • Plat dak",
            CarportConfiguration::default(),
        ),
        Preset::new(
            "Carport Dubbel",
            "Dubbele carport met lessenaarsdak en verlichting • 5.5×5.5m",
            CarportConfiguration {
                width: 5.5,
                depth: 5.5,
                height: 2.4,
                roof_type: RoofType::MonoSlope,
                roof_pitch: 5.0,
                roof_material: CanopyRoofMaterial::SteelSheet,
                post_size: 120,
                beam_size: 150,
                ral_color: RalColor::Ral9005,
                gutters: GutterType::AluminumSeamless,
                lighting: LightingType::LedStrip,
                ..CarportConfiguration::default()
            },
        ),
        Preset::new(
            "Veranda Compact",
            "Compacte veranda tegen de gevel • 3.5×2.5m",
            VerandaConfiguration {
                width: 3.5,
                depth: 2.5,
                ..VerandaConfiguration::default()
            },
        ),
        Preset::new(
            "Veranda Luxe",
            "Glazen veranda met schuifwanden, verwarming en zonwering • 6×4m",
            VerandaConfiguration {
                width: 6.0,
                depth: 4.0,
                height: 2.7,
                roof_pitch: 8.0,
                roof_material: CanopyRoofMaterial::Glass,
                post_size: 120,
                rafter_spacing: 500,
                glass_type: GlassType::SlidingGlass,
                glass_sides: GlassSides::Both,
                footing: Footing::FoundationEmbedded,
                gutters: GutterType::AluminumSeamless,
                lighting: LightingType::RecessedSpots,
                heater: true,
                motorized_awning: true,
                wall_attachment: WallAttachment::LedgerBoard,
                ..VerandaConfiguration::default()
            },
        ),
    ]
});

/// All presets, sheds first
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by name (case-insensitive). `None` when unknown.
pub fn preset_by_name(name: &str) -> Option<Preset> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
        .cloned()
}

pub fn presets_for(product_type: ProductType) -> Vec<&'static Preset> {
    PRESETS
        .iter()
        .filter(|preset| preset.product_type() == product_type)
        .collect()
}

pub fn presets_for_shed_type(shed_type: ShedType) -> Vec<&'static Preset> {
    PRESETS
        .iter()
        .filter(|preset| matches!(&preset.config, Configuration::Shed(c) if c.shed_type == shed_type))
        .collect()
}

/// Starting configuration for a product
pub fn default_configuration(product_type: ProductType) -> Configuration {
    match product_type {
        ProductType::Shed => ShedConfiguration::default().into(),
        ProductType::Carport => CarportConfiguration::default().into(),
        ProductType::Veranda => VerandaConfiguration::default().into(),
    }
}
