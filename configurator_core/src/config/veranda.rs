//! Veranda configuration: a canopy fixed to the house wall at the back and
//! carried by posts along the front edge.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{CanopyRoofMaterial, Footing, GutterType, LightingType, RalColor, RoofType};

/// Glazing or infill for the open sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlassType {
    #[default]
    None,
    SlidingGlass,
    FixedGlass,
    Polycarbonate,
}

impl GlassType {
    pub fn is_selected(&self) -> bool {
        !matches!(self, GlassType::None)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GlassType::None => "Geen beglazing",
            GlassType::SlidingGlass => "Schuifbare glazen wanden",
            GlassType::FixedGlass => "Vaste beglazing",
            GlassType::Polycarbonate => "Polycarbonaat panelen",
        }
    }
}

/// Which open sides receive glazing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlassSides {
    #[default]
    None,
    Left,
    Right,
    Both,
    Front,
}

/// How the back edge attaches to the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallAttachment {
    /// Individual wall brackets, one per meter
    #[default]
    Bracket,
    /// One continuous ledger board
    LedgerBoard,
}

impl WallAttachment {
    pub fn display_name(&self) -> &'static str {
        match self {
            WallAttachment::Bracket => "Wandbeugels",
            WallAttachment::LedgerBoard => "Muurplaat",
        }
    }
}

/// Input record for a veranda.
///
/// `depth` is the projection from the wall. Dimensions in meters, pitch in
/// degrees, post size and rafter spacing in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerandaConfiguration {
    /// Width along the wall (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub width: f64,

    /// Projection from the wall (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub depth: f64,

    /// Clearance at the front edge (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub height: f64,

    pub roof_type: RoofType,

    /// Roof fall (degrees)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub roof_pitch: f64,

    pub roof_material: CanopyRoofMaterial,

    /// Overhang past the front beam (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub roof_overhang: f64,

    /// Square post cross-section (mm): 80, 100 or 120
    pub post_size: u32,

    /// Center-to-center rafter spacing (mm): 400, 500 or 600
    pub rafter_spacing: u32,

    pub ral_color: RalColor,

    /// RAL code when `ral_color` is `custom`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_ral: Option<String>,

    pub glass_type: GlassType,
    pub glass_sides: GlassSides,
    pub footing: Footing,
    pub gutters: GutterType,
    pub lighting: LightingType,

    /// Infrared patio heater(s)
    pub heater: bool,

    /// Retractable sun screen along the front
    pub motorized_awning: bool,

    pub wall_attachment: WallAttachment,
}

impl VerandaConfiguration {
    /// Whether glazing is selected and placed on at least one side
    pub fn has_glazing(&self) -> bool {
        self.glass_type.is_selected() && self.glass_sides != GlassSides::None
    }
}

impl Default for VerandaConfiguration {
    fn default() -> Self {
        VerandaConfiguration {
            width: 4.0,
            depth: 3.0,
            height: 2.5,
            roof_type: RoofType::MonoSlope,
            roof_pitch: 5.0,
            roof_material: CanopyRoofMaterial::Polycarbonate,
            roof_overhang: 0.2,
            post_size: 100,
            rafter_spacing: 600,
            ral_color: RalColor::Ral7016,
            custom_ral: None,
            glass_type: GlassType::None,
            glass_sides: GlassSides::None,
            footing: Footing::ConcreteBolted,
            gutters: GutterType::StandardPvc,
            lighting: LightingType::None,
            heater: false,
            motorized_awning: false,
            wall_attachment: WallAttachment::Bracket,
        }
    }
}
