//! Carport configuration: a free-standing aluminium canopy.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{CanopyRoofMaterial, Footing, GutterType, LightingType, RalColor, RoofType};

/// Closed side walls for wind protection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidePanel {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl SidePanel {
    /// Number of closed side walls
    pub fn side_count(&self) -> u32 {
        match self {
            SidePanel::None => 0,
            SidePanel::Left | SidePanel::Right => 1,
            SidePanel::Both => 2,
        }
    }
}

/// Input record for a carport.
///
/// Dimensions in meters, pitch in degrees, profile sizes in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarportConfiguration {
    /// Width across the driveway (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub width: f64,

    /// Depth along the car (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub depth: f64,

    /// Clearance height (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub height: f64,

    pub roof_type: RoofType,

    /// Roof pitch (degrees)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub roof_pitch: f64,

    pub roof_material: CanopyRoofMaterial,

    /// Overhang on every side (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub roof_overhang: f64,

    /// Square post cross-section (mm): 100, 120 or 150
    pub post_size: u32,

    /// Square beam cross-section (mm): 120, 150 or 200
    pub beam_size: u32,

    pub ral_color: RalColor,

    /// RAL code when `ral_color` is `custom`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_ral: Option<String>,

    pub footing: Footing,
    pub gutters: GutterType,
    pub lighting: LightingType,
    pub side_panel: SidePanel,

    /// Closed storage compartment at the back
    pub storage_area: bool,
}

impl Default for CarportConfiguration {
    fn default() -> Self {
        CarportConfiguration {
            width: 3.0,
            depth: 5.0,
            height: 2.3,
            roof_type: RoofType::Flat,
            roof_pitch: 3.0,
            roof_material: CanopyRoofMaterial::Polycarbonate,
            roof_overhang: 0.3,
            post_size: 100,
            beam_size: 150,
            ral_color: RalColor::Ral7016,
            custom_ral: None,
            footing: Footing::ConcreteBolted,
            gutters: GutterType::StandardPvc,
            lighting: LightingType::None,
            side_panel: SidePanel::None,
            storage_area: false,
        }
    }
}
