//! # Configuration Model
//!
//! Per-product input records plus the enums they share. A configuration is a
//! plain value owned by the caller; the engine only ever reads it.
//!
//! ## Structure
//!
//! ```text
//! Configuration (tagged by "product_type")
//! ├── Shed(ShedConfiguration)       storage shed, garden house, barn, workshop
//! ├── Carport(CarportConfiguration) free-standing canopy on 4-8 posts
//! └── Veranda(VerandaConfiguration) wall-mounted canopy, posts on the front edge
//! ```
//!
//! ## JSON Example
//!
//! ```rust
//! use configurator_core::config::{Configuration, ProductType};
//!
//! let json = r#"{ "product_type": "carport", "width": 3.0, "depth": 5.0 }"#;
//! let config = Configuration::from_json(json).unwrap();
//! assert_eq!(config.product_type(), ProductType::Carport);
//! ```

pub mod carport;
pub mod lenient;
pub mod presets;
pub mod restrictions;
pub mod shed;
pub mod veranda;

pub use carport::{CarportConfiguration, SidePanel};
pub use presets::{
    default_configuration, preset_by_name, presets, presets_for, presets_for_shed_type, Preset,
};
pub use restrictions::{restrictions, restrictions_by_code, Band, ProductKind, Restrictions};
pub use shed::{FloorMaterial, ShedConfiguration, ShedRoofMaterial, ShedType, WallMaterial};
pub use veranda::{GlassSides, GlassType, VerandaConfiguration, WallAttachment};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// The three product verticals the engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Shed,
    Carport,
    Veranda,
}

impl ProductType {
    /// All product types for UI selection
    pub const ALL: [ProductType; 3] = [ProductType::Shed, ProductType::Carport, ProductType::Veranda];

    /// Code used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Shed => "shed",
            ProductType::Carport => "carport",
            ProductType::Veranda => "veranda",
        }
    }

    /// Dutch display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Shed => "Tuinhuis / berging",
            ProductType::Carport => "Carport",
            ProductType::Veranda => "Veranda",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ProductType {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "shed" | "schuur" | "tuinhuis" | "berging" => Ok(ProductType::Shed),
            "carport" => Ok(ProductType::Carport),
            "veranda" | "overkapping" => Ok(ProductType::Veranda),
            _ => Err(EngineError::unknown_product(s)),
        }
    }
}

/// Roof shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoofType {
    #[default]
    Flat,
    Gabled,
    MonoSlope,
}

impl RoofType {
    pub const ALL: [RoofType; 3] = [RoofType::Flat, RoofType::Gabled, RoofType::MonoSlope];

    pub fn code(&self) -> &'static str {
        match self {
            RoofType::Flat => "flat",
            RoofType::Gabled => "gabled",
            RoofType::MonoSlope => "mono-slope",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoofType::Flat => "Plat dak",
            RoofType::Gabled => "Zadeldak",
            RoofType::MonoSlope => "Lessenaarsdak",
        }
    }

    /// Whether the roof surface is inclined (gabled or mono-slope)
    pub fn is_pitched(&self) -> bool {
        !matches!(self, RoofType::Flat)
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Powder-coat finish colour (RAL code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RalColor {
    /// Anthracite grey
    #[default]
    #[serde(rename = "RAL-7016")]
    Ral7016,
    /// Jet black
    #[serde(rename = "RAL-9005")]
    Ral9005,
    /// Pure white
    #[serde(rename = "RAL-9010")]
    Ral9010,
    /// Light grey
    #[serde(rename = "RAL-7035")]
    Ral7035,
    /// White aluminium
    #[serde(rename = "RAL-9006")]
    Ral9006,
    /// Chocolate brown
    #[serde(rename = "RAL-8017")]
    Ral8017,
    /// Customer-supplied RAL code (see `custom_ral`)
    #[serde(rename = "custom")]
    Custom,
}

impl RalColor {
    pub fn code(&self) -> &'static str {
        match self {
            RalColor::Ral7016 => "RAL-7016",
            RalColor::Ral9005 => "RAL-9005",
            RalColor::Ral9010 => "RAL-9010",
            RalColor::Ral7035 => "RAL-7035",
            RalColor::Ral9006 => "RAL-9006",
            RalColor::Ral8017 => "RAL-8017",
            RalColor::Custom => "custom",
        }
    }

    /// Code to print on a parts list, resolving `Custom` through the
    /// customer-supplied code when there is one.
    pub fn finish_code(&self, custom: Option<&str>) -> String {
        match (self, custom) {
            (RalColor::Custom, Some(code)) if !code.trim().is_empty() => code.trim().to_string(),
            (RalColor::Custom, _) => "op maat".to_string(),
            (color, _) => color.code().to_string(),
        }
    }
}

/// How the posts are anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Footing {
    #[default]
    SurfaceMount,
    ConcreteBolted,
    FoundationEmbedded,
}

impl Footing {
    pub fn code(&self) -> &'static str {
        match self {
            Footing::SurfaceMount => "surface-mount",
            Footing::ConcreteBolted => "concrete-bolted",
            Footing::FoundationEmbedded => "foundation-embedded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Footing::SurfaceMount => "Opbouwmontage op bestaande verharding",
            Footing::ConcreteBolted => "Betonpoer met ankerbouten",
            Footing::FoundationEmbedded => "Ingestort in fundering",
        }
    }
}

/// Rain gutter option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GutterType {
    #[default]
    None,
    StandardPvc,
    AluminumSeamless,
}

impl GutterType {
    pub fn is_selected(&self) -> bool {
        !matches!(self, GutterType::None)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GutterType::None => "Geen goot",
            GutterType::StandardPvc => "PVC dakgoot",
            GutterType::AluminumSeamless => "Aluminium naadloze goot",
        }
    }
}

/// Lighting option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightingType {
    #[default]
    None,
    LedStrip,
    RecessedSpots,
    Pendant,
}

impl LightingType {
    pub fn is_selected(&self) -> bool {
        !matches!(self, LightingType::None)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LightingType::None => "Geen verlichting",
            LightingType::LedStrip => "LED strip verlichting",
            LightingType::RecessedSpots => "Inbouw LED spots",
            LightingType::Pendant => "Hangende LED verlichting",
        }
    }

    /// Number of fittings for a canopy of the given size.
    ///
    /// Strips run every 2 m of width, spots cover 4 m² each and pendants
    /// hang every 3 m of width with a minimum of two.
    pub fn fixture_count(&self, width: f64, depth: f64) -> u32 {
        match self {
            LightingType::None => 0,
            LightingType::LedStrip => (width / 2.0).ceil() as u32,
            LightingType::RecessedSpots => ((width * depth) / 4.0).ceil() as u32,
            LightingType::Pendant => ((width / 3.0).ceil() as u32).max(2),
        }
    }
}

/// Roof covering for carports and verandas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanopyRoofMaterial {
    #[default]
    Polycarbonate,
    SteelSheet,
    AluminumPanels,
    Glass,
}

impl CanopyRoofMaterial {
    pub const ALL: [CanopyRoofMaterial; 4] = [
        CanopyRoofMaterial::Polycarbonate,
        CanopyRoofMaterial::SteelSheet,
        CanopyRoofMaterial::AluminumPanels,
        CanopyRoofMaterial::Glass,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CanopyRoofMaterial::Polycarbonate => "polycarbonate",
            CanopyRoofMaterial::SteelSheet => "steel-sheet",
            CanopyRoofMaterial::AluminumPanels => "aluminum-panels",
            CanopyRoofMaterial::Glass => "glass",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CanopyRoofMaterial::Polycarbonate => "Polycarbonaat",
            CanopyRoofMaterial::SteelSheet => "Stalen dakplaten",
            CanopyRoofMaterial::AluminumPanels => "Aluminium dakpanelen",
            CanopyRoofMaterial::Glass => "Gehard glas",
        }
    }
}

/// A product configuration for exactly one product type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "product_type", rename_all = "kebab-case")]
pub enum Configuration {
    Shed(ShedConfiguration),
    Carport(CarportConfiguration),
    Veranda(VerandaConfiguration),
}

impl Configuration {
    /// Which product this configuration describes
    pub fn product_type(&self) -> ProductType {
        match self {
            Configuration::Shed(_) => ProductType::Shed,
            Configuration::Carport(_) => ProductType::Carport,
            Configuration::Veranda(_) => ProductType::Veranda,
        }
    }

    /// The restriction table that applies to this configuration
    pub fn restrictions(&self) -> &'static Restrictions {
        restrictions(self.kind())
    }

    /// Restriction key; sheds are split by shed type
    pub fn kind(&self) -> ProductKind {
        match self {
            Configuration::Shed(c) => ProductKind::Shed(c.shed_type),
            Configuration::Carport(_) => ProductKind::Carport,
            Configuration::Veranda(_) => ProductKind::Veranda,
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// Fields that are absent fall back to the product defaults, except
    /// numeric fields which become "not a number" and are then reported by
    /// the validator.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<ShedConfiguration> for Configuration {
    fn from(config: ShedConfiguration) -> Self {
        Configuration::Shed(config)
    }
}

impl From<CarportConfiguration> for Configuration {
    fn from(config: CarportConfiguration) -> Self {
        Configuration::Carport(config)
    }
}

impl From<VerandaConfiguration> for Configuration {
    fn from(config: VerandaConfiguration) -> Self {
        Configuration::Veranda(config)
    }
}
