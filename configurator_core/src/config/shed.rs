//! Shed configuration: storage sheds, garden houses, barns and workshops.
//!
//! A shed is a closed timber-frame box with walls, doors and windows. The
//! shed type selects the restriction table (see
//! [`restrictions`](super::restrictions)).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lenient;
use super::RoofType;
use crate::errors::{EngineError, EngineResult};

/// Shed variant. Serialized with the Dutch catalogue codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ShedType {
    /// Compact storage shed
    #[serde(rename = "berging")]
    StorageShed,
    /// Medium garden house
    #[default]
    #[serde(rename = "tuinhuis")]
    GardenHouse,
    /// Large barn
    #[serde(rename = "schuur")]
    Barn,
    /// Workshop with lots of daylight
    #[serde(rename = "atelier")]
    Workshop,
}

impl ShedType {
    pub const ALL: [ShedType; 4] = [
        ShedType::StorageShed,
        ShedType::GardenHouse,
        ShedType::Barn,
        ShedType::Workshop,
    ];

    /// Catalogue code (e.g., "berging")
    pub fn code(&self) -> &'static str {
        match self {
            ShedType::StorageShed => "berging",
            ShedType::GardenHouse => "tuinhuis",
            ShedType::Barn => "schuur",
            ShedType::Workshop => "atelier",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShedType::StorageShed => "Berging",
            ShedType::GardenHouse => "Tuinhuis",
            ShedType::Barn => "Schuur",
            ShedType::Workshop => "Atelier",
        }
    }
}

impl fmt::Display for ShedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ShedType {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "berging" | "storage" | "storage-shed" => Ok(ShedType::StorageShed),
            "tuinhuis" | "garden-house" => Ok(ShedType::GardenHouse),
            "schuur" | "barn" => Ok(ShedType::Barn),
            "atelier" | "workshop" => Ok(ShedType::Workshop),
            _ => Err(EngineError::unknown_product(s)),
        }
    }
}

/// Wall cladding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallMaterial {
    #[default]
    Timber,
    Metal,
    Composite,
}

impl WallMaterial {
    pub const ALL: [WallMaterial; 3] = [WallMaterial::Timber, WallMaterial::Metal, WallMaterial::Composite];

    pub fn code(&self) -> &'static str {
        match self {
            WallMaterial::Timber => "timber",
            WallMaterial::Metal => "metal",
            WallMaterial::Composite => "composite",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WallMaterial::Timber => "Houtskeletbouw",
            WallMaterial::Metal => "Metalen panelen",
            WallMaterial::Composite => "Composiet",
        }
    }
}

/// Roof covering for sheds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShedRoofMaterial {
    #[default]
    Tiles,
    MetalSheet,
    GreenRoof,
    Bitumen,
}

impl ShedRoofMaterial {
    pub const ALL: [ShedRoofMaterial; 4] = [
        ShedRoofMaterial::Tiles,
        ShedRoofMaterial::MetalSheet,
        ShedRoofMaterial::GreenRoof,
        ShedRoofMaterial::Bitumen,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ShedRoofMaterial::Tiles => "tiles",
            ShedRoofMaterial::MetalSheet => "metal-sheet",
            ShedRoofMaterial::GreenRoof => "green-roof",
            ShedRoofMaterial::Bitumen => "bitumen",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShedRoofMaterial::Tiles => "Dakpannen",
            ShedRoofMaterial::MetalSheet => "Metalen dakplaten",
            ShedRoofMaterial::GreenRoof => "Groen dak",
            ShedRoofMaterial::Bitumen => "Bitumen dakbedekking",
        }
    }
}

/// Floor finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorMaterial {
    #[default]
    Timber,
    Concrete,
    Tiles,
}

impl FloorMaterial {
    pub const ALL: [FloorMaterial; 3] = [FloorMaterial::Timber, FloorMaterial::Concrete, FloorMaterial::Tiles];

    pub fn code(&self) -> &'static str {
        match self {
            FloorMaterial::Timber => "timber",
            FloorMaterial::Concrete => "concrete",
            FloorMaterial::Tiles => "tiles",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FloorMaterial::Timber => "Houten vloer",
            FloorMaterial::Concrete => "Betonnen dekvloer",
            FloorMaterial::Tiles => "Tegelvloer",
        }
    }
}

/// Input record for a shed.
///
/// Dimensions in meters, roof pitch in degrees.
///
/// ## JSON Example
///
/// ```json
/// {
///   "product_type": "shed",
///   "shed_type": "tuinhuis",
///   "width": 3.5,
///   "length": 4.0,
///   "wall_height": 2.4,
///   "roof_type": "gabled",
///   "roof_pitch": 25.0,
///   "door_count": 1,
///   "door_width": 1.0,
///   "door_height": 2.1,
///   "window_count": 2,
///   "window_width": 1.0,
///   "window_height": 1.0,
///   "wall_material": "timber",
///   "roof_material": "tiles",
///   "floor_material": "timber",
///   "include_floor": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShedConfiguration {
    /// Shed variant; selects the restriction table
    pub shed_type: ShedType,

    /// Front width (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub width: f64,

    /// Side length (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub length: f64,

    /// Wall height to the eaves (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub wall_height: f64,

    pub roof_type: RoofType,

    /// Roof pitch (degrees); ignored for flat roofs
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub roof_pitch: f64,

    pub door_count: u32,

    /// Door width (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub door_width: f64,

    /// Door height (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub door_height: f64,

    pub window_count: u32,

    /// Window width (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub window_width: f64,

    /// Window height (m)
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub window_height: f64,

    pub wall_material: WallMaterial,
    pub roof_material: ShedRoofMaterial,
    pub floor_material: FloorMaterial,

    /// Whether a finished floor is part of the build
    pub include_floor: bool,
}

impl ShedConfiguration {
    /// Floor area of the footprint (m²)
    pub fn footprint_area(&self) -> f64 {
        self.width * self.length
    }

    /// Total glazed area of all windows (m²)
    pub fn window_area(&self) -> f64 {
        f64::from(self.window_count) * self.window_width * self.window_height
    }

    /// Total area of all doors (m²)
    pub fn door_area(&self) -> f64 {
        f64::from(self.door_count) * self.door_width * self.door_height
    }
}

impl Default for ShedConfiguration {
    fn default() -> Self {
        ShedConfiguration {
            shed_type: ShedType::GardenHouse,
            width: 3.5,
            length: 4.0,
            wall_height: 2.4,
            roof_type: RoofType::Gabled,
            roof_pitch: 25.0,
            door_count: 1,
            door_width: 1.0,
            door_height: 2.1,
            window_count: 2,
            window_width: 1.0,
            window_height: 1.0,
            wall_material: WallMaterial::Timber,
            roof_material: ShedRoofMaterial::Tiles,
            floor_material: FloorMaterial::Timber,
            include_floor: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shed_type_codes() {
        assert_eq!(serde_json::to_string(&ShedType::StorageShed).unwrap(), "\"berging\"");
        assert_eq!("Workshop".parse::<ShedType>().unwrap(), ShedType::Workshop);
        assert_eq!("schuur".parse::<ShedType>().unwrap(), ShedType::Barn);
        assert!("castle".parse::<ShedType>().is_err());
    }

    #[test]
    fn test_opening_areas() {
        let shed = ShedConfiguration {
            width: 4.0,
            length: 5.0,
            ..ShedConfiguration::default()
        };
        assert_eq!(shed.footprint_area(), 20.0);
        assert_eq!(shed.window_area(), 2.0);
        assert_eq!(shed.door_area(), 2.1);

        let two_doors = ShedConfiguration { door_count: 2, ..shed };
        assert_eq!(two_doors.door_area(), 4.2);
    }

    #[test]
    fn test_partial_json_uses_defaults_for_choices() {
        let shed: ShedConfiguration =
            serde_json::from_str(r#"{ "width": 3.0, "roof_type": "mono-slope" }"#).unwrap();
        assert_eq!(shed.roof_type, RoofType::MonoSlope);
        assert_eq!(shed.shed_type, ShedType::GardenHouse);
        assert!(shed.length.is_nan());
    }
}
