//! # Product Restrictions
//!
//! Static min/max tables per product. Sheds have one table per shed type;
//! carports and verandas have a single table each.
//!
//! For sheds every band is hard: leaving it is a validation error. For the
//! canopies the lower bounds are hard and the upper bounds are advisory (a
//! warning), matching what the suppliers will still build on request.
//!
//! ```rust
//! use configurator_core::config::{restrictions, ProductKind, ShedType};
//!
//! let storage = restrictions(ProductKind::Shed(ShedType::StorageShed));
//! assert_eq!(storage.width.min, 2.0);
//! assert_eq!(storage.width.max, 4.0);
//! assert!(storage.width.contains(3.0));
//! ```

use std::fmt;

use serde::Serialize;

use super::{RoofType, ShedType};

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Band { min, max }
    }

    /// Whether `value` lies in the band. `NaN` is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Inclusive count range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountBand {
    pub min: u32,
    pub max: u32,
}

impl CountBand {
    pub const fn new(min: u32, max: u32) -> Self {
        CountBand { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Suggested door or window size for a shed type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpeningSize {
    pub width: f64,
    pub height: f64,
}

/// Restriction key: sheds are split by shed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Shed(ShedType),
    Carport,
    Veranda,
}

impl ProductKind {
    pub fn code(&self) -> &'static str {
        match self {
            ProductKind::Shed(shed_type) => shed_type.code(),
            ProductKind::Carport => "carport",
            ProductKind::Veranda => "veranda",
        }
    }

    /// Resolve a table key; unknown keys give `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "carport" => Some(ProductKind::Carport),
            "veranda" | "overkapping" => Some(ProductKind::Veranda),
            other => other.parse::<ShedType>().ok().map(ProductKind::Shed),
        }
    }
}

/// Legal ranges for one product (kind).
///
/// `depth` is the shed length or the canopy depth; `height` is the shed wall
/// height or the canopy clearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restrictions {
    pub code: &'static str,
    pub width: Band,
    pub depth: Band,
    pub height: Band,
    /// Pitch band for pitched roofs (degrees)
    pub roof_pitch: Band,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhang: Option<Band>,
    pub allowed_roof_types: &'static [RoofType],
    /// Standard post sections (mm)
    #[serde(skip_serializing_if = "no_entries")]
    pub post_sizes: &'static [u32],
    /// Standard beam sections (mm)
    #[serde(skip_serializing_if = "no_entries")]
    pub beam_sizes: &'static [u32],
    /// Standard rafter spacings (mm)
    #[serde(skip_serializing_if = "no_entries")]
    pub rafter_spacings: &'static [u32],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_count: Option<CountBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_count: Option<CountBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_door: Option<OpeningSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_window: Option<OpeningSize>,
}

fn no_entries(table: &&'static [u32]) -> bool {
    table.is_empty()
}

impl Restrictions {
    pub fn allows_roof(&self, roof_type: RoofType) -> bool {
        self.allowed_roof_types.contains(&roof_type)
    }
}

// ============================================================================
// Tables
// ============================================================================

const SHED_PITCH: Band = Band::new(15.0, 45.0);

static STORAGE_SHED: Restrictions = Restrictions {
    code: "berging",
    width: Band::new(2.0, 4.0),
    depth: Band::new(2.0, 4.0),
    height: Band::new(2.0, 2.5),
    roof_pitch: SHED_PITCH,
    overhang: None,
    allowed_roof_types: &[RoofType::Flat, RoofType::MonoSlope],
    post_sizes: &[],
    beam_sizes: &[],
    rafter_spacings: &[],
    door_count: Some(CountBand::new(1, 1)),
    window_count: Some(CountBand::new(0, 2)),
    default_door: Some(OpeningSize { width: 0.9, height: 2.0 }),
    default_window: Some(OpeningSize { width: 0.6, height: 0.6 }),
};

static GARDEN_HOUSE: Restrictions = Restrictions {
    code: "tuinhuis",
    width: Band::new(2.5, 6.0),
    depth: Band::new(3.0, 6.0),
    height: Band::new(2.2, 2.8),
    roof_pitch: SHED_PITCH,
    overhang: None,
    allowed_roof_types: &[RoofType::Flat, RoofType::Gabled, RoofType::MonoSlope],
    post_sizes: &[],
    beam_sizes: &[],
    rafter_spacings: &[],
    door_count: Some(CountBand::new(1, 2)),
    window_count: Some(CountBand::new(1, 6)),
    default_door: Some(OpeningSize { width: 1.0, height: 2.1 }),
    default_window: Some(OpeningSize { width: 1.0, height: 1.0 }),
};

static BARN: Restrictions = Restrictions {
    code: "schuur",
    width: Band::new(4.0, 10.0),
    depth: Band::new(4.0, 10.0),
    height: Band::new(2.5, 3.0),
    roof_pitch: SHED_PITCH,
    overhang: None,
    allowed_roof_types: &[RoofType::Gabled, RoofType::MonoSlope],
    post_sizes: &[],
    beam_sizes: &[],
    rafter_spacings: &[],
    door_count: Some(CountBand::new(1, 4)),
    window_count: Some(CountBand::new(0, 8)),
    default_door: Some(OpeningSize { width: 2.4, height: 2.4 }),
    default_window: Some(OpeningSize { width: 1.2, height: 1.0 }),
};

static WORKSHOP: Restrictions = Restrictions {
    code: "atelier",
    width: Band::new(3.0, 8.0),
    depth: Band::new(4.0, 8.0),
    height: Band::new(2.4, 3.0),
    roof_pitch: SHED_PITCH,
    overhang: None,
    allowed_roof_types: &[RoofType::Flat, RoofType::Gabled, RoofType::MonoSlope],
    post_sizes: &[],
    beam_sizes: &[],
    rafter_spacings: &[],
    door_count: Some(CountBand::new(1, 2)),
    window_count: Some(CountBand::new(2, 8)),
    default_door: Some(OpeningSize { width: 1.0, height: 2.1 }),
    default_window: Some(OpeningSize { width: 1.2, height: 1.2 }),
};

static CARPORT: Restrictions = Restrictions {
    code: "carport",
    width: Band::new(2.5, 6.0),
    depth: Band::new(4.0, 7.0),
    height: Band::new(2.1, 3.0),
    roof_pitch: Band::new(2.0, 15.0),
    overhang: Some(Band::new(0.2, 0.5)),
    allowed_roof_types: &[RoofType::Flat, RoofType::Gabled, RoofType::MonoSlope],
    post_sizes: &[100, 120, 150],
    beam_sizes: &[120, 150, 200],
    rafter_spacings: &[],
    door_count: None,
    window_count: None,
    default_door: None,
    default_window: None,
};

static VERANDA: Restrictions = Restrictions {
    code: "veranda",
    width: Band::new(3.0, 10.0),
    depth: Band::new(2.5, 5.0),
    height: Band::new(2.2, 3.5),
    roof_pitch: Band::new(2.0, 10.0),
    overhang: Some(Band::new(0.1, 0.3)),
    allowed_roof_types: &[RoofType::Flat, RoofType::MonoSlope],
    post_sizes: &[80, 100, 120],
    beam_sizes: &[],
    rafter_spacings: &[400, 500, 600],
    door_count: None,
    window_count: None,
    default_door: None,
    default_window: None,
};

/// Restriction table for a product kind. Never fails.
pub fn restrictions(kind: ProductKind) -> &'static Restrictions {
    match kind {
        ProductKind::Shed(ShedType::StorageShed) => &STORAGE_SHED,
        ProductKind::Shed(ShedType::GardenHouse) => &GARDEN_HOUSE,
        ProductKind::Shed(ShedType::Barn) => &BARN,
        ProductKind::Shed(ShedType::Workshop) => &WORKSHOP,
        ProductKind::Carport => &CARPORT,
        ProductKind::Veranda => &VERANDA,
    }
}

/// Restriction table by string key (`"berging"`, `"carport"`, ...).
pub fn restrictions_by_code(code: &str) -> Option<&'static Restrictions> {
    ProductKind::from_code(code).map(restrictions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_contains() {
        let band = Band::new(2.0, 4.0);
        assert!(band.contains(2.0));
        assert!(band.contains(4.0));
        assert!(!band.contains(4.01));
        assert!(!band.contains(f64::NAN));
    }

    #[test]
    fn test_shed_tables_differ_per_type() {
        let storage = restrictions(ProductKind::Shed(ShedType::StorageShed));
        let workshop = restrictions(ProductKind::Shed(ShedType::Workshop));
        assert_eq!((storage.width.min, storage.width.max), (2.0, 4.0));
        assert_eq!((workshop.width.min, workshop.width.max), (3.0, 8.0));
        assert!(!storage.allows_roof(RoofType::Gabled));
        assert!(workshop.allows_roof(RoofType::Gabled));
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(restrictions_by_code("schuur").unwrap().code, "schuur");
        assert_eq!(restrictions_by_code(" Carport ").unwrap().code, "carport");
        assert!(restrictions_by_code("boathouse").is_none());
    }

    #[test]
    fn test_every_kind_has_its_own_code() {
        for shed_type in ShedType::ALL {
            let kind = ProductKind::Shed(shed_type);
            assert_eq!(restrictions(kind).code, kind.code());
        }
        assert_eq!(restrictions(ProductKind::Veranda).code, "veranda");
    }

    #[test]
    fn test_serializes_without_empty_tables() {
        let json = serde_json::to_string(restrictions(ProductKind::Carport)).unwrap();
        assert!(json.contains("\"post_sizes\":[100,120,150]"));
        assert!(!json.contains("rafter_spacings"));
        assert!(!json.contains("door_count"));
    }
}
