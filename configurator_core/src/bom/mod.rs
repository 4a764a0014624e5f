//! # Bill of Materials
//!
//! Maps a configuration and its full-precision geometry to a flat,
//! categorized parts list. Generation never fails and never consults the
//! validator: an out-of-range configuration still gets a provisional list.
//!
//! Item ids are prefix sequences (`POST-001`, `ROOF-002`) handed out by
//! [`BomBuilder`], which also guarantees `total_items == items.len()`.
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::bom::generate_bom;
//! use configurator_core::config::{CarportConfiguration, Configuration, GutterType};
//!
//! let carport = CarportConfiguration { gutters: GutterType::None, ..Default::default() };
//! let bom = generate_bom(&Configuration::Carport(carport));
//! assert_eq!(bom.total_items, bom.items.len());
//! assert!(bom.find("GUTTER-001").is_none());
//! ```

pub mod canopy;
pub mod shed;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{Configuration, ProductType};
use crate::geometry::{derive_geometry, Geometry};
use crate::math::round_to;

/// Grouping used for display and for the text export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BomCategory {
    Foundation,
    Framing,
    Profile,
    Cladding,
    Roofing,
    Panel,
    Drainage,
    Lighting,
    Opening,
    Floor,
    Fixing,
    Accessory,
    Hardware,
}

impl BomCategory {
    pub fn code(&self) -> &'static str {
        match self {
            BomCategory::Foundation => "foundation",
            BomCategory::Framing => "framing",
            BomCategory::Profile => "profile",
            BomCategory::Cladding => "cladding",
            BomCategory::Roofing => "roofing",
            BomCategory::Panel => "panel",
            BomCategory::Drainage => "drainage",
            BomCategory::Lighting => "lighting",
            BomCategory::Opening => "opening",
            BomCategory::Floor => "floor",
            BomCategory::Fixing => "fixing",
            BomCategory::Accessory => "accessory",
            BomCategory::Hardware => "hardware",
        }
    }
}

impl fmt::Display for BomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unit a quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BomUnit {
    #[serde(rename = "pcs")]
    Pieces,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "m²")]
    SquareMeter,
    #[serde(rename = "m³")]
    CubicMeter,
    #[serde(rename = "set")]
    Set,
}

impl BomUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            BomUnit::Pieces => "pcs",
            BomUnit::Meter => "m",
            BomUnit::SquareMeter => "m²",
            BomUnit::CubicMeter => "m³",
            BomUnit::Set => "set",
        }
    }

    /// Decimals kept in a returned quantity
    fn decimals(&self) -> i32 {
        match self {
            BomUnit::Pieces | BomUnit::Set => 0,
            BomUnit::Meter | BomUnit::SquareMeter => 1,
            BomUnit::CubicMeter => 2,
        }
    }
}

impl fmt::Display for BomUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One line of the parts list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    /// Prefix sequence, e.g. `POST-001`
    pub id: String,
    pub category: BomCategory,
    pub name: String,
    pub description: String,
    pub quantity: f64,
    pub unit: BomUnit,
    /// Profile size and cut length, e.g. `100x100mm, L=2.8m`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// Complete parts list for one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    pub product_type: ProductType,
    pub items: Vec<BomItem>,
    /// Always `items.len()`
    pub total_items: usize,
    pub notes: Vec<String>,
}

impl Bom {
    /// Look up an item by id
    pub fn find(&self, id: &str) -> Option<&BomItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items_in(&self, category: BomCategory) -> impl Iterator<Item = &BomItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Categories in order of first appearance
    pub fn categories(&self) -> Vec<BomCategory> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates items and hands out per-prefix ids.
#[derive(Debug, Default)]
pub struct BomBuilder {
    items: Vec<BomItem>,
    sequences: BTreeMap<&'static str, u32>,
}

impl BomBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item; the quantity is rounded for its unit.
    ///
    /// Returns the new item so callers can attach dimensions.
    pub fn add(
        &mut self,
        prefix: &'static str,
        category: BomCategory,
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit: BomUnit,
    ) -> &mut BomItem {
        let sequence = self.sequences.entry(prefix).or_insert(0);
        *sequence += 1;
        let id = format!("{}-{:03}", prefix, sequence);

        self.items.push(BomItem {
            id,
            category,
            name: name.into(),
            description: description.into(),
            quantity: round_to(quantity, unit.decimals()),
            unit,
            dimensions: None,
        });
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Seal the list
    pub fn finish(self, product_type: ProductType, notes: Vec<String>) -> Bom {
        Bom {
            product_type,
            total_items: self.items.len(),
            items: self.items,
            notes,
        }
    }
}

impl BomItem {
    pub fn with_dimensions(&mut self, dimensions: impl Into<String>) -> &mut Self {
        self.dimensions = Some(dimensions.into());
        self
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Parts list from an already derived full-precision geometry
pub fn generate_bom_with(config: &Configuration, geometry: &Geometry) -> Bom {
    let bom = match config {
        Configuration::Shed(c) => shed::shed_bom(c, geometry),
        Configuration::Carport(c) => canopy::carport_bom(c, geometry),
        Configuration::Veranda(c) => canopy::veranda_bom(c, geometry),
    };
    tracing::debug!(
        product = %bom.product_type,
        items = bom.total_items,
        notes = bom.notes.len(),
        "bill of materials generated"
    );
    bom
}

/// Parts list for a configuration
pub fn generate_bom(config: &Configuration) -> Bom {
    generate_bom_with(config, &derive_geometry(config))
}

/// `1.25` → `"1.3"`, for dimension strings
pub(crate) fn meters(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;

    #[test]
    fn test_builder_sequences_per_prefix() {
        let mut builder = BomBuilder::new();
        builder.add("POST", BomCategory::Profile, "a", "", 4.0, BomUnit::Pieces);
        builder.add("BEAM", BomCategory::Profile, "b", "", 2.0, BomUnit::Pieces);
        builder
            .add("POST", BomCategory::Profile, "c", "", 2.0, BomUnit::Pieces)
            .with_dimensions("100x100mm");
        let bom = builder.finish(ProductType::Carport, vec![]);

        let ids: Vec<&str> = bom.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["POST-001", "BEAM-001", "POST-002"]);
        assert_eq!(bom.total_items, 3);
        assert_eq!(bom.items[2].dimensions.as_deref(), Some("100x100mm"));
    }

    #[test]
    fn test_quantity_rounding_by_unit() {
        let mut builder = BomBuilder::new();
        builder.add("A", BomCategory::Foundation, "", "", 3.04567, BomUnit::CubicMeter);
        builder.add("B", BomCategory::Cladding, "", "", 39.14, BomUnit::SquareMeter);
        builder.add("C", BomCategory::Hardware, "", "", 1.0, BomUnit::Set);
        let bom = builder.finish(ProductType::Shed, vec![]);
        assert_eq!(bom.items[0].quantity, 3.05);
        assert_eq!(bom.items[1].quantity, 39.1);
        assert_eq!(bom.items[2].quantity, 1.0);
    }

    #[test]
    fn test_every_preset_has_consistent_count() {
        for preset in presets() {
            let bom = generate_bom(&preset.config);
            assert_eq!(bom.total_items, bom.items.len(), "{}", preset.name);
            assert_eq!(bom.product_type, preset.product_type());
            assert!(!bom.notes.is_empty());
            assert!(bom.items_in(BomCategory::Hardware).count() >= 1);
        }
    }

    #[test]
    fn test_unit_serialization() {
        assert_eq!(serde_json::to_string(&BomUnit::SquareMeter).unwrap(), "\"m²\"");
        assert_eq!(serde_json::to_string(&BomUnit::Pieces).unwrap(), "\"pcs\"");
        assert_eq!(serde_json::to_string(&BomCategory::Drainage).unwrap(), "\"drainage\"");
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let bom = generate_bom(&Configuration::Shed(Default::default()));
        let categories = bom.categories();
        assert_eq!(categories[0], BomCategory::Foundation);
        assert_eq!(categories.last(), Some(&BomCategory::Hardware));
    }
}
