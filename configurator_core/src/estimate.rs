//! # Estimate
//!
//! The whole pipeline in one call: geometry, validation, parts list and
//! price for a single configuration. The geometry is derived once at full
//! precision and shared by the BOM and pricing stages; the copy stored in
//! the bundle is the rounded display version.
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::config::preset_by_name;
//! use configurator_core::estimate::estimate;
//! use configurator_core::pricing::{Country, PricingContext};
//!
//! let preset = preset_by_name("Carport Enkel").unwrap();
//! let result = estimate(&preset.config, &PricingContext::new(Country::NL));
//! assert!(result.validation.valid);
//! assert_eq!(result.bom.total_items, result.bom.items.len());
//! ```

use serde::{Deserialize, Serialize};

use crate::bom::{generate_bom_with, Bom};
use crate::config::{Configuration, ProductType};
use crate::geometry::{derive_geometry, Geometry};
use crate::pricing::{calculate_price_with, PriceBreakdown, PricingContext};
use crate::validation::{validate, ValidationResult};

/// Every engine output for one configuration snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub product_type: ProductType,
    /// Rounded for display
    pub geometry: Geometry,
    pub validation: ValidationResult,
    pub bom: Bom,
    pub price: PriceBreakdown,
}

impl Estimate {
    /// BOM and price are provisional while blocking errors remain
    pub fn is_provisional(&self) -> bool {
        !self.validation.valid
    }
}

/// Run the full pipeline.
///
/// Never fails: an invalid configuration still gets a parts list and a
/// price, with the findings in `validation`.
pub fn estimate(config: &Configuration, context: &PricingContext) -> Estimate {
    let geometry = derive_geometry(config);
    let validation = validate(config);
    let bom = generate_bom_with(config, &geometry);
    let price = calculate_price_with(config, &geometry, context);

    tracing::debug!(
        product = %config.product_type(),
        valid = validation.valid,
        items = bom.total_items,
        total = price.total,
        "estimate complete"
    );

    Estimate {
        product_type: config.product_type(),
        geometry: geometry.rounded(),
        validation,
        bom,
        price,
    }
}
