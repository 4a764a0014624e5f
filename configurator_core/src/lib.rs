//! # configurator_core - Outdoor Structure Configurator Engine
//!
//! `configurator_core` turns a customer's configuration of a garden shed,
//! carport or veranda into derived geometry, validation findings, a bill of
//! materials and a price breakdown. All inputs and outputs are
//! JSON-serializable so a web front end or quote system can drive it directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from configuration to results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Data over code**: Restrictions, rules and cost tables are static tables
//! - **Best effort**: Invalid input is reported, never thrown; BOM and price
//!   are still produced and marked provisional
//!
//! ## Quick Start
//!
//! ```rust
//! use configurator_core::config::CarportConfiguration;
//! use configurator_core::{estimate, Configuration, Country, PricingContext};
//!
//! let config = Configuration::Carport(CarportConfiguration {
//!     width: 3.0,
//!     depth: 5.0,
//!     ..CarportConfiguration::default()
//! });
//!
//! let result = estimate(&config, &PricingContext::new(Country::NL));
//! assert!(result.validation.valid);
//! assert_eq!(result.geometry.post_count, 4);
//! assert_eq!(result.price.total, result.price.subtotal + result.price.vat);
//!
//! // Missing numbers are reported on their field, not thrown
//! let json = r#"{ "product_type": "carport", "width": 3.0 }"#;
//! let partial = Configuration::from_json(json).unwrap();
//! let result = estimate(&partial, &PricingContext::default());
//! assert!(result.validation.has_error_on("depth"));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration records, restriction tables and presets
//! - [`geometry`] - Derived quantities (areas, perimeter, post and rafter counts)
//! - [`validation`] - Declarative rule tables producing errors and warnings
//! - [`bom`] - Bill of materials generation
//! - [`pricing`] - Cost tables, VAT and regional multipliers
//! - [`estimate`] - The whole pipeline in one call
//! - [`snapshot`] - Timestamped estimate records for quote storage
//! - [`format`] - Dutch display formatting and plain-text BOM export
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod bom;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod format;
pub mod geometry;
pub mod math;
pub mod pricing;
pub mod snapshot;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use bom::{generate_bom, Bom, BomItem};
pub use config::{Configuration, ProductType};
pub use errors::{EngineError, EngineResult};
pub use estimate::{estimate, Estimate};
pub use geometry::{calculate_geometry, Geometry};
pub use pricing::{calculate_price, Country, PriceBreakdown, PricingContext};
pub use snapshot::EstimateSnapshot;
pub use validation::{validate, ValidationResult};
