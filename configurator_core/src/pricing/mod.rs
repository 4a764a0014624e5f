//! # Pricing Engine
//!
//! Turns a configuration and its full-precision geometry into a cost
//! breakdown for one market. Each product model yields unrounded cost lines;
//! [`finalize`] applies the regional multiplier, VAT and the price range.
//!
//! ## Rounding
//!
//! Lines and the subtotal are rounded to whole euros on return. VAT and the
//! total are derived from the *returned* subtotal, so
//! `total == subtotal + vat` and `vat == round(subtotal * vat_rate)` hold
//! exactly.
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::config::{Configuration, ShedConfiguration};
//! use configurator_core::pricing::{calculate_price, Country, PricingContext};
//!
//! let config = Configuration::Shed(ShedConfiguration::default());
//! let price = calculate_price(&config, &PricingContext::new(Country::NL));
//! assert_eq!(price.vat_rate, 0.21);
//! assert_eq!(price.total, price.subtotal + price.vat);
//! assert!(price.range.min < price.total && price.total < price.range.max);
//! ```

pub mod canopy;
pub mod shed;
pub mod tables;

pub use canopy::{CanopyCostTable, CanopySpec};
pub use tables::{regional_multiplier, regions, Country, LaborRates};

use serde::{Deserialize, Serialize};

use crate::config::{Configuration, ProductType};
use crate::geometry::{derive_geometry, Geometry};
use crate::math::round_money;
use crate::units::Euros;

/// Market and scope of a price request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingContext {
    pub country: Country,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Installation/labor is included unless explicitly `false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_installation: Option<bool>,
}

impl PricingContext {
    pub fn new(country: Country) -> Self {
        PricingContext {
            country,
            region: None,
            include_installation: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_installation(mut self, include: bool) -> Self {
        self.include_installation = Some(include);
        self
    }

    pub fn installation_included(&self) -> bool {
        self.include_installation.unwrap_or(true)
    }

    pub fn regional_multiplier(&self) -> f64 {
        regional_multiplier(self.country, self.region.as_deref())
    }
}

/// One named cost line (EUR)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    /// Stable key, e.g. `"structure"` or `"labor"`
    pub key: String,
    pub label: String,
    pub amount: f64,
}

impl CostLine {
    pub fn new(key: &str, label: &str, amount: f64) -> Self {
        CostLine {
            key: key.to_string(),
            label: label.to_string(),
            amount,
        }
    }
}

/// Indicative band around the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub variance: f64,
}

impl PriceRange {
    /// `total × (1 ∓ variance)`, rounded to whole euros
    pub fn around(total: f64, variance: f64) -> Self {
        PriceRange {
            min: round_money(total * (1.0 - variance)),
            max: round_money(total * (1.0 + variance)),
            variance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub product_type: ProductType,
    pub lines: Vec<CostLine>,
    pub subtotal: f64,
    pub vat: f64,
    pub vat_rate: f64,
    pub total: f64,
    pub range: PriceRange,
    pub currency: String,
    pub country: Country,
    pub region_multiplier: f64,
    pub installation_included: bool,
}

impl PriceBreakdown {
    /// Amount of a line by key
    pub fn line(&self, key: &str) -> Option<f64> {
        self.lines.iter().find(|line| line.key == key).map(|line| line.amount)
    }
}

/// Currency every price is quoted in
pub const CURRENCY: &str = "EUR";

/// Apply the regional multiplier, VAT and range to raw cost lines.
pub fn finalize(
    product_type: ProductType,
    lines: Vec<CostLine>,
    context: &PricingContext,
    variance: f64,
) -> PriceBreakdown {
    let region_multiplier = context.regional_multiplier();
    let vat_rate = context.country.vat_rate();

    let raw_subtotal: Euros = lines
        .iter()
        .map(|line| Euros(line.amount * region_multiplier))
        .sum();
    let lines = lines
        .into_iter()
        .map(|line| CostLine {
            amount: round_money(line.amount * region_multiplier),
            ..line
        })
        .collect();

    let subtotal = raw_subtotal.rounded().value();
    let vat = round_money(subtotal * vat_rate);
    let total = subtotal + vat;

    PriceBreakdown {
        product_type,
        lines,
        subtotal,
        vat,
        vat_rate,
        total,
        range: PriceRange::around(total, variance),
        currency: CURRENCY.to_string(),
        country: context.country,
        region_multiplier,
        installation_included: context.installation_included(),
    }
}

/// Price variance for a product
pub fn variance_for(product_type: ProductType) -> f64 {
    match product_type {
        ProductType::Shed => shed::VARIANCE,
        ProductType::Carport => canopy::CARPORT_COSTS.variance,
        ProductType::Veranda => canopy::VERANDA_COSTS.variance,
    }
}

/// Price from an already derived full-precision geometry
pub fn calculate_price_with(
    config: &Configuration,
    geometry: &Geometry,
    context: &PricingContext,
) -> PriceBreakdown {
    let lines = match config {
        Configuration::Shed(c) => shed::cost_lines(c, geometry, context),
        Configuration::Carport(c) => {
            canopy::cost_lines(&CanopySpec::from(c), geometry, &canopy::CARPORT_COSTS, context)
        }
        Configuration::Veranda(c) => {
            canopy::cost_lines(&CanopySpec::from(c), geometry, &canopy::VERANDA_COSTS, context)
        }
    };
    let product_type = config.product_type();
    let price = finalize(product_type, lines, context, variance_for(product_type));
    tracing::debug!(
        product = %product_type,
        country = %context.country,
        subtotal = price.subtotal,
        total = price.total,
        "price calculated"
    );
    price
}

/// Price a configuration for a market
pub fn calculate_price(config: &Configuration, context: &PricingContext) -> PriceBreakdown {
    calculate_price_with(config, &derive_geometry(config), context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{presets, CarportConfiguration};

    #[test]
    fn test_finalize_identities() {
        let lines = vec![
            CostLine::new("a", "A", 1000.4),
            CostLine::new("b", "B", 234.4),
        ];
        let price = finalize(ProductType::Carport, lines, &PricingContext::new(Country::DE), 0.12);
        assert_eq!(price.line("a"), Some(1000.0));
        assert_eq!(price.subtotal, 1235.0);
        // 1235 x 0.19 = 234.65
        assert_eq!(price.vat, 235.0);
        assert_eq!(price.total, 1470.0);
        assert_eq!(price.range.min, 1294.0);
        assert_eq!(price.range.max, 1646.0);
        assert_eq!(price.currency, "EUR");
    }

    #[test]
    fn test_regional_multiplier_applies_to_every_line() {
        let lines = vec![CostLine::new("a", "A", 1000.0), CostLine::new("b", "B", 500.0)];
        let context = PricingContext::new(Country::NL).with_region("Groningen");
        let price = finalize(ProductType::Shed, lines, &context, 0.15);
        assert_eq!(price.region_multiplier, 0.9);
        assert_eq!(price.line("a"), Some(900.0));
        assert_eq!(price.line("b"), Some(450.0));
        assert_eq!(price.subtotal, 1350.0);
    }

    #[test]
    fn test_installation_default() {
        assert!(PricingContext::new(Country::BE).installation_included());
        assert!(!PricingContext::new(Country::BE).with_installation(false).installation_included());
        let json = r#"{ "country": "BE", "region": "Wallonia" }"#;
        let context: PricingContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.regional_multiplier(), 0.95);
        assert!(context.installation_included());
    }

    #[test]
    fn test_presets_satisfy_price_identities() {
        for country in Country::ALL {
            let context = PricingContext::new(country);
            for preset in presets() {
                let price = calculate_price(&preset.config, &context);
                assert_eq!(price.total, price.subtotal + price.vat, "{}", preset.name);
                assert_eq!(price.vat, (price.subtotal * country.vat_rate()).round());
                assert!(price.range.min < price.total && price.total < price.range.max);
            }
        }
    }

    #[test]
    fn test_variance_per_product() {
        let carport = Configuration::Carport(CarportConfiguration::default());
        let price = calculate_price(&carport, &PricingContext::default());
        assert_eq!(price.range.variance, 0.12);
        assert_eq!(variance_for(ProductType::Shed), 0.15);
        assert_eq!(variance_for(ProductType::Veranda), 0.15);
    }
}
