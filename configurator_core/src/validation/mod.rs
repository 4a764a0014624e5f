//! # Validation
//!
//! Classifies a configuration against its product rule table. Validation
//! never blocks the other stages: BOM and pricing run on any configuration,
//! and callers decide what to do with the findings.
//!
//! - `error`: a hard constraint is violated; a quote cannot be submitted
//! - `warning`: a best-practice deviation; shown but not blocking
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::config::{CarportConfiguration, Configuration};
//! use configurator_core::validation::validate;
//!
//! let carport = CarportConfiguration { width: 2.0, ..Default::default() };
//! let result = validate(&Configuration::Carport(carport));
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].field, "width");
//! ```

pub mod carport;
pub mod rules;
pub mod shed;
pub mod veranda;

pub use rules::{evaluate, Rule};

use serde::{Deserialize, Serialize};

use crate::config::Configuration;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One rule violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Configuration field (snake_case) the finding refers to
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub severity: Severity,
}

/// Outcome of validating one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `true` iff `errors` is empty
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// All findings (errors first) for one field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .filter(move |issue| issue.field == field)
    }

    pub fn has_error_on(&self, field: &str) -> bool {
        self.errors.iter().any(|issue| issue.field == field)
    }
}

/// Validate a configuration against its product rule table.
pub fn validate(config: &Configuration) -> ValidationResult {
    let result = match config {
        Configuration::Shed(c) => evaluate(shed::RULES.as_slice(), c),
        Configuration::Carport(c) => evaluate(carport::RULES.as_slice(), c),
        Configuration::Veranda(c) => evaluate(veranda::RULES.as_slice(), c),
    };
    tracing::debug!(
        product = %config.product_type(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "configuration validated"
    );
    result
}

/// `true` when the configuration has no blocking errors
pub fn is_valid(config: &Configuration) -> bool {
    validate(config).valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{presets, ShedConfiguration};

    #[test]
    fn test_presets_have_no_errors() {
        for preset in presets() {
            let result = validate(&preset.config);
            assert!(result.valid, "{}: {:?}", preset.name, result.errors);
        }
    }

    #[test]
    fn test_idempotent() {
        let config = Configuration::Shed(ShedConfiguration {
            width: 12.0,
            door_height: 2.4,
            ..ShedConfiguration::default()
        });
        assert_eq!(validate(&config), validate(&config));
    }

    #[test]
    fn test_field_lookup() {
        let config = Configuration::Shed(ShedConfiguration {
            width: 12.0,
            ..ShedConfiguration::default()
        });
        let result = validate(&config);
        assert!(result.has_error_on("width"));
        assert_eq!(result.for_field("width").count(), 1);
        assert!(!result.has_error_on("length"));
        assert!(!is_valid(&config));
        assert!(is_valid(&Configuration::Shed(ShedConfiguration::default())));
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    }
}
