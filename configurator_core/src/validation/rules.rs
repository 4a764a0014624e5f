//! Generic rule evaluator.
//!
//! A rule is plain data: the field it reports on, a severity, and three
//! function pointers (pass check, message, optional suggestion). Product rule
//! sets are `Lazy<Vec<Rule<T>>>` tables, so every rule can be enumerated and
//! tested on its own.

use std::cmp::Ordering;

use super::{Severity, ValidationError, ValidationResult};

/// One declarative validation rule over a configuration type `T`
pub struct Rule<T> {
    pub field: &'static str,
    pub severity: Severity,
    /// Returns `true` when the configuration passes
    pub check: fn(&T) -> bool,
    pub message: fn(&T) -> String,
    pub suggestion: fn(&T) -> Option<String>,
}

impl<T> Rule<T> {
    pub fn passes(&self, config: &T) -> bool {
        (self.check)(config)
    }

    fn report(&self, config: &T) -> ValidationError {
        ValidationError {
            field: self.field.to_string(),
            message: (self.message)(config),
            suggestion: (self.suggestion)(config),
            severity: self.severity,
        }
    }
}

/// Evaluate every rule (no short-circuit) and split the failures by
/// severity. Both lists keep rule declaration order.
pub fn evaluate<T>(rules: &[Rule<T>], config: &T) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for rule in rules {
        let passed = rule.passes(config);
        tracing::trace!(field = rule.field, passed, "rule evaluated");
        if passed {
            continue;
        }
        match rule.severity {
            Severity::Error => errors.push(rule.report(config)),
            Severity::Warning => warnings.push(rule.report(config)),
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

// ============================================================================
// Comparison helpers
// ============================================================================
//
// Bound checks let `NaN` pass: a non-finite field is reported once, by its
// own finiteness rule, instead of by every bound that mentions it.

/// `value >= min`, or either side is `NaN`
pub fn at_least(value: f64, min: f64) -> bool {
    !matches!(value.partial_cmp(&min), Some(Ordering::Less))
}

/// `value <= max`, or either side is `NaN`
pub fn at_most(value: f64, max: f64) -> bool {
    !matches!(value.partial_cmp(&max), Some(Ordering::Greater))
}

/// No message beyond the main one
pub fn no_suggestion<T>(_: &T) -> Option<String> {
    None
}

/// Error rule requiring a finite number in `$field`.
macro_rules! finite_rule {
    ($ty:ty, $field:ident, $label:literal) => {
        $crate::validation::rules::Rule::<$ty> {
            field: stringify!($field),
            severity: $crate::validation::Severity::Error,
            check: |c| c.$field.is_finite(),
            message: |_| format!("{} ontbreekt of is geen geldig getal", $label),
            suggestion: |_| Some(format!("Vul een waarde in voor {}", $label.to_lowercase())),
        }
    };
}

pub(crate) use finite_rule;
