//! # Estimate Snapshots
//!
//! A snapshot freezes a configuration, the pricing context and the estimate
//! computed from them, so a quote or lead store can keep the exact numbers
//! the customer saw. The engine never stores snapshots itself.
//!
//! ```text
//! EstimateSnapshot
//! ├── id: Uuid
//! ├── schema_version, created_at (UTC)
//! ├── configuration: Configuration
//! ├── context: PricingContext
//! └── estimate: Estimate (geometry, validation, bom, price)
//! ```
//!
//! Creating a snapshot is the only non-deterministic operation in the
//! crate (fresh id and timestamp); the estimate inside is reproducible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Configuration;
use crate::errors::{EngineError, EngineResult};
use crate::estimate::{estimate, Estimate};
use crate::pricing::PricingContext;

/// Current schema version for stored snapshots
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSnapshot {
    pub id: Uuid,

    /// Schema version (for migration compatibility)
    pub schema_version: String,

    pub created_at: DateTime<Utc>,

    pub configuration: Configuration,
    pub context: PricingContext,
    pub estimate: Estimate,
}

impl EstimateSnapshot {
    /// Run the pipeline and freeze the result.
    pub fn capture(configuration: Configuration, context: PricingContext) -> Self {
        let estimate = estimate(&configuration, &context);
        let snapshot = EstimateSnapshot {
            id: Uuid::new_v4(),
            schema_version: SCHEMA_VERSION.to_string(),
            created_at: Utc::now(),
            configuration,
            context,
            estimate,
        };
        tracing::debug!(id = %snapshot.id, total = snapshot.estimate.price.total, "snapshot captured");
        snapshot
    }

    /// Recompute the estimate from the stored inputs and compare.
    ///
    /// `false` means the engine tables changed since the snapshot was taken.
    pub fn is_current(&self) -> bool {
        estimate(&self.configuration, &self.context) == self.estimate
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a stored snapshot, rejecting other major schema versions.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let snapshot: EstimateSnapshot = serde_json::from_str(json)?;
        if major_version(&snapshot.schema_version)? != major_version(SCHEMA_VERSION)? {
            return Err(EngineError::VersionMismatch {
                file_version: snapshot.schema_version,
                expected_version: SCHEMA_VERSION.to_string(),
            });
        }
        Ok(snapshot)
    }
}

/// Leading number of a `major.minor.patch` version
fn major_version(version: &str) -> EngineResult<u32> {
    version
        .split('.')
        .next()
        .and_then(|major| major.trim().parse().ok())
        .ok_or_else(|| {
            EngineError::invalid_input(
                "schema_version",
                version,
                "Expected a version like 1.0.0",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::preset_by_name;
    use crate::pricing::Country;

    fn capture() -> EstimateSnapshot {
        let preset = preset_by_name("Veranda Luxe").unwrap();
        EstimateSnapshot::capture(preset.config, PricingContext::new(Country::DE).with_region("Bayern"))
    }

    #[test]
    fn test_capture() {
        let snapshot = capture();
        assert_eq!(snapshot.schema_version, SCHEMA_VERSION);
        assert_eq!(snapshot.estimate.price.region_multiplier, 1.12);
        assert!(snapshot.is_current());
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = capture();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"product_type\": \"veranda\""));
        let restored = EstimateSnapshot::from_json(&json).unwrap();
        assert_eq!(restored.id, snapshot.id);
        assert_eq!(restored.configuration, snapshot.configuration);
        assert_eq!(restored.estimate.price.total, snapshot.estimate.price.total);
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(capture().id, capture().id);
    }

    #[test]
    fn test_rejects_other_major_version() {
        let mut snapshot = capture();
        snapshot.schema_version = "2.0.0".to_string();
        let json = snapshot.to_json().unwrap();
        let err = EstimateSnapshot::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_rejects_malformed_version() {
        let mut snapshot = capture();
        snapshot.schema_version = "latest".to_string();
        let json = snapshot.to_json().unwrap();
        let err = EstimateSnapshot::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("schema_version"));

        assert_eq!(major_version("1.4.2").unwrap(), 1);
    }
}
