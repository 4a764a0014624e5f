//! # Unit Types
//!
//! Lightweight newtype wrappers for the units the engine mixes: meters for
//! dimensions, millimeters for profile and spacing sizes, degrees for roof
//! pitch and euros for money. They serialize as plain numbers.
//!
//! Configuration records keep raw `f64` fields (the JSON contract with the UI
//! is plain numbers); the wrappers are used where a conversion happens, so the
//! conversion lives in one place.
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::units::{Degrees, Euros, Millimeters};
//!
//! let spacing = Millimeters(600.0);
//! assert_eq!(spacing.to_meters().0, 0.6);
//!
//! let pitch = Degrees(60.0);
//! assert!((pitch.to_radians().cos() - 0.5).abs() < 1e-12);
//!
//! let total = Euros(100.0) + Euros(21.0);
//! assert_eq!(total, Euros(121.0));
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters (profile cross-sections, rafter spacing)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Convert to meters
    pub fn to_meters(self) -> Meters {
        Meters(self.0 / 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        mm.to_meters()
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees (roof pitch)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians as `degrees * PI / 180`
    pub fn to_radians(self) -> f64 {
        (self.0 * std::f64::consts::PI) / 180.0
    }
}

// ============================================================================
// Money
// ============================================================================

/// Amount in euros
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Euros(pub f64);

impl Euros {
    /// Zero euros
    pub const ZERO: Euros = Euros(0.0);

    /// Round to whole euros
    pub fn rounded(self) -> Euros {
        Euros(self.0.round())
    }
}

impl Sum for Euros {
    fn sum<I: Iterator<Item = Euros>>(iter: I) -> Self {
        Euros(iter.map(|e| e.0).sum())
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Degrees);
impl_arithmetic!(Euros);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let m: Meters = Millimeters(400.0).into();
        assert_eq!(m.0, 0.4);
        let back: Millimeters = Meters(0.5).into();
        assert_eq!(back.0, 500.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(Degrees(0.0).to_radians(), 0.0);
        assert!((Degrees(180.0).to_radians() - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_euro_sum_and_rounding() {
        let total: Euros = [Euros(10.4), Euros(20.2)].into_iter().sum();
        assert!((total.0 - 30.6).abs() < 1e-9);
        assert_eq!(total.rounded(), Euros(31.0));
        assert_eq!((Euros(10.0) * 1.21).rounded(), Euros(12.0));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Euros(1250.0)).unwrap();
        assert_eq!(json, "1250.0");
        let roundtrip: Euros = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Euros(1250.0));
    }
}
