//! Market tables: VAT, regional cost multipliers and labor rates.
//!
//! All of it is read-only data. The regional table is a nested
//! country → region → factor map built once on first use.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Supported markets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Country {
    #[default]
    NL,
    DE,
    BE,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::NL, Country::DE, Country::BE];

    pub fn code(&self) -> &'static str {
        match self {
            Country::NL => "NL",
            Country::DE => "DE",
            Country::BE => "BE",
        }
    }

    /// Standard VAT rate (BTW / MwSt / TVA)
    pub fn vat_rate(&self) -> f64 {
        match self {
            Country::NL => 0.21,
            Country::DE => 0.19,
            Country::BE => 0.21,
        }
    }

    pub fn labor_rates(&self) -> LaborRates {
        match self {
            Country::NL => LaborRates { carpenter: 65.0, laborer: 45.0, roofer: 70.0 },
            Country::DE => LaborRates { carpenter: 60.0, laborer: 42.0, roofer: 65.0 },
            Country::BE => LaborRates { carpenter: 58.0, laborer: 40.0, roofer: 62.0 },
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Country {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "NL" => Ok(Country::NL),
            "DE" => Ok(Country::DE),
            "BE" => Ok(Country::BE),
            _ => Err(EngineError::unknown_country(s)),
        }
    }
}

/// Hourly rates (EUR, overhead included)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborRates {
    pub carpenter: f64,
    pub laborer: f64,
    pub roofer: f64,
}

impl LaborRates {
    /// Blended rate for a mixed crew
    pub fn average(&self) -> f64 {
        (self.carpenter + self.laborer + self.roofer) / 3.0
    }
}

pub static REGIONAL_MULTIPLIERS: Lazy<BTreeMap<Country, BTreeMap<&'static str, f64>>> =
    Lazy::new(|| {
        BTreeMap::from([
            (
                Country::NL,
                BTreeMap::from([
                    ("Noord-Holland", 1.15),
                    ("Zuid-Holland", 1.1),
                    ("Utrecht", 1.08),
                    ("Zeeland", 0.95),
                    ("Limburg", 0.92),
                    ("Groningen", 0.9),
                ]),
            ),
            (
                Country::DE,
                BTreeMap::from([
                    ("Bayern", 1.12),
                    ("Baden-Württemberg", 1.08),
                    ("Berlin", 1.05),
                    ("Nordrhein-Westfalen", 1.0),
                    ("Sachsen", 0.88),
                ]),
            ),
            (
                Country::BE,
                BTreeMap::from([("Brussels", 1.12), ("Flanders", 1.05), ("Wallonia", 0.95)]),
            ),
        ])
    });

/// Multiplier applied when no region or an unknown region is given
pub const DEFAULT_REGIONAL_MULTIPLIER: f64 = 1.0;

/// Cost factor for a region, matched case-insensitively.
pub fn regional_multiplier(country: Country, region: Option<&str>) -> f64 {
    let Some(region) = region.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_REGIONAL_MULTIPLIER;
    };
    REGIONAL_MULTIPLIERS
        .get(&country)
        .and_then(|regions| {
            regions
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(region))
                .map(|(_, factor)| *factor)
        })
        .unwrap_or(DEFAULT_REGIONAL_MULTIPLIER)
}

/// Known region names for a country
pub fn regions(country: Country) -> Vec<&'static str> {
    REGIONAL_MULTIPLIERS
        .get(&country)
        .map(|regions| regions.keys().copied().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Country::NL, 0.21)]
    #[case(Country::DE, 0.19)]
    #[case(Country::BE, 0.21)]
    fn test_vat_rates(#[case] country: Country, #[case] rate: f64) {
        assert_eq!(country.vat_rate(), rate);
    }

    #[rstest]
    #[case(Country::NL, Some("Noord-Holland"), 1.15)]
    #[case(Country::NL, Some("utrecht"), 1.08)]
    #[case(Country::DE, Some("Sachsen"), 0.88)]
    #[case(Country::BE, Some("Flanders"), 1.05)]
    #[case(Country::BE, Some("Bayern"), 1.0)]
    #[case(Country::NL, Some(""), 1.0)]
    #[case(Country::DE, None, 1.0)]
    fn test_regional_multiplier(
        #[case] country: Country,
        #[case] region: Option<&str>,
        #[case] expected: f64,
    ) {
        assert_eq!(regional_multiplier(country, region), expected);
    }

    #[test]
    fn test_country_parsing() {
        assert_eq!("nl".parse::<Country>().unwrap(), Country::NL);
        assert_eq!(" BE ".parse::<Country>().unwrap(), Country::BE);
        assert_eq!("FR".parse::<Country>().unwrap_err().error_code(), "UNKNOWN_COUNTRY");
        assert_eq!(serde_json::to_string(&Country::DE).unwrap(), "\"DE\"");
    }

    #[test]
    fn test_labor_average() {
        assert!((Country::NL.labor_rates().average() - 60.0).abs() < 1e-9);
        assert_eq!(regions(Country::BE), vec!["Brussels", "Flanders", "Wallonia"]);
    }
}
