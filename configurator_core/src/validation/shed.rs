//! Shed rule table.
//!
//! Dimension and opening-count bands come from the shed-type restriction
//! table; every band is hard. Opening sizes and the door clearance are fixed
//! limits shared by all shed types.

use once_cell::sync::Lazy;

use super::rules::{at_least, at_most, finite_rule, no_suggestion, Rule};
use super::Severity;
use crate::config::restrictions::CountBand;
use crate::config::{
    restrictions, Band, ProductKind, Restrictions, ShedConfiguration, ShedRoofMaterial, ShedType,
};

type ShedRule = Rule<ShedConfiguration>;

/// Minimum gap between the top of a door and the wall plate (m)
pub const DOOR_CLEARANCE: f64 = 0.1;

const PITCH: Band = Band::new(15.0, 45.0);
const DOOR_WIDTH: Band = Band::new(0.8, 2.5);
const DOOR_HEIGHT: Band = Band::new(1.8, 2.5);
const WINDOW_WIDTH: Band = Band::new(0.6, 1.5);
const WINDOW_HEIGHT: Band = Band::new(0.6, 1.2);

fn limits(c: &ShedConfiguration) -> &'static Restrictions {
    restrictions(ProductKind::Shed(c.shed_type))
}

fn within(value: f64, band: Band) -> bool {
    at_least(value, band.min) && at_most(value, band.max)
}

fn door_band(c: &ShedConfiguration) -> CountBand {
    limits(c).door_count.unwrap_or(CountBand::new(0, u32::MAX))
}

fn window_band(c: &ShedConfiguration) -> CountBand {
    limits(c).window_count.unwrap_or(CountBand::new(0, u32::MAX))
}

pub static RULES: Lazy<Vec<ShedRule>> = Lazy::new(|| {
    vec![
        // Numbers present
        finite_rule!(ShedConfiguration, width, "Breedte"),
        finite_rule!(ShedConfiguration, length, "Lengte"),
        finite_rule!(ShedConfiguration, wall_height, "Wandhoogte"),
        finite_rule!(ShedConfiguration, door_width, "Deurbreedte"),
        finite_rule!(ShedConfiguration, door_height, "Deurhoogte"),
        Rule {
            field: "roof_pitch",
            severity: Severity::Error,
            check: |c| !c.roof_type.is_pitched() || c.roof_pitch.is_finite(),
            message: |_| "Dakhelling ontbreekt of is geen geldig getal".to_string(),
            suggestion: |_| Some("Vul een dakhelling in graden in".to_string()),
        },
        Rule {
            field: "window_width",
            severity: Severity::Error,
            check: |c| c.window_count == 0 || c.window_width.is_finite(),
            message: |_| "Raambreedte ontbreekt of is geen geldig getal".to_string(),
            suggestion: |_| Some("Vul een raambreedte in".to_string()),
        },
        Rule {
            field: "window_height",
            severity: Severity::Error,
            check: |c| c.window_count == 0 || c.window_height.is_finite(),
            message: |_| "Raamhoogte ontbreekt of is geen geldig getal".to_string(),
            suggestion: |_| Some("Vul een raamhoogte in".to_string()),
        },
        // Shed-type bands
        Rule {
            field: "width",
            severity: Severity::Error,
            check: |c| within(c.width, limits(c).width),
            message: |c| {
                let band = limits(c).width;
                format!("Breedte moet tussen {}m en {}m zijn", band.min, band.max)
            },
            suggestion: |c| {
                let band = limits(c).width;
                Some(format!("Pas breedte aan tussen {}m en {}m", band.min, band.max))
            },
        },
        Rule {
            field: "length",
            severity: Severity::Error,
            check: |c| within(c.length, limits(c).depth),
            message: |c| {
                let band = limits(c).depth;
                format!("Lengte moet tussen {}m en {}m zijn", band.min, band.max)
            },
            suggestion: |c| {
                let band = limits(c).depth;
                Some(format!("Pas lengte aan tussen {}m en {}m", band.min, band.max))
            },
        },
        Rule {
            field: "wall_height",
            severity: Severity::Error,
            check: |c| within(c.wall_height, limits(c).height),
            message: |c| {
                let band = limits(c).height;
                format!("Wandhoogte moet tussen {}m en {}m zijn", band.min, band.max)
            },
            suggestion: |c| {
                let band = limits(c).height;
                Some(format!("Pas wandhoogte aan tussen {}m en {}m", band.min, band.max))
            },
        },
        Rule {
            field: "door_count",
            severity: Severity::Error,
            check: |c| door_band(c).contains(c.door_count),
            message: |c| {
                let band = door_band(c);
                format!("Aantal deuren moet tussen {} en {} zijn", band.min, band.max)
            },
            suggestion: |c| {
                let band = door_band(c);
                Some(format!("Pas aantal deuren aan tussen {} en {}", band.min, band.max))
            },
        },
        Rule {
            field: "window_count",
            severity: Severity::Error,
            check: |c| window_band(c).contains(c.window_count),
            message: |c| {
                let band = window_band(c);
                format!("Aantal ramen moet tussen {} en {} zijn", band.min, band.max)
            },
            suggestion: |c| {
                let band = window_band(c);
                Some(format!("Pas aantal ramen aan tussen {} en {}", band.min, band.max))
            },
        },
        Rule {
            field: "roof_type",
            severity: Severity::Error,
            check: |c| limits(c).allows_roof(c.roof_type),
            message: |c| format!("Daktype {} niet toegestaan voor {}", c.roof_type, c.shed_type),
            suggestion: |c| {
                let allowed: Vec<&str> = limits(c).allowed_roof_types.iter().map(|r| r.code()).collect();
                Some(format!("Kies een van de toegestane daktypen: {}", allowed.join(", ")))
            },
        },
        // Fixed limits
        Rule {
            field: "roof_pitch",
            severity: Severity::Error,
            check: |c| !c.roof_type.is_pitched() || within(c.roof_pitch, PITCH),
            message: |_| "Dakhelling moet tussen 15° en 45° zijn voor schuine daken".to_string(),
            suggestion: |_| Some("Pas dakhelling aan tussen 15° en 45°".to_string()),
        },
        Rule {
            field: "door_width",
            severity: Severity::Error,
            check: |c| within(c.door_width, DOOR_WIDTH),
            message: |_| "Deurbreedte moet tussen 0.8m en 2.5m zijn".to_string(),
            suggestion: |_| Some("Pas deurbreedte aan tussen 0.8m en 2.5m".to_string()),
        },
        Rule {
            field: "door_height",
            severity: Severity::Error,
            check: |c| within(c.door_height, DOOR_HEIGHT),
            message: |_| "Deurhoogte moet tussen 1.8m en 2.5m zijn".to_string(),
            suggestion: |_| Some("Pas deurhoogte aan tussen 1.8m en 2.5m".to_string()),
        },
        Rule {
            field: "window_width",
            severity: Severity::Error,
            check: |c| c.window_count == 0 || within(c.window_width, WINDOW_WIDTH),
            message: |_| "Raambreedte moet tussen 0.6m en 1.5m zijn".to_string(),
            suggestion: |_| Some("Pas raambreedte aan tussen 0.6m en 1.5m".to_string()),
        },
        Rule {
            field: "window_height",
            severity: Severity::Error,
            check: |c| c.window_count == 0 || within(c.window_height, WINDOW_HEIGHT),
            message: |_| "Raamhoogte moet tussen 0.6m en 1.2m zijn".to_string(),
            suggestion: |_| Some("Pas raamhoogte aan tussen 0.6m en 1.2m".to_string()),
        },
        Rule {
            field: "door_height",
            severity: Severity::Error,
            check: |c| at_most(c.door_height, c.wall_height - DOOR_CLEARANCE),
            message: |_| "Deurhoogte moet minimaal 10cm lager zijn dan wandhoogte".to_string(),
            suggestion: |c| {
                Some(format!(
                    "Verlaag deurhoogte of verhoog wandhoogte (huidige wandhoogte: {}m)",
                    c.wall_height
                ))
            },
        },
        // Warnings
        Rule {
            field: "door_width",
            severity: Severity::Warning,
            check: |c| at_most(c.door_width, 2.0),
            message: |_| "Zeer brede deuren kunnen extra verstevigingen nodig hebben".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "window_count",
            severity: Severity::Warning,
            check: |c| c.shed_type != ShedType::StorageShed || c.window_count <= 4,
            message: |_| "Veel ramen voor een berging kan de veiligheid verminderen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "roof_material",
            severity: Severity::Warning,
            check: |c| {
                c.roof_material != ShedRoofMaterial::GreenRoof || at_least(c.footprint_area(), 10.0)
            },
            message: |_| {
                "Groen dak op kleine constructies kan een onevenredige constructieve belasting geven"
                    .to_string()
            },
            suggestion: no_suggestion,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoofType;
    use crate::validation::{evaluate, ValidationResult};

    fn check(config: &ShedConfiguration) -> ValidationResult {
        evaluate(RULES.as_slice(), config)
    }

    #[test]
    fn test_default_is_clean() {
        let result = check(&ShedConfiguration::default());
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_width_band_depends_on_shed_type() {
        let garden = ShedConfiguration {
            width: 5.0,
            ..ShedConfiguration::default()
        };
        assert!(check(&garden).valid);

        let storage = ShedConfiguration {
            shed_type: ShedType::StorageShed,
            width: 5.0,
            length: 3.0,
            wall_height: 2.2,
            roof_type: RoofType::Flat,
            door_height: 2.0,
            window_count: 0,
            ..ShedConfiguration::default()
        };
        let result = check(&storage);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "width");
        assert_eq!(result.errors[0].message, "Breedte moet tussen 2m en 4m zijn");
    }

    #[test]
    fn test_roof_type_not_allowed() {
        let barn = ShedConfiguration {
            shed_type: ShedType::Barn,
            width: 6.0,
            length: 6.0,
            wall_height: 2.8,
            roof_type: RoofType::Flat,
            ..ShedConfiguration::default()
        };
        let result = check(&barn);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "roof_type");
        assert_eq!(
            result.errors[0].suggestion.as_deref(),
            Some("Kies een van de toegestane daktypen: gabled, mono-slope")
        );
    }

    #[test]
    fn test_door_clearance() {
        let config = ShedConfiguration {
            wall_height: 2.2,
            door_height: 2.2,
            ..ShedConfiguration::default()
        };
        let result = check(&config);
        assert!(!result.valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.message == "Deurhoogte moet minimaal 10cm lager zijn dan wandhoogte"));
    }

    #[test]
    fn test_pitch_only_checked_for_pitched_roofs() {
        let flat = ShedConfiguration {
            roof_type: RoofType::Flat,
            roof_pitch: 0.0,
            ..ShedConfiguration::default()
        };
        assert!(check(&flat).valid);

        let steep = ShedConfiguration {
            roof_pitch: 50.0,
            ..ShedConfiguration::default()
        };
        assert!(check(&steep).has_error_on("roof_pitch"));
    }

    #[test]
    fn test_warnings_do_not_block() {
        let config = ShedConfiguration {
            shed_type: ShedType::Barn,
            width: 4.0,
            length: 4.0,
            wall_height: 2.6,
            door_width: 2.4,
            door_height: 2.4,
            roof_material: ShedRoofMaterial::GreenRoof,
            ..ShedConfiguration::default()
        };
        let result = check(&config);
        assert!(result.valid, "{:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].field, "door_width");
    }

    #[test]
    fn test_missing_number_is_an_error_on_that_field() {
        let config = ShedConfiguration {
            length: f64::NAN,
            ..ShedConfiguration::default()
        };
        let result = check(&config);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "length");
    }
}
