//! Carport rule table.
//!
//! Lower bounds are hard, upper bounds advisory. Post size scales with the
//! largest span: above 5 m a 120 mm post is recommended, above 6 m a 150 mm
//! post is required.

use once_cell::sync::Lazy;

use super::rules::{at_least, at_most, finite_rule, no_suggestion, Rule};
use super::Severity;
use crate::config::{restrictions, CanopyRoofMaterial, CarportConfiguration, ProductKind, RalColor};

type CarportRule = Rule<CarportConfiguration>;

fn span(c: &CarportConfiguration) -> f64 {
    c.width.max(c.depth)
}

pub static RULES: Lazy<Vec<CarportRule>> = Lazy::new(|| {
    vec![
        finite_rule!(CarportConfiguration, width, "Breedte"),
        finite_rule!(CarportConfiguration, depth, "Diepte"),
        finite_rule!(CarportConfiguration, height, "Hoogte"),
        finite_rule!(CarportConfiguration, roof_overhang, "Overstrek"),
        Rule {
            field: "roof_pitch",
            severity: Severity::Error,
            check: |c| !c.roof_type.is_pitched() || c.roof_pitch.is_finite(),
            message: |_| "Dakhelling ontbreekt of is geen geldig getal".to_string(),
            suggestion: |_| Some("Vul een dakhelling in graden in".to_string()),
        },
        // Dimensions
        Rule {
            field: "width",
            severity: Severity::Error,
            check: |c| at_least(c.width, 2.5),
            message: |_| "Breedte moet minimaal 2.5m zijn voor een carport".to_string(),
            suggestion: |_| Some("Verhoog de breedte naar minimaal 2.5m".to_string()),
        },
        Rule {
            field: "width",
            severity: Severity::Warning,
            check: |c| at_most(c.width, 6.0),
            message: |_| "Breedte boven 6.0m kan extra verstevigingen vereisen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "depth",
            severity: Severity::Error,
            check: |c| at_least(c.depth, 4.0),
            message: |_| "Diepte moet minimaal 4.0m zijn voor een auto".to_string(),
            suggestion: |_| Some("Verhoog de diepte naar minimaal 4.0m".to_string()),
        },
        Rule {
            field: "depth",
            severity: Severity::Warning,
            check: |c| at_most(c.depth, 7.0),
            message: |_| "Diepte boven 7.0m kan extra palen vereisen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "height",
            severity: Severity::Error,
            check: |c| at_least(c.height, 2.1),
            message: |_| "Hoogte moet minimaal 2.1m zijn voor voertuigen".to_string(),
            suggestion: |_| Some("Verhoog de hoogte naar minimaal 2.1m".to_string()),
        },
        Rule {
            field: "height",
            severity: Severity::Warning,
            check: |c| at_most(c.height, 3.0),
            message: |_| "Hoogte boven 3.0m is ongebruikelijk voor een carport".to_string(),
            suggestion: no_suggestion,
        },
        // Roof
        Rule {
            field: "roof_pitch",
            severity: Severity::Error,
            check: |c| !c.roof_type.is_pitched() || at_least(c.roof_pitch, 2.0),
            message: |_| "Dakhelling moet minimaal 2° zijn voor waterafvoer".to_string(),
            suggestion: |_| Some("Verhoog de dakhelling naar minimaal 2°".to_string()),
        },
        Rule {
            field: "roof_pitch",
            severity: Severity::Warning,
            check: |c| at_most(c.roof_pitch, 15.0),
            message: |_| "Dakhelling boven 15° is ongebruikelijk voor een carport".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "roof_overhang",
            severity: Severity::Error,
            check: |c| at_least(c.roof_overhang, 0.0),
            message: |_| "Overstrek kan niet negatief zijn".to_string(),
            suggestion: |_| Some("Kies een overstrek tussen 0.2m en 0.5m".to_string()),
        },
        Rule {
            field: "roof_overhang",
            severity: Severity::Warning,
            check: |c| at_least(c.roof_overhang, 0.2),
            message: |_| "Minimale overstrek van 0.2m aanbevolen voor betere bescherming".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "roof_overhang",
            severity: Severity::Warning,
            check: |c| at_most(c.roof_overhang, 0.5),
            message: |_| "Overstrek boven 0.5m kan extra verstevigingen vereisen".to_string(),
            suggestion: no_suggestion,
        },
        // Structure
        Rule {
            field: "post_size",
            severity: Severity::Warning,
            check: |c| at_most(span(c), 5.0) || c.post_size >= 120,
            message: |_| "Voor spans boven 5m worden palen van 120mm of groter aanbevolen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "post_size",
            severity: Severity::Error,
            check: |c| at_most(span(c), 6.0) || c.post_size >= 150,
            message: |_| "Voor spans boven 6m zijn palen van 150mm vereist".to_string(),
            suggestion: |_| Some("Verhoog de paalgrootte naar 150mm".to_string()),
        },
        Rule {
            field: "post_size",
            severity: Severity::Warning,
            check: |c| restrictions(ProductKind::Carport).post_sizes.contains(&c.post_size),
            message: |c| format!("Paalmaat {}mm is geen standaardmaat", c.post_size),
            suggestion: |_| Some("Kies 100, 120 of 150mm".to_string()),
        },
        Rule {
            field: "beam_size",
            severity: Severity::Warning,
            check: |c| at_most(c.width, 4.0) || c.beam_size >= 150,
            message: |_| "Voor breedte boven 4m worden balken van 150mm of groter aanbevolen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "beam_size",
            severity: Severity::Warning,
            check: |c| restrictions(ProductKind::Carport).beam_sizes.contains(&c.beam_size),
            message: |c| format!("Balkmaat {}mm is geen standaardmaat", c.beam_size),
            suggestion: |_| Some("Kies 120, 150 of 200mm".to_string()),
        },
        // Materials and finish
        Rule {
            field: "roof_material",
            severity: Severity::Warning,
            check: |c| c.roof_material != CanopyRoofMaterial::Glass || at_least(c.roof_pitch, 5.0),
            message: |_| "Glazen daken vereisen minimaal 5° helling voor zelfreiniging".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "custom_ral",
            severity: Severity::Error,
            check: |c| {
                c.ral_color != RalColor::Custom
                    || c.custom_ral.as_deref().is_some_and(|code| !code.trim().is_empty())
            },
            message: |_| "Vul een RAL-code in voor een kleur op maat".to_string(),
            suggestion: |_| Some("Bijvoorbeeld RAL-7021".to_string()),
        },
    ]
});
