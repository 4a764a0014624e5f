//! Veranda rule table.
//!
//! A veranda always needs a fall of at least 2° towards the front gutter,
//! also when it is ordered as a "flat" roof. Gabled roofs cannot be mounted
//! against a wall.

use once_cell::sync::Lazy;

use super::rules::{at_least, at_most, finite_rule, no_suggestion, Rule};
use super::Severity;
use crate::config::{
    restrictions, CanopyRoofMaterial, GlassSides, GlassType, ProductKind, RalColor, RoofType,
    VerandaConfiguration, WallAttachment,
};

type VerandaRule = Rule<VerandaConfiguration>;

pub static RULES: Lazy<Vec<VerandaRule>> = Lazy::new(|| {
    vec![
        finite_rule!(VerandaConfiguration, width, "Breedte"),
        finite_rule!(VerandaConfiguration, depth, "Uitstrek"),
        finite_rule!(VerandaConfiguration, height, "Hoogte"),
        finite_rule!(VerandaConfiguration, roof_pitch, "Dakhelling"),
        finite_rule!(VerandaConfiguration, roof_overhang, "Overstrek"),
        // Dimensions
        Rule {
            field: "width",
            severity: Severity::Error,
            check: |c| at_least(c.width, 3.0),
            message: |_| "Breedte moet minimaal 3.0m zijn voor een veranda".to_string(),
            suggestion: |_| Some("Verhoog de breedte naar minimaal 3.0m".to_string()),
        },
        Rule {
            field: "width",
            severity: Severity::Warning,
            check: |c| at_most(c.width, 10.0),
            message: |_| "Breedte boven 10.0m kan speciale constructie vereisen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "depth",
            severity: Severity::Error,
            check: |c| at_least(c.depth, 2.5),
            message: |_| "Uitstrek vanaf muur moet minimaal 2.5m zijn".to_string(),
            suggestion: |_| Some("Verhoog de diepte naar minimaal 2.5m".to_string()),
        },
        Rule {
            field: "depth",
            severity: Severity::Warning,
            check: |c| at_most(c.depth, 5.0),
            message: |_| "Uitstrek boven 5.0m kan extra palen vereisen voor stabiliteit".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "height",
            severity: Severity::Error,
            check: |c| at_least(c.height, 2.2),
            message: |_| "Hoogte moet minimaal 2.2m zijn voor comfort".to_string(),
            suggestion: |_| Some("Verhoog de hoogte naar minimaal 2.2m".to_string()),
        },
        Rule {
            field: "height",
            severity: Severity::Warning,
            check: |c| at_most(c.height, 3.5),
            message: |_| "Hoogte boven 3.5m kan windbelasting problemen geven".to_string(),
            suggestion: no_suggestion,
        },
        // Roof
        Rule {
            field: "roof_type",
            severity: Severity::Error,
            check: |c| c.roof_type != RoofType::Gabled,
            message: |_| "Een zadeldak is niet mogelijk voor een veranda tegen de gevel".to_string(),
            suggestion: |_| Some("Kies een plat dak of lessenaarsdak".to_string()),
        },
        Rule {
            field: "roof_pitch",
            severity: Severity::Error,
            check: |c| at_least(c.roof_pitch, 2.0),
            message: |_| "Dakhelling moet minimaal 2° zijn voor waterafvoer".to_string(),
            suggestion: |_| Some("Verhoog de dakhelling naar minimaal 2°".to_string()),
        },
        Rule {
            field: "roof_pitch",
            severity: Severity::Warning,
            check: |c| at_most(c.roof_pitch, 10.0),
            message: |_| "Dakhelling boven 10° is ongebruikelijk voor een veranda".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "roof_overhang",
            severity: Severity::Error,
            check: |c| at_least(c.roof_overhang, 0.0),
            message: |_| "Overstrek kan niet negatief zijn".to_string(),
            suggestion: |_| Some("Kies een overstrek tussen 0.1m en 0.3m".to_string()),
        },
        Rule {
            field: "roof_overhang",
            severity: Severity::Warning,
            check: |c| at_least(c.roof_overhang, 0.1),
            message: |_| "Minimale overstrek van 0.1m aanbevolen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "roof_overhang",
            severity: Severity::Warning,
            check: |c| at_most(c.roof_overhang, 0.3),
            message: |_| "Overstrek boven 0.3m kan extra verstevigingen vereisen".to_string(),
            suggestion: no_suggestion,
        },
        // Structure
        Rule {
            field: "post_size",
            severity: Severity::Warning,
            check: |c| at_most(c.depth, 4.0) || c.post_size >= 100,
            message: |_| "Voor uitstrek boven 4m worden palen van 100mm of groter aanbevolen".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "post_size",
            severity: Severity::Warning,
            check: |c| restrictions(ProductKind::Veranda).post_sizes.contains(&c.post_size),
            message: |c| format!("Paalmaat {}mm is geen standaardmaat", c.post_size),
            suggestion: |_| Some("Kies 80, 100 of 120mm".to_string()),
        },
        Rule {
            field: "rafter_spacing",
            severity: Severity::Error,
            check: |c| c.rafter_spacing > 0,
            message: |_| "Spantafstand moet groter dan 0 zijn".to_string(),
            suggestion: |_| Some("Kies 400, 500 of 600mm".to_string()),
        },
        Rule {
            field: "rafter_spacing",
            severity: Severity::Warning,
            check: |c| c.rafter_spacing <= 600,
            message: |_| "Grotere afstand tussen spanten kan dakvervorming veroorzaken".to_string(),
            suggestion: no_suggestion,
        },
        // Glazing and options
        Rule {
            field: "glass_sides",
            severity: Severity::Error,
            check: |c| !c.glass_type.is_selected() || c.glass_sides != GlassSides::None,
            message: |_| "Selecteer welke zijden beglazing krijgen".to_string(),
            suggestion: |_| Some("Kies left, right, both, of front".to_string()),
        },
        Rule {
            field: "roof_material",
            severity: Severity::Warning,
            check: |c| {
                c.glass_type != GlassType::SlidingGlass || c.roof_material == CanopyRoofMaterial::Glass
            },
            message: |_| "Schuifbare glazen wanden combineren goed met een glazen dak".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "heater",
            severity: Severity::Warning,
            check: |c| !c.heater || c.glass_type.is_selected(),
            message: |_| "Verwarming is efficiënter met beglazing".to_string(),
            suggestion: no_suggestion,
        },
        Rule {
            field: "wall_attachment",
            severity: Severity::Warning,
            check: |c| c.wall_attachment != WallAttachment::LedgerBoard || at_most(c.width, 6.0),
            message: |_| "Voor brede veranda's kunnen extra beugels nodig zijn".to_string(),
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
