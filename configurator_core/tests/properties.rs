use configurator_core::bom::{generate_bom, BomCategory};
use configurator_core::config::{
    restrictions, CanopyRoofMaterial, CarportConfiguration, FloorMaterial, Footing, GlassSides,
    GlassType, GutterType, LightingType, ProductKind, RalColor, RoofType, ShedConfiguration,
    ShedRoofMaterial, ShedType, SidePanel, VerandaConfiguration, WallAttachment, WallMaterial,
};
use configurator_core::geometry::derive_geometry;
use configurator_core::pricing::{calculate_price, Country, PricingContext};
use configurator_core::{estimate, validate, Configuration};
use proptest::prelude::*;
use proptest::sample::select;

/// Lengths are drawn in whole centimeters so band edges compare exactly.
fn cm(lo: f64, hi: f64) -> impl Strategy<Value = f64> {
    ((lo * 100.0).round() as u32..=(hi * 100.0).round() as u32).prop_map(|v| f64::from(v) / 100.0)
}

fn degrees(lo: u32, hi: u32) -> impl Strategy<Value = f64> {
    (lo..=hi).prop_map(f64::from)
}

const SHED_TYPES: [ShedType; 4] = [
    ShedType::StorageShed,
    ShedType::GardenHouse,
    ShedType::Barn,
    ShedType::Workshop,
];

const STANDARD_COLORS: [RalColor; 6] = [
    RalColor::Ral7016,
    RalColor::Ral9005,
    RalColor::Ral9010,
    RalColor::Ral7035,
    RalColor::Ral9006,
    RalColor::Ral8017,
];

const GUTTERS: [GutterType; 3] = [GutterType::None, GutterType::StandardPvc, GutterType::AluminumSeamless];

const LIGHTING: [LightingType; 4] = [
    LightingType::None,
    LightingType::LedStrip,
    LightingType::RecessedSpots,
    LightingType::Pendant,
];

const FOOTINGS: [Footing; 3] = [Footing::SurfaceMount, Footing::ConcreteBolted, Footing::FoundationEmbedded];

fn shed_in_bounds() -> impl Strategy<Value = ShedConfiguration> {
    select(SHED_TYPES.to_vec()).prop_flat_map(|shed_type| {
        let limits = restrictions(ProductKind::Shed(shed_type));
        let doors = limits.door_count.map_or((1, 1), |b| (b.min, b.max));
        let windows = limits.window_count.map_or((0, 0), |b| (b.min, b.max));
        let dimensions = (
            cm(limits.width.min, limits.width.max),
            cm(limits.depth.min, limits.depth.max),
            cm(limits.height.min, limits.height.max),
            select(limits.allowed_roof_types.to_vec()),
            degrees(15, 45),
        );
        let openings = (
            doors.0..=doors.1,
            cm(0.8, 2.5),
            0.0..1.0f64,
            windows.0..=windows.1,
            cm(0.6, 1.5),
            cm(0.6, 1.2),
        );
        let finish = (
            select(WallMaterial::ALL.to_vec()),
            select(ShedRoofMaterial::ALL.to_vec()),
            select(FloorMaterial::ALL.to_vec()),
            any::<bool>(),
        );
        (Just(shed_type), dimensions, openings, finish).prop_map(
            |(
                shed_type,
                (width, length, wall_height, roof_type, roof_pitch),
                (door_count, door_width, door_fraction, window_count, window_width, window_height),
                (wall_material, roof_material, floor_material, include_floor),
            )| {
                // Door height stays at least 11 cm below the wall plate
                let door_max = (wall_height * 100.0 - 11.0).min(250.0);
                let door_cm = 180.0 + ((door_max - 180.0) * door_fraction).floor();
                ShedConfiguration {
                    shed_type,
                    width,
                    length,
                    wall_height,
                    roof_type,
                    roof_pitch,
                    door_count,
                    door_width,
                    door_height: door_cm / 100.0,
                    window_count,
                    window_width,
                    window_height,
                    wall_material,
                    roof_material,
                    floor_material,
                    include_floor,
                }
            },
        )
    })
}

fn carport_in_bounds() -> impl Strategy<Value = CarportConfiguration> {
    let shape = (
        cm(2.5, 6.0),
        cm(4.0, 7.0),
        cm(2.1, 3.0),
        select(vec![RoofType::Flat, RoofType::Gabled, RoofType::MonoSlope]),
        degrees(2, 15),
        select(CanopyRoofMaterial::ALL.to_vec()),
        cm(0.0, 0.5),
    );
    let build = (
        select(vec![100u32, 120, 150]),
        select(vec![120u32, 150, 200]),
        select(STANDARD_COLORS.to_vec()),
        select(FOOTINGS.to_vec()),
    );
    let options = (
        select(GUTTERS.to_vec()),
        select(LIGHTING.to_vec()),
        select(vec![SidePanel::None, SidePanel::Left, SidePanel::Right, SidePanel::Both]),
        any::<bool>(),
    );
    (shape, build, options).prop_map(
        |(
            (width, depth, height, roof_type, roof_pitch, roof_material, roof_overhang),
            (post_size, beam_size, ral_color, footing),
            (gutters, lighting, side_panel, storage_area),
        )| {
            // Spans above 6 m require the heaviest post
            let post_size = if width.max(depth) > 6.0 { 150 } else { post_size };
            CarportConfiguration {
                width,
                depth,
                height,
                roof_type,
                roof_pitch,
                roof_material,
                roof_overhang,
                post_size,
                beam_size,
                ral_color,
                custom_ral: None,
                footing,
                gutters,
                lighting,
                side_panel,
                storage_area,
            }
        },
    )
}

fn veranda_in_bounds() -> impl Strategy<Value = VerandaConfiguration> {
    let shape = (
        cm(3.0, 10.0),
        cm(2.5, 5.0),
        cm(2.2, 3.5),
        select(vec![RoofType::Flat, RoofType::MonoSlope]),
        degrees(2, 10),
        select(CanopyRoofMaterial::ALL.to_vec()),
        cm(0.0, 0.3),
    );
    let build = (
        select(vec![80u32, 100, 120]),
        select(vec![400u32, 500, 600]),
        select(STANDARD_COLORS.to_vec()),
        select(FOOTINGS.to_vec()),
        select(vec![WallAttachment::Bracket, WallAttachment::LedgerBoard]),
    );
    let glazing = (
        select(vec![
            GlassType::None,
            GlassType::SlidingGlass,
            GlassType::FixedGlass,
            GlassType::Polycarbonate,
        ]),
        select(vec![GlassSides::Left, GlassSides::Right, GlassSides::Both, GlassSides::Front]),
    );
    let options = (
        select(GUTTERS.to_vec()),
        select(LIGHTING.to_vec()),
        any::<bool>(),
        any::<bool>(),
    );
    (shape, build, glazing, options).prop_map(
        |(
            (width, depth, height, roof_type, roof_pitch, roof_material, roof_overhang),
            (post_size, rafter_spacing, ral_color, footing, wall_attachment),
            (glass_type, sides),
            (gutters, lighting, heater, motorized_awning),
        )| {
            let glass_sides = if glass_type.is_selected() { sides } else { GlassSides::None };
            VerandaConfiguration {
                width,
                depth,
                height,
                roof_type,
                roof_pitch,
                roof_material,
                roof_overhang,
                post_size,
                rafter_spacing,
                ral_color,
                custom_ral: None,
                glass_type,
                glass_sides,
                footing,
                gutters,
                lighting,
                heater,
                motorized_awning,
                wall_attachment,
            }
        },
    )
}

fn any_configuration() -> impl Strategy<Value = Configuration> {
    prop_oneof![
        shed_in_bounds().prop_map(Configuration::Shed),
        carport_in_bounds().prop_map(Configuration::Carport),
        veranda_in_bounds().prop_map(Configuration::Veranda),
    ]
}

fn any_context() -> impl Strategy<Value = PricingContext> {
    (
        select(Country::ALL.to_vec()),
        any::<bool>(),
        select(vec![None, Some("Noord-Holland"), Some("Bayern"), Some("Flanders"), Some("Atlantis")]),
    )
        .prop_map(|(country, installation, region)| {
            let context = PricingContext::new(country).with_installation(installation);
            match region {
                Some(region) => context.with_region(region),
                None => context,
            }
        })
}

proptest! {
    /// In-bounds configurations never produce blocking errors.
    #[test]
    fn in_bounds_has_no_errors(config in any_configuration()) {
        let result = validate(&config);
        prop_assert!(result.errors.is_empty(), "{:?} gave {:?}", config, result.errors);
        prop_assert!(result.valid);
    }

    #[test]
    fn narrow_shed_reports_width(shed in shed_in_bounds(), shortfall in 1u32..=150) {
        let min = restrictions(ProductKind::Shed(shed.shed_type)).width.min;
        let narrow = ShedConfiguration { width: min - f64::from(shortfall) / 100.0, ..shed };
        let result = validate(&Configuration::Shed(narrow));
        prop_assert!(result.errors.iter().any(|e| e.field == "width"));
    }

    #[test]
    fn narrow_canopy_reports_width(
        carport in carport_in_bounds(),
        veranda in veranda_in_bounds(),
        shortfall in 1u32..=200,
    ) {
        let shortfall = f64::from(shortfall) / 100.0;
        let carport = CarportConfiguration { width: 2.5 - shortfall, ..carport };
        let veranda = VerandaConfiguration { width: 3.0 - shortfall, ..veranda };
        prop_assert!(validate(&Configuration::Carport(carport)).has_error_on("width"));
        prop_assert!(validate(&Configuration::Veranda(veranda)).has_error_on("width"));
    }

    /// total = subtotal + vat, vat = round(subtotal x rate), min < total < max
    #[test]
    fn price_identities(config in any_configuration(), context in any_context()) {
        let price = calculate_price(&config, &context);
        prop_assert_eq!(price.vat_rate, context.country.vat_rate());
        prop_assert_eq!(price.total, price.subtotal + price.vat);
        prop_assert_eq!(price.vat, (price.subtotal * context.country.vat_rate()).round());
        prop_assert!(price.range.min < price.total);
        prop_assert!(price.total < price.range.max);
        prop_assert_eq!(price.currency.as_str(), "EUR");
    }

    #[test]
    fn bom_counts_its_items(config in any_configuration()) {
        let bom = generate_bom(&config);
        prop_assert_eq!(bom.total_items, bom.items.len());
        prop_assert!(bom.items.iter().all(|item| item.quantity >= 0.0));
    }

    /// A gutter run is listed exactly when gutters are selected
    #[test]
    fn gutter_follows_option(carport in carport_in_bounds(), veranda in veranda_in_bounds()) {
        let carport_gutters = generate_bom(&Configuration::Carport(carport.clone()))
            .items_in(BomCategory::Drainage)
            .count();
        prop_assert_eq!(carport_gutters, usize::from(carport.gutters.is_selected()));

        let veranda_gutters = generate_bom(&Configuration::Veranda(veranda.clone()))
            .items_in(BomCategory::Drainage)
            .count();
        prop_assert_eq!(veranda_gutters, usize::from(veranda.gutters.is_selected()));
    }

    #[test]
    fn pipeline_is_idempotent(config in any_configuration(), context in any_context()) {
        let copy = config.clone();
        prop_assert_eq!(estimate(&config, &context), estimate(&copy, &context));
    }

    #[test]
    fn footprint_is_exact_product(config in any_configuration()) {
        let g = derive_geometry(&config);
        let expected = match &config {
            Configuration::Shed(s) => s.width * s.length,
            Configuration::Carport(c) => c.width * c.depth,
            Configuration::Veranda(v) => v.width * v.depth,
        };
        prop_assert_eq!(g.footprint_area, expected);
    }

    #[test]
    fn roof_area_grows_with_pitch(
        carport in carport_in_bounds(),
        low in 0u32..60,
        step in 1u32..20,
    ) {
        let at = |pitch: f64| {
            derive_geometry(&Configuration::Carport(CarportConfiguration {
                roof_type: RoofType::Gabled,
                roof_pitch: pitch,
                ..carport.clone()
            }))
        };
        let shallow = at(f64::from(low));
        let steep = at(f64::from(low + step));
        prop_assert!(shallow.roof_area < steep.roof_area);

        let expected = steep.covered_area / f64::from(low + step).to_radians().cos();
        prop_assert!((steep.roof_area - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn flat_roof_covers_adjusted_footprint(carport in carport_in_bounds()) {
        let g = derive_geometry(&Configuration::Carport(CarportConfiguration {
            roof_type: RoofType::Flat,
            ..carport
        }));
        prop_assert_eq!(g.roof_area, g.covered_area);
    }
}
