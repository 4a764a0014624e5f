//! # Geometry Calculator
//!
//! Derives areas, lengths and structural counts from a configuration. The
//! derivation is the same for every product; the differences live in the
//! [`GeometryProfile`] tables of [`profile`].
//!
//! Two entry points:
//!
//! - [`calculate_geometry`] rounds every length and area to one decimal and is
//!   what callers display.
//! - [`derive_geometry`] keeps full precision and is what the BOM and pricing
//!   stages consume, so rounding happens once, at the end.
//!
//! The calculator never validates: any configuration gives a result, and
//! non-finite inputs simply propagate as `NaN`.
//!
//! ## Example
//!
//! ```rust
//! use configurator_core::config::{Configuration, ShedConfiguration};
//! use configurator_core::geometry::calculate_geometry;
//!
//! let shed = ShedConfiguration { width: 4.0, length: 5.0, ..Default::default() };
//! let geometry = calculate_geometry(&Configuration::Shed(shed));
//! assert_eq!(geometry.perimeter, 18.0);
//! assert_eq!(geometry.footprint_area, 20.0);
//! ```

pub mod profile;

pub use profile::{GeometryProfile, CARPORT_PROFILE, SHED_PROFILE, VERANDA_PROFILE};

use serde::{Deserialize, Serialize};

use crate::config::{
    CarportConfiguration, Configuration, RoofType, ShedConfiguration, VerandaConfiguration,
};
use crate::math::{round_display, slope_factor};
use crate::units::{Degrees, Millimeters};
use profile::{BeamRun, OverhangMode, PerimeterMode};

/// Derived geometry of one configuration.
///
/// Lengths in meters, areas in m², volume in m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub perimeter: f64,
    /// `width * depth` (shed: `width * length`)
    pub footprint_area: f64,
    /// Footprint extended by the overhang
    pub covered_area: f64,
    /// Roof surface, slope-corrected for pitched roofs
    pub roof_area: f64,
    pub wall_area: f64,
    pub window_area: f64,
    pub door_area: f64,
    pub opaque_wall_area: f64,
    /// Side panels or glazing, `None` when not selected
    pub enclosure_area: Option<f64>,
    pub volume: f64,
    pub total_height: f64,
    pub beam_length: f64,
    pub post_count: u32,
    pub rafter_count: u32,
}

impl Geometry {
    /// Copy with every length, area and volume rounded to one decimal
    pub fn rounded(&self) -> Geometry {
        Geometry {
            perimeter: round_display(self.perimeter),
            footprint_area: round_display(self.footprint_area),
            covered_area: round_display(self.covered_area),
            roof_area: round_display(self.roof_area),
            wall_area: round_display(self.wall_area),
            window_area: round_display(self.window_area),
            door_area: round_display(self.door_area),
            opaque_wall_area: round_display(self.opaque_wall_area),
            enclosure_area: self.enclosure_area.map(round_display),
            volume: round_display(self.volume),
            total_height: round_display(self.total_height),
            beam_length: round_display(self.beam_length),
            post_count: self.post_count,
            rafter_count: self.rafter_count,
        }
    }
}

// ============================================================================
// Normalized dimensions
// ============================================================================

/// Open sides that receive panels or glazing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enclosure {
    pub sides: u32,
    pub front: bool,
}

/// Product-independent view of a configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub roof_type: RoofType,
    pub roof_pitch: Degrees,
    pub overhang: f64,
    /// Configured rafter spacing (veranda)
    pub rafter_spacing: Option<Millimeters>,
    pub window_area: f64,
    pub door_area: f64,
    pub enclosure: Option<Enclosure>,
}

impl From<&ShedConfiguration> for Dimensions {
    fn from(c: &ShedConfiguration) -> Self {
        Dimensions {
            width: c.width,
            depth: c.length,
            height: c.wall_height,
            roof_type: c.roof_type,
            roof_pitch: Degrees(c.roof_pitch),
            overhang: 0.0,
            rafter_spacing: None,
            window_area: c.window_area(),
            door_area: c.door_area(),
            enclosure: None,
        }
    }
}

impl From<&CarportConfiguration> for Dimensions {
    fn from(c: &CarportConfiguration) -> Self {
        let sides = c.side_panel.side_count();
        Dimensions {
            width: c.width,
            depth: c.depth,
            height: c.height,
            roof_type: c.roof_type,
            roof_pitch: Degrees(c.roof_pitch),
            overhang: c.roof_overhang,
            rafter_spacing: None,
            window_area: 0.0,
            door_area: 0.0,
            enclosure: (sides > 0).then_some(Enclosure { sides, front: false }),
        }
    }
}

impl From<&VerandaConfiguration> for Dimensions {
    fn from(c: &VerandaConfiguration) -> Self {
        use crate::config::GlassSides;

        let enclosure = if c.has_glazing() {
            Some(match c.glass_sides {
                GlassSides::Front => Enclosure { sides: 0, front: true },
                GlassSides::Both => Enclosure { sides: 2, front: false },
                _ => Enclosure { sides: 1, front: false },
            })
        } else {
            None
        };

        Dimensions {
            width: c.width,
            depth: c.depth,
            height: c.height,
            roof_type: c.roof_type,
            roof_pitch: Degrees(c.roof_pitch),
            overhang: c.roof_overhang,
            rafter_spacing: Some(Millimeters(f64::from(c.rafter_spacing))),
            window_area: 0.0,
            door_area: 0.0,
            enclosure,
        }
    }
}

impl Configuration {
    /// Normalized dimensions for the generic derivation
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Configuration::Shed(c) => c.into(),
            Configuration::Carport(c) => c.into(),
            Configuration::Veranda(c) => c.into(),
        }
    }

    pub fn geometry_profile(&self) -> &'static GeometryProfile {
        match self {
            Configuration::Shed(_) => &SHED_PROFILE,
            Configuration::Carport(_) => &CARPORT_PROFILE,
            Configuration::Veranda(_) => &VERANDA_PROFILE,
        }
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Overhang-adjusted width and depth
fn covered_extent(dims: &Dimensions, mode: OverhangMode) -> (f64, f64) {
    match mode {
        OverhangMode::None => (dims.width, dims.depth),
        OverhangMode::AllSides => (dims.width + 2.0 * dims.overhang, dims.depth + 2.0 * dims.overhang),
        OverhangMode::Projection => (dims.width, dims.depth + dims.overhang),
    }
}

/// Roof surface for a horizontal projection.
///
/// Flat roofs keep the projection; pitched roofs divide by `cos(pitch)`.
pub fn roof_surface(projected_area: f64, roof_type: RoofType, pitch: Degrees) -> f64 {
    if roof_type.is_pitched() {
        projected_area * slope_factor(pitch)
    } else {
        projected_area
    }
}

/// Full-precision derivation against an explicit profile
pub fn derive_with_profile(dims: &Dimensions, profile: &GeometryProfile) -> Geometry {
    let (covered_width, covered_depth) = covered_extent(dims, profile.overhang);
    let footprint_area = dims.width * dims.depth;
    let covered_area = covered_width * covered_depth;

    let perimeter = match profile.perimeter {
        PerimeterMode::Footprint => 2.0 * (dims.width + dims.depth),
        PerimeterMode::Outline => 2.0 * (covered_width + covered_depth),
        PerimeterMode::ThreeSided => dims.width + 2.0 * dims.depth,
    };

    let (wall_area, window_area, door_area, opaque_wall_area) = if profile.closed_walls {
        let wall_area = perimeter * dims.height;
        let opaque = wall_area - dims.window_area - dims.door_area;
        (wall_area, dims.window_area, dims.door_area, opaque)
    } else {
        (0.0, 0.0, 0.0, 0.0)
    };

    let enclosure_area = dims.enclosure.map(|e| {
        let sides = f64::from(e.sides) * dims.depth * dims.height;
        let front = if e.front { dims.width * dims.height } else { 0.0 };
        sides + front
    });

    let beam_length = match profile.beam {
        BeamRun::CoveredDepth => covered_depth,
        BeamRun::Width => dims.width,
    };

    let rafter_spacing = dims.rafter_spacing.map(|mm| mm.to_meters().0);

    Geometry {
        perimeter,
        footprint_area,
        covered_area,
        roof_area: roof_surface(covered_area, dims.roof_type, dims.roof_pitch),
        wall_area,
        window_area,
        door_area,
        opaque_wall_area,
        enclosure_area,
        volume: footprint_area * dims.height,
        total_height: dims.height,
        beam_length,
        post_count: profile.posts.post_count(dims.width, dims.depth),
        rafter_count: profile.rafters.rafter_count(dims.width, rafter_spacing),
    }
}

/// Full-precision geometry, for downstream calculations
pub fn derive_geometry(config: &Configuration) -> Geometry {
    derive_with_profile(&config.dimensions(), config.geometry_profile())
}

/// Geometry rounded for display
pub fn calculate_geometry(config: &Configuration) -> Geometry {
    let geometry = derive_geometry(config);
    tracing::debug!(
        product = %config.product_type(),
        roof_area = geometry.roof_area,
        posts = geometry.post_count,
        rafters = geometry.rafter_count,
        "geometry derived"
    );
    geometry.rounded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GlassSides, GlassType, SidePanel};

    fn shed(width: f64, length: f64) -> Configuration {
        Configuration::Shed(ShedConfiguration {
            width,
            length,
            ..ShedConfiguration::default()
        })
    }

    #[test]
    fn test_shed_basic_dimensions() {
        let g = calculate_geometry(&shed(4.0, 5.0));
        assert_eq!(g.perimeter, 18.0);
        assert_eq!(g.footprint_area, 20.0);
        assert_eq!(g.post_count, 4);
        // 18 m * 2.4 m
        assert_eq!(g.wall_area, 43.2);
        // 43.2 - 2 windows (2.0) - 1 door (2.1)
        assert_eq!(g.opaque_wall_area, 39.1);
        assert_eq!(g.volume, 48.0);
    }

    #[test]
    fn test_shed_roof_area() {
        let flat = Configuration::Shed(ShedConfiguration {
            width: 4.0,
            length: 5.0,
            roof_type: RoofType::Flat,
            ..ShedConfiguration::default()
        });
        assert_eq!(derive_geometry(&flat).roof_area, 20.0);

        let pitched = Configuration::Shed(ShedConfiguration {
            width: 4.0,
            length: 5.0,
            roof_type: RoofType::Gabled,
            roof_pitch: 30.0,
            ..ShedConfiguration::default()
        });
        // 20 / cos(30°) = 23.094
        let g = derive_geometry(&pitched);
        assert!((g.roof_area - 23.094_010_767_585_03).abs() < 1e-9);
        assert_eq!(g.rounded().roof_area, 23.1);
    }

    #[test]
    fn test_carport_overhang_and_posts() {
        let mut carport = CarportConfiguration {
            width: 3.0,
            depth: 5.0,
            roof_overhang: 0.3,
            roof_type: RoofType::Flat,
            ..CarportConfiguration::default()
        };
        let g = calculate_geometry(&carport.clone().into());
        assert_eq!(g.footprint_area, 15.0);
        // 3.6 x 5.6
        assert_eq!(g.covered_area, 20.2);
        assert_eq!(g.roof_area, 20.2);
        assert_eq!(g.perimeter, 18.4);
        assert_eq!(g.beam_length, 5.6);
        assert_eq!(g.post_count, 4);
        assert_eq!(g.rafter_count, 6);
        assert_eq!(g.enclosure_area, None);

        carport.width = 4.5;
        assert_eq!(derive_geometry(&carport.into()).post_count, 6);
    }

    #[test]
    fn test_carport_side_panels() {
        let carport = CarportConfiguration {
            depth: 5.0,
            height: 2.2,
            side_panel: SidePanel::Both,
            ..CarportConfiguration::default()
        };
        let g = calculate_geometry(&carport.into());
        assert_eq!(g.enclosure_area, Some(22.0));
    }

    #[test]
    fn test_veranda_projection() {
        let veranda = VerandaConfiguration {
            width: 4.0,
            depth: 3.0,
            height: 2.5,
            roof_type: RoofType::Flat,
            roof_overhang: 0.2,
            rafter_spacing: 500,
            ..VerandaConfiguration::default()
        };
        let g = calculate_geometry(&veranda.into());
        // 4.0 x (3.0 + 0.2)
        assert_eq!(g.roof_area, 12.8);
        assert_eq!(g.perimeter, 10.0);
        assert_eq!(g.beam_length, 4.0);
        assert_eq!(g.post_count, 3);
        assert_eq!(g.rafter_count, 9);
        assert_eq!(g.wall_area, 0.0);
    }

    #[test]
    fn test_veranda_glazing_area() {
        let mut veranda = VerandaConfiguration {
            width: 4.0,
            depth: 3.0,
            height: 2.5,
            glass_type: GlassType::FixedGlass,
            glass_sides: GlassSides::Left,
            ..VerandaConfiguration::default()
        };
        assert_eq!(derive_geometry(&veranda.clone().into()).enclosure_area, Some(7.5));

        veranda.glass_sides = GlassSides::Both;
        assert_eq!(derive_geometry(&veranda.clone().into()).enclosure_area, Some(15.0));

        veranda.glass_sides = GlassSides::Front;
        assert_eq!(derive_geometry(&veranda.clone().into()).enclosure_area, Some(10.0));

        veranda.glass_type = GlassType::None;
        assert_eq!(derive_geometry(&veranda.into()).enclosure_area, None);
    }

    #[test]
    fn test_nan_input_still_yields_geometry() {
        let g = derive_geometry(&shed(f64::NAN, 5.0));
        assert!(g.perimeter.is_nan());
        assert_eq!(g.post_count, 4);
        assert_eq!(g.rafter_count, 0);
    }
}
