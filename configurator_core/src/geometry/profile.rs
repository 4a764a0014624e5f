//! Per-product geometry profiles.
//!
//! The three products share one derivation in [`super`]; what differs between
//! them is captured here as data: how the overhang extends the footprint, how
//! the gutter perimeter is measured, and how posts and rafters are counted.

use serde::Serialize;

use crate::math::count_at_spacing;

/// How the roof overhang extends the footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverhangMode {
    /// No overhang (sheds)
    None,
    /// Added on all four sides (free-standing carport)
    AllSides,
    /// Added once to the depth, past the front beam (wall-mounted veranda)
    Projection,
}

/// How the perimeter is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerimeterMode {
    /// Closed footprint outline: `2 (w + d)`
    Footprint,
    /// Outline of the overhang-adjusted roof
    Outline,
    /// Front plus both sides; the back is against the wall: `w + 2 d`
    ThreeSided,
}

/// Which run the main beam spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeamRun {
    /// Front to back including overhang
    CoveredDepth,
    /// Along the width (veranda front beam)
    Width,
}

/// A one-sided or two-sided threshold test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cmp {
    Any,
    /// `value < limit`
    Below(f64),
    /// `value >= limit`
    AtLeast(f64),
    /// `value > limit`
    Above(f64),
    /// `lo <= value < hi`
    Within(f64, f64),
}

impl Cmp {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Cmp::Any => true,
            Cmp::Below(limit) => value < limit,
            Cmp::AtLeast(limit) => value >= limit,
            Cmp::Above(limit) => value > limit,
            Cmp::Within(lo, hi) => value >= lo && value < hi,
        }
    }
}

/// One row of a post-count step table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostStep {
    pub width: Cmp,
    pub depth: Cmp,
    pub posts: u32,
}

impl PostStep {
    pub fn matches(&self, width: f64, depth: f64) -> bool {
        self.width.matches(width) && self.depth.matches(depth)
    }
}

/// Carport post steps, first match wins.
pub static CARPORT_POST_STEPS: [PostStep; 5] = [
    PostStep { width: Cmp::Below(4.0), depth: Cmp::Below(6.0), posts: 4 },
    PostStep { width: Cmp::Within(4.0, 6.0), depth: Cmp::Any, posts: 6 },
    PostStep { width: Cmp::AtLeast(6.0), depth: Cmp::Any, posts: 8 },
    PostStep { width: Cmp::Any, depth: Cmp::Above(6.5), posts: 8 },
    PostStep { width: Cmp::Any, depth: Cmp::Any, posts: 4 },
];

/// How posts are counted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostLayout {
    /// A fixed number of corner posts
    Corners(u32),
    /// Step table on width and depth
    Steps(&'static [PostStep]),
    /// Posts along the front edge at a maximum spacing, plus the end post
    FrontSpacing { spacing: f64, min: u32 },
}

impl PostLayout {
    pub fn post_count(&self, width: f64, depth: f64) -> u32 {
        match *self {
            PostLayout::Corners(count) => count,
            PostLayout::Steps(steps) => steps
                .iter()
                .find(|step| step.matches(width, depth))
                .map(|step| step.posts)
                .unwrap_or(4),
            PostLayout::FrontSpacing { spacing, min } => {
                (count_at_spacing(width, spacing) + 1).max(min)
            }
        }
    }
}

/// How rafters are counted across the width
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RafterLayout {
    /// Fixed center-to-center spacing in meters
    Fixed { spacing: f64, end_rafter: bool },
    /// Spacing taken from the configuration
    Configured { end_rafter: bool },
}

impl RafterLayout {
    /// `configured` is the configuration's own spacing in meters, if any.
    pub fn rafter_count(&self, width: f64, configured: Option<f64>) -> u32 {
        let (spacing, end_rafter) = match *self {
            RafterLayout::Fixed { spacing, end_rafter } => (spacing, end_rafter),
            RafterLayout::Configured { end_rafter } => (configured.unwrap_or(f64::NAN), end_rafter),
        };
        let count = count_at_spacing(width, spacing);
        if end_rafter && count > 0 {
            count + 1
        } else {
            count
        }
    }
}

/// Geometry rules for one product
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryProfile {
    pub overhang: OverhangMode,
    pub perimeter: PerimeterMode,
    pub beam: BeamRun,
    pub posts: PostLayout,
    pub rafters: RafterLayout,
    /// Whether the product has closed walls (wall, opening and volume figures)
    pub closed_walls: bool,
}

pub static SHED_PROFILE: GeometryProfile = GeometryProfile {
    overhang: OverhangMode::None,
    perimeter: PerimeterMode::Footprint,
    beam: BeamRun::CoveredDepth,
    posts: PostLayout::Corners(4),
    rafters: RafterLayout::Fixed { spacing: 0.6, end_rafter: false },
    closed_walls: true,
};

pub static CARPORT_PROFILE: GeometryProfile = GeometryProfile {
    overhang: OverhangMode::AllSides,
    perimeter: PerimeterMode::Outline,
    beam: BeamRun::CoveredDepth,
    posts: PostLayout::Steps(&CARPORT_POST_STEPS),
    rafters: RafterLayout::Fixed { spacing: 0.6, end_rafter: true },
    closed_walls: false,
};

pub static VERANDA_PROFILE: GeometryProfile = GeometryProfile {
    overhang: OverhangMode::Projection,
    perimeter: PerimeterMode::ThreeSided,
    beam: BeamRun::Width,
    posts: PostLayout::FrontSpacing { spacing: 2.5, min: 2 },
    rafters: RafterLayout::Configured { end_rafter: true },
    closed_walls: false,
};
