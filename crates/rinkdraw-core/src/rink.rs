//! Fixed rink geometry.
//!
//! Every diagram is drawn in the same logical coordinate space: a rink
//! [`RINK_WIDTH`] units long and [`RINK_HEIGHT`] units wide, origin at the
//! top-left corner. The reference markings (goal lines, blue lines, the red
//! line and the face-off dots) are derived from the constants in this module
//! by [`compute_zone_markers`] and never depend on diagram input.

use std::{fmt, str::FromStr};

use crate::geometry::{Bounds, Point, Size};

/// Logical rink length.
pub const RINK_WIDTH: f32 = 200.0;
/// Logical rink width.
pub const RINK_HEIGHT: f32 = 100.0;
/// Radius of the rounded rink corners.
pub const CORNER_RADIUS: f32 = 20.0;
/// Distance from each end board to its goal line.
pub const GOAL_LINE_OFFSET: f32 = 11.0;
/// Distance from each end board to its blue line.
pub const BLUE_LINE_OFFSET: f32 = 75.0;
/// Distance from a blue line to the neutral-zone dots, toward center ice.
pub const NEUTRAL_DOT_OFFSET: f32 = 5.0;
/// Distance from a goal line to the end-zone dots, toward center ice.
pub const END_ZONE_DOT_OFFSET: f32 = 20.0;
/// Vertical distance of the off-center face-off dots from the center line.
pub const FACEOFF_DOT_SPREAD: f32 = 26.0;

/// The whole rink as bounds in logical coordinates.
pub fn rink_bounds() -> Bounds {
    Bounds::new_from_top_left(Point::default(), Size::new(RINK_WIDTH, RINK_HEIGHT))
}

/// Clamps a point into the rink coordinate space.
///
/// # Examples
///
/// ```
/// # use rinkdraw_core::{geometry::Point, rink};
/// assert_eq!(rink::clamp_to_rink(Point::new(250.0, 50.0)), Point::new(200.0, 50.0));
/// assert_eq!(rink::clamp_to_rink(Point::new(-3.0, 120.0)), Point::new(0.0, 100.0));
/// ```
pub fn clamp_to_rink(point: Point) -> Point {
    point.clamp_to(rink_bounds())
}

/// Vertical span of the rink outline at a given x.
///
/// Inside the rounded corners the usable span shrinks; elsewhere it is the
/// full rink height.
fn vertical_extent_at(x: f32) -> (f32, f32) {
    let dx = if x < CORNER_RADIUS {
        CORNER_RADIUS - x
    } else if x > RINK_WIDTH - CORNER_RADIUS {
        x - (RINK_WIDTH - CORNER_RADIUS)
    } else {
        0.0
    };
    let inset = CORNER_RADIUS - (CORNER_RADIUS * CORNER_RADIUS - dx * dx).max(0.0).sqrt();
    (inset, RINK_HEIGHT - inset)
}

/// The kind of a vertical reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneLineKind {
    GoalLine,
    BlueLine,
    RedLine,
}

impl ZoneLineKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::GoalLine => "goal-line",
            Self::BlueLine => "blue-line",
            Self::RedLine => "red-line",
        }
    }
}

/// A vertical reference line, trimmed to the rink outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLine {
    kind: ZoneLineKind,
    from: Point,
    to: Point,
}

impl ZoneLine {
    fn at(kind: ZoneLineKind, x: f32) -> Self {
        let (top, bottom) = vertical_extent_at(x);
        Self {
            kind,
            from: Point::new(x, top),
            to: Point::new(x, bottom),
        }
    }

    pub fn kind(&self) -> ZoneLineKind {
        self.kind
    }

    pub fn x(&self) -> f32 {
        self.from.x()
    }

    /// Top end of the line.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Bottom end of the line.
    pub fn to(&self) -> Point {
        self.to
    }
}

/// The invariant reference markings of the rink.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMarkers {
    lines: Vec<ZoneLine>,
    faceoff_dots: Vec<Point>,
}

impl ZoneMarkers {
    /// Reference lines, ordered left to right.
    pub fn lines(&self) -> &[ZoneLine] {
        &self.lines
    }

    /// Face-off dot centers, ordered left to right then top to bottom.
    pub fn faceoff_dots(&self) -> &[Point] {
        &self.faceoff_dots
    }

    /// Lines of the given kind, ordered left to right.
    pub fn lines_of(&self, kind: ZoneLineKind) -> impl Iterator<Item = &ZoneLine> {
        self.lines.iter().filter(move |line| line.kind == kind)
    }
}

/// Computes the rink reference markings from the rink constants.
///
/// The result is the same on every call.
///
/// # Examples
///
/// ```
/// # use rinkdraw_core::rink::{compute_zone_markers, ZoneLineKind};
/// let markers = compute_zone_markers();
/// assert_eq!(markers.lines().len(), 5);
/// assert_eq!(markers.faceoff_dots().len(), 9);
/// assert_eq!(markers.lines_of(ZoneLineKind::BlueLine).count(), 2);
/// ```
pub fn compute_zone_markers() -> ZoneMarkers {
    let center_x = RINK_WIDTH / 2.0;
    let center_y = RINK_HEIGHT / 2.0;

    let lines = vec![
        ZoneLine::at(ZoneLineKind::GoalLine, GOAL_LINE_OFFSET),
        ZoneLine::at(ZoneLineKind::BlueLine, BLUE_LINE_OFFSET),
        ZoneLine::at(ZoneLineKind::RedLine, center_x),
        ZoneLine::at(ZoneLineKind::BlueLine, RINK_WIDTH - BLUE_LINE_OFFSET),
        ZoneLine::at(ZoneLineKind::GoalLine, RINK_WIDTH - GOAL_LINE_OFFSET),
    ];

    let spread_xs = [
        GOAL_LINE_OFFSET + END_ZONE_DOT_OFFSET,
        BLUE_LINE_OFFSET + NEUTRAL_DOT_OFFSET,
        RINK_WIDTH - BLUE_LINE_OFFSET - NEUTRAL_DOT_OFFSET,
        RINK_WIDTH - GOAL_LINE_OFFSET - END_ZONE_DOT_OFFSET,
    ];

    let mut faceoff_dots = Vec::with_capacity(9);
    for (i, x) in spread_xs.iter().enumerate() {
        if i == 2 {
            faceoff_dots.push(Point::new(center_x, center_y));
        }
        faceoff_dots.push(Point::new(*x, center_y - FACEOFF_DOT_SPREAD));
        faceoff_dots.push(Point::new(*x, center_y + FACEOFF_DOT_SPREAD));
    }

    ZoneMarkers {
        lines,
        faceoff_dots,
    }
}

/// A named rink zone, bounded by the blue lines.
///
/// Zones are read left to right: the defensive zone is the left end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Defensive,
    Neutral,
    Offensive,
}

impl Zone {
    pub fn name(self) -> &'static str {
        match self {
            Self::Defensive => "defensive",
            Self::Neutral => "neutral",
            Self::Offensive => "offensive",
        }
    }

    /// The zone's area in logical coordinates, spanning the full rink width.
    pub fn bounds(self) -> Bounds {
        let (from, to) = match self {
            Self::Defensive => (0.0, BLUE_LINE_OFFSET),
            Self::Neutral => (BLUE_LINE_OFFSET, RINK_WIDTH - BLUE_LINE_OFFSET),
            Self::Offensive => (RINK_WIDTH - BLUE_LINE_OFFSET, RINK_WIDTH),
        };
        Bounds::from_corners(Point::new(from, 0.0), Point::new(to, RINK_HEIGHT))
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "defensive" => Ok(Self::Defensive),
            "neutral" => Ok(Self::Neutral),
            "offensive" => Ok(Self::Offensive),
            _ => Err(format!(
                "invalid zone `{s}`, valid values: defensive, neutral, offensive"
            )),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
