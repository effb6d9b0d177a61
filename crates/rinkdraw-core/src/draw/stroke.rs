//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width, pattern, cap and join of a line
//! - [`StrokeStyle`]: line pattern (solid, dashed, dotted)
//! - [`StrokeCap`] / [`StrokeJoin`]: endpoint and corner rendering
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"8,6"`, `"0.1,4"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |

use crate::color::Color;

/// Defines the dash pattern of a stroke.
///
/// Patterns are proportional to the stroke width so that a line keeps the
/// same look at every surface size:
/// - `Solid`: no dasharray attribute
/// - `Dashed`: dash of 4 widths, gap of 3 widths
/// - `Dotted`: round dots 3 widths apart (pair with [`StrokeCap::Round`])
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self, width: f32) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(format!("{},{}", width * 4.0, width * 3.0)),
            Self::Dotted => Some(format!("{},{}", width * 0.05, width * 3.0)),
        }
    }
}

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Defines how line corners (joins) are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use rinkdraw_core::draw::{StrokeCap, StrokeDefinition, StrokeStyle};
/// use rinkdraw_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("red").unwrap(), 2.0);
/// assert_eq!(stroke.style(), StrokeStyle::Solid);
///
/// let dotted = StrokeDefinition::dotted(Color::new("black").unwrap(), 1.5);
/// assert_eq!(dotted.cap(), StrokeCap::Round);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Creates a dotted stroke. Dots need round caps to be visible.
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke.set_cap(StrokeCap::Round);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Returns the SVG dasharray for this stroke, or None for solid lines.
    pub fn dasharray(&self) -> Option<String> {
        self.style.to_svg_value(self.width)
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Returns this stroke with round caps and joins.
    pub fn rounded(mut self) -> Self {
        self.cap = StrokeCap::Round;
        self.join = StrokeJoin::Round;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width, line cap, line join, and the dash pattern
/// when the stroke is not solid.
///
/// # Examples
///
/// ```
/// use rinkdraw_core::draw::StrokeDefinition;
/// use rinkdraw_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 10)
///     .set("y2", 0);
///
/// let line = rinkdraw_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.dasharray() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
