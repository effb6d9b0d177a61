//! Surface primitives.
//!
//! A [`Primitive`] is the smallest thing a surface holds: a shape already
//! placed in device coordinates, with its paint fully resolved. Primitives
//! know their own [`bounds`](Primitive::bounds) and how to become an SVG
//! element, and nothing else.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{StrokeDefinition, layer::SvgNode},
    geometry::{Bounds, Point, Size},
};

/// Average glyph advance relative to the font size, used for text bounds.
const GLYPH_ADVANCE_RATIO: f32 = 0.6;

/// A drawable primitive in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle, optionally with rounded corners.
    Rect {
        bounds: Bounds,
        corner_radius: f32,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    /// Straight line segment.
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    /// Open line through two or more points.
    Polyline {
        points: Vec<Point>,
        stroke: StrokeDefinition,
    },
    /// Closed shape through three or more points.
    Polygon {
        points: Vec<Point>,
        fill: Option<Color>,
        stroke: Option<StrokeDefinition>,
    },
    /// Text centered on `position`.
    Text {
        position: Point,
        content: String,
        font_size: f32,
        color: Color,
    },
}

impl Primitive {
    /// Short name of the primitive kind, matching its SVG element.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Polyline { .. } => "polyline",
            Self::Polygon { .. } => "polygon",
            Self::Text { .. } => "text",
        }
    }

    /// The area covered by the primitive's geometry.
    ///
    /// Stroke width is not included. Text bounds are estimated from the
    /// font size and character count.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rect { bounds, .. } => *bounds,
            Self::Line { from, to, .. } => Bounds::from_corners(*from, *to),
            Self::Circle { center, radius, .. } => {
                center.to_bounds(Size::new(radius * 2.0, radius * 2.0))
            }
            Self::Polyline { points, .. } | Self::Polygon { points, .. } => points_bounds(points),
            Self::Text {
                position,
                content,
                font_size,
                ..
            } => {
                let width = content.chars().count() as f32 * font_size * GLYPH_ADVANCE_RATIO;
                position.to_bounds(Size::new(width, *font_size))
            }
        }
    }

    /// Converts the primitive into an SVG element.
    pub fn to_svg_node(&self) -> SvgNode {
        match self {
            Self::Rect {
                bounds,
                corner_radius,
                fill,
                stroke,
            } => {
                let mut rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height());
                if *corner_radius > 0.0 {
                    rect = rect.set("rx", *corner_radius).set("ry", *corner_radius);
                }
                rect = apply_fill(rect, fill.as_ref());
                if let Some(stroke) = stroke {
                    rect = apply_stroke!(rect, stroke);
                }
                Box::new(rect)
            }
            Self::Line { from, to, stroke } => {
                let line = svg_element::Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                Box::new(apply_stroke!(line, stroke))
            }
            Self::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let mut circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius);
                circle = apply_fill(circle, fill.as_ref());
                if let Some(stroke) = stroke {
                    circle = apply_stroke!(circle, stroke);
                }
                Box::new(circle)
            }
            Self::Polyline { points, stroke } => {
                let polyline = svg_element::Polyline::new()
                    .set("points", points_attribute(points))
                    .set("fill", "none");
                Box::new(apply_stroke!(polyline, stroke))
            }
            Self::Polygon {
                points,
                fill,
                stroke,
            } => {
                let mut polygon =
                    svg_element::Polygon::new().set("points", points_attribute(points));
                polygon = apply_fill(polygon, fill.as_ref());
                if let Some(stroke) = stroke {
                    polygon = apply_stroke!(polygon, stroke);
                }
                Box::new(polygon)
            }
            Self::Text {
                position,
                content,
                font_size,
                color,
            } => {
                let text = svg_element::Text::new(content.clone())
                    .set("x", position.x())
                    .set("y", position.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", "sans-serif")
                    .set("font-size", *font_size)
                    .set("fill", color);
                Box::new(text)
            }
        }
    }
}

fn apply_fill<T: svg::Node>(mut element: T, fill: Option<&Color>) -> T {
    match fill {
        Some(color) => {
            element.assign("fill", color);
            element.assign("fill-opacity", color.alpha());
        }
        None => element.assign("fill", "none"),
    }
    element
}

fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn points_bounds(points: &[Point]) -> Bounds {
    let Some((first, rest)) = points.split_first() else {
        return Bounds::default();
    };
    rest.iter().fold(Bounds::from_corners(*first, *first), |acc, p| {
        acc.merge(&Bounds::from_corners(*p, *p))
    })
}
