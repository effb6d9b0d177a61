//! Scene rendering.
//!
//! The [`Renderer`] walks a [`Diagram`] and fills a [`Surface`] with
//! [`Primitive`]s in surface pixels. The rink is scaled uniformly to fit the
//! surface and centered on it, so the 200:100 aspect ratio survives any
//! surface shape.
//!
//! Primitives are emitted layer by layer, bottom to top:
//!
//! ```text
//! rink outline → zone markers → emphasis → paths → entities → labels
//! ```
//!
//! Within a layer, drawables keep their source order.

use log::{debug, info, warn};

use rinkdraw_core::{
    color::Color,
    draw::{Primitive, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
    rink::{self, CORNER_RADIUS, RINK_HEIGHT, RINK_WIDTH, ZoneLineKind},
    scene::{Diagram, Entity, EntityKind, Path, PathStyle, Region, RegionShape},
};
use rinkdraw_parser::{Diagnostic, ErrorCode};

use crate::{
    config::{ColorScheme, DEFAULT_STROKE_SCALE, StyleConfig},
    surface::Surface,
};

// Sizes in rink units, before scaling.
const OUTLINE_WIDTH: f32 = 0.8;
const GOAL_LINE_WIDTH: f32 = 0.4;
const ZONE_LINE_WIDTH: f32 = 1.0;
const FACEOFF_DOT_RADIUS: f32 = 0.9;
const PATH_WIDTH: f32 = 0.6;
const ARROW_LENGTH: f32 = 3.5;
const ARROW_HALF_WIDTH: f32 = 1.6;
const ENTITY_RADIUS: f32 = 3.0;
const OPPONENT_STROKE_WIDTH: f32 = 0.7;
const PUCK_RADIUS: f32 = 1.2;
const CONE_SIZE: f32 = 4.0;
const GOALIE_SIZE: f32 = 5.5;
const LABEL_FONT_SIZE: f32 = 3.2;

const EMPHASIS_ALPHA: f32 = 0.25;

/// Maps rink coordinates onto surface pixels.
///
/// The scale is `min(w / 200, h / 100)`; the leftover space is split evenly
/// on both sides of the rink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f32,
    offset: Point,
}

impl Viewport {
    /// Fits the rink inside a surface of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rinkdraw::render::Viewport;
    /// # use rinkdraw::geometry::{Point, Size};
    /// let viewport = Viewport::fit(Size::new(400.0, 100.0));
    /// assert_eq!(viewport.scale(), 1.0);
    /// assert_eq!(viewport.offset(), Point::new(100.0, 0.0));
    /// ```
    pub fn fit(size: Size) -> Self {
        let scale = (size.width() / RINK_WIDTH).min(size.height() / RINK_HEIGHT);
        let offset = Point::new(
            (size.width() - RINK_WIDTH * scale) / 2.0,
            (size.height() - RINK_HEIGHT * scale) / 2.0,
        );
        Self { scale, offset }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Top-left corner of the rink on the surface.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Converts a rink point to surface pixels.
    pub fn to_surface(&self, point: Point) -> Point {
        self.offset.add_point(point.scale(self.scale))
    }

    /// The rink's bounds on the surface.
    pub fn rink_bounds(&self) -> Bounds {
        let bounds = rink::rink_bounds();
        Bounds::from_corners(
            self.to_surface(bounds.min_point()),
            self.to_surface(bounds.max_point()),
        )
    }
}

/// Result of one render call.
#[derive(Debug, Clone)]
pub enum RenderOutcome {
    /// The surface was cleared and redrawn with this many primitives.
    Drawn { primitives: usize },
    /// The surface was unavailable and left untouched.
    Skipped { diagnostic: Diagnostic },
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn { .. })
    }

    /// Number of primitives drawn, or `None` if the render was skipped.
    pub fn primitive_count(&self) -> Option<usize> {
        match self {
            Self::Drawn { primitives } => Some(*primitives),
            Self::Skipped { .. } => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Drawn { .. } => None,
            Self::Skipped { diagnostic } => Some(diagnostic),
        }
    }
}

/// Draws diagrams onto surfaces.
///
/// A renderer holds only resolved style settings. It keeps no state between
/// calls, so one renderer can draw any number of diagrams.
///
/// # Example
///
/// ```
/// # use rinkdraw::{config::StyleConfig, render::Renderer, DiagramBuilder, Surface};
/// let diagram = DiagramBuilder::default().parse("P1 20,50").into_parts().0;
/// let renderer = Renderer::new(&StyleConfig::default());
///
/// let mut surface = Surface::new(800.0, 400.0);
/// let outcome = renderer.render(&diagram, &mut surface);
/// assert!(outcome.is_drawn());
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    colors: ColorScheme,
    stroke_scale: f32,
    show_zone_markers: bool,
    style_diagnostic: Option<Diagnostic>,
}

impl Renderer {
    /// Create a renderer for the given style.
    ///
    /// An invalid stroke scale does not stop rendering: the renderer draws
    /// at scale `1.0` and keeps an `E301` warning, see
    /// [`style_diagnostic`](Self::style_diagnostic).
    pub fn new(style: &StyleConfig) -> Self {
        let (stroke_scale, style_diagnostic) = match style.stroke_scale() {
            Ok(scale) => (scale, None),
            Err(message) => {
                warn!(reason = message.as_str(); "Invalid stroke scale, drawing at default");
                let diagnostic = Diagnostic::for_code(ErrorCode::E301, message)
                    .with_help("set `style.stroke_scale` to a positive number");
                (DEFAULT_STROKE_SCALE, Some(diagnostic))
            }
        };

        Self {
            colors: style.color_scheme().clone(),
            stroke_scale,
            show_zone_markers: style.show_zone_markers(),
            style_diagnostic,
        }
    }

    /// The warning for a style setting that was replaced by its default.
    pub fn style_diagnostic(&self) -> Option<&Diagnostic> {
        self.style_diagnostic.as_ref()
    }

    /// Render a diagram, replacing everything on the surface.
    ///
    /// If the surface is unavailable nothing is touched and the outcome
    /// carries an `E300` warning.
    pub fn render(&self, diagram: &Diagram, surface: &mut Surface) -> RenderOutcome {
        if !surface.is_available() {
            debug!(
                width = surface.width(),
                height = surface.height(),
                mounted = surface.is_mounted();
                "Render target unavailable, skipping"
            );
            return RenderOutcome::Skipped {
                diagnostic: unavailable_diagnostic(surface),
            };
        }

        let viewport = Viewport::fit(surface.size());
        info!(
            width = surface.width(),
            height = surface.height(),
            scale = viewport.scale();
            "Rendering diagram"
        );

        let frame = Frame {
            viewport,
            unit: viewport.scale() * self.stroke_scale,
            colors: &self.colors,
        };

        surface.clear();
        frame.draw_rink(surface);
        if self.show_zone_markers {
            frame.draw_zone_markers(diagram, surface);
        }
        for region in diagram.regions() {
            frame.draw_region(region, surface);
        }
        for path in diagram.paths() {
            frame.draw_path(path, surface);
        }
        for entity in diagram.entities() {
            frame.draw_entity(entity, surface);
        }
        for entity in diagram.entities() {
            frame.draw_label(entity, surface);
        }

        let primitives = surface.primitives().len();
        debug!(primitives; "Diagram rendered");
        RenderOutcome::Drawn { primitives }
    }
}

fn unavailable_diagnostic(surface: &Surface) -> Diagnostic {
    let message = if surface.is_mounted() {
        format!(
            "render target has an unusable size {}x{}",
            surface.width(),
            surface.height()
        )
    } else {
        "render target is not mounted".to_string()
    };
    Diagnostic::for_code(ErrorCode::E300, message)
        .with_help("the previous drawing was left in place")
}

/// Per-render drawing state.
struct Frame<'a> {
    viewport: Viewport,
    /// Pixels per rink unit for line widths and entity sizes.
    unit: f32,
    colors: &'a ColorScheme,
}

impl Frame<'_> {
    fn point(&self, point: Point) -> Point {
        self.viewport.to_surface(point)
    }

    fn size(&self, length: f32) -> f32 {
        length * self.unit
    }

    fn draw_rink(&self, surface: &mut Surface) {
        surface.draw(
            RenderLayer::Rink,
            Primitive::Rect {
                bounds: self.viewport.rink_bounds(),
                corner_radius: CORNER_RADIUS * self.viewport.scale(),
                fill: Some(self.colors.background),
                stroke: Some(StrokeDefinition::solid(
                    self.colors.rink_line,
                    self.size(OUTLINE_WIDTH),
                )),
            },
        );
    }

    fn draw_zone_markers(&self, diagram: &Diagram, surface: &mut Surface) {
        let markers = diagram.zone_markers();

        for line in markers.lines() {
            let (color, width) = match line.kind() {
                ZoneLineKind::GoalLine => (self.colors.red_line, GOAL_LINE_WIDTH),
                ZoneLineKind::BlueLine => (self.colors.blue_line, ZONE_LINE_WIDTH),
                ZoneLineKind::RedLine => (self.colors.red_line, ZONE_LINE_WIDTH),
            };
            surface.draw(
                RenderLayer::ZoneMarker,
                Primitive::Line {
                    from: self.point(line.from()),
                    to: self.point(line.to()),
                    stroke: StrokeDefinition::solid(color, self.size(width)),
                },
            );
        }

        for dot in markers.faceoff_dots() {
            surface.draw(
                RenderLayer::ZoneMarker,
                Primitive::Circle {
                    center: self.point(*dot),
                    radius: self.size(FACEOFF_DOT_RADIUS),
                    fill: Some(self.colors.red_line),
                    stroke: None,
                },
            );
        }
    }

    fn draw_region(&self, region: &Region, surface: &mut Surface) {
        let fill = Some(self.colors.emphasis.with_alpha(EMPHASIS_ALPHA));
        let primitive = match region.shape() {
            RegionShape::Rectangle(bounds) => Primitive::Rect {
                bounds: Bounds::from_corners(
                    self.point(bounds.min_point()),
                    self.point(bounds.max_point()),
                ),
                corner_radius: 0.0,
                fill,
                stroke: None,
            },
            RegionShape::Circle { center, radius } => Primitive::Circle {
                center: self.point(center),
                radius: radius * self.viewport.scale(),
                fill,
                stroke: None,
            },
        };
        surface.draw(RenderLayer::Emphasis, primitive);
    }

    fn draw_path(&self, path: &Path, surface: &mut Surface) {
        let color = self.colors.path;
        let width = self.size(PATH_WIDTH);
        let stroke = match path.style() {
            PathStyle::Skate => StrokeDefinition::solid(color, width),
            PathStyle::Pass => StrokeDefinition::dashed(color, width),
            PathStyle::Shot => StrokeDefinition::dotted(color, width),
        }
        .rounded();

        let points: Vec<Point> = path
            .points()
            .iter()
            .map(|point| self.point(point.position()))
            .collect();

        let head = if path.has_arrowhead() {
            arrowhead(
                &points,
                self.size(ARROW_LENGTH),
                self.size(ARROW_HALF_WIDTH),
            )
        } else {
            None
        };

        surface.draw(RenderLayer::Path, Primitive::Polyline { points, stroke });
        if let Some(head) = head {
            surface.draw(
                RenderLayer::Path,
                Primitive::Polygon {
                    points: head.to_vec(),
                    fill: Some(color),
                    stroke: None,
                },
            );
        }
    }

    fn draw_entity(&self, entity: &Entity, surface: &mut Surface) {
        let center = self.point(entity.position());
        let primitive = match entity.kind() {
            EntityKind::Player => Primitive::Circle {
                center,
                radius: self.size(ENTITY_RADIUS),
                fill: Some(self.colors.player),
                stroke: None,
            },
            EntityKind::Opponent => Primitive::Circle {
                center,
                radius: self.size(ENTITY_RADIUS),
                fill: None,
                stroke: Some(StrokeDefinition::solid(
                    self.colors.opponent,
                    self.size(OPPONENT_STROKE_WIDTH),
                )),
            },
            EntityKind::Puck => Primitive::Circle {
                center,
                radius: self.size(PUCK_RADIUS),
                fill: Some(self.colors.puck),
                stroke: None,
            },
            EntityKind::Cone => {
                let half = self.size(CONE_SIZE) / 2.0;
                Primitive::Polygon {
                    points: vec![
                        Point::new(center.x(), center.y() - half),
                        Point::new(center.x() + half, center.y() + half),
                        Point::new(center.x() - half, center.y() + half),
                    ],
                    fill: Some(self.colors.cone),
                    stroke: None,
                }
            }
            EntityKind::Goalie => {
                let side = self.size(GOALIE_SIZE);
                Primitive::Rect {
                    bounds: center.to_bounds(Size::new(side, side)),
                    corner_radius: 0.0,
                    fill: Some(self.colors.goalie),
                    stroke: None,
                }
            }
        };
        surface.draw(RenderLayer::Entity, primitive);
    }

    fn draw_label(&self, entity: &Entity, surface: &mut Surface) {
        let Some(label) = entity.label() else {
            return;
        };
        surface.draw(
            RenderLayer::Label,
            Primitive::Text {
                position: self.point(entity.position()),
                content: label.to_string(),
                font_size: self.size(LABEL_FONT_SIZE),
                color: self.label_color(entity.kind()),
            },
        );
    }

    /// Labels sit on top of their shape, so filled shapes get the ice color.
    fn label_color(&self, kind: EntityKind) -> Color {
        match kind {
            EntityKind::Player | EntityKind::Goalie | EntityKind::Cone => self.colors.background,
            EntityKind::Opponent => self.colors.opponent,
            EntityKind::Puck => self.colors.path,
        }
    }
}

/// Triangle at the last point, pointing along the last segment with
/// non-zero length. `None` if every point coincides.
fn arrowhead(points: &[Point], length: f32, half_width: f32) -> Option<[Point; 3]> {
    let tip = *points.last()?;
    let from = points
        .iter()
        .rev()
        .skip(1)
        .find(|point| point.distance(tip) > f32::EPSILON)?;

    let delta = tip.sub_point(*from);
    let direction = delta.scale(1.0 / delta.hypot());
    let base = tip.sub_point(direction.scale(length));
    let normal = Point::new(-direction.y(), direction.x()).scale(half_width);

    Some([tip, base.add_point(normal), base.sub_point(normal)])
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rinkdraw_core::{draw::StrokeStyle, scene::PathPoint};

    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(&StyleConfig::default())
    }

    fn diagram(entities: Vec<Entity>, paths: Vec<Path>) -> Diagram {
        Diagram::new(entities, paths, Vec::new())
    }

    fn player(x: f32, y: f32) -> Entity {
        Entity::new(EntityKind::Player, "P1", Some("1".to_string()), Point::new(x, y))
    }

    fn free_path(style: PathStyle, points: &[(f32, f32)]) -> Path {
        Path::new(
            style,
            points
                .iter()
                .map(|(x, y)| PathPoint::free(Point::new(*x, *y)))
                .collect(),
        )
        .expect("at least two points")
    }

    #[test]
    fn test_viewport_letterboxes_wide_surface() {
        let viewport = Viewport::fit(Size::new(400.0, 100.0));
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.offset(), Point::new(100.0, 0.0));
        assert_eq!(viewport.to_surface(Point::new(200.0, 100.0)), Point::new(300.0, 100.0));
    }

    #[test]
    fn test_viewport_letterboxes_tall_surface() {
        let viewport = Viewport::fit(Size::new(100.0, 400.0));
        assert_eq!(viewport.scale(), 0.5);
        assert_eq!(viewport.offset(), Point::new(0.0, 175.0));

        let bounds = viewport.rink_bounds();
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 50.0);
    }

    #[test]
    fn test_layer_order_is_non_decreasing() {
        let diagram = diagram(
            vec![player(20.0, 50.0)],
            vec![free_path(PathStyle::Pass, &[(20.0, 50.0), (100.0, 50.0)])],
        );
        let mut surface = Surface::new(800.0, 400.0);
        renderer().render(&diagram, &mut surface);

        let layers: Vec<RenderLayer> = surface.primitives().iter().map(|(l, _)| *l).collect();
        assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(layers.first(), Some(&RenderLayer::Rink));
        assert_eq!(layers.last(), Some(&RenderLayer::Label));
    }

    #[test]
    fn test_path_strokes_follow_style() {
        let diagram = diagram(
            Vec::new(),
            vec![
                free_path(PathStyle::Skate, &[(0.0, 0.0), (10.0, 0.0)]),
                free_path(PathStyle::Pass, &[(0.0, 0.0), (10.0, 0.0)]),
                free_path(PathStyle::Shot, &[(0.0, 0.0), (10.0, 0.0)]),
            ],
        );
        let mut surface = Surface::new(200.0, 100.0);
        renderer().render(&diagram, &mut surface);

        let path_layer: Vec<&Primitive> = surface.primitives_in(RenderLayer::Path).collect();
        let kinds: Vec<&str> = path_layer.iter().map(|p| p.kind_name()).collect();
        assert_eq!(
            kinds,
            vec!["polyline", "polyline", "polygon", "polyline", "polygon"]
        );

        let styles: Vec<_> = path_layer
            .iter()
            .filter_map(|p| match p {
                Primitive::Polyline { stroke, .. } => Some(stroke.style()),
                _ => None,
            })
            .collect();
        assert_eq!(
            styles,
            vec![StrokeStyle::Solid, StrokeStyle::Dashed, StrokeStyle::Dotted]
        );
    }

    #[test]
    fn test_arrowhead_points_along_last_segment() {
        let head = arrowhead(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            2.0,
            1.0,
        )
        .expect("non-degenerate path");

        assert_eq!(head[0], Point::new(10.0, 0.0));
        assert!(approx_eq!(f32, head[1].x(), 8.0));
        assert!(approx_eq!(f32, head[2].x(), 8.0));
        assert!(approx_eq!(f32, head[1].y().abs(), 1.0));
        assert!(approx_eq!(f32, head[1].y(), -head[2].y()));
    }

    #[test]
    fn test_arrowhead_skips_degenerate_tail() {
        let head = arrowhead(
            &[
                Point::new(0.0, 10.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 0.0),
            ],
            2.0,
            1.0,
        )
        .expect("earlier segment has length");

        assert_eq!(head[0], Point::new(0.0, 0.0));
        assert!(approx_eq!(f32, head[1].y(), 2.0));
        assert!(approx_eq!(f32, head[2].y(), 2.0));
    }

    #[test]
    fn test_arrowhead_of_coincident_points() {
        let points = [Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
        assert!(arrowhead(&points, 2.0, 1.0).is_none());
    }

    #[test]
    fn test_hidden_zone_markers() {
        let mut style = StyleConfig::default();
        style.set_show_zone_markers(false);
        let renderer = Renderer::new(&style);

        let mut surface = Surface::new(800.0, 400.0);
        renderer.render(&Diagram::default(), &mut surface);
        assert_eq!(surface.primitives_in(RenderLayer::ZoneMarker).count(), 0);
        assert_eq!(surface.primitives().len(), 1);
    }

    #[test]
    fn test_stroke_scale_widens_lines() {
        let diagram = diagram(
            Vec::new(),
            vec![free_path(PathStyle::Skate, &[(0.0, 0.0), (10.0, 0.0)])],
        );
        let width_with = |scale: f32| {
            let mut style = StyleConfig::default();
            style.set_stroke_scale(scale);
            let mut surface = Surface::new(200.0, 100.0);
            Renderer::new(&style).render(&diagram, &mut surface);
            match surface.primitives_in(RenderLayer::Path).next() {
                Some(Primitive::Polyline { stroke, .. }) => stroke.width(),
                other => panic!("Expected polyline, got {other:?}"),
            }
        };

        assert!(approx_eq!(f32, width_with(2.0), width_with(1.0) * 2.0));
    }

    #[test]
    fn test_invalid_stroke_scale_falls_back_to_default() {
        let diagram = diagram(vec![player(20.0, 50.0)], Vec::new());
        let mut expected = Surface::new(800.0, 400.0);
        renderer().render(&diagram, &mut expected);
        assert!(renderer().style_diagnostic().is_none());

        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut style = StyleConfig::default();
            style.set_stroke_scale(scale);
            let renderer = Renderer::new(&style);

            let diagnostic = renderer.style_diagnostic().expect("invalid scale is reported");
            assert_eq!(diagnostic.code(), Some(ErrorCode::E301));
            assert!(diagnostic.severity().is_warning());

            let mut surface = Surface::new(800.0, 400.0);
            let outcome = renderer.render(&diagram, &mut surface);
            assert!(outcome.is_drawn());
            assert_eq!(surface.primitives(), expected.primitives());
        }
    }

    #[test]
    fn test_unavailable_surface_is_untouched() {
        let renderer = renderer();
        let diagram = diagram(vec![player(20.0, 50.0)], Vec::new());

        let mut surface = Surface::new(800.0, 400.0);
        renderer.render(&diagram, &mut surface);
        let before = surface.clone();

        surface.unmount();
        let outcome = renderer.render(&Diagram::default(), &mut surface);

        assert!(!outcome.is_drawn());
        assert_eq!(outcome.primitive_count(), None);
        let diagnostic = outcome.diagnostic().expect("skipped render has a diagnostic");
        assert_eq!(diagnostic.code(), Some(ErrorCode::E300));
        assert!(diagnostic.severity().is_warning());
        assert_eq!(surface.primitives(), before.primitives());
    }

    #[test]
    fn test_zero_size_surface_is_skipped() {
        let mut surface = Surface::new(0.0, 0.0);
        let outcome = renderer().render(&Diagram::default(), &mut surface);
        assert!(matches!(outcome, RenderOutcome::Skipped { .. }));
        assert!(surface.is_empty());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn check_viewport_keeps_aspect(width: f32, height: f32) {
            let viewport = Viewport::fit(Size::new(width, height));
            let bounds = viewport.rink_bounds();

            assert!(approx_eq!(f32, bounds.width(), bounds.height() * 2.0, epsilon = 1e-2));
            assert!(bounds.width() <= width + 1e-2);
            assert!(bounds.height() <= height + 1e-2);
            assert!(approx_eq!(f32, bounds.min_x(), width - bounds.max_x(), epsilon = 1e-2));
            assert!(approx_eq!(f32, bounds.min_y(), height - bounds.max_y(), epsilon = 1e-2));
        }

        fn check_entity_circle_is_round(width: f32, height: f32, x: f32, y: f32) {
            let diagram = diagram(vec![player(x, y)], Vec::new());
            let mut surface = Surface::new(width, height);
            renderer().render(&diagram, &mut surface);

            let circle = surface
                .primitives_in(RenderLayer::Entity)
                .next()
                .expect("one entity");
            let bounds = circle.bounds();
            assert!(approx_eq!(f32, bounds.width(), bounds.height(), epsilon = 1e-3));
        }

        proptest! {
            #[test]
            fn viewport_keeps_aspect(width in 1.0f32..4000.0, height in 1.0f32..4000.0) {
                check_viewport_keeps_aspect(width, height);
            }

            #[test]
            fn entity_circle_is_round(
                width in 10.0f32..2000.0,
                height in 10.0f32..2000.0,
                x in 0.0f32..=200.0,
                y in 0.0f32..=100.0,
            ) {
                check_entity_circle_is_round(width, height, x, y);
            }
        }
    }
}
