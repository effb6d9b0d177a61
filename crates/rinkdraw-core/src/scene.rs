//! Scene model for rink diagrams.
//!
//! This module contains the normalized, renderer-agnostic representation of a
//! drill after parsing and building. All positions are in the logical rink
//! coordinate space (see [`crate::rink`]) and already clamped to it.
//!
//! # Pipeline Position
//!
//! ```text
//! Notation Text
//!     ↓ parse
//! Instructions (rinkdraw-parser)
//!     ↓ build
//! Scene Model (these types)
//!     ↓ render
//! Primitives on a Surface
//!     ↓ export
//! SVG
//! ```

use std::{fmt, str::FromStr};

use crate::{
    geometry::{Bounds, Point},
    rink::{self, ZoneMarkers},
};

/// The kind of a point-like drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Opponent,
    Puck,
    Cone,
    Goalie,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Opponent => "opponent",
            Self::Puck => "puck",
            Self::Cone => "cone",
            Self::Goalie => "goalie",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point-like drawable: a skater, the puck, a cone or a goalie.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    kind: EntityKind,
    name: String,
    label: Option<String>,
    position: Point,
}

impl Entity {
    /// Creates a new entity. The position is clamped to the rink.
    ///
    /// `name` is the token the entity was declared with (e.g. `P7`) and is
    /// what path endpoints refer to. `label` is the text drawn on the shape.
    pub fn new(
        kind: EntityKind,
        name: impl Into<String>,
        label: Option<String>,
        position: Point,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            label,
            position: rink::clamp_to_rink(position),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// How a path is stroked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// Skating movement, solid line.
    #[default]
    Skate,
    /// Puck transfer between players, dashed line.
    Pass,
    /// Shot on goal, dotted line.
    Shot,
}

impl PathStyle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Skate => "skate",
            Self::Pass => "pass",
            Self::Shot => "shot",
        }
    }

    /// Passes and shots are directed transfers and end in an arrowhead.
    pub fn has_arrowhead(self) -> bool {
        matches!(self, Self::Pass | Self::Shot)
    }
}

impl FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skate" => Ok(Self::Skate),
            "pass" => Ok(Self::Pass),
            "shot" => Ok(Self::Shot),
            _ => Err(format!(
                "invalid path style `{s}`, valid values: skate, pass, shot"
            )),
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One point of a path.
///
/// A point resolved from an entity reference remembers the entity's index in
/// [`Diagram::entities`], so tooling can tell which path ends are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    position: Point,
    anchor: Option<usize>,
}

impl PathPoint {
    /// A free-floating point, clamped to the rink.
    pub fn free(position: Point) -> Self {
        Self {
            position: rink::clamp_to_rink(position),
            anchor: None,
        }
    }

    /// A point attached to the entity at `index`.
    pub fn anchored(entity: &Entity, index: usize) -> Self {
        Self {
            position: entity.position(),
            anchor: Some(index),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }
}

/// A directed drawable through two or more points.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    style: PathStyle,
    points: Vec<PathPoint>,
}

impl Path {
    /// Creates a path, or returns `None` if fewer than two points are given.
    pub fn new(style: PathStyle, points: Vec<PathPoint>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { style, points })
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0].position()
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1].position()
    }

    pub fn has_arrowhead(&self) -> bool {
        self.style.has_arrowhead()
    }
}

/// Geometry of an emphasis region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionShape {
    Rectangle(Bounds),
    Circle { center: Point, radius: f32 },
}

/// A shaded overlay area. Never affects entities or paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    shape: RegionShape,
    tag: Option<String>,
}

impl Region {
    /// A rectangle spanning two opposite corners, clamped to the rink.
    pub fn rectangle(a: Point, b: Point, tag: Option<String>) -> Self {
        let bounds = Bounds::from_corners(rink::clamp_to_rink(a), rink::clamp_to_rink(b));
        Self {
            shape: RegionShape::Rectangle(bounds),
            tag,
        }
    }

    /// A circle through `rim`, centered on `center`.
    pub fn circle(center: Point, rim: Point, tag: Option<String>) -> Self {
        let center = rink::clamp_to_rink(center);
        let radius = center.distance(rink::clamp_to_rink(rim));
        Self {
            shape: RegionShape::Circle { center, radius },
            tag,
        }
    }

    pub fn shape(&self) -> RegionShape {
        self.shape
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// An immutable drill diagram.
///
/// Entities, paths and regions keep their source order, which is also their
/// drawing order within each category. The zone markers are the same for
/// every diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    entities: Vec<Entity>,
    paths: Vec<Path>,
    regions: Vec<Region>,
    zone_markers: ZoneMarkers,
}

impl Diagram {
    pub fn new(entities: Vec<Entity>, paths: Vec<Path>, regions: Vec<Region>) -> Self {
        Self {
            entities,
            paths,
            regions,
            zone_markers: rink::compute_zone_markers(),
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn zone_markers(&self) -> &ZoneMarkers {
        &self.zone_markers
    }

    /// Number of authored drawables: entities, paths and regions.
    pub fn drawable_count(&self) -> usize {
        self.entities.len() + self.paths.len() + self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawable_count() == 0
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_position_is_clamped() {
        let entity = Entity::new(EntityKind::Player, "P1", None, Point::new(250.0, 50.0));
        assert_eq!(entity.position(), Point::new(200.0, 50.0));
    }

    #[test]
    fn test_path_needs_two_points() {
        assert!(Path::new(PathStyle::Skate, vec![]).is_none());
        assert!(Path::new(PathStyle::Skate, vec![PathPoint::free(Point::default())]).is_none());

        let path = Path::new(
            PathStyle::Pass,
            vec![
                PathPoint::free(Point::new(20.0, 50.0)),
                PathPoint::free(Point::new(100.0, 50.0)),
            ],
        )
        .unwrap();
        assert_eq!(path.start(), Point::new(20.0, 50.0));
        assert_eq!(path.end(), Point::new(100.0, 50.0));
        assert!(path.has_arrowhead());
    }

    #[test]
    fn test_arrowhead_by_style() {
        assert!(!PathStyle::Skate.has_arrowhead());
        assert!(PathStyle::Pass.has_arrowhead());
        assert!(PathStyle::Shot.has_arrowhead());
    }

    #[test]
    fn test_path_style_from_str() {
        assert_eq!("pass".parse::<PathStyle>().unwrap(), PathStyle::Pass);
        assert_eq!("shot".parse::<PathStyle>().unwrap(), PathStyle::Shot);
        assert!("wobble".parse::<PathStyle>().is_err());
        assert_eq!(PathStyle::default(), PathStyle::Skate);
    }

    #[test]
    fn test_anchored_point_copies_entity_position() {
        let entity = Entity::new(EntityKind::Opponent, "X3", Some("3".into()), Point::new(40.0, 30.0));
        let point = PathPoint::anchored(&entity, 2);
        assert_eq!(point.position(), Point::new(40.0, 30.0));
        assert_eq!(point.anchor(), Some(2));
        assert_eq!(PathPoint::free(Point::new(1.0, 1.0)).anchor(), None);
    }

    #[test]
    fn test_region_circle_radius() {
        let region = Region::circle(Point::new(170.0, 50.0), Point::new(180.0, 50.0), None);
        match region.shape() {
            RegionShape::Circle { center, radius } => {
                assert_eq!(center, Point::new(170.0, 50.0));
                assert_eq!(radius, 10.0);
            }
            RegionShape::Rectangle(_) => panic!("Expected circle"),
        }
    }

    #[test]
    fn test_region_rectangle_is_normalized_and_clamped() {
        let region = Region::rectangle(
            Point::new(220.0, 80.0),
            Point::new(150.0, -10.0),
            Some("offensive".to_string()),
        );
        assert_eq!(region.tag(), Some("offensive"));
        match region.shape() {
            RegionShape::Rectangle(bounds) => {
                assert_eq!(bounds.min_point(), Point::new(150.0, 0.0));
                assert_eq!(bounds.max_point(), Point::new(200.0, 80.0));
            }
            RegionShape::Circle { .. } => panic!("Expected rectangle"),
        }
    }

    #[test]
    fn test_empty_diagram_has_zone_markers() {
        let diagram = Diagram::default();
        assert!(diagram.is_empty());
        assert_eq!(diagram.zone_markers(), &rink::compute_zone_markers());
    }
}
