//! Parsed instructions.
//!
//! One instruction per notation statement, in source order. Instructions are
//! still unresolved: endpoint references are plain names and coordinates are
//! exactly as written. Resolution and clamping happen in the builder.

use std::fmt;

use rinkdraw_core::{
    geometry::Point,
    rink::Zone,
    scene::{EntityKind, PathStyle},
};

use crate::span::Spanned;

/// One end or waypoint of a path, as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// A literal coordinate pair.
    Point(Point),
    /// The name of an entity, such as `P7`.
    Ref(String),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(point) => write!(f, "{},{}", point.x(), point.y()),
            Self::Ref(name) => f.write_str(name),
        }
    }
}

/// Shape of an emphasis region instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// `R`: the two points are opposite corners.
    Rectangle,
    /// `A`: the first point is the center, the second lies on the rim.
    Circle,
}

/// A single parsed statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Place a point-like drawable.
    Entity {
        kind: EntityKind,
        name: String,
        label: Option<String>,
        position: Point,
    },
    /// Draw a path through two or more endpoints.
    Path {
        style: PathStyle,
        endpoints: Vec<Spanned<Endpoint>>,
    },
    /// Shade an area.
    Region {
        kind: RegionKind,
        from: Point,
        to: Point,
        tag: Option<String>,
    },
    /// `@zone <name>`: shade a whole rink zone.
    Zone(Zone),
}

impl Instruction {
    /// Short name of the instruction kind, for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Entity { .. } => "entity",
            Self::Path { .. } => "path",
            Self::Region { .. } => "region",
            Self::Zone(_) => "zone",
        }
    }
}
