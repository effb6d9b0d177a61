//! Model builder.
//!
//! Interprets parsed instructions against the rink coordinate space and
//! produces an immutable [`Diagram`]. Entities are kept in an append-only
//! list; path endpoints that name an entity are resolved by scanning that
//! list backward, so a path sees only entities declared before it and the
//! most recent declaration of a name wins.

use log::{debug, info, trace};

use rinkdraw_core::{
    geometry::Point,
    scene::{Diagram, Entity, Path, PathPoint, Region},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    instruction::{Endpoint, Instruction, RegionKind},
    span::{Span, Spanned},
};

/// Builds a [`Diagram`] from instructions, collecting diagnostics.
pub(crate) struct Builder {
    entities: Vec<Entity>,
    paths: Vec<Path>,
    regions: Vec<Region>,
    diagnostics: DiagnosticCollector,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            paths: Vec::new(),
            regions: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn build(mut self, instructions: &[Spanned<Instruction>]) -> (Diagram, Vec<Diagnostic>) {
        info!(instructions = instructions.len(); "Building diagram");

        for instruction in instructions {
            self.apply(instruction);
        }

        let diagram = Diagram::new(self.entities, self.paths, self.regions);
        info!(
            entities = diagram.entities().len(),
            paths = diagram.paths().len(),
            regions = diagram.regions().len();
            "Diagram built"
        );
        trace!(diagram:?; "Built diagram");

        (diagram, self.diagnostics.finish())
    }

    fn apply(&mut self, instruction: &Spanned<Instruction>) {
        match instruction.inner() {
            Instruction::Entity {
                kind,
                name,
                label,
                position,
            } => {
                self.entities
                    .push(Entity::new(*kind, name.clone(), label.clone(), *position));
            }
            Instruction::Path { style, endpoints } => {
                let mut points = Vec::with_capacity(endpoints.len());
                let mut unresolved = Vec::new();

                for endpoint in endpoints {
                    match self.resolve(endpoint.inner()) {
                        Some(point) => points.push(point),
                        None => unresolved.push(endpoint),
                    }
                }

                match Path::new(*style, points) {
                    Some(path) => {
                        for endpoint in unresolved {
                            self.diagnostics.emit(
                                Diagnostic::for_code(
                                    ErrorCode::E200,
                                    format!("unresolved path endpoint `{}`", endpoint.inner()),
                                )
                                .with_label(
                                    endpoint.span(),
                                    "no entity with this name is declared before the path",
                                )
                                .with_help("the point was dropped from the path"),
                            );
                        }
                        self.paths.push(path);
                    }
                    None => self.discard_path(instruction.span(), &unresolved),
                }
            }
            Instruction::Region {
                kind,
                from,
                to,
                tag,
            } => {
                let region = match kind {
                    RegionKind::Rectangle => Region::rectangle(*from, *to, tag.clone()),
                    RegionKind::Circle => Region::circle(*from, *to, tag.clone()),
                };
                self.regions.push(region);
            }
            Instruction::Zone(zone) => {
                let bounds = zone.bounds();
                debug!(zone = zone.name(); "Zone emphasized");
                self.regions.push(Region::rectangle(
                    bounds.min_point(),
                    bounds.max_point(),
                    Some(zone.name().to_string()),
                ));
            }
        }
    }

    /// Resolve an endpoint to a path point, or `None` if it cannot be placed.
    fn resolve(&self, endpoint: &Endpoint) -> Option<PathPoint> {
        match endpoint {
            Endpoint::Point(point) => Some(PathPoint::free(*point)),
            Endpoint::Ref(name) => {
                let found = self
                    .entities
                    .iter()
                    .enumerate()
                    .rev()
                    .find(|(_, entity)| entity.name() == name);
                match found {
                    Some((index, entity)) => Some(PathPoint::anchored(entity, index)),
                    None => {
                        let point = parse_point_literal(name).map(PathPoint::free);
                        debug!(
                            reference = name.as_str(),
                            literal = point.is_some();
                            "Reference not declared, tried as coordinates"
                        );
                        point
                    }
                }
            }
        }
    }

    fn discard_path(&mut self, span: Span, unresolved: &[&Spanned<Endpoint>]) {
        let names: Vec<String> = unresolved
            .iter()
            .map(|endpoint| format!("`{}`", endpoint.inner()))
            .collect();
        let message = if names.is_empty() {
            "path discarded: it has fewer than two points".to_string()
        } else {
            format!(
                "path discarded: unresolved endpoint{} {}",
                if names.len() == 1 { "" } else { "s" },
                names.join(", ")
            )
        };

        let mut diag = Diagnostic::for_code(ErrorCode::E201, message)
            .with_label(span, "fewer than two points remain")
            .with_help("declare the entities before the path or use `x,y` coordinates");
        for endpoint in unresolved {
            diag = diag.with_secondary_label(endpoint.span(), "unresolved");
        }
        self.diagnostics.emit(diag);
    }
}

/// Read a reference token as a literal `x,y` pair, optionally parenthesized.
fn parse_point_literal(text: &str) -> Option<Point> {
    let text = text.trim();
    let text = text
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(text);
    let (x, y) = text.split_once(',')?;
    Some(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

/// Overflowing values become infinite and are clamped by the scene types.
fn parse_coordinate(text: &str) -> Option<f32> {
    let text = text.trim();
    if text
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_alphabetic())
    {
        return None;
    }
    text.parse::<f32>().ok().filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use rinkdraw_core::{
        rink::Zone,
        scene::{EntityKind, PathStyle, RegionShape},
    };

    use super::*;

    fn spanned(instruction: Instruction) -> Spanned<Instruction> {
        Spanned::new(instruction, Span::default())
    }

    fn entity(name: &str, x: f32, y: f32) -> Spanned<Instruction> {
        spanned(Instruction::Entity {
            kind: EntityKind::Player,
            name: name.to_string(),
            label: None,
            position: Point::new(x, y),
        })
    }

    fn path(endpoints: Vec<Endpoint>) -> Spanned<Instruction> {
        spanned(Instruction::Path {
            style: PathStyle::Pass,
            endpoints: endpoints
                .into_iter()
                .map(|endpoint| Spanned::new(endpoint, Span::default()))
                .collect(),
        })
    }

    fn reference(name: &str) -> Endpoint {
        Endpoint::Ref(name.to_string())
    }

    #[test]
    fn test_reference_resolves_to_latest_earlier_entity() {
        let instructions = vec![
            entity("P1", 10.0, 10.0),
            entity("P1", 30.0, 30.0),
            path(vec![reference("P1"), Endpoint::Point(Point::new(100.0, 50.0))]),
            entity("P1", 90.0, 90.0),
        ];

        let (diagram, diagnostics) = Builder::new().build(&instructions);
        assert!(diagnostics.is_empty());

        let path = &diagram.paths()[0];
        assert_eq!(path.start(), Point::new(30.0, 30.0));
        assert_eq!(path.points()[0].anchor(), Some(1));
        assert_eq!(path.points()[1].anchor(), None);
    }

    #[test]
    fn test_forward_reference_is_unresolved() {
        let instructions = vec![
            path(vec![
                reference("P2"),
                Endpoint::Point(Point::new(10.0, 10.0)),
                Endpoint::Point(Point::new(20.0, 20.0)),
            ]),
            entity("P2", 50.0, 50.0),
        ];

        let (diagram, diagnostics) = Builder::new().build(&instructions);
        assert_eq!(diagram.paths().len(), 1);
        assert_eq!(diagram.paths()[0].points().len(), 2);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E200));
        assert!(diagnostics[0].severity().is_warning());
    }

    #[test]
    fn test_short_path_is_discarded_with_one_diagnostic() {
        let instructions = vec![path(vec![
            reference("P9"),
            Endpoint::Point(Point::new(10.0, 10.0)),
        ])];

        let (diagram, diagnostics) = Builder::new().build(&instructions);
        assert!(diagram.paths().is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E201));
        assert!(diagnostics[0].message().contains("`P9`"));
    }

    #[test]
    fn test_unresolved_reference_falls_back_to_coordinates() {
        let instructions = vec![path(vec![
            reference("(20,50)"),
            reference("100, 50"),
        ])];

        let (diagram, diagnostics) = Builder::new().build(&instructions);
        assert!(diagnostics.is_empty());
        let path = &diagram.paths()[0];
        assert_eq!(path.start(), Point::new(20.0, 50.0));
        assert_eq!(path.end(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_zone_becomes_full_height_region() {
        let (diagram, _) = Builder::new().build(&[spanned(Instruction::Zone(Zone::Offensive))]);

        let region = &diagram.regions()[0];
        assert_eq!(region.tag(), Some("offensive"));
        match region.shape() {
            RegionShape::Rectangle(bounds) => {
                assert_eq!(bounds.min_point(), Point::new(125.0, 0.0));
                assert_eq!(bounds.max_point(), Point::new(200.0, 100.0));
            }
            RegionShape::Circle { .. } => panic!("Expected rectangle"),
        }
    }

    #[test]
    fn test_duplicate_names_are_distinct_entities() {
        let (diagram, _) =
            Builder::new().build(&[entity("P1", 10.0, 10.0), entity("P1", 20.0, 20.0)]);
        assert_eq!(diagram.entities().len(), 2);
    }

    #[test]
    fn test_parse_point_literal() {
        assert_eq!(parse_point_literal("20,50"), Some(Point::new(20.0, 50.0)));
        assert_eq!(parse_point_literal("(1.5, -2)"), Some(Point::new(1.5, -2.0)));
        assert_eq!(parse_point_literal("P1"), None);
        assert_eq!(parse_point_literal("inf,3"), None);
        assert_eq!(parse_point_literal("3,NaN"), None);
        assert_eq!(
            parse_point_literal("1e40,3"),
            Some(Point::new(f32::INFINITY, 3.0))
        );
    }
}
