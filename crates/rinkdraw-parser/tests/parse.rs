use rinkdraw_core::geometry::Point;
use rinkdraw_core::rink::{self, ZoneLineKind};
use rinkdraw_core::scene::{EntityKind, PathStyle, RegionShape};
use rinkdraw_parser::{ErrorCode, parse, parse_strict};

#[test]
fn test_single_player() {
    let parsed = parse("P1 20,50");

    assert!(parsed.diagnostics().is_empty());
    let entities = parsed.diagram().entities();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind(), EntityKind::Player);
    assert_eq!(entities[0].name(), "P1");
    assert_eq!(entities[0].label(), Some("1"));
    assert_eq!(entities[0].position(), Point::new(20.0, 50.0));
    assert!(parsed.diagram().paths().is_empty());
}

#[test]
fn test_player_and_pass() {
    let parsed = parse("P1 20,50\nPK 20,50 -> 100,50 :pass");

    assert!(parsed.diagnostics().is_empty());
    let diagram = parsed.diagram();
    assert_eq!(diagram.entities().len(), 1);
    assert_eq!(diagram.paths().len(), 1);

    let path = &diagram.paths()[0];
    assert_eq!(path.style(), PathStyle::Pass);
    assert!(path.has_arrowhead());
    assert_eq!(path.start(), Point::new(20.0, 50.0));
    assert_eq!(path.end(), Point::new(100.0, 50.0));
}

#[test]
fn test_malformed_line_yields_nothing() {
    let parsed = parse("P1 20,abc");

    assert!(parsed.diagram().is_empty());
    assert_eq!(parsed.diagnostics().len(), 1);
    assert_eq!(parsed.diagnostics()[0].code(), Some(ErrorCode::E100));
}

#[test]
fn test_empty_notation_keeps_zone_markers() {
    let parsed = parse("");

    assert!(parsed.diagnostics().is_empty());
    let diagram = parsed.diagram();
    assert!(diagram.entities().is_empty());
    assert!(diagram.paths().is_empty());
    assert_eq!(diagram.zone_markers(), &rink::compute_zone_markers());
    assert_eq!(
        diagram
            .zone_markers()
            .lines_of(ZoneLineKind::BlueLine)
            .count(),
        2
    );
}

#[test]
fn test_out_of_range_coordinates_are_clamped() {
    let parsed = parse("P1 250,50\nX2 -10,140");

    assert!(parsed.diagnostics().is_empty());
    let entities = parsed.diagram().entities();
    assert_eq!(entities[0].position(), Point::new(200.0, 50.0));
    assert_eq!(entities[1].position(), Point::new(0.0, 100.0));
}

#[test]
fn test_graceful_degradation() {
    let source = "\
P1 20,50
X1 40,abc
P2 60,50
P1 -> P2 :pass
R 150,30 -> 185,70 :slot";

    let parsed = parse(source);
    assert_eq!(parsed.diagram().drawable_count(), 4);
    assert_eq!(parsed.diagnostics().len(), 1);
}

#[test]
fn test_path_attaches_to_entities() {
    let parsed = parse("P1 20,50\nX3 60,30\nP1 -> X3 -> 150,50 :skate");

    let path = &parsed.diagram().paths()[0];
    assert_eq!(path.points().len(), 3);
    assert_eq!(path.points()[0].anchor(), Some(0));
    assert_eq!(path.points()[1].anchor(), Some(1));
    assert_eq!(path.points()[1].position(), Point::new(60.0, 30.0));
    assert_eq!(path.points()[2].anchor(), None);
    assert!(!path.has_arrowhead());
}

#[test]
fn test_unresolved_endpoint_is_dropped() {
    let parsed = parse("P1 20,50\nP1 -> P9 -> 150,40 :pass");

    assert_eq!(parsed.diagram().paths()[0].points().len(), 2);
    assert_eq!(parsed.diagnostics().len(), 1);
    assert_eq!(parsed.diagnostics()[0].code(), Some(ErrorCode::E200));
}

#[test]
fn test_path_below_two_points_is_discarded() {
    let parsed = parse("P9 -> P8 -> 10,10 :shot");

    assert!(parsed.diagram().paths().is_empty());
    assert_eq!(parsed.diagnostics().len(), 1);
    let diag = &parsed.diagnostics()[0];
    assert_eq!(diag.code(), Some(ErrorCode::E201));
    assert!(diag.message().contains("`P9`"));
    assert!(diag.message().contains("`P8`"));
}

#[test]
fn test_zone_emphasis() {
    let parsed = parse("@zone defensive\nA 170,50 -> 180,50 :crease");

    let regions = parsed.diagram().regions();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].tag(), Some("defensive"));
    assert_eq!(regions[1].tag(), Some("crease"));
    assert!(matches!(regions[1].shape(), RegionShape::Circle { .. }));
}

#[test]
fn test_determinism() {
    let source = "P1 20,50\nX2 60,40\nP1 -> X2 -> 150,50 :shot\n@zone offensive\nR 0,0 -> 30,30";
    assert_eq!(parse(source).diagram(), parse(source).diagram());
}

#[test]
fn test_strict_parse() {
    assert!(parse_strict("P1 20,50\nP1 -> 100,50").is_ok());

    let err = parse_strict("P1 20,50\n@zone slot\nP1 -> P4 -> 100,50").unwrap_err();
    let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
    assert_eq!(codes, vec![Some(ErrorCode::E102), Some(ErrorCode::E200)]);
}
