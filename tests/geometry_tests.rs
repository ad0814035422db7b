//! End-to-end tests: identifier → guides → outline → wire format.

use insta::assert_snapshot;
use prstgeom::geom::{eval, frame, serialize};
use prstgeom::{DVec2, DrawCommand, Guide, generate_geometry, generate_geometry_at, lookup};

#[test]
fn rectangle_wire() {
    assert_snapshot!(
        generate_geometry("rect", 100.0, 50.0).to_wire(),
        @"w=100 h=50 M 0 0 L 100 0 L 100 50 L 0 50 Z"
    );
}

#[test]
fn diamond_wire() {
    assert_snapshot!(
        generate_geometry("diamond", 200.0, 100.0).to_wire(),
        @"w=200 h=100 M 0 50 L 100 0 L 200 50 L 100 100 Z"
    );
}

#[test]
fn cube_wire_has_three_faces() {
    assert_snapshot!(
        generate_geometry("cube", 100.0, 100.0).to_wire(),
        @"w=100 h=100 M 0 20 L 80 20 L 80 100 L 0 100 Z M 0 20 L 20 0 L 100 0 L 80 20 Z M 80 20 L 100 0 L 100 80 L 80 100 Z"
    );
}

#[test]
fn down_arrow_wire() {
    assert_snapshot!(
        generate_geometry("downArrow", 100.0, 200.0).to_wire(),
        @"w=100 h=200 M 50 200 L 20 120 L 35 120 L 35 0 L 65 0 L 65 120 L 80 120 Z"
    );
}

#[test]
fn left_arrow_wire() {
    assert_snapshot!(
        generate_geometry("leftArrow", 200.0, 100.0).to_wire(),
        @"w=200 h=100 M 0 50 L 80 20 L 80 35 L 200 35 L 200 65 L 80 65 L 80 80 Z"
    );
}

#[test]
fn ellipse_wire() {
    assert_snapshot!(
        generate_geometry("ellipse", 200.0, 100.0).to_wire(),
        @"w=200 h=100 M 200 50 C 200 78 155 100 100 100 C 45 100 0 78 0 50 C 0 22 45 0 100 0 C 155 0 200 22 200 50 Z"
    );
}

#[test]
fn hexagon_wire() {
    assert_snapshot!(
        generate_geometry("hexagon", 200.0, 100.0).to_wire(),
        @"w=200 h=100 M 200 50 L 150 93 L 50 93 L 0 50 L 50 7 L 150 7 Z"
    );
}

#[test]
fn callout_wire() {
    assert_snapshot!(
        generate_geometry("callout1", 100.0, 100.0).to_wire(),
        @"w=100 h=100 M 10 20 L 90 20 L 90 80 L 60 80 L 50 100 L 40 80 L 10 80 Z"
    );
}

#[test]
fn unknown_identifier_serializes_like_a_rectangle() {
    let unknown = generate_geometry("not-a-real-shape", 100.0, 50.0).to_wire();
    let rect = generate_geometry("rect", 100.0, 50.0).to_wire();
    assert_eq!(unknown, rect);
}

#[test]
fn flowchart_aliases_reuse_their_base_families() {
    assert_eq!(
        generate_geometry("flowChartProcess", 120.0, 60.0),
        generate_geometry("rect", 120.0, 60.0)
    );
    assert_eq!(
        generate_geometry("flowChartDecision", 120.0, 60.0),
        generate_geometry("diamond", 120.0, 60.0)
    );
}

#[test]
fn every_registered_shape_serializes_to_finite_integers() {
    for id in [
        "rect",
        "flowChartProcess",
        "diamond",
        "flowChartDecision",
        "star5",
        "downArrow",
        "upArrow",
        "leftArrow",
        "rightArrow",
        "ellipse",
        "cube",
        "hexagon",
        "callout1",
        "triangle",
        "roundRect",
    ] {
        assert!(lookup(id).is_some(), "{id} should be registered");
        let wire = generate_geometry(id, 173.0, 91.0).to_wire();
        assert!(wire.starts_with("w=173 h=91 M "), "{id}: {wire}");
        assert!(wire.ends_with('Z'), "{id}: {wire}");
    }
}

#[test]
fn offsets_shift_the_wire_coordinates() {
    let local = generate_geometry("diamond", 200.0, 100.0).to_wire();
    let shifted = generate_geometry_at("diamond", 200.0, 100.0, 1000.0, 500.0).to_wire();
    assert_eq!(local, "w=200 h=100 M 0 50 L 100 0 L 200 50 L 100 100 Z");
    assert_eq!(
        shifted,
        "w=200 h=100 M 1000 550 L 1100 500 L 1200 550 L 1100 600 Z"
    );
}

#[test]
fn guide_evaluation_through_the_public_api() {
    let env = frame::build(100.0, 40.0, 0.0, 0.0);
    let out = eval::evaluate(
        &[
            Guide { name: "g", formula: "val 50000" },
            Guide { name: "scaled", formula: "*/ w 3 4" },
            Guide { name: "pinned", formula: "pin 0 150 100" },
        ],
        env,
    );
    assert_eq!(out.get("g"), Some(50000.0));
    assert_eq!(out.get("scaled"), Some(75.0));
    assert_eq!(out.get("pinned"), Some(100.0));
}

#[test]
fn serializer_substitutes_a_rectangle_for_empty_input() {
    assert_eq!(
        serialize::serialize(&[], 100.0, 50.0),
        generate_geometry("rect", 100.0, 50.0).to_wire()
    );
}

#[test]
fn star_vertices_alternate_outer_and_inner_radii() {
    let geometry = generate_geometry("star5", 100.0, 100.0);
    let commands = &geometry.paths[0].commands;
    assert_eq!(commands.len(), 11);
    let center = DVec2::new(50.0, 50.0);
    for (i, command) in commands[..10].iter().enumerate() {
        let p = match command {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => *p,
            other => panic!("unexpected command {other:?}"),
        };
        let expected = if i % 2 == 0 { 45.0 } else { 18.0 };
        assert!(
            ((p - center).length() - expected).abs() < 1e-9,
            "vertex {i} at {p:?}"
        );
    }
}
