//! Integration tests for the Renderer API
//!
//! These tests go through the public entry points only: source text in,
//! SVG text out.

use dotviz::{
    DotvizError, RenderBackend, RenderOptions, Renderer,
    config::{AppConfig, CanvasConfig, LayoutConfig, StyleConfig},
    geometry::Point,
    render,
};

fn render_default(source: &str) -> String {
    render(source, &RenderOptions::default()).expect("svg rendering should succeed")
}

#[test]
fn test_render_simple_graph() {
    let svg = render_default("digraph G { a -> b; }");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"width="600""#));
    assert!(svg.contains(r#"height="400""#));
    assert_eq!(svg.matches(r#"class="node""#).count(), 2);
    assert_eq!(svg.matches(r#"class="edge""#).count(), 1);
}

#[test]
fn test_one_arrowhead_per_directed_edge() {
    let svg = render_default("digraph {\na -> b;\nb -> c;\nc -> a;\n}");
    assert_eq!(svg.matches("<polygon").count(), 3);
}

#[test]
fn test_undirected_edges_have_no_arrowheads() {
    let svg = render_default("graph {\na -- b;\nb -- c;\n}");

    assert_eq!(svg.matches("<path").count(), 2);
    assert_eq!(svg.matches("<polygon").count(), 0);
}

#[test]
fn test_diamond_nodes_use_polygons() {
    let svg = render_default("graph {\nq [shape=diamond];\n}");
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(!svg.contains("<ellipse"));
}

#[test]
fn test_empty_and_garbage_sources() {
    for source in ["", "digraph G { }", "this is not dot at all"] {
        let svg = render_default(source);
        assert!(svg.contains("<rect"), "background missing for {source:?}");
        assert!(!svg.contains(r#"class="node""#));
        assert!(!svg.contains(r#"class="edge""#));
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let source = "strict digraph {\nnode [shape=box];\na -> b -> c [label=x];\nc -> a;\n}";
    assert_eq!(render_default(source), render_default(source));
}

#[test]
fn test_self_loop_draws_node_only() {
    let svg = render_default("digraph { a -> a [label=again]; }");

    assert_eq!(svg.matches(r#"class="node""#).count(), 1);
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("again"));
}

#[test]
fn test_background_color() {
    let svg = render_default("digraph {\nbgcolor=\"#202020\";\na;\n}");
    assert!(svg.contains(r##"fill="#202020""##));
}

#[test]
fn test_labels_are_escaped() {
    let svg = render_default("digraph {\na [label=\"<b>&</b>\"];\n}");
    assert!(!svg.contains("<b>"));
    assert!(svg.contains("&amp;"));
}

#[test]
fn test_unsupported_format() {
    for format in ["png", "pdf", "dot", ""] {
        let err = render("digraph { a -> b; }", &RenderOptions::new(format)).unwrap_err();
        assert!(
            matches!(&err, DotvizError::UnsupportedFormat(name) if name == format),
            "unexpected error for {format:?}: {err}"
        );
    }
}

#[test]
fn test_format_is_case_insensitive() {
    let svg = render("graph { a -- b; }", &RenderOptions::new("SVG")).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn test_renderer_with_config() {
    let config = AppConfig::new(
        CanvasConfig::new(300.0, 300.0),
        LayoutConfig::new(Point::new(150.0, 150.0), 100.0),
        StyleConfig::new("black", 10.0, 4.0),
    );
    let renderer = Renderer::new(config);
    let svg = renderer
        .render("digraph { a -> b; }", &RenderOptions::default())
        .unwrap();

    assert!(svg.contains(r#"viewBox="0 0 300 300""#));
    assert!(svg.contains(r#"fill="black""#));
    // a at (250,150), b at (50,150), both clipped by the radius of 10.
    assert!(svg.contains(r#"d="M240,150 L60,150""#));
}

#[test]
fn test_invalid_config_is_reported() {
    let config = AppConfig::new(
        CanvasConfig::new(-1.0, 300.0),
        LayoutConfig::default(),
        StyleConfig::default(),
    );
    let renderer = Renderer::new(config);
    let graph = renderer.parse("digraph { a -> b; }");

    assert!(matches!(
        renderer.render_svg(&graph),
        Err(DotvizError::Config(_))
    ));
}

#[test]
fn test_renderer_reusability() {
    let renderer = Renderer::default();

    let first = renderer.parse("digraph { a -> b; }");
    let second = renderer.parse("graph { x -- y -- z; }");

    let svg1 = renderer.render_svg(&first).unwrap();
    let svg2 = renderer.render_svg(&second).unwrap();

    assert_ne!(svg1, svg2);
    assert_eq!(svg2.matches(r#"class="edge""#).count(), 2);
}
