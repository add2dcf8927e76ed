//! Pipeline tests: TOML scene in, SVG out
//!
//! These assert on the structure of the SVG rather than byte equality, so
//! cosmetic changes to indentation or attribute order stay cheap.

use pretty_assertions::assert_eq;

use corner_layout::{render, render_with_config, RenderConfig, SvgConfig};

const FOUR_CORNERS: &str = r#"
[container]
width = { mode = "exact", size = 200 }
height = { mode = "exact", size = 200 }

[[children]]
width = 50
height = 50

[[children]]
width = 50
height = 50

[[children]]
width = 50
height = 50

[[children]]
width = 50
height = 50
"#;

fn rect_lines(svg: &str) -> Vec<&str> {
    svg.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<rect"))
        .collect()
}

#[test]
fn test_four_corner_scene_draws_five_rects() {
    let svg = render(FOUR_CORNERS).unwrap();
    let rects = rect_lines(&svg);
    // Container outline plus one rect per placed child.
    assert_eq!(rects.len(), 5);
    assert!(rects[0].contains("cl-container"));
}

#[test]
fn test_child_rects_carry_computed_frames() {
    let svg = render(FOUR_CORNERS).unwrap();
    assert!(svg.contains(r#"x="0" y="0" width="50" height="50""#));
    assert!(svg.contains(r#"x="150" y="0" width="50" height="50""#));
    assert!(svg.contains(r#"x="0" y="150" width="50" height="50""#));
    assert!(svg.contains(r#"x="150" y="150" width="50" height="50""#));
}

#[test]
fn test_children_past_the_fourth_are_not_drawn() {
    let scene = format!(
        "{}\n[[children]]\nwidth = 50\nheight = 50\n",
        FOUR_CORNERS
    );
    let svg = render(&scene).unwrap();
    assert_eq!(rect_lines(&svg).len(), 5);
}

#[test]
fn test_wrap_content_scene_sizes_viewbox_from_children() {
    let scene = r#"
[[children]]
width = 40
height = 40

[[children]]
width = 40
height = 40
"#;
    let config = RenderConfig::new().with_svg(SvgConfig::default().with_viewbox_padding(0));
    let svg = render_with_config(scene, config).unwrap();
    // Desired size: top row 80 wide, both columns 40 tall.
    assert!(svg.contains(r#"viewBox="0 0 80 40""#));
}

#[test]
fn test_index_labels_are_emitted() {
    let svg = render(FOUR_CORNERS).unwrap();
    for index in 0..4 {
        assert!(svg.contains(&format!(">{}</text>", index)));
    }
}

#[test]
fn test_render_is_deterministic() {
    let first = render(FOUR_CORNERS).unwrap();
    let second = render(FOUR_CORNERS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bad_scene_reports_scene_error() {
    let err = render("children = 3").unwrap_err();
    assert!(err.to_string().contains("scene error"));
}
