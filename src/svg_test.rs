use super::*;
use crate::render::render;
use crate::tile::{TerrainKind, Tile};

fn sample_polygons() -> Vec<Polygon> {
    let tiles = [
        Tile {
            x: 0,
            y: 0,
            kind: TerrainKind::Lake,
        },
        Tile {
            x: 1,
            y: 0,
            kind: TerrainKind::Forest,
        },
    ];
    render(&tiles, 20.0).expect("render")
}

#[test]
fn document_declares_the_canvas_dimensions() {
    let svg = document(600, 400, &sample_polygons());
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="400">"#));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn one_polygon_element_per_drawable() {
    let svg = document(600, 400, &sample_polygons());
    assert_eq!(svg.matches("<polygon ").count(), 2);
}

#[test]
fn polygon_elements_carry_fill_and_stroke() {
    let svg = document(600, 400, &sample_polygons());
    assert!(svg.contains(r##"fill="#1f77b4""##));
    assert!(svg.contains(r##"fill="#2ca02c""##));
    assert_eq!(svg.matches(r#"stroke="black""#).count(), 2);
}

#[test]
fn points_attribute_lists_six_pairs() {
    let svg = document(600, 400, &sample_polygons());
    let points = svg
        .split("points=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("points attribute");
    let pairs: Vec<&str> = points.split(' ').collect();
    assert_eq!(pairs.len(), 6);
    for pair in pairs {
        assert_eq!(pair.matches(',').count(), 1, "bad pair: {pair}");
    }
}

#[test]
fn empty_polygon_list_yields_a_bare_document() {
    let svg = document(300, 200, &[]);
    assert_eq!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"200\">\n</svg>\n"
    );
}
