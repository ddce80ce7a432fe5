//! SVG document writer for drawable polygons.

use crate::render::Polygon;

/// Render polygons into a standalone `<svg>` document.
///
/// One `<polygon>` element per drawable, in order, with `points`, `fill` and
/// `stroke` attributes. The canvas dimensions are declared as given; content
/// outside them is left to the viewer to clip.
#[must_use]
pub fn document(width: u32, height: u32, polygons: &[Polygon]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    ));
    out.push('\n');

    for polygon in polygons {
        out.push_str(&format!(
            r#"  <polygon points="{points}" fill="{fill}" stroke="{stroke}" />"#,
            points = polygon.points_attr(),
            fill = polygon.fill,
            stroke = polygon.stroke,
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;
