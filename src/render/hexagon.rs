//! Hexagon vertex generation.

use super::layout::Point;

/// The six corner points of a hexagon centered at `center` with the given
/// circumradius.
///
/// Corners advance clockwise in screen coordinates, in 60-degree steps
/// starting at -30 degrees, so every tile shares flush edges with its
/// neighbors under the axial projection. All six corners lie exactly `size`
/// away from the center.
#[must_use]
pub fn corners(center: Point, size: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point {
            x: center.x + size * angle.cos(),
            y: center.y + size * angle.sin(),
        }
    })
}
