//! Axial-to-pixel projection and grid bounds normalization.

/// A point in drawing space. Y grows downward, matching SVG coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Project axial grid coordinates onto the pixel plane.
///
/// Each row shifts right by half a column width and rows pack at 1.5 times
/// the hex radius vertically, so edge-sharing tiles come out edge-sharing on
/// screen. Grid coordinates may be negative; the projection is applied before
/// any normalization.
#[must_use]
pub fn axial_to_pixel(x: i32, y: i32, hex_size: f64) -> Point {
    Point {
        x: hex_size * 3.0_f64.sqrt() * (f64::from(x) + f64::from(y) / 2.0),
        y: hex_size * 1.5 * f64::from(y),
    }
}

/// Minimum projected coordinates over a set of tile centers.
///
/// Tracked per axis independently: `min_x` and `min_y` may come from
/// different tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
}

impl Bounds {
    /// Compute bounds in one pass. `None` when there are no points, so an
    /// empty grid can never produce an infinite offset.
    #[must_use]
    pub fn of(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for point in points {
            let entry = bounds.get_or_insert(Self {
                min_x: point.x,
                min_y: point.y,
            });
            entry.min_x = entry.min_x.min(point.x);
            entry.min_y = entry.min_y.min(point.y);
        }
        bounds
    }

    /// The translation that moves the grid into positive drawing space with a
    /// one-hex-radius margin: `(-min + hex_size)` per axis.
    #[must_use]
    pub fn offset(&self, hex_size: f64) -> Point {
        Point {
            x: -self.min_x + hex_size,
            y: -self.min_y + hex_size,
        }
    }

    /// Apply the normalizing translation to one projected center.
    ///
    /// Subtracts the minimum before adding the margin, so the smallest
    /// adjusted coordinate on each axis is exactly `hex_size` rather than
    /// `hex_size` plus rounding error.
    #[must_use]
    pub fn normalize(&self, point: Point, hex_size: f64) -> Point {
        Point {
            x: (point.x - self.min_x) + hex_size,
            y: (point.y - self.min_y) + hex_size,
        }
    }
}
