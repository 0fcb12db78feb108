mod inset;

pub use inset::apply_inset;

use geo::{BoundingRect, Centroid, Coord, MultiPolygon, Point, Rect};

/// Compute the bounding rectangle of all MultiPolygons.
pub(crate) fn bounds<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes.into_iter()
        .filter_map(|polygon| polygon.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}

/// Centroid of a MultiPolygon, or `None` for empty or degenerate shapes.
#[inline]
pub(crate) fn centroid(shape: &MultiPolygon<f64>) -> Option<Point<f64>> {
    shape.centroid()
        .filter(|point| point.x().is_finite() && point.y().is_finite())
}
