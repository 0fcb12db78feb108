//! Display-only repositioning of far-flung states.

use geo::{MultiPolygon, Scale, Translate};

use crate::config::Inset;

/// Scale `shape` uniformly about its own centroid, then translate it.
/// Returns a new shape; the input is left as is. Shapes without a centroid are only translated.
pub fn apply_inset(shape: &MultiPolygon<f64>, inset: &Inset) -> MultiPolygon<f64> {
    let scaled = match super::centroid(shape) {
        Some(origin) => shape.scale_around_point(inset.scale, inset.scale, origin),
        None => shape.clone(),
    };
    scaled.translate(inset.dx, inset.dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{bounds, centroid, tests::square};

    #[test]
    fn scales_about_centroid_then_translates() {
        let shape = square(0.0, 0.0, 4.0);
        let moved = apply_inset(&shape, &Inset::new("Alaska", 0.5, 10.0, -20.0));

        // Centroid (2,2) moves only by the translation.
        let c = centroid(&moved).unwrap();
        assert!((c.x() - 12.0).abs() < 1e-9);
        assert!((c.y() + 18.0).abs() < 1e-9);

        // Side length halves.
        let rect = bounds([&moved]).unwrap();
        assert!((rect.width() - 2.0).abs() < 1e-9);
        assert!((rect.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn input_shape_is_untouched() {
        let shape = square(1.0, 1.0, 1.0);
        let before = shape.clone();
        let _ = apply_inset(&shape, &Inset::new("Hawaii", 1.5, 30.0, 10.0));
        assert_eq!(shape, before);
    }

    #[test]
    fn empty_shape_stays_empty() {
        let moved = apply_inset(&MultiPolygon(vec![]), &Inset::new("Hawaii", 1.5, 30.0, 10.0));
        assert!(moved.0.is_empty());
    }
}
