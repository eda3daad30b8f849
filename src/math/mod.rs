pub mod interval;

pub use interval::{merge_intervals, non_shared_segments, Interval};

/// 2D point type, in floor-plan units.
pub type Point2 = nalgebra::Point2<f64>;

/// Returns `true` if two edge coordinates coincide.
///
/// A `tolerance` of zero means exact equality.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn coincident(a: f64, b: f64, tolerance: f64) -> bool {
    if tolerance > 0.0 {
        (a - b).abs() <= tolerance
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_coincidence() {
        assert!(coincident(115.0, 115.0, 0.0));
        assert!(!coincident(115.0, 115.000_001, 0.0));
    }

    #[test]
    fn tolerant_coincidence() {
        assert!(coincident(115.0, 115.000_001, 1e-3));
        assert!(!coincident(115.0, 115.1, 1e-3));
    }

    #[test]
    fn negative_tolerance_is_exact() {
        assert!(!coincident(1.0, 1.0 + 1e-12, -1.0));
    }
}
