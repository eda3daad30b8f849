use crate::geometry::RoomShape;
use crate::math::coincident;

/// Returns `true` if the two shapes touch along an edge with positive overlap.
///
/// Uses exact coordinate equality. See [`shares_edge_within`] for a tolerant
/// variant.
#[must_use]
pub fn shares_edge(a: &RoomShape, b: &RoomShape) -> bool {
    shares_edge_within(a, b, 0.0)
}

/// Like [`shares_edge`], treating coordinates within `tolerance` as coincident.
///
/// Corner-only contact does not count, and degenerate shapes are never
/// adjacent to anything.
#[must_use]
pub fn shares_edge_within(a: &RoomShape, b: &RoomShape, tolerance: f64) -> bool {
    if !a.is_valid() || !b.is_valid() {
        return false;
    }

    let horizontal = (coincident(a.right(), b.left(), tolerance)
        || coincident(b.right(), a.left(), tolerance))
        && a.y_range().overlap(&b.y_range()).is_some();

    let vertical = (coincident(a.bottom(), b.top(), tolerance)
        || coincident(b.bottom(), a.top(), tolerance))
        && a.x_range().overlap(&b.x_range()).is_some();

    horizontal || vertical
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn l_shape_is_adjacent() {
        let large = RoomShape::new(0.0, 0.0, 115.0, 115.0);
        let small = RoomShape::new(0.0, 115.0, 55.0, 20.0);
        assert!(shares_edge(&large, &small));
    }

    #[test]
    fn horizontal_pair_is_adjacent() {
        let a = RoomShape::new(0.0, 0.0, 50.0, 100.0);
        let b = RoomShape::new(50.0, 0.0, 50.0, 100.0);
        assert!(shares_edge(&a, &b));
    }

    #[test]
    fn corner_contact_is_not_adjacent() {
        let a = RoomShape::new(0.0, 0.0, 10.0, 10.0);
        let b = RoomShape::new(10.0, 10.0, 10.0, 10.0);
        assert!(!shares_edge(&a, &b));
    }

    #[test]
    fn gap_is_not_adjacent() {
        let a = RoomShape::new(0.0, 0.0, 10.0, 10.0);
        let b = RoomShape::new(10.5, 0.0, 10.0, 10.0);
        assert!(!shares_edge(&a, &b));
        assert!(shares_edge_within(&a, &b, 0.5));
    }

    #[test]
    fn shape_not_adjacent_to_itself() {
        let a = RoomShape::new(0.0, 0.0, 10.0, 10.0);
        let copy = a;
        assert!(!shares_edge(&a, &a));
        assert!(!shares_edge(&a, &copy));
    }

    #[test]
    fn degenerate_shape_is_never_adjacent() {
        let a = RoomShape::new(0.0, 0.0, 100.0, 100.0);
        let flipped = RoomShape::new(0.0, 100.0, 100.0, -10.0);
        let flat = RoomShape::new(0.0, 100.0, 100.0, 0.0);
        assert!(!shares_edge(&a, &flipped));
        assert!(!shares_edge(&a, &flat));
    }

    fn shape_strategy() -> impl Strategy<Value = RoomShape> {
        (0u32..20, 0u32..20, 1u32..10, 1u32..10).prop_map(|(x, y, w, h)| {
            RoomShape::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
        })
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric(a in shape_strategy(), b in shape_strategy()) {
            prop_assert_eq!(shares_edge(&a, &b), shares_edge(&b, &a));
        }
    }
}
