mod adjacency;
mod shared;

pub use adjacency::{shares_edge, shares_edge_within};
pub use shared::SharedSegments;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::floor::Room;
use crate::geometry::{Edge, RoomShape, Segment};
use crate::math::non_shared_segments;

/// Parameters controlling edge-coincidence detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineParams {
    /// Maximum distance at which two edge coordinates count as touching.
    /// Zero means exact equality.
    pub tolerance: f64,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

/// Computes the visible wall segments of a room.
///
/// Edges of one shape that lie against another shape of the same room are
/// internal; only the uncovered portions are returned. Corridors draw no
/// outline at all.
pub struct RoomOutline<'a> {
    room: &'a Room,
    params: OutlineParams,
}

impl<'a> RoomOutline<'a> {
    /// Creates a new `RoomOutline` operation.
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self {
            room,
            params: OutlineParams::default(),
        }
    }

    /// Sets custom outline parameters.
    #[must_use]
    pub fn with_params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning segments grouped by shape then edge.
    #[must_use]
    pub fn execute(&self) -> Vec<Segment> {
        if !self.room.kind.draws_outline() {
            debug!(room = %self.room.id, kind = self.room.kind.name(), "Skipping outline");
            return Vec::new();
        }

        let shapes = &self.room.shapes;
        let segments: Vec<Segment> = (0..shapes.len())
            .flat_map(|i| shape_outline(i, shapes, self.params))
            .collect();

        debug!(
            room = %self.room.id,
            shapes = shapes.len(),
            segments = segments.len(),
            "Computed room outline"
        );
        segments
    }
}

/// Visible segments of every edge of the shape at `index` in `shapes`.
///
/// Degenerate shapes and out-of-range indices draw nothing.
#[must_use]
pub fn shape_outline(index: usize, shapes: &[RoomShape], params: OutlineParams) -> Vec<Segment> {
    let Some(shape) = shapes.get(index).filter(|s| s.is_valid()) else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    for edge in Edge::ALL {
        let range = edge.range(shape);
        let shared = SharedSegments::new(index, edge)
            .with_params(params)
            .execute(shapes);
        let coordinate = edge.coordinate(shape);
        segments.extend(
            non_shared_segments(range.start, range.end, &shared)
                .into_iter()
                .map(|span| Segment::new(edge, coordinate, span)),
        );
    }
    segments
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::floor::RoomKind;
    use crate::math::Interval;
    use proptest::prelude::*;

    fn room(shapes: Vec<RoomShape>) -> Room {
        Room::new("r", "Sala", RoomKind::Classroom, shapes)
    }

    fn on_edge(segments: &[Segment], edge: Edge, coordinate: f64) -> Vec<Interval> {
        segments
            .iter()
            .filter(|s| s.edge == edge && (s.coordinate - coordinate).abs() < 1e-9)
            .map(|s| s.span)
            .collect()
    }

    #[test]
    fn simple_rectangle_has_four_full_edges() {
        let room = room(vec![RoomShape::new(10.0, 10.0, 100.0, 80.0)]);
        let segments = RoomOutline::new(&room).execute();
        assert_eq!(
            segments,
            vec![
                Segment::new(Edge::Top, 10.0, Interval::new(10.0, 110.0)),
                Segment::new(Edge::Bottom, 90.0, Interval::new(10.0, 110.0)),
                Segment::new(Edge::Left, 10.0, Interval::new(10.0, 90.0)),
                Segment::new(Edge::Right, 110.0, Interval::new(10.0, 90.0)),
            ]
        );
    }

    #[test]
    fn l_shape_keeps_uncovered_bottom() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 115.0, 115.0),
            RoomShape::new(0.0, 115.0, 55.0, 20.0),
        ];
        let large = shape_outline(0, &shapes, OutlineParams::default());
        assert_eq!(
            on_edge(&large, Edge::Bottom, 115.0),
            vec![Interval::new(55.0, 115.0)]
        );

        let small = shape_outline(1, &shapes, OutlineParams::default());
        assert!(on_edge(&small, Edge::Top, 115.0).is_empty());
        assert_eq!(
            on_edge(&small, Edge::Bottom, 135.0),
            vec![Interval::new(0.0, 55.0)]
        );
    }

    #[test]
    fn vertical_stack_hides_shared_edge() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 100.0, 50.0),
            RoomShape::new(0.0, 50.0, 100.0, 50.0),
        ];
        let segments = RoomOutline::new(&room(shapes)).execute();
        assert!(on_edge(&segments, Edge::Bottom, 50.0).is_empty());
        assert!(on_edge(&segments, Edge::Top, 50.0).is_empty());
        assert_eq!(segments.len(), 6);
    }

    #[test]
    fn horizontal_pair_hides_shared_edge() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 50.0, 100.0),
            RoomShape::new(50.0, 0.0, 50.0, 100.0),
        ];
        let segments = RoomOutline::new(&room(shapes)).execute();
        assert!(on_edge(&segments, Edge::Right, 50.0).is_empty());
        assert!(on_edge(&segments, Edge::Left, 50.0).is_empty());
    }

    #[test]
    fn partial_overlap_splits_edge() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 100.0, 100.0),
            RoomShape::new(20.0, 100.0, 40.0, 20.0),
        ];
        let large = shape_outline(0, &shapes, OutlineParams::default());
        assert_eq!(
            on_edge(&large, Edge::Bottom, 100.0),
            vec![Interval::new(0.0, 20.0), Interval::new(60.0, 100.0)]
        );
    }

    #[test]
    fn corridor_draws_nothing() {
        let corridor = Room::new(
            "c",
            "Corredor",
            RoomKind::Corridor,
            vec![RoomShape::new(0.0, 0.0, 500.0, 20.0)],
        );
        assert!(RoomOutline::new(&corridor).execute().is_empty());
    }

    #[test]
    fn empty_room_draws_nothing() {
        assert!(RoomOutline::new(&room(Vec::new())).execute().is_empty());
    }

    #[test]
    fn degenerate_shape_does_not_abort_room() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 0.0, 0.0),
            RoomShape::new(10.0, 10.0, 10.0, 10.0),
        ];
        let segments = RoomOutline::new(&room(shapes)).execute();
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|s| s.span.start < s.span.end));
    }

    #[test]
    fn degenerate_neighbor_keeps_real_wall() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 100.0, 100.0),
            RoomShape::new(0.0, 100.0, 100.0, -10.0),
        ];
        let segments = RoomOutline::new(&room(shapes)).execute();
        assert_eq!(segments.len(), 4);
        assert_eq!(
            on_edge(&segments, Edge::Bottom, 100.0),
            vec![Interval::new(0.0, 100.0)]
        );
        assert!(on_edge(&segments, Edge::Bottom, 90.0).is_empty());
    }

    #[test]
    fn outline_does_not_depend_on_shape_identity() {
        let shapes = vec![
            RoomShape::new(0.0, 0.0, 115.0, 115.0),
            RoomShape::new(0.0, 115.0, 55.0, 20.0),
        ];
        let copy = shapes.clone();
        assert_eq!(
            shape_outline(0, &copy, OutlineParams::default()),
            shape_outline(0, &shapes, OutlineParams::default())
        );
        assert_eq!(shape_outline(0, &copy, OutlineParams::default()).len(), 4);
        assert!(shape_outline(2, &copy, OutlineParams::default()).is_empty());
    }

    fn sorted(mut segments: Vec<Segment>) -> Vec<Segment> {
        segments.sort_by(|a, b| {
            a.edge
                .cmp(&b.edge)
                .then(a.coordinate.total_cmp(&b.coordinate))
                .then(a.span.start.total_cmp(&b.span.start))
        });
        segments
    }

    fn t_shape() -> Vec<RoomShape> {
        vec![
            RoomShape::new(0.0, 0.0, 120.0, 40.0),
            RoomShape::new(40.0, 40.0, 40.0, 80.0),
            RoomShape::new(80.0, 60.0, 30.0, 20.0),
            RoomShape::new(0.0, 40.0, 20.0, 10.0),
        ]
    }

    proptest! {
        #[test]
        fn shape_order_does_not_change_outline(shuffled in Just(t_shape()).prop_shuffle()) {
            let expected = sorted(RoomOutline::new(&room(t_shape())).execute());
            let actual = sorted(RoomOutline::new(&room(shuffled)).execute());
            prop_assert_eq!(expected, actual);
        }
    }
}
