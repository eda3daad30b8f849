use tracing::trace;

use super::OutlineParams;
use crate::geometry::{Edge, RoomShape};
use crate::math::Interval;

/// Finds the parts of one shape edge that lie against other shapes of the same room.
///
/// The shape is addressed by its index in the room's shape list, so it is
/// never compared against itself.
pub struct SharedSegments {
    index: usize,
    edge: Edge,
    params: OutlineParams,
}

impl SharedSegments {
    /// Creates a new `SharedSegments` query for `edge` of the shape at `index`.
    #[must_use]
    pub fn new(index: usize, edge: Edge) -> Self {
        Self {
            index,
            edge,
            params: OutlineParams::default(),
        }
    }

    /// Sets custom outline parameters.
    #[must_use]
    pub fn with_params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query against every shape of the room.
    ///
    /// Each touching neighbor contributes at most one interval; the result is
    /// not merged. Degenerate shapes neither receive nor contribute intervals,
    /// and an out-of-range index yields nothing.
    #[must_use]
    pub fn execute(&self, shapes: &[RoomShape]) -> Vec<Interval> {
        let Some(shape) = shapes.get(self.index).filter(|s| s.is_valid()) else {
            return Vec::new();
        };
        let range = self.edge.range(shape);
        let mut shared = Vec::new();

        for (i, other) in shapes.iter().enumerate() {
            if i == self.index || !other.is_valid() {
                continue;
            }
            if !self.edge.touches(shape, other, self.params.tolerance) {
                continue;
            }
            if let Some(overlap) = range.overlap(&self.edge.range(other)) {
                trace!(
                    edge = ?self.edge,
                    start = overlap.start,
                    end = overlap.end,
                    "Shared interval"
                );
                shared.push(overlap);
            }
        }

        shared
    }
}
