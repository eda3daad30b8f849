use serde::{Deserialize, Serialize};

use super::Edge;
use crate::math::{Interval, Point2};

/// A drawable wall line: an interval along one axis at a fixed coordinate on the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Which side of its shape the segment came from.
    pub edge: Edge,
    /// y for top/bottom segments, x for left/right.
    pub coordinate: f64,
    pub span: Interval,
}

impl Segment {
    #[must_use]
    pub fn new(edge: Edge, coordinate: f64, span: Interval) -> Self {
        Self {
            edge,
            coordinate,
            span,
        }
    }

    /// First endpoint of the line.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.point_at(self.span.start)
    }

    /// Second endpoint of the line.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.point_at(self.span.end)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.span.length()
    }

    fn point_at(&self, t: f64) -> Point2 {
        if self.edge.is_horizontal() {
            Point2::new(t, self.coordinate)
        } else {
            Point2::new(self.coordinate, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn horizontal_endpoints() {
        let s = Segment::new(Edge::Bottom, 115.0, Interval::new(55.0, 115.0));
        assert_relative_eq!(s.start().x, 55.0);
        assert_relative_eq!(s.start().y, 115.0);
        assert_relative_eq!(s.end().x, 115.0);
        assert_relative_eq!(s.end().y, 115.0);
    }

    #[test]
    fn vertical_endpoints() {
        let s = Segment::new(Edge::Right, 110.0, Interval::new(10.0, 90.0));
        assert_relative_eq!(s.start().x, 110.0);
        assert_relative_eq!(s.start().y, 10.0);
        assert_relative_eq!(s.end().y, 90.0);
        assert_relative_eq!(s.length(), 80.0);
    }
}
