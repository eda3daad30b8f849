pub mod segment;
pub mod shape;

pub use segment::Segment;
pub use shape::{Edge, RoomShape, Size};
