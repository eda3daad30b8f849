pub mod error;
pub mod floor;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{RoomplanError, Result};
