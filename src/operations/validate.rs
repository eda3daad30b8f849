use crate::error::{GeometryError, Result};
use crate::floor::Room;

/// Checks that every shape of a room has finite, positive dimensions.
pub struct ValidateRoom<'a> {
    room: &'a Room,
}

impl<'a> ValidateRoom<'a> {
    /// Creates a new `ValidateRoom` query.
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self { room }
    }

    /// Executes the validation.
    ///
    /// An empty shape list is valid; such rooms simply draw nothing.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` naming the first bad shape.
    pub fn execute(&self) -> Result<()> {
        for (i, shape) in self.room.shapes.iter().enumerate() {
            if !shape.is_valid() {
                return Err(GeometryError::Degenerate(format!(
                    "room {} shape {i} at ({}, {}) has size {} x {}",
                    self.room.id,
                    shape.position.x,
                    shape.position.y,
                    shape.size.width,
                    shape.size.height
                ))
                .into());
            }
        }
        Ok(())
    }
}
