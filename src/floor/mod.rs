pub mod entity;
pub mod room;

pub use entity::{Entity, EntityDirectory};
pub use room::{Professor, Room, RoomKind};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::error::{FloorError, Result};
use crate::operations::ValidateRoom;

slotmap::new_key_type! {
    /// Unique identifier for a room in a [`FloorPlan`].
    pub struct RoomId;
}

/// Drawing canvas of a floor, in floor-plan units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// One building floor as supplied by the floor-plan data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub blueprint: Blueprint,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Parses a floor document.
    ///
    /// # Errors
    ///
    /// Returns `FloorError::Parse` if the document is not a valid floor.
    pub fn from_json(json: &str) -> Result<Self> {
        let floor: Floor = serde_json::from_str(json).map_err(FloorError::from)?;
        debug!(floor = %floor.id, rooms = floor.rooms.len(), "Parsed floor");
        Ok(floor)
    }
}

/// Arena that owns the rooms of a floor.
///
/// Rooms are addressed by generational [`RoomId`] keys, which render caches
/// use as their index.
#[derive(Debug, Default)]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub blueprint: Option<Blueprint>,
    rooms: SlotMap<RoomId, Room>,
    by_name: HashMap<String, RoomId>,
}

impl FloorPlan {
    /// Creates a new, empty floor plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an arena from a loaded floor.
    ///
    /// # Errors
    ///
    /// Returns `FloorError::DuplicateRoom` if two rooms share an id.
    pub fn from_floor(floor: Floor) -> Result<Self> {
        let mut plan = Self {
            id: floor.id,
            name: floor.name,
            level: floor.level,
            blueprint: Some(floor.blueprint),
            ..Self::default()
        };
        for room in floor.rooms {
            plan.add_room(room)?;
        }
        Ok(plan)
    }

    /// Inserts a room and returns its key.
    ///
    /// # Errors
    ///
    /// Returns `FloorError::DuplicateRoom` if a room with the same id exists.
    pub fn add_room(&mut self, room: Room) -> Result<RoomId> {
        if self.by_name.contains_key(&room.id) {
            return Err(FloorError::DuplicateRoom(room.id).into());
        }
        let name = room.id.clone();
        let id = self.rooms.insert(room);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Removes a room, returning it if it existed.
    pub fn remove_room(&mut self, id: RoomId) -> Option<Room> {
        let room = self.rooms.remove(id)?;
        self.by_name.remove(&room.id);
        Some(room)
    }

    /// Returns a reference to the room, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not in the plan.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| FloorError::RoomNotFound(format!("{id:?}")).into())
    }

    /// Returns `true` if `id` refers to a room still in the plan.
    #[must_use]
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(id)
    }

    /// Looks up a room key by the room's external id.
    ///
    /// # Errors
    ///
    /// Returns an error if no room has that id.
    pub fn find(&self, name: &str) -> Result<RoomId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| FloorError::RoomNotFound(name.to_owned()).into())
    }

    /// Iterates over all rooms with their keys.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Validates every room, returning the keys of rooms with degenerate shapes.
    ///
    /// Invalid rooms still render; their bad shapes simply contribute nothing.
    #[must_use]
    pub fn validate(&self) -> Vec<RoomId> {
        let mut invalid = Vec::new();
        for (id, room) in &self.rooms {
            if let Err(err) = ValidateRoom::new(room).execute() {
                warn!(room = %room.id, %err, "Room has degenerate geometry");
                invalid.push(id);
            }
        }
        invalid
    }
}
