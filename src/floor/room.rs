use serde::{Deserialize, Serialize};

use crate::geometry::RoomShape;

/// A professor listed on an office door.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Professor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Professor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    /// First whitespace-separated token of the name, or the whole name if it has none.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// What a room is used for. Drives outline eligibility, icon choice and label text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoomKind {
    Classroom,
    Corridor,
    Bathroom,
    LabClass,
    LabResearch {
        /// Slugs of the research labs housed in the room.
        #[serde(default)]
        labs: Vec<String>,
    },
    Library,
    ProfessorOffice {
        #[serde(default)]
        professors: Vec<Professor>,
    },
    InstitutionalOffice,
    SharedSpace,
    Stairs,
}

impl RoomKind {
    /// Corridors are background regions: no walls are drawn and they are not interactive.
    #[must_use]
    pub fn draws_outline(&self) -> bool {
        match self {
            RoomKind::Corridor => false,
            RoomKind::Classroom
            | RoomKind::Bathroom
            | RoomKind::LabClass
            | RoomKind::LabResearch { .. }
            | RoomKind::Library
            | RoomKind::ProfessorOffice { .. }
            | RoomKind::InstitutionalOffice
            | RoomKind::SharedSpace
            | RoomKind::Stairs => true,
        }
    }

    /// Whether the room type has a pictogram to show next to its label.
    #[must_use]
    pub fn has_icon(&self) -> bool {
        match self {
            RoomKind::Bathroom | RoomKind::Corridor => false,
            RoomKind::Classroom
            | RoomKind::LabClass
            | RoomKind::LabResearch { .. }
            | RoomKind::Library
            | RoomKind::ProfessorOffice { .. }
            | RoomKind::InstitutionalOffice
            | RoomKind::SharedSpace
            | RoomKind::Stairs => true,
        }
    }

    /// Stable kebab-case name, matching the serialized tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RoomKind::Classroom => "classroom",
            RoomKind::Corridor => "corridor",
            RoomKind::Bathroom => "bathroom",
            RoomKind::LabClass => "lab-class",
            RoomKind::LabResearch { .. } => "lab-research",
            RoomKind::Library => "library",
            RoomKind::ProfessorOffice { .. } => "professor-office",
            RoomKind::InstitutionalOffice => "institutional-office",
            RoomKind::SharedSpace => "shared-space",
            RoomKind::Stairs => "stairs",
        }
    }
}

/// A physical room on a floor, built from one or more rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Display name, e.g. `"Sala 204"`.
    pub location: String,
    #[serde(flatten)]
    pub kind: RoomKind,
    #[serde(default)]
    pub shapes: Vec<RoomShape>,
}

impl Room {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        kind: RoomKind,
        shapes: Vec<RoomShape>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            kind,
            shapes,
        }
    }

    /// Lab slugs for research rooms, empty otherwise.
    #[must_use]
    pub fn labs(&self) -> &[String] {
        match &self.kind {
            RoomKind::LabResearch { labs } => labs,
            _ => &[],
        }
    }

    /// Professors for office rooms, empty otherwise.
    #[must_use]
    pub fn professors(&self) -> &[Professor] {
        match &self.kind {
            RoomKind::ProfessorOffice { professors } => professors,
            _ => &[],
        }
    }
}
