use crate::floor::{Entity, EntityDirectory, Room, RoomKind};

/// Text and logos chosen for a room label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelContent<'a> {
    pub title: String,
    /// The room's location, shown under the title when the title names occupants.
    pub subtitle: Option<&'a str>,
    /// Lab entities whose logos should be drawn.
    pub logos: Vec<&'a Entity>,
}

impl<'a> LabelContent<'a> {
    /// Selects what a room's label shows.
    ///
    /// Research labs list their lab names, professor offices list first names,
    /// everything else shows its location.
    #[must_use]
    pub fn select(room: &'a Room, entities: Option<&'a dyn EntityDirectory>) -> Self {
        match &room.kind {
            RoomKind::LabResearch { labs } if !labs.is_empty() => {
                let resolved: Vec<(&str, Option<&Entity>)> = labs
                    .iter()
                    .map(|slug| (slug.as_str(), entities.and_then(|d| d.entity(slug))))
                    .collect();
                let title = resolved
                    .iter()
                    .map(|(slug, entity)| entity.map_or(*slug, |e| e.name.as_str()))
                    .collect::<Vec<_>>()
                    .join(", ");
                let logos = resolved
                    .into_iter()
                    .filter_map(|(_, entity)| entity)
                    .filter(|e| e.image_path.is_some())
                    .collect();
                Self {
                    title,
                    subtitle: Some(room.location.as_str()),
                    logos,
                }
            }
            RoomKind::ProfessorOffice { professors } if !professors.is_empty() => Self {
                title: professors
                    .iter()
                    .map(|p| p.first_name())
                    .collect::<Vec<_>>()
                    .join(", "),
                subtitle: Some(room.location.as_str()),
                logos: Vec::new(),
            },
            RoomKind::Classroom
            | RoomKind::Corridor
            | RoomKind::Bathroom
            | RoomKind::LabClass
            | RoomKind::LabResearch { .. }
            | RoomKind::Library
            | RoomKind::ProfessorOffice { .. }
            | RoomKind::InstitutionalOffice
            | RoomKind::SharedSpace
            | RoomKind::Stairs => Self {
                title: room.location.clone(),
                subtitle: None,
                logos: Vec::new(),
            },
        }
    }

    /// Whether lab logos take the place of the room icon.
    #[must_use]
    pub fn shows_logos(&self) -> bool {
        !self.logos.is_empty()
    }

    /// Character count of the title.
    #[must_use]
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }
}
