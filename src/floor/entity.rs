use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A lab or group that can be shown by name and logo on a room label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>, image_path: Option<String>) -> Self {
        Self {
            name: name.into(),
            image_path,
        }
    }
}

/// Lookup of entities by slug.
pub trait EntityDirectory {
    fn entity(&self, slug: &str) -> Option<&Entity>;
}

impl<S: std::hash::BuildHasher> EntityDirectory for HashMap<String, Entity, S> {
    fn entity(&self, slug: &str) -> Option<&Entity> {
        self.get(slug)
    }
}

impl EntityDirectory for BTreeMap<String, Entity> {
    fn entity(&self, slug: &str) -> Option<&Entity> {
        self.get(slug)
    }
}
