use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use slotmap::SecondaryMap;
use tracing::debug;

use super::label::{LabelBox, LabelParams, RoomLabel};
use super::outline::{OutlineParams, RoomOutline};
use crate::floor::{EntityDirectory, FloorPlan, Room, RoomId};
use crate::geometry::Segment;

/// Drawable output for one room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomRender {
    #[serde(skip)]
    pub room: RoomId,
    pub segments: Vec<Segment>,
    pub label: LabelBox,
}

/// Renders the outline and label of one room.
fn render_room(
    id: RoomId,
    room: &Room,
    entities: Option<&dyn EntityDirectory>,
    outline: OutlineParams,
    label: LabelParams,
) -> RoomRender {
    let segments = RoomOutline::new(room).with_params(outline).execute();
    let mut op = RoomLabel::new(room).with_params(label);
    if let Some(entities) = entities {
        op = op.with_entities(entities);
    }
    RoomRender {
        room: id,
        segments,
        label: op.execute(),
    }
}

/// Content hash of everything that feeds a room render, apart from the entity directory.
fn fingerprint(room: &Room, outline: OutlineParams, label: LabelParams) -> u64 {
    let mut h = DefaultHasher::new();
    room.id.hash(&mut h);
    room.location.hash(&mut h);
    room.kind.hash(&mut h);
    room.shapes.len().hash(&mut h);
    for shape in &room.shapes {
        for v in [shape.position.x, shape.position.y, shape.size.width, shape.size.height] {
            v.to_bits().hash(&mut h);
        }
    }
    outline.tolerance.to_bits().hash(&mut h);
    for v in [
        label.base_font_size,
        label.char_width_ratio,
        label.shrink_factor,
        label.min_font_size,
        label.subtitle_ratio,
        label.width_ratio,
        label.min_text_width,
        label.height_ratio,
        label.logo_scale,
        label.max_logo_size,
        label.icon_scale,
        label.icon_padding,
        label.line_padding,
        label.subtitle_gap,
        label.icon_margin,
    ] {
        v.to_bits().hash(&mut h);
    }
    h.finish()
}

#[derive(Debug, Clone)]
struct CacheEntry {
    fingerprint: u64,
    render: RoomRender,
}

/// Memoized room renders, indexed by [`RoomId`].
///
/// Entries are reused while the room's content hash is unchanged. The entity
/// directory is not part of the hash; call [`RenderCache::clear`] when it changes.
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: SecondaryMap<RoomId, CacheEntry>,
    hits: usize,
    misses: usize,
}

impl RenderCache {
    /// Creates a new, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lookups served from the cache.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that had to render.
    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached render.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops renders of rooms that are no longer in `plan`.
    pub fn evict_removed(&mut self, plan: &FloorPlan) {
        let before = self.entries.len();
        self.entries.retain(|id, _| plan.contains(id));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!(floor = %plan.id, evicted, "Evicted stale renders");
        }
    }

    fn get_or_render(
        &mut self,
        id: RoomId,
        room: &Room,
        fingerprint: u64,
        render: impl FnOnce() -> RoomRender,
    ) -> RoomRender {
        if let Some(entry) = self.entries.get(id) {
            if entry.fingerprint == fingerprint {
                self.hits += 1;
                debug!(room = %room.id, "Render cache hit");
                return entry.render.clone();
            }
        }
        self.misses += 1;
        debug!(room = %room.id, "Render cache miss");
        let fresh = render();
        self.entries.insert(
            id,
            CacheEntry {
                fingerprint,
                render: fresh.clone(),
            },
        );
        fresh
    }
}

/// Renders every room of a floor plan.
pub struct RenderFloor<'a> {
    plan: &'a FloorPlan,
    entities: Option<&'a dyn EntityDirectory>,
    outline: OutlineParams,
    label: LabelParams,
}

impl<'a> RenderFloor<'a> {
    /// Creates a new `RenderFloor` operation.
    #[must_use]
    pub fn new(plan: &'a FloorPlan) -> Self {
        Self {
            plan,
            entities: None,
            outline: OutlineParams::default(),
            label: LabelParams::default(),
        }
    }

    /// Resolves lab names and logos through `entities`.
    #[must_use]
    pub fn with_entities(mut self, entities: &'a dyn EntityDirectory) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Sets custom outline parameters.
    #[must_use]
    pub fn with_outline_params(mut self, params: OutlineParams) -> Self {
        self.outline = params;
        self
    }

    /// Sets custom label parameters.
    #[must_use]
    pub fn with_label_params(mut self, params: LabelParams) -> Self {
        self.label = params;
        self
    }

    /// Executes the operation, rendering every room from scratch.
    #[must_use]
    pub fn execute(&self) -> Vec<RoomRender> {
        let renders: Vec<RoomRender> = self
            .plan
            .rooms()
            .map(|(id, room)| render_room(id, room, self.entities, self.outline, self.label))
            .collect();
        debug!(floor = %self.plan.id, rooms = renders.len(), "Rendered floor");
        renders
    }

    /// Executes the operation, reusing renders from `cache` for unchanged rooms.
    ///
    /// Entries for rooms removed from the plan are evicted first.
    #[must_use]
    pub fn execute_cached(&self, cache: &mut RenderCache) -> Vec<RoomRender> {
        cache.evict_removed(self.plan);
        self.plan
            .rooms()
            .map(|(id, room)| {
                let fp = fingerprint(room, self.outline, self.label);
                cache.get_or_render(id, room, fp, || {
                    render_room(id, room, self.entities, self.outline, self.label)
                })
            })
            .collect()
    }
}
