mod bounds;
mod content;

pub use bounds::{room_center, RoomBounds};
pub use content::LabelContent;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::floor::{EntityDirectory, Room};

/// Parameters controlling label sizing, in floor-plan units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelParams {
    /// Font size used when the text fits.
    pub base_font_size: f64,
    /// Estimated glyph width as a fraction of the base font size.
    pub char_width_ratio: f64,
    /// Extra shrink applied when the text overflows.
    pub shrink_factor: f64,
    pub min_font_size: f64,
    /// Subtitle size as a fraction of the base font size.
    pub subtitle_ratio: f64,
    /// Label width as a fraction of the narrowest shape.
    pub width_ratio: f64,
    pub min_text_width: f64,
    /// Minimum label height as a fraction of the room height.
    pub height_ratio: f64,
    pub logo_scale: f64,
    pub max_logo_size: f64,
    pub icon_scale: f64,
    /// Gap between icon or logo and text.
    pub icon_padding: f64,
    /// Padding below a single text line.
    pub line_padding: f64,
    /// Padding below a title with a subtitle.
    pub subtitle_gap: f64,
    /// Room height that must remain beyond icon and text for the icon to show.
    pub icon_margin: f64,
}

impl Default for LabelParams {
    fn default() -> Self {
        Self {
            base_font_size: 12.0,
            char_width_ratio: 0.6,
            shrink_factor: 0.9,
            min_font_size: 8.0,
            subtitle_ratio: 0.7,
            width_ratio: 0.9,
            min_text_width: 40.0,
            height_ratio: 0.6,
            logo_scale: 1.5,
            max_logo_size: 32.0,
            icon_scale: 1.2,
            icon_padding: 4.0,
            line_padding: 4.0,
            subtitle_gap: 6.0,
            icon_margin: 15.0,
        }
    }
}

/// Font sizes and box dimensions for a room label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayout {
    pub font_size: f64,
    pub subtitle_font_size: f64,
    pub text_width: f64,
    pub text_height: f64,
    /// The room-type icon fits without overflowing the room.
    pub show_icon: bool,
}

/// A label layout positioned at the room's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBox {
    pub center_x: f64,
    pub center_y: f64,
    #[serde(flatten)]
    pub layout: TextLayout,
}

/// Sizes the text and icon block of a room label so it fits the room.
pub struct TextDimensions<'a> {
    room: &'a Room,
    entities: Option<&'a dyn EntityDirectory>,
    params: LabelParams,
}

impl<'a> TextDimensions<'a> {
    /// Creates a new `TextDimensions` query.
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self {
            room,
            entities: None,
            params: LabelParams::default(),
        }
    }

    /// Resolves lab names and logos through `entities`.
    #[must_use]
    pub fn with_entities(mut self, entities: &'a dyn EntityDirectory) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Sets custom label parameters.
    #[must_use]
    pub fn with_params(mut self, params: LabelParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> TextLayout {
        let p = &self.params;
        let content = LabelContent::select(self.room, self.entities);
        let (min_width, bounding_height) =
            RoomBounds::of(&self.room.shapes).map_or((0.0, 0.0), |b| (b.min_width, b.height()));

        let subtitle_font_size = p.base_font_size * p.subtitle_ratio;

        let char_width = p.base_font_size * p.char_width_ratio;
        let max_chars = (min_width / char_width).floor().max(0.0);
        let text_len = content.title_len() as f64;
        let font_size = if text_len > max_chars {
            (max_chars / text_len * p.base_font_size * p.shrink_factor).max(p.min_font_size)
        } else {
            p.base_font_size
        };

        let text_width = (min_width * p.width_ratio).max(p.min_text_width);

        let shows_logos = content.shows_logos();
        let icon_applicable = self.room.kind.has_icon();
        let icon_height = if shows_logos {
            (font_size * p.logo_scale).min(p.max_logo_size) + p.icon_padding
        } else if icon_applicable {
            font_size * p.icon_scale + p.icon_padding
        } else {
            0.0
        };

        let line_height = if content.subtitle.is_some() {
            font_size + subtitle_font_size + p.subtitle_gap
        } else {
            font_size + p.line_padding
        };

        let text_height = (bounding_height * p.height_ratio).max(icon_height + line_height);
        let show_icon = icon_applicable
            && !shows_logos
            && bounding_height >= icon_height + line_height + p.icon_margin;

        trace!(
            room = %self.room.id,
            font_size,
            text_width,
            text_height,
            show_icon,
            "Label layout"
        );

        TextLayout {
            font_size,
            subtitle_font_size,
            text_width,
            text_height,
            show_icon,
        }
    }
}

/// Computes the anchored label box of a room.
pub struct RoomLabel<'a> {
    dimensions: TextDimensions<'a>,
}

impl<'a> RoomLabel<'a> {
    /// Creates a new `RoomLabel` operation.
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self {
            dimensions: TextDimensions::new(room),
        }
    }

    /// Resolves lab names and logos through `entities`.
    #[must_use]
    pub fn with_entities(mut self, entities: &'a dyn EntityDirectory) -> Self {
        self.dimensions = self.dimensions.with_entities(entities);
        self
    }

    /// Sets custom label parameters.
    #[must_use]
    pub fn with_params(mut self, params: LabelParams) -> Self {
        self.dimensions = self.dimensions.with_params(params);
        self
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> LabelBox {
        let center = room_center(self.dimensions.room);
        LabelBox {
            center_x: center.x,
            center_y: center.y,
            layout: self.dimensions.execute(),
        }
    }
}
