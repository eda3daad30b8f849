pub mod label;
pub mod outline;
mod render;
mod validate;

pub use label::{
    room_center, LabelBox, LabelContent, LabelParams, RoomBounds, RoomLabel, TextDimensions,
    TextLayout,
};
pub use outline::{
    shape_outline, shares_edge, shares_edge_within, OutlineParams, RoomOutline, SharedSegments,
};
pub use render::{RenderCache, RenderFloor, RoomRender};
pub use validate::ValidateRoom;
