//! Geometry types in board coordinates

mod dimensions;
mod position;
mod rect;

pub use dimensions::Dimensions;
pub use position::Position;
pub use rect::Rect;
