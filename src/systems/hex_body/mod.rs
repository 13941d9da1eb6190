//! HexBody - a rotating hexagon that moves as a unit
//!
//! The body stores center, radius and rotation; the six world vertices are
//! derived from those and refreshed whenever they change.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::HexBody;
