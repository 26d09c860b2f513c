mod board;
mod position;
mod termination;

pub use board::{has_insufficient_material, is_capture, side_has_insufficient_material};
pub use position::{Applied, Position, PositionError};
pub use termination::Termination;
