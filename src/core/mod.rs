pub mod board;
pub mod r#move;
pub mod notation;
pub mod piece;
pub mod setup;
pub mod state;
pub mod types;

pub use board::Board;
pub use piece::{MoveStep, Piece, PieceKind};
pub use r#move::Move;
pub use setup::{setup_from_strings, SetupError};
pub use state::{GameState, MoveEffect, Outcome};
pub use types::{Side, Square, BOARD_SIZE};
