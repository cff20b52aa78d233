pub mod ai;
pub mod controller;
pub mod human;
pub mod random;

pub use ai::MinimaxAI;
pub use controller::{MoveRequest, PlayerController};
pub use human::{HumanController, MoveSource, ScriptedSource, StdinSource};
pub use random::RandomAI;
