pub mod config;
pub mod core;
pub mod display;
pub mod game;
pub mod logic;
#[cfg(test)]
mod logic_tests;
pub mod player;
pub mod selfplay;
