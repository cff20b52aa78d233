pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod search;

pub use eval::Heuristic;
pub use evaluator::{Evaluator, Score};
pub use minimax::MinimaxAI;
pub use search::{select_move, SearchParams, SearchResult, Searcher, Selection};
