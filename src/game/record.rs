use super::{Game, GameResult};
use crate::core::notation::parse;
use crate::core::setup::{layout_strings, setup_from_strings};
use crate::core::{GameState, Side};
use crate::logic::is_legal;
use crate::player::ai::Heuristic;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 対局時の設定 (棋譜に残す分)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSettings {
    pub time_limit_secs: f64,
    pub max_turns: u32,
    pub alpha_beta: bool,
    pub depth: u32,
    pub heuristic: Heuristic,
}

/// 棋譜 (JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// 初期配置 ("bK bQ bB bN ." 形式)
    pub layout: Vec<String>,
    pub first_turn: Side,
    pub white: String,
    pub black: String,
    pub settings: RecordSettings,
    pub moves: Vec<String>,
    pub result: GameResult,
    pub timestamp: String,
}

impl GameRecord {
    pub fn from_game(
        game: &Game,
        white: &str,
        black: &str,
        settings: RecordSettings,
        result: GameResult,
    ) -> Self {
        GameRecord {
            layout: layout_strings(&game.initial.board),
            first_turn: game.initial.turn,
            white: white.to_string(),
            black: black.to_string(),
            settings,
            moves: game.moves_played(),
            result,
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create record {}", path.display()))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open record {}", path.display()))?;
        let record = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(record)
    }

    /// 初期局面から全ての局面を再構築する (先頭は初期局面)
    pub fn replay(&self) -> anyhow::Result<Vec<GameState>> {
        let board = setup_from_strings(&self.layout)?;
        let mut state = GameState::with_board(board, self.first_turn);
        let mut states = vec![state.clone()];

        for (i, text) in self.moves.iter().enumerate() {
            let mv = match parse(text) {
                Some(mv) => mv,
                None => bail!("move {} is malformed: {:?}", i + 1, text),
            };
            if !is_legal(&state, &mv)? {
                bail!("move {} is illegal: {}", i + 1, text);
            }
            state.apply_move(mv);
            states.push(state.clone());
        }
        Ok(states)
    }
}
