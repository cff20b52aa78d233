pub mod record;
pub mod transcript;

use crate::core::notation::{format, parse};
use crate::core::{GameState, Move, Outcome, Side};
use crate::display::{board_lines, board_lines_styled};
use crate::logic::legal_moves;
use crate::player::{MoveRequest, PlayerController};
use anyhow::Context;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use record::{GameRecord, RecordSettings};
pub use transcript::Transcript;

/// 対局が終わった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    KingCaptured,
    /// 駒取りなしの手数が上限に達した
    NoProgress,
    NoLegalMoves,
    /// AI が不正な手を返した
    Forfeit,
    Exit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            EndReason::KingCaptured => "king captured",
            EndReason::NoProgress => "no capture limit reached",
            EndReason::NoLegalMoves => "no legal moves",
            EndReason::Forfeit => "forfeit",
            EndReason::Exit => "exited",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub reason: EndReason,
    /// 指された手数 (ply)
    pub plies: u32,
}

/// "1 ply" / "2 plies"
fn plies_text(plies: u32) -> String {
    if plies == 1 {
        "1 ply".to_string()
    } else {
        format!("{} plies", plies)
    }
}

pub struct Game {
    pub state: GameState,
    pub initial: GameState,
    pub max_turns: u32,
    pub history: Vec<Move>,
    pub transcript: Transcript,
}

impl Game {
    pub fn new(state: GameState, max_turns: u32) -> Self {
        Game {
            initial: state.clone(),
            state,
            max_turns,
            history: Vec::new(),
            transcript: Transcript::new(),
        }
    }

    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = transcript;
        self
    }

    fn display_board(&mut self) {
        let plain = board_lines(&self.state.board);
        let styled = board_lines_styled(&self.state.board);
        self.transcript.log("");
        for (console, file) in styled.into_iter().zip(plain) {
            self.transcript.log_split(console, file);
        }
        self.transcript.log("");
    }

    fn finish(&mut self, outcome: Outcome, reason: EndReason) -> GameResult {
        self.state.outcome = outcome;
        let result = GameResult {
            outcome,
            reason,
            plies: self.state.turn_counter,
        };
        info!(
            "game over: {} ({}) after {} plies",
            result.outcome, result.reason, result.plies
        );
        result
    }

    /// 対局ループ
    ///
    /// 盤面破損 (`RulesError`) はエラーとして返す。それ以外の終わり方は `GameResult`。
    pub fn play(
        &mut self,
        white: &dyn PlayerController,
        black: &dyn PlayerController,
    ) -> anyhow::Result<GameResult> {
        info!("game start: {} (White) vs {} (Black)", white.name(), black.name());

        loop {
            self.display_board();

            // 終局判定
            let outcome = self.state.check_end(self.max_turns);
            if outcome.is_over() {
                let plies = plies_text(self.state.turn_counter);
                self.transcript.log(format!("{} after {}", outcome, plies));
                let reason = if outcome == Outcome::Draw {
                    EndReason::NoProgress
                } else {
                    EndReason::KingCaptured
                };
                return Ok(self.finish(outcome, reason));
            }

            let side = self.state.turn;
            let controller = match side {
                Side::White => white,
                Side::Black => black,
            };

            let moves = legal_moves(&self.state).map_err(|e| {
                error!("{}", e);
                e
            })?;
            if moves.is_empty() {
                let winner = side.opponent();
                self.transcript
                    .log(format!("{} has no legal moves. {} wins.", side, winner));
                return Ok(self.finish(Outcome::win_for(winner), EndReason::NoLegalMoves));
            }

            self.transcript
                .log(format!("Turn #{}", self.state.full_move_number()));

            let request = controller
                .choose_move(&self.state)
                .with_context(|| format!("{} failed to choose a move", controller.name()))
                .map_err(|e| {
                    error!("{:#}", e);
                    e
                })?;

            let text = match request {
                MoveRequest::Exit => {
                    self.transcript.log("Game exited.");
                    let result = GameResult {
                        outcome: Outcome::InProgress,
                        reason: EndReason::Exit,
                        plies: self.state.turn_counter,
                    };
                    info!("game exited by {} after {} plies", controller.name(), result.plies);
                    return Ok(result);
                }
                MoveRequest::NoMove => {
                    // 合法手があるのに指さなかった
                    let winner = side.opponent();
                    warn!("{} returned no move", controller.name());
                    self.transcript
                        .log(format!("{} returned no move. {} wins.", side, winner));
                    return Ok(self.finish(Outcome::win_for(winner), EndReason::Forfeit));
                }
                MoveRequest::Notation(text) => text,
            };

            self.transcript
                .log_to(format!("{} played {}", side, text), transcript::FILE);

            let mv = match parse(&text) {
                Some(mv) if moves.contains(&mv) => mv,
                _ => {
                    if controller.is_human() {
                        self.transcript.log("Invalid move. Try again.");
                        continue;
                    }
                    let winner = side.opponent();
                    warn!("{} played an invalid move: {}", controller.name(), text);
                    self.transcript.log(format!(
                        "{} played an invalid move ({}). {} wins.",
                        side, text, winner
                    ));
                    return Ok(self.finish(Outcome::win_for(winner), EndReason::Forfeit));
                }
            };

            if !controller.is_human() {
                self.transcript
                    .log_to(format!("{} to move: {}", side, format(&mv)), transcript::CONSOLE);
            }

            if let Some(effect) = self.state.apply_move(mv) {
                if let Some(captured) = effect.captured {
                    self.transcript
                        .log(format!("{} captured {}", side, captured));
                }
                if effect.promoted {
                    self.transcript.log(format!("{} promoted to queen", side));
                }
            }
            self.history.push(mv);
        }
    }

    pub fn moves_played(&self) -> Vec<String> {
        self.history.iter().map(format).collect()
    }
}
