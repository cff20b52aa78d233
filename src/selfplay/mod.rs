use crate::config::{GameConfig, PlayerKind};
use crate::core::{GameState, Outcome};
use crate::game::{EndReason, Game, GameRecord, GameResult, RecordSettings, Transcript};
use crate::player::{MinimaxAI, PlayerController, RandomAI};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub game: GameConfig,
    /// 初期局面 (省略時は標準配置)
    pub initial: Option<GameState>,
    /// 棋譜の保存先ディレクトリ
    pub save_records: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayGame {
    pub index: usize,
    pub result: GameResult,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub forfeits: usize,
    pub avg_plies: f64,
    pub avg_time_ms: f64,
    pub white: String,
    pub black: String,
    pub games: Vec<SelfPlayGame>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, game: SelfPlayGame) {
        self.total_games += 1;
        match game.result.outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw | Outcome::InProgress => self.draws += 1,
        }
        if game.result.reason == EndReason::Forfeit {
            self.forfeits += 1;
        }
        self.games.push(game);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_plies: u64 = self.games.iter().map(|g| g.result.plies as u64).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_plies = total_plies as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn summary(&self) -> Vec<String> {
        let pct = |n: usize| {
            if self.total_games == 0 {
                0.0
            } else {
                n as f64 / self.total_games as f64 * 100.0
            }
        };
        vec![
            format!("=== Self-Play: {} (White) vs {} (Black) ===", self.white, self.black),
            format!("Games: {}", self.total_games),
            format!("White Wins: {} ({:.1}%)", self.white_wins, pct(self.white_wins)),
            format!("Black Wins: {} ({:.1}%)", self.black_wins, pct(self.black_wins)),
            format!("Draws: {} ({:.1}%)", self.draws, pct(self.draws)),
            format!("Forfeits: {}", self.forfeits),
            format!("Avg Plies: {:.1}", self.avg_plies),
            format!("Avg Time: {:.1}s", self.avg_time_ms / 1000.0),
        ]
    }
}

fn make_player(kind: PlayerKind, name: &str, config: &GameConfig) -> Box<dyn PlayerController> {
    match kind {
        PlayerKind::Random => Box::new(RandomAI::new(name)),
        // 自己対局に人間は参加できないので AI に置き換える
        PlayerKind::Ai | PlayerKind::Human => Box::new(MinimaxAI::new(
            name,
            config.search_params(),
            config.heuristic,
        )),
    }
}

fn player_label(kind: PlayerKind, config: &GameConfig) -> String {
    match kind {
        PlayerKind::Random => "Random".to_string(),
        PlayerKind::Ai | PlayerKind::Human => format!("Minimax {}", config.heuristic),
    }
}

fn run_one(config: &SelfPlayConfig, index: usize) -> anyhow::Result<SelfPlayGame> {
    let start_time = Instant::now();
    let white_name = format!("{}-W", player_label(config.game.white, &config.game));
    let black_name = format!("{}-B", player_label(config.game.black, &config.game));
    let white = make_player(config.game.white, &white_name, &config.game);
    let black = make_player(config.game.black, &black_name, &config.game);

    let initial = config.initial.clone().unwrap_or_default();
    let mut game = Game::new(initial, config.game.max_turns).with_transcript(Transcript::silent());
    let result = game.play(white.as_ref(), black.as_ref())?;

    if let Some(dir) = &config.save_records {
        let record = GameRecord::from_game(
            &game,
            &white_name,
            &black_name,
            RecordSettings {
                time_limit_secs: config.game.time_limit_secs,
                max_turns: config.game.max_turns,
                alpha_beta: config.game.alpha_beta,
                depth: config.game.depth,
                heuristic: config.game.heuristic,
            },
            result,
        );
        let filename = format!(
            "game_{:04}_{}.json",
            index,
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        record.save(dir.join(filename))?;
    }

    let elapsed = start_time.elapsed();
    info!(
        "game {} finished: {} ({}) in {} plies, {:.1}s",
        index,
        result.outcome,
        result.reason,
        result.plies,
        elapsed.as_secs_f64()
    );

    Ok(SelfPlayGame {
        index,
        result,
        time_ms: elapsed.as_millis(),
    })
}

/// 自己対局を並列に実行する
///
/// 各対局は状態を共有しないので、ゲーム単位で rayon に分配する。
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    config.game.validate()?;
    info!("starting {} self-play games", config.num_games);

    let games: Vec<SelfPlayGame> = (1..=config.num_games)
        .into_par_iter()
        .map(|index| run_one(config, index))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stats = SelfPlayStats::new();
    stats.white = player_label(config.game.white, &config.game);
    stats.black = player_label(config.game.black, &config.game);
    for game in games {
        stats.add_result(game);
    }
    Ok(stats)
}
