use anyhow::Context;
use clap::{Parser, Subcommand};
use log::error;
use mini_chess::config::{GameConfig, PlayerKind};
use mini_chess::core::setup::setup_from_text;
use mini_chess::core::{GameState, Side};
use mini_chess::game::{Game, GameRecord, RecordSettings, Transcript};
use mini_chess::player::ai::Heuristic;
use mini_chess::player::{HumanController, MinimaxAI, PlayerController, RandomAI, StdinSource};
use mini_chess::selfplay::{run_selfplay, SelfPlayConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mini-chess", about = "5x5 Mini Chess with minimax / alpha-beta AI")]
struct Cli {
    /// Config file (defaults to ./minichess.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Seconds per AI move
    #[arg(long, global = true)]
    time_limit: Option<f64>,
    /// Plies without capture before a draw
    #[arg(long, global = true)]
    max_turns: Option<u32>,
    /// Enable or disable alpha-beta pruning
    #[arg(long, global = true)]
    alpha_beta: Option<bool>,
    /// Search depth budget
    #[arg(long, global = true)]
    depth: Option<u32>,
    #[arg(long, value_enum, global = true)]
    heuristic: Option<Heuristic>,
    #[arg(long, value_enum, global = true)]
    white: Option<PlayerKind>,
    #[arg(long, value_enum, global = true)]
    black: Option<PlayerKind>,
    /// Board layout file
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game (default)
    Play {
        /// Transcript file
        #[arg(long)]
        transcript: Option<PathBuf>,
        /// Save the game record as JSON
        #[arg(long)]
        record: Option<PathBuf>,
    },
    /// Run automated games in parallel
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        /// Directory to save game records into
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

impl Cli {
    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(v) = self.time_limit {
            config.time_limit_secs = v;
        }
        if let Some(v) = self.max_turns {
            config.max_turns = v;
        }
        if let Some(v) = self.alpha_beta {
            config.alpha_beta = v;
        }
        if let Some(v) = self.depth {
            config.depth = v;
        }
        if let Some(v) = self.heuristic {
            config.heuristic = v;
        }
        if let Some(v) = self.white {
            config.white = v;
        }
        if let Some(v) = self.black {
            config.black = v;
        }
        if let Some(v) = &self.layout {
            config.layout = Some(v.clone());
        }
        if let Some(Command::Play { transcript, record }) = &self.command {
            if let Some(v) = transcript {
                config.transcript = Some(v.clone());
            }
            if let Some(v) = record {
                config.record = Some(v.clone());
            }
        }
    }
}

fn initial_state(config: &GameConfig) -> anyhow::Result<GameState> {
    match &config.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            let board = setup_from_text(&text)
                .with_context(|| format!("invalid layout {}", path.display()))?;
            Ok(GameState::with_board(board, Side::White))
        }
        None => Ok(GameState::new()),
    }
}

fn make_player(kind: PlayerKind, side: Side, config: &GameConfig) -> Box<dyn PlayerController> {
    match kind {
        PlayerKind::Human => Box::new(HumanController::new(&side.to_string(), StdinSource)),
        PlayerKind::Ai => Box::new(MinimaxAI::new(
            &format!("AI ({})", side),
            config.search_params(),
            config.heuristic,
        )),
        PlayerKind::Random => Box::new(RandomAI::new(&format!("Random ({})", side))),
    }
}

fn run_game(config: &GameConfig) -> anyhow::Result<()> {
    let state = initial_state(config)?;
    let white = make_player(config.white, Side::White, config);
    let black = make_player(config.black, Side::Black, config);

    println!("Welcome to Mini Chess! Enter moves as 'B2 B3'. Type 'exit' to quit.");
    let mut game = Game::new(state, config.max_turns).with_transcript(Transcript::new());
    game.transcript.log(format!(
        "Time limit: {}s | Max plies without capture: {} | Alpha-beta: {} | White: {} | Black: {}",
        config.time_limit_secs, config.max_turns, config.alpha_beta, config.white, config.black
    ));
    if config.white == PlayerKind::Ai || config.black == PlayerKind::Ai {
        game.transcript
            .log(format!("Heuristic: {} | Depth: {}", config.heuristic, config.depth));
    }

    let played = game.play(white.as_ref(), black.as_ref());

    // 盤面破損で止まった場合も記録は残す
    if let Err(e) = &played {
        game.transcript.log(format!("Error: {:#}", e));
    }
    if let Some(path) = &config.transcript {
        game.transcript.save(path)?;
    }
    let result = played?;

    if let Some(path) = &config.record {
        let record = GameRecord::from_game(
            &game,
            white.name(),
            black.name(),
            RecordSettings {
                time_limit_secs: config.time_limit_secs,
                max_turns: config.max_turns,
                alpha_beta: config.alpha_beta,
                depth: config.depth,
                heuristic: config.heuristic,
            },
            result,
        );
        record.save(path)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    match &cli.command {
        Some(Command::Selfplay { games, save }) => {
            let selfplay = SelfPlayConfig {
                num_games: *games,
                initial: Some(initial_state(&config)?),
                game: config,
                save_records: save.clone(),
            };
            let stats = run_selfplay(&selfplay)?;
            for line in stats.summary() {
                println!("{}", line);
            }
            Ok(())
        }
        Some(Command::Play { .. }) | None => run_game(&config),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let res = run(&cli);
    if let Err(e) = &res {
        error!("{:#}", e);
    }
    res
}
