use anyhow::Context;
use mini_chess::core::setup::setup_from_text;
use mini_chess::core::{GameState, Side};
use mini_chess::logic::{apply_move, legal_moves, perft};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for Mini Chess")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Layout file (defaults to the standard position)
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Side to move
    #[arg(long, value_enum, default_value = "white")]
    turn: Side,
    /// Print node counts per root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Split root moves across threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    let args = Args::parse();

    let turn = args.turn;
    let state = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            GameState::with_board(setup_from_text(&text)?, turn)
        }
        None => GameState::new().with_turn(turn),
    };

    let t0 = Instant::now();
    let nodes = if args.divide || args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads.max(1))
            .build()?;
        let root_moves = legal_moves(&state)?;
        let per_move = pool.install(|| {
            root_moves
                .par_iter()
                .map(|mv| {
                    let child = apply_move(&state, mv);
                    perft(&child, args.depth.saturating_sub(1)).map(|n| (*mv, n))
                })
                .collect::<Result<Vec<_>, _>>()
        })?;
        if args.divide {
            for (mv, n) in &per_move {
                println!("{}: {}", mv, n);
            }
        }
        if args.depth == 0 {
            1
        } else {
            per_move.iter().map(|(_, n)| n).sum()
        }
    } else {
        perft(&state, args.depth)?
    };
    let dt = t0.elapsed().as_secs_f64();
    let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
    println!("nodes: {} elapsed: {:.3}s nps: {:.1}", nodes, dt, nps);
    Ok(())
}
