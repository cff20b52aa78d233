use mini_chess::core::notation::format;
use mini_chess::core::GameState;
use mini_chess::player::ai::{select_move, Heuristic, SearchParams, Selection};
use std::time::Duration;

fn params(depth: u32, alpha_beta: bool) -> SearchParams {
    SearchParams {
        depth,
        time_limit: Duration::from_secs(120),
        alpha_beta,
        max_turns: 100,
    }
}

/// 初期局面での選択手と評価値 (深さ 1..=3)
#[test]
fn initial_position_choices() {
    let expected = [
        (Heuristic::Material, [("D1 D4", 1.0), ("B2 B3", -1.0), ("C2 C3", 1.0)]),
        (Heuristic::Mobility, [("D1 D3", 7.0), ("D1 D3", -3.0), ("B2 B3", 5.0)]),
        (Heuristic::Blended, [("D1 D4", 3.1), ("D1 E2", -2.2), ("B2 B3", 3.1)]),
    ];
    let state = GameState::new();

    for (heuristic, per_depth) in expected {
        for (i, (mv, score)) in per_depth.iter().enumerate() {
            let depth = i as u32 + 1;
            for alpha_beta in [false, true] {
                let result = select_move(&state, &heuristic, params(depth, alpha_beta)).unwrap();
                match result.selection {
                    Selection::Move { mv: chosen, score: s, depth: d } => {
                        assert_eq!(format(&chosen), *mv, "{heuristic} depth {depth}");
                        assert!((s - score).abs() < 1e-9, "{heuristic} depth {depth}: {s}");
                        assert_eq!(d, depth);
                    }
                    other => panic!("unexpected {other:?}"),
                }
                assert_eq!(result.completed_depth, depth);
                assert!(!result.timed_out);
            }
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let state = GameState::new();
    let plain = select_move(&state, &Heuristic::Material, params(3, false)).unwrap();
    let pruned = select_move(&state, &Heuristic::Material, params(3, true)).unwrap();
    assert_eq!(plain.selection.best_move(), pruned.selection.best_move());
    assert!(pruned.nodes < plain.nodes);
}

#[test]
fn deadline_cuts_deep_search_short() {
    let state = GameState::new();
    let mut p = params(30, true);
    p.time_limit = Duration::from_millis(200);
    let result = select_move(&state, &Heuristic::Blended, p).unwrap();
    assert!(result.timed_out);
    assert!(result.completed_depth < 30);
    // 少なくとも深さ1は読み切れているはず
    assert!(result.selection.best_move().is_some());
    assert!(result.elapsed < Duration::from_secs(5));
}
