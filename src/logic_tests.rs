#[cfg(test)]
mod tests {
    use crate::core::notation::{format, parse};
    use crate::core::setup::setup_from_strings;
    use crate::core::{GameState, Move, Piece, PieceKind, Side, Square};
    use crate::logic::{apply_move, is_legal, legal_moves, moves_for_side, perft, RulesError};

    fn state_from(rows: &[&str], turn: Side) -> GameState {
        GameState::with_board(setup_from_strings(rows).unwrap(), turn)
    }

    fn notations(moves: &[Move]) -> Vec<String> {
        moves.iter().map(format).collect()
    }

    fn moves_from(moves: &[Move], from: &str) -> Vec<String> {
        let from = parse(&format!("{from} A1")).unwrap().from;
        notations(
            &moves
                .iter()
                .filter(|m| m.from == from)
                .copied()
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_initial_position_moves() {
        let state = GameState::new();
        let moves = legal_moves(&state).unwrap();
        assert_eq!(
            notations(&moves),
            vec![
                "B2 B3", "C2 C3", "B1 A3", "B1 C3", "B1 D2", "C1 D2", "C1 E3", "D1 E2", "D1 D2",
                "D1 D3", "D1 D4", "E1 D2", "E1 E2",
            ]
        );
        // 黒も対称に 13 手
        assert_eq!(moves_for_side(&state, Side::Black).unwrap().len(), 13);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let state = GameState::new();
        assert_eq!(legal_moves(&state).unwrap(), legal_moves(&state).unwrap());
    }

    #[test]
    fn test_moves_stay_on_board_and_belong_to_mover() {
        let mut frontier = vec![GameState::new()];
        for _ in 0..3 {
            let mut next = Vec::new();
            for state in &frontier {
                for mv in legal_moves(state).unwrap() {
                    let piece = state.board.get_piece(mv.from).expect("origin holds a piece");
                    assert_eq!(piece.owner, state.turn);
                    assert!(mv.to.row < 5 && mv.to.col < 5);
                    if let Some(target) = state.board.get_piece(mv.to) {
                        assert_ne!(target.owner, state.turn, "{mv} captures own piece");
                    }
                    next.push(apply_move(state, &mv));
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn test_pawn_single_step_and_capture_only_diagonals() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". bN . . .",
                ". . wp . .",
                ". . . . wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        // 前進1マスと左斜めの取りのみ (右斜めは空きマス)
        assert_eq!(moves_from(&moves, "C2"), vec!["C2 C3", "C2 B3"]);
    }

    #[test]
    fn test_pawn_blocked_and_no_double_step() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . . . .",
                ". . bp . .",
                ". . wp . wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        assert!(moves_from(&moves, "C1").is_empty());

        // 黒ポーンは row 4 方向へ進む
        let black = state.with_turn(Side::Black);
        let moves = legal_moves(&black).unwrap();
        assert!(moves_from(&moves, "C2").is_empty());

        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . . . .",
                ". wp . . .",
                ". . . . wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        assert_eq!(moves_from(&moves, "B2"), vec!["B2 B3"]);
    }

    #[test]
    fn test_bishop_slides_stop_at_blockers() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . wB . .",
                ". wp . bp .",
                ". . . . wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        assert_eq!(
            notations(&moves),
            vec!["C3 B4", "C3 A5", "C3 D4", "C3 E5", "C3 D2", "B2 B3", "E1 D2", "E1 E2", "E1 D1"]
        );
    }

    #[test]
    fn test_queen_covers_lines_from_center() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . wQ . .",
                ". . . . .",
                ". . . . wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        assert_eq!(moves_from(&moves, "C3").len(), 15);
        assert_eq!(moves.len(), 18);
    }

    #[test]
    fn test_knight_offsets() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . wN . .",
                ". . . . .",
                ". . . . wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        assert_eq!(
            moves_from(&moves, "C3"),
            vec!["C3 B5", "C3 D5", "C3 A4", "C3 E4", "C3 A2", "C3 E2", "C3 B1", "C3 D1"]
        );
    }

    #[test]
    fn test_king_cannot_take_own_piece() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . . . .",
                ". . . wp bp",
                ". . . wN wK",
            ],
            Side::White,
        );
        let moves = legal_moves(&state).unwrap();
        assert_eq!(moves_from(&moves, "E1"), vec!["E1 E2"]);
    }

    #[test]
    fn test_promoted_queen_moves_immediately() {
        let state = state_from(
            &[
                ". . . . .",
                "wp . . . .",
                ". . . . bK",
                ". . . . .",
                ". . . . wK",
            ],
            Side::White,
        );
        let mut state = apply_move(&state, &parse("A4 A5").unwrap());
        assert_eq!(
            state.board.get_piece(Square::new(0, 0)),
            Some(&Piece::new(PieceKind::Queen, Side::White))
        );
        // 黒が一手指した後、クイーンとして動ける
        state.apply_move(parse("E3 E4").unwrap());
        let moves = legal_moves(&state).unwrap();
        let queen = moves_from(&moves, "A5");
        for target in ["B4", "C3", "D2", "E1"] {
            let expected = format!("A5 {target}");
            if target == "E1" {
                // 自駒の手前で止まる
                assert!(!queen.contains(&expected));
            } else {
                assert!(queen.contains(&expected), "missing {expected}");
            }
        }
        for target in ["A4", "A3", "A2", "A1", "B5", "C5", "D5", "E5"] {
            assert!(queen.contains(&format!("A5 {target}")), "missing A5 {target}");
        }
    }

    #[test]
    fn test_turn_flips_once_per_move() {
        let state = GameState::new();
        let next = apply_move(&state, &parse("B2 B3").unwrap());
        assert_eq!(next.turn, Side::Black);
        for mv in legal_moves(&next).unwrap() {
            assert_eq!(next.board.get_piece(mv.from).unwrap().owner, Side::Black);
        }
        let after = apply_move(&next, &legal_moves(&next).unwrap()[0]);
        assert_eq!(after.turn, Side::White);
    }

    #[test]
    fn test_is_legal() {
        let state = GameState::new();
        assert!(is_legal(&state, &parse("B2 B3").unwrap()).unwrap());
        assert!(!is_legal(&state, &parse("B2 B4").unwrap()).unwrap());
        assert!(!is_legal(&state, &parse("A5 A4").unwrap()).unwrap());
    }

    #[test]
    fn test_unsupported_piece_is_fatal() {
        let state = state_from(
            &[
                "bK . . . .",
                ". . . . .",
                ". . wR . .",
                ". . . . .",
                ". . . . wK",
            ],
            Side::White,
        );
        assert_eq!(
            legal_moves(&state),
            Err(RulesError::UnsupportedPiece {
                square: Square::new(2, 2),
                kind: PieceKind::Rook,
            })
        );
        // 相手側の駒でも、その側を走査すれば検出される
        let black = state.with_turn(Side::Black);
        assert!(legal_moves(&black).is_ok());
        assert!(moves_for_side(&black, Side::White).is_err());
    }

    #[test]
    fn test_perft_initial_position() {
        let state = GameState::new();
        assert_eq!(perft(&state, 0).unwrap(), 1);
        assert_eq!(perft(&state, 1).unwrap(), 13);
        assert_eq!(perft(&state, 2).unwrap(), 170);
        assert_eq!(perft(&state, 3).unwrap(), 2452);
    }
}
