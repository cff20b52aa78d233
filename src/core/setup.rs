use crate::core::{Board, Piece, Square, BOARD_SIZE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("layout must have {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} must have {expected} cells, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized piece {token:?} at row {row}, column {col}")]
    UnknownPiece {
        row: usize,
        col: usize,
        token: String,
    },
}

/// 文字列配列から盤面を初期化する
///
/// 各行は空白区切りで、`.` が空きマス、`wK` / `bp` のように
/// 手番側の接頭辞と駒の文字を並べる。
pub fn setup_from_strings<S: AsRef<str>>(setup: &[S]) -> Result<Board, SetupError> {
    if setup.len() != BOARD_SIZE {
        return Err(SetupError::RowCount {
            expected: BOARD_SIZE,
            found: setup.len(),
        });
    }

    let mut board = Board::new();
    for (row, line) in setup.iter().enumerate() {
        let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(SetupError::ColumnCount {
                row,
                expected: BOARD_SIZE,
                found: tokens.len(),
            });
        }
        for (col, token) in tokens.into_iter().enumerate() {
            if token == "." {
                continue;
            }
            let piece = Piece::from_code(token).ok_or_else(|| SetupError::UnknownPiece {
                row,
                col,
                token: token.to_string(),
            })?;
            board.place_piece(Square::new(row, col), piece);
        }
    }
    Ok(board)
}

/// 改行区切りのテキストから盤面を読み込む (空行は無視)
pub fn setup_from_text(text: &str) -> Result<Board, SetupError> {
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    setup_from_strings(&rows)
}

/// 盤面を `setup_from_strings` が読める形式へ戻す
pub fn layout_strings(board: &Board) -> Vec<String> {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map(|p| p.code()).unwrap_or_else(|| ".".to_string()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn standard_setup() -> Vec<&'static str> {
    vec![
        "bK bQ bB bN .", // 後手
        ". . bp bp .",
        ". . . . .",
        ". wp wp . .",
        ". wN wB wQ wK", // 先手
    ]
}
