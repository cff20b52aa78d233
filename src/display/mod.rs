use crate::core::{Board, Side, BOARD_SIZE};
use crossterm::style::{StyledContent, Stylize};

/// 列ラベル行
pub const FILE_FOOTER: &str = "     A   B   C   D   E";

fn cell_text(board: &Board, row: usize, col: usize) -> String {
    let text = board.rows()[row][col]
        .map(|p| p.code())
        .unwrap_or_else(|| ".".to_string());
    format!("{:>3}", text)
}

fn rank_label(row: usize) -> usize {
    BOARD_SIZE - row
}

/// 盤面を装飾なしの行に変換する (ファイル出力用)
///
/// 各行は `5   bK  bQ ...` の形式で、最後に空行と列ラベルが付く。
pub fn board_lines(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 2);
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE).map(|col| cell_text(board, row, col)).collect();
        lines.push(format!("{}  {}", rank_label(row), cells.join(" ")));
    }
    lines.push(String::new());
    lines.push(FILE_FOOTER.to_string());
    lines
}

fn styled_cell(board: &Board, row: usize, col: usize) -> StyledContent<String> {
    let text = cell_text(board, row, col);
    match board.rows()[row][col] {
        Some(p) if p.owner == Side::White => text.cyan().bold(),
        Some(_) => text.magenta().bold(),
        None => text.dark_grey(),
    }
}

/// コンソール用 (駒を色付け)
pub fn board_lines_styled(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 2);
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| styled_cell(board, row, col).to_string())
            .collect();
        lines.push(format!("{}  {}", rank_label(row), cells.join(" ")));
    }
    lines.push(String::new());
    lines.push(FILE_FOOTER.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn initial_board_text() {
        let lines = board_lines(&GameState::new().board);
        assert_eq!(lines[0], "5   bK  bQ  bB  bN   .");
        assert_eq!(lines[1], "4    .   .  bp  bp   .");
        assert_eq!(lines[4], "1    .  wN  wB  wQ  wK");
        assert_eq!(lines[6], FILE_FOOTER);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn styled_lines_keep_rank_labels() {
        let lines = board_lines_styled(&GameState::new().board);
        assert!(lines[0].starts_with("5  "));
        assert!(lines[0].contains("bK"));
        assert_eq!(lines.last().map(String::as_str), Some(FILE_FOOTER));
    }
}
