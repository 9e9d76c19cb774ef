//! 文本棋盘渲染

use std::fmt::Write;

use checkers_core::{Board, Cell, Position, Side};

/// 渲染棋盘：列号在上，行号在左，`W`/`B`/`.` 表示格子，最后一行为双方子数
pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str("  ");
    for col in 0..size {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{:>2}", row);
        for col in 0..size {
            let symbol = match board.cell(Position::new(row as u8, col as u8)) {
                Cell::Empty => '.',
                Cell::White => 'W',
                Cell::Black => 'B',
            };
            let _ = write!(out, " {}", symbol);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "White: {}  Black: {}",
        board.piece_count(Side::White),
        board.piece_count(Side::Black)
    );
    out
}
