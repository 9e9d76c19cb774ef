//! 棋盘布局文本
//!
//! 类似 FEN 的紧凑格式，从上到下逐行书写，行之间用 `/` 分隔：
//! `w` 白子，`b` 黑子，`.` 一个空格，数字表示连续的空格数。
//!
//! 示例（6x6 开局）：
//! `1b1b1b/b1b1b1/6/6/1w1w1w/w1w1w1`

use crate::board::Board;
use crate::error::{CheckersError, Result};
use crate::piece::{Cell, Position};

/// 布局文本处理
pub struct Layout;

impl Layout {
    /// 解析布局文本为棋盘，行数即棋盘边长
    pub fn parse(text: &str) -> Result<Board> {
        let rows: Vec<&str> = text.trim().split('/').map(str::trim).collect();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row_idx, row) in rows.iter().enumerate() {
            let parsed = Self::parse_row(row, row_idx, size)?;
            if parsed.len() != size {
                return Err(CheckersError::InvalidLayout {
                    reason: format!(
                        "row {} has {} columns, expected {}",
                        row_idx,
                        parsed.len(),
                        size
                    ),
                });
            }
            cells.extend(parsed);
        }

        Board::from_cells(cells)
    }

    /// 解析单行，超出 width 的空格数直接报错
    fn parse_row(row: &str, row_idx: usize, width: usize) -> Result<Vec<Cell>> {
        let mut cells = Vec::with_capacity(width);
        let mut empty_run = String::new();

        for c in row.chars() {
            if c.is_ascii_digit() {
                empty_run.push(c);
                continue;
            }
            Self::flush_empty_run(&mut empty_run, &mut cells, width, row_idx)?;

            match Cell::from_layout_char(c) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(CheckersError::InvalidLayout {
                        reason: format!("invalid character '{}' in row {}", c, row_idx),
                    })
                }
            }
        }
        Self::flush_empty_run(&mut empty_run, &mut cells, width, row_idx)?;

        Ok(cells)
    }

    fn flush_empty_run(
        run: &mut String,
        cells: &mut Vec<Cell>,
        width: usize,
        row_idx: usize,
    ) -> Result<()> {
        if run.is_empty() {
            return Ok(());
        }
        let count: usize = run.parse().map_err(|_| CheckersError::InvalidLayout {
            reason: format!("invalid empty run '{}'", run),
        })?;
        if count > width.saturating_sub(cells.len()) {
            return Err(CheckersError::InvalidLayout {
                reason: format!("empty run {} overflows row {}", count, row_idx),
            });
        }
        cells.extend(std::iter::repeat(Cell::Empty).take(count));
        run.clear();
        Ok(())
    }

    /// 将棋盘转换为布局文本（连续空格压缩为数字）
    pub fn to_string(board: &Board) -> String {
        let size = board.size();
        let mut rows = Vec::with_capacity(size);

        for row in 0..size {
            let mut text = String::new();
            let mut empty_count = 0;

            for col in 0..size {
                let cell = board.cell(Position::new(row as u8, col as u8));
                if cell.is_empty() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    text.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                text.push(cell.to_layout_char());
            }

            if empty_count > 0 {
                text.push_str(&empty_count.to_string());
            }
            rows.push(text);
        }

        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Side;

    #[test]
    fn test_initial_layout() {
        let board = Board::new(6).unwrap();
        assert_eq!(Layout::to_string(&board), "1b1b1b/b1b1b1/6/6/1w1w1w/w1w1w1");
    }

    #[test]
    fn test_parse_matches_initial_board() {
        let parsed = Layout::parse("1b1b1b/b1b1b1/6/6/1w1w1w/w1w1w1").unwrap();
        assert_eq!(parsed, Board::new(6).unwrap());
    }

    #[test]
    fn test_layout_roundtrip_ten() {
        let board = Board::new(10).unwrap();
        let text = Layout::to_string(&board);
        assert!(text.contains("/10/"));
        assert_eq!(Layout::parse(&text).unwrap(), board);
    }

    #[test]
    fn test_dots_and_digits_mix() {
        let board = Layout::parse("..b./4/1w../W...").unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell(Position::new(0, 2)), Cell::Black);
        assert_eq!(board.cell(Position::new(2, 1)), Cell::White);
        assert_eq!(board.cell(Position::new(3, 0)), Cell::White);
        assert_eq!(board.piece_count(Side::White), 2);
        assert_eq!(board.piece_count(Side::Black), 1);
    }

    #[test]
    fn test_invalid_layout() {
        // 列数不对
        assert!(matches!(
            Layout::parse("...../..../..../...."),
            Err(CheckersError::InvalidLayout { .. })
        ));

        // 无效字符
        assert!(matches!(
            Layout::parse("..x./..../..../...."),
            Err(CheckersError::InvalidLayout { .. })
        ));

        // 行数不是合法边长
        assert!(matches!(
            Layout::parse(".../.../..."),
            Err(CheckersError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_oversized_empty_run_is_rejected() {
        // 数字在展开前就按行宽检查
        assert!(matches!(
            Layout::parse("9999999999/..../..../...."),
            Err(CheckersError::InvalidLayout { .. })
        ));
        assert!(matches!(
            Layout::parse("b4/..../..../...."),
            Err(CheckersError::InvalidLayout { .. })
        ));

        let board = Layout::parse("b3/4/4/3w").unwrap();
        assert_eq!(board.size(), 4);
    }
}
