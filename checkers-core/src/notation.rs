//! 坐标记法
//!
//! 人工输入使用 `行,列` 的形式，行列各为一位数字，例如 `5,0`。
//! 一步走法写作起点和终点，用空白或 `-`、`>` 分隔，例如 `5,0 4,1`。

use crate::error::{CheckersError, Result};
use crate::moves::Move;
use crate::piece::Position;

/// 坐标记法
pub struct Notation;

impl Notation {
    /// 解析 `行,列`
    pub fn parse_position(input: &str) -> Result<Position> {
        let trimmed = input.trim();
        let invalid = |reason: &str| CheckersError::InvalidNotation {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| invalid("expected 'row,col'"))?;

        let row = Self::parse_digit(row.trim()).ok_or_else(|| invalid("row must be a single digit"))?;
        let col = Self::parse_digit(col.trim()).ok_or_else(|| invalid("column must be a single digit"))?;

        Ok(Position::new(row, col))
    }

    /// 解析 `行,列 行,列`
    pub fn parse_move(input: &str) -> Result<Move> {
        let parts: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == '-' || c == '>')
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [from, to] => Ok(Move::new(
                Self::parse_position(from)?,
                Self::parse_position(to)?,
            )),
            _ => Err(CheckersError::InvalidNotation {
                input: input.to_string(),
                reason: "expected 'row,col row,col'".to_string(),
            }),
        }
    }

    fn parse_digit(s: &str) -> Option<u8> {
        let mut chars = s.chars();
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() {
            return None;
        }
        Some(digit as u8)
    }
}
