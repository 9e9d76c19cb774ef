//! 阵营、格子与坐标定义

use serde::{Deserialize, Serialize};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 白方（先手，在下方，向行号减小的方向前进）
    White,
    /// 黑方（后手，在上方，向行号增大的方向前进）
    Black,
}

impl Side {
    /// 双方，白方在前
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// 前进方向上的行偏移
    pub fn forward(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// 评估符号：白方 +1，黑方 -1
    pub fn sign(&self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// 用作按阵营索引的数组下标
    pub(crate) fn index(&self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// 格子上棋子所属阵营
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Side::White),
            Cell::Black => Some(Side::Black),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 是否为指定阵营的棋子
    pub fn is(&self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// 布局字符：白 `w`，黑 `b`，空 `.`
    pub fn to_layout_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'w',
            Cell::Black => 'b',
        }
    }

    /// 从布局字符解析（大小写均可）
    pub fn from_layout_char(c: char) -> Option<Cell> {
        match c.to_ascii_lowercase() {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::White),
            'b' => Some(Cell::Black),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }
}

/// 棋盘坐标
///
/// 坐标本身不知道棋盘大小，越界检查由 [`crate::Board`] 负责。
/// 排序按行优先，走法枚举顺序依赖这一点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行（0 在上方）
    pub row: u8,
    /// 列
    pub col: u8,
}

impl Position {
    /// 创建新位置（不检查边界）
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在 size x size 棋盘内
    pub fn is_within(&self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// 获取偏移后的位置，越界时返回 None
    pub fn offset(&self, dr: i8, dc: i8, size: usize) -> Option<Position> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 是否为深色格（开局棋子只放在深色格上）
    pub fn is_dark(&self) -> bool {
        (self.row as u16 + self.col as u16) % 2 == 1
    }

    /// 转换为数组索引
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if index < size * size {
            Some(Position::new((index / size) as u8, (index % size) as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
    }

    #[test]
    fn test_side_direction_and_sign() {
        assert_eq!(Side::White.forward(), -1);
        assert_eq!(Side::Black.forward(), 1);
        assert_eq!(Side::White.sign(), 1);
        assert_eq!(Side::Black.sign(), -1);
    }

    #[test]
    fn test_cell_side() {
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::White.side(), Some(Side::White));
        assert_eq!(Cell::from(Side::Black), Cell::Black);
        assert!(Cell::Black.is(Side::Black));
        assert!(!Cell::Black.is(Side::White));
    }

    #[test]
    fn test_cell_layout_char() {
        for cell in [Cell::Empty, Cell::White, Cell::Black] {
            assert_eq!(Cell::from_layout_char(cell.to_layout_char()), Some(cell));
        }
        assert_eq!(Cell::from_layout_char('W'), Some(Cell::White));
        assert_eq!(Cell::from_layout_char('x'), None);
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.offset(1, 1, 8), Some(Position::new(1, 1)));
        assert_eq!(pos.offset(-1, 1, 8), None);
        assert_eq!(pos.offset(1, -1, 8), None);
        assert_eq!(Position::new(7, 7).offset(1, 0, 8), None);
        assert_eq!(Position::new(3, 3).offset(1, 1, 4), None);
    }

    #[test]
    fn test_position_index() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.to_index(6), 15);
        assert_eq!(Position::from_index(15, 6), Some(pos));
        assert_eq!(Position::from_index(36, 6), None);
    }

    #[test]
    fn test_position_order_is_row_major() {
        assert!(Position::new(0, 7) < Position::new(1, 0));
        assert!(Position::new(3, 1) < Position::new(3, 2));
    }

    #[test]
    fn test_is_dark_near_u8_limit() {
        assert!(Position::new(0, 1).is_dark());
        assert!(!Position::new(3, 3).is_dark());
        assert!(Position::new(255, 200).is_dark());
        assert!(!Position::new(255, 255).is_dark());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(5, 0).to_string(), "5,0");
    }
}
