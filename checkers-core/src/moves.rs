//! 走法定义与生成

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::{Position, Side};

/// 某一方的合法走法表：起点 -> 按顺序排列的终点（无走法的起点不出现）
pub type LegalMoves = BTreeMap<Position, Vec<Position>>;

/// 走法类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// 斜走一格
    Simple,
    /// 斜跳两格，吃掉中间的对方棋子
    Capture,
}

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// 根据斜向距离判断走法类型
    pub fn kind(&self) -> MoveKind {
        let dr = (self.to.row as i16 - self.from.row as i16).abs();
        let dc = (self.to.col as i16 - self.from.col as i16).abs();
        if dr == 2 && dc == 2 {
            MoveKind::Capture
        } else {
            MoveKind::Simple
        }
    }

    pub fn is_capture(&self) -> bool {
        self.kind() == MoveKind::Capture
    }

    /// 吃子走法中被跳过的格子
    pub fn midpoint(&self) -> Option<Position> {
        match self.kind() {
            MoveKind::Capture => Some(Position::new(
                self.from.row.min(self.to.row) + 1,
                self.from.col.min(self.to.col) + 1,
            )),
            MoveKind::Simple => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定阵营的合法走法表
    pub fn generate(board: &Board, side: Side) -> LegalMoves {
        let mut moves = LegalMoves::new();

        for from in board.positions_of(side) {
            let destinations = Self::generate_piece_moves(board, from, side);
            if !destinations.is_empty() {
                moves.insert(from, destinations);
            }
        }

        moves
    }

    /// 生成单个棋子的终点（先左后右）
    fn generate_piece_moves(board: &Board, from: Position, side: Side) -> Vec<Position> {
        let size = board.size();
        let forward = side.forward();
        let mut destinations = Vec::with_capacity(2);

        for dc in [-1i8, 1i8] {
            let Some(neighbour) = from.offset(forward, dc, size) else {
                continue;
            };

            match board.cell(neighbour).side() {
                None => destinations.push(neighbour),
                Some(owner) if owner != side => {
                    // 沿同一条斜线再走一格，落点必须为空
                    if let Some(landing) = neighbour.offset(forward, dc, size) {
                        if board.cell(landing).is_empty() {
                            destinations.push(landing);
                        }
                    }
                }
                Some(_) => {}
            }
        }

        destinations
    }

    /// 将走法表展开为走法列表（按起点行优先，再按先左后右）
    pub fn flatten(moves: &LegalMoves) -> Vec<Move> {
        moves
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| Move::new(*from, *to)))
            .collect()
    }
}
