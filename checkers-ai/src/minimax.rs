//! MinMax 搜索
//!
//! 白方取最大值，黑方取最小值。搜索过程中在同一块棋盘上走子再撤销，
//! 返回时棋盘与传入时完全一致。

use checkers_core::{Board, Result, Side};

use crate::evaluate::Evaluator;

/// MinMax 搜索器
#[derive(Debug, Clone)]
pub struct MinMax {
    depth: u8,
    nodes_searched: u64,
}

impl MinMax {
    /// 创建指定深度的搜索器
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            nodes_searched: 0,
        }
    }

    /// 评估当前局面，side 为当前走子方
    pub fn evaluate(&mut self, board: &mut Board, side: Side) -> Result<i32> {
        self.nodes_searched = 0;
        self.minimax(board, side, self.depth)
    }

    /// 上一次 evaluate 访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn minimax(&mut self, board: &mut Board, side: Side, depth: u8) -> Result<i32> {
        self.nodes_searched += 1;

        if depth == 0 || board.outcome().is_over() {
            return Ok(Evaluator::evaluate(board));
        }

        let moves = board.moves(side);
        // 无子可动：返回静态评估而不是胜负分
        if moves.is_empty() {
            return Ok(Evaluator::evaluate(board));
        }

        let mut best = match side {
            Side::White => i32::MIN,
            Side::Black => i32::MAX,
        };

        for mv in moves {
            board.apply(mv)?;
            let score = self.minimax(board, side.opponent(), depth - 1);
            board.undo(mv)?;
            let score = score?;

            best = match side {
                Side::White => best.max(score),
                Side::Black => best.min(score),
            };
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Layout;

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let mut board = Layout::parse("...b/..../w.w./.w..").unwrap();
        let before = board.clone();

        let mut search = MinMax::new(0);
        assert_eq!(search.evaluate(&mut board, Side::White).unwrap(), 2);
        assert_eq!(search.evaluate(&mut board, Side::Black).unwrap(), 2);
        assert_eq!(search.nodes_searched(), 1);
        assert_eq!(board, before);
    }

    #[test]
    fn test_finds_capture() {
        // 白方一步吃掉黑方最后一个子
        let mut board = Layout::parse("..../..../.b../w...").unwrap();
        let mut search = MinMax::new(1);
        assert_eq!(search.evaluate(&mut board, Side::White).unwrap(), 1);
    }

    #[test]
    fn test_black_minimises() {
        // 黑方吃子后分数从 1 降为 0
        let mut board = Layout::parse("..b./.w../..../...w").unwrap();
        let mut search = MinMax::new(1);
        assert_eq!(search.evaluate(&mut board, Side::Black).unwrap(), 0);
    }

    #[test]
    fn test_sees_recapture() {
        // 白方 (3,1) 可以走到 (2,2)，但会被黑方 (1,3) 吃掉
        let mut board = Layout::parse("..../.b.b/..../.w.w").unwrap();
        let mut search = MinMax::new(2);
        let score = search.evaluate(&mut board, Side::White).unwrap();
        assert!(score <= 0, "white cannot gain material here, got {}", score);
    }

    #[test]
    fn test_terminal_position_returns_evaluation() {
        // 黑方已被吃光，深度再大也直接返回
        let mut board = Layout::parse("..../..../..../w.w.").unwrap();
        let mut search = MinMax::new(5);
        assert_eq!(search.evaluate(&mut board, Side::Black).unwrap(), 2);
        assert_eq!(search.nodes_searched(), 1);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new(6).unwrap();
        let before = board.clone();

        let mut search = MinMax::new(4);
        search.evaluate(&mut board, Side::White).unwrap();

        assert_eq!(board, before);
        assert!(search.nodes_searched() > 1);
    }
}
