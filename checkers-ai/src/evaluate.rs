//! 局面评估函数

use checkers_core::{Board, Side};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估局面（白方视角，正值对白方有利）：白方棋子数减黑方棋子数
    pub fn evaluate(board: &Board) -> i32 {
        Side::ALL
            .iter()
            .map(|side| side.sign() * board.piece_count(*side) as i32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Layout;

    #[test]
    fn test_initial_evaluation() {
        for size in [4, 6, 8, 10] {
            let board = Board::new(size).unwrap();
            assert_eq!(Evaluator::evaluate(&board), 0);
        }
    }

    #[test]
    fn test_material_advantage() {
        // 白方多两个子
        let board = Layout::parse("...b/..../w.w./.w..").unwrap();
        assert_eq!(Evaluator::evaluate(&board), 2);

        let board = Layout::parse(".b.b/b.../..../...w").unwrap();
        assert_eq!(Evaluator::evaluate(&board), -2);
    }
}
