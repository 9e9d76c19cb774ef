//! Alpha-Beta 剪枝搜索
//!
//! 与 [`crate::MinMax`] 的结果完全相同，只是跳过不可能影响结果的分支。

use checkers_core::{Board, Result, Side};

use crate::evaluate::Evaluator;

/// Alpha-Beta 搜索器
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    depth: u8,
    nodes_searched: u64,
}

impl AlphaBeta {
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
        self.alpha_beta(board, side, self.depth, i32::MIN, i32::MAX)
    }

    /// 上一次 evaluate 访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        side: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32> {
        self.nodes_searched += 1;

        if depth == 0 || board.outcome().is_over() {
            return Ok(Evaluator::evaluate(board));
        }

        let moves = board.moves(side);
        if moves.is_empty() {
            return Ok(Evaluator::evaluate(board));
        }

        match side {
            Side::White => {
                let mut best = i32::MIN;
                for mv in moves {
                    board.apply(mv)?;
                    let score = self.alpha_beta(board, Side::Black, depth - 1, alpha, beta);
                    board.undo(mv)?;

                    best = best.max(score?);
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break; // Beta 剪枝
                    }
                }
                Ok(best)
            }
            Side::Black => {
                let mut best = i32::MAX;
                for mv in moves {
                    board.apply(mv)?;
                    let score = self.alpha_beta(board, Side::White, depth - 1, alpha, beta);
                    board.undo(mv)?;

                    best = best.min(score?);
                    beta = beta.min(best);
                    if beta <= alpha {
                        break; // Alpha 剪枝
                    }
                }
                Ok(best)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::MinMax;
    use checkers_core::{Layout, Outcome};
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// 用固定种子随机走若干步，收集沿途的局面和走子方
    fn sample_positions(size: usize, games: u64, max_plies: usize) -> Vec<(Board, Side)> {
        let mut positions = Vec::new();

        for seed in 0..games {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut board = Board::new(size).unwrap();
            let mut side = Side::White;

            for _ in 0..max_plies {
                positions.push((board.clone(), side));
                if board.outcome() != Outcome::InProgress {
                    break;
                }
                let moves = board.moves(side);
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                board.apply(*mv).unwrap();
                side = side.opponent();
            }
        }

        positions
    }

    #[test]
    fn test_matches_minimax_small_boards() {
        for size in [4, 6] {
            for (board, side) in sample_positions(size, 6, 30) {
                for depth in 0..=5 {
                    let mut a = board.clone();
                    let mut b = board.clone();
                    let expected = MinMax::new(depth).evaluate(&mut a, side).unwrap();
                    let actual = AlphaBeta::new(depth).evaluate(&mut b, side).unwrap();
                    assert_eq!(
                        actual,
                        expected,
                        "size {} depth {} side {:?}\n{}",
                        size,
                        depth,
                        side,
                        Layout::to_string(&board)
                    );
                }
            }
        }
    }

    #[test]
    fn test_matches_minimax_standard_board() {
        for (board, side) in sample_positions(8, 3, 40).into_iter().step_by(3) {
            for depth in 0..=3 {
                let mut a = board.clone();
                let mut b = board.clone();
                let expected = MinMax::new(depth).evaluate(&mut a, side).unwrap();
                let actual = AlphaBeta::new(depth).evaluate(&mut b, side).unwrap();
                assert_eq!(actual, expected, "depth {}\n{}", depth, Layout::to_string(&board));
            }
        }
    }

    #[test]
    fn test_prunes_nodes() {
        let mut board = Board::new(8).unwrap();

        let mut minimax = MinMax::new(4);
        let mut alpha_beta = AlphaBeta::new(4);
        minimax.evaluate(&mut board.clone(), Side::White).unwrap();
        alpha_beta.evaluate(&mut board, Side::White).unwrap();

        assert!(alpha_beta.nodes_searched() <= minimax.nodes_searched());
    }

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let mut board = Layout::parse(".b.b/b.../..../...w").unwrap();
        let before = board.clone();

        let score = AlphaBeta::new(0).evaluate(&mut board, Side::Black).unwrap();
        assert_eq!(score, -2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_restored_after_search() {
        for (board, side) in sample_positions(6, 2, 20) {
            let mut searched = board.clone();
            AlphaBeta::new(4).evaluate(&mut searched, side).unwrap();
            assert_eq!(searched, board);
        }
    }
}
