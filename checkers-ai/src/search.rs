//! 搜索引擎
//!
//! 在根节点展开当前阵营的所有走法，用配置的算法评估每个子局面，
//! 白方取最高分，黑方取最低分。

use std::time::Instant;

use checkers_core::{Board, Move, Result, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabeta::AlphaBeta;
use crate::minimax::MinMax;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    MinMax,
    AlphaBeta,
}

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: SearchAlgorithm,
    /// 搜索深度（根节点走法计为一层）
    pub max_depth: u8,
}

impl AiConfig {
    pub fn new(algorithm: SearchAlgorithm, max_depth: u8) -> Self {
        Self {
            algorithm,
            max_depth,
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let max_depth = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        };
        Self::new(SearchAlgorithm::AlphaBeta, max_depth)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
#[derive(Debug, Clone)]
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
    last_score: Option<i32>,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
            last_score: None,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 用配置的算法评估局面，side 为当前走子方
    pub fn evaluate(&mut self, board: &mut Board, side: Side, depth: u8) -> Result<i32> {
        match self.config.algorithm {
            SearchAlgorithm::MinMax => {
                let mut searcher = MinMax::new(depth);
                let score = searcher.evaluate(board, side)?;
                self.nodes_searched += searcher.nodes_searched();
                Ok(score)
            }
            SearchAlgorithm::AlphaBeta => {
                let mut searcher = AlphaBeta::new(depth);
                let score = searcher.evaluate(board, side)?;
                self.nodes_searched += searcher.nodes_searched();
                Ok(score)
            }
        }
    }

    /// 搜索最佳走法，无子可动时返回 None
    ///
    /// 分数相同时保留先枚举到的走法。返回时棋盘恢复原状。
    pub fn search(&mut self, board: &mut Board, side: Side) -> Result<Option<Move>> {
        self.nodes_searched = 0;
        self.last_score = None;
        let start = Instant::now();

        let moves = board.moves(side);
        let child_depth = self.config.max_depth.saturating_sub(1);

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            board.apply(mv)?;
            let score = self.evaluate(board, side.opponent(), child_depth);
            board.undo(mv)?;
            let score = score?;

            let better = match best {
                None => true,
                Some((_, best_score)) => match side {
                    Side::White => score > best_score,
                    Side::Black => score < best_score,
                },
            };
            if better {
                best = Some((mv, score));
            }
        }

        self.last_score = best.map(|(_, score)| score);

        debug!(
            "{} search ({:?}, depth {}): best {:?}, score {:?}, {} nodes in {:?}",
            side,
            self.config.algorithm,
            self.config.max_depth,
            best.map(|(mv, _)| mv.to_string()),
            self.last_score,
            self.nodes_searched,
            start.elapsed()
        );

        Ok(best.map(|(mv, _)| mv))
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 上一次搜索选中走法的分数
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }
}
