//! 玩家抽象
//!
//! 人类玩家在命令行前端实现，这里提供两种电脑玩家。

use checkers_core::{Board, Move, Side};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{PlayerError, PlayerResult};
use crate::search::{AiConfig, AiEngine};

/// 玩家
pub trait Player {
    /// 显示名称
    fn name(&self) -> &str;

    /// 为 side 选择一步走法
    ///
    /// 可以在 board 上试走，但返回前必须恢复原状。
    fn choose_move(&mut self, board: &mut Board, side: Side) -> PlayerResult<Move>;
}

/// 搜索型电脑玩家
pub struct SearchBot {
    name: String,
    engine: AiEngine,
}

impl SearchBot {
    pub fn new(name: impl Into<String>, config: AiConfig) -> Self {
        Self {
            name: name.into(),
            engine: AiEngine::new(config),
        }
    }

}

impl Player for SearchBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &mut Board, side: Side) -> PlayerResult<Move> {
        let mv = self
            .engine
            .search(board, side)?
            .ok_or(PlayerError::NoLegalMove(side))?;

        debug!(
            "{} chose {} at depth {} (score {:?}, {} nodes)",
            self.name,
            mv,
            self.engine.config().max_depth,
            self.engine.last_score(),
            self.engine.nodes_searched()
        );
        Ok(mv)
    }
}

/// 随机电脑玩家：先随机选起点，再随机选终点
pub struct RandomBot {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomBot {
    /// 固定种子，便于复现对局
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &mut Board, side: Side) -> PlayerResult<Move> {
        let legal = board.legal_moves(side);

        let (from, destinations) = legal
            .iter()
            .choose(&mut self.rng)
            .ok_or(PlayerError::NoLegalMove(side))?;
        let to = destinations
            .choose(&mut self.rng)
            .ok_or(PlayerError::NoLegalMove(side))?;

        debug!("{} picked {} -> {}", self.name, from, to);
        Ok(Move::new(*from, *to))
    }
}
