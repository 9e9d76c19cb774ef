//! 跳棋 AI
//!
//! 包含:
//! - 棋子数差评估函数
//! - MinMax 与 Alpha-Beta 搜索
//! - 根节点选步引擎
//! - 电脑玩家（搜索型、随机型）

mod alphabeta;
mod error;
mod evaluate;
mod minimax;
mod player;
mod search;

pub use alphabeta::AlphaBeta;
pub use error::{PlayerError, PlayerResult};
pub use evaluate::Evaluator;
pub use minimax::MinMax;
pub use player::{Player, RandomBot, SearchBot};
pub use search::{AiConfig, AiEngine, Difficulty, SearchAlgorithm};
