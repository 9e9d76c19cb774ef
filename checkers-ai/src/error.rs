//! 玩家与搜索错误

use checkers_core::{CheckersError, Side};
use thiserror::Error;

/// 玩家选择走法时的错误
#[derive(Error, Debug)]
pub enum PlayerError {
    /// 当前阵营没有任何合法走法
    #[error("{0} has no legal move")]
    NoLegalMove(Side),

    /// 输入输出错误（人类玩家读取输入）
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 输入已结束
    #[error("Input closed")]
    InputClosed,

    /// 规则错误
    #[error("Rules error: {0}")]
    Rules(#[from] CheckersError),
}

/// 玩家操作结果类型
pub type PlayerResult<T> = std::result::Result<T, PlayerError>;
