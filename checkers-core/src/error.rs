//! 错误类型定义

use thiserror::Error;

use crate::piece::Position;

/// 跳棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// 无效的棋盘配置（边长不合法或格子数不是平方数）
    #[error("Invalid board configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// 无效的走法（不在当前合法走法表中）
    #[error("Invalid move: from {from} to {to}")]
    InvalidMove { from: Position, to: Position },

    /// 坐标超出棋盘
    #[error("Invalid coordinate: ({row}, {col})")]
    InvalidCoordinate { row: usize, col: usize },

    /// 无法解析的坐标记法
    #[error("Invalid notation '{input}': {reason}")]
    InvalidNotation { input: String, reason: String },

    /// 无法解析的棋盘布局
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, CheckersError>;
