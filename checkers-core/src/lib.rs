//! 跳棋规则核心库
//!
//! 包含:
//! - 阵营、格子、坐标等核心数据结构
//! - 棋盘状态、走法生成、走子与撤销
//! - 胜负判定
//! - 布局文本与坐标记法

mod board;
mod constants;
mod error;
mod layout;
mod moves;
mod notation;
mod outcome;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{CheckersError, Result};
pub use layout::Layout;
pub use moves::{LegalMoves, Move, MoveGenerator, MoveKind};
pub use notation::Notation;
pub use outcome::Outcome;
pub use piece::{Cell, Position, Side};
