//! 规则常量定义

/// 最小棋盘边长
pub const MIN_BOARD_SIZE: usize = 4;

/// 最大棋盘边长
pub const MAX_BOARD_SIZE: usize = 10;

/// 默认棋盘边长（国际通行的 8x8 跳棋）
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// 检查棋盘边长是否合法（偶数且在 4..=10 之间）
pub fn is_valid_board_size(size: usize) -> bool {
    size % 2 == 0 && (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}
