//! 棋盘常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 8;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 8;

/// 格子总数
pub const SQUARE_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// 列标号（从左到右 a-h）
pub const FILE_LABELS: &str = "abcdefgh";

/// 行标号（从下到上 1-8）
pub const RANK_LABELS: &str = "12345678";
