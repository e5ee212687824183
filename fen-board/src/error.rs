//! 错误类型定义

use thiserror::Error;

use crate::piece::Square;

/// 棋盘操作错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    /// 无效的 FEN 布局字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },

    /// 无效的格子标号
    #[error("Invalid square label: {label}")]
    InvalidSquare { label: String },

    /// 起点没有棋子
    #[error("No piece at square {square}")]
    NoPiece { square: Square },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, BoardError>;
