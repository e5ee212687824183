//! 国际象棋 FEN 布局库
//!
//! 包含:
//! - 棋子、格子、棋盘等核心数据结构
//! - FEN 棋子布局字段的校验、解析和生成
//! - 按格子标号的几何移动操作（不含走法规则）

mod board;
mod constants;
mod error;
mod fen;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{BoardError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use piece::{Piece, PieceType, Side, Square};
