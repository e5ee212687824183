//! 棋盘状态

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, SQUARE_COUNT};
use crate::error::BoardError;
use crate::fen::{Fen, INITIAL_FEN};
use crate::piece::{Piece, Square};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 rank * 8 + file，使用 Vec 以支持 serde
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; SQUARE_COUNT],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        Fen::parse(INITIAL_FEN).expect("Initial FEN should be valid")
    }

    /// 从布局字符串创建棋盘
    ///
    /// 构造本身做格式校验，非法字符串无法得到棋盘。
    pub fn from_fen(layout: &str) -> Result<Self, BoardError> {
        Fen::parse(layout)
    }

    /// 将当前棋盘转换为布局字符串
    pub fn to_fen(&self) -> String {
        Fen::board_to_string(self)
    }

    /// 获取指定格子的棋子
    pub fn get(&self, square: Square) -> Option<Piece> {
        if square.is_valid() {
            self.squares[square.to_index()]
        } else {
            None
        }
    }

    /// 设置指定格子的棋子
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_valid() {
            self.squares[square.to_index()] = piece;
        }
    }

    /// 移动棋子（只做几何检查，不检查走法规则）
    ///
    /// 起点为空返回 `NoPiece`，棋盘不变。终点上的棋子无条件被覆盖，
    /// 作为被吃的棋子返回。
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        let piece = match self.get(from) {
            Some(piece) => piece,
            None => return Err(BoardError::NoPiece { square: from }),
        };

        let captured = self.get(to);
        self.set(from, None);
        self.set(to, Some(piece));
        debug!("moved {} from {} to {}", piece, from, to);
        Ok(captured)
    }

    /// 按格子标号移动棋子，如 `"c2"` 到 `"c4"`
    ///
    /// 标号无效返回 `InvalidSquare`，棋盘不变。
    pub fn move_by_label(&mut self, from: &str, to: &str) -> Result<Option<Piece>, BoardError> {
        let from = Square::parse(from)?;
        let to = Square::parse(to)?;
        self.move_piece(from, to)
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Square, Piece)> {
        let mut result = Vec::new();
        for rank in 0..BOARD_HEIGHT {
            for file in 0..BOARD_WIDTH {
                let square = Square::new_unchecked(file as u8, rank as u8);
                if let Some(piece) = self.get(square) {
                    result.push((square, piece));
                }
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 从上到下 8 行，空格子显示 `.`
        for rank in (0..BOARD_HEIGHT as u8).rev() {
            for file in 0..BOARD_WIDTH as u8 {
                match self.get(Square::new_unchecked(file, rank)) {
                    Some(piece) => write!(f, "{}", piece.to_fen_char())?,
                    None => write!(f, ".")?,
                }
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
