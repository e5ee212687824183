//! 棋子与格子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, FILE_LABELS, RANK_LABELS, SQUARE_COUNT};
use crate::error::BoardError;

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    /// 王
    King,
    /// 后
    Queen,
    /// 车
    Rook,
    /// 象
    Bishop,
    /// 马
    Knight,
    /// 兵
    Pawn,
}

impl PieceType {
    /// 获取 FEN 字符（白方大写，黑方小写）
    pub fn to_fen_char(&self, side: Side) -> char {
        let c = match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<(PieceType, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        Some((piece_type, side))
    }
}

/// 阵营（只由 FEN 字符的大小写区分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 白方（大写字符）
    White,
    /// 黑方（小写字符）
    Black,
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// 获取 FEN 字符
    pub fn to_fen_char(&self) -> char {
        self.piece_type.to_fen_char(self.side)
    }

    /// 从 FEN 字符解析
    pub fn from_fen_char(c: char) -> Option<Piece> {
        PieceType::from_fen_char(c).map(|(piece_type, side)| Piece { piece_type, side })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// 棋盘格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    /// 列 (0-7)，对应 a-h
    pub file: u8,
    /// 行 (0-7)，对应 1-8
    pub rank: u8,
}

impl Square {
    /// 创建新格子
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if (file as usize) < BOARD_WIDTH && (rank as usize) < BOARD_HEIGHT {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// 创建新格子（不检查边界，内部使用）
    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// 解析格子标号，如 `"e4"`
    ///
    /// 标号必须恰好两个字符：列字母 a-h 加行数字 1-8。
    pub fn parse(label: &str) -> Result<Self, BoardError> {
        let mut chars = label.chars();
        let (file_char, rank_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file_char), Some(rank_char), None) => (file_char, rank_char),
            _ => {
                return Err(BoardError::InvalidSquare {
                    label: label.to_string(),
                })
            }
        };

        match (FILE_LABELS.find(file_char), RANK_LABELS.find(rank_char)) {
            (Some(file), Some(rank)) => Ok(Self {
                file: file as u8,
                rank: rank as u8,
            }),
            _ => Err(BoardError::InvalidSquare {
                label: label.to_string(),
            }),
        }
    }

    /// 检查格子是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.file as usize) < BOARD_WIDTH && (self.rank as usize) < BOARD_HEIGHT
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.rank as usize * BOARD_WIDTH + self.file as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Square {
                file: (index % BOARD_WIDTH) as u8,
                rank: (index / BOARD_WIDTH) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_fen_char() {
        let white_king = Piece::new(PieceType::King, Side::White);
        assert_eq!(white_king.to_fen_char(), 'K');

        let black_king = Piece::new(PieceType::King, Side::Black);
        assert_eq!(black_king.to_fen_char(), 'k');

        assert_eq!(
            Piece::from_fen_char('R'),
            Some(Piece::new(PieceType::Rook, Side::White))
        );
        assert_eq!(
            Piece::from_fen_char('n'),
            Some(Piece::new(PieceType::Knight, Side::Black))
        );

        // 不在字母表中的字符
        assert_eq!(Piece::from_fen_char('z'), None);
        assert_eq!(Piece::from_fen_char('0'), None);
    }

    #[test]
    fn test_square_new() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_parse() {
        assert_eq!(Square::parse("a1"), Ok(Square::new_unchecked(0, 0)));
        assert_eq!(Square::parse("e4"), Ok(Square::new_unchecked(4, 3)));
        assert_eq!(Square::parse("h8"), Ok(Square::new_unchecked(7, 7)));

        // 列或行超出范围
        assert!(Square::parse("i9").is_err());
        assert!(Square::parse("a0").is_err());
        assert!(Square::parse("a9").is_err());

        // 长度不对
        assert!(Square::parse("").is_err());
        assert!(Square::parse("e").is_err());
        assert!(Square::parse("e44").is_err());
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new_unchecked(4, 3).to_string(), "e4");
        assert_eq!(Square::parse("h8").unwrap().to_string(), "h8");
    }

    #[test]
    fn test_square_index() {
        let square = Square::new_unchecked(4, 3);
        assert_eq!(square.to_index(), 28);
        assert_eq!(Square::from_index(28), Some(square));
        assert_eq!(Square::from_index(64), None);
    }
}
