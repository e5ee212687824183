//! FEN 布局格式解析和生成
//!
//! 只建模 FEN 的棋子布局字段，从上到下每行一组，以 `/` 分隔：
//! `<第8行>/<第7行>/.../<第1行>`
//!
//! 示例：
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`

use crate::board::Board;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::BoardError;
use crate::piece::{Piece, Square};

/// 初始局面布局
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// FEN 布局处理
pub struct Fen;

impl Fen {
    /// 校验布局字符串格式
    ///
    /// 要求恰好 8 个以 `/` 分隔的行组，每个字符是棋子符号或数字 1-8，
    /// 每行组展开后恰好 8 格。只取第一个空白分隔字段，后续字段忽略。
    pub fn validate(layout: &str) -> Result<(), BoardError> {
        let field = Self::placement_field(layout)?;
        let rows: Vec<&str> = field.split('/').collect();

        if rows.len() != BOARD_HEIGHT {
            return Err(BoardError::InvalidFen {
                reason: format!("Expected 8 ranks, got {}", rows.len()),
            });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut sum = 0usize;
            for c in row.chars() {
                if let Some(d @ 1..=8) = c.to_digit(10) {
                    sum += d as usize;
                } else if Piece::from_fen_char(c).is_some() {
                    sum += 1;
                } else {
                    return Err(BoardError::InvalidFen {
                        reason: format!("Invalid piece character: {}", c),
                    });
                }
            }
            if sum != BOARD_WIDTH {
                return Err(BoardError::InvalidFen {
                    reason: format!("Rank {} has {} squares, expected 8", row_idx, sum),
                });
            }
        }

        Ok(())
    }

    /// 解析布局字符串为棋盘
    ///
    /// 解析过程中同时校验格式，格式错误返回 `InvalidFen`，不会越界。
    pub fn parse(layout: &str) -> Result<Board, BoardError> {
        let field = Self::placement_field(layout)?;
        let mut board = Board::empty();
        let rows: Vec<&str> = field.split('/').collect();

        if rows.len() != BOARD_HEIGHT {
            return Err(BoardError::InvalidFen {
                reason: format!("Expected 8 ranks, got {}", rows.len()),
            });
        }

        // FEN 从上到下是 rank=7 到 rank=0
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = (BOARD_HEIGHT - 1 - row_idx) as u8;
            let mut file = 0u8;

            for c in row.chars() {
                if file as usize >= BOARD_WIDTH {
                    return Err(BoardError::InvalidFen {
                        reason: format!("Rank {} has too many squares", row_idx),
                    });
                }

                if let Some(d @ 1..=8) = c.to_digit(10) {
                    // 空格数量
                    file += d as u8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    board.set(Square::new_unchecked(file, rank), Some(piece));
                    file += 1;
                } else {
                    return Err(BoardError::InvalidFen {
                        reason: format!("Invalid piece character: {}", c),
                    });
                }
            }

            if file as usize != BOARD_WIDTH {
                return Err(BoardError::InvalidFen {
                    reason: format!("Rank {} has {} squares, expected 8", row_idx, file),
                });
            }
        }

        Ok(board)
    }

    /// 将棋盘转换为布局字符串
    ///
    /// 连续空格合并为一个数字，输出总是最简形式。
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_HEIGHT);

        // 从 rank=7 到 rank=0
        for rank in (0..BOARD_HEIGHT as u8).rev() {
            let mut row = String::new();
            let mut empty_count = 0;

            for file in 0..BOARD_WIDTH as u8 {
                if let Some(piece) = board.get(Square::new_unchecked(file, rank)) {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }

            rows.push(row);
        }

        rows.join("/")
    }

    /// 取出布局字段（忽略走子方等后续字段）
    fn placement_field(layout: &str) -> Result<&str, BoardError> {
        layout
            .split_whitespace()
            .next()
            .ok_or_else(|| BoardError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            })
    }
}
