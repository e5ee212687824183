//! FEN 布局命令行工具
//!
//! 用法: `chess-cli [布局字符串] [走法...]`
//!
//! 第一个参数是 FEN 棋子布局字段（省略时用初始局面），其余参数是
//! 四个字符的走法，如 `c2c4`。依次执行走法后输出棋盘和布局字符串。

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fen_board::{Board, Fen, INITIAL_FEN};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chess_cli=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let layout = args.next().unwrap_or_else(|| INITIAL_FEN.to_string());

    Fen::validate(&layout).with_context(|| format!("无效的布局字符串: {}", layout))?;

    let mut board = Board::from_fen(&layout)?;
    info!("初始布局: {}", layout);
    println!("{}", board);

    for mv in args {
        let Some((from, to)) = split_move(&mv) else {
            warn!("无法解析走法参数: {}", mv);
            continue;
        };

        match board.move_by_label(from, to) {
            Ok(Some(captured)) => info!("{} -> {}，吃掉 {}", from, to, captured),
            Ok(None) => info!("{} -> {}", from, to),
            Err(e) => warn!("走法失败: {}", e),
        }
    }

    println!("{}", board);
    println!("{}", board.to_fen());

    Ok(())
}

/// 将 `"c2c4"` 拆分为起点和终点标号
fn split_move(mv: &str) -> Option<(&str, &str)> {
    if mv.len() == 4 && mv.is_char_boundary(2) {
        Some(mv.split_at(2))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_move() {
        assert_eq!(split_move("c2c4"), Some(("c2", "c4")));
        assert_eq!(split_move("c2"), None);
        assert_eq!(split_move("c2c4x"), None);
    }
}
