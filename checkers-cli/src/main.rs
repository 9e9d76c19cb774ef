use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use checkers_cli::{
    build_player, choose_difficulty, choose_player_kind, GameEngine, Logging, Settings,
};
use checkers_core::{Board, Side};
use tracing::{info, warn};

fn main() -> Result<()> {
    // 先安装日志，读取设置时的警告才能输出
    let logging = Logging::init()?;
    let mut settings = Settings::load();
    logging.apply(settings.log_level)?;

    info!("跳棋启动中，棋盘 {}x{}", settings.board_size, settings.board_size);

    let input = Rc::new(RefCell::new(io::stdin().lock()));
    let mut stdout = io::stdout();

    let white_kind = choose_player_kind(&input, &mut stdout, Side::White)?;
    let black_kind = choose_player_kind(&input, &mut stdout, Side::Black)?;

    if white_kind.is_search_bot() || black_kind.is_search_bot() {
        let difficulty = choose_difficulty(&input, &mut stdout, settings.default_difficulty)?;
        if difficulty != settings.default_difficulty {
            settings.default_difficulty = difficulty;
            // 记住新的默认难度，保存失败不影响对局
            if let Err(e) = settings.save() {
                warn!("保存设置失败: {:#}", e);
            }
        }
    }

    let white = build_player(white_kind, Side::White, &settings, &input, io::stdout());
    let black = build_player(black_kind, Side::Black, &settings, &input, io::stdout());

    let board = Board::new(settings.board_size).context("无法创建棋盘")?;
    let mut game = GameEngine::new(board, white, black, stdout);
    let outcome = game.run()?;

    info!("对局结束: {}，共 {} 步", outcome, game.history().len());
    Ok(())
}
