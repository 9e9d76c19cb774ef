//! 跳棋命令行客户端
//!
//! 设置加载、开局菜单、文本渲染和对局流程

pub mod game;
pub mod human;
pub mod logging;
pub mod menu;
pub mod render;
pub mod settings;

pub use game::GameEngine;
pub use human::{HumanPlayer, SharedInput};
pub use logging::Logging;
pub use menu::{build_player, choose_difficulty, choose_player_kind, PlayerKind};
pub use render::render;
pub use settings::{LogLevel, Settings};
