//! 游戏设置
//!
//! 设置以 JSON 保存在配置目录下，读取失败时回退到默认值。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checkers_ai::Difficulty;
use checkers_core::{is_valid_board_size, DEFAULT_BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// 指定设置文件路径的环境变量
pub const SETTINGS_ENV: &str = "CHECKERS_SETTINGS";

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// EnvFilter 指令
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 棋盘边长
    pub board_size: usize,
    /// 电脑玩家默认难度
    pub default_difficulty: Difficulty,
    /// 随机玩家种子
    pub random_seed: u64,
    /// 日志级别（RUST_LOG 优先）
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            default_difficulty: Difficulty::Medium,
            random_seed: 2024,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|mut path| {
            path.push("checkers");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        let settings: Settings = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("已加载设置: {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                    return Self::default();
                }
            },
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                return Self::default();
            }
        };

        settings.validated()
    }

    /// 修正不合法的字段
    fn validated(mut self) -> Self {
        if !is_valid_board_size(self.board_size) {
            tracing::warn!(
                "棋盘边长 {} 不合法，改用 {}",
                self.board_size,
                DEFAULT_BOARD_SIZE
            );
            self.board_size = DEFAULT_BOARD_SIZE;
        }
        self
    }

    /// 保存设置到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
