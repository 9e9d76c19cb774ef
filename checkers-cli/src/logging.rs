//! 日志初始化
//!
//! 订阅器在读取设置之前安装，先用 `info` 级别，设置加载完成后再切换到
//! 设置中的级别。设置了 RUST_LOG 时以环境变量为准，不再切换。

use anyhow::Result;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, reload, EnvFilter, Registry};

use crate::settings::LogLevel;

/// 读取设置之前使用的级别
const BOOTSTRAP_FILTER: &str = "info";

/// 运行中调整日志级别的句柄
pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl Logging {
    /// 构建订阅器（不安装为全局）
    pub fn build<W>(make_writer: W) -> (impl Subscriber + Send + Sync + 'static, Logging)
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let (filter, from_env) = match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, true),
            Err(_) => (EnvFilter::new(BOOTSTRAP_FILTER), false),
        };
        let (filter, handle) = reload::Layer::new(filter);

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(make_writer));

        (subscriber, Logging { handle, from_env })
    }

    /// 安装输出到 stderr 的全局订阅器
    pub fn init() -> Result<Logging> {
        let (subscriber, logging) = Self::build(std::io::stderr);
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(logging)
    }

    /// 切换到设置中的日志级别
    pub fn apply(&self, level: LogLevel) -> Result<()> {
        if self.from_env {
            return Ok(());
        }
        self.handle.reload(EnvFilter::new(level.as_filter()))?;
        Ok(())
    }
}
