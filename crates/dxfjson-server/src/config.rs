//! 服务配置
//!
//! TOML 格式，所有字段都有默认值：
//!
//! ```toml
//! [server]
//! bind_addr = "127.0.0.1:5000"
//!
//! [upload]
//! max_body_bytes = 52428800
//! temp_dir = "/var/tmp/dxfjson"
//!
//! [logging]
//! level = "info"
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_ENV: &str = "DXFJSON_CONFIG";

/// 监听地址覆盖环境变量
pub const BIND_ADDR_ENV: &str = "DXFJSON_BIND_ADDR";

/// 配置根结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// 从显式路径加载配置。
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 自动发现配置文件：优先读取环境变量 `DXFJSON_CONFIG`，否则寻找 `./config/default.toml`。
    /// 若文件缺失，则返回默认配置。最后应用 `DXFJSON_BIND_ADDR` 覆盖。
    pub fn discover() -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = env::var_os(CONFIG_ENV) {
            Self::from_file(PathBuf::from(path))?
        } else {
            let default_path = env::current_dir()
                .map(|dir| dir.join("config").join("default.toml"))
                .map_err(|source| ConfigError::Context {
                    message: "获取当前工作目录失败".to_string(),
                    source,
                })?;

            if default_path.exists() {
                Self::from_file(default_path)?
            } else {
                Self::default()
            }
        };

        if let Ok(addr) = env::var(BIND_ADDR_ENV) {
            config.server.bind_addr = addr;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "ListenConfig::default_bind_addr")]
    pub bind_addr: String,
}

impl ListenConfig {
    fn default_bind_addr() -> String {
        "127.0.0.1:5000".to_string()
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            bind_addr: Self::default_bind_addr(),
        }
    }
}

/// 上传相关配置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// 请求体上限（字节）
    #[serde(default = "UploadConfig::default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// 临时文件目录，缺省为系统临时目录
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl UploadConfig {
    fn default_max_body_bytes() -> usize {
        50 * 1024 * 1024
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: Self::default_max_body_bytes(),
            temp_dir: None,
        }
    }
}

/// 日志配置，`RUST_LOG` 优先。
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件 {path:?} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("解析配置文件 {path:?} 失败: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{message}")]
    Context {
        message: String,
        #[source]
        source: std::io::Error,
    },
}
