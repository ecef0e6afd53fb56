//! 文件操作错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DXF error: {0}")]
    Dxf(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// 受支持类型的实体缺少必需属性
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("{kind} entity {handle} is missing required attribute '{attribute}'")]
    MissingAttribute {
        kind: &'static str,
        handle: String,
        attribute: &'static str,
    },

    #[error("{kind} entity {handle} has a non-finite '{attribute}' value")]
    NonFinite {
        kind: &'static str,
        handle: String,
        attribute: &'static str,
    },
}
