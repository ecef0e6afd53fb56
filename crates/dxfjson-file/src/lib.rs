//! dxfjson 文件处理
//!
//! 支持：
//! - `.dxf` 解码（ASCII 与二进制，由 `dxf` crate 完成）
//! - 模型空间实体提取为归一化记录
//! - 上传内容暂存到唯一命名的临时文件

pub mod dxf_io;
pub mod error;
pub mod extract;
pub mod staging;

pub use dxf_io::{parse_path, DrawingDocument};
pub use error::{ExtractError, FileError};
pub use extract::extract;
pub use staging::StagedUpload;
