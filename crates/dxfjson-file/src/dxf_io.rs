//! DXF文件解码
//!
//! 解码交给 `dxf` crate，这里只负责包装成只读文档并暴露模型空间实体。

use crate::error::FileError;
use crate::extract::extract;
use dxf::entities::Entity;
use dxf::Drawing;
use dxfjson_core::record::ParseResponse;
use std::path::Path;
use tracing::debug;

/// 已解码的 DXF 文档，生命周期限于一次请求
pub struct DrawingDocument {
    drawing: Drawing,
}

impl DrawingDocument {
    /// 从DXF文件解码
    pub fn readfile(path: &Path) -> Result<Self, FileError> {
        let drawing = Drawing::load_file(path).map_err(|e| FileError::Dxf(e.to_string()))?;
        debug!(
            "Decoded {} (version {:?})",
            path.display(),
            drawing.header.version
        );
        Ok(Self { drawing })
    }

    pub fn from_drawing(drawing: Drawing) -> Self {
        Self { drawing }
    }

    /// 模型空间实体，保持文档中的书写顺序
    ///
    /// ENTITIES 段中标记为图纸空间（组码 67）的实体不包含在内。
    pub fn modelspace(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.drawing
            .entities()
            .filter(|entity| !entity.common.is_in_paper_space)
    }
}

/// 解码文件并提取全部受支持实体
pub fn parse_path(path: &Path) -> Result<ParseResponse, FileError> {
    let document = DrawingDocument::readfile(path)?;
    let entities = extract(&document)?;
    debug!("Extracted {} entities from {}", entities.len(), path.display());
    Ok(ParseResponse::new(entities))
}
