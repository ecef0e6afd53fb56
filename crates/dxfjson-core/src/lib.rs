//! dxfjson 核心类型
//!
//! 定义 DXF 实体提取后的归一化记录，以及 HTTP 响应所用的包装结构。
//!
//! # 示例
//!
//! ```rust
//! use dxfjson_core::prelude::*;
//!
//! let record = NormalizedRecord::Line(LineRecord {
//!     start: Point2::new(0.0, 0.0),
//!     end: Point2::new(10.0, 5.0),
//!     layer: "L".to_string(),
//! });
//!
//! assert_eq!(record.kind(), "LINE");
//! ```

pub mod record;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::record::{
        ArcRecord, CircleRecord, ErrorBody, InsertRecord, LineRecord, LwPolylineRecord,
        NormalizedRecord, ParseResponse, Point2,
    };
}
