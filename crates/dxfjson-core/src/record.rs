//! 归一化记录定义
//!
//! 支持的实体类型：
//! - 线段 (LINE)
//! - 轻量多段线 (LWPOLYLINE)
//! - 圆 (CIRCLE)
//! - 圆弧 (ARC)
//! - 块引用 (INSERT)
//!
//! 序列化后每条记录带有 `"type"` 字段，取值即上面括号中的类型标签。

use serde::{Deserialize, Serialize};

/// 二维坐标，z 分量在提取时丢弃
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 归一化记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NormalizedRecord {
    #[serde(rename = "LINE")]
    Line(LineRecord),
    #[serde(rename = "LWPOLYLINE")]
    LwPolyline(LwPolylineRecord),
    #[serde(rename = "CIRCLE")]
    Circle(CircleRecord),
    #[serde(rename = "ARC")]
    Arc(ArcRecord),
    #[serde(rename = "INSERT")]
    Insert(InsertRecord),
}

impl NormalizedRecord {
    /// 获取记录的类型标签
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizedRecord::Line(_) => "LINE",
            NormalizedRecord::LwPolyline(_) => "LWPOLYLINE",
            NormalizedRecord::Circle(_) => "CIRCLE",
            NormalizedRecord::Arc(_) => "ARC",
            NormalizedRecord::Insert(_) => "INSERT",
        }
    }

    /// 获取记录所在图层
    pub fn layer(&self) -> &str {
        match self {
            NormalizedRecord::Line(r) => &r.layer,
            NormalizedRecord::LwPolyline(r) => &r.layer,
            NormalizedRecord::Circle(r) => &r.layer,
            NormalizedRecord::Arc(r) => &r.layer,
            NormalizedRecord::Insert(r) => &r.layer,
        }
    }
}

/// 线段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub start: Point2,
    pub end: Point2,
    pub layer: String,
}

/// 轻量多段线，顶点顺序即连接顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LwPolylineRecord {
    pub points: Vec<Point2>,
    pub layer: String,
}

/// 圆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleRecord {
    pub center: Point2,
    pub radius: f64,
    pub layer: String,
}

/// 圆弧
///
/// 角度单位为度，保持源实体中的原值，不归一化到 [0, 360)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcRecord {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub layer: String,
}

/// 块引用，只记录引用本身，不展开块内几何
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertRecord {
    pub block_name: String,
    pub location: Point2,
    pub layer: String,
}

/// 成功响应：`{ "entities": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    pub entities: Vec<NormalizedRecord>,
}

impl ParseResponse {
    pub fn new(entities: Vec<NormalizedRecord>) -> Self {
        Self { entities }
    }
}

/// 错误响应：`{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_shape() {
        let record = NormalizedRecord::Line(LineRecord {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(10.0, 5.0),
            layer: "L".to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "LINE",
                "start": {"x": 0.0, "y": 0.0},
                "end": {"x": 10.0, "y": 5.0},
                "layer": "L"
            })
        );
        assert!(value.get("color").is_none());
    }

    #[test]
    fn test_arc_angles_untouched() {
        let record = NormalizedRecord::Arc(ArcRecord {
            center: Point2::new(1.0, 2.0),
            radius: 3.0,
            start_angle: 450.0,
            end_angle: -30.0,
            layer: "0".to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "ARC");
        assert_eq!(value["start_angle"], json!(450.0));
        assert_eq!(value["end_angle"], json!(-30.0));
    }

    #[test]
    fn test_insert_and_polyline_tags() {
        let insert = NormalizedRecord::Insert(InsertRecord {
            block_name: "DOOR".to_string(),
            location: Point2::new(5.0, 6.0),
            layer: "A".to_string(),
        });
        let polyline = NormalizedRecord::LwPolyline(LwPolylineRecord {
            points: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            layer: "B".to_string(),
        });

        assert_eq!(insert.kind(), "INSERT");
        assert_eq!(insert.layer(), "A");
        assert_eq!(polyline.kind(), "LWPOLYLINE");

        let value = serde_json::to_value(&polyline).unwrap();
        assert_eq!(value["type"], "LWPOLYLINE");
        assert_eq!(value["points"][1], json!({"x": 1.0, "y": 0.0}));

        let value = serde_json::to_value(&insert).unwrap();
        assert_eq!(value["block_name"], "DOOR");
        assert_eq!(value["location"], json!({"x": 5.0, "y": 6.0}));
    }

    #[test]
    fn test_envelopes() {
        let empty = serde_json::to_string(&ParseResponse::default()).unwrap();
        assert_eq!(empty, r#"{"entities":[]}"#);

        let error = serde_json::to_string(&ErrorBody::new("No file uploaded")).unwrap();
        assert_eq!(error, r#"{"error":"No file uploaded"}"#);
    }
}
