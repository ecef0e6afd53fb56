//! 实体提取
//!
//! 按模型空间顺序遍历实体，将 LINE / LWPOLYLINE / CIRCLE / ARC / INSERT
//! 转换为归一化记录，其它类型直接跳过。
//!
//! 解码器会为缺失的组码填入默认值，因此"缺少属性"在这里表现为：
//! - INSERT 的块名为空（组码 2 缺失）
//! - 图层名为空（组码 8 为空）
//! - 坐标、半径或角度不是有限值
//!
//! 出现上述情况时整个提取失败，而不是输出残缺记录。

use crate::dxf_io::DrawingDocument;
use crate::error::ExtractError;
use dxf::entities::{Entity, EntityType};
use dxfjson_core::record::{
    ArcRecord, CircleRecord, InsertRecord, LineRecord, LwPolylineRecord, NormalizedRecord, Point2,
};

/// 提取文档中全部受支持的实体
pub fn extract(document: &DrawingDocument) -> Result<Vec<NormalizedRecord>, ExtractError> {
    let mut records = Vec::new();
    for entity in document.modelspace() {
        if let Some(record) = convert_dxf_entity(entity)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// 将DXF实体转换为归一化记录，不支持的类型返回 `None`
fn convert_dxf_entity(entity: &Entity) -> Result<Option<NormalizedRecord>, ExtractError> {
    let record = match &entity.specific {
        EntityType::Line(line) => {
            let check = Check::new("LINE", entity);
            NormalizedRecord::Line(LineRecord {
                start: check.point("start", &line.p1)?,
                end: check.point("end", &line.p2)?,
                layer: check.layer()?,
            })
        }

        EntityType::LwPolyline(lwpoly) => {
            let check = Check::new("LWPOLYLINE", entity);
            // 只取 (x, y)，忽略凸度与线宽
            let points = lwpoly
                .vertices
                .iter()
                .map(|v| check.xy("points", v.x, v.y))
                .collect::<Result<Vec<_>, _>>()?;
            NormalizedRecord::LwPolyline(LwPolylineRecord {
                points,
                layer: check.layer()?,
            })
        }

        EntityType::Circle(circle) => {
            let check = Check::new("CIRCLE", entity);
            NormalizedRecord::Circle(CircleRecord {
                center: check.point("center", &circle.center)?,
                radius: check.scalar("radius", circle.radius)?,
                layer: check.layer()?,
            })
        }

        EntityType::Arc(arc) => {
            let check = Check::new("ARC", entity);
            NormalizedRecord::Arc(ArcRecord {
                center: check.point("center", &arc.center)?,
                radius: check.scalar("radius", arc.radius)?,
                start_angle: check.scalar("start_angle", arc.start_angle)?,
                end_angle: check.scalar("end_angle", arc.end_angle)?,
                layer: check.layer()?,
            })
        }

        EntityType::Insert(insert) => {
            let check = Check::new("INSERT", entity);
            if insert.name.is_empty() {
                return Err(check.missing("block_name"));
            }
            NormalizedRecord::Insert(InsertRecord {
                block_name: insert.name.clone(),
                location: check.point("location", &insert.location)?,
                layer: check.layer()?,
            })
        }

        _ => return Ok(None),
    };

    Ok(Some(record))
}

/// 单个实体的属性校验上下文
struct Check<'a> {
    kind: &'static str,
    entity: &'a Entity,
}

impl<'a> Check<'a> {
    fn new(kind: &'static str, entity: &'a Entity) -> Self {
        Self { kind, entity }
    }

    fn handle(&self) -> String {
        format!("#{:X}", self.entity.common.handle.0)
    }

    fn missing(&self, attribute: &'static str) -> ExtractError {
        ExtractError::MissingAttribute {
            kind: self.kind,
            handle: self.handle(),
            attribute,
        }
    }

    fn layer(&self) -> Result<String, ExtractError> {
        let layer = &self.entity.common.layer;
        if layer.is_empty() {
            return Err(self.missing("layer"));
        }
        Ok(layer.clone())
    }

    fn scalar(&self, attribute: &'static str, value: f64) -> Result<f64, ExtractError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExtractError::NonFinite {
                kind: self.kind,
                handle: self.handle(),
                attribute,
            })
        }
    }

    fn xy(&self, attribute: &'static str, x: f64, y: f64) -> Result<Point2, ExtractError> {
        Ok(Point2::new(self.scalar(attribute, x)?, self.scalar(attribute, y)?))
    }

    /// z 分量丢弃
    fn point(&self, attribute: &'static str, point: &dxf::Point) -> Result<Point2, ExtractError> {
        self.xy(attribute, point.x, point.y)
    }
}
