//! HTTP 请求处理

use crate::error::ApiError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use dxfjson_core::record::ParseResponse;
use dxfjson_file::{parse_path, FileError, StagedUpload};
use serde::Serialize;
use std::path::Path;
use tokio::task;
use tracing::{debug, info};

/// 上传文件所在的表单字段名
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// 健康检查
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /parse-dxf`
///
/// 读取 `file` 字段，暂存、解码并提取实体。缺少文件时返回 400，
/// 其余失败统一返回 500 与错误信息。
pub async fn parse_dxf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!(error = %rejection, "Request is not a multipart upload");
        ApiError::MissingFile
    })?;
    let bytes = read_file_field(&mut multipart).await?;
    debug!("Received upload of {} bytes", bytes.len());

    let temp_dir = state.config.upload.temp_dir.clone();
    let response = task::spawn_blocking(move || run_parse_job(&bytes, temp_dir.as_deref()))
        .await
        .map_err(|e| ApiError::Worker(e.to_string()))??;

    info!(entities = response.entities.len(), "Parsed DXF upload");
    Ok(Json(response))
}

/// 找到 `file` 字段并读出全部内容；空字段视为未上传
async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if field.file_name() == Some("") {
            return Err(ApiError::MissingFile);
        }
        let data = field.bytes().await.map_err(multipart_error)?;
        if data.is_empty() {
            return Err(ApiError::MissingFile);
        }
        return Ok(data);
    }
    Err(ApiError::MissingFile)
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Multipart {
        status: err.status(),
        message: err.body_text(),
    }
}

/// 阻塞任务：暂存 → 解码 → 提取。临时文件在任何退出路径上都会被删除。
fn run_parse_job(bytes: &[u8], temp_dir: Option<&Path>) -> Result<ParseResponse, ApiError> {
    let staged = StagedUpload::create(bytes, temp_dir).map_err(FileError::Io)?;
    let result = parse_path(staged.path());
    staged.close();
    Ok(result?)
}
