use crate::api::error::ApiError;
use crate::domain::criteria::FilterCriteria;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射、过滤条件构造
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串（Tauri要求）
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::ExplorerError(_) => "EXPLORER_ERROR",
            ApiError::SerializationError(_) => "SERIALIZATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
        details: None,
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 从前端参数构造过滤条件
pub(super) fn build_criteria(
    year: i32,
    states: Option<Vec<String>>,
    breach_types: Option<Vec<String>>,
) -> FilterCriteria {
    let mut criteria = FilterCriteria::for_year(year);
    if let Some(states) = states {
        criteria = criteria.with_states(states);
    }
    if let Some(breach_types) = breach_types {
        criteria = criteria.with_breach_types(breach_types);
    }
    criteria
}
