use crate::app::state::AppState;

use super::common::{build_criteria, map_api_error};

// ==========================================
// 导出相关命令
// ==========================================

/// 导出过滤后的记录为 CSV（返回文件名 + MIME + 内容）
#[tauri::command(rename_all = "snake_case")]
pub async fn export_filtered_csv(
    state: tauri::State<'_, AppState>,
    year: i32,
    states: Option<Vec<String>>,
    breach_types: Option<Vec<String>>,
) -> Result<String, String> {
    let criteria = build_criteria(year, states, breach_types);

    let result = state
        .export_api
        .export_filtered(&criteria)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
