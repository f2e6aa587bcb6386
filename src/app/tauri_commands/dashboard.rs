use crate::app::state::AppState;

use super::common::{build_criteria, map_api_error};

// ==========================================
// 看板相关命令
// ==========================================

/// 查询可用过滤选项（年份/州/泄露类型）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_filter_options(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_filter_options()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询看板全量聚合（六个视图 + 记录数）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_dashboard(
    state: tauri::State<'_, AppState>,
    year: i32,
    states: Option<Vec<String>>,
    breach_types: Option<Vec<String>>,
) -> Result<String, String> {
    let criteria = build_criteria(year, states, breach_types);

    let result = state
        .dashboard_api
        .get_dashboard(&criteria)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询过滤后的明细记录
#[tauri::command(rename_all = "snake_case")]
pub async fn list_filtered_records(
    state: tauri::State<'_, AppState>,
    year: i32,
    states: Option<Vec<String>>,
    breach_types: Option<Vec<String>>,
) -> Result<String, String> {
    let criteria = build_criteria(year, states, breach_types);

    let result = state
        .dashboard_api
        .list_filtered_records(&criteria)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询数据加载报告
#[tauri::command(rename_all = "snake_case")]
pub async fn get_import_reports(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .dashboard_api
        .get_import_reports()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
