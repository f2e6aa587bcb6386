use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// 浏览服务相关命令
// ==========================================

/// 启动浏览服务进程（已在运行时幂等）
#[tauri::command(rename_all = "snake_case")]
pub async fn launch_explorer(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.explorer_api.launch().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询浏览服务进程状态
#[tauri::command(rename_all = "snake_case")]
pub async fn get_explorer_status(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.explorer_api.status().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询浏览服务对外地址（供前端 iframe 嵌入）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_explorer_endpoint(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let endpoint = state.explorer_api.endpoint();

    serde_json::to_string(&endpoint).map_err(|e| format!("序列化失败: {}", e))
}

/// 等待浏览服务就绪（供前端在嵌入 iframe 前轮询）
#[tauri::command(rename_all = "snake_case")]
pub async fn wait_explorer_ready(
    state: tauri::State<'_, AppState>,
    timeout_ms: Option<u64>,
) -> Result<String, String> {
    let timeout_ms = timeout_ms.unwrap_or(10_000);

    state
        .explorer_api
        .wait_until_ready(timeout_ms)
        .await
        .map_err(map_api_error)?;

    let result = state.explorer_api.status().map_err(map_api_error)?;
    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 停止浏览服务进程
#[tauri::command(rename_all = "snake_case")]
pub async fn shutdown_explorer(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state.explorer_api.shutdown().map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
