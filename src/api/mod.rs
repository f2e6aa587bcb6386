// ==========================================
// 医疗数据泄露分析系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 Tauri 命令调用
// ==========================================

pub mod error;
pub mod dashboard_api;
pub mod export_api;
pub mod explorer_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use dashboard_api::DashboardApi;
pub use export_api::{CsvExport, ExportApi};
pub use explorer_api::ExplorerApi;
