// ==========================================
// 医疗数据泄露分析系统 - 浏览服务模块
// ==========================================
// 职责: 维护 SQLite 数据快照 + 管理外部浏览服务进程
// ==========================================

pub mod db_builder;
pub mod error;
pub mod service;

// 重导出常用类型
pub use db_builder::{ExplorerDbBuilder, EXPLORER_TABLE};
pub use error::{ExplorerError, ExplorerResult};
pub use service::ExplorerService;
