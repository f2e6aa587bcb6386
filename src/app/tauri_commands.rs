// ==========================================
// 医疗数据泄露分析系统 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod dashboard;
mod explorer;
mod export;

pub use dashboard::*;
pub use explorer::*;
pub use export::*;
