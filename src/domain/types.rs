// ==========================================
// 医疗数据泄露分析系统 - 领域类型定义
// ==========================================
// 职责: 定义图表类型等跨层共享的基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 图表类型 (Chart Kind)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与前端约定一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    Bar,  // 柱状图
    Pie,  // 饼图
    Line, // 折线图
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "BAR"),
            ChartKind::Pie => write!(f, "PIE"),
            ChartKind::Line => write!(f, "LINE"),
        }
    }
}

// ==========================================
// 数据浏览服务状态 (Explorer Status)
// ==========================================
// 外部浏览服务是独立子进程,状态必须可观测
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "state")]
pub enum ExplorerStatus {
    NotStarted,                   // 尚未启动
    Running { pid: u32 },         // 运行中
    Exited { code: Option<i32> }, // 已退出
    Failed { reason: String },    // 启动失败
}

impl fmt::Display for ExplorerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerStatus::NotStarted => write!(f, "NOT_STARTED"),
            ExplorerStatus::Running { pid } => write!(f, "RUNNING(pid={})", pid),
            ExplorerStatus::Exited { code: Some(c) } => write!(f, "EXITED(code={})", c),
            ExplorerStatus::Exited { code: None } => write!(f, "EXITED"),
            ExplorerStatus::Failed { reason } => write!(f, "FAILED({})", reason),
        }
    }
}
