// ==========================================
// 医疗数据泄露分析系统 - 汇总视图模型
// ==========================================
// 职责: 定义图表就绪的聚合输出结构
// 红线: 派生数据,每次请求重算,不落库
// ==========================================

use crate::domain::types::ChartKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// CategoryCount - 分类计数条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String, // 分类标签（州/类型/载体...）
    pub count: u64,    // 记录数
}

// ==========================================
// TimePoint - 时间序列条目
// ==========================================
// value 语义由视图决定: 受影响人数之和或记录数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub value: u64,
}

// ==========================================
// SummaryData - 视图数据载荷
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryData {
    Categories { entries: Vec<CategoryCount> },
    TimeSeries { points: Vec<TimePoint> },
}

impl SummaryData {
    /// 条目/数据点个数
    pub fn len(&self) -> usize {
        match self {
            SummaryData::Categories { entries } => entries.len(),
            SummaryData::TimeSeries { points } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 全部计数/数值之和（测试与守恒校验用）
    pub fn total(&self) -> u64 {
        match self {
            SummaryData::Categories { entries } => entries.iter().map(|e| e.count).sum(),
            SummaryData::TimeSeries { points } => points.iter().map(|p| p.value).sum(),
        }
    }
}

// ==========================================
// SummaryView - 单个图表视图
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub title: String,        // 人类可读标题（含年份）
    pub chart_kind: ChartKind, // 建议图表类型
    pub data: SummaryData,
}

// ==========================================
// DashboardResponse - 看板整体响应
// ==========================================
// 六个视图一次计算,一次返回
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub year: i32,                     // 当前选中年份
    pub record_count: usize,           // 过滤后记录数
    pub breaches_by_state: SummaryView,
    pub breach_types: SummaryView,
    pub affected_over_time: SummaryView,
    pub breach_locations: SummaryView,
    pub monthly_trend: SummaryView,
    pub entity_types: SummaryView,
}

// ==========================================
// FilterOptions - 过滤器候选项
// ==========================================
// years 降序; states/breach_types 按数据集首见顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub states: Vec<String>,
    pub breach_types: Vec<String>,
}
