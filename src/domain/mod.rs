// ==========================================
// 医疗数据泄露分析系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、过滤条件与视图结构
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod breach;
pub mod criteria;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use breach::{BreachRecord, ImportReport};
pub use criteria::FilterCriteria;
pub use summary::{
    CategoryCount, DashboardResponse, FilterOptions, SummaryData, SummaryView, TimePoint,
};
pub use types::{ChartKind, ExplorerStatus};
