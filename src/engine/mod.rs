// ==========================================
// 医疗数据泄露分析系统 - 引擎层
// ==========================================
// 职责: 实现过滤/聚合/导出引擎,纯函数无副作用
// 红线: 引擎只读记录集合,不做 IO,所有规则可单测
// ==========================================

pub mod export;
pub mod filter;
pub mod summary;

// 重导出核心引擎
pub use export::CsvExporter;
pub use filter::FilterEngine;
pub use summary::{SummaryEngine, UNKNOWN_LABEL};
