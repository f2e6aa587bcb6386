// ==========================================
// 医疗数据泄露分析系统 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 系统定位: 数据看板 (过滤 → 六视图聚合 → 导出/浏览)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 记录仓库 - 内存数据集
pub mod store;

// 引擎层 - 过滤/汇总/导出
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 浏览服务层 - SQLite 快照 + 外部进程
pub mod explorer;

// 配置层 - 环境变量与默认值
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 性能统计 (PerfGuard + SQL trace)
pub mod perf;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ChartKind, ExplorerStatus};

// 领域实体
pub use domain::{
    BreachRecord, CategoryCount, DashboardResponse, FilterCriteria, FilterOptions, ImportReport,
    SummaryData, SummaryView, TimePoint,
};

// 引擎
pub use engine::{CsvExporter, FilterEngine, SummaryEngine};

// API
pub use api::{DashboardApi, ExplorerApi, ExportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "医疗数据泄露分析系统";

// ==========================================
// 预编译检查
// ==========================================
