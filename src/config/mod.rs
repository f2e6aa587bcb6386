// ==========================================
// 医疗数据泄露分析系统 - 配置层
// ==========================================
// 职责: 数据路径与浏览服务参数管理
// 来源: 环境变量 + 内置默认值
// ==========================================

pub mod app_config;

// 重导出核心配置类型
pub use app_config::{
    default_explorer_db_path, env_keys, AppConfig, DEFAULT_DATASET_FILE,
    DEFAULT_EXPLORER_COMMAND, DEFAULT_EXPLORER_PORT, EXPLORER_DB_FILE,
};
