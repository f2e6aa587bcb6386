// ==========================================
// 医疗数据泄露分析系统 - 应用配置
// ==========================================
// 职责: 数据文件路径、浏览服务参数的加载与默认值
// 来源: 环境变量优先,缺省时回退内置默认值
// ==========================================

use std::path::PathBuf;
use tracing::warn;

/// 浏览服务默认端口
pub const DEFAULT_EXPLORER_PORT: u16 = 8001;

/// 浏览服务默认命令
pub const DEFAULT_EXPLORER_COMMAND: &str = "datasette";

/// 默认数据集文件 (项目根目录)
pub const DEFAULT_DATASET_FILE: &str = "HHS - breach_report.csv";

/// 浏览数据库文件名
pub const EXPLORER_DB_FILE: &str = "breach_report.db";

// ==========================================
// 环境变量键常量
// ==========================================
pub mod env_keys {
    /// 数据集文件路径,多个路径用逗号分隔
    pub const DATA_PATH: &str = "BREACH_DASHBOARD_DATA_PATH";
    /// 浏览数据库文件路径
    pub const DB_PATH: &str = "BREACH_DASHBOARD_DB_PATH";
    /// 浏览服务监听端口
    pub const EXPLORER_PORT: &str = "BREACH_DASHBOARD_EXPLORER_PORT";
    /// 浏览服务命令
    pub const EXPLORER_CMD: &str = "BREACH_DASHBOARD_EXPLORER_CMD";
    /// 启动时是否自动拉起浏览服务
    pub const AUTO_LAUNCH_EXPLORER: &str = "BREACH_DASHBOARD_AUTO_LAUNCH_EXPLORER";
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 泄露报告数据文件路径 (可多个,加载后按顺序拼接)
    pub dataset_paths: Vec<PathBuf>,
    /// 浏览服务 SQLite 快照路径
    pub explorer_db_path: PathBuf,
    /// 浏览服务监听端口
    pub explorer_port: u16,
    /// 浏览服务命令
    pub explorer_command: String,
    /// 启动时是否自动拉起浏览服务
    pub auto_launch_explorer: bool,
}

impl AppConfig {
    /// 从环境变量加载配置,缺省项使用默认值
    pub fn from_env() -> Self {
        let dataset_paths = match std::env::var(env_keys::DATA_PATH) {
            Ok(raw) if !raw.trim().is_empty() => parse_dataset_paths(&raw),
            _ => vec![PathBuf::from(DEFAULT_DATASET_FILE)],
        };

        let explorer_db_path = match std::env::var(env_keys::DB_PATH) {
            Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
            _ => default_explorer_db_path(),
        };

        let explorer_port = std::env::var(env_keys::EXPLORER_PORT)
            .map(|raw| parse_port(&raw))
            .unwrap_or(DEFAULT_EXPLORER_PORT);

        let explorer_command = std::env::var(env_keys::EXPLORER_CMD)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|cmd| !cmd.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPLORER_COMMAND.to_string());

        let auto_launch_explorer = std::env::var(env_keys::AUTO_LAUNCH_EXPLORER)
            .map(|raw| parse_bool_flag(&raw, true))
            .unwrap_or(true);

        Self {
            dataset_paths,
            explorer_db_path,
            explorer_port,
            explorer_command,
            auto_launch_explorer,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_paths: vec![PathBuf::from(DEFAULT_DATASET_FILE)],
            explorer_db_path: default_explorer_db_path(),
            explorer_port: DEFAULT_EXPLORER_PORT,
            explorer_command: DEFAULT_EXPLORER_COMMAND.to_string(),
            auto_launch_explorer: true,
        }
    }
}

/// 获取默认浏览数据库路径
///
/// # 返回
/// - 开发环境: 用户数据目录/breach-dashboard-dev/breach_report.db
/// - 生产环境: 用户数据目录/breach-dashboard/breach_report.db
/// - 拿不到用户数据目录时回退项目根目录 ./breach_report.db
pub fn default_explorer_db_path() -> PathBuf {
    // 使用用户数据目录，避免开发期 DB 文件变化触发 `tauri dev` 的文件监控重启
    let mut path = PathBuf::from("./breach_report.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("breach-dashboard-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("breach-dashboard");
        }

        path = path.join(EXPLORER_DB_FILE);
    }

    path
}

/// 解析逗号分隔的数据文件路径列表
fn parse_dataset_paths(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// 解析端口配置,格式错误时回退默认端口
fn parse_port(raw: &str) -> u16 {
    raw.trim().parse::<u16>().unwrap_or_else(|_| {
        warn!(raw_value = %raw, "端口配置格式错误，使用默认端口");
        DEFAULT_EXPLORER_PORT
    })
}

/// 解析布尔开关,无法识别时使用默认值
fn parse_bool_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => true,
        "0" | "false" | "no" | "n" | "off" => false,
        _ => default,
    }
}
