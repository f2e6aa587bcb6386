// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用辅助函数
// ==========================================

use std::sync::Arc;

use tempfile::{NamedTempFile, TempDir};

use breach_dashboard::api::{DashboardApi, ExplorerApi, ExportApi};
use breach_dashboard::domain::BreachRecord;
use breach_dashboard::explorer::{ExplorerDbBuilder, ExplorerService};
use breach_dashboard::importer::record_loader_impl::BreachRecordLoaderImpl;
use breach_dashboard::store::RecordStore;

use super::test_data_builder::{create_breach_record, write_breach_csv};

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 数据从临时CSV文件经真实加载链路进入内存仓库
pub struct ApiTestEnv {
    pub store: Arc<RecordStore>,
    pub dashboard_api: Arc<DashboardApi>,
    pub export_api: Arc<ExportApi>,

    // 临时文件（确保生命周期）
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    /// 用默认样本数据集创建测试环境
    pub fn new() -> Result<Self, String> {
        Self::with_records(default_records())
    }

    /// 用指定记录创建测试环境
    ///
    /// # 说明
    /// - 记录先写入临时CSV, 再经 BreachRecordLoaderImpl 加载
    /// - 覆盖解析/表头校验/字段映射/仓库构建完整链路
    pub fn with_records(records: Vec<BreachRecord>) -> Result<Self, String> {
        let temp_file = write_breach_csv(&records);

        let loader = BreachRecordLoaderImpl::new();
        let dataset = loader
            .load_file(temp_file.path())
            .map_err(|e| format!("测试数据集加载失败: {}", e))?;
        let store = Arc::new(RecordStore::from_datasets(vec![dataset]));

        let dashboard_api = Arc::new(DashboardApi::new(store.clone()));
        let export_api = Arc::new(ExportApi::new(store.clone()));

        Ok(Self {
            store,
            dashboard_api,
            export_api,
            _temp_file: temp_file,
        })
    }
}

/// 默认样本: 两年数据, 覆盖多州/多类型
///
/// 2023年: CA-Theft, CA-Hacking, NY-Theft
/// 2022年: CA-Theft, TX-Loss
pub fn default_records() -> Vec<BreachRecord> {
    vec![
        create_breach_record("Alpha Clinic", "01/10/2023", "CA", "Theft"),
        create_breach_record("Beta Health", "02/20/2023", "CA", "Hacking/IT Incident"),
        create_breach_record("Gamma Hospital", "03/30/2023", "NY", "Theft"),
        create_breach_record("Delta Care", "04/15/2022", "CA", "Theft"),
        create_breach_record("Epsilon Partners", "05/25/2022", "TX", "Loss"),
    ]
}

// ==========================================
// 浏览服务测试环境
// ==========================================

/// 创建浏览服务API, 数据库文件放在临时目录
///
/// # 参数
/// - command: 浏览服务可执行命令（测试中可注入 sleep/true 等）
/// - args: 启动参数
/// - port: 服务端口
///
/// # 返回
/// - ExplorerApi: 待测API
/// - TempDir: 临时目录（需保持存活）
pub fn create_explorer_api(command: &str, args: Vec<String>, port: u16) -> (ExplorerApi, TempDir) {
    let dir = tempfile::tempdir().expect("无法创建临时目录");
    let db_builder = ExplorerDbBuilder::new(dir.path().join("breach_report.db"));
    let service = Arc::new(ExplorerService::new(command, args, port));
    (ExplorerApi::new(db_builder, service), dir)
}
