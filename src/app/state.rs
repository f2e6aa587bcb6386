// ==========================================
// 医疗数据泄露分析系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 红线: 数据集加载失败必须中止启动,浏览服务故障不中止启动
// ==========================================

use std::sync::Arc;

use crate::api::{DashboardApi, ExplorerApi, ExportApi};
use crate::config::AppConfig;
use crate::domain::types::ExplorerStatus;
use crate::explorer::db_builder::ExplorerDbBuilder;
use crate::explorer::service::ExplorerService;
use crate::importer::record_loader_impl::BreachRecordLoaderImpl;
use crate::store::RecordStore;

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,

    /// 记录仓库（启动时一次性加载,只读共享）
    pub store: Arc<RecordStore>,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,

    /// 导出API
    pub export_api: Arc<ExportApi>,

    /// 浏览服务API
    pub explorer_api: Arc<ExplorerApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 应用配置
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 加载全部数据文件到内存仓库（任一文件失败即中止）
    /// 2. 创建所有API实例
    /// 3. 重建浏览数据库并按配置拉起浏览服务（失败不中止启动）
    pub fn new(config: AppConfig) -> Result<Self, String> {
        tracing::info!(
            dataset_count = config.dataset_paths.len(),
            explorer_db = %config.explorer_db_path.display(),
            "初始化AppState"
        );

        // ==========================================
        // 加载数据集
        // ==========================================
        let loader = BreachRecordLoaderImpl::new();
        let mut datasets = Vec::with_capacity(config.dataset_paths.len());
        for path in &config.dataset_paths {
            let dataset = loader
                .load_file(path)
                .map_err(|e| format!("数据文件加载失败 ({}): {}", path.display(), e))?;
            datasets.push(dataset);
        }
        let store = Arc::new(RecordStore::from_datasets(datasets));
        tracing::info!(record_count = store.len(), "记录仓库加载完成");

        // ==========================================
        // 创建API实例
        // ==========================================
        let dashboard_api = Arc::new(DashboardApi::new(store.clone()));
        let export_api = Arc::new(ExportApi::new(store.clone()));

        // ==========================================
        // 浏览数据库与浏览服务
        // ==========================================
        let db_builder = ExplorerDbBuilder::new(&config.explorer_db_path);
        // Best-effort: 浏览数据库重建失败只降级浏览功能,不阻塞看板启动
        if let Err(e) = db_builder.rebuild(store.records()) {
            tracing::warn!("浏览数据库重建失败(将继续启动): {}", e);
        }

        let service = Arc::new(ExplorerService::new(
            config.explorer_command.clone(),
            build_explorer_args(&config),
            config.explorer_port,
        ));

        if config.auto_launch_explorer {
            match service.launch() {
                ExplorerStatus::Running { pid } => {
                    tracing::info!(pid, "浏览服务自动启动成功");
                }
                status => {
                    tracing::warn!(?status, "浏览服务自动启动未成功,可稍后手动启动");
                }
            }
        }

        let explorer_api = Arc::new(ExplorerApi::new(db_builder, service));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            config,
            store,
            dashboard_api,
            export_api,
            explorer_api,
        })
    }
}

/// 构造浏览服务启动参数
///
/// datasette 的调用形式: `datasette <db文件> --port <端口>`
fn build_explorer_args(config: &AppConfig) -> Vec<String> {
    vec![
        config.explorer_db_path.to_string_lossy().into_owned(),
        "--port".to_string(),
        config.explorer_port.to_string(),
    ]
}
