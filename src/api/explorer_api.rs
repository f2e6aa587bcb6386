// ==========================================
// 医疗数据泄露分析系统 - 浏览服务 API
// ==========================================
// 职责: 封装浏览数据库重建与浏览服务进程操作
// 红线: 浏览服务故障不得影响看板查询,状态必须可观测
// ==========================================

use std::sync::Arc;
use std::time::Duration;

use crate::api::error::ApiResult;
use crate::domain::breach::BreachRecord;
use crate::domain::types::ExplorerStatus;
use crate::explorer::db_builder::ExplorerDbBuilder;
use crate::explorer::service::ExplorerService;

// ==========================================
// ExplorerApi - 浏览服务 API
// ==========================================
pub struct ExplorerApi {
    db_builder: ExplorerDbBuilder,
    service: Arc<ExplorerService>,
}

impl ExplorerApi {
    pub fn new(db_builder: ExplorerDbBuilder, service: Arc<ExplorerService>) -> Self {
        Self {
            db_builder,
            service,
        }
    }

    /// 重建浏览数据库（整库覆盖）
    ///
    /// # 返回
    /// - Ok(usize): 写入的记录数
    pub fn rebuild_database(&self, records: &[BreachRecord]) -> ApiResult<usize> {
        Ok(self.db_builder.rebuild(records)?)
    }

    /// 启动浏览服务进程（已在运行时幂等）
    pub fn launch(&self) -> ApiResult<ExplorerStatus> {
        Ok(self.service.launch())
    }

    /// 查询浏览服务进程状态
    pub fn status(&self) -> ApiResult<ExplorerStatus> {
        Ok(self.service.status())
    }

    /// 浏览服务对外地址（供前端 iframe 嵌入）
    pub fn endpoint(&self) -> String {
        self.service.endpoint()
    }

    /// 等待浏览服务就绪
    ///
    /// # 参数
    /// - timeout_ms: 等待超时（毫秒）
    pub async fn wait_until_ready(&self, timeout_ms: u64) -> ApiResult<()> {
        self.service
            .wait_until_ready(Duration::from_millis(timeout_ms))
            .await?;
        Ok(())
    }

    /// 停止浏览服务进程
    pub fn shutdown(&self) -> ApiResult<ExplorerStatus> {
        Ok(self.service.shutdown())
    }
}
