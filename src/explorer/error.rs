// ==========================================
// 医疗数据泄露分析系统 - 浏览服务错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 浏览服务故障必须可观测,但不得拖垮看板主流程
// ==========================================

use thiserror::Error;

/// 浏览服务模块错误类型
#[derive(Error, Debug)]
pub enum ExplorerError {
    // ===== 数据库构建错误 =====
    #[error("浏览数据库构建失败: {0}")]
    DbBuildError(String),

    // ===== 进程管理错误 =====
    #[error("浏览服务进程启动失败: {0}")]
    SpawnError(String),

    #[error("浏览服务进程已退出 (code: {code:?})")]
    ProcessExited { code: Option<i32> },

    #[error("浏览服务未在 {timeout_ms} 毫秒内就绪")]
    ReadyTimeout { timeout_ms: u64 },

    #[error("锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for ExplorerError {
    fn from(err: rusqlite::Error) -> Self {
        ExplorerError::DbBuildError(err.to_string())
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        ExplorerError::SpawnError(err.to_string())
    }
}

/// Result 类型别名
pub type ExplorerResult<T> = Result<T, ExplorerError>;
