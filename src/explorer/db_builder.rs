// ==========================================
// 医疗数据泄露分析系统 - 浏览数据库构建器
// ==========================================
// 职责: 把全量记录落成 SQLite 快照,供外部浏览服务查询
// 规则: 每次整库重建,单事务写入,可重复执行
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::breach::BreachRecord;
use crate::explorer::error::{ExplorerError, ExplorerResult};
use crate::perf::{install_sqlite_tracing, PerfGuard};
use rusqlite::params;
use std::path::{Path, PathBuf};
use tracing::info;

/// 浏览服务查询的表名
pub const EXPLORER_TABLE: &str = "breach_report";

const CREATE_TABLE_SQL: &str = "
DROP TABLE IF EXISTS breach_report;
CREATE TABLE breach_report (
    id                          INTEGER PRIMARY KEY AUTOINCREMENT,
    entity_name                 TEXT,
    state                       TEXT,
    entity_type                 TEXT,
    individuals_affected        INTEGER,
    submission_date             TEXT NOT NULL,
    breach_type                 TEXT,
    breach_location             TEXT,
    business_associate_present  TEXT,
    web_description             TEXT
);
";

const CREATE_INDEX_SQL: &str = "
CREATE INDEX idx_breach_report_state ON breach_report(state);
CREATE INDEX idx_breach_report_breach_type ON breach_report(breach_type);
CREATE INDEX idx_breach_report_submission_date ON breach_report(submission_date);
";

// ==========================================
// ExplorerDbBuilder - 浏览数据库构建器
// ==========================================
pub struct ExplorerDbBuilder {
    db_path: PathBuf,
}

impl ExplorerDbBuilder {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// 整库重建并写入全量记录
    ///
    /// # 返回
    /// 写入的记录数
    pub fn rebuild(&self, records: &[BreachRecord]) -> ExplorerResult<usize> {
        let _perf = PerfGuard::new("explorer_db_rebuild");

        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ExplorerError::DbBuildError(e.to_string()))?;
            }
        }

        let mut conn = open_sqlite_connection(&self.db_path)?;
        install_sqlite_tracing(&mut conn);

        let tx = conn.transaction()?;
        tx.execute_batch(CREATE_TABLE_SQL)?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO breach_report (
                    entity_name, state, entity_type, individuals_affected,
                    submission_date, breach_type, breach_location,
                    business_associate_present, web_description
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for record in records {
                stmt.execute(params![
                    record.entity_name,
                    record.state,
                    record.entity_type,
                    record.individuals_affected.map(|n| n as i64),
                    record.submission_date,
                    record.breach_type,
                    record.breach_location,
                    record.business_associate_present,
                    record.web_description,
                ])?;
            }
        }
        tx.execute_batch(CREATE_INDEX_SQL)?;
        tx.commit()?;

        info!(
            db_path = %self.db_path.display(),
            records = records.len(),
            "浏览数据库重建完成"
        );
        Ok(records.len())
    }
}
