// ==========================================
// 医疗数据泄露分析系统 - 导出 API
// ==========================================
// 职责: 过滤结果的 CSV 导出,生成可直接下载的文件内容
// 红线: 导出内容必须与看板过滤结果一致 (同一引擎,同一条件)
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::criteria::FilterCriteria;
use crate::engine::export::CsvExporter;
use crate::engine::filter::FilterEngine;
use crate::store::RecordStore;

/// CSV 导出产物（交给前端触发下载）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvExport {
    /// 下载文件名,含过滤年份
    pub file_name: String,
    /// MIME 类型
    pub mime_type: String,
    /// CSV 文本内容 (表头 + 过滤后数据行)
    pub content: String,
}

// ==========================================
// ExportApi - 导出 API
// ==========================================
pub struct ExportApi {
    store: Arc<RecordStore>,
    filter_engine: FilterEngine,
    exporter: CsvExporter,
}

impl ExportApi {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            filter_engine: FilterEngine::new(),
            exporter: CsvExporter::new(),
        }
    }

    /// 导出过滤后的记录为 CSV
    ///
    /// # 参数
    /// - criteria: 过滤条件（与看板查询共用）
    ///
    /// # 返回
    /// - Ok(CsvExport): 文件名 + MIME + CSV 内容（空结果仅含表头）
    /// - Err(ApiError): 参数错误或序列化失败
    pub fn export_filtered(&self, criteria: &FilterCriteria) -> ApiResult<CsvExport> {
        if criteria.year <= 0 {
            return Err(ApiError::InvalidInput("年份必须为正整数".to_string()));
        }

        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        let content = self.exporter.export_to_string(&filtered)?;

        Ok(CsvExport {
            file_name: self.exporter.export_file_name(criteria.year),
            mime_type: "text/csv".to_string(),
            content,
        })
    }
}
