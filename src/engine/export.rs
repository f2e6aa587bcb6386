// ==========================================
// 医疗数据泄露分析系统 - 导出引擎
// ==========================================
// 职责: 过滤后子集序列化回 CSV
// 规则: 规范列顺序,始终写表头,日期 MM/DD/YYYY,缺失人数留空
// ==========================================

use crate::domain::breach::BreachRecord;
use crate::importer::field_mapper::{CANONICAL_COLUMNS, DATE_FORMAT};
use csv::Writer;

// ==========================================
// CsvExporter - CSV 导出引擎
// ==========================================
pub struct CsvExporter {
    // 无状态引擎,不需要注入依赖
}

impl CsvExporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 序列化为 CSV 文本（UTF-8,逗号分隔,含表头）
    ///
    /// 零记录时仅包含表头行
    pub fn export_to_string(&self, records: &[BreachRecord]) -> Result<String, csv::Error> {
        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(CANONICAL_COLUMNS)?;

        for record in records {
            writer.write_record(&[
                record.entity_name.clone().unwrap_or_default(),
                record.state.clone().unwrap_or_default(),
                record.entity_type.clone().unwrap_or_default(),
                record
                    .individuals_affected
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                record.submission_date.format(DATE_FORMAT).to_string(),
                record.breach_type.clone().unwrap_or_default(),
                record.breach_location.clone().unwrap_or_default(),
                record.business_associate_present.clone().unwrap_or_default(),
                record.web_description.clone().unwrap_or_default(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        // 写入内容均为 UTF-8 字符串
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// 约定的下载文件名
    pub fn export_file_name(&self, year: i32) -> String {
        format!("filtered_breach_data_{}.csv", year)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
