// ==========================================
// 医疗数据泄露分析系统 - 字段映射器实现
// ==========================================
// 职责: 源字段 → BreachRecord 映射 + 类型转换
// 对齐: HHS 公开披露数据集列名
// ==========================================

use crate::domain::breach::BreachRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_loader_trait::{FieldMapper as FieldMapperTrait, RawRow};
use chrono::NaiveDate;
use std::collections::HashMap;

// ===== 数据集列名（与源文件表头一致）=====
pub const COL_ENTITY_NAME: &str = "Name of Covered Entity";
pub const COL_STATE: &str = "State";
pub const COL_ENTITY_TYPE: &str = "Covered Entity Type";
pub const COL_AFFECTED: &str = "Individuals Affected";
pub const COL_SUBMISSION_DATE: &str = "Breach Submission Date";
pub const COL_BREACH_TYPE: &str = "Type of Breach";
pub const COL_LOCATION: &str = "Location of Breached Information";
pub const COL_BA_PRESENT: &str = "Business Associate Present";
pub const COL_WEB_DESC: &str = "Web Description";

/// 导出与建库使用的规范列顺序
pub const CANONICAL_COLUMNS: [&str; 9] = [
    COL_ENTITY_NAME,
    COL_STATE,
    COL_ENTITY_TYPE,
    COL_AFFECTED,
    COL_SUBMISSION_DATE,
    COL_BREACH_TYPE,
    COL_LOCATION,
    COL_BA_PRESENT,
    COL_WEB_DESC,
];

/// 表头必须包含的列（缺失即加载失败）
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_SUBMISSION_DATE,
    COL_STATE,
    COL_BREACH_TYPE,
    COL_AFFECTED,
    COL_LOCATION,
    COL_ENTITY_TYPE,
];

/// 提交日期源格式
pub const DATE_FORMAT: &str = "%m/%d/%Y";

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn validate_headers(&self, headers: &[String]) -> ImportResult<()> {
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(ImportError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }

    fn map_to_breach_record(&self, row: &RawRow) -> ImportResult<BreachRecord> {
        Ok(BreachRecord {
            // 报告主体
            entity_name: self.get_string(&row.fields, COL_ENTITY_NAME),
            state: self.get_string(&row.fields, COL_STATE),
            entity_type: self.get_string(&row.fields, COL_ENTITY_TYPE),

            // 事件信息
            individuals_affected: self.parse_affected(&row.fields, row.row_number)?,
            submission_date: self.parse_submission_date(&row.fields, row.row_number)?,
            breach_type: self.get_string(&row.fields, COL_BREACH_TYPE),
            breach_location: self.get_string(&row.fields, COL_LOCATION),

            // 附加信息
            business_associate_present: self.get_string(&row.fields, COL_BA_PRESENT),
            web_description: self.get_string(&row.fields, COL_WEB_DESC),
        })
    }
}

impl FieldMapper {
    /// 提取字符串字段（空白视为缺失）
    fn get_string(&self, fields: &HashMap<String, String>, key: &str) -> Option<String> {
        fields.get(key).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 解析提交日期（MM/DD/YYYY,必填）
    fn parse_submission_date(
        &self,
        fields: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<NaiveDate> {
        let value = self
            .get_string(fields, COL_SUBMISSION_DATE)
            .unwrap_or_default();
        NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| ImportError::DateFormatError {
            row: row_number,
            field: COL_SUBMISSION_DATE.to_string(),
            value,
        })
    }

    /// 解析受影响人数（可缺失,非负整数）
    ///
    /// 兼容千分位分隔符与整值浮点写法（"1,500" / "1500.0"）
    fn parse_affected(
        &self,
        fields: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<Option<u64>> {
        match self.get_string(fields, COL_AFFECTED) {
            None => Ok(None),
            Some(value) => {
                let normalized = value.replace(',', "");
                if let Ok(n) = normalized.parse::<u64>() {
                    return Ok(Some(n));
                }
                // 部分导出工具写成 "1500.0"
                if let Ok(f) = normalized.parse::<f64>() {
                    if f >= 0.0 && f.fract() == 0.0 {
                        return Ok(Some(f as u64));
                    }
                }
                Err(ImportError::TypeConversionError {
                    row: row_number,
                    field: COL_AFFECTED.to_string(),
                    message: format!("无法解析为非负整数: {}", value),
                })
            }
        }
    }
}
