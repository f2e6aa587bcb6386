// ==========================================
// 医疗数据泄露分析系统 - 数据集加载 Trait
// ==========================================
// 职责: 定义数据集加载接口（不包含实现）
// ==========================================

use crate::domain::breach::{BreachRecord, ImportReport};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawRow - 原始数据行
// ==========================================
// row_number 为 1 起始的数据行号（不含表头）,用于错误定位
#[derive(Debug, Clone)]
pub struct RawRow {
    pub row_number: usize,
    pub fields: HashMap<String, String>,
}

// ==========================================
// ParsedTable - 文件解析产物
// ==========================================
// 保留表头用于必需列校验; 空白行已剔除但计入统计
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    pub total_rows: usize,    // 文件数据行数（含空白行）
    pub skipped_blank: usize, // 跳过的空白行数
}

// ==========================================
// LoadedDataset - 单文件加载结果
// ==========================================
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<BreachRecord>,
    pub report: ImportReport,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格（表头 + 行记录）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(ParsedTable): 表头与行记录
    /// - Err: 文件读取错误、格式错误
    fn parse_table(&self, file_path: &Path) -> ImportResult<ParsedTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 校验表头包含全部必需列
    ///
    /// # 参数
    /// - headers: 解析出的表头
    ///
    /// # 返回
    /// - Err(MissingColumn): 缺少任一必需列
    fn validate_headers(&self, headers: &[String]) -> ImportResult<()>;

    /// 将原始行映射为 BreachRecord
    ///
    /// # 参数
    /// - row: 原始数据行（含行号）
    ///
    /// # 返回
    /// - Ok(BreachRecord): 映射成功
    /// - Err: 日期/数值类型转换错误（带行号）
    fn map_to_breach_record(&self, row: &RawRow) -> ImportResult<BreachRecord>;
}

// ==========================================
// BreachRecordLoader Trait
// ==========================================
// 用途: 数据集加载主接口
// 实现者: BreachRecordLoaderImpl
#[async_trait]
pub trait BreachRecordLoader: Send + Sync {
    /// 加载单个数据集文件（CSV 或 Excel）
    ///
    /// # 参数
    /// - file_path: 文件路径（.csv/.xlsx/.xls）
    ///
    /// # 返回
    /// - Ok(LoadedDataset): 记录集合 + 导入批次报告
    /// - Err: 文件读取/解析/映射错误
    ///
    /// # 加载流程（3个阶段）
    /// 1. 文件读取与解析
    /// 2. 表头必需列校验
    /// 3. 字段映射与类型转换
    async fn load<P: AsRef<Path> + Send>(&self, file_path: P) -> ImportResult<LoadedDataset>;

    /// 并发加载多个数据集文件
    ///
    /// # 参数
    /// - file_paths: 文件路径列表
    ///
    /// # 返回
    /// - Ok(Vec<LoadedDataset>): 每个文件的加载结果（与输入同序）
    /// - Err: 任一文件失败则整体失败（数据集必须完整）
    async fn load_many<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<LoadedDataset>>;
}
