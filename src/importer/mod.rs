// ==========================================
// 医疗数据泄露分析系统 - 导入层
// ==========================================
// 职责: 外部数据集加载,生成内部记录集合
// 支持: CSV, Excel
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod record_loader_impl;
pub mod record_loader_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use field_mapper::{CANONICAL_COLUMNS, DATE_FORMAT, REQUIRED_COLUMNS};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use record_loader_impl::BreachRecordLoaderImpl;

// 重导出 Trait 接口
pub use record_loader_trait::{
    BreachRecordLoader, FieldMapper, FileParser, LoadedDataset, ParsedTable, RawRow,
};
