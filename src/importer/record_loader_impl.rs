// ==========================================
// 医疗数据泄露分析系统 - 数据集加载器实现
// ==========================================
// 职责: 整合加载流程,从文件到记录集合
// 流程: 解析 → 表头校验 → 字段映射
// 红线: 任一行映射失败即整体失败,不允许半量数据进入看板
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::record_loader_trait::{
    BreachRecordLoader, FieldMapper, LoadedDataset,
};
use crate::domain::breach::ImportReport;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// BreachRecordLoaderImpl - 数据集加载器实现
// ==========================================
pub struct BreachRecordLoaderImpl {
    file_parser: UniversalFileParser,
    field_mapper: Box<dyn FieldMapper>,
}

impl BreachRecordLoaderImpl {
    /// 创建默认加载器（通用解析器 + 标准字段映射）
    pub fn new() -> Self {
        Self {
            file_parser: UniversalFileParser,
            field_mapper: Box::new(FieldMapperImpl),
        }
    }

    /// 同步加载核心（应用启动路径无异步运行时时直接调用）
    pub fn load_file(&self, file_path: &Path) -> ImportResult<LoadedDataset> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        info!(batch_id = %batch_id, file = %file_name, "开始加载泄露事件数据集");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let table = self.file_parser.parse(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        info!(
            total_rows = table.total_rows,
            skipped_blank = table.skipped_blank,
            "文件解析完成"
        );

        // === 步骤 2: 表头校验 ===
        debug!("步骤 2: 表头校验");
        self.field_mapper.validate_headers(&table.headers).map_err(|e| {
            error!(error = %e, "表头校验失败");
            e
        })?;

        // === 步骤 3: 字段映射 ===
        debug!("步骤 3: 字段映射");
        let mut records = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let record = self.field_mapper.map_to_breach_record(row).map_err(|e| {
                error!(row_number = row.row_number, error = %e, "字段映射失败");
                e
            })?;
            records.push(record);
        }

        let elapsed = start_time.elapsed();
        let report = ImportReport {
            batch_id: batch_id.clone(),
            file_name,
            total_rows: table.total_rows,
            loaded: records.len(),
            skipped_blank: table.skipped_blank,
            elapsed_ms: elapsed.as_millis() as u64,
            loaded_at: Utc::now(),
        };

        info!(
            batch_id = %batch_id,
            loaded = report.loaded,
            skipped_blank = report.skipped_blank,
            elapsed_ms = report.elapsed_ms,
            "数据集加载完成"
        );

        Ok(LoadedDataset { records, report })
    }
}

#[async_trait::async_trait]
impl BreachRecordLoader for BreachRecordLoaderImpl {
    #[instrument(skip(self, file_path))]
    async fn load<P: AsRef<Path> + Send>(&self, file_path: P) -> ImportResult<LoadedDataset> {
        self.load_file(file_path.as_ref())
    }

    async fn load_many<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<LoadedDataset>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量加载数据集文件");

        let load_tasks = file_paths.iter().map(|path| self.load(path.as_ref()));
        let results = join_all(load_tasks).await;

        // 任一文件失败则整体失败
        let datasets: ImportResult<Vec<LoadedDataset>> = results.into_iter().collect();
        let datasets = datasets?;

        info!(
            total = datasets.len(),
            records = datasets.iter().map(|d| d.records.len()).sum::<usize>(),
            "批量加载完成"
        );

        Ok(datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::ImportError;
    use std::io::Write;

    fn temp_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    const FULL_HEADER: &str = "Name of Covered Entity,State,Covered Entity Type,Individuals Affected,Breach Submission Date,Type of Breach,Location of Breached Information,Business Associate Present,Web Description";

    #[test]
    fn test_load_file_基本流程() {
        let file = temp_csv(&[
            FULL_HEADER,
            "Alpha Clinic,CA,Healthcare Provider,500,03/15/2023,Theft,Laptop,No,",
            "Beta Health,NY,Health Plan,1200,06/01/2023,Hacking/IT Incident,Network Server,Yes,",
        ]);

        let loader = BreachRecordLoaderImpl::new();
        let dataset = loader.load_file(file.path()).unwrap();

        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.report.loaded, 2);
        assert_eq!(dataset.report.total_rows, 2);
        assert_eq!(dataset.records[0].state, Some("CA".to_string()));
    }

    #[test]
    fn test_load_file_缺少必需列() {
        let file = temp_csv(&["Name of Covered Entity,State", "Alpha Clinic,CA"]);

        let loader = BreachRecordLoaderImpl::new();
        let result = loader.load_file(file.path());
        assert!(matches!(result, Err(ImportError::MissingColumn(_))));
    }

    #[test]
    fn test_load_file_坏日期整体失败() {
        let file = temp_csv(&[
            FULL_HEADER,
            "Alpha Clinic,CA,Healthcare Provider,500,03/15/2023,Theft,Laptop,No,",
            "Beta Health,NY,Health Plan,1200,not-a-date,Theft,Laptop,No,",
        ]);

        let loader = BreachRecordLoaderImpl::new();
        let result = loader.load_file(file.path());
        match result {
            Err(ImportError::DateFormatError { row, .. }) => assert_eq!(row, 2),
            other => panic!("期望日期格式错误, 实际: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_many_全部成功() {
        let f1 = temp_csv(&[
            FULL_HEADER,
            "Alpha Clinic,CA,Healthcare Provider,500,03/15/2023,Theft,Laptop,No,",
        ]);
        let f2 = temp_csv(&[
            FULL_HEADER,
            "Beta Health,NY,Health Plan,1200,06/01/2022,Theft,Paper/Films,No,",
        ]);

        let loader = BreachRecordLoaderImpl::new();
        let datasets = loader
            .load_many(vec![f1.path(), f2.path()])
            .await
            .unwrap();

        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].records[0].state, Some("CA".to_string()));
        assert_eq!(datasets[1].records[0].state, Some("NY".to_string()));
    }

    #[tokio::test]
    async fn test_load_many_单文件失败即整体失败() {
        let good = temp_csv(&[
            FULL_HEADER,
            "Alpha Clinic,CA,Healthcare Provider,500,03/15/2023,Theft,Laptop,No,",
        ]);

        let loader = BreachRecordLoaderImpl::new();
        let result = loader
            .load_many(vec![good.path(), Path::new("missing.csv")])
            .await;
        assert!(result.is_err());
    }
}
