// ==========================================
// 医疗数据泄露分析系统 - 记录存储层
// ==========================================
// 职责: 持有加载完成的泄露事件记录,供引擎只读访问
// 红线: 显式构造显式注入,不做进程级隐藏缓存
// ==========================================

use crate::domain::breach::{BreachRecord, ImportReport};
use crate::domain::summary::FilterOptions;
use crate::importer::record_loader_trait::LoadedDataset;
use std::collections::HashSet;

// ==========================================
// RecordStore - 记录存储
// ==========================================
// 一次会话持有全量数据集,加载后不可变
pub struct RecordStore {
    records: Vec<BreachRecord>,
    reports: Vec<ImportReport>,
}

impl RecordStore {
    /// 从记录集合构造（无批次报告,测试与引擎直连场景）
    pub fn new(records: Vec<BreachRecord>) -> Self {
        Self {
            records,
            reports: Vec::new(),
        }
    }

    /// 从加载结果构造,多文件按输入顺序拼接
    pub fn from_datasets(datasets: Vec<LoadedDataset>) -> Self {
        let mut records = Vec::new();
        let mut reports = Vec::new();
        for dataset in datasets {
            records.extend(dataset.records);
            reports.push(dataset.report);
        }
        Self { records, reports }
    }

    /// 全量记录（文件顺序）
    pub fn records(&self) -> &[BreachRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 导入批次报告（每个源文件一条）
    pub fn import_reports(&self) -> &[ImportReport] {
        &self.reports
    }

    /// 数据集中出现过的年份,降序
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .records
            .iter()
            .map(|r| r.submission_year())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }

    /// 过滤器候选项: 年份降序,州与泄露类型按数据集首见顺序
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            years: self.available_years(),
            states: first_seen_distinct(self.records.iter().filter_map(|r| r.state.as_deref())),
            breach_types: first_seen_distinct(
                self.records.iter().filter_map(|r| r.breach_type.as_deref()),
            ),
        }
    }
}

/// 保序去重
fn first_seen_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, state: Option<&str>, breach_type: Option<&str>) -> BreachRecord {
        BreachRecord {
            entity_name: None,
            state: state.map(String::from),
            entity_type: None,
            individuals_affected: None,
            submission_date: NaiveDate::parse_from_str(date, "%m/%d/%Y").unwrap(),
            breach_type: breach_type.map(String::from),
            breach_location: None,
            business_associate_present: None,
            web_description: None,
        }
    }

    #[test]
    fn test_available_years_降序去重() {
        let store = RecordStore::new(vec![
            record("01/01/2021", Some("CA"), None),
            record("05/05/2023", Some("NY"), None),
            record("07/07/2021", Some("TX"), None),
        ]);
        assert_eq!(store.available_years(), vec![2023, 2021]);
    }

    #[test]
    fn test_filter_options_首见顺序() {
        let store = RecordStore::new(vec![
            record("01/01/2022", Some("NY"), Some("Theft")),
            record("02/01/2022", Some("CA"), Some("Hacking/IT Incident")),
            record("03/01/2022", Some("NY"), Some("Theft")),
            record("04/01/2022", None, None),
        ]);
        let options = store.filter_options();
        assert_eq!(options.states, vec!["NY", "CA"]);
        assert_eq!(
            options.breach_types,
            vec!["Theft", "Hacking/IT Incident"]
        );
        assert_eq!(options.years, vec![2022]);
    }

    #[test]
    fn test_空数据集() {
        let store = RecordStore::new(vec![]);
        assert!(store.is_empty());
        assert!(store.available_years().is_empty());
        let options = store.filter_options();
        assert!(options.years.is_empty());
        assert!(options.states.is_empty());
    }
}
