// ==========================================
// 医疗数据泄露分析系统 - 汇总引擎
// ==========================================
// 职责: 从过滤后子集派生六个图表就绪视图
// 输入: 过滤后的记录子集 + 选中年份
// 输出: SummaryView / DashboardResponse
// 红线: 无状态引擎,所有方法都是纯函数,空输入产出空视图
// ==========================================

use crate::domain::breach::BreachRecord;
use crate::domain::criteria::FilterCriteria;
use crate::domain::summary::{
    CategoryCount, DashboardResponse, SummaryData, SummaryView, TimePoint,
};
use crate::domain::types::ChartKind;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// 分类字段缺失时计入的标签（保证计数视图总和等于子集大小）
pub const UNKNOWN_LABEL: &str = "Unknown";

// ==========================================
// SummaryEngine - 汇总引擎
// ==========================================
pub struct SummaryEngine {
    // 无状态引擎,不需要注入依赖
}

impl SummaryEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 六个视图
    // ==========================================

    /// 视图 1: 各州泄露事件数（计数降序,柱状图）
    pub fn breaches_by_state(&self, records: &[BreachRecord], year: i32) -> SummaryView {
        SummaryView {
            title: format!("Number of Breaches by State ({})", year),
            chart_kind: ChartKind::Bar,
            data: SummaryData::Categories {
                entries: self.count_by(records, |r| r.state.as_deref()),
            },
        }
    }

    /// 视图 2: 泄露类型分布（计数降序,饼图）
    pub fn breach_types(&self, records: &[BreachRecord], year: i32) -> SummaryView {
        SummaryView {
            title: format!("Distribution of Breach Types ({})", year),
            chart_kind: ChartKind::Pie,
            data: SummaryData::Categories {
                entries: self.count_by(records, |r| r.breach_type.as_deref()),
            },
        }
    }

    /// 视图 3: 受影响人数随时间变化（按提交日期求和,日期升序,折线图）
    ///
    /// 人数缺失按 0 计入,日期仍出现在序列中
    pub fn affected_over_time(&self, records: &[BreachRecord], year: i32) -> SummaryView {
        let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in records {
            *buckets.entry(record.submission_date).or_insert(0) +=
                record.individuals_affected.unwrap_or(0);
        }
        SummaryView {
            title: format!("Trend of Individuals Affected Over Time ({})", year),
            chart_kind: ChartKind::Line,
            data: SummaryData::TimeSeries {
                points: buckets
                    .into_iter()
                    .map(|(date, value)| TimePoint { date, value })
                    .collect(),
            },
        }
    }

    /// 视图 4: 泄露信息载体分布（计数降序,柱状图）
    pub fn breach_locations(&self, records: &[BreachRecord], year: i32) -> SummaryView {
        SummaryView {
            title: format!("Location of Breached Information ({})", year),
            chart_kind: ChartKind::Bar,
            data: SummaryData::Categories {
                entries: self.count_by(records, |r| r.breach_location.as_deref()),
            },
        }
    }

    /// 视图 5: 月度提交趋势（按自然月计数,月份升序,折线图）
    pub fn monthly_trend(&self, records: &[BreachRecord], year: i32) -> SummaryView {
        let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in records {
            *buckets.entry(record.submission_month()).or_insert(0) += 1;
        }
        SummaryView {
            title: format!("Trend of Breach Submissions Over Time ({})", year),
            chart_kind: ChartKind::Line,
            data: SummaryData::TimeSeries {
                points: buckets
                    .into_iter()
                    .map(|(date, value)| TimePoint { date, value })
                    .collect(),
            },
        }
    }

    /// 视图 6: 主体类型占比（计数降序,饼图）
    pub fn entity_types(&self, records: &[BreachRecord], year: i32) -> SummaryView {
        SummaryView {
            title: format!("Percentage of Reports by Entity Type ({})", year),
            chart_kind: ChartKind::Pie,
            data: SummaryData::Categories {
                entries: self.count_by(records, |r| r.entity_type.as_deref()),
            },
        }
    }

    // ==========================================
    // 整体看板
    // ==========================================

    /// 六视图一次构建
    ///
    /// # 参数
    /// - `filtered`: 已过滤的记录子集
    /// - `criteria`: 过滤条件（标题年份来源）
    pub fn build_dashboard(
        &self,
        filtered: &[BreachRecord],
        criteria: &FilterCriteria,
    ) -> DashboardResponse {
        let year = criteria.year;
        DashboardResponse {
            year,
            record_count: filtered.len(),
            breaches_by_state: self.breaches_by_state(filtered, year),
            breach_types: self.breach_types(filtered, year),
            affected_over_time: self.affected_over_time(filtered, year),
            breach_locations: self.breach_locations(filtered, year),
            monthly_trend: self.monthly_trend(filtered, year),
            entity_types: self.entity_types(filtered, year),
        }
    }

    // ==========================================
    // 分类计数
    // ==========================================

    /// 按标签计数,计数降序,计数相同保持首见顺序
    ///
    /// 标签缺失计入 UNKNOWN_LABEL,保证总和等于输入记录数
    fn count_by<'a, F>(&self, records: &'a [BreachRecord], key_fn: F) -> Vec<CategoryCount>
    where
        F: Fn(&'a BreachRecord) -> Option<&'a str>,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<CategoryCount> = Vec::new();

        for record in records {
            let label = key_fn(record).unwrap_or(UNKNOWN_LABEL);
            match index.get(label) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(label, entries.len());
                    entries.push(CategoryCount {
                        label: label.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // 稳定排序: 计数相同的标签保持首见顺序
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}
