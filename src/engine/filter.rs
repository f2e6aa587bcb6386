// ==========================================
// 医疗数据泄露分析系统 - 过滤引擎
// ==========================================
// 职责: 按选区条件筛选泄露事件记录
// 输入: 全量记录 + 过滤条件
// 输出: 过滤后子集（保持输入顺序）
// 红线: 纯函数,无错误通道,空结果不是错误
// ==========================================

use crate::domain::breach::BreachRecord;
use crate::domain::criteria::FilterCriteria;

// ==========================================
// FilterEngine - 过滤引擎
// ==========================================
pub struct FilterEngine {
    // 无状态引擎,不需要注入依赖
}

impl FilterEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 应用过滤条件
    ///
    /// 过滤键（依次应用）:
    /// 1) 提交年份等于 criteria.year（必选）
    /// 2) criteria.states 非空时,州必须在集合内
    /// 3) criteria.breach_types 非空时,泄露类型必须在集合内
    ///
    /// 字段缺失的记录不匹配任何非空集合; 输出保持输入顺序。
    ///
    /// # 参数
    /// - `records`: 全量记录
    /// - `criteria`: 过滤条件
    ///
    /// # 返回
    /// 满足全部条件的记录子集
    pub fn apply(&self, records: &[BreachRecord], criteria: &FilterCriteria) -> Vec<BreachRecord> {
        records
            .iter()
            .filter(|r| self.matches(r, criteria))
            .cloned()
            .collect()
    }

    /// 判断单条记录是否满足条件
    pub fn matches(&self, record: &BreachRecord, criteria: &FilterCriteria) -> bool {
        // 1. 年份等值（必选）
        if record.submission_year() != criteria.year {
            return false;
        }

        // 2. 州集合（空集不限制）
        if !criteria.states.is_empty() {
            match &record.state {
                Some(state) if criteria.states.contains(state) => {}
                _ => return false,
            }
        }

        // 3. 泄露类型集合（空集不限制）
        if !criteria.breach_types.is_empty() {
            match &record.breach_type {
                Some(bt) if criteria.breach_types.contains(bt) => {}
                _ => return false,
            }
        }

        true
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
