// ==========================================
// 医疗数据泄露分析系统 - 过滤条件模型
// ==========================================
// 职责: 定义看板当前选区(年份/州/泄露类型)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// FilterCriteria - 过滤条件
// ==========================================
// 年份必选且唯一; 州与泄露类型为多选集合,空集合表示不限制。
// 每次交互重建,无独立身份。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub year: i32, // 提交年份（必选）

    /// 允许的州代码集合,空 = 不限制
    #[serde(default)]
    pub states: BTreeSet<String>,

    /// 允许的泄露类型集合,空 = 不限制
    #[serde(default)]
    pub breach_types: BTreeSet<String>,
}

impl FilterCriteria {
    /// 仅按年份过滤的条件
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            states: BTreeSet::new(),
            breach_types: BTreeSet::new(),
        }
    }

    /// 附加州限制
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    /// 附加泄露类型限制
    pub fn with_breach_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breach_types = types.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_year_空集合不限制() {
        let c = FilterCriteria::for_year(2023);
        assert_eq!(c.year, 2023);
        assert!(c.states.is_empty());
        assert!(c.breach_types.is_empty());
    }

    #[test]
    fn test_反序列化缺省集合() {
        // 前端只传年份时,集合字段取默认空集
        let c: FilterCriteria = serde_json::from_str(r#"{"year": 2022}"#).unwrap();
        assert_eq!(c, FilterCriteria::for_year(2022));
    }

    #[test]
    fn test_with_states_去重() {
        let c = FilterCriteria::for_year(2023).with_states(["CA", "NY", "CA"]);
        assert_eq!(c.states.len(), 2);
        assert!(c.states.contains("CA"));
    }
}
