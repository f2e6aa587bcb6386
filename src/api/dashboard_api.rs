// ==========================================
// 医疗数据泄露分析系统 - 看板 API
// ==========================================
// 职责: 封装过滤引擎与汇总引擎,提供看板聚合查询
// 红线: 过滤必须先于汇总,所有视图共享同一份过滤结果
// 架构: API 层 → Engine 层 (FilterEngine/SummaryEngine) → RecordStore
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::breach::{BreachRecord, ImportReport};
use crate::domain::criteria::FilterCriteria;
use crate::domain::summary::{DashboardResponse, FilterOptions, SummaryView};
use crate::engine::filter::FilterEngine;
use crate::engine::summary::SummaryEngine;
use crate::perf::PerfGuard;
use crate::store::RecordStore;

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 职责：
/// 1. 过滤选项查询（年份/州/泄露类型）
/// 2. 六视图聚合查询（单次过滤,六路汇总）
/// 3. 过滤明细与导入报告查询
pub struct DashboardApi {
    /// 内存记录仓库（启动时一次性加载）
    store: Arc<RecordStore>,
    /// 过滤引擎（无状态）
    filter_engine: FilterEngine,
    /// 汇总引擎（无状态）
    summary_engine: SummaryEngine,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - store: 记录仓库
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            filter_engine: FilterEngine::new(),
            summary_engine: SummaryEngine::new(),
        }
    }

    // ==========================================
    // 过滤选项查询接口
    // ==========================================

    /// 查询可用过滤选项
    ///
    /// # 返回
    /// - Ok(FilterOptions): 年份降序 + 州/泄露类型按首次出现顺序
    pub fn get_filter_options(&self) -> ApiResult<FilterOptions> {
        Ok(self.store.filter_options())
    }

    // ==========================================
    // 看板聚合查询接口
    // ==========================================

    /// 查询看板全量聚合（六个视图 + 记录数）
    ///
    /// # 参数
    /// - criteria: 过滤条件（年份必填,州/泄露类型可选）
    ///
    /// # 返回
    /// - Ok(DashboardResponse): 六视图聚合结果
    /// - Err(ApiError): 参数错误
    pub fn get_dashboard(&self, criteria: &FilterCriteria) -> ApiResult<DashboardResponse> {
        validate_criteria(criteria)?;
        let _perf = PerfGuard::new("get_dashboard");

        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self.summary_engine.build_dashboard(&filtered, criteria))
    }

    /// 查询过滤后的明细记录
    ///
    /// # 参数
    /// - criteria: 过滤条件
    ///
    /// # 返回
    /// - Ok(Vec<BreachRecord>): 保持原始顺序的过滤结果
    pub fn list_filtered_records(&self, criteria: &FilterCriteria) -> ApiResult<Vec<BreachRecord>> {
        validate_criteria(criteria)?;
        Ok(self.filter_engine.apply(self.store.records(), criteria))
    }

    // ==========================================
    // 单视图查询接口
    // ==========================================

    /// 各州泄露数量 (柱状图)
    pub fn get_state_summary(&self, criteria: &FilterCriteria) -> ApiResult<SummaryView> {
        validate_criteria(criteria)?;
        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self.summary_engine.breaches_by_state(&filtered, criteria.year))
    }

    /// 泄露类型分布 (饼图)
    pub fn get_breach_type_summary(&self, criteria: &FilterCriteria) -> ApiResult<SummaryView> {
        validate_criteria(criteria)?;
        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self.summary_engine.breach_types(&filtered, criteria.year))
    }

    /// 受影响人数时间趋势 (折线图)
    pub fn get_affected_trend(&self, criteria: &FilterCriteria) -> ApiResult<SummaryView> {
        validate_criteria(criteria)?;
        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self
            .summary_engine
            .affected_over_time(&filtered, criteria.year))
    }

    /// 泄露信息位置分布 (柱状图)
    pub fn get_location_summary(&self, criteria: &FilterCriteria) -> ApiResult<SummaryView> {
        validate_criteria(criteria)?;
        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self
            .summary_engine
            .breach_locations(&filtered, criteria.year))
    }

    /// 报告提交月度趋势 (折线图)
    pub fn get_monthly_trend(&self, criteria: &FilterCriteria) -> ApiResult<SummaryView> {
        validate_criteria(criteria)?;
        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self.summary_engine.monthly_trend(&filtered, criteria.year))
    }

    /// 实体类型报告占比 (饼图)
    pub fn get_entity_type_summary(&self, criteria: &FilterCriteria) -> ApiResult<SummaryView> {
        validate_criteria(criteria)?;
        let filtered = self.filter_engine.apply(self.store.records(), criteria);
        Ok(self.summary_engine.entity_types(&filtered, criteria.year))
    }

    // ==========================================
    // 导入报告查询接口
    // ==========================================

    /// 查询数据加载报告
    pub fn get_import_reports(&self) -> ApiResult<Vec<ImportReport>> {
        Ok(self.store.import_reports().to_vec())
    }
}

/// 校验过滤条件
fn validate_criteria(criteria: &FilterCriteria) -> ApiResult<()> {
    if criteria.year <= 0 {
        return Err(ApiError::InvalidInput("年份必须为正整数".to_string()));
    }
    Ok(())
}
