// ==========================================
// 医疗数据泄露分析系统 - 泄露事件领域模型
// ==========================================
// 职责: 定义泄露事件记录与导入批次元信息
// 红线: 记录一经加载不可变,下游引擎只读
// ==========================================

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// BreachRecord - 泄露事件记录
// ==========================================
// 用途: 导入层写入,过滤/聚合引擎只读
// 对齐: HHS 公开披露数据集列结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachRecord {
    // ===== 报告主体 =====
    pub entity_name: Option<String>, // 受影响主体名称
    pub state: Option<String>,       // 州代码（两位缩写）
    pub entity_type: Option<String>, // 主体类型（Healthcare Provider / Health Plan ...）

    // ===== 事件信息 =====
    pub individuals_affected: Option<u64>, // 受影响人数（可缺失）
    pub submission_date: NaiveDate,        // 报告提交日期（源格式 MM/DD/YYYY,必填）
    pub breach_type: Option<String>,       // 泄露类型（Hacking/IT Incident / Theft ...）
    pub breach_location: Option<String>,   // 泄露信息载体（Email / Network Server ...）

    // ===== 附加信息 =====
    pub business_associate_present: Option<String>, // 是否涉及业务伙伴
    pub web_description: Option<String>,            // 官网事件描述
}

impl BreachRecord {
    /// 提交年份（过滤主键维度）
    pub fn submission_year(&self) -> i32 {
        self.submission_date.year()
    }

    /// 提交月份归一到当月一日（月度趋势分桶）
    pub fn submission_month(&self) -> NaiveDate {
        let d = self.submission_date;
        NaiveDate::from_ymd_opt(d.year(), d.month(), 1)
            .unwrap_or(d)
    }
}

// ==========================================
// ImportReport - 导入批次报告
// ==========================================
// 用途: 记录一次数据集加载的元信息,供看板展示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub batch_id: String,              // 批次 ID（UUID）
    pub file_name: String,             // 源文件名
    pub total_rows: usize,             // 文件数据行数（不含表头）
    pub loaded: usize,                 // 成功加载行数
    pub skipped_blank: usize,          // 跳过的空白行数
    pub elapsed_ms: u64,               // 加载耗时（毫秒）
    pub loaded_at: DateTime<Utc>,      // 加载时间
}
