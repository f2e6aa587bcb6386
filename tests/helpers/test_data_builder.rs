// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use breach_dashboard::domain::BreachRecord;
use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

// ==========================================
// BreachRecord 构建器
// ==========================================

pub struct BreachRecordBuilder {
    entity_name: Option<String>,
    state: Option<String>,
    entity_type: Option<String>,
    individuals_affected: Option<u64>,
    submission_date: NaiveDate,
    breach_type: Option<String>,
    breach_location: Option<String>,
    business_associate_present: Option<String>,
    web_description: Option<String>,
}

impl BreachRecordBuilder {
    /// 默认记录: 2023-03-15 提交, CA 州, Healthcare Provider, Theft
    pub fn new(entity_name: &str) -> Self {
        Self {
            entity_name: Some(entity_name.to_string()),
            state: Some("CA".to_string()),
            entity_type: Some("Healthcare Provider".to_string()),
            individuals_affected: Some(500),
            submission_date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
            breach_type: Some("Theft".to_string()),
            breach_location: Some("Laptop".to_string()),
            business_associate_present: Some("No".to_string()),
            web_description: None,
        }
    }

    pub fn state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn no_state(mut self) -> Self {
        self.state = None;
        self
    }

    pub fn entity_type(mut self, entity_type: &str) -> Self {
        self.entity_type = Some(entity_type.to_string());
        self
    }

    pub fn no_entity_type(mut self) -> Self {
        self.entity_type = None;
        self
    }

    pub fn affected(mut self, count: u64) -> Self {
        self.individuals_affected = Some(count);
        self
    }

    pub fn no_affected(mut self) -> Self {
        self.individuals_affected = None;
        self
    }

    /// 提交日期, 格式 MM/DD/YYYY (与源数据一致)
    pub fn submitted(mut self, date: &str) -> Self {
        self.submission_date =
            NaiveDate::parse_from_str(date, "%m/%d/%Y").expect("测试日期格式应为 MM/DD/YYYY");
        self
    }

    pub fn breach_type(mut self, breach_type: &str) -> Self {
        self.breach_type = Some(breach_type.to_string());
        self
    }

    pub fn no_breach_type(mut self) -> Self {
        self.breach_type = None;
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.breach_location = Some(location.to_string());
        self
    }

    pub fn no_location(mut self) -> Self {
        self.breach_location = None;
        self
    }

    pub fn business_associate(mut self, flag: &str) -> Self {
        self.business_associate_present = Some(flag.to_string());
        self
    }

    pub fn web_description(mut self, text: &str) -> Self {
        self.web_description = Some(text.to_string());
        self
    }

    pub fn build(self) -> BreachRecord {
        BreachRecord {
            entity_name: self.entity_name,
            state: self.state,
            entity_type: self.entity_type,
            individuals_affected: self.individuals_affected,
            submission_date: self.submission_date,
            breach_type: self.breach_type,
            breach_location: self.breach_location,
            business_associate_present: self.business_associate_present,
            web_description: self.web_description,
        }
    }
}

// ==========================================
// 便捷函数
// ==========================================

/// 创建指定日期/州/类型的记录, 其余字段取构建器默认值
pub fn create_breach_record(
    entity_name: &str,
    date: &str,
    state: &str,
    breach_type: &str,
) -> BreachRecord {
    BreachRecordBuilder::new(entity_name)
        .submitted(date)
        .state(state)
        .breach_type(breach_type)
        .build()
}

// ==========================================
// CSV 测试文件
// ==========================================

/// 数据集表头(9列, 与 HHS 公开披露文件一致)
pub const HHS_HEADER: &str = "Name of Covered Entity,State,Covered Entity Type,Individuals Affected,Breach Submission Date,Type of Breach,Location of Breached Information,Business Associate Present,Web Description";

/// 将记录写成带表头的临时CSV文件
///
/// # 说明
/// 返回的 NamedTempFile 需要保持存活, 否则文件被删除
pub fn write_breach_csv(records: &[BreachRecord]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("无法创建临时CSV文件");
    writeln!(file, "{}", HHS_HEADER).expect("写表头失败");
    for record in records {
        writeln!(file, "{}", record_to_csv_row(record)).expect("写数据行失败");
    }
    file.flush().expect("刷新临时文件失败");
    file
}

/// 将原始行文本写成临时CSV文件(构造畸形输入用)
pub fn write_raw_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("无法创建临时CSV文件");
    for line in lines {
        writeln!(file, "{}", line).expect("写数据行失败");
    }
    file.flush().expect("刷新临时文件失败");
    file
}

/// 单条记录转CSV行, 缺失字段写成空串
pub fn record_to_csv_row(record: &BreachRecord) -> String {
    let fields = [
        record.entity_name.clone().unwrap_or_default(),
        record.state.clone().unwrap_or_default(),
        record.entity_type.clone().unwrap_or_default(),
        record
            .individuals_affected
            .map(|n| n.to_string())
            .unwrap_or_default(),
        record.submission_date.format("%m/%d/%Y").to_string(),
        record.breach_type.clone().unwrap_or_default(),
        record.breach_location.clone().unwrap_or_default(),
        record.business_associate_present.clone().unwrap_or_default(),
        record.web_description.clone().unwrap_or_default(),
    ];
    fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// 含逗号/引号/换行的字段加引号转义
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
