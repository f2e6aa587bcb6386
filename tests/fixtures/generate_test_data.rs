// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成8个测试数据集CSV文件 (HHS 泄露报告列结构)
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs::File;

// CSV 表头（与 HHS 公开泄露报告列名一致）
const CSV_HEADER: &[&str] = &[
    "Name of Covered Entity",
    "State",
    "Covered Entity Type",
    "Individuals Affected",
    "Breach Submission Date",
    "Type of Breach",
    "Location of Breached Information",
    "Business Associate Present",
    "Web Description",
];

const STATES: &[&str] = &["CA", "TX", "NY", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];

const ENTITY_TYPES: &[&str] = &[
    "Healthcare Provider",
    "Health Plan",
    "Business Associate",
    "Healthcare Clearing House",
];

const BREACH_TYPES: &[&str] = &[
    "Hacking/IT Incident",
    "Theft",
    "Unauthorized Access/Disclosure",
    "Loss",
    "Improper Disposal",
];

const LOCATIONS: &[&str] = &[
    "Network Server",
    "Email",
    "Laptop",
    "Paper/Films",
    "Electronic Medical Record",
];

// 泄露报告记录结构
#[derive(Clone)]
struct BreachReportRow {
    entity_name: String,
    state: String,
    entity_type: String,
    individuals_affected: String,
    submission_date: String,
    breach_type: String,
    breach_location: String,
    business_associate_present: String,
    web_description: String,
}

impl BreachReportRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.entity_name.clone(),
            self.state.clone(),
            self.entity_type.clone(),
            self.individuals_affected.clone(),
            self.submission_date.clone(),
            self.breach_type.clone(),
            self.breach_location.clone(),
            self.business_associate_present.clone(),
            self.web_description.clone(),
        ]
    }
}

// 生成正常泄露报告记录（确定性,便于断言）
fn generate_normal_row(index: usize) -> BreachReportRow {
    let year = 2022 + (index % 2) as i32;
    let month = (index % 12) + 1;
    let day = (index % 28) + 1;

    BreachReportRow {
        entity_name: format!("Covered Entity {:04}", index + 1),
        state: STATES[index % STATES.len()].to_string(),
        entity_type: ENTITY_TYPES[index % ENTITY_TYPES.len()].to_string(),
        individuals_affected: format!("{}", 500 + (index % 40) * 125),
        submission_date: format!("{:02}/{:02}/{}", month, day, year),
        breach_type: BREACH_TYPES[index % BREACH_TYPES.len()].to_string(),
        breach_location: LOCATIONS[index % LOCATIONS.len()].to_string(),
        business_associate_present: if index % 3 == 0 { "Yes" } else { "No" }.to_string(),
        web_description: "".to_string(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");

    // 1. 生成正常数据 (100条)
    generate_normal_data()?;

    // 2. 生成大数据集 (1000条)
    generate_large_dataset()?;

    // 3. 生成可选字段缺失数据
    generate_missing_optional_fields()?;

    // 4. 生成日期格式错误数据
    generate_invalid_dates()?;

    // 5. 生成人数字段错误数据
    generate_invalid_affected()?;

    // 6. 生成含空行数据
    generate_blank_rows()?;

    // 7. 生成缺少必需列数据
    generate_missing_required_column()?;

    // 8. 生成边界情况数据
    generate_edge_cases()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_normal_data() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/01_normal_data.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for i in 0..100 {
        let row = generate_normal_row(i);
        wtr.write_record(&row.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 01_normal_data.csv (100条)");
    Ok(())
}

fn generate_large_dataset() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/02_large_dataset.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for i in 0..1000 {
        let row = generate_normal_row(i + 10000); // 避免与其他数据集冲突
        wtr.write_record(&row.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 02_large_dataset.csv (1000条)");
    Ok(())
}

fn generate_missing_optional_fields() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/03_missing_optional_fields.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 缺失州（计入 Unknown 分类）
    for i in 0..3 {
        let mut row = generate_normal_row(i + 20000);
        row.state = "".to_string();
        wtr.write_record(&row.to_row())?;
    }

    // 缺失泄露类型
    for i in 0..3 {
        let mut row = generate_normal_row(i + 20003);
        row.breach_type = "".to_string();
        wtr.write_record(&row.to_row())?;
    }

    // 缺失受影响人数（求和视图按零计入,日期保留）
    for i in 0..3 {
        let mut row = generate_normal_row(i + 20006);
        row.individuals_affected = "".to_string();
        wtr.write_record(&row.to_row())?;
    }

    // 缺失实体类型
    for i in 0..3 {
        let mut row = generate_normal_row(i + 20009);
        row.entity_type = "".to_string();
        wtr.write_record(&row.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 03_missing_optional_fields.csv (12条，可选字段缺失)");
    Ok(())
}

fn generate_invalid_dates() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/04_invalid_dates.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 前5条正常
    for i in 0..5 {
        let row = generate_normal_row(i + 30000);
        wtr.write_record(&row.to_row())?;
    }

    // 日期格式错误（整体加载必须失败）
    let mut row = generate_normal_row(30005);
    row.submission_date = "2023-03-05".to_string();
    wtr.write_record(&row.to_row())?;

    let mut row = generate_normal_row(30006);
    row.submission_date = "13/45/2023".to_string();
    wtr.write_record(&row.to_row())?;

    let mut row = generate_normal_row(30007);
    row.submission_date = "".to_string();
    wtr.write_record(&row.to_row())?;

    wtr.flush()?;
    println!("✓ 生成 04_invalid_dates.csv (8条，含3条坏日期)");
    Ok(())
}

fn generate_invalid_affected() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/05_invalid_affected.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 前5条正常
    for i in 0..5 {
        let row = generate_normal_row(i + 40000);
        wtr.write_record(&row.to_row())?;
    }

    // 人数非数字
    let mut row = generate_normal_row(40005);
    row.individuals_affected = "NOT_A_NUMBER".to_string();
    wtr.write_record(&row.to_row())?;

    // 人数为负
    let mut row = generate_normal_row(40006);
    row.individuals_affected = "-500".to_string();
    wtr.write_record(&row.to_row())?;

    // 人数带小数部分
    let mut row = generate_normal_row(40007);
    row.individuals_affected = "500.5".to_string();
    wtr.write_record(&row.to_row())?;

    wtr.flush()?;
    println!("✓ 生成 05_invalid_affected.csv (8条，含3条坏人数)");
    Ok(())
}

fn generate_blank_rows() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/06_blank_rows.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    let blank: Vec<String> = CSV_HEADER.iter().map(|_| String::new()).collect();

    // 数据行与空行交错（空行应被跳过并计数）
    for i in 0..5 {
        let row = generate_normal_row(i + 50000);
        wtr.write_record(&row.to_row())?;
        wtr.write_record(&blank)?;
    }

    wtr.flush()?;
    println!("✓ 生成 06_blank_rows.csv (5条数据 + 5条空行)");
    Ok(())
}

fn generate_missing_required_column() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/07_missing_required_column.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // 表头缺少 State 列（表头校验必须失败）
    let header: Vec<&str> = CSV_HEADER
        .iter()
        .copied()
        .filter(|c| *c != "State")
        .collect();
    wtr.write_record(&header)?;

    for i in 0..3 {
        let row = generate_normal_row(i + 60000);
        let cells: Vec<String> = row
            .to_row()
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| *idx != 1)
            .map(|(_, v)| v)
            .collect();
        wtr.write_record(&cells)?;
    }

    wtr.flush()?;
    println!("✓ 生成 07_missing_required_column.csv (3条，表头缺 State)");
    Ok(())
}

fn generate_edge_cases() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/08_edge_cases.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    // 千分位逗号人数
    let mut row = generate_normal_row(70000);
    row.individuals_affected = "1,500".to_string();
    wtr.write_record(&row.to_row())?;

    // 浮点整数人数（部分导出工具会写成 1500.0）
    let mut row = generate_normal_row(70001);
    row.individuals_affected = "1500.0".to_string();
    wtr.write_record(&row.to_row())?;

    // 多值泄露类型（整体作为一个标签）
    let mut row = generate_normal_row(70002);
    row.breach_type = "Theft, Loss".to_string();
    wtr.write_record(&row.to_row())?;

    // 年初/年末日期
    let mut row = generate_normal_row(70003);
    row.submission_date = "01/01/2023".to_string();
    wtr.write_record(&row.to_row())?;

    let mut row = generate_normal_row(70004);
    row.submission_date = "12/31/2023".to_string();
    wtr.write_record(&row.to_row())?;

    // 长网页描述（含逗号与引号,验证 CSV 转义）
    let mut row = generate_normal_row(70005);
    row.web_description =
        "A laptop was stolen from an employee's vehicle, affecting \"multiple\" patients."
            .to_string();
    wtr.write_record(&row.to_row())?;

    // 正常数据（对照组）
    for i in 0..3 {
        let row = generate_normal_row(i + 70006);
        wtr.write_record(&row.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 08_edge_cases.csv (9条，边界情况)");
    Ok(())
}
