// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::breach::ImportReport;
use crate::domain::types::ExplorerStatus;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use breach_dashboard::i18n::t;
/// let msg = t("dashboard.no_data");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use breach_dashboard::i18n::t_with_args;
/// let msg = t_with_args("import.missing_column", &[("column", "State")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 浏览服务状态的用户可读描述
pub fn explorer_status_message(status: &ExplorerStatus) -> String {
    match status {
        ExplorerStatus::NotStarted => t("explorer.not_ready"),
        ExplorerStatus::Running { pid } => {
            t_with_args("explorer.running", &[("pid", &pid.to_string())])
        }
        ExplorerStatus::Exited { .. } => t("explorer.exited"),
        ExplorerStatus::Failed { reason } => {
            t_with_args("explorer.launch_failed", &[("reason", reason)])
        }
    }
}

/// 数据集加载结果的用户可读描述
pub fn import_summary_message(report: &ImportReport) -> String {
    t_with_args(
        "import.load_success",
        &[("count", &report.loaded.to_string())],
    )
}
