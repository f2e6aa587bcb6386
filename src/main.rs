// ==========================================
// 医疗数据泄露分析系统 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 系统定位: 数据看板
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use breach_dashboard::app::AppState;
use breach_dashboard::config::AppConfig;

#[cfg(feature = "tauri-app")]
fn main() {
    use breach_dashboard::app::tauri_commands::*;

    // 初始化日志系统
    breach_dashboard::logging::init();

    tracing::info!("==================================================");
    tracing::info!("医疗数据泄露分析系统 - 数据看板");
    tracing::info!("系统版本: {}", breach_dashboard::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = AppConfig::from_env();
    tracing::info!("数据文件: {:?}", config.dataset_paths);

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::new(config)
        .expect("无法初始化AppState");

    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 看板相关命令 (4个)
            // ==========================================
            get_filter_options,
            get_dashboard,
            list_filtered_records,
            get_import_reports,

            // ==========================================
            // 导出相关命令 (1个)
            // ==========================================
            export_filtered_csv,

            // ==========================================
            // 浏览服务相关命令 (5个)
            // ==========================================
            launch_explorer,
            get_explorer_status,
            get_explorer_endpoint,
            wait_explorer_ready,
            shutdown_explorer,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    // 初始化日志系统
    breach_dashboard::logging::init();

    println!("==================================================");
    println!("医疗数据泄露分析系统 - 数据看板");
    println!("系统版本: {}", breach_dashboard::VERSION);
    println!("==================================================");
    println!();

    // 无 UI 模式: 加载数据并打印各年份记录数,验证数据管线可用
    let config = AppConfig::from_env();
    match AppState::new(config) {
        Ok(state) => {
            let options = state.store.filter_options();
            for report in state.store.import_reports() {
                println!(
                    "{}: {}",
                    report.file_name,
                    breach_dashboard::i18n::import_summary_message(report)
                );
            }
            println!("记录总数: {}", state.store.len());
            println!("可选年份: {:?}", options.years);
            println!("浏览服务地址: {}", state.explorer_api.endpoint());
            if let Ok(status) = state.explorer_api.status() {
                println!(
                    "浏览服务状态: {}",
                    breach_dashboard::i18n::explorer_status_message(&status)
                );
            }
            println!();
            println!("启用桌面端: cargo run --features tauri-app");
        }
        Err(e) => {
            eprintln!("初始化失败: {}", e);
            std::process::exit(1);
        }
    }
}
