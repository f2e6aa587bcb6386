use rusqlite::Connection;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

static SQL_TRACE_ENABLED: AtomicBool = AtomicBool::new(false);
static SLOW_SQL_MS: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static GUARD_DEPTH: Cell<u32> = Cell::new(0);
    static STMT_COUNT: Cell<u64> = Cell::new(0);
    static SLOW_STMT_COUNT: Cell<u64> = Cell::new(0);
}

/// 性能统计 Guard：记录 elapsed_ms + SQL 语句数 + 慢 SQL 数
///
/// 使用方式：
/// ```ignore
/// let _perf = breach_dashboard::perf::PerfGuard::new("get_dashboard");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    stmt_start: u64,
    slow_stmt_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        GUARD_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            op,
            start: Instant::now(),
            stmt_start: STMT_COUNT.with(|c| c.get()),
            slow_stmt_start: SLOW_STMT_COUNT.with(|c| c.get()),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        let sql_count = STMT_COUNT.with(|c| c.get()).saturating_sub(self.stmt_start);
        let slow_sql_count = SLOW_STMT_COUNT
            .with(|c| c.get())
            .saturating_sub(self.slow_stmt_start);

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            sql_count,
            slow_sql_count,
            "done"
        );

        GUARD_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// 安装 SQLite 语句 trace/profile（用于 SQL 计数 + 慢查询日志）
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭（可通过环境变量开启）
/// - `BREACH_DASHBOARD_PERF_SQL=1` 强制开启
/// - `BREACH_DASHBOARD_SLOW_SQL_MS=50` 配置慢 SQL 阈值（毫秒）
pub fn install_sqlite_tracing(conn: &mut Connection) {
    let enabled = match std::env::var("BREACH_DASHBOARD_PERF_SQL") {
        Ok(v) => env_flag_enabled(&v),
        Err(_) => cfg!(debug_assertions),
    };

    SQL_TRACE_ENABLED.store(enabled, Ordering::Relaxed);

    if !enabled {
        // 显式清理，避免复用连接导致残留 callback
        conn.trace(None);
        conn.profile(None);
        return;
    }

    let slow_ms = std::env::var("BREACH_DASHBOARD_SLOW_SQL_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
    SLOW_SQL_MS.store(slow_ms, Ordering::Relaxed);

    conn.trace(Some(stmt_trace_callback));
    conn.profile(Some(stmt_profile_callback));
}

fn stmt_trace_callback(_sql: &str) {
    if !SQL_TRACE_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    if GUARD_DEPTH.with(|d| d.get() == 0) {
        return;
    }
    STMT_COUNT.with(|c| c.set(c.get().saturating_add(1)));
}

fn stmt_profile_callback(sql: &str, duration: Duration) {
    if !SQL_TRACE_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let ms = duration.as_millis() as u64;
    let threshold = SLOW_SQL_MS.load(Ordering::Relaxed);
    if threshold == 0 || ms < threshold {
        return;
    }

    tracing::warn!(
        target: "slow_sql",
        duration_ms = ms,
        sql = %truncate_sql(sql, 420),
        "slow sql"
    );
    if GUARD_DEPTH.with(|d| d.get() > 0) {
        SLOW_STMT_COUNT.with(|c| c.set(c.get().saturating_add(1)));
    }
}

fn env_flag_enabled(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn truncate_sql(sql: &str, max_len: usize) -> String {
    let s = sql.trim().replace('\n', " ");
    if s.len() <= max_len {
        return s;
    }
    format!("{}…", &s[..max_len])
}
