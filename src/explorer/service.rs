// ==========================================
// 医疗数据泄露分析系统 - 浏览服务进程管理
// ==========================================
// 职责: 启动/探测/停止外部数据浏览服务 (默认 datasette)
// 红线: 启动失败不抛错,以 Failed 状态对外暴露,不拖垮看板主流程
// ==========================================

use crate::domain::types::ExplorerStatus;
use crate::explorer::error::{ExplorerError, ExplorerResult};
use std::net::{SocketAddr, TcpStream};
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 端口探测单次超时
const PROBE_TIMEOUT: Duration = Duration::from_millis(200);

/// 就绪轮询间隔
const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 进程内部状态 (持有 Child 句柄,只能在锁内访问)
enum ProcState {
    NotStarted,
    Running(Child),
    Exited(Option<i32>),
    Failed(String),
}

// ==========================================
// ExplorerService - 浏览服务进程管理器
// ==========================================
pub struct ExplorerService {
    command: String,
    args: Vec<String>,
    port: u16,
    state: Mutex<ProcState>,
}

impl ExplorerService {
    /// 创建进程管理器 (不启动进程)
    ///
    /// # 参数
    /// - command: 可执行文件名或路径
    /// - args: 启动参数
    /// - port: 浏览服务监听端口
    pub fn new(command: impl Into<String>, args: Vec<String>, port: u16) -> Self {
        Self {
            command: command.into(),
            args,
            port,
            state: Mutex::new(ProcState::NotStarted),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// 浏览服务对外地址
    pub fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// 获取状态锁
    fn lock_state(&self) -> ExplorerResult<MutexGuard<'_, ProcState>> {
        self.state
            .lock()
            .map_err(|e| ExplorerError::LockError(e.to_string()))
    }

    /// 启动浏览服务进程
    ///
    /// 进程仍在运行时重复调用不会再次启动。
    ///
    /// # 返回
    /// 启动后的进程状态 (启动失败返回 Failed,不返回 Err)
    pub fn launch(&self) -> ExplorerStatus {
        let mut state = match self.lock_state() {
            Ok(guard) => guard,
            Err(e) => return ExplorerStatus::Failed { reason: e.to_string() },
        };

        if let ExplorerStatus::Running { pid } = refresh_locked(&mut state) {
            debug!(pid, "浏览服务已在运行,跳过重复启动");
            return ExplorerStatus::Running { pid };
        }

        match Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                let pid = child.id();
                info!(
                    command = %self.command,
                    port = self.port,
                    pid,
                    "浏览服务进程已启动"
                );
                *state = ProcState::Running(child);
                ExplorerStatus::Running { pid }
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(command = %self.command, error = %reason, "浏览服务进程启动失败");
                *state = ProcState::Failed(reason.clone());
                ExplorerStatus::Failed { reason }
            }
        }
    }

    /// 查询进程当前状态 (顺带收割已退出的子进程)
    pub fn status(&self) -> ExplorerStatus {
        match self.lock_state() {
            Ok(mut guard) => refresh_locked(&mut guard),
            Err(e) => ExplorerStatus::Failed { reason: e.to_string() },
        }
    }

    /// 探测监听端口是否可连接
    pub fn probe(&self) -> bool {
        let addr = SocketAddr::from(([127, 0, 0, 1], self.port));
        TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok()
    }

    /// 轮询等待浏览服务就绪
    ///
    /// # 返回
    /// - Ok(()): 端口可连接
    /// - Err(ProcessExited/SpawnError): 进程在就绪前死亡
    /// - Err(ReadyTimeout): 超时仍未就绪
    pub async fn wait_until_ready(&self, timeout: Duration) -> ExplorerResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.status() {
                ExplorerStatus::Running { .. } => {}
                ExplorerStatus::Exited { code } => {
                    return Err(ExplorerError::ProcessExited { code });
                }
                ExplorerStatus::Failed { reason } => {
                    return Err(ExplorerError::SpawnError(reason));
                }
                ExplorerStatus::NotStarted => {
                    return Err(ExplorerError::SpawnError("浏览服务尚未启动".to_string()));
                }
            }

            if self.probe() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ExplorerError::ReadyTimeout {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }

    /// 停止浏览服务进程并收割
    pub fn shutdown(&self) -> ExplorerStatus {
        let mut state = match self.lock_state() {
            Ok(guard) => guard,
            Err(e) => return ExplorerStatus::Failed { reason: e.to_string() },
        };

        if let ProcState::Running(child) = &mut *state {
            let pid = child.id();
            let _ = child.kill();
            let next = match child.wait() {
                Ok(exit) => {
                    info!(pid, code = ?exit.code(), "浏览服务进程已停止");
                    ProcState::Exited(exit.code())
                }
                Err(e) => {
                    warn!(pid, error = %e, "浏览服务进程收割失败");
                    ProcState::Failed(e.to_string())
                }
            };
            *state = next;
        }
        snapshot(&state)
    }
}

impl Drop for ExplorerService {
    fn drop(&mut self) {
        // 进程跟随管理器生命周期,避免残留孤儿进程
        if let Ok(mut state) = self.state.lock() {
            if let ProcState::Running(child) = &mut *state {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

/// 收割已退出的子进程并返回对外状态 (须持锁调用)
fn refresh_locked(state: &mut ProcState) -> ExplorerStatus {
    let transition = match state {
        ProcState::Running(child) => match child.try_wait() {
            Ok(Some(exit)) => Some(ProcState::Exited(exit.code())),
            Ok(None) => None,
            Err(e) => Some(ProcState::Failed(e.to_string())),
        },
        _ => None,
    };
    if let Some(next) = transition {
        *state = next;
    }
    snapshot(state)
}

fn snapshot(state: &ProcState) -> ExplorerStatus {
    match state {
        ProcState::NotStarted => ExplorerStatus::NotStarted,
        ProcState::Running(child) => ExplorerStatus::Running { pid: child.id() },
        ProcState::Exited(code) => ExplorerStatus::Exited { code: *code },
        ProcState::Failed(reason) => ExplorerStatus::Failed {
            reason: reason.clone(),
        },
    }
}
