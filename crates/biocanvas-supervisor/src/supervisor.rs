//! Child-process supervisor for the API server.
//!
//! One supervisor owns at most one child process for its lifetime. Single
//! instance per port is an assumption, not enforced by locking.

use std::net::{TcpStream, ToSocketAddrs};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

use biocanvas_common::config::{ApiConfig, SupervisorConfig};
use biocanvas_common::BiocanvasError;

/// Lifecycle of the supervised process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    Stopped,
    Starting,
    Running,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Port {0} is already bound by another process")]
    PortOccupied(u16),

    #[error("Supervisor is already managing a process")]
    AlreadyRunning,

    #[error("Failed to spawn API process: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("API process failed its health check after {attempts} attempts")]
    HealthCheckTimeout { attempts: u32 },
}

/// The command used to launch the API server.
#[derive(Debug, Clone)]
pub struct ApiCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ApiCommand {
    pub fn new<P: Into<PathBuf>>(program: P, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// The `biocanvas-web` binary installed next to the current executable.
    pub fn sibling_api_binary() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "executable has no parent dir")
        })?;
        Ok(Self::new(dir.join("biocanvas-web"), Vec::new()))
    }
}

/// Launches the API server, polls /health until ready, and tears it down.
pub struct Supervisor {
    command: ApiCommand,
    host: String,
    port: u16,
    poll_interval: Duration,
    max_attempts: u32,
    grace_period: Duration,
    state: SupervisorState,
    child: Option<Child>,
    client: reqwest::Client,
}

impl Supervisor {
    pub fn new(
        api: &ApiConfig,
        config: &SupervisorConfig,
        command: ApiCommand,
    ) -> Result<Self, BiocanvasError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .map_err(|e| BiocanvasError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            command,
            host: api.host.clone(),
            port: api.port,
            poll_interval: Duration::from_millis(config.health_poll_interval_ms),
            max_attempts: config.max_health_attempts,
            grace_period: Duration::from_millis(config.stop_grace_period_ms),
            state: SupervisorState::Stopped,
            child: None,
            client,
        })
    }

    pub fn state(&self) -> SupervisorState {
        self.state
    }

    pub fn child_pid(&self) -> Option<u32> {
        self.child.as_ref().map(|c| c.id())
    }

    /// Reap an exited child and reflect it in the state.
    pub fn is_running(&mut self) -> bool {
        if self.state != SupervisorState::Running {
            return false;
        }
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(None) => return true,
                Ok(Some(status)) => {
                    warn!("API process exited on its own: {}", status);
                }
                Err(e) => {
                    warn!("Failed to poll API process: {}", e);
                }
            }
        }
        self.child = None;
        self.state = SupervisorState::Stopped;
        false
    }

    /// Spawn the API process and poll its health endpoint until it answers.
    /// Fails fast without spawning when the port is already taken; kills the
    /// child and reports failure when the retries are exhausted.
    pub async fn start(&mut self) -> Result<(), StartupError> {
        if self.state != SupervisorState::Stopped {
            return Err(StartupError::AlreadyRunning);
        }

        if self.port_occupied() {
            return Err(StartupError::PortOccupied(self.port));
        }

        info!("Launching API process: {:?}", self.command.program);
        let child = Command::new(&self.command.program)
            .args(&self.command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.child = Some(child);
        self.state = SupervisorState::Starting;

        let url = format!("http://{}:{}/health", self.host, self.port);
        for attempt in 1..=self.max_attempts {
            tokio::time::sleep(self.poll_interval).await;
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("API healthy after {} attempt(s)", attempt);
                    self.state = SupervisorState::Running;
                    return Ok(());
                }
                Ok(response) => {
                    debug!("Health attempt {}/{}: status {}", attempt, self.max_attempts, response.status());
                }
                Err(e) => {
                    debug!("Health attempt {}/{}: {}", attempt, self.max_attempts, e);
                }
            }
        }

        warn!("API failed to become healthy, killing child process");
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        self.state = SupervisorState::Stopped;
        Err(StartupError::HealthCheckTimeout { attempts: self.max_attempts })
    }

    /// Terminate the child gracefully, escalating to a forced kill after the
    /// grace period. Idempotent; always ends in Stopped.
    pub async fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!("API process already exited: {}", status);
                }
                _ => {
                    terminate(&child);
                    let deadline = Instant::now() + self.grace_period;
                    loop {
                        match child.try_wait() {
                            Ok(Some(status)) => {
                                info!("API process exited: {}", status);
                                break;
                            }
                            Ok(None) if Instant::now() >= deadline => {
                                warn!("Grace period elapsed, forcing kill");
                                let _ = child.kill();
                                let _ = child.wait();
                                break;
                            }
                            Ok(None) => {
                                tokio::time::sleep(Duration::from_millis(50)).await;
                            }
                            Err(e) => {
                                warn!("Failed to poll API process: {}, forcing kill", e);
                                let _ = child.kill();
                                let _ = child.wait();
                                break;
                            }
                        }
                    }
                }
            }
        }
        self.state = SupervisorState::Stopped;
    }

    fn port_occupied(&self) -> bool {
        let addr = format!("{}:{}", self.host, self.port);
        let resolved = match addr.to_socket_addrs() {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!("Could not resolve {}, skipping occupancy check: {}", addr, e);
                return false;
            }
        };
        // A hostname may resolve to several addresses; any live listener
        // counts as occupied.
        for addr in resolved {
            if TcpStream::connect_timeout(&addr, Duration::from_millis(250)).is_ok() {
                return true;
            }
        }
        false
    }
}

/// Ask the child to exit. SIGTERM on unix; elsewhere the caller escalates
/// straight to a forced kill after the grace period.
#[cfg(unix)]
fn terminate(child: &Child) {
    unsafe {
        libc::kill(child.id() as i32, libc::SIGTERM);
    }
}

#[cfg(not(unix))]
fn terminate(_child: &Child) {}
