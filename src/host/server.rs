//! Simulator server implementation

use crate::api::build_app;
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::host::Endpoint;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

/// Simulator server state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    /// Not listening
    Stopped,
    /// Listening and dispatching requests
    Running,
}

struct Running {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

/// Host dispatcher for one simulated appliance
///
/// Owns the listener socket and routes requests to the handlers its
/// endpoints registered.
pub struct Simulator {
    id: Uuid,
    config: ServerConfig,
    endpoints: Vec<Arc<dyn Endpoint>>,
    running: Mutex<Option<Running>>,
}

impl Simulator {
    /// Instance id, attached to every log line of this simulator
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get current state
    pub async fn state(&self) -> SimulatorState {
        if self.running.lock().await.is_some() {
            SimulatorState::Running
        } else {
            SimulatorState::Stopped
        }
    }

    /// Bound address while running
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.running.lock().await.as_ref().map(|r| r.local_addr)
    }

    /// Register all endpoints, bind the listener and start serving
    ///
    /// Returns the bound address, which differs from the configured one
    /// when port 0 is used.
    pub async fn start(&self) -> Result<SocketAddr> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return Err(Error::Server("Simulator already running".to_string()));
        }

        let app = build_app(&self.endpoints, &self.config.cors_origins)?;

        let listener =
            TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local_addr = listener.local_addr()?;

        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let span = tracing::info_span!("simulator", instance = %self.id);
        let task = tokio::spawn(
            async move {
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await
            }
            .instrument(span),
        );

        tracing::info!(
            instance = %self.id,
            addr = %local_addr,
            endpoints = ?self.endpoints.iter().map(|e| e.name()).collect::<Vec<_>>(),
            "Simulator listening"
        );

        *running = Some(Running {
            local_addr,
            shutdown,
            task,
        });
        Ok(local_addr)
    }

    /// Stop serving and wait for in-flight requests to finish
    ///
    /// Stopping a simulator that is not running is a no-op.
    pub async fn stop(&self) -> Result<()> {
        let Some(running) = self.running.lock().await.take() else {
            return Ok(());
        };

        tracing::info!(instance = %self.id, "Stopping simulator");
        let _ = running.shutdown.send(());
        running
            .task
            .await
            .map_err(|e| Error::Server(format!("Server task failed: {}", e)))??;

        tracing::info!(instance = %self.id, "Simulator stopped");
        Ok(())
    }
}

/// Builder for Simulator
pub struct SimulatorBuilder {
    config: ServerConfig,
    endpoints: Vec<Arc<dyn Endpoint>>,
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            endpoints: Vec::new(),
        }
    }

    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Add an endpoint; endpoints register in the order they are added
    pub fn endpoint(mut self, endpoint: impl Endpoint + 'static) -> Self {
        self.endpoints.push(Arc::new(endpoint));
        self
    }

    pub fn build(self) -> Simulator {
        Simulator {
            id: Uuid::new_v4(),
            config: self.config,
            endpoints: self.endpoints,
            running: Mutex::new(None),
        }
    }
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
