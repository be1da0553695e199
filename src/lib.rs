//! Appliance Sim - appliance access management API simulator
//!
//! Appliance Sim stands in for the access settings slice of a virtualization
//! appliance's management API so clients can be tested without a real
//! appliance. Four toggles are simulated: console CLI, DCUI, SSH and shell
//! (with a session timeout).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  Simulator (host)                     │
//! │  - owns the TCP listener                              │
//! │  - collects handlers via EndpointRegistry             │
//! │  - /health, CORS, request tracing                     │
//! │                        │                              │
//! │  ┌─────────────────────▼──────────────────────────┐   │
//! │  │              AccessService (Endpoint)           │   │
//! │  │  consolecli │ dcui │ ssh │ shell                │   │
//! │  │         ToggleResource<T> + Accessor            │   │
//! │  │                    │                            │   │
//! │  │        AccessState (per-instance RwLock)        │   │
//! │  └────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`access`]: access toggle resources and their state
//! - [`host`]: endpoint registration, JSON helpers, simulator server
//! - [`api`]: application router assembly
//! - [`config`]: configuration management

pub mod access;
pub mod api;
pub mod config;
pub mod error;
pub mod host;

pub use access::{AccessService, AccessSettings};
pub use config::SimulatorConfig;
pub use error::{Error, Result};
pub use host::{Simulator, SimulatorBuilder};
