//! Access toggle wire types
//!
//! Each appliance access method is a small JSON object. Missing fields
//! decode to their defaults, so `{}` is accepted as a PUT body.

use serde::{Deserialize, Serialize};

/// Console CLI resource path
pub const CONSOLE_CLI_PATH: &str = "/api/appliance/access/consolecli";

/// DCUI resource path
pub const DCUI_PATH: &str = "/api/appliance/access/dcui";

/// SSH resource path
pub const SSH_PATH: &str = "/api/appliance/access/ssh";

/// Shell resource path
pub const SHELL_PATH: &str = "/api/appliance/access/shell";

/// Plain on/off access toggle (console CLI, DCUI, SSH)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Access {
    pub enabled: bool,
}

impl Access {
    pub fn enabled(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// Shell access toggle with its session timeout in seconds
///
/// The timeout is stored as given. Nothing in the simulator enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellAccess {
    pub enabled: bool,
    pub timeout: i64,
}

/// All access toggles of one simulated appliance
///
/// Doubles as the `[access]` table of the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessSettings {
    pub console_cli: Access,
    pub dcui: Access,
    pub ssh: Access,
    pub shell: ShellAccess,
}
