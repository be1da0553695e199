//! Access module — appliance access toggles
//!
//! Simulates the appliance management API for console CLI, DCUI, SSH and
//! shell access. Each toggle is an HTTP resource supporting GET and PUT:
//! - /api/appliance/access/consolecli — `{"enabled": bool}`
//! - /api/appliance/access/dcui       — `{"enabled": bool}`
//! - /api/appliance/access/ssh        — `{"enabled": bool}`
//! - /api/appliance/access/shell      — `{"enabled": bool, "timeout": int}`

pub mod handler;
pub mod state;
pub mod types;

pub use handler::{Accessor, ToggleResource};
pub use state::AccessState;
pub use types::{
    Access, AccessSettings, ShellAccess, CONSOLE_CLI_PATH, DCUI_PATH, SHELL_PATH, SSH_PATH,
};

use crate::error::Result;
use crate::host::{Endpoint, EndpointRegistry};

/// Access toggle service of one simulated appliance
///
/// Cloning yields a handle onto the same settings.
#[derive(Debug, Clone, Default)]
pub struct AccessService {
    state: AccessState,
}

impl AccessService {
    /// Create a service seeded with `initial` settings
    pub fn new(initial: AccessSettings) -> Self {
        Self {
            state: AccessState::new(initial),
        }
    }

    /// Current value of every toggle
    pub async fn snapshot(&self) -> AccessSettings {
        self.state.snapshot().await
    }

    /// Put every toggle back to disabled with no shell timeout
    pub async fn reset(&self) {
        self.state.replace(AccessSettings::default()).await;
    }
}

impl Endpoint for AccessService {
    fn name(&self) -> &'static str {
        "appliance-access"
    }

    fn register(&self, registry: &mut dyn EndpointRegistry) -> Result<()> {
        let console_cli = ToggleResource::new(
            "console-cli",
            Accessor::<Access> {
                get: |s| s.console_cli,
                set: |s, v| s.console_cli = v,
            },
            self.state.clone(),
        );
        let dcui = ToggleResource::new(
            "dcui",
            Accessor::<Access> {
                get: |s| s.dcui,
                set: |s, v| s.dcui = v,
            },
            self.state.clone(),
        );
        let ssh = ToggleResource::new(
            "ssh",
            Accessor::<Access> {
                get: |s| s.ssh,
                set: |s, v| s.ssh = v,
            },
            self.state.clone(),
        );
        let shell = ToggleResource::new(
            "shell",
            Accessor::<ShellAccess> {
                get: |s| s.shell,
                set: |s, v| s.shell = v,
            },
            self.state.clone(),
        );

        registry.register_handler(CONSOLE_CLI_PATH, console_cli.into_method_router())?;
        registry.register_handler(DCUI_PATH, dcui.into_method_router())?;
        registry.register_handler(SSH_PATH, ssh.into_method_router())?;
        registry.register_handler(SHELL_PATH, shell.into_method_router())?;
        Ok(())
    }
}
