//! Per-instance access toggle state
//!
//! Every simulated appliance owns one `AccessState`. Handlers receive a
//! clone of it at construction time; there is no process-wide state.

use crate::access::types::AccessSettings;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared, lock-protected access settings of one appliance
#[derive(Debug, Clone, Default)]
pub struct AccessState {
    settings: Arc<RwLock<AccessSettings>>,
}

impl AccessState {
    /// Create state seeded with the given settings
    pub fn new(initial: AccessSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copy of all settings
    pub async fn snapshot(&self) -> AccessSettings {
        *self.settings.read().await
    }

    /// Read one value out of the settings under the read lock
    pub async fn read<T>(&self, get: impl FnOnce(&AccessSettings) -> T) -> T {
        let settings = self.settings.read().await;
        get(&settings)
    }

    /// Mutate the settings under the write lock
    pub async fn update(&self, set: impl FnOnce(&mut AccessSettings)) {
        let mut settings = self.settings.write().await;
        set(&mut settings);
    }

    /// Replace all settings at once
    pub async fn replace(&self, settings: AccessSettings) {
        *self.settings.write().await = settings;
    }
}
