//! Bus call configuration
//!
//! Tunable parameters for the invocation layer. Values can be overridden
//! from the daemon's JSON config file; the defaults match what the
//! gateway ships with.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Invocation-layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusConfig {
    // --- Timing ---
    /// Per-call timeout (milliseconds)
    pub call_timeout_ms: u32,

    // --- Service names ---
    /// Service exposing the `info` method
    pub system_service: String,
    /// ESP gateway service exposing `on`/`off`/`list`
    pub esp_service: String,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 3000,
            system_service: "system".to_owned(),
            esp_service: "commesp".to_owned(),
        }
    }
}

impl BusConfig {
    /// Per-call timeout as a [`Duration`].
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.call_timeout_ms))
    }
}
