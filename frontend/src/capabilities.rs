use serde::Serialize;

use crate::icons::IconTable;
use crate::motion::Motion;

/// Where the code is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Client,
    Server,
}

impl Runtime {
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Runtime {
        if web_sys::window().is_some() {
            Runtime::Client
        } else {
            Runtime::Server
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Runtime {
        Runtime::Server
    }
}

/// Snapshot of what the page can rely on, taken once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub runtime: Runtime,
    pub motion: Option<Motion>,
    pub icons: IconTable,
}

impl Capabilities {
    pub fn detect() -> Self {
        let capabilities = Capabilities {
            runtime: Runtime::detect(),
            motion: Motion::registered(),
            icons: IconTable::registered(),
        };
        tracing::debug!(
            runtime = ?capabilities.runtime,
            motion = capabilities.motion.is_some(),
            "capabilities detected"
        );
        capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn native_builds_detect_a_server_runtime_with_everything_registered() {
        let caps = Capabilities::detect();
        assert_eq!(caps.runtime, Runtime::Server);
        assert!(caps.motion.is_some());
        assert!(caps.icons.missing().is_empty());
    }
}
