//! Runtime configuration.
//!
//! The crate has no CLI or environment surface of its own; hosts build a
//! [`Config`] directly or deserialize one from whatever format they carry
//! their settings in.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::AccessMode;

/// Assembly options for [`crate::state::AppState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Artificial delay added to every storage call, in milliseconds.
    /// Zero disables the simulation; demo wiring uses a few hundred to
    /// feel like a network round trip.
    pub simulated_latency_ms: u64,
    /// How apartment-scoped lookups treat the caller. Defaults to
    /// [`AccessMode::Compat`], the reference behaviour.
    pub access_mode: AccessMode,
    /// When set, sessions persist to this JSON file instead of process
    /// memory.
    pub session_file: Option<PathBuf>,
}

impl Config {
    /// Demo preset: noticeable simulated latency, compat access mode.
    pub fn demo() -> Self {
        Self {
            simulated_latency_ms: 300,
            ..Self::default()
        }
    }

    /// The simulated latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn defaults_disable_latency_and_keep_compat_mode() {
        let config = Config::default();
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.access_mode, AccessMode::Compat);
        assert_eq!(config.session_file, None);
    }

    #[test]
    fn partial_documents_deserialize_over_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "accessMode": "strict" }"#).expect("config parses");
        assert_eq!(config.access_mode, AccessMode::Strict);
        assert_eq!(config.simulated_latency_ms, 0);
    }
}
