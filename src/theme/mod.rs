//! Theme preference: a two-valued display mode.
//!
//! # Architecture
//!
//! ```text
//! ThemeDetector ──on_change──► ThemeStore ──set("theme")──► KeyValueStorage
//!  (fixed/env/signal)           │     ▲                       (memory/file)
//!                               │     └── toggle()
//!                               └──subscribe──► observers
//! ```
//!
//! The detector is the sole authority for the initial mode. Only `toggle()`
//! writes to storage; nothing reads the stored value back at mount.

mod detector;
mod storage;
mod store;
mod subscription;

pub use detector::{EnvDetector, FixedDetector, SignalDetector, ThemeDetector, detector_for};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::ThemeStore;
pub use subscription::{Callback, Subscription};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Storage key the toggled mode is persisted under.
pub const STORAGE_KEY: &str = "theme";

/// Display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`, expected `light` or `dark`")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("light".parse(), Ok(ThemeMode::Light));
        assert_eq!(" Dark ".parse(), Ok(ThemeMode::Dark));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ParseThemeError("sepia".into()))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }
}
