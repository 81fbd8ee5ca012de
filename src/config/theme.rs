//! `[theme]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the initial theme comes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Read the preference from the environment (default).
    #[default]
    System,
    /// Always report `light`.
    Light,
    /// Always report `dark`.
    Dark,
}

/// `[theme]` section in parlandim.toml - theme preference settings.
///
/// # Example
/// ```toml
/// [theme]
/// storage = ".parlandim/storage.json"
/// detector = "system"   # system | light | dark
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// Key-value file the toggled theme is persisted to (relative to root).
    #[serde(default = "defaults::theme::storage")]
    #[educe(Default = defaults::theme::storage())]
    pub storage: PathBuf,

    /// Source of the initial theme.
    #[serde(default = "defaults::theme::detector")]
    #[educe(Default = defaults::theme::detector())]
    pub detector: DetectorKind,
}
