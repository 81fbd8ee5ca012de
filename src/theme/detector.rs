//! Sources of the initial theme mode.

use super::{
    ThemeMode,
    subscription::{Callback, Listeners, Subscription},
};
use crate::config::DetectorKind;
use parking_lot::Mutex;
use std::sync::Arc;

/// External source reporting the preferred theme.
///
/// # Contract
///
/// `callback` is invoked **at least once** after `on_change` is called,
/// possibly synchronously before `on_change` returns. Implementations that
/// can change over time invoke it again on every change until the returned
/// [`Subscription`] is dropped.
pub trait ThemeDetector {
    fn on_change(&self, callback: Callback) -> Subscription;
}

/// Reports a fixed mode once, synchronously.
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub ThemeMode);

impl ThemeDetector for FixedDetector {
    fn on_change(&self, callback: Callback) -> Subscription {
        callback(self.0);
        Subscription::noop()
    }
}

/// Manually driven detector: every [`emit`](Self::emit) is broadcast to
/// all subscribers.
///
/// Subscribers registered after an emission immediately receive the last
/// emitted mode. Before the first emission nothing fires, which models a
/// preference that has not resolved yet.
#[derive(Clone, Default)]
pub struct SignalDetector {
    listeners: Listeners,
    last: Arc<Mutex<Option<ThemeMode>>>,
}

impl SignalDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, mode: ThemeMode) {
        *self.last.lock() = Some(mode);
        self.listeners.notify(mode);
    }
}

impl ThemeDetector for SignalDetector {
    fn on_change(&self, callback: Callback) -> Subscription {
        let subscription = self.listeners.add(callback.clone());
        let last = *self.last.lock();
        if let Some(mode) = last {
            callback(mode);
        }
        subscription
    }
}

/// Reads the system preference from the environment once.
///
/// Checked in order:
/// 1. `PARLANDIM_THEME` = `light` | `dark`
/// 2. `COLORFGBG` = `"<fg>;<bg>"`, a light background (7 or 15) means light
///
/// Falls back to dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvDetector;

impl EnvDetector {
    pub const THEME_VAR: &'static str = "PARLANDIM_THEME";
    pub const COLORFGBG_VAR: &'static str = "COLORFGBG";

    pub fn detect() -> ThemeMode {
        let theme = std::env::var(Self::THEME_VAR).ok();
        let colorfgbg = std::env::var(Self::COLORFGBG_VAR).ok();
        detect_from(theme.as_deref(), colorfgbg.as_deref())
    }
}

impl ThemeDetector for EnvDetector {
    fn on_change(&self, callback: Callback) -> Subscription {
        callback(Self::detect());
        Subscription::noop()
    }
}

fn detect_from(theme: Option<&str>, colorfgbg: Option<&str>) -> ThemeMode {
    if let Some(mode) = theme.and_then(|value| value.parse::<ThemeMode>().ok()) {
        return mode;
    }

    // rxvt style: "15;0" or "0;default;15", background is the last field
    match colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
    {
        Some(7 | 15) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

/// Build the detector selected in `[theme].detector`.
pub fn detector_for(kind: DetectorKind) -> Box<dyn ThemeDetector> {
    match kind {
        DetectorKind::System => Box::new(EnvDetector),
        DetectorKind::Light => Box::new(FixedDetector(ThemeMode::Light)),
        DetectorKind::Dark => Box::new(FixedDetector(ThemeMode::Dark)),
    }
}
