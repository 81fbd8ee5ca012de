//! `parlandim theme`: show or toggle the persisted theme.

use crate::{
    cli::ThemeAction,
    config::SiteConfig,
    log,
    theme::{FileStorage, KeyValueStorage, STORAGE_KEY, ThemeStore, detector_for},
};
use anyhow::{Result, bail};
use std::sync::Arc;

pub fn run_theme(config: &SiteConfig, action: ThemeAction) -> Result<()> {
    let storage = Arc::new(FileStorage::new(&config.theme.storage));
    let detector = detector_for(config.theme.detector);
    let store = ThemeStore::mount(detector.as_ref(), storage.clone());

    // every configured detector reports synchronously
    if !store.is_resolved() {
        bail!("theme detector did not report a preference");
    }

    match action {
        ThemeAction::Show => {
            let persisted = storage.get(STORAGE_KEY)?;
            log!("theme"; "storage: {}", storage.path().display());
            println!("theme: {}", store.theme());
            println!("persisted: {}", persisted.as_deref().unwrap_or("-"));
        }
        ThemeAction::Toggle => {
            let mode = store.toggle()?;
            println!("{mode}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir, detector: &str) -> SiteConfig {
        let mut config =
            SiteConfig::from_str(&format!("[theme]\ndetector = \"{detector}\"")).unwrap();
        config.theme.storage = dir.path().join("storage.json");
        config
    }

    #[test]
    fn test_toggle_writes_storage_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "dark");

        run_theme(&config, ThemeAction::Toggle).unwrap();
        let storage = FileStorage::new(&config.theme.storage);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("light"));

        // detector is the sole authority at mount, so the second run also starts from dark
        run_theme(&config, ThemeAction::Toggle).unwrap();
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_show_does_not_write() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "light");

        run_theme(&config, ThemeAction::Show).unwrap();
        assert!(!config.theme.storage.exists());
    }
}
