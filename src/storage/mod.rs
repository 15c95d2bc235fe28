use anyhow::Context;
use async_trait::async_trait;
use dioxus::logger::tracing::warn;

use crate::AppSettings;

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(not(target_arch = "wasm32"))]
type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
type AppStorage = browser_storage::IdbStorage;

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use std::path::PathBuf;
    use directories_next::ProjectDirs;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "N K", "storybot") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    let storage = AppStorage::new(base);
    Ok(storage)
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    let storage = AppStorage::new().await?;
    Ok(storage)
}

/// Loads stored settings, falling back to defaults on any problem.
pub async fn load_settings_or_default() -> AppSettings {
    let storage = match get_storage().await {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not get storage: {e:?}");
            return AppSettings::default();
        }
    };
    match storage.load_settings().await {
        Ok(Some(s)) => s,
        Ok(None) => AppSettings::default(),
        Err(e) => {
            warn!("Could not load settings: {e:?}");
            AppSettings::default()
        }
    }
}

/// Saves `settings` into `storage`, failing when no storage could be opened.
pub async fn save_settings_to<S: Storage>(
    storage: anyhow::Result<S>,
    settings: &AppSettings,
) -> anyhow::Result<()> {
    let storage = storage.context("no settings storage available")?;
    storage.save_settings(settings).await
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use anyhow::{anyhow, bail};

    use super::*;

    #[derive(Default)]
    struct MemoryStorage {
        saved: Rc<RefCell<Option<AppSettings>>>,
        read_only: bool,
    }

    #[async_trait(?Send)]
    impl Storage for MemoryStorage {
        async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()> {
            if self.read_only {
                bail!("read-only file system");
            }
            *self.saved.borrow_mut() = Some(settings.clone());
            Ok(())
        }

        async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>> {
            Ok(self.saved.borrow().clone())
        }
    }

    #[tokio::test]
    async fn saves_into_open_storage() {
        let storage = MemoryStorage::default();
        let saved = storage.saved.clone();
        let settings = AppSettings::default();
        save_settings_to(Ok(storage), &settings).await.unwrap();
        assert_eq!(*saved.borrow(), Some(settings));
    }

    #[tokio::test]
    async fn missing_storage_is_an_error() {
        let storage: anyhow::Result<MemoryStorage> = Err(anyhow!("no config dir"));
        let err = save_settings_to(storage, &AppSettings::default())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("no config dir"));
    }

    #[tokio::test]
    async fn failed_write_is_an_error() {
        let storage = MemoryStorage {
            read_only: true,
            ..Default::default()
        };
        let saved = storage.saved.clone();
        assert!(save_settings_to(Ok(storage), &AppSettings::default()).await.is_err());
        assert!(saved.borrow().is_none());
    }
}
