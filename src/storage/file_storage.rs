use std::path::PathBuf;
use tokio::fs;
use anyhow::Result;

use crate::AppSettings;

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.base.join("settings.json")
    }
}

#[async_trait::async_trait(?Send)]
impl super::Storage for FileStorage {
    async fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        fs::create_dir_all(&self.base).await?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(self.settings_path(), json).await?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        match fs::read_to_string(self.settings_path()).await {
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.load_settings().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saved_endpoint_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("config"));
        let settings = AppSettings {
            endpoint: "http://localhost:5000/generate".into(),
            ..Default::default()
        };

        storage.save_settings(&settings).await.unwrap();
        let loaded = storage.load_settings().await.unwrap();
        assert_eq!(loaded, Some(settings));
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{").await.unwrap();

        let storage = FileStorage::new(dir.path());
        assert!(storage.load_settings().await.is_err());
    }
}
