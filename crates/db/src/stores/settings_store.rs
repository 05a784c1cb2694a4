//! Store for the settings record.

use std::path::Path;

use presentoir_core::settings::Settings;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::json_file::JsonFile;
use crate::SETTINGS_FILE;

#[derive(Debug)]
pub struct SettingsStore {
    file: JsonFile,
    settings: RwLock<Settings>,
}

impl SettingsStore {
    /// Load settings from `data_dir`, or start from the defaults.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let file = JsonFile::new(data_dir, SETTINGS_FILE);
        let settings = file.load::<Settings>().await?.unwrap_or_default();

        Ok(Self {
            file,
            settings: RwLock::new(settings),
        })
    }

    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Replace the whole record and persist it.
    pub async fn update(&self, settings: Settings) -> Result<Settings, StoreError> {
        let mut guard = self.settings.write().await;
        self.file.save(&settings).await?;
        *guard = settings.clone();
        Ok(settings)
    }
}
