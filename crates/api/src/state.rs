use std::sync::Arc;

use presentoir_db::{CatalogStore, SettingsStore, StandStore, StoreError};
use presentoir_events::EventBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Display stands with their requests and stock.
    pub stands: Arc<StandStore>,
    /// Poster and publication catalogs.
    pub catalog: Arc<CatalogStore>,
    /// Reservation policy and notification toggles.
    pub settings: Arc<SettingsStore>,
    pub config: Arc<ServerConfig>,
    /// Domain events that may trigger notifications.
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    /// Open every store under `config.data_dir`.
    pub async fn open(config: ServerConfig, event_bus: Arc<EventBus>) -> Result<Self, StoreError> {
        let stands = StandStore::open(&config.data_dir).await?;
        let catalog = CatalogStore::open(&config.data_dir).await?;
        let settings = SettingsStore::open(&config.data_dir).await?;

        Ok(Self {
            stands: Arc::new(stands),
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
            config: Arc::new(config),
            event_bus,
        })
    }
}
