//! In-memory stores backed by one JSON document each.

mod catalog_store;
mod settings_store;
mod stand_store;

pub use catalog_store::CatalogStore;
pub use settings_store::SettingsStore;
pub use stand_store::StandStore;
