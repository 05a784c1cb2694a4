//! Store for the display-stand collection.

use std::path::Path;

use chrono::Utc;
use presentoir_core::error::CoreError;
use presentoir_core::reservation::ReservationForm;
use presentoir_core::stand::{self, DisplayStand, PosterRequest};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::json_file::JsonFile;
use crate::seed::seed_stands;
use crate::STANDS_FILE;

/// Owns the stand collection and persists it after every mutation.
///
/// Mutations hold the write lock across apply and save, so concurrent
/// callers are serialized and the last write wins.
#[derive(Debug)]
pub struct StandStore {
    file: JsonFile,
    stands: RwLock<Vec<DisplayStand>>,
}

impl StandStore {
    /// Load the collection from `data_dir`, falling back to the seed stands
    /// when the file is missing or holds an empty list.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let file = JsonFile::new(data_dir, STANDS_FILE);
        let stands = match file.load::<Vec<DisplayStand>>().await? {
            Some(saved) if !saved.is_empty() => {
                tracing::info!(count = saved.len(), "Loaded persisted stands");
                saved
            }
            _ => {
                tracing::info!("No persisted stands, using seed data");
                seed_stands(Utc::now())
            }
        };

        Ok(Self {
            file,
            stands: RwLock::new(stands),
        })
    }

    pub async fn list(&self) -> Vec<DisplayStand> {
        self.stands.read().await.clone()
    }

    pub async fn get(&self, stand_id: &str) -> Option<DisplayStand> {
        stand::find_stand(&self.stands.read().await, stand_id).cloned()
    }

    pub async fn reserve(
        &self,
        stand_id: &str,
        form: &ReservationForm,
    ) -> Result<DisplayStand, StoreError> {
        self.mutate(|stands| stand::reserve(stands, stand_id, form, Utc::now()))
            .await
    }

    pub async fn cancel_reservation(&self, stand_id: &str) -> Result<DisplayStand, StoreError> {
        self.mutate(|stands| stand::cancel_reservation(stands, stand_id, Utc::now()))
            .await
    }

    pub async fn request_poster_change(
        &self,
        stand_id: &str,
        requested_poster: &str,
        notes: Option<&str>,
    ) -> Result<PosterRequest, StoreError> {
        self.mutate(|stands| {
            stand::request_poster_change(stands, stand_id, requested_poster, notes, Utc::now())
        })
        .await
    }

    pub async fn update_stock(
        &self,
        stand_id: &str,
        publication_id: &str,
        quantity: u32,
    ) -> Result<DisplayStand, StoreError> {
        self.mutate(|stands| {
            stand::update_stock(stands, stand_id, publication_id, quantity, Utc::now())
        })
        .await
    }

    pub async fn approve_poster_request(
        &self,
        request_id: &str,
    ) -> Result<PosterRequest, StoreError> {
        self.mutate(|stands| stand::approve_poster_request(stands, request_id))
            .await
    }

    pub async fn reject_poster_request(
        &self,
        request_id: &str,
    ) -> Result<PosterRequest, StoreError> {
        self.mutate(|stands| stand::reject_poster_request(stands, request_id))
            .await
    }

    /// Apply `op` to a copy of the collection, persist the copy, then swap it
    /// in. On any error the in-memory collection is left untouched.
    async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Vec<DisplayStand>) -> Result<T, CoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.stands.write().await;
        let mut next = guard.clone();
        let out = op(&mut next)?;

        // An empty collection would read back as "use the seed", so never write one.
        if !next.is_empty() {
            self.file.save(&next).await?;
        }
        *guard = next;
        Ok(out)
    }
}
