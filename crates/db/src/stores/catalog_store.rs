//! Store for the poster and publication catalogs.

use std::path::Path;

use presentoir_core::catalog::{Catalog, NewPoster, NewPublication, Poster, Publication};
use presentoir_core::error::CoreError;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::json_file::JsonFile;
use crate::seed::seed_catalog;
use crate::CATALOG_FILE;

#[derive(Debug)]
pub struct CatalogStore {
    file: JsonFile,
    catalog: RwLock<Catalog>,
}

impl CatalogStore {
    /// Load the catalog from `data_dir`, or start from the seed catalog.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let file = JsonFile::new(data_dir, CATALOG_FILE);
        let catalog = match file.load::<Catalog>().await? {
            Some(saved) => saved,
            None => {
                tracing::info!("No persisted catalog, using seed data");
                seed_catalog()
            }
        };

        Ok(Self {
            file,
            catalog: RwLock::new(catalog),
        })
    }

    pub async fn list_posters(&self) -> Vec<Poster> {
        self.catalog.read().await.posters.clone()
    }

    pub async fn list_publications(&self) -> Vec<Publication> {
        self.catalog.read().await.publications.clone()
    }

    pub async fn add_poster(&self, input: NewPoster) -> Result<Poster, StoreError> {
        self.mutate(|c| Ok(c.add_poster(input))).await
    }

    pub async fn add_publication(&self, input: NewPublication) -> Result<Publication, StoreError> {
        self.mutate(|c| Ok(c.add_publication(input))).await
    }

    /// Remove a poster. Stands showing it keep the stale name.
    pub async fn delete_poster(&self, id: &str) -> Result<Poster, StoreError> {
        self.mutate(|c| c.delete_poster(id)).await
    }

    pub async fn delete_publication(&self, id: &str) -> Result<Publication, StoreError> {
        self.mutate(|c| c.delete_publication(id)).await
    }

    async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Catalog) -> Result<T, CoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.catalog.write().await;
        let mut next = guard.clone();
        let out = op(&mut next)?;
        self.file.save(&next).await?;
        *guard = next;
        Ok(out)
    }
}
