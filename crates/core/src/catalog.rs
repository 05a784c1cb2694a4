//! Poster and publication catalogs.
//!
//! Stands refer to posters by name and to publications by id; neither
//! reference is enforced, so deleting a catalog entry leaves stale
//! references on stands.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_id, EntityId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poster {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub is_active: bool,
    /// Stock below this quantity is flagged as low.
    pub min_stock: u32,
}

/// Poster fields supplied by the caller; the id is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPoster {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub is_active: bool,
}

/// Publication fields supplied by the caller; the id is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPublication {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub is_active: bool,
    pub min_stock: u32,
}

/// Both catalog collections, persisted together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub posters: Vec<Poster>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

impl Catalog {
    pub fn add_poster(&mut self, input: NewPoster) -> Poster {
        let poster = Poster {
            id: new_id(),
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            category: input.category,
            is_active: input.is_active,
        };
        self.posters.push(poster.clone());
        poster
    }

    pub fn add_publication(&mut self, input: NewPublication) -> Publication {
        let publication = Publication {
            id: new_id(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            category: input.category,
            is_active: input.is_active,
            min_stock: input.min_stock,
        };
        self.publications.push(publication.clone());
        publication
    }

    pub fn delete_poster(&mut self, id: &str) -> Result<Poster, CoreError> {
        let idx = self
            .posters
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("Poster", id))?;
        Ok(self.posters.remove(idx))
    }

    pub fn delete_publication(&mut self, id: &str) -> Result<Publication, CoreError> {
        let idx = self
            .publications
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("Publication", id))?;
        Ok(self.publications.remove(idx))
    }
}
