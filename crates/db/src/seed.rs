//! Initial data used when no persisted document exists yet.

use presentoir_core::catalog::{Catalog, Poster, Publication};
use presentoir_core::stand::{DisplayStand, PublicationStock};
use presentoir_core::types::Timestamp;

fn stock(publication_id: &str, quantity: u32, now: Timestamp) -> PublicationStock {
    PublicationStock {
        publication_id: publication_id.to_string(),
        quantity,
        last_updated: now,
    }
}

fn stand(
    id: &str,
    name: &str,
    location: &str,
    poster: &str,
    publications: Vec<PublicationStock>,
    now: Timestamp,
) -> DisplayStand {
    DisplayStand {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        current_poster: poster.to_string(),
        is_reserved: false,
        reserved_by: None,
        reserved_until: None,
        last_updated: now,
        poster_requests: Vec::new(),
        publications,
    }
}

/// The three stands installed at first start, none reserved.
pub fn seed_stands(now: Timestamp) -> Vec<DisplayStand> {
    vec![
        stand(
            "1",
            "Présentoir Entrée",
            "Hall Principal",
            "Promotion Printemps",
            vec![stock("1", 15, now), stock("2", 20, now)],
            now,
        ),
        stand(
            "2",
            "Présentoir Cafétéria",
            "Zone de Restauration",
            "Nouveautés",
            vec![stock("2", 12, now), stock("3", 25, now)],
            now,
        ),
        stand(
            "3",
            "Présentoir Accueil",
            "Réception",
            "Événement Spécial",
            vec![stock("1", 8, now), stock("3", 18, now)],
            now,
        ),
    ]
}

fn poster(id: &str, name: &str, description: &str, image_url: &str, category: &str) -> Poster {
    Poster {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        is_active: true,
    }
}

fn publication(
    id: &str,
    title: &str,
    description: &str,
    image_url: &str,
    category: &str,
    min_stock: u32,
) -> Publication {
    Publication {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category: category.to_string(),
        is_active: true,
        min_stock,
    }
}

pub fn seed_catalog() -> Catalog {
    Catalog {
        posters: vec![
            poster(
                "1",
                "Promotion Printemps",
                "Affiche promotionnelle pour la saison du printemps",
                "https://images.unsplash.com/photo-1490750967868-88aa4486c946",
                "Saisonnier",
            ),
            poster(
                "2",
                "Nouveautés",
                "Présentation des nouveaux produits",
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab",
                "Produits",
            ),
            poster(
                "3",
                "Événement Spécial",
                "Annonce d'événements spéciaux",
                "https://images.unsplash.com/photo-1492684223066-81342ee5ff30",
                "Événements",
            ),
        ],
        publications: vec![
            publication(
                "1",
                "Guide Visiteur",
                "Guide complet pour les visiteurs",
                "https://images.unsplash.com/photo-1532153975070-2e9ab71f1b14",
                "Guides",
                10,
            ),
            publication(
                "2",
                "Programme Mensuel",
                "Programme des activités du mois",
                "https://images.unsplash.com/photo-1506784365847-bbad939e9335",
                "Programmes",
                15,
            ),
            publication(
                "3",
                "Brochure Événements",
                "Présentation des événements à venir",
                "https://images.unsplash.com/photo-1472289065668-ce650ac443d2",
                "Événements",
                20,
            ),
        ],
    }
}
