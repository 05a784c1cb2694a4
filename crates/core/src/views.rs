//! Read-only views derived from the stand collection.
//!
//! All views are recomputed on every call.

use chrono::{Datelike, NaiveDate, NaiveTime};
use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::Publication;
use crate::stand::{DisplayStand, PosterRequest};

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandStats {
    pub total: usize,
    pub reserved: usize,
    pub available: usize,
    pub low_stock: usize,
}

/// A poster request tagged with the name of the stand that owns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterRequestFeedItem {
    #[serde(flatten)]
    pub request: PosterRequest,
    pub stand_name: String,
}

/// Number of stands counted as reserved on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyReservations {
    pub date: NaiveDate,
    pub reservations: usize,
}

/// Number of stands currently showing a given poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosterCount {
    pub poster: String,
    pub count: usize,
}

/// Whether any stock record on the stand is strictly below its publication's
/// minimum. Records pointing at an unknown publication are ignored.
pub fn has_low_stock(stand: &DisplayStand, publications: &[Publication]) -> bool {
    stand.publications.iter().any(|stock| {
        publications
            .iter()
            .find(|p| p.id == stock.publication_id)
            .is_some_and(|p| stock.quantity < p.min_stock)
    })
}

pub fn stand_stats(stands: &[DisplayStand], publications: &[Publication]) -> StandStats {
    let total = stands.len();
    let reserved = stands.iter().filter(|s| s.is_reserved).count();
    let low_stock = stands
        .iter()
        .filter(|s| has_low_stock(s, publications))
        .count();

    StandStats {
        total,
        reserved,
        available: total - reserved,
        low_stock,
    }
}

/// Every request of every stand, newest first.
///
/// The sort is stable, so requests sharing a timestamp keep their
/// collection order.
pub fn poster_request_feed(stands: &[DisplayStand]) -> Vec<PosterRequestFeedItem> {
    let mut feed: Vec<PosterRequestFeedItem> = stands
        .iter()
        .flat_map(|stand| {
            stand
                .poster_requests
                .iter()
                .map(|request| PosterRequestFeedItem {
                    request: request.clone(),
                    stand_name: stand.name.clone(),
                })
        })
        .collect();

    feed.sort_by(|a, b| b.request.request_date.cmp(&a.request.request_date));
    feed
}

/// Reserved-stand count for each day of the month containing `today`.
///
/// A stand counts on every day up to and including the day its reservation
/// expires (compared against that day's UTC midnight); the start date of the
/// reservation is not recorded and therefore not considered.
pub fn monthly_reservations(stands: &[DisplayStand], today: NaiveDate) -> Vec<DailyReservations> {
    let month = today.month();
    let Some(first) = NaiveDate::from_ymd_opt(today.year(), month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| {
            let midnight = date.and_time(NaiveTime::MIN).and_utc();
            let reservations = stands
                .iter()
                .filter(|s| s.is_reserved && s.reserved_until.is_some_and(|until| until >= midnight))
                .count();
            DailyReservations { date, reservations }
        })
        .collect()
}

/// Stand count per `current_poster` value, in first-seen order.
pub fn poster_distribution(stands: &[DisplayStand]) -> Vec<PosterCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for stand in stands {
        *counts.entry(stand.current_poster.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(poster, count)| PosterCount {
            poster: poster.to_string(),
            count,
        })
        .collect()
}
