//! Display stands and the mutations applied to them.
//!
//! A [`DisplayStand`] owns its poster requests and publication stock records
//! inline. Every mutation here works on a mutable slice of stands and reports
//! whether a matching record was found, so callers can surface "not found"
//! instead of silently succeeding.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::reservation::ReservationForm;
use crate::types::{new_id, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// Lifecycle of a poster-change request.
///
/// Only `Pending -> Approved` and `Pending -> Rejected` are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A holder's proposal to change the poster shown on a stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterRequest {
    pub id: EntityId,
    pub stand_id: EntityId,
    pub requested_by: String,
    pub requested_poster: String,
    pub request_date: Timestamp,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Quantity of one publication currently stocked at a stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationStock {
    pub publication_id: EntityId,
    pub quantity: u32,
    pub last_updated: Timestamp,
}

/// A physical display unit.
///
/// `current_poster` is free text matched against poster names, not a
/// foreign key. When `is_reserved` is false, `reserved_by` and
/// `reserved_until` are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStand {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub current_poster: String,
    pub is_reserved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_until: Option<Timestamp>,
    pub last_updated: Timestamp,
    #[serde(default)]
    pub poster_requests: Vec<PosterRequest>,
    #[serde(default)]
    pub publications: Vec<PublicationStock>,
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

const STAND: &str = "DisplayStand";
const POSTER_REQUEST: &str = "PosterRequest";
const PUBLICATION_STOCK: &str = "PublicationStock";

fn find_stand_mut<'a>(
    stands: &'a mut [DisplayStand],
    stand_id: &str,
) -> Result<&'a mut DisplayStand, CoreError> {
    stands
        .iter_mut()
        .find(|s| s.id == stand_id)
        .ok_or_else(|| CoreError::not_found(STAND, stand_id))
}

/// Look up a stand by id.
pub fn find_stand<'a>(stands: &'a [DisplayStand], stand_id: &str) -> Option<&'a DisplayStand> {
    stands.iter().find(|s| s.id == stand_id)
}

/// Mark a stand as reserved by `form.name` until `form.end_date`.
///
/// An existing reservation is overwritten. The reservation policy
/// ([`crate::reservation::check_reservation`]) is the caller's concern.
pub fn reserve(
    stands: &mut [DisplayStand],
    stand_id: &str,
    form: &ReservationForm,
    now: Timestamp,
) -> Result<DisplayStand, CoreError> {
    let stand = find_stand_mut(stands, stand_id)?;
    stand.is_reserved = true;
    stand.reserved_by = Some(form.name.clone());
    stand.reserved_until = Some(form.end_date);
    stand.last_updated = now;
    Ok(stand.clone())
}

/// Clear any reservation on a stand.
pub fn cancel_reservation(
    stands: &mut [DisplayStand],
    stand_id: &str,
    now: Timestamp,
) -> Result<DisplayStand, CoreError> {
    let stand = find_stand_mut(stands, stand_id)?;
    stand.is_reserved = false;
    stand.reserved_by = None;
    stand.reserved_until = None;
    stand.last_updated = now;
    Ok(stand.clone())
}

/// Append a pending poster-change request on behalf of the stand's holder.
///
/// Fails with [`CoreError::Conflict`] when the stand is not reserved, since
/// the request has no one to attribute it to. The poster name is trimmed
/// and must not be blank; blank notes are dropped.
pub fn request_poster_change(
    stands: &mut [DisplayStand],
    stand_id: &str,
    requested_poster: &str,
    notes: Option<&str>,
    now: Timestamp,
) -> Result<PosterRequest, CoreError> {
    let requested_poster = requested_poster.trim();
    if requested_poster.is_empty() {
        return Err(CoreError::Validation(
            "Requested poster name is required".to_string(),
        ));
    }

    let stand = find_stand_mut(stands, stand_id)?;

    let requested_by = match (&stand.reserved_by, stand.is_reserved) {
        (Some(holder), true) => holder.clone(),
        _ => {
            return Err(CoreError::Conflict(format!(
                "Stand {stand_id} is not reserved; only its holder can request a poster change"
            )))
        }
    };

    let request = PosterRequest {
        id: new_id(),
        stand_id: stand.id.clone(),
        requested_by,
        requested_poster: requested_poster.to_string(),
        request_date: now,
        status: RequestStatus::Pending,
        notes: notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
    };
    stand.poster_requests.push(request.clone());
    Ok(request)
}

/// Replace the stocked quantity of one publication at a stand.
///
/// Both the stand and its stock record for `publication_id` must exist.
pub fn update_stock(
    stands: &mut [DisplayStand],
    stand_id: &str,
    publication_id: &str,
    quantity: u32,
    now: Timestamp,
) -> Result<DisplayStand, CoreError> {
    let stand = find_stand_mut(stands, stand_id)?;
    let stock = stand
        .publications
        .iter_mut()
        .find(|p| p.publication_id == publication_id)
        .ok_or_else(|| CoreError::not_found(PUBLICATION_STOCK, publication_id))?;
    stock.quantity = quantity;
    stock.last_updated = now;
    Ok(stand.clone())
}

/// Approve a pending request and put its poster on the owning stand.
pub fn approve_poster_request(
    stands: &mut [DisplayStand],
    request_id: &str,
) -> Result<PosterRequest, CoreError> {
    resolve_request(stands, request_id, RequestStatus::Approved)
}

/// Reject a pending request. The stand's current poster is left as is.
pub fn reject_poster_request(
    stands: &mut [DisplayStand],
    request_id: &str,
) -> Result<PosterRequest, CoreError> {
    resolve_request(stands, request_id, RequestStatus::Rejected)
}

/// Request ids are globally unique, so a scan over every stand finds at
/// most one match.
fn resolve_request(
    stands: &mut [DisplayStand],
    request_id: &str,
    decision: RequestStatus,
) -> Result<PosterRequest, CoreError> {
    for stand in stands.iter_mut() {
        let Some(request) = stand
            .poster_requests
            .iter_mut()
            .find(|r| r.id == request_id)
        else {
            continue;
        };

        if request.status != RequestStatus::Pending {
            return Err(CoreError::Conflict(format!(
                "Poster request {request_id} is already {}",
                request.status.as_str()
            )));
        }

        request.status = decision;
        let resolved = request.clone();
        if decision == RequestStatus::Approved {
            stand.current_poster = resolved.requested_poster.clone();
        }
        return Ok(resolved);
    }

    Err(CoreError::not_found(POSTER_REQUEST, request_id))
}
