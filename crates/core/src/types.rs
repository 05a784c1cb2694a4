/// Identifiers are opaque strings: seed records use short numeric strings,
/// records created at runtime use UUID v4 text.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a newly created record.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}
