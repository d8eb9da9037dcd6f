/// Primary key type for all entities (UUID, database-generated).
pub type DbId = uuid::Uuid;

/// Timestamp type used across the workspace. All stored times are UTC;
/// conversion to a reporting zone happens only at query boundaries.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
