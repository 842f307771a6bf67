/// All database primary keys for lots are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Ticket ids are 128-bit UUIDs, generated by the HTTP layer at
/// submission time rather than by the database.
pub type TicketId = uuid::Uuid;
