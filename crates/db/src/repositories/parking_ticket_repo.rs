//! Repository for the `parking_ticket` table.

use parkhaus_core::types::{TicketId, Timestamp};
use sqlx::PgPool;

use crate::models::parking_ticket::{CreateParkingTicket, ParkingTicket};

/// Column list for `parking_ticket` SELECT queries; the lot column is
/// aliased to match the wire-format field name.
const COLUMNS: &str = "id, car_licence_plate, parking_lot AS parking_lot_id, \
                       arrival_time, leave_time";

/// Provides query operations for parking tickets.
pub struct ParkingTicketRepo;

impl ParkingTicketRepo {
    /// Insert a ticket with its pre-generated id and arrival time.
    ///
    /// There is deliberately no capacity check here: issuance is
    /// unconditional and only the foreign-key constraint guards the lot
    /// reference.
    pub async fn insert(
        pool: &PgPool,
        ticket: &CreateParkingTicket,
    ) -> Result<ParkingTicket, sqlx::Error> {
        let query = format!(
            "INSERT INTO parking_ticket (id, car_licence_plate, parking_lot, arrival_time) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingTicket>(&query)
            .bind(ticket.id)
            .bind(&ticket.car_licence_plate)
            .bind(ticket.parking_lot_id)
            .bind(ticket.arrival_time)
            .fetch_one(pool)
            .await
    }

    /// Close an open ticket, stamping its leave time.
    ///
    /// One conditional statement: the `leave_time IS NULL` guard makes the
    /// close atomic at the store, so a ticket can never be closed twice.
    /// Returns `None` when no open ticket matches — never issued and
    /// already closed are indistinguishable here by design.
    pub async fn close(
        pool: &PgPool,
        id: TicketId,
        leave_time: Timestamp,
    ) -> Result<Option<ParkingTicket>, sqlx::Error> {
        let query = format!(
            "UPDATE parking_ticket \
             SET leave_time = $2 \
             WHERE id = $1 AND leave_time IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingTicket>(&query)
            .bind(id)
            .bind(leave_time)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a single ticket by id.
    pub async fn get(pool: &PgPool, id: TicketId) -> Result<Option<ParkingTicket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_ticket WHERE id = $1");
        sqlx::query_as::<_, ParkingTicket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
