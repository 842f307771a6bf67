//! Repository for the `parking_lot` table and its aggregates.

use parkhaus_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::parking_lot::{CreateParkingLot, LotUsage, ParkingLot};

/// Column list for `parking_lot` SELECT queries.
const COLUMNS: &str = "id, name, capacity";

/// Provides query operations for parking lots.
pub struct ParkingLotRepo;

impl ParkingLotRepo {
    /// Insert a new lot, returning it with its database-assigned id.
    ///
    /// A duplicate name violates `uq_parking_lot_name` and surfaces as a
    /// database error; callers classify it, this layer does not.
    pub async fn create(pool: &PgPool, lot: &CreateParkingLot) -> Result<ParkingLot, sqlx::Error> {
        let query = format!(
            "INSERT INTO parking_lot (name, capacity) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingLot>(&query)
            .bind(&lot.name)
            .bind(lot.capacity)
            .fetch_one(pool)
            .await
    }

    /// Fetch a single lot by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<ParkingLot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_lot WHERE id = $1");
        sqlx::query_as::<_, ParkingLot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Usage of the requested lots in percent, 100 being fully used.
    ///
    /// Ids that match no lot simply produce no entry. The open-ticket
    /// condition lives in the join so a lot whose tickets have all been
    /// closed still reports 0%. Zero-capacity lots also report 0%.
    pub async fn usage_percentages(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<LotUsage>, sqlx::Error> {
        sqlx::query_as::<_, LotUsage>(
            "SELECT lot.id AS id, \
                    COALESCE(COUNT(t.id)::float8 / NULLIF(lot.capacity, 0)::float8 * 100, 0) \
                        AS percentage \
             FROM parking_lot AS lot \
             LEFT JOIN parking_ticket AS t \
                    ON t.parking_lot = lot.id AND t.leave_time IS NULL \
             WHERE lot.id = ANY($1) \
             GROUP BY lot.id, lot.capacity",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Capacity minus open tickets, or `None` if the lot does not exist.
    pub async fn remaining_capacity(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT lot.capacity::int8 - COUNT(t.id) AS remaining \
             FROM parking_lot AS lot \
             LEFT JOIN parking_ticket AS t \
                    ON t.parking_lot = lot.id AND t.leave_time IS NULL \
             WHERE lot.id = $1 \
             GROUP BY lot.id, lot.capacity",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Count tickets that were both issued and closed inside the given
    /// window, or `None` if the lot does not exist.
    ///
    /// The window is `[start, end]` with an inclusive upper bound; a
    /// ticket closed after `end` is not a visitor for this window.
    pub async fn visitors_during_window(
        pool: &PgPool,
        id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(t.id) AS visitors \
             FROM parking_lot AS lot \
             LEFT JOIN parking_ticket AS t \
                    ON t.parking_lot = lot.id \
                   AND t.arrival_time >= $2 \
                   AND t.leave_time IS NOT NULL \
                   AND t.leave_time <= $3 \
             WHERE lot.id = $1 \
             GROUP BY lot.id",
        )
        .bind(id)
        .bind(start)
        .bind(end)
        .fetch_optional(pool)
        .await
    }
}
