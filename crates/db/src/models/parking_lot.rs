//! Parking lot entity model and DTOs.

use parkhaus_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `parking_lot` table.
///
/// Capacity is fixed at creation; lots are never resized or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParkingLot {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
}

/// DTO for creating a new parking lot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParkingLot {
    pub name: String,
    pub capacity: i32,
}

/// One entry of the usage aggregate: lot id and how full it is, 0-100.
#[derive(Debug, Clone, FromRow)]
pub struct LotUsage {
    pub id: DbId,
    pub percentage: f64,
}
