//! Parking ticket entity model and DTOs.

use parkhaus_core::types::{DbId, TicketId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `parking_ticket` table.
///
/// The `parking_lot` column is selected as `parking_lot_id` so the struct
/// serializes straight into the wire format.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParkingTicket {
    pub id: TicketId,
    pub car_licence_plate: String,
    pub parking_lot_id: DbId,
    pub arrival_time: Timestamp,
    /// `None` while the vehicle is parked; set exactly once on close.
    pub leave_time: Option<Timestamp>,
}

impl ParkingTicket {
    /// An open ticket has no recorded leave time.
    pub fn is_open(&self) -> bool {
        self.leave_time.is_none()
    }
}

/// DTO for issuing a ticket. Id and arrival time are stamped by the API
/// layer before the command is submitted, not by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParkingTicket {
    pub id: TicketId,
    pub car_licence_plate: String,
    pub parking_lot_id: DbId,
    pub arrival_time: Timestamp,
}
