//! The closed set of operations the dispatcher executes.

use std::collections::HashMap;

use chrono::NaiveDate;
use parkhaus_core::types::{DbId, TicketId};
use parkhaus_db::models::parking_lot::{CreateParkingLot, ParkingLot};
use parkhaus_db::models::parking_ticket::{CreateParkingTicket, ParkingTicket};

/// One client-requested operation, carrying everything needed to execute
/// without re-reading the original request.
///
/// Commands are immutable values; shape validation (parsable ids, a valid
/// calendar day, non-negative capacity) happens in the HTTP layer before a
/// command is built, so the dispatcher never sees malformed input.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create a lot with a fixed capacity.
    CreateLot(CreateParkingLot),

    /// Usage percentage per requested lot; unmatched ids yield no entry.
    GetUsages { lot_ids: Vec<DbId> },

    /// Visitors on a lot during one calendar day.
    GetVisitors { lot_id: DbId, day: NaiveDate },

    /// Issue a ticket. Id and arrival time are already stamped; there is
    /// no capacity admission check on this path.
    IssueTicket(CreateParkingTicket),

    /// Close an open ticket.
    CloseTicket { ticket_id: TicketId },
}

/// Success payloads, one per [`Command`] variant.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    LotCreated(ParkingLot),
    Usages(HashMap<DbId, f64>),
    Visitors(i64),
    TicketIssued(ParkingTicket),
    TicketClosed(ParkingTicket),
}

impl Command {
    /// Short operation name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateLot(_) => "create_lot",
            Command::GetUsages { .. } => "get_usages",
            Command::GetVisitors { .. } => "get_visitors",
            Command::IssueTicket(_) => "issue_ticket",
            Command::CloseTicket { .. } => "close_ticket",
        }
    }
}
