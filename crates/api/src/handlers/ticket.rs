//! Handlers for ticket endpoints: issue on arrival, close on departure.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use parkhaus_core::error::CoreError;
use parkhaus_core::types::{DbId, TicketId};
use parkhaus_db::models::parking_ticket::{CreateParkingTicket, ParkingTicket};
use parkhaus_dispatch::{Command, CommandOutcome};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::parking_lot::mismatched_outcome;
use crate::state::AppState;

/// Request body for issuing a ticket.
#[derive(Debug, Deserialize)]
pub struct IssueTicketRequest {
    pub car_licence_plate: String,
    pub parking_lot_id: DbId,
}

/// POST /ticket
///
/// Issue a ticket for an arriving vehicle. The ticket id and arrival time
/// are stamped here, at submission time; the insert itself performs no
/// capacity check.
pub async fn issue(
    State(state): State<AppState>,
    Json(input): Json<IssueTicketRequest>,
) -> AppResult<(StatusCode, Json<ParkingTicket>)> {
    if input.car_licence_plate.trim().is_empty() {
        return Err(CoreError::Validation("car_licence_plate is required".to_string()).into());
    }

    let outcome = state
        .dispatcher
        .submit(Command::IssueTicket(CreateParkingTicket {
            id: Uuid::new_v4(),
            car_licence_plate: input.car_licence_plate,
            parking_lot_id: input.parking_lot_id,
            arrival_time: Utc::now(),
        }))
        .await?;

    match outcome {
        CommandOutcome::TicketIssued(ticket) => Ok((StatusCode::CREATED, Json(ticket))),
        other => Err(mismatched_outcome("IssueTicket", &other)),
    }
}

/// DELETE /ticket/{ticketId}
///
/// Close an open ticket, recording its leave time. 404 when no open
/// ticket matches — a ticket can only be closed once.
pub async fn close(
    State(state): State<AppState>,
    Path(ticket_id): Path<TicketId>,
) -> AppResult<Json<ParkingTicket>> {
    let outcome = state
        .dispatcher
        .submit(Command::CloseTicket { ticket_id })
        .await?;

    match outcome {
        CommandOutcome::TicketClosed(ticket) => Ok(Json(ticket)),
        other => Err(mismatched_outcome("CloseTicket", &other)),
    }
}
