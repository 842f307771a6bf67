//! Handlers for parking lot endpoints: creation and the two aggregate
//! queries (usage percentage, visitors per day).

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use parkhaus_core::error::CoreError;
use parkhaus_core::time::parse_day;
use parkhaus_core::types::DbId;
use parkhaus_db::models::parking_lot::{CreateParkingLot, ParkingLot};
use parkhaus_dispatch::{Command, CommandOutcome};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for creating a parking lot.
#[derive(Debug, Deserialize)]
pub struct CreateLotRequest {
    pub name: String,
    pub capacity: i32,
}

/// Query parameters for the visitors endpoint.
#[derive(Debug, Deserialize)]
pub struct VisitorsQuery {
    /// Calendar day as `YYYY-M-D`, e.g. `2001-2-20`.
    pub day: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /parkingLot
///
/// Create a lot and return it with its database-assigned id.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLotRequest>,
) -> AppResult<(StatusCode, Json<ParkingLot>)> {
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("name is required".to_string()).into());
    }
    if input.capacity < 0 {
        return Err(CoreError::Validation("capacity must be >= 0".to_string()).into());
    }

    let outcome = state
        .dispatcher
        .submit(Command::CreateLot(CreateParkingLot {
            name: input.name,
            capacity: input.capacity,
        }))
        .await?;

    match outcome {
        CommandOutcome::LotCreated(lot) => Ok((StatusCode::CREATED, Json(lot))),
        other => Err(mismatched_outcome("CreateLot", &other)),
    }
}

/// GET /parkingLot/usage?id=A&id=B
///
/// Usage percentage per requested lot, keyed by id. Ids that match no lot
/// produce no entry. The `id` parameter repeats, so the raw pair list is
/// taken instead of a map-shaped query struct.
pub async fn usage(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<HashMap<DbId, f64>>> {
    let mut lot_ids = Vec::new();
    for (key, value) in params {
        if key != "id" {
            continue;
        }
        let id: DbId = value
            .parse()
            .map_err(|_| AppError::BadRequest(format!("'{value}' is not a valid lot id")))?;
        lot_ids.push(id);
    }

    let outcome = state.dispatcher.submit(Command::GetUsages { lot_ids }).await?;

    match outcome {
        CommandOutcome::Usages(usages) => Ok(Json(usages)),
        other => Err(mismatched_outcome("GetUsages", &other)),
    }
}

/// GET /parkingLot/{lotId}/visitors?day=YYYY-M-D
///
/// Count of tickets issued and closed on the lot within the day's 24h
/// window. 404 if the lot does not exist; 0 is a valid answer.
pub async fn visitors(
    State(state): State<AppState>,
    Path(lot_id): Path<DbId>,
    Query(query): Query<VisitorsQuery>,
) -> AppResult<Json<i64>> {
    let day = parse_day(&query.day)?;

    let outcome = state
        .dispatcher
        .submit(Command::GetVisitors { lot_id, day })
        .await?;

    match outcome {
        CommandOutcome::Visitors(count) => Ok(Json(count)),
        other => Err(mismatched_outcome("GetVisitors", &other)),
    }
}

/// The dispatcher answered a command with another command's payload. This
/// cannot happen while the outcome mapping in `execute` is total.
pub(crate) fn mismatched_outcome(command: &str, outcome: &CommandOutcome) -> AppError {
    AppError::InternalError(format!("{command} produced a mismatched outcome: {outcome:?}"))
}
