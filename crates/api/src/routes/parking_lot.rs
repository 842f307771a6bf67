//! Route definitions for parking lots.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::parking_lot;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parkingLot", post(parking_lot::create))
        .route("/parkingLot/usage", get(parking_lot::usage))
        .route("/parkingLot/{lotId}/visitors", get(parking_lot::visitors))
}
