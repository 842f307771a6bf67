//! Route definitions for tickets.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::ticket;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ticket", post(ticket::issue))
        .route("/ticket/{ticketId}", delete(ticket::close))
}
