pub mod health;
pub mod parking_lot;
pub mod ticket;

use axum::Router;

use crate::state::AppState;

/// Build the parking route tree.
///
/// Mounted at the root — the wire contract fixes these exact paths:
///
/// ```text
/// POST   /parkingLot                      create a lot
/// GET    /parkingLot/usage                usage percent per requested id
/// GET    /parkingLot/{lotId}/visitors     visitors during one day
/// POST   /ticket                          issue a ticket
/// DELETE /ticket/{ticketId}               close a ticket
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(parking_lot::router())
        .merge(ticket::router())
}
