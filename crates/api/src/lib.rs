//! Parkhaus API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! router) so integration tests and the binary entrypoint can both access
//! them. Handlers translate HTTP requests into dispatch commands, wait for
//! their completion, and serialize the results back out.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
