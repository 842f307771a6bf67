//! Shared domain types for the parkhaus workspace.
//!
//! Kept dependency-light so every other crate (db, dispatch, api) can pull
//! these in without dragging the web or database stacks along.

pub mod error;
pub mod time;
pub mod types;

pub use error::CoreError;
