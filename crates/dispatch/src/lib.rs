//! Request-coordination core for the parkhaus service.
//!
//! All reads and writes against the store funnel through one place: the
//! [`Dispatcher`] drains an ordered queue of [`Command`]s on a single task
//! and answers each submitter through a one-shot reply slot. HTTP handlers
//! construct fully-validated commands, submit, and block on the reply;
//! nothing else in the workspace touches the repositories.
//!
//! - [`Command`] / [`CommandOutcome`] — the closed operation set and its
//!   result union.
//! - [`Dispatcher`] — spawn/submit handle over the single consumer task.
//! - [`CommandError`] / [`SubmitError`] — execution failures vs. failures
//!   of the submission machinery itself.

pub mod command;
pub mod dispatcher;

pub use command::{Command, CommandOutcome};
pub use dispatcher::{CommandError, Dispatcher, SubmitError};
