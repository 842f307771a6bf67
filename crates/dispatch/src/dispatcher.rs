//! Single serialization point over the store.
//!
//! One tokio task owns the only code path that reads or writes parking
//! state. Callers submit a [`Command`] paired with a one-shot reply slot
//! and suspend until the task has executed it; commands run strictly in
//! arrival order, so any two commands touching the same lot or ticket are
//! linearized without further locking. A failed command becomes its
//! caller's reply and never stops the loop.

use std::time::Duration;

use chrono::Utc;
use parkhaus_core::error::CoreError;
use parkhaus_db::repositories::{ParkingLotRepo, ParkingTicketRepo};
use parkhaus_db::DbPool;
use tokio::sync::{mpsc, oneshot};

use crate::command::{Command, CommandOutcome};

/// Failure of an individual command's execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Domain-level failure, currently always a not-found outcome.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure, propagated untouched so the HTTP layer can
    /// classify constraint violations. The dispatcher never retries.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Failure of the submission machinery, as opposed to the command itself.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The dispatch task is gone; no further commands can execute.
    #[error("dispatcher is not running")]
    Closed,

    /// The completion wait expired. The command still executes and its
    /// reply is dropped; only the caller gives up.
    #[error("timed out after {0:?} waiting for command completion")]
    Timeout(Duration),
}

/// A command plus the slot its result is signaled through, exactly once.
struct Envelope {
    command: Command,
    reply: oneshot::Sender<Result<CommandOutcome, CommandError>>,
}

/// Cloneable submit handle to the single dispatch task.
///
/// The queue is unbounded and FIFO; under sustained overload callers
/// accumulate awaiting their replies rather than being rejected. The task
/// exits once every handle has been dropped.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Envelope>,
    reply_timeout: Duration,
}

impl Dispatcher {
    /// Spawn the dispatch task on the current runtime.
    ///
    /// The task takes the pool with it; `reply_timeout` bounds every
    /// subsequent [`submit`](Self::submit) wait so a stalled task cannot
    /// strand callers indefinitely.
    pub fn spawn(pool: DbPool, reply_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(pool, rx));
        Self { tx, reply_timeout }
    }

    /// Submit a command and wait for its result.
    ///
    /// Commands execute in submission order. There is no cancellation:
    /// once accepted, a command runs even if this future is dropped or
    /// times out.
    pub async fn submit(&self, command: Command) -> Result<CommandOutcome, SubmitError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                command,
                reply: reply_tx,
            })
            .map_err(|_| SubmitError::Closed)?;

        match tokio::time::timeout(self.reply_timeout, reply_rx).await {
            Ok(Ok(result)) => result.map_err(SubmitError::Command),
            // Reply sender dropped without signaling: the task died.
            Ok(Err(_)) => Err(SubmitError::Closed),
            Err(_) => Err(SubmitError::Timeout(self.reply_timeout)),
        }
    }
}

/// The dispatch loop: drain the queue, execute, signal, repeat.
async fn run(pool: DbPool, mut rx: mpsc::UnboundedReceiver<Envelope>) {
    while let Some(envelope) = rx.recv().await {
        let name = envelope.command.name();
        let result = execute(&pool, envelope.command).await;

        if let Err(e) = &result {
            tracing::debug!(command = name, error = %e, "Command failed");
        }
        if envelope.reply.send(result).is_err() {
            // Caller abandoned its wait; the command still ran.
            tracing::debug!(command = name, "Completion signal dropped by caller");
        }
    }
    tracing::info!("Command queue closed, dispatcher shutting down");
}

/// Execute one command against the store.
async fn execute(pool: &DbPool, command: Command) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::CreateLot(lot) => {
            let created = ParkingLotRepo::create(pool, &lot).await?;
            tracing::info!(lot_id = created.id, name = %created.name, "Parking lot created");
            Ok(CommandOutcome::LotCreated(created))
        }

        Command::GetUsages { lot_ids } => {
            let usages = ParkingLotRepo::usage_percentages(pool, &lot_ids).await?;
            Ok(CommandOutcome::Usages(
                usages.into_iter().map(|u| (u.id, u.percentage)).collect(),
            ))
        }

        Command::GetVisitors { lot_id, day } => {
            let (start, end) = parkhaus_core::time::day_window(day)?;
            match ParkingLotRepo::visitors_during_window(pool, lot_id, start, end).await? {
                Some(count) => Ok(CommandOutcome::Visitors(count)),
                None => Err(CoreError::not_found("parking lot", lot_id).into()),
            }
        }

        Command::IssueTicket(ticket) => {
            let issued = ParkingTicketRepo::insert(pool, &ticket).await?;
            tracing::info!(ticket_id = %issued.id, lot_id = issued.parking_lot_id, "Ticket issued");
            Ok(CommandOutcome::TicketIssued(issued))
        }

        Command::CloseTicket { ticket_id } => {
            match ParkingTicketRepo::close(pool, ticket_id, Utc::now()).await? {
                Some(closed) => {
                    tracing::info!(ticket_id = %closed.id, "Ticket closed");
                    Ok(CommandOutcome::TicketClosed(closed))
                }
                // Never issued and already closed look the same here.
                None => Err(CoreError::not_found("open ticket", ticket_id).into()),
            }
        }
    }
}
