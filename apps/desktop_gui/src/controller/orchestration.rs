//! Command orchestration helpers from UI actions to backend command queue.

use std::time::Instant;

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::DashboardState;

/// Queues `cmd` for the worker. A command that cannot be queued is reported
/// as a failure of its operation so the loading state unwinds.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    state: &mut DashboardState,
    now: Instant,
) {
    let operation = cmd.operation();
    let cmd_name = operation.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            state.abort_dispatch(operation, now);
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            state.abort_dispatch(operation, now);
        }
    }
}
