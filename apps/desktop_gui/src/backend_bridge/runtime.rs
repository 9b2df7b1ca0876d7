//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::DashboardApi;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

/// Starts the worker thread. Each command runs as its own task, so requests
/// may overlap and resolve in any order.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api: Arc<dyn DashboardApi>,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let handle = thread::Builder::new()
        .name("dashboard-backend".to_string())
        .spawn(move || {
            tracing::info!("backend worker ready");
            runtime.block_on(async move {
                while let Ok(cmd) = cmd_rx.recv() {
                    let api = Arc::clone(&api);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let event = execute_command(api.as_ref(), cmd).await;
                        // Waits for room on a bounded queue; a result is only lost once the UI is gone.
                        let sent = tokio::task::block_in_place(|| ui_tx.send(event));
                        if sent.is_err() {
                            tracing::debug!("ui event queue closed; dropping backend result");
                        }
                    });
                }
            });
            tracing::info!("backend worker stopped");
        })?;
    Ok(handle)
}

pub async fn execute_command(api: &dyn DashboardApi, cmd: BackendCommand) -> UiEvent {
    let operation = cmd.operation();
    let result = match cmd {
        BackendCommand::FetchUsers => api.fetch_users().await.map(UiEvent::UsersFetched),
        BackendCommand::CreatePost { post } => {
            api.create_post(&post).await.map(UiEvent::PostCreated)
        }
        BackendCommand::FetchComments { post_id } => api
            .fetch_comments(post_id)
            .await
            .map(|comments| UiEvent::CommentsFetched { post_id, comments }),
    };

    result.unwrap_or_else(|err| UiEvent::Failed(UiError::new(operation, err.to_string())))
}
