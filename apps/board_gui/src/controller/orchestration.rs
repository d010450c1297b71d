//! Hands authority requests from the UI to the backend worker queue.

use client_core::SyncRequest;
use crossbeam_channel::{Sender, TrySendError};

pub fn dispatch_sync_request(
    cmd_tx: &Sender<SyncRequest>,
    request: SyncRequest,
    status: &mut String,
) {
    let request_name = request.name();
    tracing::debug!(request = request_name, "queueing ui->backend request");
    match cmd_tx.try_send(request) {
        Ok(()) => {
            tracing::debug!(request = request_name, "queued ui->backend request");
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI request queue is full; click again".to_string();
            tracing::warn!(request = request_name, "ui->backend request queue is full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the board window".to_string();
            tracing::error!(request = request_name, "ui->backend request queue disconnected");
        }
    }
}
