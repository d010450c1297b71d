//! Backend-to-UI events.

use client_core::SyncOutcome;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    /// The worker could not start; nothing queued will ever resolve.
    BackendUnavailable(String),
    Synced(SyncOutcome),
}
