//! Runtime bridge between the UI request queue and the move authority.

use std::{sync::Arc, thread};

use client_core::{perform, HttpMoveAuthority, SyncRequest};
use crossbeam_channel::{Receiver, Sender};
use url::Url;

use crate::controller::events::UiEvent;

/// Every request gets its own task: nothing is queued behind a slow answer
/// and nothing is cancelled, so answers reach the UI in the order they arrive.
pub fn launch(authority_url: Url, cmd_rx: Receiver<SyncRequest>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let authority = Arc::new(HttpMoveAuthority::new(authority_url));
            tracing::info!(authority = %authority.base_url(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Connected to move authority at {}",
                authority.base_url()
            )));

            while let Ok(request) = cmd_rx.recv() {
                let authority = Arc::clone(&authority);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    match perform(authority.as_ref(), &request).await {
                        Ok(outcome) => {
                            if ui_tx.send(UiEvent::Synced(outcome)).is_err() {
                                tracing::debug!(request = request.name(), "ui closed before answer");
                            }
                        }
                        Err(err) => {
                            tracing::warn!(
                                request = request.name(),
                                error = %err,
                                "request did not resolve"
                            );
                        }
                    }
                });
            }
            tracing::info!("ui request queue closed; backend worker stopping");
        });
    });
}
