use client_core::{Effect, InteractionState, RenderedBoard, Selection, SyncRequest};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Square;

use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_sync_request;
use crate::ui::board::show_board;

pub struct BoardApp {
    cmd_tx: Sender<SyncRequest>,
    ui_rx: Receiver<UiEvent>,

    authority_url: String,
    status: String,

    // Owned by the UI thread only; the backend sees nothing but requests.
    state: InteractionState,
    // Grid from the last board fetch, redrawn only when a board arrives.
    view: Option<RenderedBoard>,
}

impl BoardApp {
    /// Starts idle and immediately asks for the board.
    pub fn new(cmd_tx: Sender<SyncRequest>, ui_rx: Receiver<UiEvent>, authority_url: String) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            authority_url,
            status: "Loading board".to_string(),
            state: InteractionState::new(),
            view: None,
        };
        let request = app.state.on_load();
        dispatch_sync_request(&app.cmd_tx, request, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendUnavailable(message) => {
                    tracing::error!("{message}");
                    self.status = message;
                }
                UiEvent::Synced(outcome) => match self.state.apply(outcome) {
                    Effect::Request(next) => {
                        dispatch_sync_request(&self.cmd_tx, next, &mut self.status);
                    }
                    Effect::Redraw => {
                        self.view = self.state.render();
                    }
                },
            }
        }
    }

    fn on_square_clicked(&mut self, square: Square) {
        let request = self.state.on_click(square);
        tracing::debug!(%square, request = request.name(), "square clicked");
        dispatch_sync_request(&self.cmd_tx, request, &mut self.status);
    }

    fn selection_text(&self) -> String {
        match self.state.selection() {
            Selection::Idle => "Nothing selected".to_string(),
            Selection::Selected { origin, candidates } => {
                format!("Selected {origin} ({} destinations)", candidates.len())
            }
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small(format!("Authority: {}", self.authority_url));
                ui.separator();
                ui.small(self.selection_text());
                ui.separator();
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }

    fn show_board_panel(&mut self, ctx: &egui::Context) {
        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| match &self.view {
                Some(view) => ui
                    .vertical_centered(|ui| show_board(ui, view))
                    .inner,
                None => {
                    ui.centered_and_justified(|ui| ui.label("Waiting for the board..."));
                    None
                }
            })
            .inner;

        if let Some(square) = clicked {
            self.on_square_clicked(square);
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_status_bar(ctx);
        self.show_board_panel(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::SyncOutcome;
    use crossbeam_channel::bounded;
    use shared::domain::BoardMatrix;

    fn app() -> (BoardApp, Receiver<SyncRequest>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = BoardApp::new(cmd_tx, ui_rx, "http://localhost:8080/".to_string());
        (app, cmd_rx, ui_tx)
    }

    #[test]
    fn asks_for_the_board_on_start() {
        let (app, cmd_rx, _ui_tx) = app();

        assert_eq!(cmd_rx.try_recv(), Ok(SyncRequest::FetchBoardState));
        assert!(cmd_rx.try_recv().is_err());
        assert!(app.view.is_none());
        assert_eq!(app.state.selection(), &Selection::Idle);
    }

    #[test]
    fn board_arrival_redraws_all_squares() {
        let (mut app, _cmd_rx, ui_tx) = app();

        ui_tx
            .send(UiEvent::Synced(SyncOutcome::BoardState(
                BoardMatrix::empty().with_piece(0, 4, "K"),
            )))
            .expect("send");
        app.process_ui_events();

        let view = app.view.as_ref().expect("drawn");
        assert_eq!(view.squares().len(), 64);
        assert_eq!(
            view.square_at(4, 0).and_then(|s| s.label.as_deref()),
            Some("♔")
        );
    }

    #[test]
    fn candidates_trigger_a_board_refresh_before_highlighting() {
        let (mut app, cmd_rx, ui_tx) = app();
        let _ = cmd_rx.try_recv();

        ui_tx
            .send(UiEvent::Synced(SyncOutcome::BoardState(BoardMatrix::empty())))
            .expect("send");
        app.on_square_clicked(Square::new(3, 3));
        assert_eq!(
            cmd_rx.try_recv(),
            Ok(SyncRequest::FetchCandidateMoves {
                at: Square::new(3, 3)
            })
        );

        ui_tx
            .send(UiEvent::Synced(SyncOutcome::CandidateMoves {
                origin: Square::new(3, 3),
                moves: vec![Square::new(3, 4)],
            }))
            .expect("send");
        app.process_ui_events();

        assert_eq!(cmd_rx.try_recv(), Ok(SyncRequest::FetchBoardState));
        let stale = app.view.as_ref().expect("drawn");
        assert!(!stale.square(Square::new(3, 3)).expect("origin").selected);

        ui_tx
            .send(UiEvent::Synced(SyncOutcome::BoardState(BoardMatrix::empty())))
            .expect("send");
        app.process_ui_events();

        let fresh = app.view.as_ref().expect("drawn");
        assert!(fresh.square(Square::new(3, 3)).expect("origin").selected);
        assert!(fresh.square(Square::new(3, 4)).expect("candidate").valid);
    }

    #[test]
    fn clicking_a_highlighted_square_submits_the_move() {
        let (mut app, cmd_rx, ui_tx) = app();
        let _ = cmd_rx.try_recv();
        ui_tx
            .send(UiEvent::Synced(SyncOutcome::CandidateMoves {
                origin: Square::new(3, 3),
                moves: vec![Square::new(3, 4)],
            }))
            .expect("send");
        app.process_ui_events();
        let _ = cmd_rx.try_recv();

        app.on_square_clicked(Square::new(3, 4));

        assert_eq!(
            cmd_rx.try_recv(),
            Ok(SyncRequest::SubmitMove {
                from: Square::new(3, 3),
                to: Square::new(3, 4),
            })
        );
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn backend_failure_lands_on_the_status_line() {
        let (mut app, _cmd_rx, ui_tx) = app();

        ui_tx
            .send(UiEvent::BackendUnavailable(
                "backend worker startup failure".to_string(),
            ))
            .expect("send");
        app.process_ui_events();

        assert!(app.status.contains("startup failure"));
        assert_eq!(app.selection_text(), "Nothing selected");
    }
}
