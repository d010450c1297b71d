//! Click-driven interaction state machine.
//!
//! The state machine never talks to the network itself. Clicks turn into
//! [`SyncRequest`]s, and whatever the authority answers comes back as a
//! [`SyncOutcome`] through [`InteractionState::apply`]. Outcomes are applied in
//! the order they arrive, so a slow answer to an older click overwrites the
//! selection made by a newer one. Callers must not reorder or drop outcomes.

use shared::domain::{BoardMatrix, Square};
use tracing::debug;

use crate::render::{render, RenderedBoard};

/// What the user has picked. Candidates only exist alongside an origin, so an
/// idle selection can never carry stale destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        origin: Square,
        candidates: Vec<Square>,
    },
}

impl Selection {
    pub fn origin(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { origin, .. } => Some(*origin),
        }
    }

    pub fn candidates(&self) -> &[Square] {
        match self {
            Selection::Idle => &[],
            Selection::Selected { candidates, .. } => candidates,
        }
    }

    pub fn is_candidate(&self, square: Square) -> bool {
        self.candidates().contains(&square)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRequest {
    FetchBoardState,
    FetchCandidateMoves { at: Square },
    SubmitMove { from: Square, to: Square },
}

impl SyncRequest {
    pub fn name(&self) -> &'static str {
        match self {
            SyncRequest::FetchBoardState => "fetch_board_state",
            SyncRequest::FetchCandidateMoves { .. } => "fetch_candidate_moves",
            SyncRequest::SubmitMove { .. } => "submit_move",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    BoardState(BoardMatrix),
    CandidateMoves { origin: Square, moves: Vec<Square> },
    MoveSubmitted { from: Square, to: Square },
}

/// What the caller has to do after an outcome was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Request(SyncRequest),
    /// A fresh board arrived; replace the displayed grid with [`InteractionState::render`].
    Redraw,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    selection: Selection,
    board: Option<BoardMatrix>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Last board received from the authority.
    pub fn board(&self) -> Option<&BoardMatrix> {
        self.board.as_ref()
    }

    pub fn on_load(&self) -> SyncRequest {
        SyncRequest::FetchBoardState
    }

    /// A click on a current candidate submits the move; any other click asks
    /// for the candidates of the clicked square, empty or not.
    pub fn on_click(&self, at: Square) -> SyncRequest {
        match &self.selection {
            Selection::Selected { origin, candidates } if candidates.contains(&at) => {
                SyncRequest::SubmitMove {
                    from: *origin,
                    to: at,
                }
            }
            _ => SyncRequest::FetchCandidateMoves { at },
        }
    }

    pub fn apply(&mut self, outcome: SyncOutcome) -> Effect {
        match outcome {
            SyncOutcome::CandidateMoves { origin, moves } => {
                debug!(%origin, candidates = moves.len(), "selection replaced");
                self.selection = Selection::Selected {
                    origin,
                    candidates: moves,
                };
                Effect::Request(SyncRequest::FetchBoardState)
            }
            SyncOutcome::MoveSubmitted { from, to } => {
                debug!(%from, %to, "move completed; selection cleared");
                self.selection = Selection::Idle;
                Effect::Request(SyncRequest::FetchBoardState)
            }
            SyncOutcome::BoardState(board) => {
                self.board = Some(board);
                Effect::Redraw
            }
        }
    }

    /// Full redraw from the last board and the current selection.
    pub fn render(&self) -> Option<RenderedBoard> {
        self.board
            .as_ref()
            .map(|board| render(board, &self.selection))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
