use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    domain::{BoardMatrix, Square},
    protocol::{
        MovePieceQuery, ValidMovesQuery, ValidMovesResponse, BOARD_STATE_PATH, MOVE_PIECE_PATH,
        VALID_MOVES_PATH,
    },
};
use tracing::debug;
use url::Url;

pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod session;

pub use driver::{Completion, Driver};
pub use error::SyncError;
pub use render::{render, RenderedBoard, Shade, SquareView};
pub use session::{Effect, InteractionState, Selection, SyncOutcome, SyncRequest};

/// The remote service that owns the rules and the game. The client never
/// second-guesses its answers.
#[async_trait]
pub trait MoveAuthority: Send + Sync {
    async fn fetch_board_state(&self) -> Result<BoardMatrix, SyncError>;
    /// Empty when the square is empty or the piece cannot move.
    async fn fetch_candidate_moves(&self, at: Square) -> Result<Vec<Square>, SyncError>;
    /// Completes on any answer from the authority, accepted or not.
    async fn submit_move(&self, from: Square, to: Square) -> Result<(), SyncError>;
}

pub async fn perform<A>(authority: &A, request: &SyncRequest) -> Result<SyncOutcome, SyncError>
where
    A: MoveAuthority + ?Sized,
{
    match *request {
        SyncRequest::FetchBoardState => authority
            .fetch_board_state()
            .await
            .map(SyncOutcome::BoardState),
        SyncRequest::FetchCandidateMoves { at } => {
            let moves = authority.fetch_candidate_moves(at).await?;
            Ok(SyncOutcome::CandidateMoves { origin: at, moves })
        }
        SyncRequest::SubmitMove { from, to } => {
            authority.submit_move(from, to).await?;
            Ok(SyncOutcome::MoveSubmitted { from, to })
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpMoveAuthority {
    http: Client,
    base_url: Url,
}

impl HttpMoveAuthority {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, SyncError> {
        self.base_url
            .join(path)
            .map_err(|source| SyncError::Endpoint { path, source })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, SyncError> {
        let response = request
            .send()
            .await
            .map_err(|source| SyncError::Transport { endpoint, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status { endpoint, status });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| SyncError::Transport { endpoint, source })?;
        serde_json::from_slice(&body).map_err(|source| SyncError::Decode { endpoint, source })
    }
}

#[async_trait]
impl MoveAuthority for HttpMoveAuthority {
    async fn fetch_board_state(&self) -> Result<BoardMatrix, SyncError> {
        let url = self.endpoint(BOARD_STATE_PATH)?;
        self.get_json(BOARD_STATE_PATH, self.http.get(url)).await
    }

    async fn fetch_candidate_moves(&self, at: Square) -> Result<Vec<Square>, SyncError> {
        let url = self.endpoint(VALID_MOVES_PATH)?;
        let request = self.http.get(url).query(&ValidMovesQuery::from(at));
        let moves: ValidMovesResponse = self.get_json(VALID_MOVES_PATH, request).await?;
        debug!(x = at.x, y = at.y, count = moves.len(), "candidate moves received");
        Ok(moves)
    }

    async fn submit_move(&self, from: Square, to: Square) -> Result<(), SyncError> {
        let url = self.endpoint(MOVE_PIECE_PATH)?;
        let response = self
            .http
            .get(url)
            .query(&MovePieceQuery::new(from, to))
            .send()
            .await
            .map_err(|source| SyncError::Transport {
                endpoint: MOVE_PIECE_PATH,
                source,
            })?;
        debug!(%from, %to, status = %response.status(), "move submitted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
