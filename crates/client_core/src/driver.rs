//! Single-task driver: issues requests for clicks, applies completions in the
//! order they resolve and keeps the last drawn grid.

use std::sync::Arc;

use futures::{future::BoxFuture, stream::FuturesUnordered, FutureExt, StreamExt};
use shared::domain::Square;
use tracing::{debug, warn};

use crate::{
    perform,
    render::RenderedBoard,
    session::{Effect, InteractionState, SyncOutcome, SyncRequest},
    MoveAuthority, SyncError,
};

type InFlight = BoxFuture<'static, (SyncRequest, Result<SyncOutcome, SyncError>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub request: SyncRequest,
    /// `false` when the request failed and nothing was applied.
    pub resolved: bool,
}

pub struct Driver<A: ?Sized> {
    authority: Arc<A>,
    state: InteractionState,
    view: Option<RenderedBoard>,
    in_flight: FuturesUnordered<InFlight>,
}

impl<A> Driver<A>
where
    A: MoveAuthority + ?Sized + 'static,
{
    pub fn new(authority: Arc<A>) -> Self {
        Self {
            authority,
            state: InteractionState::new(),
            view: None,
            in_flight: FuturesUnordered::new(),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Grid from the most recent redraw.
    pub fn view(&self) -> Option<&RenderedBoard> {
        self.view.as_ref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn load(&mut self) {
        let request = self.state.on_load();
        self.issue(request);
    }

    /// Decided against the state as it is now, even if earlier clicks are
    /// still waiting on the authority.
    pub fn click(&mut self, at: Square) {
        let request = self.state.on_click(at);
        self.issue(request);
    }

    fn issue(&mut self, request: SyncRequest) {
        debug!(request = request.name(), "issuing request");
        let authority = Arc::clone(&self.authority);
        self.in_flight.push(
            async move {
                let result = perform(authority.as_ref(), &request).await;
                (request, result)
            }
            .boxed(),
        );
    }

    /// Waits for the next request to resolve and applies it. `None` once
    /// nothing is in flight.
    pub async fn step(&mut self) -> Option<Completion> {
        let (request, result) = self.in_flight.next().await?;
        let resolved = match result {
            Ok(outcome) => {
                match self.state.apply(outcome) {
                    Effect::Request(next) => self.issue(next),
                    Effect::Redraw => self.view = self.state.render(),
                }
                true
            }
            Err(err) => {
                warn!(request = request.name(), error = %err, "request did not resolve");
                false
            }
        };
        Some(Completion { request, resolved })
    }

    pub async fn settle(&mut self) {
        while self.step().await.is_some() {}
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
