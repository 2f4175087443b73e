//! Owner of the fetch state and the operations that mutate it.

use std::sync::Arc;

use thiserror::Error;

use crate::resource::{FetchError, FetchResult, Resource};
use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::reducer::FetchReducer;
use super::state::FetchState;
use super::view::{select_view, FetchView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A request is already outstanding.
    #[error("a fetch is already in progress (generation {generation})")]
    InFlight { generation: u64 },
}

/// A request that has been started but not yet executed.
///
/// Produced by [`FetchController::begin`]; run it anywhere (e.g. on a tokio
/// task) and hand the outcome back to [`FetchController::settle`].
pub struct PendingFetch {
    generation: u64,
    resource: Arc<dyn Resource>,
}

impl PendingFetch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Performs the single outbound request.
    pub async fn execute(self) -> (u64, Result<Option<FetchResult>, FetchError>) {
        let outcome = self.resource.fetch().await;
        (self.generation, outcome)
    }
}

pub struct FetchController {
    state: FetchState,
    resource: Arc<dyn Resource>,
    next_generation: u64,
}

impl FetchController {
    pub fn new(resource: Arc<dyn Resource>) -> Self {
        Self {
            state: FetchState::default(),
            resource,
            next_generation: 1,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn describe_resource(&self) -> String {
        self.resource.describe()
    }

    fn dispatch(&mut self, intent: FetchIntent) {
        self.state = FetchReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Moves to `Loading` and returns the request to run.
    ///
    /// Rejected while another request is outstanding.
    pub fn begin(&mut self) -> Result<PendingFetch, StartError> {
        if let Some(generation) = self.state.loading_generation() {
            tracing::debug!(generation, "fetch start rejected: already loading");
            return Err(StartError::InFlight { generation });
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.dispatch(FetchIntent::Start { generation });
        tracing::info!(generation, resource = %self.resource.describe(), "fetch started");

        Ok(PendingFetch {
            generation,
            resource: Arc::clone(&self.resource),
        })
    }

    /// Applies the outcome of request `generation`.
    ///
    /// Returns `false` when the outcome was stale (the request was reset or
    /// superseded) and therefore discarded.
    pub fn settle(
        &mut self,
        generation: u64,
        outcome: Result<Option<FetchResult>, FetchError>,
    ) -> bool {
        if self.state.loading_generation() != Some(generation) {
            tracing::debug!(generation, "discarding stale fetch outcome");
            return false;
        }

        match &outcome {
            Ok(Some(_)) => tracing::info!(generation, "fetch succeeded"),
            Ok(None) => tracing::info!(generation, "fetch succeeded with empty body"),
            Err(err) => tracing::warn!(generation, kind = err.kind(), error = %err, "fetch failed"),
        }

        self.dispatch(FetchIntent::Settled {
            generation,
            outcome,
        });
        true
    }

    /// Starts a request and waits for it to settle.
    ///
    /// The returned state is always `Success` or `Failure`.
    pub async fn start(&mut self) -> Result<&FetchState, StartError> {
        let pending = self.begin()?;
        let (generation, outcome) = pending.execute().await;
        self.settle(generation, outcome);
        Ok(&self.state)
    }

    /// Back to `Idle`; payload and error are both cleared.
    pub fn reset(&mut self) {
        if let Some(generation) = self.state.loading_generation() {
            tracing::info!(generation, "reset abandons outstanding fetch");
        } else {
            tracing::info!("fetch state reset");
        }
        self.dispatch(FetchIntent::Reset);
    }

    /// Whether the fetch trigger is enabled: not loading and no payload shown.
    pub fn can_fetch(&self) -> bool {
        !self.state.is_loading() && self.state.payload().is_none()
    }

    pub fn view(&self, awaiting_auto_start: bool) -> FetchView {
        select_view(&self.state, awaiting_auto_start)
    }
}
