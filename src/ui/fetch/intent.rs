//! Intents for the fetch lifecycle.

use crate::resource::{FetchError, FetchResult};
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum FetchIntent {
    /// A request tagged `generation` has been issued.
    /// Ignored while another request is outstanding.
    Start { generation: u64 },

    /// The request tagged `generation` reached a terminal outcome.
    /// Ignored unless it matches the outstanding request.
    Settled {
        generation: u64,
        outcome: Result<Option<FetchResult>, FetchError>,
    },

    /// Drop payload and error, back to `Idle`.
    Reset,
}

impl Intent for FetchIntent {}
