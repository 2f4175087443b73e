//! Fetch lifecycle feature module.
//!
//! Drives one request against the configured resource and derives what the
//! screen shows from the result.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state enum (Idle → Loading → Success | Failure)
//! - `intent.rs` - Start, Settled, Reset
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Pure view selection from state
//! - `controller.rs` - Owns the state, issues requests, logs

mod controller;
mod intent;
mod reducer;
mod state;
mod view;

pub use controller::{FetchController, PendingFetch, StartError};
pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchState, FetchStatus};
pub use view::{select_view, FetchView, DATA_UNAVAILABLE_TEXT};
