//! Derived, read-only view selection.

use crate::resource::FetchResult;

use super::state::FetchState;

pub const DATA_UNAVAILABLE_TEXT: &str = "Data not available.";

/// What the body of the screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchView {
    /// Nothing fetched yet. `can_fetch` is false only while an automatic
    /// start has yet to fire; otherwise the fetch trigger is shown.
    Initial { can_fetch: bool },
    /// Progress indicator.
    Progress,
    /// Error text, without the `Error:` prefix.
    Error(String),
    /// Successful response without a payload.
    DataUnavailable,
    /// User ID, title and body of the post.
    Fields(FetchResult),
}

impl FetchView {
    /// Single-line headline used by the headless renderer and the header.
    pub fn headline(&self) -> String {
        match self {
            FetchView::Initial { can_fetch: true } => "Press Enter to fetch.".to_string(),
            FetchView::Initial { can_fetch: false } => "Starting...".to_string(),
            FetchView::Progress => "Loading...".to_string(),
            FetchView::Error(message) => format!("Error: {message}"),
            FetchView::DataUnavailable => DATA_UNAVAILABLE_TEXT.to_string(),
            FetchView::Fields(result) => result.title.clone(),
        }
    }

    /// `(label, value)` rows for the field list, empty for every other view.
    pub fn field_rows(&self) -> Vec<(&'static str, String)> {
        match self {
            FetchView::Fields(result) => vec![
                ("User ID:", result.user_id.to_string()),
                ("Title:", result.title.clone()),
                ("Body:", result.body.clone()),
            ],
            _ => Vec::new(),
        }
    }
}

/// `awaiting_auto_start` is true between launch and the first automatic
/// fetch; it only affects the `Idle` screen.
pub fn select_view(state: &FetchState, awaiting_auto_start: bool) -> FetchView {
    match state {
        FetchState::Loading { .. } => FetchView::Progress,
        FetchState::Failure { message } => FetchView::Error(message.clone()),
        FetchState::Success { payload: None } => FetchView::DataUnavailable,
        FetchState::Success {
            payload: Some(result),
        } => FetchView::Fields(result.clone()),
        FetchState::Idle => FetchView::Initial {
            can_fetch: !awaiting_auto_start,
        },
    }
}
