//! State for the fetch lifecycle.

use crate::resource::FetchResult;
use crate::ui::mvi::UiState;

/// Fetch lifecycle state machine.
///
/// Payload and error message live inside the variant that owns them, so a
/// state can never hold both, and `Loading` holds neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Nothing fetched yet, or cleared by a reset.
    #[default]
    Idle,

    /// One request is outstanding. `generation` identifies it so a late
    /// response from an abandoned request can be recognised.
    Loading { generation: u64 },

    /// Request settled with a 2xx response. `None` when the body was JSON `null`.
    Success { payload: Option<FetchResult> },

    /// Request settled with an error.
    Failure { message: String },
}

/// Flat status tag, for callers that only care which phase we are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

impl UiState for FetchState {}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Idle => FetchStatus::Idle,
            Self::Loading { .. } => FetchStatus::Loading,
            Self::Success { .. } => FetchStatus::Success,
            Self::Failure { .. } => FetchStatus::Failure,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Generation of the outstanding request, if any.
    pub fn loading_generation(&self) -> Option<u64> {
        match self {
            Self::Loading { generation } => Some(*generation),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&FetchResult> {
        match self {
            Self::Success { payload } => payload.as_ref(),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
