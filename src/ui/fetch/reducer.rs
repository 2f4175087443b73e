//! Reducer for the fetch lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Pure transitions. Issuing the request and logging are done by
/// [`FetchController`](super::FetchController) around the dispatch.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { generation } => match state {
                loading @ FetchState::Loading { .. } => loading,
                _ => FetchState::Loading { generation },
            },

            FetchIntent::Settled {
                generation,
                outcome,
            } => match state {
                FetchState::Loading { generation: current } if current == generation => {
                    match outcome {
                        Ok(payload) => FetchState::Success { payload },
                        Err(err) => FetchState::Failure {
                            message: err.user_message(),
                        },
                    }
                }
                other => other,
            },

            FetchIntent::Reset => FetchState::Idle,
        }
    }
}
