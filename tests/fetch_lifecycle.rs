//! Fetch lifecycle against a real HTTP server.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{dead_url, http_controller, sample_post};
use postview::resource::UNKNOWN_ERROR_MESSAGE;
use postview::ui::fetch::{FetchState, FetchStatus, StartError};

#[tokio::test]
async fn success_settles_with_decoded_payload() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"userId":1,"title":"foo","body":"bar"}"#))
        .await;

    let mut controller = http_controller(&mock.post_url());
    let state = controller.start().await.unwrap();

    assert_eq!(state.status(), FetchStatus::Success);
    assert_eq!(state.payload(), Some(&sample_post()));
    assert!(state.error_message().is_none());
}

#[tokio::test]
async fn not_found_settles_with_status_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::status(404)).await;

    let mut controller = http_controller(&mock.post_url());
    let state = controller.start().await.unwrap();

    assert_eq!(state.status(), FetchStatus::Failure);
    assert_eq!(state.error_message(), Some("HTTP error! Status: 404"));
}

#[tokio::test]
async fn any_status_outside_2xx_fails_with_code() {
    for status in [301u16, 400, 418, 500, 503] {
        let mock = MockBackend::start().await;
        mock.enqueue_response(MockResponse::status(status)).await;

        let mut controller = http_controller(&mock.post_url());
        let state = controller.start().await.unwrap();

        assert_eq!(state.status(), FetchStatus::Failure, "status {status}");
        assert!(
            state.error_message().unwrap().contains(&status.to_string()),
            "message for {status}: {:?}",
            state.error_message()
        );
    }
}

#[tokio::test]
async fn null_body_is_success_without_payload() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("null")).await;

    let mut controller = http_controller(&mock.post_url());
    let state = controller.start().await.unwrap();

    assert_eq!(*state, FetchState::Success { payload: None });
}

#[tokio::test]
async fn malformed_body_fails_with_decode_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text("<html>not json</html>"))
        .await;

    let mut controller = http_controller(&mock.post_url());
    let state = controller.start().await.unwrap();

    assert_eq!(state.status(), FetchStatus::Failure);
    let message = state.error_message().unwrap();
    assert!(!message.is_empty());
    assert_ne!(message, UNKNOWN_ERROR_MESSAGE);
}

#[tokio::test]
async fn connection_refused_fails_without_hanging() {
    let mut controller = http_controller(&dead_url());
    let state = controller.start().await.unwrap();

    assert_eq!(state.status(), FetchStatus::Failure);
    assert!(!state.error_message().unwrap().is_empty());
}

#[tokio::test]
async fn exactly_one_get_per_start() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::status(500)).await;

    let mut controller = http_controller(&mock.post_url());
    controller.start().await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1, "failures must not be retried");
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/posts/1");
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    assert!(requests[0].header("x-request-id").is_some());
    assert!(requests[0]
        .header("user-agent")
        .unwrap()
        .starts_with("postview/"));
}

#[tokio::test]
async fn start_while_loading_is_rejected() {
    let mock = MockBackend::start().await;
    let mut controller = http_controller(&mock.post_url());

    let pending = controller.begin().unwrap();
    let err = controller.start().await.unwrap_err();
    assert_eq!(
        err,
        StartError::InFlight {
            generation: pending.generation()
        }
    );

    let (generation, outcome) = pending.execute().await;
    assert!(controller.settle(generation, outcome));
    assert_eq!(controller.state().status(), FetchStatus::Success);
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn reset_after_failure_returns_to_idle() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::status(404)).await;

    let mut controller = http_controller(&mock.post_url());
    controller.start().await.unwrap();
    controller.reset();

    assert_eq!(*controller.state(), FetchState::Idle);
    assert!(controller.state().payload().is_none());
    assert!(controller.state().error_message().is_none());
}

#[tokio::test]
async fn refetch_after_reset_issues_new_request() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::status(500)).await;
    mock.enqueue_response(MockResponse::default()).await;

    let mut controller = http_controller(&mock.post_url());
    assert_eq!(
        controller.start().await.unwrap().status(),
        FetchStatus::Failure
    );
    controller.reset();
    assert_eq!(
        controller.start().await.unwrap().status(),
        FetchStatus::Success
    );
    assert_eq!(mock.captured_requests().await.len(), 2);
}
