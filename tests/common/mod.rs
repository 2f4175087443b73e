//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use postview::config::LaunchMode;
use postview::resource::{FetchResult, HttpResource};
use postview::ui::app::App;
use postview::ui::fetch::FetchController;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

/// URL on localhost where nothing is listening.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/posts/1", port)
}

pub fn http_controller(url: &str) -> FetchController {
    let resource = HttpResource::new(url.parse().unwrap(), Duration::from_secs(2)).unwrap();
    FetchController::new(Arc::new(resource))
}

pub fn make_app(url: &str, mode: LaunchMode) -> App {
    App::new(http_controller(url), mode)
}

pub fn sample_post() -> FetchResult {
    FetchResult {
        user_id: 1,
        title: "foo".to_string(),
        body: "bar".to_string(),
    }
}
