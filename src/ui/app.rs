use crate::config::LaunchMode;
use crate::resource::{FetchError, FetchResult};
use crate::ui::fetch::{FetchController, FetchState, FetchView, PendingFetch};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    should_quit: bool,
    mode: LaunchMode,
    mounted: bool,
    spinner_frame: usize,
    controller: FetchController,
    /// Request started by the last input, waiting for the runtime to spawn it.
    outbox: Option<PendingFetch>,
    input_error: Option<String>,
}

impl App {
    pub fn new(controller: FetchController, mode: LaunchMode) -> Self {
        Self {
            should_quit: false,
            mode,
            mounted: false,
            spinner_frame: 0,
            controller,
            outbox: None,
            input_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Terminal input is gone, so no key can quit later. Quit now and keep
    /// the reason for the caller.
    pub fn on_input_closed(&mut self, reason: String) {
        tracing::error!(%reason, "terminal input closed, quitting");
        self.input_error = Some(reason);
        self.should_quit = true;
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.controller.state()
    }

    pub fn view(&self) -> FetchView {
        self.controller.view(self.awaiting_auto_start())
    }

    /// Auto mode before its first frame: the fetch is about to start on its own.
    pub fn awaiting_auto_start(&self) -> bool {
        self.mode == LaunchMode::Auto && !self.mounted
    }

    pub fn can_fetch(&self) -> bool {
        self.controller.can_fetch()
    }

    pub fn resource_label(&self) -> String {
        self.controller.describe_resource()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// First frame. Auto mode kicks off the fetch here; repeated calls are no-ops.
    pub fn on_mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if self.mode == LaunchMode::Auto {
            self.begin_fetch();
        }
    }

    pub fn on_tick(&mut self) {
        if self.controller.state().is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Fetch trigger. Disabled while loading and while a payload is shown.
    pub fn on_fetch(&mut self) {
        if !self.controller.can_fetch() {
            return;
        }
        self.begin_fetch();
    }

    pub fn on_clear(&mut self) {
        self.controller.reset();
        self.outbox = None;
    }

    pub fn on_fetch_settled(
        &mut self,
        generation: u64,
        outcome: Result<Option<FetchResult>, FetchError>,
    ) {
        self.controller.settle(generation, outcome);
    }

    /// Hands the started request to the caller, which owns the async runtime.
    pub fn take_pending_fetch(&mut self) -> Option<PendingFetch> {
        self.outbox.take()
    }

    fn begin_fetch(&mut self) {
        match self.controller.begin() {
            Ok(pending) => {
                self.spinner_frame = 0;
                self.outbox = Some(pending);
            }
            Err(err) => tracing::debug!(error = %err, "fetch trigger ignored"),
        }
    }
}
