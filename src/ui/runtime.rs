use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::FetchController;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive screen until the user quits.
///
/// Requests execute on `runtime`; everything else, including every state
/// transition, happens on the calling thread.
pub fn run(config: &Config, controller: FetchController, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(controller, config.ui.launch_mode);
    let events = EventHandler::new(tick_rate);

    app.on_mount();

    loop {
        spawn_pending_fetch(&mut app, &runtime, events.sender());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::FetchSettled {
                generation,
                outcome,
            }) => app.on_fetch_settled(generation, outcome),
            Ok(AppEvent::InputClosed(reason)) => app.on_input_closed(reason),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    match app.input_error() {
        Some(reason) => Err(io::Error::other(format!("terminal input closed: {reason}"))),
        None => Ok(()),
    }
}

fn spawn_pending_fetch(app: &mut App, runtime: &Handle, tx: Sender<AppEvent>) {
    let Some(pending) = app.take_pending_fetch() else {
        return;
    };

    runtime.spawn(async move {
        let (generation, outcome) = pending.execute().await;
        if tx
            .send(AppEvent::FetchSettled {
                generation,
                outcome,
            })
            .is_err()
        {
            tracing::trace!(generation, "fetch outcome dropped (event loop gone)");
        }
    });
}
