use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::todos::TodoStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::rc::Rc;
use std::sync::mpsc::RecvTimeoutError;

/// Mount the root view on the terminal and run until quit or shutdown.
///
/// The store outlives this call; the view's subscription is dropped on return.
pub fn run(config: &Config, store: Rc<TodoStore>, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(store);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread.
    shutdown.signal();
    drop(app);
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
