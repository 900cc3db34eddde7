mod app;
mod cli;
mod config;
mod error;
mod events;
mod log;
mod picker;
mod select;
mod tui;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use cli::{CliArgs, USAGE};
use events::EventHandler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1));
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = config::resolve(&args)?;

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let mut app = App::from_config(&config);
    log::log(&format!("Loaded {} field(s)", app.fields.len()));

    let mut terminal = tui::terminal::init()?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal even if the loop failed
    tui::terminal::restore(&mut terminal)?;
    result?;

    println!("{}", serde_json::to_string_pretty(&app.report())?);
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        match event_stream.next().await {
            Some(Ok(event)) => {
                let action = EventHandler::handle_event(app, &event);
                app.dispatch(action);
            }
            Some(Err(e)) => {
                log::log(&format!("Event stream error: {}", e));
                return Err(e.into());
            }
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    log::log("=== pickbox exiting ===");
    Ok(())
}
