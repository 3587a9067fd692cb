//! skycast - terminal weather lookup
//!
//! # Usage
//!
//! ```sh
//! # Look up the default city (Jakarta) on start
//! OPENWEATHER_API_KEY=... cargo run -p skycast
//!
//! # Start somewhere else, in Fahrenheit
//! cargo run -p skycast -- --api-key ... --city London --units imperial
//! ```

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use skycast_core::{EffectRuntime, EffectStore, EventKind, EventOutcome, TracingMiddleware};

use skycast::action::Action;
use skycast::api::WeatherService;
use skycast::app;
use skycast::components::{Component, WeatherScreen, WeatherScreenProps};
use skycast::config::{Args, Config};
use skycast::logging;
use skycast::reducer::reducer;
use skycast::state::{AppState, LOADING_ANIM_TICK_MS};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let _log_guard = logging::init_tracing(&config.log_dir)?;

    // Return instead of exiting so the log guard drops
    let service = WeatherService::new(config.provider.clone()).map_err(|e| {
        tracing::error!(error = %e, "Could not create HTTP client");
        io::Error::other(format!("could not create HTTP client: {e}"))
    })?;

    tracing::info!(
        city = %config.default_city,
        base_url = %config.provider.base_url,
        "Starting skycast"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, service).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    service: WeatherService,
) -> io::Result<()> {
    let store = EffectStore::with_middleware(
        AppState::new(),
        reducer,
        TracingMiddleware::skipping(|action: &Action| matches!(action, Action::Tick)),
    );

    let mut runtime = EffectRuntime::from_store(store)
        .with_tick(Duration::from_millis(LOADING_ANIM_TICK_MS), || Action::Tick);

    for action in app::initial_actions(&config.default_city) {
        runtime.enqueue(action);
    }

    let screen = RefCell::new(WeatherScreen::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                screen
                    .borrow_mut()
                    .render(frame, area, WeatherScreenProps { state });
            },
            |event, state| map_event(&mut screen.borrow_mut(), event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| app::handle_effect(&service, effect, ctx),
        )
        .await
}

fn map_event(screen: &mut WeatherScreen, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
    if let EventKind::Resize(width, height) = event {
        return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
    }

    EventOutcome::from_actions(screen.handle_event(event, WeatherScreenProps { state }))
}
