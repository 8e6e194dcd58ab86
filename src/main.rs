use shelf::app::App;
use shelf::cli::{parse_args, run_cli_command, CliCommand, USAGE};
use shelf::error::{ShelfError, ShelfResult, UiError};
use shelf::startup::{init_logging, StartupConfig};
use shelf::terminal::{session_outcome, setup_panic_hook, TerminalManager};
use shelf::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use tracing::{info, warn};

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = StartupConfig::from_env().with_cli_args(&args);
    let interactive = args.command == CliCommand::RunTui;
    if let Err(e) = init_logging(&config, interactive) {
        eprintln!("Warning: logging disabled: {}", e.user_message());
    }

    if let Some(result) = run_cli_command(&args, &config) {
        if let Err(e) = result {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(e.category().exit_code());
        }
        return Ok(());
    }

    color_eyre::install()?;

    // Load before touching the terminal so errors print normally
    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            let e = ShelfError::from(e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(e.category().exit_code());
        }
    };
    info!(items = catalog.len(), "Starting shelf");

    setup_panic_hook();

    // One thread: events are handled strictly in arrival order
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::with_filter(catalog, config.initial_criteria());
    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    // Restore before reporting anything
    let restored = term_manager.restore();

    if let Err(e) = session_outcome(result, restored) {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(e.category().exit_code());
    }
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> ShelfResult<()> {
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            if let Err(e) = ui::draw_frame(terminal, app) {
                if !e.is_recoverable() {
                    return Err(e);
                }
                warn!("Skipping frame: {}", e);
            }
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                app.quit();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => {
                        return Err(UiError::InputError {
                            message: e.to_string(),
                        }
                        .into());
                    }
                    None => {
                        return Err(UiError::InputError {
                            message: "terminal event stream closed".to_string(),
                        }
                        .into());
                    }
                }
            }
        }
    }
}
