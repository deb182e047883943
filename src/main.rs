use orchard_map::{actions, app, catalog, controller, event, storage, ui};

use anyhow::{Context, Result};
use app::AppState;
use catalog::Catalog;
use clap::Parser;
use orchard_map::config::{load_config, AppConfig, CliArgs};
use controller::MapEditController;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use storage::JsonFileStore;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    init_logging(&config)?;
    info!("Starting orchard map with {}", config.placements_file.display());

    let catalog = match Catalog::load(&config.catalog_file) {
        Ok(catalog) => {
            info!("Loaded {} catalog entries", catalog.len());
            catalog
        }
        Err(e) => {
            warn!("Catalog unavailable, continuing without plants: {}", e);
            Catalog::default()
        }
    };
    let catalog_missing = catalog.is_empty();

    let store = JsonFileStore::new(&config.placements_file);
    let controller = MapEditController::new(config.map_scale(), Box::new(store))
        .with_context(|| format!("loading {}", config.placements_file.display()))?;

    // Create application state
    let mut app = AppState::new(config, catalog, controller);
    if catalog_missing {
        app.set_message(format!(
            "No plants in catalog {}",
            app.config.catalog_file.display()
        ));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        error!("Main loop failed: {:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

// The terminal is in raw mode, so log records go to a file instead of stderr.
fn init_logging(config: &AppConfig) -> Result<()> {
    if let Some(parent) = config.log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            // Messages last until the next key or click
            app.clear_message();
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}
