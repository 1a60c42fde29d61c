use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, time::Duration};

/// Backup Set Browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/backuptui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (gg/G on top of hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Listing endpoint, overrides the config file
    #[arg(long)]
    url: Option<String>,
}

use backuptui::{api, logic, model};

mod app;
mod config;
mod handlers;
mod logging;
mod services;
mod ui;
mod utils;

use api::ListingClient;
use config::Config;
use services::{ListingLoader, ListingResponse};
use ui::icons::{IconMode, IconRenderer, IconTheme};

pub struct App {
    pub model: model::Model,

    loader: ListingLoader,
    listing_rx: tokio::sync::mpsc::UnboundedReceiver<ListingResponse>,
    icon_renderer: IconRenderer,
}

impl App {
    /// Build the app and start the first listing fetch
    fn new(config: Config) -> Self {
        let client = ListingClient::new(config.listing_url.clone());
        log::info!("Listing endpoint: {}", client.url());
        let (loader, listing_rx) = ListingLoader::new(client);

        let icon_renderer = IconRenderer::new(
            IconMode::from_config(&config.icon_mode),
            IconTheme::default(),
        );

        let mut app = App {
            model: model::Model::new(&config.root_label, config.vim_mode),
            loader,
            listing_rx,
            icon_renderer,
        };
        app.refresh_listing();
        app
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no config file exists; the app then runs on defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/backuptui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("backuptui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(cli_path: Option<String>) -> Result<Config> {
    let Some(config_path) = get_config_path(cli_path)? else {
        log::debug!("No config file found, using defaults");
        return Ok(Config::default());
    };

    log::debug!("Loading config from: {:?}", config_path);
    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;
    serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config {}", config_path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init(args.debug)?;

    let mut config = load_config(args.config)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(url) = args.url {
        config.listing_url = url;
    }

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Install finished listing fetches (non-blocking)
        while let Ok(response) = app.listing_rx.try_recv() {
            handlers::handle_listing_response(app, response);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
