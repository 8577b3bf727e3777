//! docdeck: terminal documentation browser.
//!
//! Shows the built-in AutoApply documentation, or any catalog passed with
//! `--catalog`, as views, tabs and collapsible sections.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use docdeck_core::{builtin, Catalog, Navigator};
use docdeck_tui::{input, logging, ui, AppState};

#[derive(Parser)]
#[command(name = "docdeck", about = "Browse documentation in the terminal")]
struct Args {
    /// TOML catalog to browse instead of the built-in documentation.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// View to open first.
    #[arg(long)]
    view: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_dir = logging::init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => builtin::autoapply().context("loading built-in catalog")?,
    };
    let mut nav = Navigator::new(catalog).context("building navigator")?;
    if let Some(view) = &args.view {
        nav.choose_view(view)?;
    }
    info!(title = nav.catalog().title(), "catalog loaded");

    let mut app = AppState::new(nav);
    if let Some(dir) = log_dir {
        app.set_status(format!("Logging to {}", dir.display()));
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(revision = app.nav.revision(), "session ended");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps resize handling responsive.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
