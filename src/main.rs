use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};

use tov::app::{App, StatusLevel};
use tov::config::{self, Config};
use tov::nav::Role;
use tov::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "tov",
    version,
    about = "Tov: real-estate management for tenants and landlords, in the terminal"
)]
struct Args {
    /// Config file (defaults to $TOV_CONFIG or ~/.config/tov/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the landing screen and log in with this role
    #[arg(long, value_enum)]
    login: Option<Role>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = match args.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    let (config, config_err) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let log_path = logging::init(&config.logging)?;
    info!(log = ?log_path, "starting tov");

    let mut app = App::new(&config);
    if let Some(err) = config_err {
        warn!(error = %err, "using default config");
        app.set_status(format!("Config ignored: {err}"), StatusLevel::Warn);
    }
    if let Some(role) = args.login {
        app.login(role);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "run loop failed");
        eprintln!("{err:?}");
    }
    info!("exiting tov");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        input::handle_mouse(&mut app, mouse, size);
                    }
                }
                Event::Resize(width, _) => app.set_width(width),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
