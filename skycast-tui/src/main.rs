//! skycast - weather in your terminal
//!
//! Wires the dispatch loop together:
//! 1. Keyboard events map to actions via the focused component
//! 2. Actions go through the reducer, which mutates state and
//!    requests effects
//! 3. Effects spawn keyed tasks (weather fetch, locate)
//! 4. Task completions come back as actions
//! 5. The UI re-renders when the state changed
//!
//! ```sh
//! skycast
//! skycast --city "New York"
//! skycast --log-file /tmp/skycast.log
//! ```

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::{Frame, Terminal};
use tracing_subscriber::EnvFilter;

use skycast_core::{Config, LocateClient, WeatherClient};
use skycast_tui::action::Action;
use skycast_tui::components::{
    Backdrop, HelpBar, HelpBarProps, SearchBar, SearchBarProps, WeatherPanel, WeatherPanelProps,
};
use skycast_tui::dispatch::{
    Component, EffectContext, EffectStore, EventKind, EventOutcome, Runtime,
};
use skycast_tui::effect::Effect;
use skycast_tui::reducer::reduce;
use skycast_tui::state::{AppState, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Weather lookup in the terminal")]
struct Args {
    /// City to look up at startup
    #[arg(long, short)]
    city: Option<String>,

    /// Provider API key (overrides config file and environment)
    #[arg(long)]
    api_key: Option<String>,

    /// Append logs to this file (stderr is unusable in raw mode)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    let config = Config::load().context("failed to load configuration")?;
    let api_key = config.resolve_api_key(args.api_key.clone())?;

    let weather = match &config.weather_url {
        Some(url) => WeatherClient::with_base_url(api_key, url),
        None => WeatherClient::new(api_key),
    };
    let locate = match &config.locate_url {
        Some(url) => LocateClient::with_base_url(config.geolocate, url),
        None => LocateClient::new(config.geolocate),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, weather, locate, config.geolocate, args.city).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

struct Ui {
    backdrop: Backdrop,
    search: SearchBar,
    panel: WeatherPanel,
    help: HelpBar,
}

impl Ui {
    fn new() -> Self {
        Self {
            backdrop: Backdrop::new(),
            search: SearchBar::new(),
            panel: WeatherPanel::new(),
            help: HelpBar::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.backdrop.render(frame, area, &state.scene);

        let [search_area, panel_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                value: &state.search.value,
                focused: state.search.focused,
            },
        );
        self.panel.render(
            frame,
            panel_area,
            WeatherPanelProps {
                ui: &state.ui,
                weather: state.weather.as_ref(),
                loading: state.loading,
                tick: state.tick,
                geolocate_enabled: state.geolocate_enabled,
            },
        );
        self.help.render(
            frame,
            help_area,
            HelpBarProps {
                query_readout: state.nav.query_readout(),
            },
        );
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(width, height) = event {
            return EventOutcome::action(Action::UiResize(*width, *height)).with_render();
        }

        if let EventKind::Key(key) = event {
            if key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
                && key.code == crossterm::event::KeyCode::Char('c')
            {
                return EventOutcome::action(Action::Quit);
            }
        }

        if state.search.focused {
            if let EventKind::Key(key) = event {
                if key.code == crossterm::event::KeyCode::Esc {
                    return EventOutcome::action(Action::SearchBlur);
                }
            }
            let props = SearchBarProps {
                value: &state.search.value,
                focused: true,
            };
            return EventOutcome::from_actions(self.search.handle_event(event, props));
        }

        let props = WeatherPanelProps {
            ui: &state.ui,
            weather: state.weather.as_ref(),
            loading: state.loading,
            tick: state.tick,
            geolocate_enabled: state.geolocate_enabled,
        };
        EventOutcome::from_actions(self.panel.handle_event(event, props))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    weather: WeatherClient,
    locate: LocateClient,
    geolocate_enabled: bool,
    city: Option<String>,
) -> io::Result<()> {
    let store = EffectStore::new(AppState::new(geolocate_enabled), reduce);
    let mut runtime = Runtime::new(store);

    if let Ok(size) = terminal.size() {
        runtime.state_mut().terminal_size = (size.width, size.height);
    }

    // Animation timer
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(TICK_MS), || Action::Tick);

    // Deep link: look up the requested city without a history entry
    if let Some(city) = city {
        runtime.enqueue(Action::NavDeepLink(city));
    }

    let ui = RefCell::new(Ui::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &weather, &locate),
        )
        .await
}

/// Spawn the async work an effect asks for.
///
/// Both effects share the "weather" task key, so a newer lookup always
/// aborts the one still in flight.
fn handle_effect(
    effect: Effect,
    ctx: &mut EffectContext<Action>,
    weather: &WeatherClient,
    locate: &LocateClient,
) {
    match effect {
        Effect::FetchWeather { query, push } => {
            let weather = weather.clone();
            ctx.tasks().spawn("weather", async move {
                match weather.fetch(&query).await {
                    Ok(record) => Action::WeatherDidLoad {
                        record: Box::new(record),
                        push,
                    },
                    Err(e) => Action::WeatherDidError(e.to_string()),
                }
            });
        }
        Effect::Locate => {
            let weather = weather.clone();
            let locate = locate.clone();
            ctx.tasks().spawn("weather", async move {
                let coords = match locate.locate().await {
                    Ok(coords) => coords,
                    Err(e) => return Action::LocateDidError(e.to_string()),
                };
                // The coordinate fetch resolves the canonical city name;
                // submitting that name runs a normal by-name lookup so
                // history ends up keyed by name, not coordinates.
                match weather
                    .fetch_by_coordinates(coords.latitude, coords.longitude)
                    .await
                {
                    Ok(record) => Action::SearchSubmit(record.city),
                    Err(e) => Action::WeatherDidError(e.to_string()),
                }
            });
        }
    }
}
