use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};

use delegate_dash::app::{App, InputMode, StatusLevel};
use delegate_dash::config::{self, Config};
use delegate_dash::core::{Action, Command, UiEvent};
use delegate_dash::domain::{Catalog, MeetingId};
use delegate_dash::infrastructure::logging;
use delegate_dash::infrastructure::{RuntimeBridge, RuntimeCommand};
use delegate_dash::ui;

#[derive(Debug, Parser)]
#[command(
    name = "delegate-dash",
    version,
    about = "DelegateAI: meeting summaries and constituent insights in the terminal"
)]
struct Args {
    /// Config file (defaults to ~/.config/delegate-dash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog TOML replacing the built-in demo data
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// View selected at startup
    #[arg(long)]
    view: Option<String>,

    /// Open this meeting's summary at startup
    #[arg(long)]
    show: Option<MeetingId>,

    /// Show final counter values without animating
    #[arg(long)]
    no_animate: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the built-in catalog as TOML and exit
    #[arg(long)]
    print_catalog: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_catalog {
        let toml = Catalog::builtin().to_toml_string()?;
        io::stdout().write_all(toml.as_bytes())?;
        return Ok(());
    }

    let config = config::load(args.config.as_deref());
    if let Some(path) = args.log_file.clone().or_else(|| config.log_path()) {
        logging::init(&path, &config.log_level)?;
    }

    let catalog = load_catalog(&args, &config)?;
    info!(
        meetings = catalog.meetings.len(),
        views = catalog.nav.len(),
        "catalog loaded"
    );

    let mut app = App::new(catalog);
    let initial_view = args
        .view
        .clone()
        .or_else(|| config.initial_view.clone())
        .or_else(|| app.catalog.default_view().map(|key| key.to_string()));
    if let Some(view) = initial_view {
        app.select_view(view.as_str());
    }
    if let Some(id) = args.show {
        app.open_meeting(id);
    }
    app.start_counters(config.animate && !args.no_animate);

    let runtime = RuntimeBridge::new(Duration::from_millis(config.tick_ms))?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// An explicit catalog that cannot be loaded is fatal
fn load_catalog(args: &Args, config: &Config) -> Result<Catalog> {
    let path = args.catalog.clone().or_else(|| config.catalog_path());
    match path {
        Some(path) => {
            Catalog::load(&path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let frame_rate = Duration::from_millis(16);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        if event::poll(frame_rate)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, text);
        }
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        app.apply_runtime_event(event);
    }
    for request in app.take_animation_requests() {
        if let Err(err) = runtime.send(RuntimeCommand::Animate(request)) {
            warn!(error = %err, "animation worker unavailable");
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if app.is_modal_open() {
        handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Tab => app.cycle_view(true),
        KeyCode::BackTab => app.cycle_view(false),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = (ch as usize) - ('1' as usize);
            app.select_nav_index(index);
        }
        _ => forward_to_module(app, key),
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_meeting(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_modal(true),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_modal(false),
        KeyCode::Char('y') => {
            let action = app.execute_command(&Command::Copy);
            app.apply_action(action);
        }
        KeyCode::Char('e') => {
            let action = app.execute_command(&Command::Export);
            app.apply_action(action);
        }
        _ => {}
    }
}

fn forward_to_module(app: &mut App, key: KeyEvent) {
    let mut ctx = std::mem::take(&mut app.ctx);
    let action = match app.active_module_mut() {
        Some(module) => module.handle_key(key, &mut ctx),
        None => Action::None,
    };
    app.ctx = ctx;
    app.apply_action(action);
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, size, col, row),
        MouseEventKind::ScrollUp if app.is_modal_open() => app.scroll_modal(false),
        MouseEventKind::ScrollDown if app.is_modal_open() => app.scroll_modal(true),
        _ => {}
    }
}

fn handle_click(app: &mut App, size: Rect, col: u16, row: u16) {
    if app.is_modal_open() {
        let event = if ui::layout::rect_contains(ui::layout::modal_area(size), col, row) {
            UiEvent::ContentClick
        } else {
            UiEvent::BackdropClick
        };
        app.dispatch(event);
        return;
    }

    let areas = ui::layout::areas(size);
    if let Some(index) = ui::layout::sidebar_entry_at(areas.sidebar, col, row) {
        app.select_nav_index(index);
        return;
    }

    if ui::layout::rect_contains(areas.panel, col, row) {
        let mut ctx = std::mem::take(&mut app.ctx);
        let action = match app.active_module_mut() {
            Some(module) => module.handle_click(areas.panel, col, row, &mut ctx),
            None => Action::None,
        };
        app.ctx = ctx;
        app.apply_action(action);
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(&text).is_ok() {
                let chars = text.chars().count();
                app.set_status(format!("Copied {} characters", chars), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
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
