use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{
    update, Action, Command, Context, Effect, Module, NotifyLevel, Surface, UiEvent, UiState,
};
use crate::domain::{Catalog, MeetingId, MeetingRecord, ViewKey};
use crate::infrastructure::{AnimationRequest, RuntimeEvent};
use crate::modules::{export, Dashboard, Feedback, Insights, Meetings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct App {
    pub catalog: Catalog,
    pub state: UiState,
    pub surface: Surface,
    pub ctx: Context,

    pub dashboard: Dashboard,
    pub meetings: Meetings,
    pub feedback: Feedback,
    pub insights: Insights,

    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub modal_scroll: u16,
    pub help_open: bool,
    pub should_quit: bool,

    /// Overrides the data directory for exports
    pub export_dir: Option<PathBuf>,

    pending_animations: Vec<AnimationRequest>,
    pending_copy: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let surface = Surface::new(&catalog);
        let mut app = Self {
            catalog,
            state: UiState::default(),
            surface,
            ctx: Context::new(),
            dashboard: Dashboard::new(),
            meetings: Meetings::new(),
            feedback: Feedback::new(),
            insights: Insights::new(),
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            modal_scroll: 0,
            help_open: false,
            should_quit: false,
            export_dir: None,
            pending_animations: Vec::new(),
            pending_copy: None,
        };
        app.sync_context();
        app
    }

    /// Run an event through the reducer and apply the resulting effects
    pub fn dispatch(&mut self, event: UiEvent) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, &event, &self.catalog);
        self.state = state;

        if effects.is_empty() {
            debug!(?event, "event produced no effects");
        }
        for effect in &effects {
            if matches!(effect, Effect::OpenModal { .. }) {
                self.modal_scroll = 0;
            }
            self.surface.apply(effect);
        }
        self.sync_context();
    }

    pub fn select_view(&mut self, key: impl Into<ViewKey>) {
        let key = key.into();
        info!(view = %key, "select view");
        self.dispatch(UiEvent::SelectView(key));
    }

    /// Select the nth navigation entry (0-based)
    pub fn select_nav_index(&mut self, index: usize) {
        if let Some(entry) = self.catalog.nav.get(index) {
            let key = entry.key.clone();
            self.select_view(key);
        }
    }

    pub fn cycle_view(&mut self, forward: bool) {
        let len = self.catalog.nav.len();
        if len == 0 {
            return;
        }
        let current = self
            .state
            .active_nav
            .as_ref()
            .and_then(|key| self.catalog.nav_index(key));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.select_nav_index(next);
    }

    pub fn open_meeting(&mut self, id: MeetingId) {
        self.dispatch(UiEvent::ShowDetail(id));
    }

    pub fn close_meeting(&mut self) {
        self.dispatch(UiEvent::CloseDetail);
    }

    pub fn is_modal_open(&self) -> bool {
        self.surface.modal_visible
    }

    pub fn open_record(&self) -> Option<&MeetingRecord> {
        self.state.modal.record()
    }

    /// Id of the module drawing the visible view panel
    pub fn active_module_id(&self) -> Option<&'static str> {
        self.active_module().map(|module| module.id())
    }

    /// Module whose id matches the active panel key
    pub fn active_module_mut(&mut self) -> Option<&mut dyn Module> {
        let key = self.surface.active_panels.iter().next()?.clone();
        let modules: [&mut dyn Module; 4] = [
            &mut self.dashboard,
            &mut self.meetings,
            &mut self.feedback,
            &mut self.insights,
        ];
        modules
            .into_iter()
            .find(|module| module.id() == key.as_str())
    }

    pub fn active_module(&self) -> Option<&dyn Module> {
        let key = self.surface.active_panels.iter().next()?;
        let modules: [&dyn Module; 4] = [
            &self.dashboard,
            &self.meetings,
            &self.feedback,
            &self.insights,
        ];
        modules
            .into_iter()
            .find(|module| module.id() == key.as_str())
    }

    pub fn sync_context(&mut self) {
        self.ctx.activity_len = self.catalog.activity.len();
        self.ctx.meeting_ids = self.catalog.meetings.iter().map(|m| m.id).collect();
        self.ctx.feedback_len = self.catalog.feedback.len();
        self.ctx.issue_meetings = self
            .catalog
            .ranked_issues()
            .iter()
            .map(|issue| issue.meeting)
            .collect();
    }

    pub fn scroll_modal(&mut self, down: bool) {
        if down {
            let max = self.surface.modal_body.len().saturating_sub(1) as u16;
            self.modal_scroll = (self.modal_scroll + 1).min(max);
        } else {
            self.modal_scroll = self.modal_scroll.saturating_sub(1);
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Parse and run the command bar input
    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        let cmd = crate::core::parse_command(&input);
        self.command.last = Some(input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    /// Queue a counter animation; unknown targets are ignored
    pub fn animate(&mut self, target: &str, start: i64, end: i64, duration_ms: u64) {
        if !self.surface.has_counter(target) {
            debug!(target_id = target, "no counter element");
            return;
        }
        self.surface.set_counter(target, start);
        self.pending_animations.push(AnimationRequest {
            target: target.to_string(),
            start,
            end,
            duration_ms,
        });
    }

    /// Start every catalog counter, or jump straight to the final values
    pub fn start_counters(&mut self, animate: bool) {
        let stats = self.catalog.stats.clone();
        for stat in stats {
            if animate {
                self.animate(&stat.target, stat.start, stat.end, stat.duration_ms);
            } else {
                self.surface.set_counter(&stat.target, stat.end);
            }
        }
    }

    pub fn take_animation_requests(&mut self) -> Vec<AnimationRequest> {
        std::mem::take(&mut self.pending_animations)
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    pub fn apply_runtime_event(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::CounterValue { target, value } => {
                self.surface.set_counter(&target, value);
            }
            RuntimeEvent::CounterFinished { target } => {
                debug!(target_id = %target, "counter finished");
            }
        }
    }

    fn export_with(&self, f: impl FnOnce(&std::path::Path) -> Action) -> Action {
        match &self.export_dir {
            Some(dir) => f(dir),
            None => export::with_export_dir(f),
        }
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::View(key) => {
                self.select_view(key.as_str());
                Action::None
            }
            Command::Show(id) => Action::Dispatch(UiEvent::ShowDetail(*id)),
            Command::Close => Action::Dispatch(UiEvent::CloseDetail),
            Command::Export => {
                let record = self.open_record();
                self.export_with(|dir| export::export_meeting(record, dir))
            }
            Command::ExportActions => {
                let meetings = &self.catalog.meetings;
                self.export_with(|dir| export::export_action_items(meetings, dir))
            }
            Command::Copy => match self.open_record() {
                Some(record) => Action::Copy(record.plain_text()),
                None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
            },
            Command::Help => Action::Help,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Dispatch(event) => self.dispatch(event),
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::Help => self.help_open = !self.help_open,
            Action::Quit => self.should_quit = true,
        }
    }
}
