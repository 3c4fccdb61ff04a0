//! Meetings module - attended meetings with a summary preview

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{list_row_at, render_list, step_selection, Action, Context, Module, Surface, UiEvent};
use crate::domain::{Catalog, MeetingStatus};
use crate::ui::widgets::SentimentBar;

const MEETING_ROW_HEIGHT: u16 = 2;

#[derive(Default)]
pub struct Meetings {
    selected: usize,
    offset: Cell<usize>,
}

impl Meetings {
    pub fn new() -> Self {
        Self::default()
    }

    fn layout(area: Rect) -> (Rect, Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        (cols[0], cols[1])
    }

    fn open_selected(&self, ctx: &Context) -> Action {
        match ctx.meeting_ids.get(self.selected) {
            Some(id) => Action::Dispatch(UiEvent::ShowDetail(*id)),
            None => Action::None,
        }
    }
}

fn status_color(status: MeetingStatus) -> Color {
    match status {
        MeetingStatus::Completed => Color::Green,
        MeetingStatus::Processing => Color::Yellow,
        MeetingStatus::Pending => Color::Gray,
        MeetingStatus::Failed => Color::Red,
    }
}

impl Module for Meetings {
    fn id(&self) -> &'static str {
        "meetings"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let len = ctx.meeting_ids.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = step_selection(self.selected, len, true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = step_selection(self.selected, len, false);
                Action::None
            }
            KeyCode::Enter => self.open_selected(ctx),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, column: u16, row: u16, ctx: &mut Context) -> Action {
        let (list, _) = Self::layout(area);
        match list_row_at(list, column, row, MEETING_ROW_HEIGHT, self.offset.get()) {
            Some(index) if index < ctx.meeting_ids.len() => {
                self.selected = index;
                self.open_selected(ctx)
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, _surface: &Surface) {
        let (list_area, preview_area) = Self::layout(area);

        let items: Vec<ListItem> = catalog
            .meetings
            .iter()
            .map(|meeting| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{:<11}", meeting.status.label()),
                            Style::default().fg(status_color(meeting.status)),
                        ),
                        Span::raw(meeting.title.clone()),
                    ]),
                    Line::from(Span::styled(
                        format!("           {}", meeting.meta),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("MEETINGS")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        render_list(frame, list, list_area, self.selected, &self.offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("PREVIEW")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(preview_area);
        frame.render_widget(block, preview_area);

        let Some(meeting) = catalog.meetings.get(self.selected) else {
            frame.render_widget(
                Paragraph::new("No meetings recorded").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                meeting.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                meeting.meta.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(meeting.summary.clone()),
            Line::from(""),
            Line::from(format!(
                "{} topics ({} min) • {} action items",
                meeting.topics.len(),
                meeting.total_topic_minutes(),
                meeting.action_items.len()
            )),
        ];
        if meeting.sentiment.is_some() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Enter: full summary",
            Style::default().fg(Color::Yellow),
        )));

        let bar_height = u16::from(meeting.sentiment.is_some());
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(bar_height)])
            .split(inner);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), parts[0]);
        if let Some(sentiment) = &meeting.sentiment {
            frame.render_widget(SentimentBar::new(sentiment), parts[1]);
        }
    }
}
