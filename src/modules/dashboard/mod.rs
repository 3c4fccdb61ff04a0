//! Dashboard module - stat counters, recent activity and sentiment overview

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::core::{
    format_count, list_row_at, render_list, step_selection, Action, Context, Module, Surface,
    UiEvent,
};
use crate::domain::Catalog;
use crate::ui::widgets::SentimentBar;

/// Each activity row spans a label line and a detail line
pub const ACTIVITY_ROW_HEIGHT: u16 = 2;

pub struct Dashboard {
    selected: usize,
    offset: Cell<usize>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: Cell::new(0),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// (stats, activity, overview)
    fn layout(area: Rect) -> (Rect, Rect, Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        (rows[0], bottom[0], bottom[1])
    }

    fn activate(&self) -> Action {
        Action::Dispatch(UiEvent::ActivateActivity(self.selected))
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = step_selection(self.selected, ctx.activity_len, true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = step_selection(self.selected, ctx.activity_len, false);
                Action::None
            }
            KeyCode::Enter if ctx.activity_len > 0 => self.activate(),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, area: Rect, column: u16, row: u16, ctx: &mut Context) -> Action {
        let (_, activity, _) = Self::layout(area);
        match list_row_at(activity, column, row, ACTIVITY_ROW_HEIGHT, self.offset.get()) {
            Some(index) if index < ctx.activity_len => {
                self.selected = index;
                self.activate()
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, surface: &Surface) {
        let (stats, activity, overview) = Self::layout(area);
        self.render_stats(frame, stats, catalog, surface);
        self.render_activity(frame, activity, catalog);
        self.render_overview(frame, overview, catalog);
    }
}

impl Dashboard {
    fn render_stats(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, surface: &Surface) {
        if catalog.stats.is_empty() {
            return;
        }
        let count = catalog.stats.len() as u32;
        let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (stat, card) in catalog.stats.iter().zip(cards.iter()) {
            let value = surface.counter(&stat.target).unwrap_or(stat.start);
            let lines = vec![
                Line::from(Span::styled(
                    format_count(value),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    stat.label.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(Paragraph::new(lines).block(block), *card);
        }
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect, catalog: &Catalog) {
        let items: Vec<ListItem> = catalog
            .activity
            .iter()
            .map(|item| {
                let mut head = vec![
                    Span::styled(
                        format!("{} ", item.kind.icon()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(item.label.clone()),
                ];
                if item.meeting.is_some() {
                    head.push(Span::styled(
                        "  [View Summary]",
                        Style::default().fg(Color::Yellow),
                    ));
                }
                ListItem::new(vec![
                    Line::from(head),
                    Line::from(Span::styled(
                        format!("  {}", item.detail),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title("RECENT ACTIVITY")
            .border_style(Style::default().fg(Color::Cyan));
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        render_list(frame, list, area, self.selected, &self.offset);
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect, catalog: &Catalog) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("SENTIMENT")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        for meeting in &catalog.meetings {
            let Some(sentiment) = &meeting.sentiment else {
                continue;
            };
            if y + 1 >= inner.y + inner.height {
                break;
            }
            frame.render_widget(
                Paragraph::new(meeting.title.clone()),
                Rect::new(inner.x, y, inner.width, 1),
            );
            frame.render_widget(
                SentimentBar::new(sentiment),
                Rect::new(inner.x, y + 1, inner.width, 1),
            );
            y += 3;
        }
    }
}
