//! Feedback module - constituent messages with sentiment tags

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{list_row_at, render_list, step_selection, Action, Context, Module, Surface};
use crate::domain::{Catalog, Tone};
use crate::ui::widgets::tone_color;

#[derive(Default)]
pub struct Feedback {
    selected: usize,
    offset: Cell<usize>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    fn layout(area: Rect) -> (Rect, Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (rows[0], rows[1])
    }
}

/// (positive, neutral or mixed, negative) message counts
pub fn tone_counts(catalog: &Catalog) -> (usize, usize, usize) {
    catalog
        .feedback
        .iter()
        .fold((0, 0, 0), |(pos, mid, neg), entry| match entry.sentiment {
            Tone::Positive => (pos + 1, mid, neg),
            Tone::Neutral | Tone::Mixed => (pos, mid + 1, neg),
            Tone::Negative => (pos, mid, neg + 1),
        })
}

impl Module for Feedback {
    fn id(&self) -> &'static str {
        "feedback"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = step_selection(self.selected, ctx.feedback_len, true);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = step_selection(self.selected, ctx.feedback_len, false);
            }
            _ => {}
        }
        Action::None
    }

    fn handle_click(&mut self, area: Rect, column: u16, row: u16, ctx: &mut Context) -> Action {
        let (list, _) = Self::layout(area);
        if let Some(index) = list_row_at(list, column, row, 1, self.offset.get()) {
            if index < ctx.feedback_len {
                self.selected = index;
            }
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, _surface: &Surface) {
        let (list_area, detail_area) = Self::layout(area);
        let (pos, mid, neg) = tone_counts(catalog);

        let items: Vec<ListItem> = catalog
            .feedback
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<9}", entry.sentiment.label()),
                        Style::default().fg(tone_color(entry.sentiment)),
                    ),
                    Span::raw(format!("{:<20}", entry.constituent)),
                    Span::styled(
                        entry.received.clone(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let title = format!("FEEDBACK  +{} ~{} -{}", pos, mid, neg);
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        render_list(frame, list, list_area, self.selected, &self.offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("MESSAGE")
            .border_style(Style::default().fg(Color::DarkGray));
        let lines = match catalog.feedback.get(self.selected) {
            Some(entry) => vec![
                Line::from(vec![
                    Span::styled(
                        entry.constituent.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} • {}", entry.role, entry.department),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(""),
                Line::from(entry.message.clone()),
            ],
            None => vec![Line::from(Span::styled(
                "No feedback received",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            detail_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_counts_builtin() {
        let catalog = Catalog::builtin();
        let (pos, mid, neg) = tone_counts(&catalog);
        assert_eq!(pos + mid + neg, catalog.feedback.len());
        assert!(pos > 0);
    }
}
