//! Insights module - issues ranked by priority and mentions

use std::cell::Cell;
use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::{list_row_at, render_list, step_selection, Action, Context, Module, Surface, UiEvent};
use crate::domain::{Catalog, Priority};
use crate::ui::widgets::tone_color;

#[derive(Default)]
pub struct Insights {
    selected: usize,
    offset: Cell<usize>,
}

impl Insights {
    pub fn new() -> Self {
        Self::default()
    }

    fn layout(area: Rect) -> (Rect, Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (cols[0], cols[1])
    }

    fn open_selected(&self, ctx: &Context) -> Action {
        match ctx.issue_meetings.get(self.selected).copied().flatten() {
            Some(id) => Action::Dispatch(UiEvent::ShowDetail(id)),
            None => Action::None,
        }
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => Color::Red,
        Priority::High => Color::LightRed,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Gray,
    }
}

/// Mention totals per category label, largest first
pub fn category_totals(catalog: &Catalog) -> Vec<(&'static str, u32)> {
    let mut totals: BTreeMap<&'static str, u32> = BTreeMap::new();
    for issue in &catalog.issues {
        *totals.entry(issue.category.label()).or_default() += issue.mention_count;
    }
    let mut totals: Vec<(&'static str, u32)> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    totals
}

impl Module for Insights {
    fn id(&self) -> &'static str {
        "insights"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let len = ctx.issue_meetings.len();
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
        match list_row_at(list, column, row, 1, self.offset.get()) {
            Some(index) if index < ctx.issue_meetings.len() => {
                self.selected = index;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, _surface: &Surface) {
        let (list_area, side_area) = Self::layout(area);
        let ranked = catalog.ranked_issues();

        let items: Vec<ListItem> = ranked
            .iter()
            .map(|issue| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<7}", issue.priority.label()),
                        Style::default().fg(priority_color(issue.priority)),
                    ),
                    Span::raw(format!("{:<28}", issue.title)),
                    Span::styled(
                        format!("{:>3} mentions", issue.mention_count),
                        Style::default().fg(tone_color(issue.sentiment)),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("TOP ISSUES")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        render_list(frame, list, list_area, self.selected, &self.offset);

        let mut lines = Vec::new();
        if let Some(issue) = ranked.get(self.selected) {
            lines.push(Line::from(Span::styled(
                issue.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("{} • {}", issue.category.label(), issue.sentiment.label()),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(issue.description.clone()));
            if issue.meeting.is_some() {
                lines.push(Line::from(Span::styled(
                    "Enter: source meeting",
                    Style::default().fg(Color::Yellow),
                )));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "By category",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (label, total) in category_totals(catalog) {
            lines.push(Line::from(format!("{:<14}{:>4}", label, total)));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("DETAIL")
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .wrap(Wrap { trim: true }),
            side_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_category_totals_sorted() {
        let catalog = Catalog::builtin();
        let totals = category_totals(&catalog);
        assert_eq!(totals.first(), Some(&("Mental health", 14)));
        assert!(totals.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn test_enter_opens_linked_meeting() {
        let mut insights = Insights::new();
        let mut ctx = Context {
            issue_meetings: vec![Some(2), None],
            ..Context::new()
        };
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            insights.handle_key(enter, &mut ctx),
            Action::Dispatch(UiEvent::ShowDetail(2))
        );
        insights.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &mut ctx);
        assert_eq!(insights.handle_key(enter, &mut ctx), Action::None);
    }
}
