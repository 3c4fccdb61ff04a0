use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::core::BodyLine;
use widgets::{sentiment_bar_text, tone_color};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_sidebar(f, areas.sidebar, app);
    draw_panel(f, areas.panel, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.surface.modal_visible {
        draw_modal(f, layout::modal_area(areas.size), app);
    }
    if app.help_open {
        draw_help_popup(f, layout::help_area(areas.size));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            app.surface.title.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.surface.subtitle.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let left = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            "DelegateAI",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} meetings", app.catalog.meetings.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(brand, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .catalog
        .nav
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_active = app.surface.active_nav.contains(&entry.key);
            let marker = if is_active { "> " } else { "  " };
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(entry.label.clone()),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Views")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &App) {
    match app.active_module() {
        Some(module) => module.render(f, area, &app.catalog, &app.surface),
        None => {
            let paragraph = Paragraph::new("No panel for this view")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let view = app
        .state
        .active_panel
        .as_ref()
        .map(|key| key.to_string())
        .unwrap_or_else(|| "--".to_string());
    let mut spans = vec![
        Span::styled("View ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", view)),
    ];
    if let Some(record) = app.open_record() {
        spans.push(Span::styled("Meeting ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("#{} {}", record.id, record.title)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to dashboard"),
        ("meetings", "Go to meetings"),
        ("feedback", "Go to feedback"),
        ("insights", "Go to insights"),
        ("view", "Select view by key"),
        ("show", "Open meeting summary by id"),
        ("close", "Close meeting summary"),
        ("export", "Export open meeting (JSON)"),
        ("export-actions", "Export all action items (CSV)"),
        ("copy", "Copy open meeting summary"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input).unwrap_or("view | show <id> | export");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = if app.surface.modal_visible {
        &[("j/k", "scroll"), ("y", "copy"), ("e", "export"), ("Esc", "close")]
    } else {
        &[
            ("1-4", "view"),
            ("Tab", "next"),
            ("Enter", "open"),
            (":", "command"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}  ", label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_modal(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(body_lines(&app.surface.modal_body)))
        .block(
            Block::default()
                .title(Span::styled(
                    app.surface.modal_title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.modal_scroll, 0));
    f.render_widget(paragraph, area);
}

/// Styled terminal lines for the modal body
pub fn body_lines(body: &[BodyLine]) -> Vec<Line<'static>> {
    body.iter()
        .map(|line| match line {
            BodyLine::Meta(text) => Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            BodyLine::Heading(text) => Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )),
            BodyLine::Paragraph(text) => Line::from(text.clone()),
            BodyLine::Bullet { label, text } => {
                let mut spans = vec![Span::raw("• ")];
                if let Some(label) = label {
                    spans.push(Span::styled(
                        format!("{} ", label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                }
                spans.push(Span::raw(text.clone()));
                Line::from(spans)
            }
            BodyLine::Quote { text, speaker } => Line::from(vec![
                Span::styled(
                    format!("\"{}\"", text),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
                Span::styled(
                    format!(" - {}", speaker),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            BodyLine::Sentiment(breakdown) => Line::from(vec![
                Span::styled(
                    format!("{} ", sentiment_bar_text(breakdown, 20)),
                    Style::default().fg(tone_color(breakdown.tone)),
                ),
                Span::styled(
                    format!("{} ", breakdown.tone.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("({})", breakdown.label())),
            ]),
            BodyLine::Callout { title, text } => Line::from(vec![
                Span::styled(
                    format!("! {}: ", title),
                    Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
                ),
                Span::raw(text.clone()),
            ]),
            BodyLine::Blank => Line::from(""),
        })
        .collect()
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-9        Select view"),
        Line::from("  Tab/S-Tab  Next / previous view"),
        Line::from("  j / k      Move selection"),
        Line::from("  Enter      Open meeting summary"),
        Line::from("  Mouse      Click views, rows, backdrop"),
        Line::from(""),
        Line::from("Meeting summary"),
        Line::from("  j / k      Scroll"),
        Line::from("  y          Copy as text"),
        Line::from("  e          Export JSON"),
        Line::from("  Esc        Close"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :view <key>  :show <id>  :close"),
        Line::from("  :export  :export-actions  :copy"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
