//! Module trait for per-view UI components

use std::cell::Cell;

use crossterm::event::KeyEvent;
use ratatui::widgets::{List, ListState};
use ratatui::{layout::Rect, Frame};

use super::{Action, Context, Surface};
use crate::domain::Catalog;

/// Trait for UI modules that can handle input and render a view panel
pub trait Module {
    /// Module identifier, matching the view key it renders
    fn id(&self) -> &'static str;

    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    /// Handle a left click at (`column`, `row`) inside the panel `area`
    fn handle_click(&mut self, _area: Rect, _column: u16, _row: u16, _ctx: &mut Context) -> Action {
        Action::None
    }

    /// Render the module panel
    fn render(&self, frame: &mut Frame, area: Rect, catalog: &Catalog, surface: &Surface);
}

/// Move a list selection one step, clamped to `len`
pub fn step_selection(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

/// Render `list` with `selected` highlighted, keeping the scroll offset
/// ratatui settles on so clicks can be mapped back to rows
pub fn render_list(
    frame: &mut Frame,
    list: List,
    area: Rect,
    selected: usize,
    offset: &Cell<usize>,
) {
    let mut state = ListState::default()
        .with_selected(Some(selected))
        .with_offset(offset.get());
    frame.render_stateful_widget(list, area, &mut state);
    offset.set(state.offset());
}

/// Row index under `row` for a bordered list in `area`, one line per item
pub fn list_row_at(area: Rect, column: u16, row: u16, row_height: u16, offset: usize) -> Option<usize> {
    let inner_top = area.y.saturating_add(1);
    let inner_bottom = area.y.saturating_add(area.height).saturating_sub(1);
    let inside = column > area.x
        && column < area.x.saturating_add(area.width).saturating_sub(1)
        && row >= inner_top
        && row < inner_bottom;
    if !inside || row_height == 0 {
        return None;
    }
    Some(offset + ((row - inner_top) / row_height) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::widgets::{Block, Borders, ListItem};
    use ratatui::Terminal;

    #[test]
    fn test_step_selection_clamps() {
        assert_eq!(step_selection(0, 3, false), 0);
        assert_eq!(step_selection(1, 3, true), 2);
        assert_eq!(step_selection(2, 3, true), 2);
        assert_eq!(step_selection(5, 0, true), 0);
    }

    #[test]
    fn test_list_row_at() {
        let area = Rect::new(10, 5, 30, 10);
        assert_eq!(list_row_at(area, 12, 6, 1, 0), Some(0));
        assert_eq!(list_row_at(area, 12, 9, 2, 0), Some(1));
        assert_eq!(list_row_at(area, 12, 8, 1, 4), Some(6));
        // borders
        assert_eq!(list_row_at(area, 10, 6, 1, 0), None);
        assert_eq!(list_row_at(area, 12, 5, 1, 0), None);
        assert_eq!(list_row_at(area, 12, 14, 1, 0), None);
    }

    #[test]
    fn test_render_list_records_scroll_offset() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let offset = Cell::new(0);
        let area = Rect::new(0, 0, 20, 6);
        terminal
            .draw(|f| {
                let items: Vec<ListItem> = (0..10).map(|i| ListItem::new(format!("row {i}"))).collect();
                let list = List::new(items).block(Block::default().borders(Borders::ALL));
                render_list(f, list, area, 9, &offset);
            })
            .unwrap();
        // four visible rows ending at the selection
        assert_eq!(offset.get(), 6);
        assert_eq!(list_row_at(area, 2, 1, 1, offset.get()), Some(6));
    }
}
