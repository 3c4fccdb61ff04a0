use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub panel: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(vertical[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        sidebar: main_chunks[0],
        panel: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

/// Content rectangle of the meeting detail modal; everything else is backdrop
pub fn modal_area(size: Rect) -> Rect {
    centered_rect(80, 80, size)
}

pub fn help_area(size: Rect) -> Rect {
    centered_rect(60, 60, size)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Navigation entry under a click in the sidebar (one bordered row per entry)
pub fn sidebar_entry_at(sidebar: Rect, column: u16, row: u16) -> Option<usize> {
    if !rect_contains(sidebar, column, row) {
        return None;
    }
    let first = sidebar.y + 1;
    let last = sidebar.y + sidebar.height.saturating_sub(1);
    if row < first || row >= last {
        return None;
    }
    Some((row - first) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_area_leaves_backdrop() {
        let size = Rect::new(0, 0, 100, 40);
        let modal = modal_area(size);
        assert!(rect_contains(modal, 50, 20));
        assert!(!rect_contains(modal, 0, 0));
        assert!(!rect_contains(modal, 99, 39));
    }

    #[test]
    fn test_sidebar_entry_at() {
        let ui = areas(Rect::new(0, 0, 100, 40));
        let first_row = ui.sidebar.y + 1;
        assert_eq!(sidebar_entry_at(ui.sidebar, 2, first_row), Some(0));
        assert_eq!(sidebar_entry_at(ui.sidebar, 2, first_row + 2), Some(2));
        assert_eq!(sidebar_entry_at(ui.sidebar, 2, ui.sidebar.y), None);
        assert_eq!(sidebar_entry_at(ui.sidebar, 50, first_row), None);
    }
}
