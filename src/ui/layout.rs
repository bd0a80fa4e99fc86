use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

const MAX_WIDTH: u16 = 60;
const BUTTON_WIDTH: u16 = 5;

pub struct WidgetLayout {
    pub header: Rect,
    pub label: Rect,
    /// Form input box or focus panel, whichever is visible.
    pub body: Rect,
    pub panel_text: Rect,
    pub delete_button: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> WidgetLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Centered column
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .flex(Flex::Center)
        .constraints([Constraint::Length(content.width.min(MAX_WIDTH))])
        .split(content)[0];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Status label
            Constraint::Length(3), // Form or panel
        ])
        .split(column);

    let header = rows[0];
    let label = rows[2];
    let body = rows[3];

    // Panel: focus text | delete button
    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
        .split(body);

    WidgetLayout {
        header,
        label,
        body,
        panel_text: panel_chunks[0],
        delete_button: panel_chunks[1],
        status_bar,
    }
}
