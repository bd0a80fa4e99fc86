mod form;
pub mod layout;
mod panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::app::transition::Visibility;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

const TITLE: &str = "Daily focus";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = layout::compute_layout(area);

    render_header(frame, layout.header, state);
    frame.render_widget(
        Paragraph::new(state.view.status_label.as_str())
            .alignment(Alignment::Center)
            .style(Theme::status_label()),
        layout.label,
    );

    match state.view.visibility {
        Visibility::ShowForm => form::render(frame, layout.body, state),
        Visibility::ShowPanel => panel::render(frame, &layout, state),
    }

    status_bar::render(frame, layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let date = if state.show_date {
        chrono::Local::now().format("%A, %B %-d").to_string()
    } else {
        String::new()
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(date.len() as u16)])
        .split(area);

    frame.render_widget(Paragraph::new(Span::styled(TITLE, Theme::title())), chunks[0]);
    frame.render_widget(Paragraph::new(Span::styled(date, Theme::date())), chunks[1]);
}
