use crate::app::state::*;
use crate::ui::layout::WidgetLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Draw the saved focus and its delete button.
pub fn render(frame: &mut Frame, layout: &WidgetLayout, state: &AppState) {
    let text_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let text = Paragraph::new(state.view.panel_text.as_str())
        .style(Theme::focus_text())
        .block(text_block);
    frame.render_widget(text, layout.panel_text);

    let button_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::delete_button());
    let button = Paragraph::new(state.view.delete_label.as_str())
        .alignment(Alignment::Center)
        .style(Theme::delete_button())
        .block(button_block);
    frame.render_widget(button, layout.delete_button);
}
