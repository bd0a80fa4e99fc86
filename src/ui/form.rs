use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const PROMPT: &str = "❯ ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = &state.view.input;
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Theme::ACCENT)),
        Span::styled(input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    // Prompt chevron is two columns wide.
    let cursor_x = inner.x as usize + 2 + input.cursor_column();
    let max_x = inner.right().saturating_sub(1) as usize;
    frame.set_cursor_position((cursor_x.min(max_x) as u16, inner.y));
}
