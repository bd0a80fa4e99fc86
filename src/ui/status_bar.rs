use crate::app::state::*;
use crate::app::transition::Visibility;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (text, style) = match &state.notice {
        Some(notice) => {
            let style = match notice.level {
                NoticeLevel::Info => Theme::notice_info(),
                NoticeLevel::Error => Theme::notice_error(),
            };
            (notice.text.as_str(), style)
        }
        None => (hints(state.view.visibility), Theme::status_bar()),
    };

    // Pad to fill remaining space
    let padded = format!(" {:<width$}", text, width = (area.width as usize).saturating_sub(1));
    frame.render_widget(Paragraph::new(Span::styled(padded, style)), area);
}

fn hints(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::ShowForm => "Enter save  Ctrl-U clear  Esc quit",
        Visibility::ShowPanel => "x/Del delete  q quit",
    }
}
