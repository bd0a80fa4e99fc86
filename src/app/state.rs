use crate::config::UiConfig;
use crate::focus::ViewState;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Single-line text input. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient status-bar message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires_at: u64,
}

pub struct AppState {
    pub view: ViewState,
    pub notice: Option<Notice>,
    /// Last known terminal size, used for mouse hit-testing.
    pub viewport: Rect,
    pub tick_count: u64,
    pub notice_ticks: u64,
    pub show_date: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(view: ViewState, ui: &UiConfig) -> Self {
        Self {
            view,
            notice: None,
            viewport: Rect::default(),
            tick_count: 0,
            notice_ticks: ui.notice_ticks,
            show_date: ui.show_date,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn info_notice(&mut self, text: impl Into<String>) {
        self.set_notice(text.into(), NoticeLevel::Info);
    }

    pub fn error_notice(&mut self, text: impl Into<String>) {
        self.set_notice(text.into(), NoticeLevel::Error);
    }

    fn set_notice(&mut self, text: String, level: NoticeLevel) {
        self.notice = Some(Notice {
            text,
            level,
            expires_at: self.tick_count.saturating_add(self.notice_ticks),
        });
        self.dirty = true;
    }

    /// Advance the tick counter and drop an expired notice.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self
            .notice
            .as_ref()
            .is_some_and(|n| self.tick_count >= n.expires_at)
        {
            self.notice = None;
            self.dirty = true;
        }
    }
}
