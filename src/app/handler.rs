use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::transition::Visibility;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    let quit = (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        || key.code == KeyCode::Esc;

    let actions = if quit {
        vec![Action::Quit]
    } else {
        match state.view.visibility {
            Visibility::ShowForm => handle_form_key(state, key),
            Visibility::ShowPanel => handle_panel_key(key),
        }
    };

    // Held keys may keep editing text, but never submit, delete or quit.
    if key.kind == KeyEventKind::Repeat {
        return vec![];
    }
    actions
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let input = &mut state.view.input;
    match key.code {
        KeyCode::Enter => {
            return vec![Action::SubmitFocus {
                text: input.text.clone(),
            }]
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    vec![]
}

fn handle_panel_key(key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => vec![Action::DeleteFocus],
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.view.visibility != Visibility::ShowPanel {
        return vec![];
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let button = layout::compute_layout(state.viewport).delete_button;
    if contains(button, mouse.column, mouse.row) {
        state.dirty = true;
        vec![Action::DeleteFocus]
    } else {
        vec![]
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
