use crate::app::action::Action;
use crate::app::state::AppState;
use crate::focus::FocusWidget;
use crate::store::{KeyValueStore, StoreError};
use tracing::warn;

/// Carry out one action against the widget. Storage failures become a
/// status-bar notice; the view keeps whatever it showed before.
pub fn apply_action<S: KeyValueStore>(
    widget: &mut FocusWidget<S>,
    state: &mut AppState,
    action: Action,
) {
    match action {
        Action::SubmitFocus { text } => {
            match widget.submit(&mut state.view, text) {
                Ok(()) => state.info_notice("Focus saved"),
                Err(e) => {
                    warn!(error = %e, "submit failed");
                    state.error_notice(failure_notice("save", &e));
                }
            }
            state.dirty = true;
        }
        Action::DeleteFocus => {
            match widget.delete(&mut state.view) {
                Ok(()) => state.info_notice("Focus cleared"),
                Err(e) => {
                    warn!(error = %e, "delete failed");
                    state.error_notice(failure_notice("delete", &e));
                }
            }
            state.dirty = true;
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}

/// Notice text for a failed store operation. A corrupt store file blocks
/// every operation until it is repaired or removed, so that case names it.
pub fn failure_notice(verb: &str, e: &StoreError) -> String {
    match e {
        StoreError::Parse { path, .. } => format!(
            "Could not {} focus: {} is corrupt; fix or remove it",
            verb,
            path.display()
        ),
        _ => format!("Could not {} focus: {}", verb, e),
    }
}
