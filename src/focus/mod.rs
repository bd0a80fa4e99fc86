//! The focus widget: one persisted string, a form to set it and a panel to
//! show and delete it.
//!
//! Each operation computes a [`Transition`] with [`transition::apply`],
//! performs the storage effect, and only then repaints
//! the [`ViewState`]. A storage failure returns before the repaint, so the
//! screen keeps showing the last state that actually reached the store.

pub mod context;
pub mod view;

use crate::app::transition::{self, Effect, Intent, Transition, Visibility};
use crate::store::{KeyValueStore, StoreError};
use tracing::{debug, info};

pub use context::WidgetContext;
pub use view::ViewState;

pub struct FocusWidget<S> {
    ctx: WidgetContext,
    store: S,
}

impl<S: KeyValueStore> FocusWidget<S> {
    pub fn new(ctx: WidgetContext, store: S) -> Self {
        Self { ctx, store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted focus value, read fresh from the store.
    pub fn current(&self) -> Result<Option<String>, StoreError> {
        self.store.get(&self.ctx.key)
    }

    /// A view in the pre-initialization state for this widget's labels.
    pub fn blank_view(&self) -> ViewState {
        ViewState::new(&self.ctx)
    }

    /// Load-time initialization. Leaves `view` untouched when nothing is stored.
    pub fn initialize(&self, view: &mut ViewState) -> Result<Visibility, StoreError> {
        let current = self.current()?;
        let transition = Transition::settle(current);
        if transition.visibility == Visibility::ShowPanel {
            view.show(&transition, &self.ctx);
        }
        info!(key = %self.ctx.key, visibility = ?view.visibility, "focus initialized");
        Ok(view.visibility)
    }

    /// Persist `text` as the focus, clear the input and show the panel.
    pub fn submit(&mut self, view: &mut ViewState, text: String) -> Result<(), StoreError> {
        // Submit overwrites whatever is stored, so the old value is never read.
        let transition = transition::apply(None, &Intent::Submit(text));
        self.perform(&transition.effect)?;

        view.input.clear();
        view.show(&transition, &self.ctx);
        info!(len = view.panel_text.chars().count(), "focus submitted");
        Ok(())
    }

    /// Remove the focus and show the form again. Safe to call when nothing is stored.
    pub fn delete(&mut self, view: &mut ViewState) -> Result<(), StoreError> {
        let current = self.current()?;
        let transition = transition::apply(current.as_deref(), &Intent::Delete);
        self.perform(&transition.effect)?;

        view.show(&transition, &self.ctx);
        info!(had_value = current.is_some(), "focus deleted");
        Ok(())
    }

    fn perform(&mut self, effect: &Effect) -> Result<(), StoreError> {
        match effect {
            Effect::Store(text) => self.store.set(&self.ctx.key, text),
            Effect::Clear => self.store.remove(&self.ctx.key),
            Effect::None => {
                debug!("no storage effect");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    fn widget() -> FocusWidget<MemoryStore> {
        FocusWidget::new(WidgetContext::default(), MemoryStore::new())
    }

    /// Writes fail, reads succeed.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "read-only".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            self.set("", "")
        }
    }

    /// Reads fail, writes succeed.
    struct UnreadableStore(MemoryStore);

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: "unreadable".into(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "garbled"),
            })
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_submit_does_not_need_a_readable_store() {
        let mut w = FocusWidget::new(WidgetContext::default(), UnreadableStore(MemoryStore::new()));
        let mut view = w.blank_view();
        w.submit(&mut view, "Write report".into()).unwrap();
        assert_eq!(view.visibility, Visibility::ShowPanel);
        assert_eq!(
            w.store().0.get("focus").unwrap().as_deref(),
            Some("Write report")
        );
    }

    #[test]
    fn test_submit_round_trips_any_string() {
        for s in ["Write report", "", "  padded  ", "ünïcødé ✓", "a\"b\\c"] {
            let mut w = widget();
            let mut view = w.blank_view();
            w.submit(&mut view, s.to_string()).unwrap();
            assert_eq!(w.current().unwrap().as_deref(), Some(s));
        }
    }

    #[test]
    fn test_visibility_matches_presence_after_each_step() {
        let mut w = widget();
        let mut view = w.blank_view();
        let steps: [Option<&str>; 6] = [Some("a"), None, Some(""), Some("b"), None, None];
        for step in steps {
            match step {
                Some(text) => w.submit(&mut view, text.to_string()).unwrap(),
                None => w.delete(&mut view).unwrap(),
            }
            let stored = w.current().unwrap();
            assert_eq!(view.visibility, Visibility::for_value(stored.as_deref()));
        }
    }

    #[test]
    fn test_delete_clears_and_reload_reads_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");

        let mut w = FocusWidget::new(WidgetContext::default(), FileStore::new(&path));
        let mut view = w.blank_view();
        w.submit(&mut view, "Write report".into()).unwrap();
        w.delete(&mut view).unwrap();
        assert_eq!(w.current().unwrap(), None);

        let reloaded = FocusWidget::new(WidgetContext::default(), FileStore::new(&path));
        let mut fresh = reloaded.blank_view();
        assert_eq!(reloaded.initialize(&mut fresh).unwrap(), Visibility::ShowForm);
        assert_eq!(reloaded.current().unwrap(), None);
    }

    #[test]
    fn test_double_delete_matches_single_delete() {
        let mut once = widget();
        let mut once_view = once.blank_view();
        once.submit(&mut once_view, "x".into()).unwrap();
        once.delete(&mut once_view).unwrap();

        let mut twice = widget();
        let mut twice_view = twice.blank_view();
        twice.submit(&mut twice_view, "x".into()).unwrap();
        twice.delete(&mut twice_view).unwrap();
        twice.delete(&mut twice_view).unwrap();

        assert_eq!(once.current().unwrap(), twice.current().unwrap());
        assert_eq!(once_view.visibility, twice_view.visibility);
        assert_eq!(once_view.status_label, twice_view.status_label);
    }

    #[test]
    fn test_panel_labels_after_submit() {
        let mut w = widget();
        let mut view = w.blank_view();
        w.submit(&mut view, "Ship the release".into()).unwrap();
        assert_eq!(view.panel_text, "Ship the release");
        assert_eq!(view.delete_label, "X");
    }

    #[test]
    fn test_fresh_session_scenario() {
        let mut w = widget();
        let mut view = w.blank_view();
        assert_eq!(w.initialize(&mut view).unwrap(), Visibility::ShowForm);
        assert_eq!(view.status_label, "What is your main focus today");

        view.input.set_text("Write report");
        let text = view.input.text.clone();
        w.submit(&mut view, text).unwrap();
        assert_eq!(view.status_label, "today");
        assert_eq!(view.visibility, Visibility::ShowPanel);
        assert_eq!(view.panel_text, "Write report");
        assert!(view.input.text.is_empty());

        w.delete(&mut view).unwrap();
        assert_eq!(view.status_label, "What is your main focus today");
        assert_eq!(view.visibility, Visibility::ShowForm);
        assert_eq!(w.current().unwrap(), None);
    }

    #[test]
    fn test_initialize_with_stored_value_shows_panel() {
        let mut store = MemoryStore::new();
        store.set("focus", "Carry over").unwrap();
        let w = FocusWidget::new(WidgetContext::default(), store);
        let mut view = w.blank_view();
        assert_eq!(w.initialize(&mut view).unwrap(), Visibility::ShowPanel);
        assert_eq!(view.status_label, "today");
        assert_eq!(view.panel_text, "Carry over");
        assert_eq!(view.delete_label, "X");
    }

    #[test]
    fn test_initialize_with_stored_empty_string_shows_panel() {
        let mut store = MemoryStore::new();
        store.set("focus", "").unwrap();
        let w = FocusWidget::new(WidgetContext::default(), store);
        let mut view = w.blank_view();
        assert_eq!(w.initialize(&mut view).unwrap(), Visibility::ShowPanel);
    }

    #[test]
    fn test_custom_key_isolates_widgets() {
        let ctx = WidgetContext {
            key: "work-focus".into(),
            ..WidgetContext::default()
        };
        let mut w = FocusWidget::new(ctx, MemoryStore::new());
        let mut view = w.blank_view();
        w.submit(&mut view, "Review PRs".into()).unwrap();

        assert_eq!(
            w.store().get("work-focus").unwrap().as_deref(),
            Some("Review PRs")
        );
        assert_eq!(w.store().get("focus").unwrap(), None);
    }

    #[test]
    fn test_failed_submit_keeps_form_and_input() {
        let mut w = FocusWidget::new(WidgetContext::default(), ReadOnlyStore(MemoryStore::new()));
        let mut view = w.blank_view();
        view.input.set_text("Not saved");

        assert!(w.submit(&mut view, "Not saved".into()).is_err());
        assert_eq!(view.visibility, Visibility::ShowForm);
        assert_eq!(view.input.text, "Not saved");
        assert_eq!(view.status_label, "What is your main focus today");
    }

    #[test]
    fn test_failed_delete_keeps_panel() {
        let mut inner = MemoryStore::new();
        inner.set("focus", "Stuck").unwrap();
        let mut w = FocusWidget::new(WidgetContext::default(), ReadOnlyStore(inner));
        let mut view = w.blank_view();
        w.initialize(&mut view).unwrap();

        assert!(w.delete(&mut view).is_err());
        assert_eq!(view.visibility, Visibility::ShowPanel);
        assert_eq!(view.panel_text, "Stuck");
    }
}
