//! Everything the renderer needs to draw the widget.

use super::context::WidgetContext;
use crate::app::state::InputState;
use crate::app::transition::{Transition, Visibility};

#[derive(Debug)]
pub struct ViewState {
    pub visibility: Visibility,
    pub status_label: String,
    pub input: InputState,
    pub panel_text: String,
    pub delete_label: String,
}

impl ViewState {
    /// The view before any value has been read: form shown, prompt label.
    pub fn new(ctx: &WidgetContext) -> Self {
        Self {
            visibility: Visibility::ShowForm,
            status_label: ctx.prompt.clone(),
            input: InputState::new(),
            panel_text: String::new(),
            delete_label: String::new(),
        }
    }

    /// Repaint the display panel from `value`.
    pub fn paint_focus(&mut self, value: &str, ctx: &WidgetContext) {
        self.panel_text = value.to_string();
        self.delete_label = ctx.delete_glyph.clone();
    }

    /// Bring visibility, label and panel in line with a transition.
    pub fn show(&mut self, transition: &Transition, ctx: &WidgetContext) {
        self.visibility = transition.visibility;
        match transition.visibility {
            Visibility::ShowPanel => {
                self.status_label = ctx.today_label.clone();
                self.paint_focus(transition.value.as_deref().unwrap_or_default(), ctx);
            }
            Visibility::ShowForm => {
                self.status_label = ctx.prompt.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::transition::{apply, Intent};

    #[test]
    fn test_show_follows_transition_visibility() {
        let ctx = WidgetContext::default();
        let mut view = ViewState::new(&ctx);

        view.show(&apply(None, &Intent::Submit("Plan sprint".into())), &ctx);
        assert_eq!(view.visibility, Visibility::ShowPanel);
        assert_eq!(view.status_label, "today");
        assert_eq!(view.panel_text, "Plan sprint");
        assert_eq!(view.delete_label, "X");

        view.show(&apply(Some("Plan sprint"), &Intent::Delete), &ctx);
        assert_eq!(view.visibility, Visibility::ShowForm);
        assert_eq!(view.status_label, "What is your main focus today");
    }
}
