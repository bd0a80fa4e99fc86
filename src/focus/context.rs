use crate::config::AppConfig;

pub const DEFAULT_KEY: &str = "focus";
pub const DEFAULT_PROMPT: &str = "What is your main focus today";
pub const DEFAULT_TODAY_LABEL: &str = "today";
pub const DEFAULT_DELETE_GLYPH: &str = "X";

/// Fixed roles and strings the widget is built against.
///
/// Passed into `FocusWidget::new` so several widgets can run side by side
/// against different keys, and so tests never depend on user config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetContext {
    /// Storage key for the focus value.
    pub key: String,
    /// Status label while the form is shown.
    pub prompt: String,
    /// Status label while a focus is shown.
    pub today_label: String,
    /// Label of the delete control.
    pub delete_glyph: String,
}

impl Default for WidgetContext {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            today_label: DEFAULT_TODAY_LABEL.to_string(),
            delete_glyph: DEFAULT_DELETE_GLYPH.to_string(),
        }
    }
}

impl WidgetContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            key: config.storage.key.clone(),
            prompt: config.labels.prompt.clone(),
            today_label: config.labels.today.clone(),
            delete_glyph: config.labels.delete_glyph.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_context() {
        let ctx = WidgetContext::from_config(&AppConfig::default());
        assert_eq!(ctx, WidgetContext::default());
        assert_eq!(ctx.key, "focus");
        assert_eq!(ctx.prompt, "What is your main focus today");
    }
}
