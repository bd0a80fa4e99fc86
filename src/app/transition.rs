//! Pure focus state transitions.
//!
//! `apply` maps the current stored value and a user intent to the next value,
//! visibility and storage effect. It performs no I/O; the widget carries out
//! the effect and repaints the view from the result.

/// Which half of the widget is on screen. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    ShowForm,
    ShowPanel,
}

impl Visibility {
    /// `ShowPanel` iff a value is stored, including the empty string.
    pub fn for_value(value: Option<&str>) -> Self {
        match value {
            Some(_) => Visibility::ShowPanel,
            None => Visibility::ShowForm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit(String),
    Delete,
}

/// What the persistence adapter must do to realize a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Store(String),
    Clear,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub value: Option<String>,
    pub visibility: Visibility,
    pub effect: Effect,
}

impl Transition {
    /// The view state for an observed value, with nothing to persist.
    pub fn settle(value: Option<String>) -> Self {
        Self {
            visibility: Visibility::for_value(value.as_deref()),
            value,
            effect: Effect::None,
        }
    }
}

pub fn apply(current: Option<&str>, intent: &Intent) -> Transition {
    match intent {
        Intent::Submit(text) => Transition {
            value: Some(text.clone()),
            visibility: Visibility::ShowPanel,
            effect: Effect::Store(text.clone()),
        },
        Intent::Delete => Transition {
            value: None,
            visibility: Visibility::ShowForm,
            effect: if current.is_some() {
                Effect::Clear
            } else {
                Effect::None
            },
        },
    }
}
