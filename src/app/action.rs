/// Side effects requested by the event handler, carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SubmitFocus { text: String },
    DeleteFocus,
    Quit,
}
