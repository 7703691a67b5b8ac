//! Event routing types for the TUI.

/// Whether a widget handled a key press.
///
/// The search field returns `NotConsumed` for keys it leaves to the app,
/// such as Tab for switching focus or Ctrl+C for quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Consumed,
    NotConsumed,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}
