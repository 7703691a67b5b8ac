//! Suggestion panel visibility state machine.

/// Whether the suggestion panel is shown.
///
/// ```text
/// Hidden --(non-empty text change | focus with text)--> Visible
/// Visible --(empty text change | blur timeout | submit | clear | selection)--> Hidden
/// ```
///
/// There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// `Visible` when there is text to suggest for, `Hidden` otherwise.
    pub fn for_text(text: &str) -> Self {
        if text.is_empty() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}
