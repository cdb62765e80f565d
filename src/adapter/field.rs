//! Editable text field state for a front end.

/// Text of one input field, with change tracking and an invalid flag.
///
/// A front end calls [`Field::edit`] when the user types and
/// [`Field::changed`] once per refresh. Text written by the engine through
/// [`Field::set_text`] does not count as a change.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Field {
    text: String,
    old: String,
    /// Set when the last evaluation of this field's text failed.
    pub invalid: bool,
}

impl Field {
    pub fn new() -> Self {
        Field::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// User edit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Report whether the text changed since the last call, and reset.
    pub fn changed(&mut self) -> bool {
        let changed = self.text != self.old;
        if changed {
            self.old.clone_from(&self.text);
        }
        changed
    }

    /// Programmatic update, clears the invalid flag.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.old.clone_from(&self.text);
        self.invalid = false;
    }

    /// Whether a front end should highlight the field; empty text never is.
    pub fn show_invalid(&self) -> bool {
        self.invalid && !self.text.is_empty()
    }
}
