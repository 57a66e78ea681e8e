//! Raw text buffers behind the form's numeric inputs.
//!
//! The draft coerces every change to a number, so it cannot reproduce what
//! the user is in the middle of typing (`12.` or `-`). The buffers keep the
//! literal text and hand it to the form controller after each keystroke.

use crate::portfolio::{FormField, MortgageDraft};

/// Maximum characters accepted by a single input.
pub const MAX_INPUT_LENGTH: usize = 16;

/// Typed text and focus for the form inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    focused: FormField,
    texts: [String; FormField::ALL.len()],
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInputs {
    /// Creates empty inputs with the first field focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            focused: FormField::CreditScore,
            texts: Default::default(),
        }
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focused(&self) -> FormField {
        self.focused
    }

    /// Moves focus to `field`.
    pub const fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    /// Moves focus to the next field, wrapping around.
    pub const fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Moves focus to the previous field, wrapping around.
    pub const fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Returns the typed text for a numeric field.
    #[must_use]
    pub fn text(&self, field: FormField) -> &str {
        self.texts
            .get(slot(field))
            .map_or("", String::as_str)
    }

    /// Appends a character to the focused numeric input.
    ///
    /// Returns the new text, or `None` when the focused field is not
    /// numeric, the character is a control character, or the input is full.
    pub fn push_char(&mut self, ch: char) -> Option<&str> {
        if !self.focused.is_numeric() || ch.is_control() {
            return None;
        }
        let text = self.texts.get_mut(slot(self.focused))?;
        if text.chars().count() >= MAX_INPUT_LENGTH {
            return None;
        }
        text.push(ch);
        Some(text.as_str())
    }

    /// Removes the last character of the focused numeric input.
    ///
    /// Returns the new text, or `None` when the focused field is not numeric
    /// or already empty.
    pub fn pop_char(&mut self) -> Option<&str> {
        if !self.focused.is_numeric() {
            return None;
        }
        let text = self.texts.get_mut(slot(self.focused))?;
        text.pop()?;
        Some(text.as_str())
    }

    /// Replaces every buffer with the text of `draft`, keeping focus.
    pub fn load(&mut self, draft: &MortgageDraft) {
        for field in FormField::ALL {
            if let Some(text) = self.texts.get_mut(slot(field)) {
                *text = if field.is_numeric() {
                    draft.field_text(field)
                } else {
                    String::new()
                };
            }
        }
    }

    /// Clears every buffer and focuses the first field.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn slot(field: FormField) -> usize {
    FormField::ALL
        .iter()
        .position(|candidate| *candidate == field)
        .unwrap_or_default()
}
