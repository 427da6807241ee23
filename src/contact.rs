//! Contact form.
//!
//! Submission is simulated: a valid form disables its button, and the app
//! reports success after a fixed delay. There is no backend.

use crate::validation::{validate_required, ValidationResult};

/// Form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Send Message";
/// Submit button label while the simulated request is in flight.
pub const SENDING_LABEL: &str = "Sending...";
/// Success notification text.
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Valid; the caller should complete the send after the delay
    Sending,
    /// A required field is blank; nothing changed
    Invalid(String),
    /// The button is disabled
    Ignored,
}

/// Contact form state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focused: Field,
    sending: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focused: Field::Name,
            sending: false,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn focused(&self) -> Field {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Appends a character to the focused field.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused;
        self.value_mut(field).push(c);
    }

    /// Removes the last character of the focused field.
    pub fn input_backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Whether the submit button is disabled.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    fn validate(&self) -> ValidationResult {
        validate_required(Field::ALL.iter().map(|f| (f.key(), self.value(*f))))
    }

    /// Handles the submit button.
    pub fn submit(&mut self) -> Submit {
        if self.sending {
            return Submit::Ignored;
        }
        if let Err(message) = self.validate() {
            return Submit::Invalid(message);
        }
        self.sending = true;
        Submit::Sending
    }

    /// Completes the simulated send: clears every field and re-enables the
    /// button. Returns false if no send was in flight.
    pub fn finish_sending(&mut self) -> bool {
        if !self.sending {
            return false;
        }
        for field in Field::ALL {
            self.value_mut(field).clear();
        }
        self.focused = Field::Name;
        self.sending = false;
        true
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
