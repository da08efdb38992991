//! Contact form validation. Nothing is sent anywhere: a valid submission is
//! acknowledged and the fields are cleared.

use serde_json::json;
use thiserror::Error;

use crate::telemetry::{log_event, LogLevel};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your message")]
    MissingMessage,
}

impl ContactError {
    pub fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// First failing field wins.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }

        if self.email.is_empty() || !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }

        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }

        Ok(())
    }
}

/// The form as seen by the submit handler.
pub trait ContactSurface {
    fn read_fields(&self) -> ContactFields;
    fn alert(&self, message: &str);
    fn focus(&self, field: ContactField);
    fn reset(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(ContactError),
}

pub struct ContactForm<S> {
    surface: S,
}

impl<S: ContactSurface> ContactForm<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Alerts and focuses the first invalid field; leaves the values untouched.
    pub fn validate_form(&self) -> Result<ContactFields, ContactError> {
        let fields = self.surface.read_fields();

        if let Err(error) = fields.validate() {
            self.surface.alert(&error.to_string());
            self.surface.focus(error.field());
            return Err(error);
        }

        Ok(fields)
    }

    pub fn handle_submit(&self) -> SubmitOutcome {
        match self.validate_form() {
            Ok(_) => {
                self.surface.alert(SUCCESS_MESSAGE);
                self.surface.reset();
                log_event(LogLevel::Info, "contact.accepted", json!({}));
                SubmitOutcome::Accepted
            }
            Err(error) => {
                log_event(
                    LogLevel::Info,
                    "contact.rejected",
                    json!({ "field": error.field().id() }),
                );
                SubmitOutcome::Rejected(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeForm {
        name: RefCell<String>,
        email: RefCell<String>,
        message: RefCell<String>,
        alerts: RefCell<Vec<String>>,
        focused: RefCell<Vec<ContactField>>,
    }

    impl FakeForm {
        fn filled(name: &str, email: &str, message: &str) -> Self {
            let form = Self::default();
            *form.name.borrow_mut() = name.to_string();
            *form.email.borrow_mut() = email.to_string();
            *form.message.borrow_mut() = message.to_string();
            form
        }

        fn values(&self) -> (String, String, String) {
            (
                self.name.borrow().clone(),
                self.email.borrow().clone(),
                self.message.borrow().clone(),
            )
        }
    }

    impl ContactSurface for &FakeForm {
        fn read_fields(&self) -> ContactFields {
            ContactFields::new(&self.name.borrow(), &self.email.borrow(), &self.message.borrow())
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn focus(&self, field: ContactField) {
            self.focused.borrow_mut().push(field);
        }

        fn reset(&self) {
            self.name.borrow_mut().clear();
            self.email.borrow_mut().clear();
            self.message.borrow_mut().clear();
        }
    }

    #[test]
    fn email_vectors() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_rejects_whitespace_extra_at_and_edge_dots() {
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b@c.de"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn first_failing_field_wins() {
        assert_eq!(
            ContactFields::new("", "bad", "").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            ContactFields::new("Ada", "bad", "").validate(),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            ContactFields::new("Ada", "ada@example.com", "   ").validate(),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn rejected_submission_alerts_focuses_and_keeps_values() {
        let form = FakeForm::filled("Ada", "ada@example", "Hello");
        let before = form.values();

        let outcome = ContactForm::new(&form).handle_submit();

        assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::InvalidEmail));
        assert_eq!(*form.alerts.borrow(), vec!["Please enter a valid email address"]);
        assert_eq!(*form.focused.borrow(), vec![ContactField::Email]);
        assert_eq!(form.values(), before);
    }

    #[test]
    fn each_empty_field_is_rejected() {
        for (name, email, message, field) in [
            ("", "ada@example.com", "Hi", ContactField::Name),
            ("Ada", "", "Hi", ContactField::Email),
            ("Ada", "ada@example.com", "", ContactField::Message),
        ] {
            let form = FakeForm::filled(name, email, message);
            let result = ContactForm::new(&form).validate_form();

            assert_eq!(result.map_err(ContactError::field), Err(field));
            assert_eq!(form.values(), (name.to_string(), email.to_string(), message.to_string()));
        }
    }

    #[test]
    fn accepted_submission_thanks_and_clears_all_fields() {
        let form = FakeForm::filled("  Ada ", " ada@example.com ", "Hello there");

        let outcome = ContactForm::new(&form).handle_submit();

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(*form.alerts.borrow(), vec![SUCCESS_MESSAGE]);
        assert!(form.focused.borrow().is_empty());
        assert_eq!(form.values(), (String::new(), String::new(), String::new()));
    }
}
