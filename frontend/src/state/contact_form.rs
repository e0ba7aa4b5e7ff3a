use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,10}$").expect("valid phone pattern"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
});

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "שם מלא",
            Field::Phone => "טלפון",
            Field::Email => "דוא\"ל",
            Field::Message => "הודעה",
        }
    }
}

/// Inline validation failure; the message is what the user sees.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("שדה חובה")]
    Required,
    #[error("מספר טלפון לא תקין")]
    InvalidPhone,
    #[error("כתובת דוא\"ל לא תקינה")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<FieldError>,
    phone: Option<FieldError>,
    email: Option<FieldError>,
    message: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        *self.slot(field)
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn set(&mut self, field: Field, error: Option<FieldError>) {
        *self.slot_mut(field) = error;
    }

    fn slot(&self, field: Field) -> &Option<FieldError> {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

impl ContactFormData {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            errors.set(field, validate_field(field, self.value(field)).err());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    match field {
        Field::Phone if !PHONE_PATTERN.is_match(value) => Err(FieldError::InvalidPhone),
        Field::Email if !EMAIL_PATTERN.is_match(value) => Err(FieldError::InvalidEmail),
        _ => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub data: ContactFormData,
    pub errors: FieldErrors,
    pub phase: FormPhase,
    /// Set on the submit that moved the form to `Submitted`.
    pub accepted: Option<ContactFormData>,
}

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    SuccessElapsed,
}

impl ContactForm {
    pub fn edit(&mut self, field: Field, value: String) {
        *self.data.value_mut(field) = value;
        self.errors.set(field, None);
    }

    /// Validates and, when every field passes, enters the success phase.
    pub fn submit(&mut self) -> Option<&ContactFormData> {
        if self.phase == FormPhase::Submitted {
            return None;
        }
        match self.data.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitted;
                self.accepted = Some(self.data.clone());
                self.accepted.as_ref()
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }

    /// Data to hand off while the thank-you panel is showing.
    pub fn pending_submission(&self) -> Option<&ContactFormData> {
        match self.phase {
            FormPhase::Submitted => self.accepted.as_ref(),
            FormPhase::Editing => None,
        }
    }
}

/// One-line JSON rendering of an accepted submission for the console log.
pub fn submission_log_line(data: &ContactFormData) -> Result<String, serde_json::Error> {
    serde_json::to_string(data).map(|json| format!("Contact form submitted: {}", json))
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Submit => {
                next.submit();
            }
            ContactAction::SuccessElapsed => {
                if next.phase != FormPhase::Submitted {
                    return self;
                }
                next.reset();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactFormData {
        ContactFormData {
            name: "דניאל".into(),
            phone: "0501234567".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        }
    }

    #[test]
    fn phone_pattern() {
        assert!(validate_field(Field::Phone, "123456789").is_ok());
        assert!(validate_field(Field::Phone, "0501234567").is_ok());
        assert_eq!(validate_field(Field::Phone, "12345"), Err(FieldError::InvalidPhone));
        assert_eq!(
            validate_field(Field::Phone, "12345678901"),
            Err(FieldError::InvalidPhone)
        );
        assert_eq!(
            validate_field(Field::Phone, "050-123456"),
            Err(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn email_pattern() {
        assert!(validate_field(Field::Email, "a@b.com").is_ok());
        assert!(validate_field(Field::Email, "Info@Gamma-Restaurant.CO.IL").is_ok());
        assert_eq!(validate_field(Field::Email, "a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "ab.com"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn missing_name_blocks_submit() {
        let mut form = ContactForm::default();
        form.data = ContactFormData {
            name: String::new(),
            ..valid()
        };
        assert!(form.submit().is_none());
        assert_eq!(form.errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(form.errors.get(Field::Phone), None);
        assert_eq!(form.phase, FormPhase::Editing);
    }

    #[test]
    fn whitespace_only_is_missing() {
        assert_eq!(validate_field(Field::Message, "   "), Err(FieldError::Required));
    }

    #[test]
    fn every_field_reports_its_own_error() {
        let errors = ContactFormData::default().validate().unwrap_err();
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        form.submit();
        form.edit(Field::Email, "x".into());
        assert_eq!(form.errors.get(Field::Email), None);
        assert_eq!(form.errors.get(Field::Name), Some(FieldError::Required));
    }

    #[test]
    fn valid_submit_then_delay_resets() {
        let form = Rc::new(ContactForm {
            data: valid(),
            ..ContactForm::default()
        });
        let form = form.reduce(ContactAction::Submit);
        assert_eq!(form.phase, FormPhase::Submitted);
        assert_eq!(form.accepted.as_ref(), Some(&valid()));

        let form = form.reduce(ContactAction::SuccessElapsed);
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.data, ContactFormData::default());
        assert!(form.accepted.is_none());
    }

    #[test]
    fn submission_is_pending_only_while_thank_you_shows() {
        let form = Rc::new(ContactForm::default());
        assert!(form.pending_submission().is_none());

        let form = form
            .reduce(ContactAction::Edit(Field::Name, "דניאל".into()))
            .reduce(ContactAction::Edit(Field::Phone, "0501234567".into()))
            .reduce(ContactAction::Edit(Field::Email, "a@b.com".into()))
            .reduce(ContactAction::Edit(Field::Message, "hi".into()));
        assert!(form.pending_submission().is_none());

        let form = form.reduce(ContactAction::Submit);
        assert_eq!(form.phase, FormPhase::Submitted);
        assert_eq!(form.pending_submission(), Some(&valid()));

        let form = form.reduce(ContactAction::SuccessElapsed);
        assert!(form.pending_submission().is_none());
    }

    #[test]
    fn submission_log_line_carries_every_field() {
        let line = submission_log_line(&valid()).unwrap();
        assert!(line.starts_with("Contact form submitted: {"));
        for value in ["דניאל", "0501234567", "a@b.com", "hi"] {
            assert!(line.contains(value), "missing {value}");
        }
    }

    #[test]
    fn error_messages_are_localized() {
        assert_eq!(FieldError::Required.to_string(), "שדה חובה");
        assert_eq!(FieldError::InvalidPhone.to_string(), "מספר טלפון לא תקין");
    }
}
