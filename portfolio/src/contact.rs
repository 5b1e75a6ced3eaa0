use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    // form control name and id
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your full name",
            Field::Email => "your@email.com",
            Field::Subject => "What's this about?",
            Field::Message => "Tell me about your project or inquiry...",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("required fields are empty: {0:?}")]
    Missing(Vec<Field>),
}

// what leaves the form when a submission starts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// contact form state
//
// the form is either idle or has exactly one submission in flight.  required means non-empty,
// the same rule the browser applies to a required input; nothing else is validated
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn state(&self) -> SubmitState {
        if self.submitting {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    // Idle -> Submitting
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "submission blocked by empty fields");
            return Err(SubmitRejected::Missing(missing));
        }

        self.submitting = true;
        info!(subject = %self.subject, "contact form submitting");

        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    // Submitting -> Idle, clearing every field
    //
    // the simulated submission cannot fail, so this is the only way out of Submitting
    pub fn finish_submit(&mut self) -> &'static str {
        *self = ContactForm::default();
        info!("contact form submission complete");
        ACKNOWLEDGEMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Let's talk");
        form
    }

    #[test]
    fn full_submission_cycle() {
        let mut form = filled();
        assert_eq!(form.state(), SubmitState::Idle);

        let message = form.begin_submit().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.message, "Let's talk");
        assert_eq!(form.state(), SubmitState::Submitting);

        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

        let ack = form.finish_submit();
        assert_eq!(ack, ACKNOWLEDGEMENT);
        assert_eq!(form.state(), SubmitState::Idle);
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for field in Field::ALL {
            let mut form = filled();
            form.set(field, "");

            assert_eq!(
                form.begin_submit(),
                Err(SubmitRejected::Missing(vec![field]))
            );
            assert_eq!(form.state(), SubmitState::Idle);
            assert_eq!(form.get(Field::Name).is_empty(), field == Field::Name);
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = ContactForm::new();

        assert_eq!(form.missing_fields(), Field::ALL.to_vec());
        assert!(form.begin_submit().is_err());
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(Field::Subject, " ");

        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn field_keys_are_control_names() {
        let keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();

        assert_eq!(keys, vec!["name", "email", "subject", "message"]);
    }
}
