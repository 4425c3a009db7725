use crate::{ContactError, ContactResult, VALIDATION_MESSAGE};

use serde::{Deserialize, Serialize};

/// The three controls of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JSON body posted to the contact endpoint. This shape is the whole
/// contract with the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormPayload {
    /// Trim each field and require all three to be non-empty.
    #[track_caller]
    pub fn from_fields(name: &str, email: &str, message: &str) -> ContactResult<Self> {
        let payload = Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        };

        if payload.name.is_empty() || payload.email.is_empty() || payload.message.is_empty() {
            return Err(ContactError::validation(VALIDATION_MESSAGE));
        }

        Ok(payload)
    }

    /// Fields that are blank after trimming
    pub fn missing_fields(name: &str, email: &str, message: &str) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .zip([name, email, message])
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}
