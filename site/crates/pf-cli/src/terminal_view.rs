use pf_contact::{ContactFormView, FormField, StatusKind, StatusMessage};

use std::sync::{Mutex, PoisonError};

use log::debug;

/// Label shown while a submission is in flight
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Default)]
struct Fields {
    name: String,
    email: String,
    message: String,
}

/// Contact form backed by command-line arguments.
///
/// Success messages go to stdout, errors and the busy label to stderr.
#[derive(Debug, Default)]
pub struct TerminalView {
    fields: Mutex<Fields>,
    last_status: Mutex<Option<StatusMessage>>,
}

impl TerminalView {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            fields: Mutex::new(Fields {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            }),
            last_status: Mutex::new(None),
        }
    }

    /// Most recent status message, kept after the status area hides
    pub fn last_status(&self) -> Option<StatusMessage> {
        self.last_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ContactFormView for TerminalView {
    fn read_field(&self, field: FormField) -> String {
        let fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        match field {
            FormField::Name => fields.name.clone(),
            FormField::Email => fields.email.clone(),
            FormField::Message => fields.message.clone(),
        }
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            eprintln!("{}", SENDING_LABEL);
        } else {
            debug!("Submit control restored");
        }
    }

    fn show_status(&self, message: &StatusMessage) {
        match message.kind {
            StatusKind::Success => println!("{}", message.text),
            StatusKind::Error => eprintln!("Error: {}", message.text),
        }
        *self
            .last_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(message.clone());
    }

    fn hide_status(&self) {
        debug!("Status message hidden");
    }

    fn clear_fields(&self) {
        let mut fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        *fields = Fields::default();
    }
}
