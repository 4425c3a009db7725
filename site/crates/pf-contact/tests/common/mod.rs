#![allow(dead_code)]

use pf_contact::{ContactClient, ContactFormHandler, ContactFormView, FormField, StatusMessage};

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Everything the handler did to the page, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Busy(bool),
    Shown(StatusMessage),
    Hidden,
    Cleared,
}

#[derive(Debug, Default)]
struct ViewState {
    name: String,
    email: String,
    message: String,
    busy: bool,
    status: Option<StatusMessage>,
    events: Vec<ViewEvent>,
}

/// In-memory contact form
#[derive(Debug, Default)]
pub struct RecordingView {
    state: Mutex<ViewState>,
}

impl RecordingView {
    pub fn filled(name: &str, email: &str, message: &str) -> Arc<Self> {
        let view = Self::default();
        view.fill(name, email, message);
        Arc::new(view)
    }

    pub fn fill(&self, name: &str, email: &str, message: &str) {
        let mut state = self.state.lock().unwrap();
        state.name = name.to_string();
        state.email = email.to_string();
        state.message = message.to_string();
    }

    pub fn fields(&self) -> (String, String, String) {
        let state = self.state.lock().unwrap();
        (
            state.name.clone(),
            state.email.clone(),
            state.message.clone(),
        )
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.state.lock().unwrap().status.clone()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.state.lock().unwrap().events.clone()
    }
}

impl ContactFormView for RecordingView {
    fn read_field(&self, field: FormField) -> String {
        let state = self.state.lock().unwrap();
        match field {
            FormField::Name => state.name.clone(),
            FormField::Email => state.email.clone(),
            FormField::Message => state.message.clone(),
        }
    }

    fn set_busy(&self, busy: bool) {
        let mut state = self.state.lock().unwrap();
        state.busy = busy;
        state.events.push(ViewEvent::Busy(busy));
    }

    fn show_status(&self, message: &StatusMessage) {
        let mut state = self.state.lock().unwrap();
        state.status = Some(message.clone());
        state.events.push(ViewEvent::Shown(message.clone()));
    }

    fn hide_status(&self) {
        let mut state = self.state.lock().unwrap();
        state.status = None;
        state.events.push(ViewEvent::Hidden);
    }

    fn clear_fields(&self) {
        let mut state = self.state.lock().unwrap();
        state.name.clear();
        state.email.clear();
        state.message.clear();
        state.events.push(ViewEvent::Cleared);
    }
}

pub const STATUS_TTL: Duration = Duration::from_millis(300);

pub fn handler(
    endpoint: &str,
    view: Arc<RecordingView>,
    timeout: Duration,
) -> ContactFormHandler<RecordingView> {
    ContactFormHandler::new(ContactClient::new(endpoint, timeout), view, STATUS_TTL)
}

pub fn contact_url(base: &str) -> String {
    format!("{}/prod/contact", base)
}

/// Contact URL on a local port that nothing listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    contact_url(&format!("http://127.0.0.1:{}", port))
}
