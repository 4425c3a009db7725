
use crate::{ContactFormView, FormField, StatusMessage};

use std::sync::Mutex;

/// View that only tracks the status area
#[derive(Default)]
pub(crate) struct StatusOnlyView {
    pub(crate) visible: Mutex<Option<StatusMessage>>,
    pub(crate) hide_calls: Mutex<usize>,
}

impl StatusOnlyView {
    pub(crate) fn visible(&self) -> Option<StatusMessage> {
        self.visible.lock().unwrap().clone()
    }
}

impl ContactFormView for StatusOnlyView {
    fn read_field(&self, _field: FormField) -> String {
        String::new()
    }

    fn set_busy(&self, _busy: bool) {}

    fn show_status(&self, message: &StatusMessage) {
        *self.visible.lock().unwrap() = Some(message.clone());
    }

    fn hide_status(&self) {
        *self.visible.lock().unwrap() = None;
        *self.hide_calls.lock().unwrap() += 1;
    }

    fn clear_fields(&self) {}
}
