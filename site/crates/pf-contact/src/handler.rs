use crate::{
    ContactClient, ContactError, ContactFormPayload, ContactFormView, ContactResult, FormField,
    NETWORK_ERROR_MESSAGE, StatusDisplay, StatusMessage, VALIDATION_MESSAGE,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, error, info, warn};
use pf_config::ContactConfig;

/// Lifecycle of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

/// What one submit event ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was blank; nothing was sent
    Invalid,
    /// A submission was already in flight; the event was ignored
    Busy,
    /// The endpoint accepted the message
    Sent { message: String },
    /// The endpoint answered with a non-success status
    Rejected { status: u16, message: String },
    /// No response: connectivity failure or deadline expiry
    NetworkError,
}

/// Binds the contact form view to the contact endpoint.
///
/// `submit` is the form's submit event. The busy flag doubles as the
/// submit button's disabled state: while a submission is in flight further
/// submit events are ignored.
pub struct ContactFormHandler<V: ContactFormView> {
    client: ContactClient,
    view: Arc<V>,
    status: StatusDisplay<V>,
    submitting: AtomicBool,
}

impl<V: ContactFormView> ContactFormHandler<V> {
    pub fn new(client: ContactClient, view: Arc<V>, status_ttl: Duration) -> Self {
        Self {
            status: StatusDisplay::new(Arc::clone(&view), status_ttl),
            client,
            view,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &ContactConfig, view: Arc<V>) -> Self {
        Self::new(
            ContactClient::from_config(config),
            view,
            config.status_display(),
        )
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn client(&self) -> &ContactClient {
        &self.client
    }

    /// How long a status message stays visible
    pub fn status_ttl(&self) -> Duration {
        self.status.ttl()
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitting.load(Ordering::SeqCst) {
            FormPhase::Submitting
        } else {
            FormPhase::Idle
        }
    }

    /// Handle one submit event. All failures are rendered on the view and
    /// reported through the outcome; nothing propagates.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.phase() == FormPhase::Submitting {
            debug!("Submit ignored: a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        let payload = match self.read_payload() {
            Ok(payload) => payload,
            Err(_) => {
                self.status.show(&StatusMessage::error(VALIDATION_MESSAGE));
                return SubmitOutcome::Invalid;
            }
        };

        let Some(_busy) = BusyGuard::acquire(self) else {
            debug!("Submit ignored: a submission is already in flight");
            return SubmitOutcome::Busy;
        };

        match self.client.send(&payload).await {
            Ok(reply) => {
                info!("Contact form delivered ({})", reply.status);
                self.status.show(&StatusMessage::success(reply.message.as_str()));
                self.view.clear_fields();
                SubmitOutcome::Sent {
                    message: reply.message,
                }
            }
            Err(ContactError::Application {
                status, message, ..
            }) => {
                warn!("Contact endpoint rejected submission ({}): {}", status, message);
                self.status.show(&StatusMessage::error(message.as_str()));
                SubmitOutcome::Rejected { status, message }
            }
            Err(e) => {
                error!("Contact form submission failed: {}", e);
                self.status.show(&StatusMessage::error(NETWORK_ERROR_MESSAGE));
                SubmitOutcome::NetworkError
            }
        }
    }

    fn read_payload(&self) -> ContactResult<ContactFormPayload> {
        let name = self.view.read_field(FormField::Name);
        let email = self.view.read_field(FormField::Email);
        let message = self.view.read_field(FormField::Message);

        ContactFormPayload::from_fields(&name, &email, &message).inspect_err(|_| {
            let missing = ContactFormPayload::missing_fields(&name, &email, &message);
            debug!("Contact form incomplete, missing: {:?}", missing);
        })
    }
}

/// Holds the form in `Submitting`. Dropping it, on any exit path, returns
/// the form to `Idle` and restores the submit button.
struct BusyGuard<'a, V: ContactFormView> {
    handler: &'a ContactFormHandler<V>,
}

impl<'a, V: ContactFormView> BusyGuard<'a, V> {
    fn acquire(handler: &'a ContactFormHandler<V>) -> Option<Self> {
        handler
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;

        handler.view.set_busy(true);
        handler.status.hide();

        Some(Self { handler })
    }
}

impl<V: ContactFormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.handler.submitting.store(false, Ordering::SeqCst);
        self.handler.view.set_busy(false);
    }
}
