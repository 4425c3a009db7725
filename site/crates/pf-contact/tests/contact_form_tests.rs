//! End-to-end tests for the contact form handler against a wiremock endpoint

mod common;

use common::{RecordingView, STATUS_TTL, ViewEvent, closed_port_url, contact_url, handler};

use pf_contact::{
    DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE, FormPhase, NETWORK_ERROR_MESSAGE,
    StatusMessage, SubmitOutcome, VALIDATION_MESSAGE,
};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const TIMEOUT: Duration = Duration::from_secs(5);

async fn mount(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/prod/contact"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn assert_idle(view: &RecordingView) {
    assert!(!view.is_busy(), "submit control must end enabled");
    assert_eq!(view.events().last(), Some(&ViewEvent::Busy(false)));
}

// =========================================================================
// Validation
// =========================================================================

#[tokio::test]
async fn given_any_blank_field_when_submit_then_validation_message_and_no_request() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200), 0).await;

    let cases = [
        ("", "ada@example.com", "Hello"),
        ("Ada", "  ", "Hello"),
        ("Ada", "ada@example.com", "\n"),
        ("", "", ""),
    ];

    for (name, email, message) in cases {
        let view = RecordingView::filled(name, email, message);
        let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(view.status(), Some(StatusMessage::error(VALIDATION_MESSAGE)));
        assert!(!view.is_busy());
        assert!(
            !view.events().contains(&ViewEvent::Busy(true)),
            "validation failure must never enter the submitting state"
        );
        assert_eq!(form.phase(), FormPhase::Idle);
    }
}

// =========================================================================
// Request shape
// =========================================================================

#[tokio::test]
async fn given_valid_fields_when_submit_then_one_post_with_trimmed_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/prod/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Hello, Kevin!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let view = RecordingView::filled("  Ada Lovelace ", "ada@example.com\n", "\tHello, Kevin!  ");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Sent {
            message: "ok".to_string()
        }
    );
}

// =========================================================================
// Response handling
// =========================================================================

#[tokio::test]
async fn given_success_with_message_when_submit_then_message_shown_and_fields_cleared() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    form.submit().await;

    assert_eq!(view.status(), Some(StatusMessage::success("ok")));
    assert_eq!(
        view.fields(),
        (String::new(), String::new(), String::new())
    );
    assert_idle(&view);
}

#[tokio::test]
async fn given_success_without_message_when_submit_then_default_success_text() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(201).set_body_json(json!({"id": 42})),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Sent {
            message: DEFAULT_SUCCESS_MESSAGE.to_string()
        }
    );
    assert_eq!(
        view.status(),
        Some(StatusMessage::success(DEFAULT_SUCCESS_MESSAGE))
    );
    assert_idle(&view);
}

#[tokio::test]
async fn given_success_with_non_json_body_when_submit_then_default_success_text() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("OK"), 1).await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    form.submit().await;

    assert_eq!(
        view.status(),
        Some(StatusMessage::success(DEFAULT_SUCCESS_MESSAGE))
    );
    assert_idle(&view);
}

#[tokio::test]
async fn given_bad_request_with_error_when_submit_then_error_shown_and_fields_kept() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({"error": "bad email"})),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "not-an-email", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: 400,
            message: "bad email".to_string()
        }
    );
    assert_eq!(view.status(), Some(StatusMessage::error("bad email")));
    assert_eq!(
        view.fields(),
        (
            "Ada".to_string(),
            "not-an-email".to_string(),
            "Hi".to_string()
        )
    );
    assert!(!view.events().contains(&ViewEvent::Cleared));
    assert_idle(&view);
}

#[tokio::test]
async fn given_server_error_with_html_body_when_submit_then_default_failure_text() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: 502,
            message: DEFAULT_FAILURE_MESSAGE.to_string()
        }
    );
    assert_eq!(
        view.status(),
        Some(StatusMessage::error(DEFAULT_FAILURE_MESSAGE))
    );
    assert_idle(&view);
}

#[tokio::test]
async fn given_unreachable_endpoint_when_submit_then_network_error_message() {
    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&closed_port_url(), Arc::clone(&view), TIMEOUT);

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(
        view.status(),
        Some(StatusMessage::error(NETWORK_ERROR_MESSAGE))
    );
    assert_eq!(view.fields().0, "Ada");
    assert_idle(&view);
}

#[tokio::test]
async fn given_endpoint_slower_than_deadline_when_submit_then_network_error_and_control_restored() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"message": "too late"}))
            .set_delay(Duration::from_secs(3)),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(
        &contact_url(&server.uri()),
        Arc::clone(&view),
        Duration::from_millis(200),
    );

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(
        view.status(),
        Some(StatusMessage::error(NETWORK_ERROR_MESSAGE))
    );
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_idle(&view);
}

// =========================================================================
// Busy state
// =========================================================================

#[tokio::test]
async fn given_successful_submit_when_done_then_ui_transitions_in_order() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    form.submit().await;

    assert_eq!(
        view.events(),
        vec![
            ViewEvent::Busy(true),
            ViewEvent::Hidden,
            ViewEvent::Shown(StatusMessage::success("ok")),
            ViewEvent::Cleared,
            ViewEvent::Busy(false),
        ]
    );
}

#[tokio::test]
async fn given_submission_in_flight_when_submitted_again_then_second_ignored() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"message": "ok"}))
            .set_delay(Duration::from_millis(200)),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    let (first, second) = tokio::join!(form.submit(), form.submit());

    assert_eq!(
        first,
        SubmitOutcome::Sent {
            message: "ok".to_string()
        }
    );
    assert_eq!(second, SubmitOutcome::Busy);
    assert_idle(&view);
}

// =========================================================================
// Status auto-hide
// =========================================================================

#[tokio::test]
async fn given_status_shown_when_ttl_elapses_then_hidden() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})),
        1,
    )
    .await;

    let view = RecordingView::filled("Ada", "ada@example.com", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    form.submit().await;
    assert!(view.status().is_some());

    tokio::time::sleep(STATUS_TTL + Duration::from_millis(200)).await;

    assert_eq!(view.status(), None);
}

#[tokio::test]
async fn given_second_submit_when_previous_message_pending_then_old_timer_does_not_hide_new() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/prod/contact"))
        .and(body_json(json!({"name": "Ada", "email": "bad", "message": "Hi"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad email"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/prod/contact"))
        .and(body_json(json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let view = RecordingView::filled("Ada", "bad", "Hi");
    let form = handler(&contact_url(&server.uri()), Arc::clone(&view), TIMEOUT);

    // First message, then resubmit partway through its display window
    form.submit().await;
    assert_eq!(view.status(), Some(StatusMessage::error("bad email")));
    tokio::time::sleep(STATUS_TTL / 2).await;

    view.fill("Ada", "ada@example.com", "Hi");
    form.submit().await;

    // Past the first message's deadline, the second is still visible
    tokio::time::sleep(STATUS_TTL * 2 / 3).await;
    assert_eq!(view.status(), Some(StatusMessage::success("ok")));

    tokio::time::sleep(STATUS_TTL).await;
    assert_eq!(view.status(), None);
}
