//! Tests for MeasurementClient

use measure_protocol::{HitError, PageView, ValidationPolicy};
use uuid::Uuid;

use crate::client::MeasurementClient;
use crate::context::{ClientContext, Method};
use crate::endpoint::{COLLECT_URL, COLLECT_URL_SSL, MAX_POST_BODY_BYTES};
use crate::error::{ClientError, TransportError};
use crate::test::RecordingTransport;

const CLIENT_ID: &str = "35009a79-1a05-49d7-b876-2b884d0f825b";

fn client() -> MeasurementClient<RecordingTransport> {
    let context = ClientContext::with_client_id("UA-1-1", Uuid::parse_str(CLIENT_ID).unwrap());
    MeasurementClient::new(context, RecordingTransport::new())
}

fn session() -> String {
    format!("v=1&tid=UA-1-1&cid={CLIENT_ID}")
}

fn last_body(client: &MeasurementClient<RecordingTransport>) -> String {
    client.transport().last().unwrap().body.unwrap()
}

// =============================================================================
// send_hit
// =============================================================================

#[test]
fn test_send_hit_post() {
    let client = client();
    let mut hit = PageView::new();
    hit.set_document_location("http://x.test/a")
        .unwrap()
        .set_document_title("Hi")
        .unwrap();

    client.send_hit(&hit).unwrap();

    let sent = client.transport().last().unwrap();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, COLLECT_URL);
    assert_eq!(sent.charset.as_deref(), Some("utf-8"));
    assert!(!sent.asynchronous);
    assert_eq!(
        sent.body.unwrap(),
        format!("{}&dl=http%3A%2F%2Fx.test%2Fa&t=pageview&dt=Hi", session())
    );
}

#[test]
fn test_send_hit_get() {
    let mut client = client();
    client
        .context_mut()
        .set_method(Method::Get)
        .set_use_ssl(true);

    client.event("video", "play").unwrap();

    let sent = client.transport().last().unwrap();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(
        sent.url,
        format!("{COLLECT_URL_SSL}?{}&ec=video&ea=play&t=event", session())
    );
    assert!(sent.body.is_none());
}

#[test]
fn test_custom_charset() {
    let mut client = client();
    client.set_charset("iso-8859-1");
    client.event("video", "play").unwrap();
    assert_eq!(
        client.transport().last().unwrap().charset.as_deref(),
        Some("iso-8859-1")
    );
}

#[test]
fn test_invalid_hit_not_sent() {
    let client = client();
    let result = client.send_hit(&PageView::new());

    assert!(matches!(result, Err(ClientError::Hit(HitError::MissingLocation))));
    assert!(client.transport().is_empty());
}

#[test]
fn test_oversized_post_not_sent() {
    let client = client();
    let result = client.send_payload(&"x".repeat(MAX_POST_BODY_BYTES + 1));

    assert!(matches!(result, Err(ClientError::PayloadTooLarge { .. })));
    assert!(client.transport().is_empty());
}

#[test]
fn test_oversized_post_sent_when_lenient() {
    let mut client = client();
    client.context_mut().set_policy(ValidationPolicy::lenient());

    client
        .send_payload(&"x".repeat(MAX_POST_BODY_BYTES + 1))
        .unwrap();
    assert_eq!(last_body(&client).len(), MAX_POST_BODY_BYTES + 1);
}

#[test]
fn test_transport_failure_surfaces_on_sync_send() {
    let client = client();
    client.transport().fail_with(TransportError::Server(500));

    let result = client.event("video", "play");
    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::Server(500)))
    ));
}

#[test]
fn test_transport_failure_hidden_on_async_send() {
    let client = client();
    client.transport().fail_with(TransportError::Server(500));

    assert!(client.event_async("video", "play").is_ok());
    assert!(client.transport().last().unwrap().asynchronous);
}

#[test]
fn test_async_still_reports_payload_errors() {
    let client = client();
    let result = client.event_async("", "play");
    assert!(matches!(
        result,
        Err(ClientError::Hit(HitError::MissingField { field: "EventCategory" }))
    ));
    assert!(client.transport().is_empty());
}

// =============================================================================
// Convenience senders
// =============================================================================

#[test]
fn test_page_view() {
    let client = client();
    client.page_view("http://x.test/a", "").unwrap();
    assert_eq!(
        last_body(&client),
        format!("{}&dl=http%3A%2F%2Fx.test%2Fa&t=pageview", session())
    );
}

#[test]
fn test_page_view_path() {
    let client = client();
    client.page_view_path_async("x.test", "/a b", "Home").unwrap();
    assert_eq!(
        last_body(&client),
        format!("{}&dh=x.test&dp=%2Fa%20b&t=pageview&dt=Home", session())
    );
}

#[test]
fn test_page_view_path_requires_slash() {
    let client = client();
    let result = client.page_view_path("x.test", "a", "Home");
    assert!(matches!(
        result,
        Err(ClientError::Hit(HitError::InvalidFormat { field: "DocumentPath", .. }))
    ));
}

#[test]
fn test_page_view_path_lenient_accepts_relative_path() {
    let mut client = client();
    client.context_mut().set_policy(ValidationPolicy::lenient());
    client.page_view_path("x.test", "a", "").unwrap();
    assert!(last_body(&client).contains("&dp=a&t=pageview"));
}

#[test]
fn test_screen_view() {
    let client = client();
    client.screen_view("Home", "My App", "1.0 beta").unwrap();
    assert_eq!(
        last_body(&client),
        format!("{}&an=My%20App&cd=Home&t=screenview&av=1.0 beta", session())
    );
}

#[test]
fn test_app_event() {
    let client = client();
    client
        .app_event("ui", "click", "My App", "Home", "2.1")
        .unwrap();
    assert_eq!(
        last_body(&client),
        format!(
            "{}&an=My%20App&cd=Home&av=2.1&ec=ui&ea=click&t=event",
            session()
        )
    );
}

#[test]
fn test_exception() {
    let client = client();
    client
        .exception("NullReference", "My App", "1.0", Some(true))
        .unwrap();
    assert_eq!(
        last_body(&client),
        format!(
            "{}&exd=NullReference&an=My%20App&exf=1&av=1.0&t=exception",
            session()
        )
    );
}

#[test]
fn test_exception_without_fatality() {
    let client = client();
    client
        .exception_async("Timeout", "My App", "", None)
        .unwrap();

    let body = last_body(&client);
    assert!(!body.contains("exf="));
    assert_eq!(
        body,
        format!("{}&exd=Timeout&an=My%20App&t=exception", session())
    );
}

#[test]
fn test_exception_not_fatal() {
    let client = client();
    client
        .exception("Timeout", "My App", "", Some(false))
        .unwrap();
    assert!(last_body(&client).contains("&exf=0&t=exception"));
}

#[test]
fn test_social() {
    let client = client();
    client
        .social_async("facebook", "like", "http://x.test/")
        .unwrap();
    let sent = client.transport().last().unwrap();
    assert!(sent.asynchronous);
    assert_eq!(
        sent.body.unwrap(),
        format!(
            "{}&sn=facebook&sa=like&st=http%3A%2F%2Fx.test%2F&t=social",
            session()
        )
    );
}

#[test]
fn test_convenience_uses_context_policy() {
    let mut client = client();
    client.context_mut().set_policy(ValidationPolicy::lenient());

    // Lenient hits skip the required-field checks
    client.social("", "", "").unwrap();
    assert_eq!(last_body(&client), format!("{}&t=social", session()));
}
