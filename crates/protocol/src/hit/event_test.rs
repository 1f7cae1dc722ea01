//! Tests for Event, AppEvent and WebEvent

use crate::error::HitError;
use crate::hit::{AppEvent, Event, Hit, HitType, WebEvent};
use crate::policy::ValidationPolicy;

// =============================================================================
// Event
// =============================================================================

#[test]
fn test_minimal_event() {
    let mut hit = Event::new();
    hit.set_event_category("video")
        .unwrap()
        .set_event_action("play")
        .unwrap();

    assert_eq!(hit.serialize().unwrap(), "&ec=video&ea=play&t=event");
}

#[test]
fn test_full_event_order() {
    let mut hit = Event::new();
    hit.set_event_category("video")
        .unwrap()
        .set_event_action("play")
        .unwrap()
        .set_event_label("Holiday clip")
        .unwrap()
        .set_event_value(Some(42))
        .set_data_source("web")
        .unwrap();

    assert_eq!(
        hit.serialize().unwrap(),
        "&ec=video&ea=play&t=event&el=Holiday%20clip&ev=42&ds=web"
    );
}

#[test]
fn test_empty_event_fails_on_category_first() {
    let hit = Event::new();
    assert_eq!(hit.serialize(), Err(HitError::missing_field("EventCategory")));
}

#[test]
fn test_missing_action() {
    let mut hit = Event::new();
    hit.set_event_category("video").unwrap();
    assert_eq!(hit.serialize(), Err(HitError::missing_field("EventAction")));
}

#[test]
fn test_lenient_empty_event() {
    let hit = Event::with_policy(ValidationPolicy::lenient());
    assert_eq!(hit.serialize().unwrap(), "&t=event");
}

#[test]
fn test_event_value_zero_is_sent() {
    let mut hit = Event::new();
    hit.set_event_category("c").unwrap().set_event_action("a").unwrap();
    hit.set_event_value(Some(0));
    assert!(hit.serialize().unwrap().ends_with("&ev=0"));

    hit.set_event_value(None);
    assert!(!hit.serialize().unwrap().contains("&ev="));
}

#[test]
fn test_event_field_limits() {
    let mut hit = Event::new();
    assert_eq!(
        hit.set_event_category(&"c".repeat(151)).map(|_| ()),
        Err(HitError::too_long("EventCategory", 151, 150))
    );
    assert_eq!(
        hit.set_event_action(&"a".repeat(501)).map(|_| ()),
        Err(HitError::too_long("EventAction", 501, 500))
    );
    assert_eq!(
        hit.set_event_label(&"l".repeat(501)).map(|_| ()),
        Err(HitError::too_long("EventLabel", 501, 500))
    );
}

// =============================================================================
// AppEvent
// =============================================================================

#[test]
fn test_app_event_order() {
    let mut hit = AppEvent::new();
    hit.set_event_category("ui")
        .unwrap()
        .set_event_action("tap")
        .unwrap()
        .set_application_name("Demo")
        .unwrap()
        .set_screen_name("Main Menu")
        .unwrap()
        .set_application_version("2.0")
        .unwrap();

    assert_eq!(
        hit.serialize().unwrap(),
        "&an=Demo&cd=Main%20Menu&av=2.0&ec=ui&ea=tap&t=event"
    );
    assert_eq!(hit.hit_type(), HitType::Event);
}

#[test]
fn test_app_event_requires_application_name() {
    let mut hit = AppEvent::new();
    hit.set_event_category("ui").unwrap().set_event_action("tap").unwrap();
    assert_eq!(
        hit.serialize(),
        Err(HitError::missing_field("ApplicationName"))
    );
}

#[test]
fn test_app_event_still_requires_event_fields() {
    let mut hit = AppEvent::new();
    hit.set_application_name("Demo").unwrap();
    assert_eq!(hit.serialize(), Err(HitError::missing_field("EventCategory")));
}

#[test]
fn test_empty_app_event_fails_on_category_first() {
    assert_eq!(
        AppEvent::new().serialize(),
        Err(HitError::missing_field("EventCategory"))
    );
}

#[test]
fn test_app_event_checks_category_before_application_name() {
    let mut hit = AppEvent::new();
    hit.set_event_action("tap").unwrap();
    assert_eq!(hit.serialize(), Err(HitError::missing_field("EventCategory")));
}

#[test]
fn test_app_event_failure_leaves_output_untouched() {
    let mut hit = AppEvent::new();
    hit.set_application_name("Demo").unwrap();

    let mut out = String::from("v=1");
    assert!(hit.write_to(&mut out).is_err());
    assert_eq!(out, "v=1");
}

#[test]
fn test_app_event_data_source_last() {
    let mut hit = AppEvent::new();
    hit.set_application_name("Demo")
        .unwrap()
        .set_event_category("ui")
        .unwrap()
        .set_event_action("tap")
        .unwrap()
        .set_data_source("app")
        .unwrap();
    assert!(hit.serialize().unwrap().ends_with("&t=event&ds=app"));
}

#[test]
fn test_app_event_set_policy_reaches_event() {
    let mut hit = AppEvent::new();
    hit.set_policy(ValidationPolicy::lenient());
    assert_eq!(hit.policy(), ValidationPolicy::lenient());
    assert_eq!(hit.event().policy(), ValidationPolicy::lenient());
    assert_eq!(hit.serialize().unwrap(), "&t=event");
}

// =============================================================================
// WebEvent
// =============================================================================

#[test]
fn test_web_event_order() {
    let mut hit = WebEvent::new();
    hit.set_document_location("http://x.test/")
        .unwrap()
        .set_document_host_name("x.test")
        .unwrap()
        .set_document_path("/")
        .unwrap()
        .set_document_title("Home")
        .unwrap()
        .set_event_category("nav")
        .unwrap()
        .set_event_action("click")
        .unwrap();

    assert_eq!(
        hit.serialize().unwrap(),
        "&dl=http%3A%2F%2Fx.test%2F&dh=x.test&dp=%2F&dt=Home&ec=nav&ea=click&t=event"
    );
}

#[test]
fn test_web_event_has_no_extra_required_fields() {
    let mut hit = WebEvent::new();
    hit.set_event_category("nav").unwrap().set_event_action("click").unwrap();
    assert_eq!(hit.serialize().unwrap(), "&ec=nav&ea=click&t=event");
}

#[test]
fn test_web_event_path_rule() {
    let mut hit = WebEvent::new();
    assert!(matches!(
        hit.set_document_path("nope"),
        Err(HitError::InvalidFormat { .. })
    ));
}

#[test]
fn test_web_event_mut_access() {
    let mut hit = WebEvent::new();
    hit.event_mut().set_event_label("via inner").unwrap();
    assert_eq!(hit.event().event_label(), Some("via inner"));
}

// =============================================================================
// Hit type token
// =============================================================================

#[test]
fn test_event_single_hit_type_token() {
    let mut hit = Event::new();
    hit.set_event_category("t=event")
        .unwrap()
        .set_event_action("play")
        .unwrap()
        .set_event_label("&t=x")
        .unwrap();
    let payload = hit.serialize().unwrap();
    assert_eq!(payload.matches("&t=").count(), 1);
    assert!(payload.contains("&t=event"));
}

#[test]
fn test_app_event_single_hit_type_token() {
    let mut hit = AppEvent::new();
    hit.set_application_name("Demo")
        .unwrap()
        .set_event_category("ui")
        .unwrap()
        .set_event_action("tap")
        .unwrap();
    let payload = hit.serialize().unwrap();
    assert_eq!(payload.matches("&t=").count(), 1);
    assert!(payload.contains("&t=event"));
}

#[test]
fn test_web_event_single_hit_type_token() {
    let mut hit = WebEvent::new();
    hit.set_document_location("http://x.test/?t=event")
        .unwrap()
        .set_event_category("ui")
        .unwrap()
        .set_event_action("click")
        .unwrap();
    let payload = hit.serialize().unwrap();
    assert_eq!(payload.matches("&t=").count(), 1);
    assert!(payload.contains("&t=event"));
}
