//! Tests for Exception

use crate::error::HitError;
use crate::hit::{Exception, Hit};
use crate::policy::ValidationPolicy;

#[test]
fn test_minimal_exception() {
    let mut hit = Exception::new();
    hit.set_exception_description("NullReference")
        .unwrap()
        .set_application_name("Demo")
        .unwrap();

    assert_eq!(
        hit.serialize().unwrap(),
        "&exd=NullReference&an=Demo&t=exception"
    );
}

#[test]
fn test_full_field_order() {
    let mut hit = Exception::new();
    hit.set_exception_description("IO failure")
        .unwrap()
        .set_application_name("Demo")
        .unwrap()
        .set_screen_name("Import")
        .unwrap()
        .set_fatal(Some(true))
        .set_application_version("3.1")
        .unwrap()
        .set_data_source("app")
        .unwrap();

    assert_eq!(
        hit.serialize().unwrap(),
        "&exd=IO%20failure&an=Demo&cd=Import&exf=1&av=3.1&t=exception&ds=app"
    );
}

#[test]
fn test_non_fatal_flag() {
    let mut hit = Exception::new();
    hit.set_exception_description("x")
        .unwrap()
        .set_application_name("y")
        .unwrap()
        .set_fatal(Some(false));
    assert!(hit.serialize().unwrap().contains("&exf=0"));
}

#[test]
fn test_description_checked_first() {
    let hit = Exception::new();
    assert_eq!(
        hit.serialize(),
        Err(HitError::missing_field("ExceptionDescription"))
    );
}

#[test]
fn test_missing_application_name() {
    let mut hit = Exception::new();
    hit.set_exception_description("boom").unwrap();
    assert_eq!(
        hit.serialize(),
        Err(HitError::missing_field("ApplicationName"))
    );
}

#[test]
fn test_lenient_empty() {
    let hit = Exception::with_policy(ValidationPolicy::lenient());
    assert_eq!(hit.serialize().unwrap(), "&t=exception");
}

#[test]
fn test_description_limit() {
    let mut hit = Exception::new();
    assert_eq!(
        hit.set_exception_description(&"d".repeat(151)).map(|_| ()),
        Err(HitError::too_long("ExceptionDescription", 151, 150))
    );
}

#[test]
fn test_version_raw_limit() {
    let mut hit = Exception::new();
    assert!(hit.set_application_version(&"v".repeat(100)).is_ok());
    assert!(hit.set_application_version(&"v".repeat(101)).is_err());
}

#[test]
fn test_single_hit_type_token() {
    let mut hit = Exception::new();
    hit.set_exception_description("failed at &t=screenview")
        .unwrap()
        .set_application_name("Demo")
        .unwrap()
        .set_fatal(Some(true));
    let payload = hit.serialize().unwrap();
    assert_eq!(payload.matches("&t=").count(), 1);
    assert!(payload.contains("&t=exception"));
}
