//! Property groups
//!
//! Clusters of fields shared by several hit types. App properties describe a
//! mobile or desktop application screen; web properties describe a document.
//! Records embed these groups rather than flattening the fields, so each
//! field's rules live in one place.

mod app;
mod web;


pub use app::AppProperties;
pub use web::WebProperties;
