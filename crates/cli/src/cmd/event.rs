//! `measure event`
//!
//! A plain event by default. Any app flag turns it into an app event, any
//! document flag into a web event; the two groups cannot be mixed.

use anyhow::Result;
use clap::Args;
use measure_protocol::{AppEvent, Event, Hit, ValidationPolicy, WebEvent};

use super::flag;

const WEB_FLAGS: [&str; 4] = ["location", "host", "path", "title"];

#[derive(Args, Debug, Default)]
pub struct EventArgs {
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub action: Option<String>,

    #[arg(long)]
    pub label: Option<String>,

    #[arg(long)]
    pub value: Option<u32>,

    #[arg(long)]
    pub data_source: Option<String>,

    /// Application name (app event)
    #[arg(long, conflicts_with_all = WEB_FLAGS)]
    pub app_name: Option<String>,

    /// Screen name (app event)
    #[arg(long, conflicts_with_all = WEB_FLAGS)]
    pub screen: Option<String>,

    /// Application version (app event)
    #[arg(long, conflicts_with_all = WEB_FLAGS)]
    pub app_version: Option<String>,

    /// Document URL (web event)
    #[arg(long)]
    pub location: Option<String>,

    /// Document host name (web event)
    #[arg(long)]
    pub host: Option<String>,

    /// Document path (web event)
    #[arg(long)]
    pub path: Option<String>,

    /// Document title (web event)
    #[arg(long)]
    pub title: Option<String>,
}

impl EventArgs {
    fn is_app_event(&self) -> bool {
        self.app_name.is_some() || self.screen.is_some() || self.app_version.is_some()
    }

    fn is_web_event(&self) -> bool {
        self.location.is_some() || self.host.is_some() || self.path.is_some() || self.title.is_some()
    }

    pub fn build(&self, policy: ValidationPolicy) -> Result<Box<dyn Hit>> {
        if self.is_app_event() {
            let mut hit = AppEvent::with_policy(policy);
            hit.set_application_name(flag(&self.app_name))?
                .set_screen_name(flag(&self.screen))?
                .set_application_version(flag(&self.app_version))?;
            self.fill(hit.event_mut())?;
            return Ok(Box::new(hit));
        }

        if self.is_web_event() {
            let mut hit = WebEvent::with_policy(policy);
            hit.set_document_location(flag(&self.location))?
                .set_document_host_name(flag(&self.host))?
                .set_document_path(flag(&self.path))?
                .set_document_title(flag(&self.title))?;
            self.fill(hit.event_mut())?;
            return Ok(Box::new(hit));
        }

        let mut hit = Event::with_policy(policy);
        self.fill(&mut hit)?;
        Ok(Box::new(hit))
    }

    fn fill(&self, event: &mut Event) -> measure_protocol::Result<()> {
        event
            .set_event_category(flag(&self.category))?
            .set_event_action(flag(&self.action))?
            .set_event_label(flag(&self.label))?
            .set_data_source(flag(&self.data_source))?
            .set_event_value(self.value);
        Ok(())
    }
}
