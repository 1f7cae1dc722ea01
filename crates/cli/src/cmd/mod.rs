//! Command implementations for the Measure CLI
//!
//! Each subcommand turns its flags into a hit. [`run`] merges the session
//! flags over the config file, then prints or sends the hit.

pub mod event;
pub mod exception;
pub mod page_view;
pub mod screen_view;
pub mod social;

use anyhow::{Context, Result};
use clap::Args;
use measure_client::{ClientContext, MeasurementClient, Method, Request};
use measure_config::Config;
use measure_protocol::{Hit, ValidationPolicy};
use tracing::info;
use uuid::Uuid;

/// Session flags, overriding the `[client]` and `[validation]` sections
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Tracking id (UA-XXXX-Y)
    #[arg(long, global = true)]
    pub tracking_id: Option<String>,

    /// Fixed client id; a fresh one is generated per hit otherwise
    #[arg(long, global = true)]
    pub client_id: Option<Uuid>,

    /// HTTP method (get or post)
    #[arg(long, global = true, value_parser = parse_method)]
    pub method: Option<Method>,

    /// Use the TLS endpoint
    #[arg(long, global = true)]
    pub ssl: bool,

    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    #[arg(long, global = true)]
    pub user_language: Option<String>,

    /// Send oversized, malformed or incomplete hits as they are
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Print the request instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

fn parse_method(s: &str) -> std::result::Result<Method, String> {
    s.parse().map_err(|e: measure_client::ClientError| e.to_string())
}

impl SessionArgs {
    /// Write the flags that were given over the config
    fn apply(&self, config: &mut Config) {
        let client = &mut config.client;

        if let Some(ref tracking_id) = self.tracking_id {
            client.tracking_id = Some(tracking_id.clone());
        }
        if self.client_id.is_some() {
            client.client_id = self.client_id;
        }
        if let Some(method) = self.method {
            client.method = method;
        }
        if self.ssl {
            client.use_ssl = true;
        }
        if let Some(ref user_agent) = self.user_agent {
            client.user_agent = Some(user_agent.clone());
        }
        if let Some(ref user_language) = self.user_language {
            client.user_language = Some(user_language.clone());
        }
        if self.lenient {
            config.validation.strict = false;
        }
    }
}

/// Subcommand arguments, borrowed from the parsed CLI
pub enum HitArgs<'a> {
    PageView(&'a page_view::PageViewArgs),
    ScreenView(&'a screen_view::ScreenViewArgs),
    Event(&'a event::EventArgs),
    Exception(&'a exception::ExceptionArgs),
    Social(&'a social::SocialArgs),
}

impl HitArgs<'_> {
    /// Build the hit under `policy`
    pub fn build(&self, policy: ValidationPolicy) -> Result<Box<dyn Hit>> {
        match self {
            Self::PageView(args) => Ok(Box::new(args.build(policy)?)),
            Self::ScreenView(args) => Ok(Box::new(args.build(policy)?)),
            Self::Event(args) => args.build(policy),
            Self::Exception(args) => Ok(Box::new(args.build(policy)?)),
            Self::Social(args) => Ok(Box::new(args.build(policy)?)),
        }
    }
}

/// Build the hit and print or send it
pub fn run(hit: HitArgs<'_>, session: &SessionArgs, mut config: Config) -> Result<()> {
    session.apply(&mut config);

    let context = config
        .client_context()
        .context("invalid client settings")?;
    let hit = hit.build(context.policy())?;

    if session.dry_run {
        println!("{}", render(&context, hit.as_ref())?);
        return Ok(());
    }

    let client = MeasurementClient::with_http(context, config.transport_config())
        .context("failed to start transport")?;

    client
        .send_hit(hit.as_ref())
        .with_context(|| format!("failed to send {}", hit.hit_type()))?;

    info!(
        hit_type = %hit.hit_type(),
        tracking_id = client.context().tracking_id(),
        "hit sent"
    );

    client.into_transport().close();
    Ok(())
}

/// Request as it would go out: `POST <url>` and the body, or `GET <url>`
pub fn render(context: &ClientContext, hit: &dyn Hit) -> Result<String> {
    let request = context.request(hit)?;
    Ok(match request {
        Request::Post { url, body } => format!("POST {url}\n{body}"),
        Request::Get { url } => format!("GET {url}"),
    })
}

/// Value of an optional flag, empty when absent
///
/// Setting a field to an empty value leaves it unset.
pub(crate) fn flag(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const CLIENT_ID: &str = "35009a79-1a05-49d7-b876-2b884d0f825b";

    fn session(tracking_id: &str) -> SessionArgs {
        SessionArgs {
            tracking_id: Some(tracking_id.to_string()),
            client_id: Some(Uuid::parse_str(CLIENT_ID).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_session_overrides_config() {
        let mut config =
            Config::from_str("[client]\ntracking_id = \"UA-9-9\"\nmethod = \"post\"").unwrap();
        let args = SessionArgs {
            tracking_id: Some("UA-1-1".to_string()),
            method: Some(Method::Get),
            ssl: true,
            lenient: true,
            ..Default::default()
        };

        args.apply(&mut config);

        assert_eq!(config.client.tracking_id.as_deref(), Some("UA-1-1"));
        assert_eq!(config.client.method, Method::Get);
        assert!(config.client.use_ssl);
        assert!(!config.validation.strict);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut config = Config::from_str("[client]\ntracking_id = \"UA-9-9\"\nuse_ssl = true").unwrap();
        SessionArgs::default().apply(&mut config);

        assert_eq!(config.client.tracking_id.as_deref(), Some("UA-9-9"));
        assert!(config.client.use_ssl);
        assert!(config.validation.strict);
    }

    #[test]
    fn test_render_post() {
        let mut config = Config::default();
        session("UA-1-1").apply(&mut config);
        let context = config.client_context().unwrap();

        let args = social::SocialArgs {
            network: Some("facebook".to_string()),
            action: Some("like".to_string()),
            target: Some("/home".to_string()),
            data_source: None,
        };
        let hit = HitArgs::Social(&args).build(context.policy()).unwrap();

        assert_eq!(
            render(&context, hit.as_ref()).unwrap(),
            format!(
                "POST http://www.google-analytics.com/collect\n\
                 v=1&tid=UA-1-1&cid={CLIENT_ID}&sn=facebook&sa=like&st=%2Fhome&t=social"
            )
        );
    }

    #[test]
    fn test_render_get() {
        let mut config = Config::default();
        let mut args = session("UA-1-1");
        args.method = Some(Method::Get);
        args.ssl = true;
        args.apply(&mut config);
        let context = config.client_context().unwrap();

        let event = event::EventArgs {
            category: Some("video".to_string()),
            action: Some("play".to_string()),
            ..Default::default()
        };
        let hit = HitArgs::Event(&event).build(context.policy()).unwrap();

        assert_eq!(
            render(&context, hit.as_ref()).unwrap(),
            format!(
                "GET https://ssl.google-analytics.com/collect?\
                 v=1&tid=UA-1-1&cid={CLIENT_ID}&ec=video&ea=play&t=event"
            )
        );
    }

    #[test]
    fn test_run_without_tracking_id_fails() {
        let args = social::SocialArgs::default();
        let err = run(HitArgs::Social(&args), &SessionArgs::default(), Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("invalid client settings"));
    }

    #[test]
    fn test_strict_run_rejects_incomplete_hit() {
        let args = social::SocialArgs::default();
        let mut session = session("UA-1-1");
        session.dry_run = true;

        let err = run(HitArgs::Social(&args), &session, Config::default()).unwrap_err();
        assert!(err.to_string().contains("SocialNetwork is required"));
    }

    #[test]
    fn test_lenient_dry_run_accepts_incomplete_hit() {
        let args = social::SocialArgs::default();
        let mut session = session("UA-1-1");
        session.dry_run = true;
        session.lenient = true;

        assert!(run(HitArgs::Social(&args), &session, Config::default()).is_ok());
    }
}
