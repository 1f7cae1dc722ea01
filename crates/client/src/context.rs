//! Client session context
//!
//! Holds the fields shared by every hit of a session and turns a hit into a
//! ready-to-send [`Request`]. Payloads always open with the same fixed
//! sequence:
//!
//! ```text
//! v=1 &tid=<tracking id> &cid=<client id> [&ua=<user agent>] [&ul=<language>] <hit fragment>
//! ```

use std::fmt;
use std::str::FromStr;

use measure_protocol::{FieldSpec, Hit, HitError, PROTOCOL_VERSION, ValidatedField, ValidationPolicy};
use uuid::Uuid;

use crate::endpoint::{self, MAX_POST_BODY_BYTES, MAX_URL_BYTES};
use crate::error::{ClientError, Result};

const USER_AGENT: FieldSpec = FieldSpec::percent_unbounded("UserAgent", "ua");
const USER_LANGUAGE: FieldSpec = FieldSpec::raw("UserLanguage", "ul", 20);

/// HTTP method used to deliver hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    Get,
    #[default]
    Post,
}

impl Method {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ClientError;

    /// Parse `GET` or `POST` in any case
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(ClientError::InvalidMethod(s.to_string())),
        }
    }
}

/// A payload ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Payload carried in the query string
    Get { url: String },
    /// Payload carried in the body
    Post { url: String, body: String },
}

impl Request {
    /// Target URL
    pub fn url(&self) -> &str {
        match self {
            Self::Get { url } | Self::Post { url, .. } => url,
        }
    }

    /// POST body, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Get { .. } => None,
            Self::Post { body, .. } => Some(body),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Get { .. } => Method::Get,
            Self::Post { .. } => Method::Post,
        }
    }
}

/// Session-scoped fields and payload assembly
///
/// When no client id is set, every payload gets a freshly generated one, so
/// hits from a context without an explicit id are not correlated with each
/// other.
#[derive(Debug, Clone)]
pub struct ClientContext {
    tracking_id: String,
    client_id: Option<Uuid>,
    method: Method,
    use_ssl: bool,
    user_agent: ValidatedField,
    user_language: ValidatedField,
    policy: ValidationPolicy,
}

impl ClientContext {
    /// Create a context for a tracking id (format `UA-XXXX-Y`)
    pub fn new(tracking_id: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            client_id: None,
            method: Method::default(),
            use_ssl: false,
            user_agent: ValidatedField::new(USER_AGENT),
            user_language: ValidatedField::new(USER_LANGUAGE),
            policy: ValidationPolicy::default(),
        }
    }

    /// Create a context with a fixed client id
    pub fn with_client_id(tracking_id: impl Into<String>, client_id: Uuid) -> Self {
        let mut context = Self::new(tracking_id);
        context.client_id = Some(client_id);
        context
    }

    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn client_id(&self) -> Option<Uuid> {
        self.client_id
    }

    pub fn set_client_id(&mut self, client_id: Option<Uuid>) -> &mut Self {
        self.client_id = client_id;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn set_method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    pub fn use_ssl(&self) -> bool {
        self.use_ssl
    }

    pub fn set_use_ssl(&mut self, use_ssl: bool) -> &mut Self {
        self.use_ssl = use_ssl;
        self
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.raw()
    }

    /// Set the user agent (`ua`, percent-encoded, no ceiling)
    pub fn set_user_agent(&mut self, value: &str) -> Result<&mut Self> {
        self.user_agent.set(value, self.policy)?;
        Ok(self)
    }

    pub fn user_language(&self) -> Option<&str> {
        self.user_language.raw()
    }

    /// Set the user language (`ul`, sent verbatim, at most 20 bytes)
    pub fn set_user_language(&mut self, value: &str) -> Result<&mut Self> {
        self.user_language.set(value, self.policy)?;
        Ok(self)
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Change the policy for session fields and transport ceilings
    pub fn set_policy(&mut self, policy: ValidationPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Endpoint selected by the SSL flag
    pub fn endpoint(&self) -> &'static str {
        endpoint::collect_url(self.use_ssl)
    }

    /// Session fields: `v=1&tid=...&cid=...[&ua=...][&ul=...]`
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for an empty tracking id under a strict policy.
    pub fn session_fragment(&self) -> Result<String> {
        if self.tracking_id.is_empty() && self.policy.is_strict() {
            return Err(HitError::missing_field("TrackingId").into());
        }

        let client_id = self.client_id.unwrap_or_else(Uuid::new_v4);

        let mut out = String::with_capacity(512);
        out.push_str(PROTOCOL_VERSION);
        out.push_str("&tid=");
        out.push_str(&self.tracking_id);
        out.push_str("&cid=");
        out.push_str(&client_id.hyphenated().to_string());
        self.user_agent.write_to(&mut out);
        self.user_language.write_to(&mut out);
        Ok(out)
    }

    /// Full payload for a hit: session fields followed by the hit's fragment
    pub fn payload(&self, hit: &dyn Hit) -> Result<String> {
        let mut out = self.session_fragment()?;
        hit.write_to(&mut out)?;
        Ok(out)
    }

    /// Build the request for a hit, enforcing the transport ceilings
    ///
    /// # Errors
    ///
    /// Returns validation errors from the hit, `PayloadTooLarge` for an
    /// oversized POST body or `UrlTooLong` for an oversized GET URL. Ceilings
    /// are only enforced under a strict policy.
    pub fn request(&self, hit: &dyn Hit) -> Result<Request> {
        let payload = self.payload(hit)?;
        self.request_for_payload(payload)
    }

    /// Build the request for a pre-assembled payload
    pub fn request_for_payload(&self, payload: String) -> Result<Request> {
        let url = self.endpoint();

        match self.method {
            Method::Post => {
                if self.policy.is_strict() && payload.len() > MAX_POST_BODY_BYTES {
                    return Err(ClientError::PayloadTooLarge {
                        len: payload.len(),
                        max: MAX_POST_BODY_BYTES,
                    });
                }
                Ok(Request::Post {
                    url: url.to_string(),
                    body: payload,
                })
            }
            Method::Get => {
                let url = endpoint::get_url(url, &payload);
                if self.policy.is_strict() && url.len() > MAX_URL_BYTES {
                    return Err(ClientError::UrlTooLong {
                        len: url.len(),
                        max: MAX_URL_BYTES,
                    });
                }
                Ok(Request::Get { url })
            }
        }
    }
}
