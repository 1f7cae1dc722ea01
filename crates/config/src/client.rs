//! `[client]` section: session fields of the measurement client

use measure_client::Method;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Session settings
///
/// ```toml
/// [client]
/// tracking_id = "UA-XXXX-Y"
/// client_id = "35009a79-1a05-49d7-b876-2b884d0f825b"
/// method = "post"
/// use_ssl = false
/// user_agent = "my-app/1.0"
/// user_language = "en-us"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Property to report to, required when sending
    pub tracking_id: Option<String>,

    /// Fixed client id. Without one every hit gets a fresh id.
    pub client_id: Option<Uuid>,

    /// `get` or `post` in any case (default: post)
    #[serde(deserialize_with = "deserialize_method")]
    pub method: Method,

    /// Use the TLS endpoint
    pub use_ssl: bool,

    pub user_agent: Option<String>,

    pub user_language: Option<String>,
}

fn deserialize_method<'de, D>(deserializer: D) -> std::result::Result<Method, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert!(config.tracking_id.is_none());
        assert!(config.client_id.is_none());
        assert_eq!(config.method, Method::Post);
        assert!(!config.use_ssl);
    }

    #[test]
    fn test_method_any_case() {
        let config: ClientConfig = toml::from_str("method = \"Get\"").unwrap();
        assert_eq!(config.method, Method::Get);
    }

    #[test]
    fn test_unknown_method() {
        let err = toml::from_str::<ClientConfig>("method = \"put\"").unwrap_err();
        assert!(err.to_string().contains("invalid method"));
    }

    #[test]
    fn test_client_id_parsed() {
        let config: ClientConfig =
            toml::from_str("client_id = \"35009a79-1a05-49d7-b876-2b884d0f825b\"").unwrap();
        assert_eq!(
            config.client_id.unwrap().to_string(),
            "35009a79-1a05-49d7-b876-2b884d0f825b"
        );
    }

    #[test]
    fn test_bad_client_id() {
        assert!(toml::from_str::<ClientConfig>("client_id = \"not-a-uuid\"").is_err());
    }
}
