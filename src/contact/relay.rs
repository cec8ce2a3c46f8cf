use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SERVICE_ID_PLACEHOLDER: &str = "YOUR_SERVICE_ID";
pub const TEMPLATE_ID_PLACEHOLDER: &str = "YOUR_TEMPLATE_ID";
pub const PUBLIC_KEY_PLACEHOLDER: &str = "YOUR_PUBLIC_KEY";

#[cfg(feature = "ssr")]
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the email relay plus the address messages are delivered to.
///
/// The relay's public key is meant to ship with the client bundle, so the
/// values are captured at compile time rather than read at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            recipient: recipient.into(),
        }
    }

    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
    /// `EMAILJS_PUBLIC_KEY` as they were when the crate was compiled.
    pub fn from_build_env(recipient: impl Into<String>) -> Self {
        Self::new(
            option_env!("EMAILJS_SERVICE_ID").unwrap_or(SERVICE_ID_PLACEHOLDER),
            option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(TEMPLATE_ID_PLACEHOLDER),
            option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(PUBLIC_KEY_PLACEHOLDER),
            recipient,
        )
    }

    /// Names of the settings that are blank or still placeholders.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service id", &self.service_id),
            ("template id", &self.template_id),
            ("public key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, v)| is_placeholder(v))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}

fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.starts_with("YOUR_")
}

/// What a visitor typed into the form. This is all the client sends; the
/// relay credentials and the recipient are filled in where the message is
/// relayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Template variables the relay substitutes into the outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

/// Body of a relay send call, in the shape the EmailJS REST API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, message: &ContactMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: message.name.clone(),
                from_email: message.email.clone(),
                message: message.message.clone(),
                to_email: config.recipient.clone(),
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayError {
    #[error("relay is not configured")]
    NotConfigured,
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl RelayError {
    /// Unwraps the answer of a remote relay call. The relay's own error
    /// travels inside the outer `Ok`; an outer error means the call itself
    /// didn't go through.
    pub fn settle<E: std::fmt::Display>(
        answer: Result<Result<(), RelayError>, E>,
    ) -> Result<(), RelayError> {
        answer.map_err(|e| RelayError::Transport(e.to_string()))?
    }
}

/// Something that can deliver a contact message. Resolves once the relay
/// has accepted or refused it.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Forwards messages to the EmailJS REST endpoint using the credentials and
/// recipient it was built with.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    config: RelayConfig,
}

#[cfg(feature = "ssr")]
impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>, config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            config,
        }
    }

    /// Uses `EMAILJS_API_URL` when set, and the server's own build-time
    /// credentials.
    pub fn from_env(recipient: impl Into<String>) -> Self {
        let endpoint =
            std::env::var("EMAILJS_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint, RelayConfig::from_build_env(recipient))
    }
}

#[cfg(feature = "ssr")]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let missing = self.config.missing();
        if !missing.is_empty() {
            tracing::warn!(missing = %missing.join(", "), "contact relay not configured");
            return Err(RelayError::NotConfigured);
        }
        let request = RelayRequest::new(&self.config, message);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            tracing::info!(template = %request.template_id, "contact message relayed");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> RelayConfig {
        RelayConfig::new("service_abc", "template_xyz", "pk_123", "owner@example.com")
    }

    #[test]
    fn test_placeholders_are_missing() {
        let config = RelayConfig::new(
            SERVICE_ID_PLACEHOLDER,
            "template_xyz",
            PUBLIC_KEY_PLACEHOLDER,
            "owner@example.com",
        );
        assert_eq!(config.missing(), vec!["service id", "public key"]);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_blank_values_are_missing() {
        let config = RelayConfig::new("  ", "", "pk_123", "owner@example.com");
        assert_eq!(config.missing(), vec!["service id", "template id"]);
    }

    #[test]
    fn test_configured() {
        assert!(configured().is_configured());
        assert!(configured().missing().is_empty());
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let request = RelayRequest::new(&configured(), &message());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello there",
                    "to_email": "owner@example.com",
                }
            })
        );
    }

    #[test]
    fn test_client_cannot_choose_recipient_or_credentials() {
        // a hand-crafted body carrying its own credentials and recipient
        let body = serde_json::json!({
            "name": "Mallory",
            "email": "mallory@example.com",
            "message": "spam",
            "service_id": "svc_x",
            "template_id": "tpl_x",
            "user_id": "pk_x",
            "to_email": "victim@example.com",
            "template_params": { "to_email": "victim@example.com" },
        });
        let message: ContactMessage = serde_json::from_value(body).unwrap();
        let request = RelayRequest::new(&configured(), &message);

        assert_eq!(request.template_params.to_email, "owner@example.com");
        assert_eq!(request.service_id, "service_abc");
        assert_eq!(request.template_id, "template_xyz");
        assert_eq!(request.public_key, "pk_123");
        assert_eq!(request.template_params.from_name, "Mallory");
    }

    #[test]
    fn test_settle_keeps_relay_errors() {
        let wire = serde_json::to_string(&Err::<(), _>(RelayError::NotConfigured)).unwrap();
        let answer: Result<(), RelayError> = serde_json::from_str(&wire).unwrap();
        assert_eq!(
            RelayError::settle(Ok::<_, String>(answer)),
            Err(RelayError::NotConfigured)
        );
        assert_eq!(RelayError::settle(Ok::<_, String>(Ok(()))), Ok(()));
    }

    #[test]
    fn test_settle_maps_call_failures_to_transport() {
        assert_eq!(
            RelayError::settle(Err::<Result<(), RelayError>, _>("connection refused")),
            Err(RelayError::Transport("connection refused".to_string()))
        );
    }
}
