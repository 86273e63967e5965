//! Firebase Cloud Messaging client module
//!
//! This module provides a client for the Firebase Cloud Messaging (FCM)
//! HTTP v1 API. It includes the wire types for FCM messages and the
//! `FcmClient` struct, which handles authentication and communication with
//! the API.
//!
//! The client is an ordinary value: construct it once at application startup
//! with [`FcmClient::connect`] and share it by `Arc` with anything that
//! sends notifications. All failures are returned as [`FcmError`] values;
//! nothing in this module panics on delivery failure.

use crate::auth::{ServiceAccountTokenProvider, TokenProvider};
use crate::error::FcmError;
use notifly_config::FcmConfig;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Production endpoint of the FCM HTTP v1 API.
pub const FCM_API_BASE: &str = "https://fcm.googleapis.com";

/// A message to be sent via Firebase Cloud Messaging
///
/// This is the top-level structure that wraps a Message object
/// according to the FCM HTTP v1 API format.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FcmMessage {
    /// The message payload
    pub message: Message,
}

/// The message payload for Firebase Cloud Messaging
///
/// Contains the target (token or topic), the notification content, and
/// optional custom data. Either token or topic must be provided, but not
/// both.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Message {
    /// Registration token of the target device (for single device targeting)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Topic that the target devices are subscribed to (for topic messaging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// The notification to be displayed on the user's device
    ///
    /// If not provided, the message is a data-only message.
    pub notification: Option<Notification>,

    /// Custom key-value data to be sent with the message
    pub data: Option<std::collections::HashMap<String, String>>,
}

/// The notification to be displayed on the user's device
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Notification {
    /// The title of the notification
    pub title: String,

    /// The body text of the notification
    pub body: String,
}

/// Response from the Firebase Cloud Messaging API
#[derive(Debug, Deserialize)]
pub struct FcmResponse {
    /// The unique ID of the message, a string in the format
    /// "projects/{project_id}/messages/{message_id}"
    pub name: String,
}

/// Client for the Firebase Cloud Messaging HTTP v1 API
///
/// Handles authentication and communication with the FCM API. Construct it
/// once at startup (directly or through [`crate::bootstrap::init`]) and pass
/// it by reference to anything that sends notifications.
pub struct FcmClient {
    /// HTTP client for requests to the FCM API
    http: Client,

    /// FCM configuration, including the project id
    config: FcmConfig,

    /// Base URL of the FCM API; overridable for tests
    api_base: String,

    /// Source of OAuth2 bearer tokens
    token_provider: Arc<dyn TokenProvider>,
}

impl FcmClient {
    /// Creates a client from configuration, loading the service-account
    /// credentials eagerly.
    ///
    /// The credential file named by `config.credentials_path` is read and
    /// parsed here so that a missing or malformed file fails at startup
    /// rather than on the first send.
    ///
    /// # Errors
    ///
    /// * `FcmError::ConfigError` if `credentials_path` is not set
    /// * `FcmError::CredentialError` if the key file cannot be read or parsed
    pub async fn connect(config: FcmConfig) -> Result<Self, FcmError> {
        let key_path = config.credentials_path.as_deref().ok_or_else(|| {
            FcmError::ConfigError("Missing credentials_path in FcmConfig".to_string())
        })?;

        let key = crate::auth::read_credentials(Path::new(key_path)).await?;
        let provider = Arc::new(ServiceAccountTokenProvider::new(key));
        Ok(Self::with_token_provider(config, provider))
    }

    /// Creates a client with an explicit token provider.
    ///
    /// This is the construction seam used by tests and by deployments that
    /// obtain tokens some other way (e.g. workload identity).
    pub fn with_token_provider(config: FcmConfig, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: Client::new(),
            config,
            api_base: FCM_API_BASE.to_string(),
            token_provider,
        }
    }

    /// Overrides the FCM API base URL. Intended for tests.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sends a push notification message via Firebase Cloud Messaging
    ///
    /// Authenticates, constructs the HTTP request, and submits the message
    /// to the FCM API.
    ///
    /// # Returns
    ///
    /// On success, the provider-assigned message ID. On failure, an
    /// [`FcmError`] describing what went wrong; the caller decides whether
    /// to log, retry, or ignore it.
    ///
    /// # Errors
    ///
    /// * `FcmError::ConfigError` if the project_id is missing
    /// * `FcmError::AuthError` if authentication fails
    /// * `FcmError::RequestError` if the HTTP request fails
    /// * `FcmError::ApiError` if the FCM API returns an error response
    pub async fn send_message(&self, message: FcmMessage) -> Result<String, FcmError> {
        let project_id = self.config.project_id.as_deref().ok_or_else(|| {
            FcmError::ConfigError("Missing project_id in FcmConfig".to_string())
        })?;

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.api_base, project_id
        );

        let token = self.token_provider.access_token().await?;

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(FcmError::ApiError(error_text));
        }

        let fcm_response: FcmResponse = response.json().await?;
        Ok(fcm_response.name)
    }

    /// Sends a title/body notification to a single device token.
    ///
    /// The token, title, and body are forwarded to FCM exactly as given,
    /// with no transformation.
    pub async fn send_to_token(
        &self,
        token: &str,
        title: &str,
        body: &str,
    ) -> Result<String, FcmError> {
        self.send_message(FcmMessage {
            message: Message {
                token: Some(token.to_string()),
                topic: None,
                notification: Some(Notification {
                    title: title.to_string(),
                    body: body.to_string(),
                }),
                data: None,
            },
        })
        .await
    }

    /// Sends a title/body notification to a topic.
    pub async fn send_to_topic(
        &self,
        topic: &str,
        title: &str,
        body: &str,
    ) -> Result<String, FcmError> {
        self.send_message(FcmMessage {
            message: Message {
                token: None,
                topic: Some(topic.to_string()),
                notification: Some(Notification {
                    title: title.to_string(),
                    body: body.to_string(),
                }),
                data: None,
            },
        })
        .await
    }
}
