use thiserror::Error;

/// Errors that can occur when interacting with the Firebase Cloud Messaging API
#[derive(Error, Debug)]
pub enum FcmError {
    /// The service-account credential file is missing or malformed.
    ///
    /// This is a startup-time error: a client cannot be constructed without
    /// valid credentials, so callers are expected to treat it as fatal.
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// Error during authentication with Google's OAuth2 service
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error during HTTP request to the FCM API
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Missing required configuration
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    /// Error returned by the FCM API
    #[error("FCM API error: {0}")]
    ApiError(String),
}
