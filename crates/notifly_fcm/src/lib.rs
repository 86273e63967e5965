//! Firebase Cloud Messaging integration for Notifly
//!
//! This crate provides functionality to send push notifications using the
//! Firebase Cloud Messaging (FCM) HTTP v1 API.
//!
//! # Features
//!
//! - Authentication with Firebase using service account credentials
//! - Sending push notifications to specific devices using FCM tokens
//! - Sending push notifications to topics
//! - Support for notification payload (title and body) and custom data
//! - Integration with Axum for HTTP API endpoints
//! - OpenAPI/Swagger documentation (with the `openapi` feature)
//!
//! # Usage
//!
//! Construct the client once at startup and share it:
//!
//! ```rust,no_run
//! use notifly_config::FcmConfig;
//! use notifly_fcm::FcmClient;
//!
//! async fn send_notification() -> Result<(), notifly_fcm::FcmError> {
//!     let config = FcmConfig {
//!         project_id: Some("my-project-id".to_string()),
//!         credentials_path: Some("/path/to/service-account.json".to_string()),
//!     };
//!
//!     let client = FcmClient::connect(config).await?;
//!     let message_id = client.send_to_token("device-token", "Hello", "World").await?;
//!     println!("Message sent with ID: {}", message_id);
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /fcm/send-notification` - Send a push notification to a device or topic

pub mod auth;
pub mod bootstrap;
#[cfg(test)]
mod bootstrap_test;
pub mod client;
#[cfg(test)]
mod client_test;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
#[cfg(test)]
mod service_test;

// Re-export the core types for easier access
pub use client::FcmClient;
pub use error::FcmError;
// Re-export the routes function to be used by the main backend service
pub use routes::routes;

#[cfg(feature = "openapi")]
pub mod openapi {
    pub use crate::doc::FcmApiDoc;
}
