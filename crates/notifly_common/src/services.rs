// --- File: crates/notifly_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for the external services used by
//! the application. The traits allow for dependency injection and easier
//! testing by decoupling calling code from specific provider implementations:
//! a component that needs to send a push notification depends on
//! `PushNotificationService`, not on any concrete client.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for push-notification service operations.
///
/// Implementations deliver a notification to a single device identified by
/// an opaque registration token. Delivery failures are reported as error
/// values; implementations must not panic on transport failure.
pub trait PushNotificationService: Send + Sync {
    /// Error type returned by push-notification operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a push notification to the device identified by `token`.
    fn send_push(
        &self,
        token: &str,
        title: &str,
        body: &str,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The provider-assigned ID of the notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}
