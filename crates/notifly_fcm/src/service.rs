//! PushNotificationService implementation for the FCM client.
//!
//! This makes the FCM client usable behind the shared service trait, so
//! components that only need "send a push notification" can depend on
//! `notifly_common::services::PushNotificationService` instead of the
//! concrete client.

use crate::client::FcmClient;
use crate::error::FcmError;
use notifly_common::services::{NotificationResult, PushNotificationService};
use std::future::Future;
use std::pin::Pin;

impl PushNotificationService for FcmClient {
    type Error = FcmError;

    fn send_push(
        &self,
        token: &str,
        title: &str,
        body: &str,
    ) -> Pin<Box<dyn Future<Output = Result<NotificationResult, Self::Error>> + Send + '_>> {
        // Clone the values to avoid lifetime issues
        let token = token.to_string();
        let title = title.to_string();
        let body = body.to_string();

        Box::pin(async move {
            let message_id = self.send_to_token(&token, &title, &body).await?;
            Ok(NotificationResult {
                id: message_id,
                status: "sent".to_string(),
            })
        })
    }
}
