use axum::{routing::post, Router};
use std::sync::Arc;
use tracing::info;

use crate::client::FcmClient;
use crate::handlers::{send_notification_handler, FcmState};

/// Create FCM routes for the API
///
/// Builds a router with the Firebase Cloud Messaging endpoints, wired to
/// the client constructed at application startup. The client is injected
/// rather than created here so the route layer stays free of credential
/// handling.
///
/// # Arguments
///
/// * `client` - The FCM client handle shared across the application
pub fn routes(client: Arc<FcmClient>) -> Router {
    info!("FCM routes initialized");

    let state = Arc::new(FcmState { client });

    Router::new()
        .route("/fcm/send-notification", post(send_notification_handler))
        .with_state(state)
}
