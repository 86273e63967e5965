//! HTTP handlers for Firebase Cloud Messaging
//!
//! This module provides the REST handler for sending push notifications to
//! a device token or a topic, and the request/response types it uses. The
//! handler is designed for the Axum web framework and carries OpenAPI
//! documentation when the `openapi` feature is enabled.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::client::{FcmClient, FcmMessage, Message, Notification};
use crate::error::FcmError;

/// Shared state for FCM handlers
///
/// Holds the client that was constructed at application startup and
/// injected into the router.
#[derive(Clone)]
pub struct FcmState {
    /// The FCM client used to send notifications
    pub client: Arc<FcmClient>,
}

/// Request body for sending a notification
///
/// Either `token` or `topic` must be provided, but not both.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SendNotificationRequest {
    /// Registration token of the target device (for single device targeting)
    pub token: Option<String>,

    /// Topic that the target devices are subscribed to (for topic messaging)
    pub topic: Option<String>,

    /// The title of the notification
    pub title: String,

    /// The body text of the notification
    pub body: String,

    /// Custom key-value data to be sent with the message
    pub data: Option<std::collections::HashMap<String, String>>,
}

/// Response body for the send notification endpoint
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SendNotificationResponse {
    /// Whether the notification was sent successfully
    pub success: bool,

    /// The ID of the message if it was sent successfully, a string in the
    /// format "projects/{project_id}/messages/{message_id}"
    pub message_id: Option<String>,

    /// Error message if the notification failed to send
    pub error: Option<String>,
}

/// Handler for sending push notifications via Firebase Cloud Messaging
///
/// Accepts a JSON payload with notification details and sends a push
/// notification to the specified device token or topic. Delivery failures
/// are reported in the response body and logged; they never crash the
/// calling code path.
///
/// # Responses
///
/// - 200 OK: Notification sent successfully
/// - 400 Bad Request: Missing or invalid parameters
/// - 401 Unauthorized: Authentication failed
/// - 500 Internal Server Error: Server-side error
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/fcm/send-notification",
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "Notification sent successfully", body = SendNotificationResponse),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "FCM"
))]
pub async fn send_notification_handler(
    State(state): State<Arc<FcmState>>,
    Json(payload): Json<SendNotificationRequest>,
) -> Response {
    if payload.token.is_none() && payload.topic.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SendNotificationResponse {
                success: false,
                message_id: None,
                error: Some("Either token or topic must be provided".to_string()),
            }),
        )
            .into_response();
    }

    if payload.token.is_some() && payload.topic.is_some() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SendNotificationResponse {
                success: false,
                message_id: None,
                error: Some("Cannot provide both token and topic".to_string()),
            }),
        )
            .into_response();
    }

    let message = FcmMessage {
        message: Message {
            token: payload.token,
            topic: payload.topic,
            notification: Some(Notification {
                title: payload.title,
                body: payload.body,
            }),
            data: payload.data,
        },
    };

    match state.client.send_message(message).await {
        Ok(message_id) => {
            info!("Successfully sent FCM notification: {}", message_id);
            Json(SendNotificationResponse {
                success: true,
                message_id: Some(message_id),
                error: None,
            })
            .into_response()
        }
        Err(err) => {
            error!("Failed to send FCM notification: {:?}", err);
            let status = match &err {
                FcmError::AuthError(_) => StatusCode::UNAUTHORIZED,
                FcmError::CredentialError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                FcmError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                FcmError::RequestError(_) => StatusCode::BAD_REQUEST,
                FcmError::ApiError(_) => StatusCode::BAD_REQUEST,
            };

            (
                status,
                Json(SendNotificationResponse {
                    success: false,
                    message_id: None,
                    error: Some(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}
