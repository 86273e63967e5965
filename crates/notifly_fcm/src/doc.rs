#![allow(dead_code)]
use utoipa::OpenApi;

use crate::client::{FcmMessage, Message, Notification};
use crate::handlers::{SendNotificationRequest, SendNotificationResponse};

#[utoipa::path(
    post,
    path = "/fcm/send-notification",
    request_body(content = SendNotificationRequest, example = json!({
        "token": "fcm-registration-token-example",
        "title": "New Message",
        "body": "You have received a new message",
        "data": {
            "message_id": "123456"
        }
    })),
    responses(
        (status = 200, description = "Notification sent successfully", body = SendNotificationResponse,
         example = json!({
             "success": true,
             "message_id": "projects/my-project/messages/1234567890",
             "error": null
         })
        ),
        (status = 400, description = "Bad Request",
         example = json!({
             "success": false,
             "message_id": null,
             "error": "Either token or topic must be provided"
         })
        ),
        (status = 401, description = "Unauthorized",
         example = json!({
             "success": false,
             "message_id": null,
             "error": "Authentication error: Failed to obtain access token"
         })
        ),
        (status = 500, description = "Internal Server Error",
         example = json!({
             "success": false,
             "message_id": null,
             "error": "Failed to send notification"
         })
        )
    ),
    tag = "FCM"
)]
fn doc_send_notification_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_send_notification_handler,
    ),
    components(
        schemas(
            SendNotificationRequest,
            SendNotificationResponse,
            FcmMessage,
            Message,
            Notification,
        )
    ),
    tags(
        (name = "FCM", description = "Firebase Cloud Messaging API")
    ),
    servers(
        (url = "/api", description = "Firebase Cloud Messaging API server")
    )
)]
pub struct FcmApiDoc;
