#[cfg(test)]
mod tests {
    use crate::error::FcmError;
    use notifly_common::services::{BoxFuture, NotificationResult, PushNotificationService};
    use std::sync::Arc;

    /// Mock transport that always succeeds.
    struct MockPushService;

    impl PushNotificationService for MockPushService {
        type Error = FcmError;

        fn send_push(
            &self,
            _token: &str,
            _title: &str,
            _body: &str,
        ) -> BoxFuture<'_, NotificationResult, Self::Error> {
            Box::pin(async {
                Ok(NotificationResult {
                    id: "mock-1".to_string(),
                    status: "sent".to_string(),
                })
            })
        }
    }

    /// Mock transport that always fails.
    struct FailingPushService;

    impl PushNotificationService for FailingPushService {
        type Error = FcmError;

        fn send_push(
            &self,
            _token: &str,
            _title: &str,
            _body: &str,
        ) -> BoxFuture<'_, NotificationResult, Self::Error> {
            Box::pin(async { Err(FcmError::ApiError("quota exceeded".to_string())) })
        }
    }

    #[tokio::test]
    async fn test_send_push_through_trait_object() {
        let service: Arc<dyn PushNotificationService<Error = FcmError>> = Arc::new(MockPushService);

        let result = service
            .send_push("tok123", "Hi", "Body")
            .await
            .expect("mock transport should succeed");
        assert_eq!(result.id, "mock-1");
        assert_eq!(result.status, "sent");
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error_value_not_a_panic() {
        let service: Arc<dyn PushNotificationService<Error = FcmError>> =
            Arc::new(FailingPushService);

        let result = service.send_push("tok123", "Hi", "Body").await;
        match result {
            Err(FcmError::ApiError(message)) => assert_eq!(message, "quota exceeded"),
            other => panic!("expected ApiError, got {:?}", other.map(|_| ())),
        }
    }
}
