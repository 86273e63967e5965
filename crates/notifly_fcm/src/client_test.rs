#[cfg(test)]
mod tests {
    use crate::auth::TokenProvider;
    use crate::client::FcmClient;
    use crate::error::FcmError;
    use notifly_common::services::BoxFuture;
    use notifly_config::FcmConfig;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Token provider that skips the OAuth2 exchange entirely.
    struct StaticTokenProvider;

    impl TokenProvider for StaticTokenProvider {
        fn access_token(&self) -> BoxFuture<'_, String, FcmError> {
            Box::pin(async { Ok("test-token".to_string()) })
        }
    }

    fn test_client(api_base: &str) -> FcmClient {
        let config = FcmConfig {
            project_id: Some("notifly-test".to_string()),
            credentials_path: None,
        };
        FcmClient::with_token_provider(config, Arc::new(StaticTokenProvider))
            .with_api_base(api_base)
    }

    #[tokio::test]
    async fn test_send_to_token_returns_message_id_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/notifly-test/messages:send"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "projects/notifly-test/messages/123"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let message_id = client
            .send_to_token("tok123", "Hi", "Body")
            .await
            .expect("send should succeed against the mocked endpoint");
        assert_eq!(message_id, "projects/notifly-test/messages/123");
    }

    #[tokio::test]
    async fn test_send_to_token_surfaces_api_errors_without_panicking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/notifly-test/messages:send"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string("The registration token is not valid"),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.send_to_token("bad-token", "Hi", "Body").await;

        match result {
            Err(FcmError::ApiError(message)) => {
                assert!(message.contains("registration token is not valid"));
            }
            other => panic!("expected ApiError, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_payload_contains_token_title_and_body_untransformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/notifly-test/messages:send"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "projects/notifly-test/messages/456"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .send_to_token("tok123", "Hi", "Body")
            .await
            .expect("send should succeed against the mocked endpoint");

        let requests = server
            .received_requests()
            .await
            .expect("request recording is enabled");
        assert_eq!(requests.len(), 1);

        let body: serde_json::Value =
            serde_json::from_slice(&requests[0].body).expect("request body should be JSON");
        assert_eq!(body["message"]["token"], "tok123");
        assert_eq!(body["message"]["notification"]["title"], "Hi");
        assert_eq!(body["message"]["notification"]["body"], "Body");
        // Single-device sends must not carry a topic
        assert!(body["message"].get("topic").is_none());
    }

    #[tokio::test]
    async fn test_send_to_topic_targets_the_topic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/notifly-test/messages:send"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "projects/notifly-test/messages/789"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        client
            .send_to_topic("app_general_alerts", "Hi", "Body")
            .await
            .expect("send should succeed against the mocked endpoint");

        let requests = server
            .received_requests()
            .await
            .expect("request recording is enabled");
        let body: serde_json::Value =
            serde_json::from_slice(&requests[0].body).expect("request body should be JSON");
        assert_eq!(body["message"]["topic"], "app_general_alerts");
        assert!(body["message"].get("token").is_none());
    }

    #[tokio::test]
    async fn test_send_message_requires_project_id() {
        let config = FcmConfig {
            project_id: None,
            credentials_path: None,
        };
        let client = FcmClient::with_token_provider(config, Arc::new(StaticTokenProvider));

        let result = client.send_to_token("tok123", "Hi", "Body").await;
        match result {
            Err(FcmError::ConfigError(message)) => assert!(message.contains("project_id")),
            other => panic!("expected ConfigError, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_connect_fails_fast_when_credential_file_is_missing() {
        let config = FcmConfig {
            project_id: Some("notifly-test".to_string()),
            credentials_path: Some("/nonexistent/firebase_key.json".to_string()),
        };

        match FcmClient::connect(config).await {
            Err(FcmError::CredentialError(message)) => {
                assert!(message.contains("/nonexistent/firebase_key.json"));
            }
            Err(other) => panic!("expected CredentialError, got {:?}", other),
            Ok(_) => panic!("connect should fail without a credential file"),
        }
    }
}
