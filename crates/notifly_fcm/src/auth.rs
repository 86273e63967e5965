//! Authentication for Firebase Cloud Messaging
//!
//! This module provides the `TokenProvider` seam used by the FCM client to
//! obtain OAuth2 access tokens, and the production implementation backed by
//! a Google service-account key. Tests substitute their own provider so no
//! real OAuth2 exchange happens.

use crate::error::FcmError;
use notifly_common::services::BoxFuture;
use std::path::Path;
use yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator, ServiceAccountKey};

/// OAuth2 scope required to call the FCM HTTP v1 API.
const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// A source of OAuth2 bearer tokens for the FCM API.
pub trait TokenProvider: Send + Sync {
    /// Obtain an access token valid for the FCM messaging scope.
    fn access_token(&self) -> BoxFuture<'_, String, FcmError>;
}

/// Reads and parses a service-account key file.
///
/// A missing or malformed file yields `FcmError::CredentialError`, which
/// callers treat as fatal at startup.
pub async fn read_credentials(path: &Path) -> Result<ServiceAccountKey, FcmError> {
    read_service_account_key(path)
        .await
        .map_err(|e| FcmError::CredentialError(format!("{}: {}", path.display(), e)))
}

/// Token provider backed by a Google service-account key.
pub struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
}

impl ServiceAccountTokenProvider {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self { key }
    }
}

impl TokenProvider for ServiceAccountTokenProvider {
    fn access_token(&self) -> BoxFuture<'_, String, FcmError> {
        let key = self.key.clone();
        Box::pin(async move {
            let auth = ServiceAccountAuthenticator::builder(key)
                .build()
                .await
                .map_err(|e| FcmError::AuthError(e.to_string()))?;

            // yup-oauth2 caches tokens internally, so repeated calls only
            // hit Google's token endpoint when the cached token expires.
            let auth_token = auth
                .token(&[FCM_SCOPE])
                .await
                .map_err(|e| FcmError::AuthError(e.to_string()))?;

            match auth_token.token() {
                Some(token) => Ok(token.to_string()),
                None => Err(FcmError::AuthError("no access token available".to_string())),
            }
        })
    }
}
