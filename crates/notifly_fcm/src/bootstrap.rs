//! Process-wide FCM client initialization.
//!
//! The client itself is plain dependency-injected state; this module only
//! guards the "construct it once per process" startup step. The cell
//! serializes concurrent first-time callers, so exactly one client is ever
//! constructed no matter how initialization is raced.

use crate::client::FcmClient;
use crate::error::FcmError;
use notifly_config::FcmConfig;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

static CLIENT: OnceCell<Arc<FcmClient>> = OnceCell::const_new();

/// Initializes the process-wide FCM client.
///
/// The first call constructs the client from `config`; subsequent calls are
/// no-ops that return the already-initialized handle and ignore their
/// argument.
///
/// # Errors
///
/// Construction failures (missing or malformed credential file, missing
/// configuration) are returned to the caller. A failed attempt does not
/// poison the cell; the next call retries initialization.
pub async fn init(config: FcmConfig) -> Result<Arc<FcmClient>, FcmError> {
    let client = CLIENT
        .get_or_try_init(|| async {
            let client = FcmClient::connect(config).await?;
            info!("FCM client initialized");
            Ok::<_, FcmError>(Arc::new(client))
        })
        .await?;
    Ok(client.clone())
}

/// Returns the process-wide client if [`init`] has completed.
pub fn get() -> Option<Arc<FcmClient>> {
    CLIENT.get().cloned()
}
