// --- File: crates/notifly_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Firebase Cloud Messaging Config ---
// Holds non-secret FCM settings. The service-account key file itself is
// the secret and stays on disk at whatever path is configured here.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FcmConfig {
    /// Google Cloud project id that messages are sent under.
    pub project_id: Option<String>,
    /// Path to the service-account key file, e.g. "config/firebase_key.json".
    /// Loaded via NOTIFLY_FCM__CREDENTIALS_PATH or from the config file.
    pub credentials_path: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_fcm: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub fcm: Option<FcmConfig>,
}
