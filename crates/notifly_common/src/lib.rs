// --- File: crates/notifly_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export service abstractions for easier access
pub use services::{BoxFuture, NotificationResult, PushNotificationService};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
