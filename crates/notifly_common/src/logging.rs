//! Logging utilities for the Notifly application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Notifly application. It wraps the initialization of the tracing
//! subscriber so every binary configures logging the same way.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
///
/// This function should be called once at the start of the application.
/// Calling it again is harmless: a second initialization attempt is
/// detected and ignored.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// The level applies to the `notifly` crates; other targets are controlled
/// through `RUST_LOG` as usual.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("notifly={}", level).parse().unwrap());

    // Use try_init to handle the case where a global default subscriber
    // has already been set.
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
