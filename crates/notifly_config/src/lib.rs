use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;


/// Loads the application configuration.
///
/// Sources, in order of precedence (later wins):
/// 1. `config/default.*` in the workspace root (optional)
/// 2. `config/{RUN_ENV}.*` in the workspace root (optional)
/// 3. Environment variables with the `NOTIFLY` prefix and `__` separator,
///    e.g. `NOTIFLY_SERVER__HOST` or `NOTIFLY_FCM__CREDENTIALS_PATH`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    // go from crates/notifly_config to the workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    debug!("config: workspace_root: {}", workspace_root.display());
    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            // prefix_separator stays a single underscore so keys read
            // NOTIFLY_SERVER__HOST, not NOTIFLY__SERVER__HOST
            Environment::with_prefix("NOTIFLY")
                .prefix_separator("_")
                .separator("__"),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is loaded at most once per process. The path defaults to
/// `.env` and can be overridden with the `DOTENV_OVERRIDE` environment
/// variable.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path =
        std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
