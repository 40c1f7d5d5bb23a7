pub mod paths;
pub mod settings;

pub use paths::PathManager;
pub use settings::{
    AdminSettings, BrowseSettings, CatalogSettings, ConfigError, ServerSettings, Settings,
    StoreCredentials, StoreSettings, WritePolicySetting,
};

/// Load environment variables from .env files.
/// Loads ./.env (project directory) first, then ~/.env (home directory).
/// dotenv never overwrites a variable that is already set, so the process
/// environment wins over the project file, which wins over the home file.
/// Call this before parsing CLI args to ensure env vars are available.
pub fn load_env_file() {
    dotenv::dotenv().ok();

    if let Some(home) = dirs::home_dir() {
        dotenv::from_path(home.join(".env")).ok();
    }
}
