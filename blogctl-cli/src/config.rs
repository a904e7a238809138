//! Environment loading
//!
//! Priority order (highest to lowest):
//! 1. Variables already set in the environment
//! 2. `./.env`
//! 3. `~/.blogctl/.env`
//!
//! dotenvy never overwrites a variable that is already set.

use std::path::PathBuf;

/// Load `.env` files. Missing or unreadable files are not an error.
///
/// Runs before tracing is initialized, so outcomes are kept and logged
/// later by `log_loaded`.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = global_env_file() {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// Report which `.env` files were applied.
pub fn log_loaded(loaded: &[PathBuf]) {
    if loaded.is_empty() {
        tracing::info!("Using environment variables only (no .env file found)");
    } else {
        let paths: Vec<String> = loaded.iter().map(|p| p.display().to_string()).collect();
        tracing::info!("Loaded configuration from: {}", paths.join(", "));
    }
}

/// `~/.blogctl/.env`
pub fn global_env_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".blogctl").join(".env"))
}
