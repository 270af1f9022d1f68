use std::env;
use std::path::PathBuf;

/// Name of the SQLite database file inside the prdkit directory
pub const DATABASE_FILE: &str = "prdkit.db";

/// Get the path to the prdkit directory (~/.prdkit)
pub fn prdkit_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".prdkit")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".prdkit")
    }
}

/// Get the default database path (~/.prdkit/prdkit.db)
pub fn default_database_path() -> PathBuf {
    prdkit_dir().join(DATABASE_FILE)
}
