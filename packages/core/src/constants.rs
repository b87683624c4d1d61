use std::env;
use std::path::PathBuf;

/// Get the path to the Trygo directory (~/.trygo)
pub fn trygo_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".trygo")
    } else {
        // Fall back to dirs crate for normal usage
        dirs::home_dir()
            .expect("Unable to get home directory")
            .join(".trygo")
    }
}

/// Get the path to the SQLite database file (~/.trygo/trygo.db)
pub fn database_file() -> PathBuf {
    trygo_dir().join("trygo.db")
}
