use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Telecare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Telecare/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Telecare")
}

/// Get the path of the clinic database file
pub fn database_path() -> PathBuf {
    app_data_dir().join("telecare.db")
}
