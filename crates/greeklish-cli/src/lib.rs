pub mod commands;
pub mod trace_init;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Table(#[from] greeklish_core::table::TableError),
    #[error("{0}")]
    Settings(#[from] greeklish_core::settings::SettingsError),
}
