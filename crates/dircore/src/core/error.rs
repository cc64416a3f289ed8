use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the core are converted to this enum for consistent error handling.
/// Uses `thiserror` for automatic error conversion and display formatting.
///
/// # Example
///
/// ```no_run
/// use dircore::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// IO errors (messages carry the path thanks to fs-err)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree description could not be parsed
    #[error("Tree description error: {0}")]
    Description(#[from] serde_json::Error),

    /// A tree description entry name that would escape its folder
    #[error("Invalid entry name: {0:?}")]
    InvalidName(String),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Message delivery failed in a non-Telegram transport
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
