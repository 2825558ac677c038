/// Errors that can occur across the review pipeline.
///
/// A closed union of four failure causes. Every fallible function returns
/// this type inside a `Result` instead of panicking; faults from external
/// calls are converted to the matching variant inside the wrapper that
/// issued the call.
///
/// # Examples
///
/// ```
/// use vigil_core::AppError;
///
/// let err = AppError::Validation("No filename provided".into());
/// assert_eq!(err.kind(), "ValidationError");
/// assert!(err.to_string().contains("No filename provided"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Filesystem I/O failure or missing file.
    #[error("file error: {0}")]
    File(String),

    /// Malformed caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure from the text-generation boundary.
    #[error("AI analysis error: {0}")]
    Ai(String),

    /// Transport-level fault. No wired path produces this today; it is part
    /// of the closed union for forward compatibility.
    #[error("network error: {0}")]
    Network(String),
}

impl AppError {
    /// Tag name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::File(_) => "FileError",
            AppError::Validation(_) => "ValidationError",
            AppError::Ai(_) => "AIError",
            AppError::Network(_) => "NetworkError",
        }
    }

    /// The message payload, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::File(msg)
            | AppError::Validation(msg)
            | AppError::Ai(msg)
            | AppError::Network(msg) => msg,
        }
    }
}

/// Render an error as a user-facing banner line.
///
/// The message is embedded verbatim, with no escaping or mutation.
///
/// # Examples
///
/// ```
/// use vigil_core::{format_error, AppError};
///
/// let line = format_error(&AppError::File("disk on fire".into()));
/// assert_eq!(line, "❌ File Error: disk on fire");
/// ```
pub fn format_error(error: &AppError) -> String {
    let prefix = match error {
        AppError::File(_) => "File Error",
        AppError::Validation(_) => "Validation Error",
        AppError::Ai(_) => "AI Analysis Error",
        AppError::Network(_) => "Network Error",
    };
    format!("❌ {prefix}: {}", error.message())
}

/// Write an error to stderr and hand it back unchanged.
///
/// Log-and-pass-through: callers keep propagating the error after logging.
pub fn log_error(error: AppError) -> AppError {
    eprintln!("Error: {} - {}", error.kind(), error.message());
    error
}

/// Write a success message to stdout and hand it back unchanged.
pub fn log_success(message: &str) -> &str {
    println!("✅ {message}");
    message
}
