use vigil_core::AppError;

/// Check that a review target filename is usable.
///
/// Accepts any non-blank string and returns it unchanged; the order of the
/// checks only affects which message the caller sees.
///
/// # Examples
///
/// ```
/// use vigil_review::validate::validate_filename;
///
/// assert_eq!(validate_filename("/a/b.ts").unwrap(), "/a/b.ts");
/// assert!(validate_filename("   ").is_err());
/// ```
pub fn validate_filename(filename: &str) -> Result<&str, AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No filename provided".into()));
    }
    if filename.trim().is_empty() {
        return Err(AppError::Validation("Filename cannot be empty".into()));
    }
    Ok(filename)
}
