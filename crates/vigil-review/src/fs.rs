use vigil_core::AppError;

/// Check whether `filename` exists on disk.
///
/// A merely missing path is `Ok(false)`; only genuine I/O faults (for
/// example a permission error on a parent directory) become errors.
///
/// # Errors
///
/// Returns [`AppError::File`] when the underlying check fails.
pub async fn safe_file_exists(filename: &str) -> Result<bool, AppError> {
    tokio::fs::try_exists(filename)
        .await
        .map_err(|e| AppError::File(format!("Failed to check file existence: {e}")))
}

/// Read `filename` as UTF-8 text.
///
/// # Errors
///
/// Returns [`AppError::File`] when the file is missing, unreadable, or not
/// valid UTF-8.
pub async fn safe_read_file(filename: &str) -> Result<String, AppError> {
    tokio::fs::read_to_string(filename)
        .await
        .map_err(|e| AppError::File(format!("Failed to read {filename}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn existing_file_reports_true() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "content").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(safe_file_exists(&path).await, Ok(true));
    }

    #[tokio::test]
    async fn missing_file_reports_false_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.rs").to_string_lossy().into_owned();
        assert_eq!(safe_file_exists(&path).await, Ok(false));
    }

    #[tokio::test]
    async fn read_returns_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(safe_read_file(&path).await.unwrap(), "fn main() {}");
    }

    #[tokio::test]
    async fn read_of_missing_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.rs").to_string_lossy().into_owned();
        let err = safe_read_file(&path).await.unwrap_err();
        assert_eq!(err.kind(), "FileError");
        assert!(err.message().starts_with(&format!("Failed to read {path}")));
    }
}
