use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Languages the reviewer knows how to label.
///
/// Derived deterministically from a file's extension; `Unknown` is the
/// fallback for unmapped or missing extensions. The closed set is part of
/// the prompt contract, so new languages are an additive change here and in
/// [`SupportedLanguage::from_extension`].
///
/// # Examples
///
/// ```
/// use vigil_core::SupportedLanguage;
///
/// assert_eq!(SupportedLanguage::from_filename("src/app.tsx").to_string(), "React TSX");
/// assert_eq!(SupportedLanguage::from_filename("Makefile"), SupportedLanguage::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportedLanguage {
    JavaScript,
    TypeScript,
    #[serde(rename = "React JSX")]
    ReactJsx,
    #[serde(rename = "React TSX")]
    ReactTsx,
    Python,
    Go,
    Rust,
    Java,
    Unknown,
}

impl SupportedLanguage {
    /// Look up a language by file extension, with or without the leading dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigil_core::SupportedLanguage;
    ///
    /// assert_eq!(SupportedLanguage::from_extension("rs"), SupportedLanguage::Rust);
    /// assert_eq!(SupportedLanguage::from_extension(".PY"), SupportedLanguage::Python);
    /// assert_eq!(SupportedLanguage::from_extension("zig"), SupportedLanguage::Unknown);
    /// ```
    pub fn from_extension(extension: &str) -> Self {
        match extension
            .trim_start_matches('.')
            .to_ascii_lowercase()
            .as_str()
        {
            "js" => SupportedLanguage::JavaScript,
            "ts" => SupportedLanguage::TypeScript,
            "jsx" => SupportedLanguage::ReactJsx,
            "tsx" => SupportedLanguage::ReactTsx,
            "py" => SupportedLanguage::Python,
            "go" => SupportedLanguage::Go,
            "rs" => SupportedLanguage::Rust,
            "java" => SupportedLanguage::Java,
            _ => SupportedLanguage::Unknown,
        }
    }

    /// Detect the language of `filename` from its extension.
    ///
    /// Blank input and paths whose final segment carries no extension
    /// resolve to `Unknown`; detection never fails.
    pub fn from_filename(filename: &str) -> Self {
        let trimmed = filename.trim();
        if trimmed.is_empty() {
            return SupportedLanguage::Unknown;
        }
        match Path::new(trimmed).extension().and_then(|ext| ext.to_str()) {
            Some(extension) => Self::from_extension(extension),
            None => SupportedLanguage::Unknown,
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SupportedLanguage::JavaScript => "JavaScript",
            SupportedLanguage::TypeScript => "TypeScript",
            SupportedLanguage::ReactJsx => "React JSX",
            SupportedLanguage::ReactTsx => "React TSX",
            SupportedLanguage::Python => "Python",
            SupportedLanguage::Go => "Go",
            SupportedLanguage::Rust => "Rust",
            SupportedLanguage::Java => "Java",
            SupportedLanguage::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// Value object handed to the AI boundary for one analysis call.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    /// Full text of the file under review.
    pub code: String,
    /// Path the code was read from, as given by the caller.
    pub filename: String,
    /// Language detected from the filename.
    pub language: SupportedLanguage,
}
