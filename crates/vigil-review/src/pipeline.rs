use std::fmt;
use std::io::IsTerminal;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use vigil_core::{
    create_reviewer_config, AnalysisInput, ReviewerConfig, ReviewerOptions, SupportedLanguage,
};

use crate::fs::{safe_file_exists, safe_read_file};
use crate::llm::{safe_analyze_code, TextGenerator};
use crate::validate::validate_filename;

/// A completed review of a single file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    /// Path the review was requested for, as given by the caller.
    pub filename: String,
    /// Language detected from the filename.
    pub language: SupportedLanguage,
    /// Raw analysis text returned by the model.
    pub analysis: String,
    /// RFC 3339 timestamp of when the result was built.
    pub timestamp: String,
}

impl ReviewResult {
    /// Build a success result stamped with the current time.
    pub fn new(filename: &str, language: SupportedLanguage, analysis: String) -> Self {
        Self {
            filename: filename.to_string(),
            language,
            analysis,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A failed review of a single file.
///
/// Carries only the flat message of whatever error stopped the pipeline;
/// the structured error kind does not survive past this boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewError {
    /// Path the review was requested for.
    pub filename: String,
    /// Human-readable failure message.
    pub error: String,
    /// RFC 3339 timestamp of when the failure was recorded.
    pub timestamp: String,
}

impl ReviewError {
    /// Build a failure result stamped with the current time.
    ///
    /// Accepts anything displayable, so callers can pass a plain message or
    /// an error value directly.
    pub fn new(filename: &str, error: impl fmt::Display) -> Self {
        Self {
            filename: filename.to_string(),
            error: error.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Outcome of one review; the variant is the success discriminant that all
/// consumers branch on.
///
/// JSON output carries an explicit `success: true/false` field alongside
/// the payload.
#[derive(Debug, Clone)]
pub enum ReviewResponse {
    /// The pipeline ran to completion.
    Completed(ReviewResult),
    /// Some step failed; the message explains which.
    Failed(ReviewError),
}

impl ReviewResponse {
    /// Whether the review produced an analysis.
    pub fn is_success(&self) -> bool {
        matches!(self, ReviewResponse::Completed(_))
    }

    /// The filename the review was requested for.
    pub fn filename(&self) -> &str {
        match self {
            ReviewResponse::Completed(result) => &result.filename,
            ReviewResponse::Failed(error) => &error.filename,
        }
    }
}

impl Serialize for ReviewResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReviewResponse::Completed(result) => {
                let mut s = serializer.serialize_struct("ReviewResult", 5)?;
                s.serialize_field("filename", &result.filename)?;
                s.serialize_field("language", &result.language)?;
                s.serialize_field("analysis", &result.analysis)?;
                s.serialize_field("timestamp", &result.timestamp)?;
                s.serialize_field("success", &true)?;
                s.end()
            }
            ReviewResponse::Failed(error) => {
                let mut s = serializer.serialize_struct("ReviewError", 4)?;
                s.serialize_field("filename", &error.filename)?;
                s.serialize_field("error", &error.error)?;
                s.serialize_field("timestamp", &error.timestamp)?;
                s.serialize_field("success", &false)?;
                s.end()
            }
        }
    }
}

impl fmt::Display for ReviewResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewResponse::Failed(e) => {
                write!(f, "❌ Error reviewing {}:\n{}", e.filename, e.error)
            }
            ReviewResponse::Completed(r) => {
                let separator = "=".repeat(60);
                write!(
                    f,
                    "✅ Review complete: {}\n\
                     📌 Code Review Results for {}\n\
                     Language: {}\n\
                     Reviewed: {}\n\
                     \n\
                     {separator}\n\
                     {}\n\
                     {separator}",
                    r.filename, r.filename, r.language, r.timestamp, r.analysis,
                )
            }
        }
    }
}

/// Aggregate shape for reviewing many files in one run.
///
/// Data shape only: no executor builds this today. It is kept as the
/// interface for a future batch mode.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReviewResult {
    /// Reviews that produced an analysis.
    pub successful: Vec<ReviewResult>,
    /// Reviews that failed.
    pub failed: Vec<ReviewError>,
    /// Total number of files attempted.
    pub total: usize,
    /// Fraction of files reviewed successfully.
    pub success_rate: f64,
}

/// Run the full review pipeline for one file.
///
/// Each step is awaited strictly in order and the chain stops at the first
/// failure: validate the filename, check existence, read the content,
/// detect the language (infallible), then analyze via the AI boundary.
/// Only the failing error's message survives into the returned
/// [`ReviewError`].
pub async fn review_file<G: TextGenerator>(
    generator: &G,
    config: &ReviewerConfig,
    filename: &str,
) -> ReviewResponse {
    if let Err(e) = validate_filename(filename) {
        return ReviewResponse::Failed(ReviewError::new(filename, e.message()));
    }

    match safe_file_exists(filename).await {
        Ok(true) => {}
        Ok(false) => {
            return ReviewResponse::Failed(ReviewError::new(
                filename,
                format!("File not found: {filename}"),
            ));
        }
        Err(e) => return ReviewResponse::Failed(ReviewError::new(filename, e.message())),
    }

    let code = match safe_read_file(filename).await {
        Ok(code) => code,
        Err(e) => return ReviewResponse::Failed(ReviewError::new(filename, e.message())),
    };

    // Detection always resolves; unmapped extensions review as Unknown.
    let language = SupportedLanguage::from_filename(filename);

    let input = AnalysisInput {
        code,
        filename: filename.to_string(),
        language,
    };
    match safe_analyze_code(generator, config, &input).await {
        Ok(analysis) => ReviewResponse::Completed(ReviewResult::new(filename, language, analysis)),
        Err(e) => ReviewResponse::Failed(ReviewError::new(filename, e.message())),
    }
}

/// Usage text printed when no filename was given.
pub const USAGE: &str = "Usage: vigil --filename <path> [--preset <name>]\n\
Examples:\n  vigil --filename src/utils.rs\n  vigil --preset performance --filename src/utils.rs";

/// Resolve the preset, run the review, and display the outcome.
///
/// The formatted result is always printed as a side effect; the return
/// value carries the response for the caller's exit-status decision. A
/// spinner is shown on a TTY while the review is in flight.
///
/// # Errors
///
/// Returns the usage text when `filename` is absent, a fixed message when
/// it is empty, and the review's failure message otherwise.
pub async fn process_review<G: TextGenerator>(
    generator: &G,
    preset: &str,
    filename: Option<&str>,
    options: &ReviewerOptions,
) -> Result<ReviewResponse, String> {
    let Some(filename) = filename else {
        println!("{USAGE}");
        return Err(USAGE.to_string());
    };
    if filename.is_empty() {
        return Err("Invalid filename provided".to_string());
    }

    let config = create_reviewer_config(preset, options);

    let spinner = if std::io::stderr().is_terminal() {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})").unwrap(),
        );
        pb.set_message(format!("Reviewing {filename} with {}...", config.model));
        pb.enable_steady_tick(std::time::Duration::from_millis(120));
        Some(pb)
    } else {
        None
    };

    let response = review_file(generator, &config, filename).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    println!("{response}");

    match &response {
        ReviewResponse::Completed(_) => Ok(response),
        ReviewResponse::Failed(e) => Err(e.error.clone()),
    }
}
