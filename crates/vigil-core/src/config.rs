use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Named review preset bundling a model, token budget, and focus.
///
/// Resolution is lenient: unknown names fall back to [`Preset::Quick`], so
/// preset lookup never fails.
///
/// # Examples
///
/// ```
/// use vigil_core::Preset;
///
/// assert_eq!(Preset::from_name("security"), Preset::Security);
/// assert_eq!(Preset::from_name("nonexistent"), Preset::Quick);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Fast pass with a small model.
    Quick,
    /// Full analysis including architecture.
    Thorough,
    /// Vulnerabilities and input validation.
    Security,
    /// Performance and scalability.
    Performance,
}

impl Preset {
    /// Resolve a preset by name, defaulting to `Quick` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "thorough" => Preset::Thorough,
            "security" => Preset::Security,
            "performance" => Preset::Performance,
            _ => Preset::Quick,
        }
    }

    /// The preset's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Quick => "quick",
            Preset::Thorough => "thorough",
            Preset::Security => "security",
            Preset::Performance => "performance",
        }
    }

    /// The fixed (model, token budget, focus) row for this preset.
    pub fn config(self) -> ReviewerConfig {
        match self {
            Preset::Quick => ReviewerConfig {
                model: "gpt-4o-mini".into(),
                max_tokens: 1000,
                focus: "bugs and obvious issues".into(),
            },
            Preset::Thorough => ReviewerConfig {
                model: "gpt-4o".into(),
                max_tokens: 3000,
                focus: "comprehensive analysis including architecture".into(),
            },
            Preset::Security => ReviewerConfig {
                model: "gpt-4o".into(),
                max_tokens: 2000,
                focus: "security vulnerabilities and input validation".into(),
            },
            Preset::Performance => ReviewerConfig {
                model: "gpt-4o".into(),
                max_tokens: 2000,
                focus: "performance and scalability".into(),
            },
        }
    }
}

/// Settings for one review call: which model, how many tokens, what to
/// emphasize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerConfig {
    /// Model identifier sent to the text-generation endpoint.
    pub model: String,
    /// Response token budget.
    pub max_tokens: u32,
    /// Short phrase steering the review prompt's emphasis.
    pub focus: String,
}

/// Caller-supplied overrides applied on top of a preset.
#[derive(Debug, Clone, Default)]
pub struct ReviewerOptions {
    /// Replacement model identifier.
    pub model: Option<String>,
    /// Replacement token budget.
    pub max_tokens: Option<u32>,
    /// Replacement review focus.
    pub focus: Option<String>,
}

/// Look up the preset table by name; unknown names get the `quick` row.
///
/// # Examples
///
/// ```
/// use vigil_core::get_config;
///
/// let config = get_config("performance");
/// assert_eq!(config.model, "gpt-4o");
/// assert_eq!(config.max_tokens, 2000);
/// assert_eq!(config.focus, "performance and scalability");
/// ```
pub fn get_config(preset: &str) -> ReviewerConfig {
    Preset::from_name(preset).config()
}

/// Resolve a preset and apply overrides field by field.
///
/// An override wins when it is present and non-empty. A `max_tokens`
/// override of zero is treated as unset and falls back to the preset
/// budget.
///
/// # Examples
///
/// ```
/// use vigil_core::{create_reviewer_config, ReviewerOptions};
///
/// let options = ReviewerOptions { max_tokens: Some(123), ..Default::default() };
/// let config = create_reviewer_config("quick", &options);
/// assert_eq!(config.model, "gpt-4o-mini");
/// assert_eq!(config.max_tokens, 123);
/// assert_eq!(config.focus, "bugs and obvious issues");
/// ```
pub fn create_reviewer_config(preset: &str, options: &ReviewerOptions) -> ReviewerConfig {
    let base = get_config(preset);
    ReviewerConfig {
        model: match &options.model {
            Some(model) if !model.is_empty() => model.clone(),
            _ => base.model,
        },
        max_tokens: match options.max_tokens {
            Some(tokens) if tokens > 0 => tokens,
            _ => base.max_tokens,
        },
        focus: match &options.focus {
            Some(focus) if !focus.is_empty() => focus.clone(),
            _ => base.focus,
        },
    }
}

/// Top-level configuration loaded from `.vigil.toml`.
///
/// # Examples
///
/// ```
/// use vigil_core::VigilConfig;
///
/// let config = VigilConfig::from_toml("").unwrap();
/// assert!(config.llm.api_key.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VigilConfig {
    /// Endpoint settings for the text-generation provider.
    #[serde(default)]
    pub llm: LlmSettings,
}

impl VigilConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::File`] if the file cannot be read, or
    /// [`AppError::Validation`] if the content is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::File(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if parsing fails.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|e| AppError::Validation(format!("invalid config: {e}")))
    }
}

/// Connection settings for the OpenAI-compatible endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmSettings {
    /// API key for the provider.
    pub api_key: Option<String>,
    /// Custom base URL for API requests.
    pub base_url: Option<String>,
}

impl LlmSettings {
    /// The API key from config, or the `OPENAI_API_KEY` environment
    /// variable as a fallback.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}
