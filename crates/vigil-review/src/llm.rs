use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use vigil_core::{AnalysisInput, AppError, LlmSettings, ReviewerConfig};

use crate::prompt::create_analysis_prompt;

/// One request to the text-generation collaborator.
///
/// # Examples
///
/// ```
/// use vigil_review::llm::GenerationRequest;
///
/// let request = GenerationRequest {
///     model: "gpt-4o-mini".into(),
///     prompt: "Review this".into(),
///     max_tokens: 1000,
/// };
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["maxTokens"], 1000);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Model identifier.
    pub model: String,
    /// Full prompt text.
    pub prompt: String,
    /// Response token budget.
    pub max_tokens: u32,
}

/// The seam to the external text-generation service.
///
/// [`LlmClient`] is the production implementation; tests substitute
/// recording fakes so the pipeline runs without network access.
pub trait TextGenerator {
    /// Generate text for `request`, returning the model's raw output.
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, AppError>>;
}

/// OpenAI-compatible chat completions client.
///
/// Works with any provider that exposes the `/v1/chat/completions`
/// endpoint: OpenAI, Ollama, vLLM, LiteLLM, etc.
///
/// # Examples
///
/// ```
/// use vigil_core::LlmSettings;
/// use vigil_review::llm::LlmClient;
///
/// let client = LlmClient::new(&LlmSettings::default()).unwrap();
/// ```
pub struct LlmClient {
    client: reqwest::Client,
    settings: LlmSettings,
}

impl LlmClient {
    /// Create a new client from endpoint settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Ai`] if the HTTP client cannot be built.
    pub fn new(settings: &LlmSettings) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AppError::Ai(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }
}

impl TextGenerator for LlmClient {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, AppError>> {
        async move {
            let base_url = self
                .settings
                .base_url
                .as_deref()
                .unwrap_or("https://api.openai.com");
            let url = format!("{base_url}/v1/chat/completions");

            let body = serde_json::json!({
                "model": request.model,
                "messages": [{ "role": "user", "content": request.prompt }],
                "max_tokens": request.max_tokens,
            });

            let mut http = self.client.post(&url);
            if let Some(api_key) = self.settings.resolve_api_key() {
                http = http.header("Authorization", format!("Bearer {api_key}"));
            }
            http = http.header("Content-Type", "application/json");

            let response = http
                .json(&body)
                .send()
                .await
                .map_err(|e| AppError::Ai(format!("request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.unwrap_or_default();
                return Err(AppError::Ai(format!("LLM API error {status}: {body_text}")));
            }

            let response_body: serde_json::Value = response
                .json()
                .await
                .map_err(|e| AppError::Ai(format!("failed to parse response: {e}")))?;

            let content = response_body
                .get("choices")
                .and_then(|c| c.get(0))
                .and_then(|c| c.get("message"))
                .and_then(|m| m.get("content"))
                .and_then(|c| c.as_str())
                .ok_or_else(|| {
                    AppError::Ai(format!("unexpected response structure: {response_body}"))
                })?;

            Ok(content.to_string())
        }
    }
}

/// Run one analysis against the AI boundary without letting a fault escape.
///
/// Builds the prompt from `input` and the configured focus, invokes the
/// generator, and converts any failure into
/// `AppError::Ai("AI analysis failed: ...")`. This is the single point of
/// contact with the external AI service.
pub async fn safe_analyze_code<G: TextGenerator>(
    generator: &G,
    config: &ReviewerConfig,
    input: &AnalysisInput,
) -> Result<String, AppError> {
    let prompt = create_analysis_prompt(&input.code, &input.filename, &config.focus, input.language);
    generator
        .generate(GenerationRequest {
            model: config.model.clone(),
            prompt,
            max_tokens: config.max_tokens,
        })
        .await
        .map_err(|e| AppError::Ai(format!("AI analysis failed: {}", e.message())))
}
