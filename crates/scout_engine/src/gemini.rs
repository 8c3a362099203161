use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use scout_core::{JobQuery, ParsedResumeData, SearchResult};
use scout_logging::{scout_debug, scout_info};
use serde::Deserialize;

use crate::encode::EncodedAttachment;
use crate::prompts::{analysis_schema, search_prompt, ANALYSIS_INSTRUCTIONS};
use crate::wire::{
    ApiErrorEnvelope, GenerateRequest, GenerateResponse, GenerationConfig, GoogleSearch,
    InlineData, RequestContent, RequestPart, Tool,
};
use crate::{FailureKind, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Result text used when the search answer carries no text at all.
pub const NO_RESULTS_TEXT: &str = "No results found.";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[async_trait::async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, attachment: &EncodedAttachment)
        -> Result<ParsedResumeData, ServiceError>;
}

#[async_trait::async_trait]
pub trait JobSearcher: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<SearchResult, ServiceError>;
}

#[derive(Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    /// `None` lets a hung call wait forever.
    pub request_timeout: Option<Duration>,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Both remote calls, one `generateContent` request each, no retry.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    settings: GeminiSettings,
    today: Option<Clock>,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            http,
            settings,
            today: None,
        })
    }

    /// Supplies the current date for the search prompt's freshness directive.
    pub fn with_today(mut self, today: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.today = Some(Arc::new(today));
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    async fn generate(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, ServiceError> {
        let body = serde_json::to_vec(request)
            .map_err(|err| ServiceError::new(FailureKind::InvalidRequest, err.to_string()))?;

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.settings.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(text);
            return Err(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        serde_json::from_str(&text)
            .map_err(|err| ServiceError::new(FailureKind::MalformedResponse, err.to_string()))
    }
}

/// The analysis JSON exactly as declared in the output schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisPayload {
    job_name: String,
    experience_years: String,
    skills: String,
    certifications: String,
    ats_score: f64,
    ats_recommendations: Vec<String>,
}

impl AnalysisPayload {
    fn into_resume(self) -> Result<ParsedResumeData, ServiceError> {
        if !self.ats_score.is_finite() || !(0.0..=100.0).contains(&self.ats_score) {
            return Err(ServiceError::new(
                FailureKind::SchemaViolation,
                format!("atsScore {} outside 0..=100", self.ats_score),
            ));
        }
        Ok(ParsedResumeData {
            job_name: self.job_name,
            experience_years: self.experience_years,
            skills: self.skills,
            certifications: self.certifications,
            ats_score: Some(self.ats_score.round() as u8),
            ats_recommendations: self.ats_recommendations,
        })
    }
}

#[async_trait::async_trait]
impl ResumeAnalyzer for GeminiClient {
    async fn analyze(
        &self,
        attachment: &EncodedAttachment,
    ) -> Result<ParsedResumeData, ServiceError> {
        let request = GenerateRequest {
            contents: vec![RequestContent::user(vec![
                RequestPart::Inline {
                    inline_data: InlineData {
                        mime_type: attachment.media_type.mime(),
                        data: &attachment.data,
                    },
                },
                RequestPart::Text {
                    text: ANALYSIS_INSTRUCTIONS,
                },
            ])],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: analysis_schema(),
            }),
            tools: Vec::new(),
        };

        scout_info!(
            "Analyzing resume mime={} encoded_len={}",
            attachment.media_type.mime(),
            attachment.data.len()
        );
        let response = self.generate(&request).await?;
        let text = response
            .text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ServiceError::new(FailureKind::EmptyResponse, "no analysis text"))?;

        let payload: AnalysisPayload = serde_json::from_str(&text)
            .map_err(|err| ServiceError::new(FailureKind::SchemaViolation, err.to_string()))?;
        payload.into_resume()
    }
}

#[async_trait::async_trait]
impl JobSearcher for GeminiClient {
    async fn search(&self, query: &JobQuery) -> Result<SearchResult, ServiceError> {
        let today = self.today.as_ref().map(|today| today());
        let prompt = search_prompt(query, today.as_deref());
        let request = GenerateRequest {
            contents: vec![RequestContent::user(vec![RequestPart::Text { text: &prompt }])],
            generation_config: None,
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        scout_info!(
            "Searching jobs location={:?} interests={:?}",
            query.location,
            query.interests
        );
        let response = self.generate(&request).await?;
        let sources = response.sources();
        let text = response
            .text()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| NO_RESULTS_TEXT.to_string());
        scout_debug!(
            "Search answered text_len={} sources={}",
            text.len(),
            sources.len()
        );

        Ok(SearchResult { text, sources })
    }
}
