//! Gemini service for AI-drafted networking content
//!
//! Provides integration with Gemini for:
//! - Outreach message drafting
//! - Network health analysis
//! - Hiring-manager message drafting
//! - Structured field extraction from free-text job descriptions

use crate::error::{PropelError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Configuration for the Gemini service
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model to use (default: gemini-2.0-flash-exp)
    pub model: String,

    /// Max tokens for responses
    pub max_tokens: usize,

    /// Temperature for sampling
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.0-flash-exp".to_string(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Gemini-backed drafting service
#[derive(Debug)]
pub struct LlmService {
    config: LlmConfig,
    client: reqwest::Client,
}

/// Gemini generateContent request format
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
}

/// Gemini generateContent response format
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Models often wrap JSON answers in a markdown code fence
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

impl LlmService {
    /// Create a new drafting service with custom config
    pub fn new(config: LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(PropelError::NotConfigured(
                "Gemini API key not set".to_string(),
            ));
        }

        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    /// Draft a short networking message to a contact
    pub async fn draft_outreach_message(
        &self,
        contact_name: &str,
        company: &str,
        context: &str,
    ) -> Result<String> {
        debug!("Drafting outreach message for {}", contact_name);

        let prompt = format!(
            r#"You are helping a professional stay in touch with their network.

Draft a short, warm LinkedIn message (under 100 words) to {} who works at {}.

Additional context: {}

Be genuine and specific, not salesy. No subject line, no signature placeholder.
Respond with the message text only."#,
            contact_name, company, context
        );

        self.call_api(&prompt).await
    }

    /// Summarize the health of the user's network
    pub async fn analyze_network(
        &self,
        total_contacts: i64,
        active_contacts: i64,
    ) -> Result<String> {
        debug!("Analyzing network health");

        let prompt = format!(
            r#"You are a networking coach reviewing a professional's contact network.

The network has {} contacts, of which {} had an interaction in the last 90 days.

In 3-4 sentences, assess the health of this network and suggest one concrete
next step. Respond with the analysis text only."#,
            total_contacts, active_contacts
        );

        self.call_api(&prompt).await
    }

    /// Draft a message to a hiring manager about an open role
    pub async fn draft_job_message(
        &self,
        your_background: &str,
        company: &str,
        job_title: &str,
        hiring_manager_name: &str,
        jd_keywords: &str,
    ) -> Result<String> {
        debug!("Drafting hiring-manager message for {} at {}", job_title, company);

        let greeting = if hiring_manager_name.is_empty() {
            "the hiring manager".to_string()
        } else {
            hiring_manager_name.to_string()
        };

        let prompt = format!(
            r#"Draft a concise LinkedIn message (under 120 words) to {} about the {} role at {}.

Candidate background: {}
Keywords from the job description: {}

Lead with genuine interest, tie one piece of the background to the role, and
close with a light ask for a short conversation. Respond with the message text
only."#,
            greeting, job_title, company, your_background, jd_keywords
        );

        self.call_api(&prompt).await
    }

    /// Extract structured job-application fields from free text
    pub async fn extract_application_fields(&self, text: &str) -> Result<serde_json::Value> {
        debug!("Extracting application fields from free text");

        let prompt = format!(
            r#"Extract structured job application fields from the text below.

Text:
{}

Respond with ONLY a JSON object with these keys (use "" when unknown):
"company", "role_title", "link", "status", "contact_name",
"contact_linkedin_url", "notes""#,
            text
        );

        let response = self.call_api(&prompt).await?;

        serde_json::from_str(strip_code_fence(&response))
            .map_err(|e| PropelError::LlmApi(format!("Model did not return valid JSON: {}", e)))
    }

    /// Make an API call to Gemini
    async fn call_api(&self, prompt: &str) -> Result<String> {
        debug!("Calling Gemini API");

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.config.model, self.config.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PropelError::LlmApi(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| PropelError::LlmApi(format!("Failed to parse response: {}", e)))?;

        api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .ok_or_else(|| PropelError::LlmApi("Empty response from API".to_string()))
    }
}
