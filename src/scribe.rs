use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{env, fmt, time::Duration};
use tracing::warn;

use crate::models::Role;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_CHAT_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.8;
const DEFAULT_MAX_OUTPUT_TOKENS: u16 = 120;
const DEFAULT_TIMEOUT_SECS: u64 = 15;

const SYSTEM_PROMPT: &str = "You are the royal scribe of a playful household kingdom. \
    Write in archaic but accessible royal language and keep every note to two sentences.";

/// Generates the carrier-pigeon love notes. Lives for the whole session:
/// when credentials are absent at startup the scribe stays in fallback mode
/// and every request gets deterministic flavor text instead.
pub struct Scribe {
    mode: ScribeMode,
}

enum ScribeMode {
    Live(LiveClient),
    Fallback,
}

impl Scribe {
    pub fn from_env() -> Self {
        match ScribeConfig::from_env() {
            Ok(config) => match LiveClient::new(config) {
                Ok(client) => Self {
                    mode: ScribeMode::Live(client),
                },
                Err(err) => {
                    warn!("scribe running in fallback mode ({err})");
                    Self {
                        mode: ScribeMode::Fallback,
                    }
                }
            },
            Err(ScribeError::MissingApiKey) => {
                warn!("OPENAI_API_KEY not set; royal messages will use fallback text");
                Self {
                    mode: ScribeMode::Fallback,
                }
            }
            Err(err) => {
                warn!("scribe configuration failed ({err}); using fallback text");
                Self {
                    mode: ScribeMode::Fallback,
                }
            }
        }
    }

    /// One request, no retry. Any failure falls back immediately to a fixed
    /// note addressed to the recipient; the caller never sees an error.
    pub async fn royal_message(&self, sender: Role) -> String {
        let recipient = sender.other();
        match &self.mode {
            ScribeMode::Fallback => scribes_on_break(recipient),
            ScribeMode::Live(client) => match client.send(sender, recipient).await {
                Ok(text) => text,
                Err(err) => {
                    warn!("royal message generation failed: {err}");
                    pigeon_lost(recipient)
                }
            },
        }
    }
}

fn scribes_on_break(recipient: Role) -> String {
    format!(
        "Dearest {}, my love for you is vast, but the royal scribes are currently on break.",
        recipient.display_name()
    )
}

fn pigeon_lost(recipient: Role) -> String {
    format!(
        "My Dearest {}, the carrier pigeon seems to have lost its way, but know that you rule my heart.",
        recipient.display_name()
    )
}

#[derive(Debug, Clone)]
struct ScribeConfig {
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u16,
    temperature: f32,
    timeout: Duration,
}

impl ScribeConfig {
    fn from_env() -> Result<Self, ScribeError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ScribeError::MissingApiKey)
            .and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(ScribeError::MissingApiKey)
                } else {
                    Ok(trimmed.to_string())
                }
            })?;

        let base_url = env::var("OPENAI_BASE_URL")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("OPENAI_MODEL")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout = env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let max_output_tokens = env::var("OPENAI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);

        let temperature = env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|value| value.parse::<f32>().ok())
            .filter(|value| *value >= 0.0)
            .unwrap_or(DEFAULT_TEMPERATURE);

        Ok(Self {
            api_key,
            base_url,
            model,
            max_output_tokens,
            temperature,
            timeout,
        })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            DEFAULT_CHAT_PATH
        )
    }
}

#[derive(Debug)]
enum ScribeError {
    MissingApiKey,
    ClientBuild(String),
    Provider(String),
    EmptyCompletion,
}

impl fmt::Display for ScribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "missing OPENAI_API_KEY"),
            Self::ClientBuild(message) => write!(f, "client build failure: {message}"),
            Self::Provider(message) => write!(f, "provider failure: {message}"),
            Self::EmptyCompletion => write!(f, "provider returned an empty completion"),
        }
    }
}

struct LiveClient {
    http: Client,
    config: ScribeConfig,
}

impl LiveClient {
    fn new(config: ScribeConfig) -> Result<Self, ScribeError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ScribeError::ClientBuild(err.to_string()))?;

        Ok(Self { http, config })
    }

    async fn send(&self, sender: Role, recipient: Role) -> Result<String, ScribeError> {
        let payload = ChatCompletionRequest {
            model: self.config.model.as_str(),
            messages: build_messages(sender, recipient),
            max_tokens: Some(self.config.max_output_tokens.into()),
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(self.config.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ScribeError::Provider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.json::<ApiErrorResponse>().await {
                return Err(ScribeError::Provider(format!(
                    "{} (type: {}, code: {:?})",
                    body.error.message, body.error.error_type, body.error.code
                )));
            }

            return Err(ScribeError::Provider(format!("HTTP {status} from provider")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ScribeError::Provider(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ScribeError::EmptyCompletion)
    }
}

fn build_messages(sender: Role, recipient: Role) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system",
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user",
            content: build_user_prompt(sender, recipient),
        },
    ]
}

fn build_user_prompt(sender: Role, recipient: Role) -> String {
    format!(
        "Write a very short, witty, and extremely royal 2-sentence love note from a {sender} to a {recipient}. \
         It should be encouraging regarding their daily duties or ruling the kingdom. \
         Mention things like decrees, dragons, gold, or the castle."
    )
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(rename = "max_tokens")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
    code: Option<String>,
}
