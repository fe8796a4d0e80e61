use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use stt_domain::{
    DomainError, RecognitionAlternative, RecognitionRequest, RecognitionResult,
    SpeechRecognitionPort,
};

const SERVICE_NAME: &str = "google-speech";
const RECOGNIZE_PATH: &str = "/v1/speech:recognize";
const MAX_ERROR_BODY_CHARS: usize = 256;

#[derive(Debug, Clone)]
pub struct GoogleSpeechConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

/// Google Cloud Speech-to-Text v1 synchronous `recognize` over REST.
pub struct GoogleSpeechAdapter {
    client: Client,
    config: GoogleSpeechConfig,
}

impl GoogleSpeechAdapter {
    pub fn new(config: GoogleSpeechConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| DomainError::internal_error(&format!("invalid http client: {err}")))?;
        Ok(Self { client, config })
    }

    fn recognize_url(&self) -> String {
        format!(
            "{}{}",
            self.config.endpoint.trim_end_matches('/'),
            RECOGNIZE_PATH
        )
    }
}

#[async_trait]
impl SpeechRecognitionPort for GoogleSpeechAdapter {
    async fn recognize(
        &self,
        request: RecognitionRequest<'_>,
    ) -> Result<Vec<RecognitionResult>, DomainError> {
        let audio = tokio::fs::read(request.audio.path()).await.map_err(|err| {
            DomainError::staging_error(&format!(
                "cannot read staged audio {}: {err}",
                request.audio.path().display()
            ))
        })?;

        let body = RecognizeBody {
            config: RecognitionConfigBody {
                encoding: request.encoding.as_str(),
                language_code: request.language.as_str(),
            },
            audio: RecognitionAudioBody {
                content: base64::engine::general_purpose::STANDARD.encode(&audio),
            },
        };

        let mut http_request = self.client.post(self.recognize_url()).json(&body);
        if let Some(api_key) = &self.config.api_key {
            http_request = http_request.query(&[("key", api_key)]);
        }
        if let Some(token) = &self.config.access_token {
            http_request = http_request.bearer_auth(token);
        }

        tracing::debug!(
            language = request.language.as_str(),
            encoding = request.encoding.as_str(),
            audio_bytes = audio.len(),
            "sending recognize request"
        );

        let response = http_request.send().await.map_err(|err| {
            DomainError::external_service_error(SERVICE_NAME, &format!("request failed: {err}"))
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DomainError::unauthorized(SERVICE_NAME));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail: String = detail.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(DomainError::external_service_error(
                SERVICE_NAME,
                &format!("HTTP {status}: {detail}"),
            ));
        }

        let reply: RecognizeReply = response.json().await.map_err(|err| {
            DomainError::external_service_error(SERVICE_NAME, &format!("invalid response: {err}"))
        })?;

        tracing::debug!(result_count = reply.results.len(), "recognize response received");

        Ok(reply.results.into_iter().map(RecognitionResult::from).collect())
    }
}

#[derive(Debug, Serialize)]
struct RecognizeBody<'a> {
    config: RecognitionConfigBody<'a>,
    audio: RecognitionAudioBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfigBody<'a> {
    encoding: &'a str,
    language_code: &'a str,
}

#[derive(Debug, Serialize)]
struct RecognitionAudioBody {
    content: String,
}

#[derive(Debug, Default, Deserialize)]
struct RecognizeReply {
    #[serde(default)]
    results: Vec<ReplyResult>,
}

#[derive(Debug, Deserialize)]
struct ReplyResult {
    #[serde(default)]
    alternatives: Vec<ReplyAlternative>,
}

#[derive(Debug, Deserialize)]
struct ReplyAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: Option<f64>,
}

impl From<ReplyResult> for RecognitionResult {
    fn from(result: ReplyResult) -> Self {
        RecognitionResult {
            alternatives: result
                .alternatives
                .into_iter()
                .map(|alternative| RecognitionAlternative {
                    transcript: alternative.transcript,
                    confidence: alternative.confidence,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_without_results_is_empty() {
        let reply: RecognizeReply = serde_json::from_str("{}").expect("parses");
        assert!(reply.results.is_empty());
    }

    #[test]
    fn reply_alternatives_keep_order_and_missing_confidence() {
        let reply: RecognizeReply = serde_json::from_str(
            r#"{"results":[{"alternatives":[{"transcript":"a","confidence":0.5},{"transcript":"b"}]}]}"#,
        )
        .expect("parses");
        let results: Vec<RecognitionResult> =
            reply.results.into_iter().map(RecognitionResult::from).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].alternatives[0].transcript, "a");
        assert_eq!(results[0].alternatives[0].confidence, Some(0.5));
        assert_eq!(results[0].alternatives[1].confidence, None);
    }

    #[test]
    fn recognize_url_tolerates_trailing_slash() {
        let adapter = GoogleSpeechAdapter::new(GoogleSpeechConfig {
            endpoint: "https://speech.googleapis.com/".to_string(),
            api_key: None,
            access_token: None,
            request_timeout: Duration::from_secs(5),
        })
        .expect("client builds");

        assert_eq!(
            adapter.recognize_url(),
            "https://speech.googleapis.com/v1/speech:recognize"
        );
    }
}
