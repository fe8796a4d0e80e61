#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use stt_configuration::AppConfig;
use stt_domain::{
    AudioEncoding, AudioStagingPort, DomainError, LanguageCode, RecognitionAlternative,
    RecognitionRequest, RecognitionResult, SpeechRecognitionPort, StagedAudioFile,
};
use stt_infra_staging::{TempFileStagingAdapter, TempFileStagingConfig};
use stt_setup::Application;

pub const BOUNDARY: &str = "stt-test-boundary";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub language: LanguageCode,
    pub encoding: AudioEncoding,
    pub path: PathBuf,
    pub audio: Vec<u8>,
}

pub enum Reply {
    Results(Vec<RecognitionResult>),
    Failure(DomainError),
    Stall(Duration),
}

pub struct RecordingRecognizer {
    reply: Reply,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRecognizer {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn returning(segments: &[(&str, f64)]) -> Arc<Self> {
        Self::new(Reply::Results(results(segments)))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechRecognitionPort for RecordingRecognizer {
    async fn recognize(
        &self,
        request: RecognitionRequest<'_>,
    ) -> Result<Vec<RecognitionResult>, DomainError> {
        let audio = tokio::fs::read(request.audio.path())
            .await
            .map_err(|err| DomainError::staging_error(&err.to_string()))?;
        self.calls.lock().unwrap().push(RecordedCall {
            language: request.language,
            encoding: request.encoding,
            path: request.audio.path().to_path_buf(),
            audio,
        });

        match &self.reply {
            Reply::Results(results) => Ok(results.clone()),
            Reply::Failure(error) => Err(error.clone()),
            Reply::Stall(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(Vec::new())
            }
        }
    }
}

pub struct FailingStaging;

#[async_trait]
impl AudioStagingPort for FailingStaging {
    async fn stage(&self, _audio: Vec<u8>) -> Result<StagedAudioFile, DomainError> {
        Err(DomainError::staging_error("disk full"))
    }
}

pub fn results(segments: &[(&str, f64)]) -> Vec<RecognitionResult> {
    segments
        .iter()
        .map(|(text, confidence)| RecognitionResult {
            alternatives: vec![RecognitionAlternative {
                transcript: text.to_string(),
                confidence: Some(*confidence),
            }],
        })
        .collect()
}

pub fn router_with(recognizer: Arc<RecordingRecognizer>) -> Router {
    router_with_ports(
        AppConfig::default(),
        Arc::new(TempFileStagingAdapter::new(TempFileStagingConfig::default())),
        recognizer,
    )
}

pub fn router_with_ports(
    config: AppConfig,
    staging: Arc<dyn AudioStagingPort>,
    recognizer: Arc<dyn SpeechRecognitionPort>,
) -> Router {
    Application::with_ports(config, staging, recognizer).router
}

pub enum Part<'a> {
    File(&'a str, &'a [u8]),
    Text(&'a str, &'a str),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File(name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"audio.wav\"\r\nContent-Type: audio/wav\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn recognize_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/recognize")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

/// Sends the request and returns the JSON envelope, asserting transport 200.
pub async fn send(router: Router, request: Request<Body>) -> Value {
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
