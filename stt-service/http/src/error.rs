use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stt_application::{ApplicationError, RecognizeAudioResponse};

/// Failures surfaced to clients as an envelope; the transport status stays 200.
#[derive(Debug)]
pub enum HttpError {
    MissingAudio,
    UnreadableBody,
    UnknownLanguage,
    RecognitionFailed,
    RecognitionTimedOut,
    StagingFailed,
}

impl HttpError {
    pub fn envelope(&self) -> RecognizeAudioResponse {
        match self {
            HttpError::MissingAudio => RecognizeAudioResponse::missing_audio(),
            HttpError::UnreadableBody => RecognizeAudioResponse::unreadable_body(),
            HttpError::UnknownLanguage => RecognizeAudioResponse::unknown_language(),
            HttpError::RecognitionFailed => RecognizeAudioResponse::recognition_failed(),
            HttpError::RecognitionTimedOut => RecognizeAudioResponse::recognition_timed_out(),
            HttpError::StagingFailed => RecognizeAudioResponse::staging_failed(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.envelope())).into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::MissingAudio => HttpError::MissingAudio,
        ApplicationError::UnsupportedLanguage(_) => HttpError::UnknownLanguage,
        ApplicationError::Staging(_) => HttpError::StagingFailed,
        ApplicationError::Recognition(_) => HttpError::RecognitionFailed,
        ApplicationError::RecognitionTimeout(_) => HttpError::RecognitionTimedOut,
    }
}
