use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
};

use stt_application::{RecognizeAudioRequest, RecognizeAudioResponse};

use crate::error::{error_mapper, HttpError};
use crate::state::AppState;

const AUDIO_FIELD: &str = "audio";
const LANGUAGE_FIELD: &str = "language";

pub async fn recognize_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RecognizeAudioResponse>, HttpError> {
    // A body that is not a multipart form carries no audio field.
    let multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection, "recognize request is not a multipart form");
        HttpError::MissingAudio
    })?;
    let request = read_form(multipart).await?;

    tracing::info!(
        audio_bytes = request.audio.as_ref().map_or(0, Vec::len),
        language = request.language.as_deref().unwrap_or("default"),
        "received recognize request"
    );

    match state.recognize.recognize(request).await {
        Ok(response) => {
            tracing::info!(
                code = response.code,
                segment_count = response.data.as_ref().map_or(0, |data| data.text.len()),
                "recognize request completed"
            );
            Ok(Json(response))
        }
        Err(error) if error.is_validation() => {
            tracing::warn!(error = %error, "recognize request rejected");
            Err(error_mapper(error))
        }
        Err(error) => {
            tracing::error!(error = %error, "recognize request failed");
            Err(error_mapper(error))
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<RecognizeAudioRequest, HttpError> {
    let mut request = RecognizeAudioRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(unreadable)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(AUDIO_FIELD) => {
                request.audio = Some(field.bytes().await.map_err(unreadable)?.to_vec());
            }
            Some(LANGUAGE_FIELD) => {
                let language = field.text().await.map_err(unreadable)?;
                // Blank form values count as not sent.
                request.language = Some(language).filter(|value| !value.is_empty());
            }
            _ => {}
        }
    }

    Ok(request)
}

fn unreadable(error: axum::extract::multipart::MultipartError) -> HttpError {
    tracing::warn!(error = %error, "cannot read multipart body");
    HttpError::UnreadableBody
}
