use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use stt_domain::{
    AudioEncoding, AudioStagingPort, LanguageCode, RecognitionRequest, SpeechRecognitionPort,
};

use crate::{
    all_transcripts_empty, ApplicationError, RecognizeAudioRequest, RecognizeAudioResponse,
};

#[async_trait]
pub trait RecognizeAudioUseCase: Send + Sync {
    async fn recognize(
        &self,
        request: RecognizeAudioRequest,
    ) -> Result<RecognizeAudioResponse, ApplicationError>;
}

pub struct RecognizeAudioUseCaseImpl {
    staging: Arc<dyn AudioStagingPort>,
    recognition: Arc<dyn SpeechRecognitionPort>,
    recognition_timeout: Duration,
}

impl RecognizeAudioUseCaseImpl {
    pub fn new(
        staging: Arc<dyn AudioStagingPort>,
        recognition: Arc<dyn SpeechRecognitionPort>,
        recognition_timeout: Duration,
    ) -> Self {
        Self {
            staging,
            recognition,
            recognition_timeout,
        }
    }
}

#[async_trait]
impl RecognizeAudioUseCase for RecognizeAudioUseCaseImpl {
    async fn recognize(
        &self,
        request: RecognizeAudioRequest,
    ) -> Result<RecognizeAudioResponse, ApplicationError> {
        let RecognizeAudioRequest { audio, language } = request;

        let audio = audio
            .filter(|bytes| !bytes.is_empty())
            .ok_or(ApplicationError::MissingAudio)?;
        let language = resolve_language(language.as_deref())?;
        let request_id = Uuid::new_v4();

        tracing::debug!(
            request_id = %request_id,
            audio_bytes = audio.len(),
            language = %language,
            "starting speech recognition"
        );

        let staged = self
            .staging
            .stage(audio)
            .await
            .map_err(ApplicationError::Staging)?;

        tracing::debug!(
            request_id = %request_id,
            path = %staged.path().display(),
            size_bytes = staged.size_bytes(),
            "audio staged"
        );

        let recognition = self.recognition.recognize(RecognitionRequest {
            audio: &staged,
            language,
            encoding: AudioEncoding::Linear16,
        });
        let results = tokio::time::timeout(self.recognition_timeout, recognition)
            .await
            .map_err(|_| ApplicationError::RecognitionTimeout(self.recognition_timeout))?
            .map_err(ApplicationError::Recognition)?;
        drop(staged);

        let (text, percentage): (Vec<String>, Vec<f64>) = results
            .iter()
            .map(|result| {
                let segment = result.top_segment();
                (segment.text, segment.confidence)
            })
            .unzip();

        tracing::debug!(
            request_id = %request_id,
            result_count = text.len(),
            "speech recognition completed"
        );

        if all_transcripts_empty(&text) {
            return Ok(RecognizeAudioResponse::no_voice());
        }

        Ok(RecognizeAudioResponse::ok(text, percentage))
    }
}

fn resolve_language(value: Option<&str>) -> Result<LanguageCode, ApplicationError> {
    let Some(language) = value else {
        return Ok(LanguageCode::default());
    };

    language
        .parse::<LanguageCode>()
        .map_err(|unsupported| ApplicationError::UnsupportedLanguage(unsupported.0))
}
