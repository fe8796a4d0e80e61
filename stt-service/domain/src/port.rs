use async_trait::async_trait;

use crate::{DomainError, RecognitionRequest, RecognitionResult, StagedAudioFile};

#[async_trait]
pub trait SpeechRecognitionPort: Send + Sync {
    async fn recognize(
        &self,
        request: RecognitionRequest<'_>,
    ) -> Result<Vec<RecognitionResult>, DomainError>;
}

#[async_trait]
pub trait AudioStagingPort: Send + Sync {
    async fn stage(&self, audio: Vec<u8>) -> Result<StagedAudioFile, DomainError>;
}
