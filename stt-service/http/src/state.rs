use std::sync::Arc;

use stt_application::RecognizeAudioUseCase;

#[derive(Clone)]
pub struct AppState {
    pub recognize: Arc<dyn RecognizeAudioUseCase>,
}

impl AppState {
    pub fn new(recognize: Arc<dyn RecognizeAudioUseCase>) -> Self {
        Self { recognize }
    }
}
