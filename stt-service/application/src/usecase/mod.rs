mod recognize;

pub use recognize::{RecognizeAudioUseCase, RecognizeAudioUseCaseImpl};
