pub mod dto;
pub mod error;
pub mod transcript;
pub mod usecase;

pub use dto::*;
pub use error::*;
pub use transcript::all_transcripts_empty;
pub use usecase::{RecognizeAudioUseCase, RecognizeAudioUseCaseImpl};
