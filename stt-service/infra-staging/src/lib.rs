use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use stt_domain::{AudioStagingPort, DomainError, StagedAudioFile};
use tempfile::Builder;

const FILE_PREFIX: &str = "stt-audio-";
const FILE_SUFFIX: &str = ".wav";

#[derive(Debug, Clone, Default)]
pub struct TempFileStagingConfig {
    /// Falls back to the OS temp directory when unset.
    pub directory: Option<PathBuf>,
}

/// Stages uploads as uniquely named temp files removed when the handle drops.
pub struct TempFileStagingAdapter {
    config: TempFileStagingConfig,
}

impl TempFileStagingAdapter {
    pub fn new(config: TempFileStagingConfig) -> Self {
        Self { config }
    }

    fn directory(&self) -> PathBuf {
        self.config
            .directory
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[async_trait]
impl AudioStagingPort for TempFileStagingAdapter {
    async fn stage(&self, audio: Vec<u8>) -> Result<StagedAudioFile, DomainError> {
        let directory = self.directory();
        tokio::task::spawn_blocking(move || write_staged_file(directory, &audio))
            .await
            .map_err(|err| DomainError::internal_error(&format!("staging task failed: {err}")))?
    }
}

fn write_staged_file(directory: PathBuf, audio: &[u8]) -> Result<StagedAudioFile, DomainError> {
    let mut file = Builder::new()
        .prefix(FILE_PREFIX)
        .suffix(FILE_SUFFIX)
        .tempfile_in(&directory)
        .map_err(|err| {
            DomainError::staging_error(&format!(
                "cannot create temp file in {}: {err}",
                directory.display()
            ))
        })?;
    file.write_all(audio)
        .and_then(|_| file.flush())
        .map_err(|err| DomainError::staging_error(&format!("cannot write audio: {err}")))?;

    let temp_path = file.into_temp_path();
    let path = temp_path.to_path_buf();
    tracing::trace!(path = %path.display(), bytes = audio.len(), "staged audio file");

    Ok(StagedAudioFile::new(
        path,
        audio.len() as u64,
        Box::new(temp_path),
    ))
}
