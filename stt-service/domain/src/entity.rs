use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language codes accepted by the recognize endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageCode {
    #[default]
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::FrFr,
        LanguageCode::EnUs,
        LanguageCode::EnGb,
        LanguageCode::DeDe,
        LanguageCode::EsEs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::FrFr => "fr-FR",
            LanguageCode::EnUs => "en-US",
            LanguageCode::EnGb => "en-GB",
            LanguageCode::DeDe => "de-DE",
            LanguageCode::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    // Exact, case-sensitive match.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str() == value)
            .ok_or_else(|| UnsupportedLanguage(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioEncoding {
    #[default]
    #[serde(rename = "LINEAR16")]
    Linear16,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
        }
    }
}

/// Audio bytes written to transient storage for the duration of one request.
///
/// The guard owns the underlying storage; dropping the handle releases it.
pub struct StagedAudioFile {
    path: PathBuf,
    size_bytes: u64,
    _guard: Box<dyn Any + Send + Sync>,
}

impl StagedAudioFile {
    pub fn new(path: PathBuf, size_bytes: u64, guard: Box<dyn Any + Send + Sync>) -> Self {
        Self {
            path,
            size_bytes,
            _guard: guard,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

impl fmt::Debug for StagedAudioFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedAudioFile")
            .field("path", &self.path)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: Option<f64>,
}

/// One oracle result, alternatives ordered best first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub alternatives: Vec<RecognitionAlternative>,
}

impl RecognitionResult {
    pub fn top_segment(&self) -> TranscriptSegment {
        match self.alternatives.first() {
            Some(alternative) => TranscriptSegment {
                text: alternative.transcript.clone(),
                confidence: alternative.confidence.unwrap_or(0.0),
            },
            None => TranscriptSegment {
                text: String::new(),
                confidence: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug)]
pub struct RecognitionRequest<'a> {
    pub audio: &'a StagedAudioFile,
    pub language: LanguageCode,
    pub encoding: AudioEncoding,
}
