use serde::{Deserialize, Serialize};

pub const MSG_OK: &str = "OK";
pub const MSG_NO_VOICE: &str = "No voice was heard";
pub const MSG_MISSING_AUDIO: &str = "BAD REQUEST : missing field audio";
pub const MSG_UNREADABLE_BODY: &str = "BAD REQUEST : unreadable multipart body";
// Published to clients as-is, including the "gb-GB" entry.
pub const MSG_UNKNOWN_LANGUAGE: &str =
    "BAD REQUEST : field language unknown must be present in that list: fr-FR ; gb-GB ; en-GB ; de-DE ; es-ES";
pub const MSG_RECOGNITION_FAILED: &str = "SERVICE UNAVAILABLE : speech recognition failed";
pub const MSG_RECOGNITION_TIMEOUT: &str = "GATEWAY TIMEOUT : speech recognition timed out";
pub const MSG_STAGING_FAILED: &str = "INTERNAL ERROR : unable to stage audio";

pub const CODE_OK: u16 = 200;
pub const CODE_NO_VOICE: u16 = 210;
pub const CODE_BAD_REQUEST: u16 = 400;
pub const CODE_UNKNOWN_LANGUAGE: u16 = 500;
pub const CODE_RECOGNITION_FAILED: u16 = 503;
pub const CODE_RECOGNITION_TIMEOUT: u16 = 504;
pub const CODE_STAGING_FAILED: u16 = 507;

#[derive(Debug, Clone, Default)]
pub struct RecognizeAudioRequest {
    pub audio: Option<Vec<u8>>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptData {
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceData {
    pub percentage: Vec<f64>,
}

/// JSON envelope returned for every recognize call.
///
/// `data` and `confidence` are only present on success and always have the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeAudioResponse {
    pub code: u16,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TranscriptData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceData>,
}

impl RecognizeAudioResponse {
    pub fn status(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
            confidence: None,
        }
    }

    pub fn ok(text: Vec<String>, percentage: Vec<f64>) -> Self {
        Self {
            code: CODE_OK,
            msg: MSG_OK.to_string(),
            data: Some(TranscriptData { text }),
            confidence: Some(ConfidenceData { percentage }),
        }
    }

    pub fn no_voice() -> Self {
        Self::status(CODE_NO_VOICE, MSG_NO_VOICE)
    }

    pub fn missing_audio() -> Self {
        Self::status(CODE_BAD_REQUEST, MSG_MISSING_AUDIO)
    }

    pub fn unreadable_body() -> Self {
        Self::status(CODE_BAD_REQUEST, MSG_UNREADABLE_BODY)
    }

    pub fn unknown_language() -> Self {
        Self::status(CODE_UNKNOWN_LANGUAGE, MSG_UNKNOWN_LANGUAGE)
    }

    pub fn recognition_failed() -> Self {
        Self::status(CODE_RECOGNITION_FAILED, MSG_RECOGNITION_FAILED)
    }

    pub fn recognition_timed_out() -> Self {
        Self::status(CODE_RECOGNITION_TIMEOUT, MSG_RECOGNITION_TIMEOUT)
    }

    pub fn staging_failed() -> Self {
        Self::status(CODE_STAGING_FAILED, MSG_STAGING_FAILED)
    }
}
