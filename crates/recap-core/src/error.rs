use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("not a valid YouTube URL: {url}")]
    InvalidUrl { url: String },

    #[error("no subtitles to clean")]
    EmptySubtitles,

    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("no audio file at {path}")]
    AudioNotFound { path: PathBuf },

    #[error("audio download failed for {url}: {reason}")]
    AudioDownloadFailed { url: String, reason: String },

    #[error("subtitle download failed for {url}: {reason}")]
    SubtitleDownloadFailed { url: String, reason: String },

    #[error("transcription failed for {audio_path}: {reason}")]
    TranscriptionFailed { audio_path: PathBuf, reason: String },

    #[error("language model call failed: {reason}")]
    ModelCallFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;
