use std::fmt;
use std::path::Path;

use tokio::{fs, process::Command};
use tracing::{debug, info};

use crate::error::{RecapError, Result};

/// Whisper model sizes, smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhisperModel {
    Tiny,
    Base,
    #[default]
    Small,
    Medium,
    Large,
}

impl WhisperModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhisperModel::Tiny => "tiny",
            WhisperModel::Base => "base",
            WhisperModel::Small => "small",
            WhisperModel::Medium => "medium",
            WhisperModel::Large => "large",
        }
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run speech recognition over a local audio file and return the recognized
/// text. Half-precision arithmetic is disabled.
///
/// The caller keeps ownership of the audio file; cleanup of its containing
/// directory is handled by the [`AudioDownload`](crate::AudioDownload) that
/// produced it.
pub async fn transcribe_audio(audio_path: &Path, model: WhisperModel) -> Result<String> {
    if !audio_path.is_file() {
        return Err(RecapError::AudioNotFound {
            path: audio_path.to_path_buf(),
        });
    }

    let output_dir = audio_path.parent().unwrap_or(Path::new("."));

    info!(path = %audio_path.display(), %model, "transcribing audio");

    let output = Command::new("whisper")
        .arg(audio_path)
        .arg("--model")
        .arg(model.as_str())
        .arg("--fp16")
        .arg("False")
        .arg("--output_format")
        .arg("txt")
        .arg("--output_dir")
        .arg(output_dir)
        .output()
        .await?;

    if !output.status.success() {
        return Err(RecapError::TranscriptionFailed {
            audio_path: audio_path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    // whisper names its output after the input file's stem
    let stem = audio_path.file_stem().unwrap_or(audio_path.as_os_str());
    let transcript_path = output_dir.join(stem).with_extension("txt");
    let transcript = fs::read_to_string(&transcript_path).await?;

    debug!(chars = transcript.len(), "transcription finished");

    Ok(transcript.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_path_is_not_found() {
        let result = transcribe_audio(Path::new("non/existent/file/path.m4a"), WhisperModel::Small)
            .await;
        assert!(matches!(result, Err(RecapError::AudioNotFound { .. })));
    }

    #[tokio::test]
    async fn directory_path_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = transcribe_audio(dir.path(), WhisperModel::Small).await;
        assert!(matches!(result, Err(RecapError::AudioNotFound { .. })));
    }

    #[test]
    fn default_model_is_small() {
        assert_eq!(WhisperModel::default(), WhisperModel::Small);
        assert_eq!(WhisperModel::default().as_str(), "small");
    }
}
