use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{RecapError, Result};

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?(?:youtube\.com/|youtu\.be/)[\w-]+").unwrap()
});

/// Check that a URL points at YouTube before handing it to yt-dlp.
pub fn validate_youtube_url(url: &str) -> Result<()> {
    if YOUTUBE_URL.is_match(url) {
        Ok(())
    } else {
        Err(RecapError::InvalidUrl {
            url: url.to_string(),
        })
    }
}

/// A downloaded audio stream together with the temporary directory holding
/// it. Dropping this value removes the directory, on success and on error
/// alike.
pub struct AudioDownload {
    dir: TempDir,
    audio_path: PathBuf,
}

impl AudioDownload {
    pub fn audio_path(&self) -> &Path {
        &self.audio_path
    }

    /// Persist the temporary directory instead of removing it on drop and
    /// return the audio file path.
    pub fn keep(self) -> PathBuf {
        let _ = self.dir.keep();
        self.audio_path
    }
}

/// Download the best available audio-only stream as `.m4a` using yt-dlp.
pub async fn download_audio(url: &str) -> Result<AudioDownload> {
    validate_youtube_url(url)?;

    let dir = TempDir::new()?;
    let output_template = dir.path().join("audio.%(ext)s");

    info!(%url, "downloading audio stream");

    let output = Command::new("yt-dlp")
        .arg(url)
        .arg("--print")
        .arg("after_move:filepath")
        .arg("-f")
        .arg("m4a/bestaudio/best")
        .arg("--extract-audio")
        .arg("--audio-format")
        .arg("m4a")
        .arg("--no-playlist")
        .arg("-o")
        .arg(&output_template)
        .output()
        .await?;

    if !output.status.success() {
        return Err(RecapError::AudioDownloadFailed {
            url: url.to_string(),
            reason: stderr_reason(&output.stderr),
        });
    }

    let stdout_str = String::from_utf8_lossy(output.stdout.as_slice());
    let audio_path = PathBuf::from(stdout_str.trim());

    if !audio_path.is_file() {
        return Err(RecapError::AudioDownloadFailed {
            url: url.to_string(),
            reason: format!("yt-dlp reported no output file at {}", audio_path.display()),
        });
    }

    debug!(path = %audio_path.display(), "audio downloaded");

    Ok(AudioDownload { dir, audio_path })
}

/// Download the auto-generated captions for a video and return the raw VTT
/// text. The temporary download directory is removed before returning.
pub async fn download_subtitles(url: &str) -> Result<String> {
    validate_youtube_url(url)?;

    let dir = TempDir::new()?;
    let output_template = dir.path().join("captions");

    info!(%url, "downloading auto-generated captions");

    let output = Command::new("yt-dlp")
        .arg(url)
        .arg("--skip-download")
        .arg("--write-auto-sub")
        .arg("--sub-format")
        .arg("vtt")
        .arg("-o")
        .arg(&output_template)
        .output()
        .await?;

    if !output.status.success() {
        return Err(RecapError::SubtitleDownloadFailed {
            url: url.to_string(),
            reason: stderr_reason(&output.stderr),
        });
    }

    // yt-dlp appends the language and extension to the output template
    let vtt_path =
        find_vtt_file(dir.path())?.ok_or_else(|| RecapError::SubtitleDownloadFailed {
            url: url.to_string(),
            reason: "no caption file produced (video may have no auto-generated captions)"
                .to_string(),
        })?;

    let subtitles = tokio::fs::read_to_string(&vtt_path).await?;

    debug!(path = %vtt_path.display(), bytes = subtitles.len(), "captions downloaded");

    Ok(subtitles)
}

fn find_vtt_file(dir: &Path) -> Result<Option<PathBuf>> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("vtt") {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

fn stderr_reason(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr).chars().take(1000).collect()
}
