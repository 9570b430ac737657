use std::fmt;
use std::future::Future;

use tracing::{info, warn};

use crate::download::{download_audio, download_subtitles};
use crate::error::Result;
use crate::llm::{LanguageModel, format_transcript, summarize_transcript};
use crate::subtitles::clean_subtitles;
use crate::transcribe::{WhisperModel, transcribe_audio};

/// Where the transcript text comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranscriptSource {
    /// Host-provided auto-generated captions, with a one-time fallback to
    /// audio transcription if the caption path fails.
    #[default]
    Captions,
    /// Download the audio stream and run speech recognition. No fallback.
    Audio,
}

impl fmt::Display for TranscriptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptSource::Captions => write!(f, "captions"),
            TranscriptSource::Audio => write!(f, "audio"),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Structured Markdown summary.
    pub summary: String,
    /// The transcript reflowed into Markdown paragraphs.
    pub transcript: String,
}

/// One-shot orchestrator: transcript acquisition, then the two concurrent
/// language-model passes.
pub struct Pipeline<M> {
    model: M,
    whisper_model: WhisperModel,
    keep_audio: bool,
}

impl<M: LanguageModel> Pipeline<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            whisper_model: WhisperModel::default(),
            keep_audio: false,
        }
    }

    pub fn with_whisper_model(mut self, whisper_model: WhisperModel) -> Self {
        self.whisper_model = whisper_model;
        self
    }

    /// Retain downloaded audio instead of deleting its temporary directory.
    pub fn keep_audio(mut self, keep: bool) -> Self {
        self.keep_audio = keep;
        self
    }

    /// Run the full pipeline for one URL, producing a summary and a
    /// formatted transcript.
    pub async fn run(&self, url: &str, source: TranscriptSource) -> Result<PipelineOutput> {
        let transcript = self.acquire_transcript(url, source).await?;

        info!(source = %source, chars = transcript.len(), "transcript acquired");

        render_outputs(&self.model, &transcript).await
    }

    async fn acquire_transcript(&self, url: &str, source: TranscriptSource) -> Result<String> {
        match source {
            TranscriptSource::Captions => {
                with_fallback(self.caption_transcript(url), self.audio_transcript(url)).await
            }
            TranscriptSource::Audio => self.audio_transcript(url).await,
        }
    }

    async fn caption_transcript(&self, url: &str) -> Result<String> {
        let raw = download_subtitles(url).await?;
        clean_subtitles(&raw)
    }

    async fn audio_transcript(&self, url: &str) -> Result<String> {
        let download = download_audio(url).await?;
        let transcript = transcribe_audio(download.audio_path(), self.whisper_model).await;

        if self.keep_audio {
            let path = download.keep();
            info!(path = %path.display(), "keeping downloaded audio");
        }

        transcript
    }
}

/// Run the primary transcript path, switching to the fallback path if it
/// fails. The primary error is logged, not surfaced.
async fn with_fallback<T>(
    primary: impl Future<Output = Result<T>>,
    fallback: impl Future<Output = Result<T>>,
) -> Result<T> {
    match primary.await {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(error = %err, "caption path failed, falling back to audio transcription");
            fallback.await
        }
    }
}

/// Run the summarize and format passes concurrently over the same
/// transcript. Both calls finish before either result is inspected; either
/// failure fails the whole run.
async fn render_outputs<M: LanguageModel>(model: &M, transcript: &str) -> Result<PipelineOutput> {
    let (summary, formatted) = tokio::join!(
        summarize_transcript(model, transcript),
        format_transcript(model, transcript),
    );

    Ok(PipelineOutput {
        summary: summary?,
        transcript: formatted?,
    })
}
