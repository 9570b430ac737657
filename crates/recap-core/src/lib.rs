//! Recap Core Library
//!
//! Core functionality for fetching a YouTube video's captions or audio,
//! transcribing with Whisper, and producing a cleaned transcript plus an
//! AI-generated summary via a local Ollama server.

pub mod download;
pub mod error;
pub mod llm;
pub mod ollama;
pub mod pipeline;
pub mod prompts;
pub mod subtitles;
pub mod transcribe;

// Re-export commonly used items at crate root
pub use download::{AudioDownload, download_audio, download_subtitles, validate_youtube_url};
pub use error::{RecapError, Result};
pub use llm::{LanguageModel, format_transcript, summarize_transcript};
pub use ollama::{OllamaClient, OllamaConfig};
pub use pipeline::{Pipeline, PipelineOutput, TranscriptSource};
pub use subtitles::clean_subtitles;
pub use transcribe::{WhisperModel, transcribe_audio};
