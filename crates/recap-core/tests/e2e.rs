//! End-to-end tests against real external tools. These need network access,
//! yt-dlp and whisper on PATH, and a running Ollama server, so they are
//! ignored by default:
//!
//!     cargo test -p recap-core --test e2e -- --ignored

use recap_core::{
    OllamaClient, Pipeline, TranscriptSource, WhisperModel, clean_subtitles, download_audio,
    download_subtitles, transcribe_audio,
};

// "Me at the zoo", 19 seconds, has auto-generated captions
const TEST_URL: &str = "https://www.youtube.com/watch?v=jNQXAC9IVRw";

#[tokio::test]
#[ignore = "requires network and yt-dlp"]
async fn caption_download_produces_cleanable_text() {
    let raw = download_subtitles(TEST_URL).await.unwrap();
    let cleaned = clean_subtitles(&raw).unwrap();

    assert!(!cleaned.is_empty());
    assert!(!cleaned.contains("-->"));
}

#[tokio::test]
#[ignore = "requires network, yt-dlp and whisper"]
async fn audio_download_and_transcription_round_trip() {
    let download = download_audio(TEST_URL).await.unwrap();
    assert!(download.audio_path().is_file());

    let transcript = transcribe_audio(download.audio_path(), WhisperModel::Tiny)
        .await
        .unwrap();
    assert!(!transcript.is_empty());
}

#[tokio::test]
#[ignore = "requires network, yt-dlp and a running Ollama server"]
async fn full_caption_pipeline_returns_summary_and_transcript() {
    let llm = OllamaClient::with_defaults().unwrap();
    let pipeline = Pipeline::new(llm);

    let output = pipeline
        .run(TEST_URL, TranscriptSource::Captions)
        .await
        .unwrap();

    assert!(!output.summary.is_empty());
    assert!(!output.transcript.is_empty());
}
