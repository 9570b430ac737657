use async_trait::async_trait;

use crate::error::{RecapError, Result};
use crate::prompts::{FORMAT_PROMPT, SUMMARIZE_PROMPT};

/// A single-shot chat interface to a language model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send one prompt and return the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Reflow a transcript into Markdown paragraphs without changing its
/// wording. Returns the model's response verbatim.
pub async fn format_transcript<M>(model: &M, transcript: &str) -> Result<String>
where
    M: LanguageModel + ?Sized,
{
    if transcript.is_empty() {
        return Err(RecapError::EmptyTranscript);
    }

    model.complete(&format!("{FORMAT_PROMPT}{transcript}")).await
}

/// Produce a structured Markdown summary of a transcript. Returns the
/// model's response verbatim.
pub async fn summarize_transcript<M>(model: &M, transcript: &str) -> Result<String>
where
    M: LanguageModel + ?Sized,
{
    if transcript.is_empty() {
        return Err(RecapError::EmptyTranscript);
    }

    model
        .complete(&format!("{SUMMARIZE_PROMPT}{transcript}"))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes the full prompt back as the response.
    struct EchoModel;

    #[async_trait]
    impl LanguageModel for EchoModel {
        async fn complete(&self, prompt: &str) -> Result<String> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn format_rejects_empty_transcript() {
        let result = format_transcript(&EchoModel, "").await;
        assert!(matches!(result, Err(RecapError::EmptyTranscript)));
    }

    #[tokio::test]
    async fn summarize_rejects_empty_transcript() {
        let result = summarize_transcript(&EchoModel, "").await;
        assert!(matches!(result, Err(RecapError::EmptyTranscript)));
    }

    #[tokio::test]
    async fn format_prompt_carries_the_transcript() {
        let response = format_transcript(&EchoModel, "hello world").await.unwrap();
        assert!(response.starts_with(FORMAT_PROMPT));
        assert!(response.ends_with("hello world"));
    }

    #[tokio::test]
    async fn summarize_prompt_carries_the_transcript() {
        let response = summarize_transcript(&EchoModel, "hello world").await.unwrap();
        assert!(response.starts_with(SUMMARIZE_PROMPT));
        assert!(response.ends_with("hello world"));
    }
}
