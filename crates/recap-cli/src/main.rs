use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use recap_core::{OllamaClient, OllamaConfig, Pipeline, TranscriptSource, WhisperModel};

/// CLI wrapper for TranscriptSource (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliSource {
    #[default]
    Captions,
    Audio,
}

impl From<CliSource> for TranscriptSource {
    fn from(cli: CliSource) -> Self {
        match cli {
            CliSource::Captions => TranscriptSource::Captions,
            CliSource::Audio => TranscriptSource::Audio,
        }
    }
}

/// CLI wrapper for WhisperModel (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliWhisperModel {
    Tiny,
    Base,
    #[default]
    Small,
    Medium,
    Large,
}

impl From<CliWhisperModel> for WhisperModel {
    fn from(cli: CliWhisperModel) -> Self {
        match cli {
            CliWhisperModel::Tiny => WhisperModel::Tiny,
            CliWhisperModel::Base => WhisperModel::Base,
            CliWhisperModel::Small => WhisperModel::Small,
            CliWhisperModel::Medium => WhisperModel::Medium,
            CliWhisperModel::Large => WhisperModel::Large,
        }
    }
}

#[derive(Parser)]
#[command(name = "recap")]
#[command(
    about = "Transcribe YouTube videos and generate Markdown summaries with a local LLM"
)]
struct Cli {
    /// Video URL
    url: String,

    /// Where the transcript comes from
    #[arg(short, long, default_value = "captions")]
    source: CliSource,

    /// Whisper model size for the audio-transcription path
    #[arg(short, long, default_value = "small")]
    whisper_model: CliWhisperModel,

    /// Ollama chat model
    #[arg(short, long, default_value = "llama3.1:8b")]
    model: String,

    /// Ollama server base URL
    #[arg(long, default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Directory to write summary.md and transcript.md into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Keep downloaded audio instead of deleting its temporary directory
    #[arg(long)]
    keep_audio: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg} {elapsed}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recap_core=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let llm = OllamaClient::new(OllamaConfig {
        base_url: cli.ollama_url,
        model: cli.model,
        ..OllamaConfig::default()
    })?;

    // Check the Ollama server early, before any downloading
    if let Err(e) = llm.check_connection().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    println!(
        "\n{}  {}\n",
        style("recap").cyan().bold(),
        style("Video Summarizer").dim()
    );

    let source: TranscriptSource = cli.source.into();
    let pipeline = Pipeline::new(llm)
        .with_whisper_model(cli.whisper_model.into())
        .keep_audio(cli.keep_audio);

    let spinner = create_spinner(&format!("Summarizing ({source} source)..."));
    let output = match pipeline.run(&cli.url, source).await {
        Ok(output) => {
            spinner.finish_with_message(format!(
                "{} Video summarized",
                style("✓").green().bold()
            ));
            output
        }
        Err(e) => {
            spinner.finish_with_message(format!("{} Pipeline failed", style("✗").red().bold()));
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    fs::create_dir_all(&cli.output_dir).await?;
    let summary_path = cli.output_dir.join("summary.md");
    let transcript_path = cli.output_dir.join("transcript.md");
    fs::write(&summary_path, &output.summary).await?;
    fs::write(&transcript_path, &output.transcript).await?;

    println!(
        "\n{} {}",
        style("Saved:").dim(),
        style(summary_path.display()).cyan()
    );
    println!(
        "{} {}\n",
        style("Saved:").dim(),
        style(transcript_path.display()).cyan()
    );
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", output.summary);

    Ok(())
}
