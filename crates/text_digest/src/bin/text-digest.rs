use std::{
    io::{self, BufRead, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use text_digest::{
    openai::OpenAIClient, text::ensure_not_empty, tracing::init_tracing_subscriber,
    ChunkedSummarizer, ChunkedSummarizerBuilder, LengthBounds, SummaryResult,
};

#[derive(Parser)]
#[command(name = "text-digest", about = "Summarize long text with a length-limited model")]
struct Cli {
    /// API key for the OpenAI-compatible endpoint
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: String,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, env = "OPENAI_BASE_URL", default_value = OpenAIClient::DEFAULT_BASE_URL)]
    base_url: String,

    /// Model used for summarization
    #[arg(long, env = "SUMMARIZER_MODEL")]
    model: Option<String>,

    /// Maximum summary length in words
    #[arg(long, env = "SUMMARY_MAX_LENGTH", default_value = "130")]
    max_length: usize,

    /// Minimum summary length in words
    #[arg(long, env = "SUMMARY_MIN_LENGTH", default_value = "30")]
    min_length: usize,

    /// Chunks summarized at once
    #[arg(long, env = "CHUNK_CONCURRENCY", default_value = "1")]
    concurrency: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a file, a bundled sample or stdin, then exit
    Run {
        /// File to summarize; stdin when omitted
        #[arg(long, conflicts_with = "sample")]
        input: Option<PathBuf>,

        /// Bundled sample text
        #[arg(long, value_enum)]
        sample: Option<Sample>,
    },
    /// Summarize paragraphs typed at the prompt until EOF
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sample {
    Ai,
    Climate,
    Tech,
}

impl Sample {
    fn text(self) -> &'static str {
        match self {
            Sample::Ai => include_str!("./samples/ai.txt"),
            Sample::Climate => include_str!("./samples/climate.txt"),
            Sample::Tech => include_str!("./samples/tech.txt"),
        }
    }
}

struct Config {
    bounds: LengthBounds,
    format: OutputFormat,
}

fn print_result(result: &SummaryResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            println!("{}", "=".repeat(60));
            println!("Original length: {} words", result.original_word_count);
            println!("{}", "-".repeat(40));
            println!("{}", result.summary);
            println!("{}", "-".repeat(40));
            println!("Summary length:  {} words", result.summary_word_count);
            println!(
                "Processing time: {:.2}s",
                result.processing_time().as_secs_f64()
            );
            println!("{}", "=".repeat(60));
        }
    }
    Ok(())
}

async fn run_once(
    processor: &ChunkedSummarizer<OpenAIClient>,
    config: &Config,
    input: Option<PathBuf>,
    sample: Option<Sample>,
) -> anyhow::Result<()> {
    let text = match (input, sample) {
        (_, Some(sample)) => sample.text().to_string(),
        (Some(path), None) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let text = ensure_not_empty(&text)?;
    let result = processor.summarize(text, config.bounds).await;
    print_result(&result, config.format)?;

    if result.is_error() {
        anyhow::bail!("Summarization failed");
    }
    Ok(())
}

async fn run_interactive(
    processor: &ChunkedSummarizer<OpenAIClient>,
    config: &Config,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\nEnter your text (press Enter twice to finish, Ctrl-D to exit):");

        let mut paragraph = Vec::new();
        let mut eof = true;
        for line in lines.by_ref() {
            let line = line.context("Failed to read stdin")?;
            if line.trim().is_empty() {
                eof = false;
                break;
            }
            paragraph.push(line);
        }

        let text = paragraph.join(" ");
        match ensure_not_empty(&text) {
            Ok(text) => {
                let result = processor.summarize(text, config.bounds).await;
                print_result(&result, config.format)?;
            }
            Err(e) if !eof => println!("{e}. Please try again."),
            Err(_) => {}
        }

        if eof {
            return Ok(());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let mut client = OpenAIClient::new(&cli.api_key).with_base_url(&cli.base_url);
    if let Some(model) = cli.model {
        client = client.with_model(model);
    }
    tracing::info!(model = client.model(), "Summarizer ready");

    let processor = ChunkedSummarizerBuilder::new()
        .summarizer(client)
        .concurrency(cli.concurrency)
        .build();

    let config = Config {
        bounds: LengthBounds::new(cli.max_length, cli.min_length),
        format: cli.format,
    };

    match cli.command {
        Command::Run { input, sample } => run_once(&processor, &config, input, sample).await?,
        Command::Interactive => run_interactive(&processor, &config).await?,
    }

    Ok(())
}
