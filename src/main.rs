use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wiki_sections::fetcher::{self, FetchOptions};
use wiki_sections::stopwords::{BuiltinStopwords, Language, StopwordProvider};
use wiki_sections::{parser, report};

#[derive(Parser)]
#[command(
    name = "wiki_sections",
    about = "Scrape frequent words and hyperlinks of Wikipedia url",
    version
)]
struct Cli {
    /// Url to data scrape for (must start with https://en.wikipedia.org)
    url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// HTTP timeout in seconds
    #[arg(long, env = "WIKI_SECTIONS_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// HTTP user agent
    #[arg(long, env = "WIKI_SECTIONS_USER_AGENT")]
    user_agent: Option<String>,

    /// Extra stopwords, one per line
    #[arg(long, value_name = "FILE")]
    extra_stopwords: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let t0 = Instant::now();
    fetcher::validate_url(&cli.url)?;

    let mut provider = BuiltinStopwords::new();
    if let Some(path) = &cli.extra_stopwords {
        provider = provider.with_file(path)?;
    }
    let stopwords = provider.words_for(Language::English);

    let opts = FetchOptions {
        timeout: Duration::from_secs(cli.timeout),
        user_agent: cli.user_agent.unwrap_or_else(fetcher::default_user_agent),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Fetching {}", cli.url));
    pb.enable_steady_tick(Duration::from_millis(100));
    let html = fetcher::fetch_page(&cli.url, &opts).await;
    pb.finish_and_clear();
    let html = html?;

    let result = parser::process_page(&html, &cli.url, &stopwords)
        .with_context(|| format!("Failed to process {}", cli.url))?;
    info!(
        "Extracted {} sections in {:.1}s",
        result.len(),
        t0.elapsed().as_secs_f64()
    );

    match cli.format {
        Format::Text => print!("{}", report::render_text(&result)),
        Format::Json => println!("{}", report::render_json(&result)?),
    }

    Ok(())
}
