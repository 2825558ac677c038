use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use vigil_core::{ReviewerOptions, VigilConfig};
use vigil_review::llm::LlmClient;
use vigil_review::pipeline;

#[derive(Parser)]
#[command(
    name = "vigil",
    version,
    about = "AI code review for a single source file",
    long_about = "Vigil reads a source file, detects its language from the extension, and\n\
                   asks an LLM for structured review feedback.\n\n\
                   Presets vary the model, token budget, and review focus:\n  \
                     quick        gpt-4o-mini, bugs and obvious issues (default)\n  \
                     thorough     gpt-4o, comprehensive analysis including architecture\n  \
                     security     gpt-4o, security vulnerabilities and input validation\n  \
                     performance  gpt-4o, performance and scalability\n\n\
                   The API key is read from OPENAI_API_KEY or from .vigil.toml under [llm].\n\n\
                   Examples:\n  \
                     vigil src/utils.rs\n  \
                     vigil --preset security --filename src/auth.rs\n  \
                     vigil src/cache.rs --preset performance --max-tokens 1500"
)]
struct Cli {
    /// File to review
    file: Option<PathBuf>,

    /// File to review (alternative to the positional argument)
    #[arg(short = 'f', long)]
    filename: Option<PathBuf>,

    /// Review preset: quick, thorough, security, or performance
    #[arg(short = 'p', long, default_value = "quick")]
    preset: String,

    /// Path to configuration file (default: .vigil.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the preset model
    #[arg(long)]
    model: Option<String>,

    /// Override the preset token budget
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Override the preset review focus
    #[arg(long)]
    focus: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VigilConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = std::path::Path::new(".vigil.toml");
            if default_path.exists() {
                VigilConfig::from_file(default_path).into_diagnostic()?
            } else {
                VigilConfig::default()
            }
        }
    };

    let filename = cli
        .filename
        .as_ref()
        .or(cli.file.as_ref())
        .map(|path| path.to_string_lossy().into_owned());

    if let Some(name) = &filename {
        println!("🔍 Reviewing {name}...");
    }

    let options = ReviewerOptions {
        model: cli.model.clone(),
        max_tokens: cli.max_tokens,
        focus: cli.focus.clone(),
    };

    let client = LlmClient::new(&config.llm).into_diagnostic()?;

    let outcome =
        pipeline::process_review(&client, &cli.preset, filename.as_deref(), &options).await;
    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
