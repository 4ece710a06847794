use std::path::PathBuf;

use clap::Parser;
use summary_ltx::{
    DEFAULT_BASE_URL, DEFAULT_DESCRIPTION, DEFAULT_OUTPUT_PATH, DEFAULT_SUMMARY_PATH, DEFAULT_TITLE, GeneratorOptions,
    LlmsTxt, generate,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "summary-llmstxt")]
#[command(about = "Generates an llms.txt link index from a GitBook SUMMARY.md", long_about = None)]
struct SummaryCli {
    /// The SUMMARY.md file to read.
    #[arg(short, long, env = "SUMMARY_PATH", default_value = DEFAULT_SUMMARY_PATH)]
    summary: PathBuf,

    /// Output file path for the generated llms.txt (overwritten).
    #[arg(short, long, env = "LLMS_TXT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Documentation site root that relative links are resolved against.
    #[arg(short, long, env = "DOCS_BASE_URL", default_value = DEFAULT_BASE_URL, value_parser = validate_base_url)]
    base_url: String,

    /// Title line of the generated llms.txt.
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Description line of the generated llms.txt.
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    description: String,

    /// How many characters of the result to preview. 0 disables the preview.
    #[arg(long, default_value_t = 500)]
    preview_chars: usize,

    /// Debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn validate_base_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.trim_end_matches('/').to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

/// Logs go to stderr; stdout only carries the run report.
fn setup_logging(verbose: bool) {
    let default_log_settings = if verbose { "summary_ltx=debug" } else { "summary_ltx=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_settings.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init()
}

fn print_report(llms_txt: &LlmsTxt, options: &GeneratorOptions, preview_chars: usize) {
    println!("Found {} sections", llms_txt.section_count());
    println!("llms.txt generated successfully at: {}", options.output_path.display());

    if preview_chars > 0 {
        let rule = "─".repeat(50);
        println!();
        println!("Preview (first {} characters):", preview_chars);
        println!("{}", rule);
        println!("{}...", llms_txt.preview(preview_chars));
        println!("{}", rule);
    }

    println!();
    println!("Total size: {} characters", llms_txt.char_count());
}

fn main() {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    let cli = SummaryCli::parse();
    setup_logging(cli.verbose);

    let options = GeneratorOptions::builder()
        .base_url(cli.base_url)
        .summary_path(cli.summary)
        .output_path(cli.output)
        .title(cli.title)
        .description(cli.description)
        .build();

    tracing::info!("Generating llms.txt (base URL: {})", options.base_url);

    match generate(&options) {
        Ok(llms_txt) => print_report(&llms_txt, &options, cli.preview_chars),
        Err(e) => {
            tracing::error!("Error generating llms.txt: {}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(1)
        }
    }
}
