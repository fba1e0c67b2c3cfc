//! snipmd - print part of a web page as Markdown.
//!
//! Usage:
//!   snipmd [OPTIONS] `<url>` `<selector>`   - fetch, select, convert
//!   snipmd --list-tags                    - list tags with a Markdown rule

mod cli;
mod fetch;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Args;
use fetch::Fetcher;
use snipmd::SnipService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout carries only Markdown.
fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

async fn run(args: Args) -> Result<()> {
    if args.list_tags {
        for tag in snipmd::supported_tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let (Some(url), Some(selector)) = (args.url.as_deref(), args.selector.as_deref()) else {
        anyhow::bail!("usage: snipmd <url> <selector>");
    };

    let fetcher = Fetcher::new(&args.user_agent)?;
    let html = fetcher
        .fetch(url)
        .await
        .with_context(|| format!("could not fetch {}", url))?;

    let service = SnipService::with_options(args.convert_options());
    let conversion = service.snip(&html, selector)?;
    if !conversion.diagnostics.is_empty() {
        tracing::info!(
            count = conversion.diagnostics.len(),
            "elements kept as html"
        );
    }

    println!("{}", conversion.markdown);
    Ok(())
}
