extern crate ai_seo;
extern crate env_logger;

pub mod options;

use ai_seo::tokio;
use ai_seo::website::Website;
use clap::Parser;
use options::{Cli, OutputFormat};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run(Cli::parse()).await
}

/// Analyze the target and print the report. Fails when the page cannot be fetched.
pub async fn run(cli: Cli) -> ExitCode {
    if cli.verbose {
        use env_logger::Env;
        let env = Env::default()
            .filter_or("RUST_LOG", "info")
            .write_style_or("RUST_LOG_STYLE", "always");

        env_logger::init_from_env(env);
    }

    let mut website = Website::new(&cli.url);

    website
        .with_user_agent(cli.agent.as_deref())
        .with_request_timeout(Some(Duration::from_secs(cli.timeout)))
        .with_probe_timeout(Some(Duration::from_secs(cli.probe_timeout)))
        .with_author_markers(cli.author_markers)
        .with_faq_markers(cli.faq_markers);

    if cli.format == OutputFormat::Text {
        println!("\n⏳ Analyzing AI SEO readiness for {}...", website.get_target());
        println!("   Checking signals used by ChatGPT, Perplexity, Copilot & Gemini...");
    }

    let report = match website.analyze().await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("  ❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{e:?}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
