// Binary entrypoint for the gitlab-reviewer CLI.

mod cache;
mod cli;
mod config;
mod error;
mod git;
mod gitlab;
mod output;
mod remote;
mod resolve;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GITLAB_REVIEWER_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = cli::Cli::parse();
    let config = config::Config::from_env();

    // Resolution never fails; exhausted fallbacks yield an empty list.
    let members = resolve::resolve_members(&config, cli.refresh).await;

    match output::print_members(&members, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
