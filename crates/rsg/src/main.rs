//! RSG CLI - command-protocol generator

mod cli;
mod terminal;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_BAD_SELECTOR, EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
            // Printing help/usage can only fail on a closed stderr.
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let default_level = if cli.verbose { "rsg=debug" } else { "rsg=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match rsg::generate(&cli.selector, &cli.output, &cli.options()) {
        Ok(artifact) => {
            if cli.verbose {
                terminal::success(&format!("Generated {artifact}"));
                terminal::path_output(&cli.output);
            }
            EXIT_SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "generation failed");
            terminal::error(&err.to_string());
            match err {
                rsg::Error::Artifact(_) => EXIT_BAD_SELECTOR,
                rsg::Error::Spec(_) | rsg::Error::Io(_) => EXIT_FAILURE,
            }
        }
    }
}
