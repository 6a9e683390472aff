//! Command line front-end: checks the process arguments against a fixed schema and logs the
//! outcome.

use std::process::ExitCode;

use argschema::{ParsedArgs, Usage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A single boolean flag, `-l`.
const SCHEMA: &str = "l";

fn run<'a>(argv: &'a [&'a str]) -> Result<ParsedArgs<'a, 1>, argschema::Error<'a>> {
    argschema::parse(SCHEMA, argv)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "argschema_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    tracing::debug!(?argv, "parsing arguments");

    match run(&argv) {
        Ok(args) => {
            if args.boolean('l') {
                tracing::info!("bool on");
            } else {
                tracing::info!("bool off");
            }

            ExitCode::SUCCESS
        }

        Err(err) => {
            tracing::error!(%err, usage = %Usage::new(SCHEMA), "could not parse args");
            ExitCode::FAILURE
        }
    }
}
