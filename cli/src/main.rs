//! `greet` prints a greeting for the given name.
//!
//! With no argument it greets the fallback name, which defaults to
//! `"world"` and can be overridden with `--fallback` or the
//! `GREET_FALLBACK` environment variable.

use std::env;

use anyhow::Result;
use clap::Parser;
use greeter::Greeter;
use tracing::debug;

#[derive(Parser)]
#[command(name = "greet")]
#[command(about = "Print a greeting for the given name")]
struct Args {
    /// Name to greet; greets the fallback name when omitted
    name: Option<String>,

    /// Fallback name used when no name is given (env: GREET_FALLBACK)
    #[arg(long)]
    fallback: Option<String>,
}

/// Resolves the fallback name: flag wins over environment, environment
/// over the library default.
fn resolve_fallback(flag: Option<String>, env_value: Option<String>) -> String {
    flag.or(env_value)
        .unwrap_or_else(|| greeter::DEFAULT_FALLBACK.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let fallback = resolve_fallback(args.fallback, env::var("GREET_FALLBACK").ok());
    let greeter = Greeter::new(fallback);

    let name = args.name.unwrap_or_default();
    debug!(fallback = greeter.fallback(), "greeting");

    println!("{}", greeter.hello(&name));
    Ok(())
}
