use anyhow::{Context, Result};
use clap::Parser;
use greeter::emit_greeting;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "greeter",
    version,
    about = "Print a greeting followed by numbered lines tagged even or odd"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr and only when RUST_LOG is set.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    print_first_greeting()?;
    print_second_greeting()?;

    Ok(())
}

fn print_first_greeting() -> Result<()> {
    emit_greeting().context("failed to emit greeting")
}

fn print_second_greeting() -> Result<()> {
    emit_greeting().context("failed to emit greeting")
}
