use clap::Parser;
use ec2connect::cli::{Cli, Command};
use ec2connect::connect;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Keep the terminal quiet unless RUST_LOG asks for more.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Connect => connect::run().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_fatal() => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            println!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
