use clk::commands::Cli;
use clk::libs::messages::{macros::is_debug_mode, Message};
use clk::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clk=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    if is_debug_mode() {
        init_tracing();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(e.to_string()));
            ExitCode::FAILURE
        }
    }
}
