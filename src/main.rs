use std::error::Error as _;

use clap::Parser;
use namenest::adapter::inbound::cli::{self, command::Cli, output};
use tracing::debug;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::configure_output(&cli);

    if let Err(e) = cli::run(&cli).await {
        debug!(error = %e, kind = ?e.kind(), "Command failed");
        output::error(&e.user_message());
        if output::verbosity() > 0 {
            let mut source = e.source();
            while let Some(cause) = source {
                output::error(&format!("caused by: {cause}"));
                source = cause.source();
            }
        }
        std::process::exit(1);
    }
}
