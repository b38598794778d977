mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use cw_server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Server { debug, clear_after } => {
            logging::init(*debug);
            cw_server::run(ServerConfig {
                port: cli.port,
                password: cli.password.clone(),
                clear_after_secs: *clear_after,
            })
            .await
        }
        Command::Copy { clipboard } => {
            logging::init(false);
            commands::copy(&cli, clipboard.clone()).await
        }
        Command::Paste => {
            logging::init(false);
            commands::paste(&cli).await
        }
    }
}
