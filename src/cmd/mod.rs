use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod board;
mod migrate;

#[derive(Parser)]
#[command(about = "job application tracker")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Migrate,
    Board {
        #[command(subcommand)]
        action: board::BoardAction,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Migrate) => {
            migrate::apply().await?;
        }
        Some(SubCommandType::Board { action }) => {
            board::run(action).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
