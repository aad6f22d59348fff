use clap::{Parser, Subcommand};

use crate::cli::{convert::ConvertCommand, rev::RevCommand};

mod convert;
mod rev;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Command {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each value in base 16 and base 11 (the default)
    Convert(ConvertCommand),
    /// Reverse a whitespace separated integer sequence
    Rev(RevCommand),
}

pub async fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    tracing::debug!("Starting cli");

    match cli.command {
        Some(Commands::Convert(cmd)) => cmd.execute().await,
        Some(Commands::Rev(cmd)) => cmd.execute().await,
        None => ConvertCommand {}.execute().await,
    }
}
