use clap::Parser;
use tokio::io::AsyncWriteExt;

use crate::{batch, input};

#[derive(Parser)]
pub struct ConvertCommand {}

impl ConvertCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let buffer = input::read_stdin().await?;

        let output = batch::convert_batch(&buffer)?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(output.as_bytes()).await?;
        if !output.is_empty() {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;

        Ok(())
    }
}
