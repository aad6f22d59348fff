use clap::Parser;
use tokio::io::AsyncWriteExt;

use crate::{input, reverse};

#[derive(Parser)]
pub struct RevCommand {}

impl RevCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let buffer = input::read_stdin().await?;

        let output = reverse::reverse_tokens(&buffer)?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(output.as_bytes()).await?;
        if !output.is_empty() {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;

        Ok(())
    }
}
