use anyhow::Context;

use crate::convert;
use crate::parse::parse_batch;

/// Emits the base-16 and base-11 renderings for every value in the batch,
/// one line per value in input order. The output is fully built before the
/// caller writes any of it.
pub(crate) fn convert_batch(input: &str) -> anyhow::Result<String> {
    let values = parse_batch(input).context("parse input")?;

    tracing::debug!("converting {} values", values.len());

    let mut lines = Vec::with_capacity(values.len());
    for value in values {
        let hex = convert::to_base(value, 16)?;
        let undecimal = convert::to_base(value, 11)?;

        lines.push(format!("{hex} {undecimal}"));
    }

    Ok(lines.join("\n"))
}
