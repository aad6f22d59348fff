use crate::models::RadixError;
use crate::parse::parse_tokens;

/// Reverses a whitespace separated integer sequence, normalizing the
/// separators to single spaces. Every token is validated before anything is
/// rendered, so a bad token never produces partial output.
pub(crate) fn reverse_tokens(input: &str) -> Result<String, RadixError> {
    let mut values = parse_tokens(input)?;
    values.reverse();

    let rendered = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>();

    Ok(rendered.join(" "))
}
