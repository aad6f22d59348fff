use crate::models::RadixError;

/// Reads the batch header and values: the first line holds the case count,
/// each following line one non-negative value. Lines past the count are
/// ignored.
pub(crate) fn parse_batch(input: &str) -> anyhow::Result<Vec<u64>> {
    let mut lines = input.lines();

    let Some(header) = lines.next() else {
        anyhow::bail!("missing test case count");
    };

    let count = parse_value(header.trim())? as usize;

    // The header is untrusted, cap the preallocation.
    let mut values = Vec::with_capacity(count.min(1 << 16));
    for index in 0..count {
        let Some(line) = lines.next() else {
            anyhow::bail!("input ended after {index} of {count} values");
        };

        values.push(parse_value(line.trim())?);
    }

    Ok(values)
}

pub(crate) fn parse_value(token: &str) -> Result<u64, RadixError> {
    token.parse().map_err(|_| RadixError::BadToken {
        token: token.to_string(),
    })
}

/// Splits on arbitrary whitespace and parses every token as a signed
/// integer. An explicit `+` sign is accepted and not re-rendered later.
pub(crate) fn parse_tokens(input: &str) -> Result<Vec<i64>, RadixError> {
    input
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| RadixError::BadToken {
                token: token.to_string(),
            })
        })
        .collect()
}
