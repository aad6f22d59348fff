use crate::factor;
use crate::models::RadixError;

/// Digit alphabet for bases up to 36, the digit value indexes the table.
pub(crate) const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const MIN_BASE: u32 = 2;
pub(crate) const MAX_BASE: u32 = DIGITS.len() as u32;

/// Renders `value` in `base`, most significant digit first, `"0"` for zero.
///
/// Bases that are a power of two larger than 2 convert by slicing the bit
/// string into exponent-wide groups instead of dividing; both paths produce
/// identical output for every input.
pub(crate) fn to_base(value: u64, base: u32) -> Result<String, RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::UnsupportedBase { base });
    }

    if value == 0 {
        return Ok("0".to_string());
    }

    match factor::common_root(2, base) {
        Some((_, _, bits_per_digit)) if bits_per_digit > 1 => {
            Ok(grouped_bits(value, bits_per_digit))
        }
        _ => Ok(divide_out(value, base)),
    }
}

fn grouped_bits(mut value: u64, bits_per_digit: u32) -> String {
    let mask = (1u64 << bits_per_digit) - 1;
    let mut output = Vec::with_capacity(64); // 64 binary digits at most

    while value > 0 {
        output.push(DIGITS[(value & mask) as usize]);
        value >>= bits_per_digit;
    }

    output.reverse();
    String::from_utf8(output).unwrap()
}

fn divide_out(mut value: u64, base: u32) -> String {
    let base = u64::from(base);
    let mut output = Vec::with_capacity(64);

    while value > 0 {
        output.push(DIGITS[(value % base) as usize]);
        value /= base;
    }

    output.reverse();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
pub(crate) mod test {
    use crate::convert::{DIGITS, divide_out, grouped_bits, to_base};
    use crate::factor::base_root;
    use crate::models::RadixError;

    #[test]
    fn zero_is_a_single_digit_in_every_base() -> anyhow::Result<()> {
        for base in 2..=36 {
            pretty_assertions::assert_eq!("0", to_base(0, base)?);
        }

        Ok(())
    }

    #[test]
    fn converts_known_values() -> anyhow::Result<()> {
        assert_eq!("4EF", to_base(1263, 16)?);
        assert_eq!("A49", to_base(1263, 11)?);
        assert_eq!("F4240", to_base(1_000_000, 16)?);
        assert_eq!("623351", to_base(1_000_000, 11)?);
        assert_eq!("64", to_base(100, 16)?);
        assert_eq!("91", to_base(100, 11)?);
        assert_eq!("FF", to_base(255, 16)?);
        assert_eq!("AA", to_base(170, 16)?);
        assert_eq!("11111111", to_base(255, 2)?);
        assert_eq!("77", to_base(63, 8)?);
        assert_eq!("777", to_base(511, 8)?);
        assert_eq!("33", to_base(15, 4)?);
        assert_eq!("3333", to_base(255, 4)?);
        assert_eq!("Z", to_base(35, 36)?);

        Ok(())
    }

    #[test]
    fn rejects_bases_outside_the_alphabet() {
        for base in [0, 1, 37, 100] {
            assert_eq!(Err(RadixError::UnsupportedBase { base }), to_base(1, base));
        }
    }

    #[test]
    fn grouped_path_matches_division() {
        for base in [4u32, 8, 16, 32] {
            let (root, exponent) = base_root(base);
            assert_eq!(2, root);

            for value in (1..=4096).chain([65_535, 1_000_000, u64::from(u32::MAX), u64::MAX]) {
                pretty_assertions::assert_eq!(
                    divide_out(value, base),
                    grouped_bits(value, exponent),
                    "paths disagree for value {value} in base {base}"
                );
            }
        }
    }

    #[test]
    fn round_trips_through_digit_accumulation() -> anyhow::Result<()> {
        for base in 2..=36u32 {
            for value in [0u64, 1, 9, 10, 35, 36, 255, 1263, 1_000_000, u64::from(u32::MAX)] {
                let rendered = to_base(value, base)?;

                let mut parsed = 0u64;
                for byte in rendered.bytes() {
                    let digit = DIGITS.iter().position(|&d| d == byte).unwrap() as u64;
                    assert!(digit < u64::from(base));
                    parsed = parsed * u64::from(base) + digit;
                }

                assert_eq!(value, parsed, "round trip failed in base {base}");
            }
        }

        Ok(())
    }

    #[test]
    fn never_emits_a_leading_zero() -> anyhow::Result<()> {
        for base in 2..=36 {
            for value in 1..=1000u64 {
                let rendered = to_base(value, base)?;
                assert!(!rendered.starts_with('0'), "{value} in base {base}");
            }
        }

        Ok(())
    }
}
