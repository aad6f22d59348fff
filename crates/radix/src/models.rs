use std::fmt::Display;

/// Everything the two transforms can reject. Anything not covered here
/// surfaces as a plain anyhow error and exits 1.
#[derive(Clone, PartialEq, Debug)]
pub enum RadixError {
    BadToken { token: String },
    UnsupportedBase { base: u32 },
    InputTooLarge { limit: usize },
    Interrupted,
}

impl Display for RadixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RadixError::BadToken { token } => write!(f, "not an integer: '{token}'"),
            RadixError::UnsupportedBase { base } => {
                write!(f, "base {base} is outside the supported range 2..=36")
            }
            RadixError::InputTooLarge { limit } => {
                write!(f, "input exceeds the {limit} byte buffer limit")
            }
            RadixError::Interrupted => f.write_str("interrupted"),
        }
    }
}

impl std::error::Error for RadixError {}

impl RadixError {
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            RadixError::InputTooLarge { .. } => 2,
            RadixError::Interrupted => 130,
            RadixError::BadToken { .. } | RadixError::UnsupportedBase { .. } => 1,
        }
    }
}

pub(crate) fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RadixError>()
        .map(RadixError::exit_code)
        .unwrap_or(1)
}
