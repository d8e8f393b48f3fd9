pub mod crc32;
pub mod masterkey;

#[cfg(test)]
mod validation;

/// Error types for mkey operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MkError {
    /// A character in the input string has no single-byte (Latin-1) encoding.
    Encoding(char),
    /// The serial number is not exactly 8 ASCII digits.
    InvalidSerial,
    /// The date is not a valid MMDD digit string.
    InvalidDate,
}

impl std::fmt::Display for MkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding(ch) => {
                write!(f, "character {ch:?} is not representable in Latin-1")
            }
            Self::InvalidSerial => write!(f, "serial number must be 8 digits"),
            Self::InvalidDate => write!(f, "date must be in MMDD format"),
        }
    }
}

impl std::error::Error for MkError {}

pub type MkResult<T> = Result<T, MkError>;
