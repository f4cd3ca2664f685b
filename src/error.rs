//! Error type shared by every transform in the crate.

use core::{error, fmt};

/// Errors raised by complex arithmetic, the sliding-window transforms and
/// the fingerprint wrapper.
///
/// Every fallible operation fails before touching its receiver, so an `Err`
/// always leaves the previous state intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideError {
    /// An operand or a result held a NaN or infinite component.
    NonFinite,
    /// The fingerprint no longer accepts samples or was frozen twice.
    AlreadyFrozen,
    /// The fingerprint must be frozen before it can be compared.
    NotFrozen,
    /// A transform needs at least one spectral line.
    EmptyWindow,
    /// The leaky-integrator decay factor lies outside `[0, 1)`.
    InvalidDecay,
    /// Band limits must be finite and strictly positive.
    InvalidBounds,
    /// Two operands disagree on the number of spectral lines.
    MismatchedLengths,
    /// A line index outside `0..size` was requested.
    IndexOutOfRange,
}

/// Coarse classification of [`SlideError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A non-finite value would have entered the computation.
    Numeric,
    /// The operation is not allowed in the receiver's current state.
    InvalidState,
    /// An argument violated the operation's preconditions.
    InvalidArgument,
}

impl SlideError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SlideError::NonFinite => ErrorKind::Numeric,
            SlideError::AlreadyFrozen | SlideError::NotFrozen => ErrorKind::InvalidState,
            SlideError::EmptyWindow
            | SlideError::InvalidDecay
            | SlideError::InvalidBounds
            | SlideError::MismatchedLengths
            | SlideError::IndexOutOfRange => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for SlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideError::NonFinite => write!(f, "non-finite complex component"),
            SlideError::AlreadyFrozen => write!(f, "fingerprint already frozen"),
            SlideError::NotFrozen => write!(f, "fingerprint must be frozen before evaluation"),
            SlideError::EmptyWindow => write!(f, "window size must be greater than 0"),
            SlideError::InvalidDecay => write!(f, "decay factor mu0 not in [0.0, 1.0)"),
            SlideError::InvalidBounds => {
                write!(f, "band limits must be finite and greater than 0")
            }
            SlideError::MismatchedLengths => write!(f, "number of spectral lines differs"),
            SlideError::IndexOutOfRange => write!(f, "spectral line index out of range"),
        }
    }
}

impl error::Error for SlideError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kinds() {
        assert_eq!(SlideError::NonFinite.kind(), ErrorKind::Numeric);
        assert_eq!(SlideError::AlreadyFrozen.kind(), ErrorKind::InvalidState);
        assert_eq!(SlideError::NotFrozen.kind(), ErrorKind::InvalidState);
        assert_eq!(SlideError::InvalidDecay.kind(), ErrorKind::InvalidArgument);
        assert_eq!(SlideError::IndexOutOfRange.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn display() {
        assert_eq!(
            SlideError::EmptyWindow.to_string(),
            "window size must be greater than 0"
        );
    }
}
