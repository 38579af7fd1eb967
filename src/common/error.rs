//! Error types for framesim.

use crate::common::config::MAX_FRAME_COUNT;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in framesim.
///
/// Every error is detected at the validation boundary or at engine entry,
/// before any simulation state is created. Once inputs pass validation a
/// policy run cannot fail, so no partial result ever leaks out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The reference sequence has zero elements.
    #[error("reference string cannot be empty")]
    EmptySequence,

    /// A token could not be parsed as a non-negative integer.
    ///
    /// `position` is 1-based so it can be reported to users directly.
    #[error("invalid page reference at position {position}")]
    InvalidReference { position: usize },

    /// The frame count is zero or exceeds the display ceiling.
    #[error("frame count must be between 1 and {MAX_FRAME_COUNT} (got {0})")]
    InvalidFrameCount(usize),

    /// The caller requested zero policies to run.
    #[error("no replacement policy selected")]
    NoPolicySelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidReference { position: 4 };
        assert_eq!(format!("{}", err), "invalid page reference at position 4");

        let err = Error::InvalidFrameCount(0);
        assert_eq!(
            format!("{}", err),
            "frame count must be between 1 and 25 (got 0)"
        );

        let err = Error::EmptySequence;
        assert_eq!(format!("{}", err), "reference string cannot be empty");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
