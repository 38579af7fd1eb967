//! Validation boundary between raw text input and the engine.
//!
//! The simulators only ever see a validated `&[Page]` and a positive frame
//! count; everything raw text can get wrong is caught here, before any
//! simulation state exists.

use crate::common::config::MAX_FRAME_COUNT;
use crate::common::{Error, Page, Result};

/// Parse a reference string like `"7,0,1 2, 0"` into pages.
///
/// Tokens may be separated by commas, whitespace, or any mix of the two;
/// empty tokens are dropped. Each remaining token must parse as a
/// non-negative integer.
///
/// # Errors
/// - [`Error::EmptySequence`] if no tokens remain
/// - [`Error::InvalidReference`] with the 1-based position of the first bad
///   token (negative numbers land here too: `-3` is not a page)
///
/// # Example
/// ```
/// use framesim::input::parse_reference_string;
/// use framesim::Page;
///
/// let pages = parse_reference_string("7, 0 1,2").unwrap();
/// assert_eq!(pages, vec![Page::new(7), Page::new(0), Page::new(1), Page::new(2)]);
/// ```
pub fn parse_reference_string(raw: &str) -> Result<Vec<Page>> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(Error::EmptySequence);
    }

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<u32>()
                .map(Page::new)
                .map_err(|_| Error::InvalidReference {
                    position: index + 1,
                })
        })
        .collect()
}

/// Check a frame count against the engine's and the display's limits.
///
/// # Errors
/// [`Error::InvalidFrameCount`] if `frame_count` is zero or exceeds
/// [`MAX_FRAME_COUNT`].
pub fn validate_frame_count(frame_count: usize) -> Result<()> {
    if frame_count == 0 || frame_count > MAX_FRAME_COUNT {
        return Err(Error::InvalidFrameCount(frame_count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let pages = parse_reference_string("7,0,1,2").unwrap();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0], Page::new(7));
        assert_eq!(pages[3], Page::new(2));
    }

    #[test]
    fn test_parse_mixed_separators() {
        let pages = parse_reference_string("  7, 0\t1 ,, 2 \n").unwrap();
        assert_eq!(
            pages,
            vec![Page::new(7), Page::new(0), Page::new(1), Page::new(2)]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_reference_string(""), Err(Error::EmptySequence));
        assert_eq!(parse_reference_string(" , ,  "), Err(Error::EmptySequence));
    }

    #[test]
    fn test_parse_reports_one_based_position() {
        assert_eq!(
            parse_reference_string("1, 2, x, 4"),
            Err(Error::InvalidReference { position: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_negative_pages() {
        assert_eq!(
            parse_reference_string("3, -1"),
            Err(Error::InvalidReference { position: 2 })
        );
    }

    #[test]
    fn test_parse_accepts_page_zero() {
        let pages = parse_reference_string("0").unwrap();
        assert_eq!(pages, vec![Page::new(0)]);
    }

    #[test]
    fn test_validate_frame_count_bounds() {
        assert!(validate_frame_count(1).is_ok());
        assert!(validate_frame_count(MAX_FRAME_COUNT).is_ok());
        assert_eq!(validate_frame_count(0), Err(Error::InvalidFrameCount(0)));
        assert_eq!(
            validate_frame_count(MAX_FRAME_COUNT + 1),
            Err(Error::InvalidFrameCount(MAX_FRAME_COUNT + 1))
        );
    }
}
