//! Page identifier type.

use std::fmt;

use serde::Serialize;

/// A page number in a reference sequence.
///
/// Using `u32` keeps page numbers non-negative by construction: a token like
/// `-1` simply fails to parse, so the simulators never see an invalid page.
///
/// Page `0` is a perfectly valid page. An empty frame slot is therefore
/// represented as `Option<Page>::None`, never as a sentinel page value.
///
/// # Example
/// ```
/// use framesim::Page;
///
/// let page = Page::new(7);
/// assert_eq!(page.0, 7);
/// assert_eq!(format!("{}", page), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Page(pub u32);

impl Page {
    /// Create a new Page.
    #[inline]
    pub fn new(number: u32) -> Self {
        Page(number)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Page {
    fn from(number: u32) -> Self {
        Page(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(42);
        assert_eq!(page.0, 42);
    }

    #[test]
    fn test_page_equality() {
        assert_eq!(Page::new(5), Page::new(5));
        assert_ne!(Page::new(5), Page::new(6));
    }

    #[test]
    fn test_page_zero_is_distinct_from_empty() {
        let slot: Option<Page> = Some(Page::new(0));
        assert_ne!(slot, None);
    }

    #[test]
    fn test_page_display() {
        assert_eq!(format!("{}", Page::new(42)), "42");
    }
}
