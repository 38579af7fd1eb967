//! Configuration constants for framesim.

/// Upper bound on the frame count accepted at the validation boundary.
///
/// This is a presentation policy, not an engine invariant: a step table with
/// more than 25 frame columns stops being readable. The simulators themselves
/// accept any positive frame count.
pub const MAX_FRAME_COUNT: usize = 25;

/// Default frame count used by the CLI when none is given.
pub const DEFAULT_FRAME_COUNT: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_within_ceiling() {
        assert!(DEFAULT_FRAME_COUNT >= 1);
        assert!(DEFAULT_FRAME_COUNT <= MAX_FRAME_COUNT);
    }
}
