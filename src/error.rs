/// Errors returned by [`RingList::split`](crate::RingList::split).
///
/// A failed split never touches the ring: the list is left exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// The list has no elements, so there is nothing to halve.
    #[error("list must have an even number of elements, but it is empty")]
    Empty,
    /// The list has an odd number of elements.
    #[error("list must have an even number of elements, but it has {len}")]
    OddLength {
        /// the length of the list at the time of the call
        len: usize,
    },
}

impl SplitError {
    /// Returns the length of each half of a non-empty list of `len`
    /// elements.
    pub(crate) fn halve(len: usize) -> Result<usize, Self> {
        debug_assert!(len > 0, "an empty list is rejected before halving");
        if len % 2 != 0 {
            return Err(SplitError::OddLength { len });
        }
        Ok(len / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::SplitError;

    #[test]
    fn halve_len() {
        assert_eq!(SplitError::halve(1), Err(SplitError::OddLength { len: 1 }));
        assert_eq!(SplitError::halve(3), Err(SplitError::OddLength { len: 3 }));
        assert_eq!(SplitError::halve(2), Ok(1));
        assert_eq!(SplitError::halve(10), Ok(5));
    }

    #[test]
    fn messages() {
        assert_eq!(
            SplitError::Empty.to_string(),
            "list must have an even number of elements, but it is empty"
        );
        assert_eq!(
            SplitError::OddLength { len: 5 }.to_string(),
            "list must have an even number of elements, but it has 5"
        );
    }
}
