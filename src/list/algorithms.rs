use crate::error::SplitError;
use crate::list::iterator::Iter;
use crate::list::{advance, link, RingList};

/// Compares two lists element by element, both starting at their own head.
///
/// The comparison is sensitive to the phase: a list and a rotation of it are
/// not equal (see [`RingList::rotation_eq`] for that). Two lists of
/// different lengths are never equal, even if one is a prefix of the other.
impl<T: PartialEq<U>, U> PartialEq<RingList<U>> for RingList<T> {
    fn eq(&self, other: &RingList<U>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingList<T> {}

/// Builds an independent list with the same elements by appending a clone of
/// each element, head first.
impl<E: Clone> Clone for RingList<E> {
    fn clone(&self) -> Self {
        let mut cloned = RingList::new();
        for element in self.iter() {
            cloned.add_last(element.clone());
        }
        cloned
    }
}

impl<E> RingList<E> {
    /// Returns `true` if `other` holds the same cycle of elements as `self`,
    /// starting from any of its nodes.
    ///
    /// `self` is always read from its head. Each node of `other` is tried in
    /// turn as the starting point of a lock-step walk over both rings, until
    /// one walk matches all elements. Lists of different lengths never match;
    /// two empty lists do.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*<sup>2</sup>) time in the
    /// worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut l = RingList::new();
    /// let mut m = RingList::new();
    /// for x in [1, 2, 3, 4] {
    ///     l.add_last(x);
    /// }
    /// for x in [3, 4, 1, 2] {
    ///     m.add_last(x);
    /// }
    ///
    /// assert!(l != m);
    /// assert!(l.rotation_eq(&m));
    ///
    /// m.add_last(5);
    /// assert!(!l.rotation_eq(&m));
    /// ```
    pub fn rotation_eq<U>(&self, other: &RingList<U>) -> bool
    where
        E: PartialEq<U>,
    {
        let len = self.len();
        if len != other.len() {
            return false;
        }
        let mut start = match other.head_node() {
            Some(head) => head,
            // both lists are empty
            None => return true,
        };
        for _ in 0..len {
            // SAFETY: `start` is always a node of `other`.
            if self.iter().eq(unsafe { Iter::starting_at(other, start) }) {
                debug!(len, "RingList::rotation_eq: matched");
                return true;
            }
            start = unsafe { start.as_ref().next };
        }
        debug!(len, "RingList::rotation_eq: no rotation matches");
        false
    }

    /// Splits the list into two lists of equal length.
    ///
    /// The first half (from the head up to the middle element) stays in
    /// `self`; the second half is moved into the returned list. Nodes are
    /// relinked, never copied, and no node is shared between the two lists
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`SplitError`] if the list is empty or has an odd number of
    /// elements. The list is left untouched in that case.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{RingList, SplitError};
    ///
    /// let mut list = RingList::new();
    /// for x in [1, 2, 3, 4] {
    ///     list.add_last(x);
    /// }
    ///
    /// let second = list.split().unwrap();
    /// assert_eq!(list.to_string(), "1 2");
    /// assert_eq!(second.to_string(), "3 4");
    ///
    /// list.add_last(5);
    /// assert_eq!(list.split().unwrap_err(), SplitError::OddLength { len: 3 });
    /// assert_eq!(list.to_string(), "1 2 5");
    /// ```
    pub fn split(&mut self) -> Result<RingList<E>, SplitError> {
        let tail = self.tail.ok_or(SplitError::Empty)?;
        let len = self.len();
        let half = SplitError::halve(len)?;
        // SAFETY: `tail` belongs to a closed ring of `len` nodes, so `mid` is
        // the last node of the first half and `mid.next` the first node of the
        // second half. After relinking, `head..=mid` and `mid.next..=tail`
        // are two disjoint closed rings, and each list owns exactly one.
        let second = unsafe {
            let mid = advance(tail, half);
            let head = tail.as_ref().next;
            link(tail, mid.as_ref().next);
            link(mid, head);
            self.tail = Some(mid);
            RingList::from_tail(tail)
        };
        trace!(len, half, "RingList::split");
        Ok(second)
    }
}

/// Returns `true` if both lists are present and hold the same cycle of
/// elements under some rotation of `b`.
///
/// An absent list never compares equal, not even to another absent list.
/// See [`RingList::rotation_eq`] for how rotations are tried.
///
/// # Examples
///
/// ```
/// use ring_list::{compare_lists, RingList};
///
/// let mut l = RingList::new();
/// let mut m = RingList::new();
/// for x in ['a', 'b', 'c'] {
///     l.add_last(x);
///     m.add_first(x);
/// }
/// m.rotate();
///
/// assert!(compare_lists(Some(&l), Some(&l.clone())));
/// assert!(!compare_lists(Some(&l), Some(&m))); // reversed, not rotated
/// assert!(!compare_lists(Some(&l), None::<&RingList<char>>));
/// ```
pub fn compare_lists<A, B>(a: Option<&RingList<A>>, b: Option<&RingList<B>>) -> bool
where
    A: PartialEq<B>,
{
    match (a, b) {
        (Some(a), Some(b)) => a.rotation_eq(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::list::compare_lists;
    use crate::{RingList, SplitError};
    use std::fmt::Debug;

    fn ring<T>(elements: impl IntoIterator<Item = T>) -> RingList<T> {
        let mut list = RingList::new();
        for element in elements {
            list.add_last(element);
        }
        list
    }

    fn elements<T: Clone>(list: &RingList<T>) -> Vec<T> {
        list.all_elements_in_order().into_iter().cloned().collect()
    }

    #[test]
    fn eq_is_phase_sensitive() {
        let l = ring([1, 2, 3, 4]);
        let mut m = ring([1, 2, 3, 4]);
        assert_eq!(l, m);
        m.rotate();
        assert_ne!(l, m);
        for _ in 0..3 {
            m.rotate();
        }
        assert_eq!(l, m);
    }

    #[test]
    fn eq_empty_and_lengths() {
        let empty = RingList::<i32>::new();
        assert_eq!(empty, RingList::<i32>::new());
        assert_ne!(empty, ring([1]));
        assert_ne!(ring([1]), empty);
        // a prefix is not enough
        assert_ne!(ring([1, 2, 3]), ring([1, 2]));
        assert_ne!(ring([1, 2]), ring([1, 2, 3]));
    }

    #[test]
    fn eq_across_element_types() {
        let owned = ring([String::from("a"), String::from("b")]);
        let borrowed = ring(["a", "b"]);
        assert!(owned == borrowed);
    }

    #[test]
    fn clone_is_independent() {
        let mut list = ring(0..5);
        let mut cloned = list.clone();
        assert_eq!(list, cloned);
        cloned.assert_valid();

        cloned.add_first(10);
        list.remove_first();
        if let Some(x) = list.last_mut() {
            *x = 40;
        }
        assert_eq!(elements(&list), vec![1, 2, 3, 40]);
        assert_eq!(elements(&cloned), vec![10, 0, 1, 2, 3, 4]);
        assert_eq!(RingList::<u8>::new().clone(), RingList::new());
    }

    #[test]
    fn rotation_eq_examples() {
        let _trace = crate::trace::trace_init();
        let l = ring([1, 2, 3, 4]);
        assert!(l.rotation_eq(&ring([3, 4, 1, 2])));
        assert!(l.rotation_eq(&ring([2, 3, 4, 1])));
        assert!(!l.rotation_eq(&ring([4, 3, 2, 1])));
        assert!(!l.rotation_eq(&ring([1, 2, 3])));
        assert!(!ring([1, 2, 3]).rotation_eq(&ring([1, 2])));
        assert!(RingList::<i32>::new().rotation_eq(&RingList::<i32>::new()));
    }

    #[test]
    fn rotation_eq_with_repeats() {
        assert!(ring([1, 1, 2]).rotation_eq(&ring([2, 1, 1])));
        assert!(!ring([1, 1, 2, 2]).rotation_eq(&ring([1, 2, 1, 2])));
        assert!(ring([5, 5, 5]).rotation_eq(&ring([5, 5, 5])));
    }

    #[test]
    fn compare_lists_absent() {
        let l = ring([1, 2]);
        assert!(compare_lists(Some(&l), Some(&ring([2, 1]))));
        assert!(!compare_lists(Some(&l), None::<&RingList<i32>>));
        assert!(!compare_lists(None::<&RingList<i32>>, Some(&l)));
        assert!(!compare_lists::<i32, i32>(None, None));
    }

    #[test]
    fn compare_lists_leaves_lists_untouched() {
        let l = ring([1, 2, 3]);
        let m = ring([2, 3, 1]);
        assert!(compare_lists(Some(&l), Some(&m)));
        assert_eq!(elements(&l), vec![1, 2, 3]);
        assert_eq!(elements(&m), vec![2, 3, 1]);
    }

    #[test]
    fn split_halves() {
        fn test_split<T, I1, I2, I3>(list: I1, first: I2, second: I3)
        where
            T: Clone + Eq + Debug,
            I1: IntoIterator<Item = T>,
            I2: IntoIterator<Item = T>,
            I3: IntoIterator<Item = T>,
        {
            let _trace = crate::trace::trace_init();
            let mut list = ring(list);
            let split = list.split().unwrap();
            list.assert_valid();
            split.assert_valid();
            assert_eq!(list, ring(first));
            assert_eq!(split, ring(second));
        }
        test_split(1..=4, 1..=2, 3..=4);
        test_split(1..=2, Some(1), Some(2));
        test_split(0..10, 0..5, 5..10);
        test_split(['a', 'a', 'b', 'b'], ['a', 'a'], ['b', 'b']);
    }

    #[test]
    fn split_after_rotation() {
        let mut list = ring([1, 2, 3, 4, 5, 6]);
        list.rotate();
        list.rotate();
        let split = list.split().unwrap();
        assert_eq!(elements(&list), vec![3, 4, 5]);
        assert_eq!(elements(&split), vec![6, 1, 2]);
    }

    #[test]
    fn split_rejects_empty_and_odd() {
        let mut empty = RingList::<i32>::new();
        assert_eq!(empty.split().unwrap_err(), SplitError::Empty);
        assert!(empty.is_empty());

        for len in [1, 3, 7] {
            let mut list = ring(0..len);
            assert_eq!(
                list.split().unwrap_err(),
                SplitError::OddLength { len: len as usize }
            );
            assert_eq!(elements(&list), (0..len).collect::<Vec<_>>());
            list.assert_valid();
        }
    }

    #[test]
    fn split_halves_are_independent() {
        let mut list = ring([1, 2, 3, 4]);
        let mut split = list.split().unwrap();
        split.add_last(5);
        list.remove_first();
        assert_eq!(elements(&list), vec![2]);
        assert_eq!(elements(&split), vec![3, 4, 5]);
        drop(split);
        assert_eq!(list.first(), Some(&2));
        assert_eq!(list.last(), Some(&2));
    }
}
