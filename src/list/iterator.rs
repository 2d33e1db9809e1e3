use crate::list::{Node, RingList};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A walk around a `RingList`, visiting every node exactly once.
///
/// The walk starts at a node of the ring (the *phase*) and stops right
/// before it would come back to that node. Starting at the head gives the
/// elements in list order; starting anywhere else gives the same cycle,
/// rotated.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a RingList<E>` is added to protect the list from being
/// written.
pub(crate) struct Iter<'a, E: 'a> {
    start: Option<NonNull<Node<E>>>,
    current: Option<NonNull<Node<E>>>,
    _marker: PhantomData<&'a RingList<E>>,
}

impl<'a, E: 'a> Iter<'a, E> {
    pub(crate) fn new(list: &'a RingList<E>) -> Self {
        let head = list.head_node();
        Self {
            start: head,
            current: head,
            _marker: PhantomData,
        }
    }

    /// Walk the ring of `list` starting from `start`.
    ///
    /// It is unsafe because `start` must be a node of `list`.
    pub(crate) unsafe fn starting_at(_list: &'a RingList<E>, start: NonNull<Node<E>>) -> Self {
        Self {
            start: Some(start),
            current: Some(start),
            _marker: PhantomData,
        }
    }
}

impl<'a, E: 'a> Iterator for Iter<'a, E> {
    type Item = &'a E;

    /// Return `*current` and move to `current.next`, or finish once
    /// `current.next` is the starting node again.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        // SAFETY: `current` is a node of the borrowed list, which cannot be
        // mutated while `'a` is alive.
        let node = unsafe { &*current.as_ptr() };
        self.current = Some(node.next).filter(|&next| Some(next) != self.start);
        Some(&node.element)
    }
}

impl<'a, E: 'a> FusedIterator for Iter<'a, E> {}

#[cfg(test)]
mod tests {
    use crate::list::iterator::Iter;
    use crate::RingList;

    fn ring(elements: impl IntoIterator<Item = i32>) -> RingList<i32> {
        let mut list = RingList::new();
        for element in elements {
            list.add_last(element);
        }
        list
    }

    #[test]
    fn iter_empty() {
        let list = RingList::<i32>::new();
        let mut iter = list.iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_once_around() {
        let list = ring(1..=3);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None); // Fused and non-cyclic
    }

    #[test]
    fn iter_single() {
        let list = ring(Some(7));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&7]);
    }

    #[test]
    fn iter_starting_at_phase() {
        let list = ring(1..=4);
        let head = list.head_node().unwrap();
        let third = unsafe { crate::list::advance(head, 2) };
        let iter = unsafe { Iter::starting_at(&list, third) };
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![3, 4, 1, 2]);
    }
}
