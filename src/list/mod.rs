use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::iterator::Iter;

mod iterator;

mod algorithms;

pub use algorithms::compare_lists;

/// The `RingList` is a singly-linked circular list with owned nodes.
///
/// The list keeps a single pointer `tail` to its last node. The successor of
/// the last node is the first node (the *head*), so inserting at either end,
/// removing at the front and rotating all take constant time. The list does
/// not store its length: [`len`](RingList::len) walks the ring once.
///
/// The `RingList` contains:
/// - a pointer `tail` that points to the last node, or `None` if the list is
///   empty.
///
/// # Naming Conventions
///
/// - *head*: the first element, `tail.next`;
/// - *tail*: the last element, the only node the list points to directly;
/// - *phase*: the node a walk around the ring starts from.
pub struct RingList<E> {
    tail: Option<NonNull<Node<E>>>,
    _marker: PhantomData<Box<Node<E>>>,
}

pub(crate) struct Node<E> {
    pub(crate) next: NonNull<Node<E>>,
    pub(crate) element: E,
}

// private methods
impl<E> RingList<E> {
    /// Construct a list that owns the ring ending at `tail`.
    ///
    /// It is unsafe because the caller must give up every other owner of the
    /// nodes in the ring, and the ring must be closed.
    pub(crate) unsafe fn from_tail(tail: NonNull<Node<E>>) -> Self {
        Self {
            tail: Some(tail),
            _marker: PhantomData,
        }
    }

    pub(crate) fn head_node(&self) -> Option<NonNull<Node<E>>> {
        // SAFETY: `tail.next` is always valid (either `tail` itself, or the first
        // element in the ring).
        self.tail.map(|tail| unsafe { tail.as_ref().next })
    }

    /// Move `tail` one node forward without emitting any event.
    fn advance_tail(&mut self) {
        self.tail = self.head_node();
    }

    pub(crate) fn iter(&self) -> Iter<'_, E> {
        Iter::new(self)
    }

    /// Walks the ring from the tail and panics if it is not a single closed
    /// cycle.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        use std::collections::HashSet;

        let tail = match self.tail {
            Some(tail) => tail,
            None => return,
        };
        let mut visited = HashSet::new();
        visited.insert(tail);
        // SAFETY: every node reachable from `tail` belongs to this list.
        let mut current = unsafe { tail.as_ref().next };
        while current != tail {
            assert!(
                visited.insert(current),
                "node {:?} is reachable twice before returning to the tail {:?}",
                current,
                tail
            );
            current = unsafe { current.as_ref().next };
        }
    }
}

impl<E> RingList<E> {
    /// Create an empty `RingList`.
    ///
    /// # Examples
    /// ```
    /// use ring_list::RingList;
    /// let list: RingList<u32> = RingList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            tail: None,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `RingList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert!(list.is_empty());
    ///
    /// list.add_first("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the length of the `RingList`.
    ///
    /// The length is not stored anywhere; it is recomputed by walking the
    /// ring once from the head back to itself.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.add_first(2);
    /// list.add_first(1);
    /// list.add_last(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Provides a reference to the first element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.first(), None);
    ///
    /// list.add_first(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&E> {
        // SAFETY: the head is a valid node owned by `self`, and the returned
        // reference borrows `self` immutably.
        self.head_node()
            .map(|head| unsafe { &(*head.as_ptr()).element })
    }

    /// Provides a mutable reference to the first element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.add_first(1);
    ///
    /// if let Some(x) = list.first_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.first(), Some(&5));
    /// ```
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut E> {
        // SAFETY: the head is a valid node owned by `self`, and the returned
        // reference borrows `self` mutably.
        self.head_node()
            .map(|head| unsafe { &mut (*head.as_ptr()).element })
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.last(), None);
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    #[inline]
    pub fn last(&self) -> Option<&E> {
        // SAFETY: see `first`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).element })
    }

    /// Provides a mutable reference to the last element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.add_last(1);
    ///
    /// if let Some(x) = list.last_mut() {
    ///     *x *= 7;
    /// }
    /// assert_eq!(list.last(), Some(&7));
    /// ```
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut E> {
        // SAFETY: see `first_mut`.
        self.tail.map(|tail| unsafe { &mut (*tail.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// In an empty list the new node becomes its own successor. Otherwise it
    /// is linked in between the tail and the old head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    ///
    /// list.add_first(2);
    /// assert_eq!(list.first(), Some(&2));
    ///
    /// list.add_first(1);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn add_first(&mut self, element: E) {
        let node = Node::new_detached(element);
        match self.tail {
            // SAFETY: `node` is freshly allocated and not shared with anyone.
            None => unsafe {
                link(node, node);
                self.tail = Some(node);
            },
            // SAFETY: `tail` and `tail.next` are adjacent nodes of this list.
            Some(tail) => unsafe {
                link(node, tail.as_ref().next);
                link(tail, node);
            },
        }
    }

    /// Appends an element to the back of the list.
    ///
    /// This is [`add_first`](RingList::add_first) followed by moving the tail
    /// onto the node just inserted.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.add_last(1);
    /// list.add_last(3);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&3));
    /// ```
    pub fn add_last(&mut self, element: E) {
        self.add_first(element);
        self.advance_tail();
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// The removed node leaves the ring before it is released, so no node of
    /// the remaining list points at it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.remove_first(), None);
    ///
    /// list.add_first(1);
    /// list.add_first(3);
    /// assert_eq!(list.remove_first(), Some(3));
    /// assert_eq!(list.remove_first(), Some(1));
    /// assert_eq!(list.remove_first(), None);
    /// assert!(list.is_empty());
    /// ```
    pub fn remove_first(&mut self) -> Option<E> {
        let tail = self.tail?;
        // SAFETY: `head` is owned by this list and is unlinked from the ring
        // before being turned back into a box.
        unsafe {
            let head = tail.as_ref().next;
            if head == tail {
                self.tail = None;
            } else {
                link(tail, head.as_ref().next);
            }
            Some(Box::from_raw(head.as_ptr()).into_element())
        }
    }

    /// Moves the tail one node forward: the old head becomes the tail, and
    /// the second element becomes the head. Does nothing on an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.add_last(1);
    /// list.add_last(2);
    /// list.add_last(3);
    ///
    /// list.rotate();
    /// assert_eq!(list.to_string(), "2 3 1");
    /// assert_eq!(list.last(), Some(&1));
    /// ```
    pub fn rotate(&mut self) {
        if self.is_empty() {
            return;
        }
        trace!("RingList::rotate");
        self.advance_tail();
    }

    /// Collects references to every element, starting at the head and going
    /// around the ring exactly once.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert!(list.all_elements_in_order().is_empty());
    ///
    /// list.add_last('a');
    /// list.add_last('b');
    /// list.add_first('z');
    /// assert_eq!(list.all_elements_in_order(), vec![&'z', &'a', &'b']);
    /// ```
    pub fn all_elements_in_order(&self) -> Vec<&E> {
        self.iter().collect()
    }
}

impl<E: Debug> Debug for RingList<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements from head to tail, separated by single spaces.
impl<E: Display> Display for RingList<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut elements = self.iter();
        if let Some(first) = elements.next() {
            Display::fmt(first, f)?;
            for element in elements {
                f.write_str(" ")?;
                Display::fmt(element, f)?;
            }
        }
        Ok(())
    }
}

impl<E> Default for RingList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Node<E> {
    /// Create a detached node with given element.
    ///
    /// `node.next` is dangling until the node is linked into a ring.
    pub(crate) fn new_detached(element: E) -> NonNull<Node<E>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> E {
        self.element
    }
}

/// Make `next` the successor of `prev`.
///
/// It is unsafe because `prev` must be a valid node that is not borrowed
/// elsewhere.
pub(crate) unsafe fn link<E>(mut prev: NonNull<Node<E>>, next: NonNull<Node<E>>) {
    prev.as_mut().next = next;
}

/// Returns the node `steps` successors after `node`.
///
/// It is unsafe because `node` must belong to a closed ring.
pub(crate) unsafe fn advance<E>(mut node: NonNull<Node<E>>, steps: usize) -> NonNull<Node<E>> {
    for _ in 0..steps {
        node = node.as_ref().next;
    }
    node
}

impl<E> Drop for RingList<E> {
    fn drop(&mut self) {
        while self.remove_first().is_some() {}
    }
}

unsafe impl<E: Send> Send for RingList<E> {}

unsafe impl<E: Sync> Sync for RingList<E> {}

// Ensure that `RingList` is covariant in its element type.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: RingList<&'static str>) -> RingList<&'a str> {
        x
    }
}
