//! An immutable singly-linked cons cell.
//!
//! This module provides [`Node`], a container for a value and a [`Maybe`]
//! reference to the next node, forming finite, acyclic, singly-linked
//! chains. A node always has a value; `next` is `Nothing` exactly for the
//! last element of a chain.
//!
//! Every node exclusively owns its successor, and no operation mutates an
//! existing node: every transformation ([`map`](Node::map)) allocates a new
//! chain. Because chains are immutable, a fresh traversal always starts at
//! the head, so iteration is restartable.
//!
//! All chain walks (equality, hashing, mapping, folding, iteration, and
//! dropping) are loops rather than recursion, so long chains do not exhaust
//! the call stack.
//!
//! # Examples
//!
//! ```rust
//! use funrs::maybe::Maybe;
//! use funrs::node::Node;
//!
//! let chain = Node::of([1, 2, 3]).unwrap();
//! assert_eq!(chain.get_value(), &1);
//! assert_eq!(chain.len(), 3);
//!
//! let incremented = chain.map(|value| value + 1);
//! assert_eq!(incremented, Node::of([2, 3, 4]).unwrap());
//!
//! // The original chain is untouched
//! assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;
use crate::maybe::Maybe;
use crate::typeclass::{Foldable, Functor, FunctorMut, TypeConstructor};

/// An immutable container for a value and a reference to the next node.
///
/// `Node` is the cons cell of this crate: a chain of nodes is a singly
/// linked list terminated by a `Nothing` next-link. Equality between two
/// nodes is structural over the whole chain: equal iff the values are equal
/// and the remainders are equal.
///
/// # Examples
///
/// ```rust
/// use funrs::maybe::Maybe;
/// use funrs::node::Node;
///
/// let tail = Node::singleton(2);
/// let chain = Node::new(1, Maybe::Just(tail));
/// assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub struct Node<T> {
    /// The value stored in this node.
    value: T,
    /// The next node in the chain (if any), exclusively owned.
    next: Link<T>,
}

/// The owned link from a node to the remainder of its chain.
///
/// A plain `Maybe<Box<Node<T>>>` field would be dropped by compiler-generated
/// glue that recurses once per node and overflows the stack on long chains.
/// The newtype's `Drop` detaches one node at a time in a loop instead.
struct Link<T>(Maybe<Box<Node<T>>>);

impl<T> Link<T> {
    /// Detaches the linked remainder, leaving this link empty.
    #[inline]
    fn take(&mut self) -> Maybe<Box<Node<T>>> {
        std::mem::replace(&mut self.0, Maybe::Nothing)
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut current = self.take();
        while let Maybe::Just(mut node) = current {
            // The detached node now ends its chain, so dropping it at the
            // end of this iteration frees exactly one cell
            current = node.next.take();
        }
    }
}

impl<T> Node<T> {
    /// Constructs a node with the given value and remainder chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    /// use funrs::node::Node;
    ///
    /// let chain = Node::new(1, Maybe::Just(Node::singleton(2)));
    /// assert_eq!(chain.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(value: T, next: Maybe<Self>) -> Self {
        Self {
            value,
            next: Link(next.map(Box::new)),
        }
    }

    /// Constructs a chain of exactly one node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// let node = Node::singleton(42);
    /// assert_eq!(node.get_value(), &42);
    /// assert!(node.get_next().is_nothing());
    /// ```
    #[inline]
    #[must_use]
    pub const fn singleton(value: T) -> Self {
        Self {
            value,
            next: Link(Maybe::Nothing),
        }
    }

    /// Constructs a chain from an ordered sequence of values.
    ///
    /// The first value of the sequence becomes the head of the chain. The
    /// chain is built back-to-front: the last value is taken as the tail and
    /// each preceding value is prepended to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValues`] if the sequence yields no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::error::Error;
    /// use funrs::node::Node;
    ///
    /// let chain = Node::of([1, 2, 3]).unwrap();
    /// assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    ///
    /// assert_eq!(Node::<i32>::of([]), Err(Error::EmptyValues));
    /// ```
    pub fn of<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let Some(last) = values.pop() else {
            return Err(Error::EmptyValues);
        };

        // Build from end to start using Vec::pop()
        let mut node = Self::singleton(last);
        while let Some(value) = values.pop() {
            node = Self {
                value,
                next: Link(Maybe::Just(Box::new(node))),
            };
        }
        Ok(node)
    }

    /// Decomposes the node into its value and remainder chain.
    ///
    /// This is a shared read: the remainder is still owned by this node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// let chain = Node::of([1, 2]).unwrap();
    /// let (value, next) = chain.get();
    /// assert_eq!(value, &1);
    /// assert_eq!(next.map(Node::get_value), funrs::maybe::Maybe::Just(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self) -> (&T, Maybe<&Self>) {
        (&self.value, self.get_next())
    }

    /// Returns a reference to the value of this node.
    #[inline]
    #[must_use]
    pub const fn get_value(&self) -> &T {
        &self.value
    }

    /// Returns the next node in the chain, if any.
    #[inline]
    #[must_use]
    pub fn get_next(&self) -> Maybe<&Self> {
        self.next.0.as_ref().map(|node| &**node)
    }

    /// Decomposes the node into its owned value and detached remainder.
    ///
    /// The remainder chain is handed to the caller; nothing is shared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// let chain = Node::of([1, 2]).unwrap();
    /// let (value, rest) = chain.into_parts();
    /// assert_eq!(value, 1);
    /// assert_eq!(rest.map(|node| node.into_parts().0), funrs::maybe::Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (T, Maybe<Self>) {
        let Self { value, mut next } = self;
        (value, next.take().map(|node| *node))
    }

    /// Returns the number of nodes in the chain.
    ///
    /// Always at least 1.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// assert_eq!(Node::singleton(1).len(), 1);
    /// assert_eq!(Node::of([1, 2, 3]).unwrap().len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over references to the chain's values.
    ///
    /// The iterator yields values from head to tail. The chain is immutable,
    /// so a fresh call always restarts at the head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// let chain = Node::of([1, 2, 3]).unwrap();
    /// let collected: Vec<&i32> = chain.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> NodeIterator<'_, T> {
        NodeIterator {
            current: Maybe::Just(self),
        }
    }

    /// Returns a new chain with each value mapped by `function`.
    ///
    /// The new chain has the same length and order; this node is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// let chain = Node::of([1, 2]).unwrap();
    /// let doubled = chain.map(|value| value * 2);
    /// assert_eq!(doubled, Node::of([2, 4]).unwrap());
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> Node<B>
    where
        F: FnMut(&T) -> B,
    {
        let head_value = function(&self.value);
        let mut rest: Vec<B> = match self.get_next() {
            Maybe::Just(next) => next.iter().map(function).collect(),
            Maybe::Nothing => Vec::new(),
        };

        // Build the mapped remainder from end to start using Vec::pop()
        let mut next: Link<B> = Link(Maybe::Nothing);
        while let Some(value) = rest.pop() {
            next = Link(Maybe::Just(Box::new(Node { value, next })));
        }
        Node {
            value: head_value,
            next,
        }
    }

    /// Folds over the chain's values from head to tail.
    ///
    /// The head is applied first: the result is
    /// `f(last, ... f(second, f(first, initial)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::node::Node;
    ///
    /// let chain = Node::of([1, 2, 3]).unwrap();
    /// let sum = chain.fold(|value, acc| value + acc, 0);
    /// assert_eq!(sum, 6);
    ///
    /// // Head first: "abc", not "cba"
    /// let text = Node::of(["a", "b", "c"]).unwrap();
    /// let joined = text.fold(|value, acc| acc + value, String::new());
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn fold<B, F>(&self, mut function: F, initial: B) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let mut accumulator = initial;
        for value in self {
            accumulator = function(value, accumulator);
        }
        accumulator
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the values of a [`Node`] chain.
pub struct NodeIterator<'a, T> {
    current: Maybe<&'a Node<T>>,
}

impl<'a, T> Iterator for NodeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Maybe::Just(node) => {
                self.current = node.get_next();
                Some(&node.value)
            }
            Maybe::Nothing => None,
        }
    }
}

/// An owning iterator over the values of a [`Node`] chain.
///
/// Each step detaches the head node and hands ownership of its value to the
/// caller.
pub struct NodeIntoIterator<T> {
    current: Maybe<Node<T>>,
}

impl<T> Iterator for NodeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.current, Maybe::Nothing) {
            Maybe::Just(node) => {
                let (value, next) = node.into_parts();
                self.current = next;
                Some(value)
            }
            Maybe::Nothing => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a T;
    type IntoIter = NodeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Node<T> {
    type Item = T;
    type IntoIter = NodeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        NodeIntoIterator {
            current: Maybe::Just(self),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        // Structural equality over the whole chain, walked as a loop so long
        // chains cannot exhaust the call stack
        let mut left = Maybe::Just(self);
        let mut right = Maybe::Just(other);
        loop {
            match (left, right) {
                (Maybe::Nothing, Maybe::Nothing) => return true,
                (Maybe::Just(a), Maybe::Just(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    left = a.get_next();
                    right = b.get_next();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish chains of different lengths
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // An iterative deep copy; the chain is never empty so the rebuild
        // cannot fail
        self.map(Clone::clone)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    /// Renders the chain recursively, matching the [`Maybe`] rendering:
    /// `Node(1, Just(Node(2, Nothing())))`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut open = 0;
        let mut current = Maybe::Just(self);
        while let Maybe::Just(node) = current {
            write!(formatter, "Node({}, ", node.value)?;
            open += 1;
            current = match node.get_next() {
                Maybe::Just(next) => {
                    write!(formatter, "Just(")?;
                    open += 1;
                    Maybe::Just(next)
                }
                Maybe::Nothing => {
                    write!(formatter, "Nothing()")?;
                    Maybe::Nothing
                }
            };
        }
        for _ in 0..open {
            write!(formatter, ")")?;
        }
        Ok(())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Node<T> {
    type Inner = T;
    type WithType<B> = Node<B>;
}

impl<T> Functor for Node<T> {
    fn fmap<B, F>(self, function: F) -> Node<B>
    where
        F: FnOnce(T) -> B,
    {
        // FnOnce can only be called once, so this only maps the head value;
        // use FunctorMut::fmap_mut for whole-chain mapping
        let (value, _) = self.into_parts();
        Node::singleton(function(value))
    }

    fn fmap_ref<B, F>(&self, function: F) -> Node<B>
    where
        F: FnOnce(&T) -> B,
    {
        Node::singleton(function(&self.value))
    }
}

impl<T> FunctorMut for Node<T> {
    fn fmap_mut<B, F>(self, function: F) -> Node<B>
    where
        F: FnMut(T) -> B,
    {
        let mut values: Vec<B> = self.into_iter().map(function).collect();

        // Build from end to start using Vec::pop(); the source chain was
        // non-empty, so the final unsafe_get always finds a node
        let mut chain: Maybe<Node<B>> = Maybe::Nothing;
        while let Some(value) = values.pop() {
            chain = Maybe::Just(Node::new(value, chain));
        }
        chain.unsafe_get()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> Node<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for Node<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let values: Vec<T> = self.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(init, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        // A node always has a value
        false
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
