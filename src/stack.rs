//! A mutable, optionally size-bounded LIFO stack.
//!
//! This module provides [`Stack`], the sole stateful wrapper in this crate.
//! A stack holds its elements as a [`Node`] chain rooted at a
//! [`Maybe`]-typed head pointer; pushing prepends a node and popping
//! detaches one, handing ownership of its value to the caller.
//!
//! A stack is either unbounded ([`Stack::new`]) or bounded at construction
//! ([`Stack::bounded`]); the bound is fixed for the stack's lifetime.
//!
//! # Thread safety
//!
//! `Stack` mutates its head and size without any synchronization. It is a
//! single-threaded structure by design: concurrent pushes and pops on a
//! shared instance must be prevented by the caller through external mutual
//! exclusion. The immutable types of this crate ([`Maybe`], [`Node`]) need
//! no such care.
//!
//! # Examples
//!
//! ```rust
//! use funrs::maybe::Maybe;
//! use funrs::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! stack.push(3).unwrap();
//!
//! assert_eq!(stack.pop(), Maybe::Just(3));
//! assert_eq!(stack.pop(), Maybe::Just(2));
//! assert_eq!(stack.pop(), Maybe::Just(1));
//! assert_eq!(stack.pop(), Maybe::Nothing);
//! ```

use std::mem;

use crate::error::Error;
use crate::maybe::Maybe;
use crate::node::Node;

/// A mutable LIFO stack built on an immutable [`Node`] chain.
///
/// The stack owns its head chain exclusively. Two implicit states:
/// Empty (head `Nothing`, length 0) and NonEmpty (head `Just`, length ≥ 1).
/// `push` transitions Empty→NonEmpty or NonEmpty→NonEmpty (or fails on
/// capacity); `pop` transitions NonEmpty→NonEmpty or NonEmpty→Empty, and on
/// Empty is a no-op returning `Nothing`, not a failure.
///
/// # Examples
///
/// ```rust
/// use funrs::maybe::Maybe;
/// use funrs::stack::Stack;
///
/// let mut stack = Stack::bounded(2);
/// stack.push('a').unwrap();
/// stack.push('b').unwrap();
/// assert!(stack.push('c').is_err());
/// assert_eq!(stack.peek(), Maybe::Just(&'b'));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    /// Maximum number of elements; 0 means unbounded. Fixed at construction.
    max_size: usize,
    /// The chain of elements, most recently pushed first.
    head: Maybe<Node<T>>,
    /// Current element count, always equal to the length of the head chain.
    size: usize,
}

impl<T> Stack<T> {
    /// Creates a new unbounded stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::stack::Stack;
    ///
    /// let stack: Stack<i32> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_size: 0,
            head: Maybe::Nothing,
            size: 0,
        }
    }

    /// Creates a new stack bounded at `max_size` elements.
    ///
    /// A `max_size` of 0 means unbounded, same as [`Stack::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::stack::Stack;
    ///
    /// let stack: Stack<i32> = Stack::bounded(10);
    /// assert_eq!(stack.max_size(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub const fn bounded(max_size: usize) -> Self {
        Self {
            max_size,
            head: Maybe::Nothing,
            size: 0,
        }
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// Prepends a new node holding `value` in front of the current head
    /// chain and increments the length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StackFull`] if the stack is bounded and already at
    /// capacity. The stack is left unchanged and remains usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    /// use funrs::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1).unwrap();
    /// assert_eq!(stack.peek(), Maybe::Just(&1));
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.max_size != 0 && self.size >= self.max_size {
            return Err(Error::StackFull);
        }
        let head = mem::replace(&mut self.head, Maybe::Nothing);
        self.head = Maybe::Just(Node::new(value, head));
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the value on top of the stack.
    ///
    /// Returns `Nothing` on an empty stack; this is not an error and
    /// mutates nothing. Otherwise the head node is detached, the stack's
    /// head becomes that node's remainder, and ownership of the popped
    /// value passes to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    /// use funrs::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1).unwrap();
    /// assert_eq!(stack.pop(), Maybe::Just(1));
    /// assert_eq!(stack.pop(), Maybe::Nothing);
    /// ```
    pub fn pop(&mut self) -> Maybe<T> {
        match mem::replace(&mut self.head, Maybe::Nothing) {
            Maybe::Just(node) => {
                let (value, next) = node.into_parts();
                self.head = next;
                self.size -= 1;
                Maybe::Just(value)
            }
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the value on top of the stack without removing it.
    ///
    /// Returns `Nothing` on an empty stack. Never mutates: calling `peek`
    /// twice in a row returns the same value and leaves the length
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    /// use funrs::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1).unwrap();
    /// assert_eq!(stack.peek(), Maybe::Just(&1));
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Maybe<&T> {
        self.head.as_ref().map(Node::get_value)
    }

    /// Returns the number of elements currently on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the stack's capacity bound; 0 means unbounded.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
