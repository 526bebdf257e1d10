//! # funrs
//!
//! A small functional data-structure library providing three layered
//! abstractions:
//!
//! - [`Maybe`](maybe::Maybe): a two-variant container for a value that may
//!   or may not exist
//! - [`Node`](node::Node): an immutable singly-linked cons cell forming
//!   finite, acyclic chains
//! - [`Stack`](stack::Stack): a mutable, optionally size-bounded LIFO built
//!   on top of `Node` chains
//!
//! The list and stack are expressed entirely in terms of `Maybe`: a node's
//! `next` slot and the stack's head pointer are both `Maybe` values, so
//! absence is what terminates every traversal.
//!
//! ## Example
//!
//! ```rust
//! use funrs::prelude::*;
//!
//! let chain = Node::of([1, 2, 3]).unwrap();
//! let doubled = chain.map(|value| value * 2);
//! assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
//!
//! let mut stack = Stack::new();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.pop(), Maybe::Just(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funrs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::maybe::Maybe;
    pub use crate::node::Node;
    pub use crate::stack::Stack;
    pub use crate::typeclass::*;
}

pub mod error;
pub mod maybe;
pub mod node;
pub mod stack;
pub mod typeclass;
