//! Crate-level error taxonomy.
//!
//! Every fallible operation in this crate fails with a variant of [`Error`],
//! raised synchronously at the call that violates the precondition. No
//! operation leaves a partially mutated structure behind: a failed
//! [`Stack::push`](crate::stack::Stack::push) leaves the stack unchanged and
//! usable.
//!
//! Unchecked access of an absent [`Maybe`](crate::maybe::Maybe) is not part
//! of this taxonomy: it signals programmer error, not a recoverable
//! condition, so [`unsafe_get`](crate::maybe::Maybe::unsafe_get) panics
//! instead of returning a `Result`.

/// Errors raised by the constructors and mutators of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node chain was requested from a sequence with no elements.
    ///
    /// A [`Node`](crate::node::Node) always holds a value, so there is no
    /// empty chain to return.
    #[error("cannot construct a node from an empty sequence")]
    EmptyValues,

    /// A push was attempted on a bounded stack that is already at capacity.
    ///
    /// The stack is left untouched; popping an element makes room for a
    /// subsequent push to succeed.
    #[error("stack is full")]
    StackFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyValues.to_string(),
            "cannot construct a node from an empty sequence"
        );
        assert_eq!(Error::StackFull.to_string(), "stack is full");
    }
}
