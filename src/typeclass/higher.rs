//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: there is no way to
//! write a trait that abstracts over `Option<_>` and `Vec<_>` as type
//! constructors. This module works around that limitation with a GAT,
//! providing the foundation the [`Functor`](super::Functor) and
//! [`Foldable`](super::Foldable) traits build on.
//!
//! # Example
//!
//! ```rust
//! use funrs::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = transform_type(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, or [`Maybe<_>`](crate::maybe::Maybe).
///
/// # Associated Types
///
/// - `Inner`: the type parameter this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// should be equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be
    /// `Option<String>`. The constraint ensures the resulting type is also
    /// a valid type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
