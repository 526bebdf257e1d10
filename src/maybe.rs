//! An optional-value container.
//!
//! This module provides [`Maybe`], a two-variant sum type representing a
//! value that may or may not exist. Presence is tracked by the variant tag,
//! never by comparing against a sentinel value, so a legitimate value can
//! never be mistaken for absence. The nullable boundary of the type is
//! `Option<T>`: [`Maybe::of`] and [`Maybe::as_nullable`] convert at the
//! edges, and everything in between is total.
//!
//! # Examples
//!
//! ```rust
//! use funrs::maybe::Maybe;
//!
//! let present = Maybe::of(Some(5));
//! assert_eq!(present.map(|n| n * 2), Maybe::Just(10));
//!
//! let absent: Maybe<i32> = Maybe::of(None);
//! assert_eq!(absent.map(|n| n * 2), Maybe::Nothing);
//! assert_eq!(absent.get_or_else(7), 7);
//! ```

use std::fmt;

use crate::typeclass::{Foldable, Functor, FunctorMut, TypeConstructor};

/// A container for a value that may or may not exist.
///
/// Exactly one variant is active; there is no third state. Two `Maybe`s are
/// equal iff both are [`Nothing`](Maybe::Nothing), or both are
/// [`Just`](Maybe::Just) with equal inner values.
///
/// All operations are pure; the only one that is not total is
/// [`unsafe_get`](Maybe::unsafe_get), which panics on `Nothing`.
///
/// # Examples
///
/// ```rust
/// use funrs::maybe::Maybe;
///
/// let value = Maybe::just(42);
/// assert!(value.is_just());
/// assert_eq!(value.get_or_else(0), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    /// A value is present.
    Just(T),
    /// No value is present.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    /// Constructs a `Maybe` from a nullable value.
    ///
    /// `Some(value)` becomes `Just(value)` and `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::Just(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Constructs a `Just(value)`.
    #[inline]
    #[must_use]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Constructs a `Nothing`.
    #[inline]
    #[must_use]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if a value is present.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Maps a function over the contained value.
    ///
    /// `Nothing` maps to `Nothing`; `Just(value)` maps to
    /// `Just(function(value))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|n| n + 1), Maybe::Just(3));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n + 1), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Folds over the contained value.
    ///
    /// Returns `initial` for `Nothing` and `function(value, initial)` for
    /// `Just(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).fold(|value, acc| value + acc, 10), 12);
    /// assert_eq!(Maybe::<i32>::nothing().fold(|value, acc| value + acc, 10), 10);
    /// ```
    #[inline]
    pub fn fold<B, F>(self, function: F, initial: B) -> B
    where
        F: FnOnce(T, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, initial),
            Self::Nothing => initial,
        }
    }

    /// Returns the contained value without checking for presence.
    ///
    /// The caller is expected to have established presence first, via
    /// [`is_just`](Self::is_just), [`get_or_else`](Self::get_or_else), or
    /// pattern matching; this is not meant to be caught as routine control
    /// flow.
    ///
    /// # Panics
    ///
    /// Panics with "cannot get value of Nothing" if `self` is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).unsafe_get(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn unsafe_get(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("cannot get value of Nothing"),
        }
    }

    /// Returns the contained value, or `otherwise` if `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).get_or_else(0), 5);
    /// assert_eq!(Maybe::nothing().get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, otherwise: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => otherwise,
        }
    }

    /// Returns `self` if `Just`, else a `Just` containing `otherwise`.
    ///
    /// The result is always `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).or_else(0), Maybe::Just(5));
    /// assert_eq!(Maybe::nothing().or_else(0), Maybe::Just(0));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, otherwise: T) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => Self::Just(otherwise),
        }
    }

    /// Returns the contained value as a nullable.
    ///
    /// `Just(value)` becomes `Some(value)` and `Nothing` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).as_nullable(), Some(5));
    /// assert_eq!(Maybe::<i32>::nothing().as_nullable(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_nullable(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// let text = Maybe::just("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Just(5));
    /// // text is still available here
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flattens a `Maybe<Maybe<T>>` to a `Maybe<T>`.
    ///
    /// An outer `Nothing` flattens to `Nothing`; otherwise the result is the
    /// inner `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(5)).flatten(), Maybe::Just(5));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::Nothing);
    /// assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn flatten(self) -> Maybe<T> {
        self.get_or_else(Maybe::Nothing)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.as_nullable()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing()"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> FunctorMut for Maybe<T> {
    #[inline]
    fn fmap_mut<B, F>(self, mut function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|value| function(value))
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, mut function: F) -> Maybe<B>
    where
        F: FnMut(&T) -> B,
    {
        self.as_ref().map(|value| function(value))
    }
}

impl<T> Foldable for Maybe<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Just(value) => function(init, value),
            Self::Nothing => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, init),
            Self::Nothing => init,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
