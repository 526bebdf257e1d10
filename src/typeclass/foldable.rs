//! Foldable type class - folding over data structures.
//!
//! This module provides the [`Foldable`] trait, which represents types that
//! can have their elements reduced (folded) into a single value.
//!
//! # Laws
//!
//! `Foldable` has no formal laws as strict as other type classes, but
//! implementations should satisfy these properties:
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative operations, `fold_left` and `fold_right` produce the same
//! result:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funrs::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! let result = none_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::TypeConstructor;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: left-associative fold
/// - `fold_right`: right-associative fold
///
/// All other methods have default implementations based on `fold_left`.
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::Foldable;
///
/// let values = vec![1, 2, 3, 4, 5];
/// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// In Rust this is typically implemented by reversing the iteration
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// assert!(!Some(5).is_empty());
    /// assert!(None::<i32>.is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// assert_eq!(Some(5).length(), 1);
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is determined by the fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(values.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// assert!(values.exists(|element| *element > 2));
    /// assert!(!values.exists(|element| *element > 10));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Foldable;
    ///
    /// let values = vec![2, 4, 6];
    /// assert!(values.for_all(|element| *element % 2 == 0));
    /// assert!(!values.for_all(|element| *element > 5));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(true, |accumulator, element| accumulator && predicate(&element))
    }
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(value) => function(value, init),
            Err(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_err()
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        usize::from(self.is_ok())
    }
}

impl<T> Foldable for Vec<T> {
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
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

impl<T> Foldable for Box<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(init, *self)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        function(*self, init)
    }

    /// A box always contains exactly one element.
    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        false
    }

    /// A box always contains exactly one element.
    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        1
    }
}
