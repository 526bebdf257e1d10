//! Functor type class - mapping over container values.
//!
//! This module provides the [`Functor`] trait, which represents types that
//! can have a function applied to their inner value(s) while preserving the
//! structure, and [`FunctorMut`], its extension for containers with more
//! than one element.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor returns an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their
//! composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funrs::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved
//! let none_value: Option<i32> = None;
//! let transformed: Option<String> = none_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value(s)
/// inside a container while preserving the container's structure.
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed, or when the inner
    /// type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    ///
    /// let y: Option<i32> = None;
    /// assert_eq!(y.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful when only the structure of the functor matters, not the value
    /// it contains. Equivalent to `replace(())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// An extension of `Functor` for containers with multiple elements.
///
/// While [`Functor::fmap`] takes a `FnOnce` (which can only be called once),
/// containers like `Vec` or [`Node`](crate::node::Node) need to apply the
/// function to multiple elements. This trait provides `fmap_mut` which takes
/// a `FnMut` that can be called multiple times.
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::FunctorMut;
///
/// let numbers = vec![1, 2, 3];
/// let doubled: Vec<i32> = numbers.fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: Functor {
    /// Applies a mutable function to each element in the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funrs::typeclass::FunctorMut;
    ///
    /// let v = vec![1, 2, 3];
    /// let result: Vec<i32> = v.fmap_mut(|x| x + 1);
    /// assert_eq!(result, vec![2, 3, 4]);
    /// ```
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    ///
    /// Like [`Functor::fmap_ref`], but can be called multiple times.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> FunctorMut for Option<A> {
    #[inline]
    fn fmap_mut<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(|value| function(value))
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, mut function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(|value| function(value))
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<T> Functor for Vec<T> {
    fn fmap<B, F>(mut self, function: F) -> Vec<B>
    where
        F: FnOnce(T) -> B,
    {
        // FnOnce can only be called once, so this only works for the first
        // element; use FunctorMut::fmap_mut for whole-container mapping
        self.drain(..)
            .next()
            .map_or_else(Vec::new, |element| vec![function(element)])
    }

    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.first()
            .map_or_else(Vec::new, |element| vec![function(element)])
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&T) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}
