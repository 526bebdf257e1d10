//! Type class traits for the containers in this crate.
//!
//! This module provides a small type-class vocabulary:
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation through GAT
//! - [`Functor`] / [`FunctorMut`]: mapping over container values
//! - [`Foldable`]: reducing container values to a summary
//!
//! [`Maybe`](crate::maybe::Maybe) and [`Node`](crate::node::Node) implement
//! all of them, alongside the standard library containers (`Option`, `Vec`,
//! ...), so generic code can abstract over "a container of `T`" without
//! naming the concrete structure.

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
