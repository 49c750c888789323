//! The `Comparable` concept: equality between values of possibly different types.
//!
//! An instance lives on the left tag and is keyed by the right one:
//! `impl Comparable<X, Y, U> for T` makes values of type `X` (tag `T`)
//! comparable with values of type `Y` (tag `U`). The instance picks one of
//! two minimal complete definitions through its `Mcd` associated type:
//!
//! - [`EqualMcd`]: supply [`EqualImpl`]; `not_equal(x, y) = not_(equal(x, y))`.
//! - [`NotEqualMcd`]: supply [`NotEqualImpl`]; `equal(x, y) = not_(not_equal(x, y))`.
//!
//! Using a pair of types with no instance does not compile:
//!
//! ```compile_fail
//! use hetero_core::equal;
//!
//! let _ = equal(&1i32, &"one");
//! ```
//!
//! The `Mcd` is only checked when an operation is used, so a missing
//! primitive is reported at the call site rather than at the instance:
//!
//! ```compile_fail
//! use hetero_core::{equal, Comparable, Datatype, EqualMcd};
//!
//! struct Opaque;
//!
//! impl Datatype for Opaque {
//!     type Tag = Opaque;
//! }
//!
//! // Declares EqualMcd but never supplies EqualImpl.
//! impl Comparable<Opaque, Opaque> for Opaque {
//!     type Mcd = EqualMcd;
//! }
//!
//! let _ = equal(&Opaque, &Opaque);
//! ```

use super::logical::{Negate, NotOutput};
use crate::datatype::{Datatype, TagOf};

/// Registers the `Comparable` instance for the tag pair `(Self, U)`.
pub trait Comparable<X, Y, U = Self> {
    /// Minimal complete definition used by this instance.
    type Mcd;
}

/// `equal` primitive, required by [`EqualMcd`].
pub trait EqualImpl<X, Y, U = Self> {
    type Output;

    fn equal_impl(x: &X, y: &Y) -> Self::Output;
}

/// `not_equal` primitive, required by [`NotEqualMcd`].
pub trait NotEqualImpl<X, Y, U = Self> {
    type Output;

    fn not_equal_impl(x: &X, y: &Y) -> Self::Output;
}

/// Full operation set of `Comparable`, implemented by each MCD marker.
///
/// `T` and `U` are the tags of `X` and `Y`.
pub trait ComparableMcd<T, U, X, Y> {
    type Equal;
    type NotEqual;

    fn equal(x: &X, y: &Y) -> Self::Equal;

    fn not_equal(x: &X, y: &Y) -> Self::NotEqual;
}

/// Derives `Comparable` from `equal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualMcd;

/// Derives `Comparable` from `not_equal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEqualMcd;

impl<T, U, X, Y> ComparableMcd<T, U, X, Y> for EqualMcd
where
    T: EqualImpl<X, Y, U>,
    T::Output: Negate,
{
    type Equal = T::Output;
    type NotEqual = NotOutput<T::Output>;

    #[inline]
    fn equal(x: &X, y: &Y) -> Self::Equal {
        T::equal_impl(x, y)
    }

    #[inline]
    fn not_equal(x: &X, y: &Y) -> Self::NotEqual {
        T::equal_impl(x, y).negate()
    }
}

impl<T, U, X, Y> ComparableMcd<T, U, X, Y> for NotEqualMcd
where
    T: NotEqualImpl<X, Y, U>,
    T::Output: Negate,
{
    type Equal = NotOutput<T::Output>;
    type NotEqual = T::Output;

    #[inline]
    fn equal(x: &X, y: &Y) -> Self::Equal {
        T::not_equal_impl(x, y).negate()
    }

    #[inline]
    fn not_equal(x: &X, y: &Y) -> Self::NotEqual {
        T::not_equal_impl(x, y)
    }
}

/// The MCD selected for comparing `X` with `Y`.
pub type ComparableMcdOf<X, Y> = <TagOf<X> as Comparable<X, Y, TagOf<Y>>>::Mcd;

/// Value-level view of `Comparable`, resolved through both tags.
pub trait CompareWith<Y> {
    type Equal;
    type NotEqual;

    fn equal_to(&self, y: &Y) -> Self::Equal;

    fn not_equal_to(&self, y: &Y) -> Self::NotEqual;
}

impl<X, Y> CompareWith<Y> for X
where
    X: Datatype,
    Y: Datatype,
    TagOf<X>: Comparable<X, Y, TagOf<Y>>,
    ComparableMcdOf<X, Y>: ComparableMcd<TagOf<X>, TagOf<Y>, X, Y>,
{
    type Equal = <ComparableMcdOf<X, Y> as ComparableMcd<TagOf<X>, TagOf<Y>, X, Y>>::Equal;
    type NotEqual = <ComparableMcdOf<X, Y> as ComparableMcd<TagOf<X>, TagOf<Y>, X, Y>>::NotEqual;

    #[inline]
    fn equal_to(&self, y: &Y) -> Self::Equal {
        <ComparableMcdOf<X, Y> as ComparableMcd<TagOf<X>, TagOf<Y>, X, Y>>::equal(self, y)
    }

    #[inline]
    fn not_equal_to(&self, y: &Y) -> Self::NotEqual {
        <ComparableMcdOf<X, Y> as ComparableMcd<TagOf<X>, TagOf<Y>, X, Y>>::not_equal(self, y)
    }
}

/// Result of `equal(x, y)`.
pub type EqualOutput<X, Y> = <X as CompareWith<Y>>::Equal;

/// Result of `not_equal(x, y)`.
pub type NotEqualOutput<X, Y> = <X as CompareWith<Y>>::NotEqual;

/// Whether `x` and `y` are equal.
#[inline]
pub fn equal<X, Y>(x: &X, y: &Y) -> EqualOutput<X, Y>
where
    X: CompareWith<Y>,
{
    x.equal_to(y)
}

/// Whether `x` and `y` differ.
#[inline]
pub fn not_equal<X, Y>(x: &X, y: &Y) -> NotEqualOutput<X, Y>
where
    X: CompareWith<Y>,
{
    x.not_equal_to(y)
}
