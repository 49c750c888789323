//! The `Orderable` concept: a strict ordering between values.
//!
//! Two minimal complete definitions are available:
//!
//! ```text
//! LessMcd (primitive less)            LessEqualMcd (primitive less_equal)
//! less_equal(x, y)    = !less(y, x)   less(x, y)          = !less_equal(y, x)
//! greater(x, y)       = less(y, x)    greater(x, y)       = !less_equal(x, y)
//! greater_equal(x, y) = !less(x, y)   greater_equal(x, y) = less_equal(y, x)
//! min(x, y)           = if_(less(x, y), x, y)
//! max(x, y)           = if_(less(x, y), y, x)
//! ```
//!
//! The derivations swap the arguments, so an instance for `(T, U)` under
//! either MCD also needs the primitive for `(U, T)`.
//!
//! `min` and `max` take their arguments by value and live in a separate
//! trait ([`OrderableMinMax`]): with a runtime `bool` ordering they need
//! both arguments to share a type, which the comparisons themselves do not.
//!
//! ```
//! use hetero_core::{greater_equal, less_equal, max, min};
//!
//! assert!(less_equal(&1i32, &1i32));
//! assert!(!greater_equal(&'a', &'b'));
//! assert_eq!(min(3u8, 7u8), 3);
//! assert_eq!(max("pear", "apple"), "pear");
//! ```

use super::logical::{Negate, NotOutput, Select};
use crate::datatype::{Datatype, TagOf};

/// Registers the `Orderable` instance for the tag pair `(Self, U)`.
pub trait Orderable<X, Y, U = Self> {
    /// Minimal complete definition used by this instance.
    type Mcd;
}

/// `less` primitive, required by [`LessMcd`].
pub trait LessImpl<X, Y, U = Self> {
    type Output;

    fn less_impl(x: &X, y: &Y) -> Self::Output;
}

/// `less_equal` primitive, required by [`LessEqualMcd`].
pub trait LessEqualImpl<X, Y, U = Self> {
    type Output;

    fn less_equal_impl(x: &X, y: &Y) -> Self::Output;
}

/// Comparison operations of `Orderable`, implemented by each MCD marker.
pub trait OrderableMcd<T, U, X, Y> {
    type Less;
    type LessEqual;
    type Greater;
    type GreaterEqual;

    fn less(x: &X, y: &Y) -> Self::Less;

    fn less_equal(x: &X, y: &Y) -> Self::LessEqual;

    fn greater(x: &X, y: &Y) -> Self::Greater;

    fn greater_equal(x: &X, y: &Y) -> Self::GreaterEqual;
}

/// `min` and `max` of `Orderable`, implemented by each MCD marker.
pub trait OrderableMinMax<T, U, X, Y> {
    type Min;
    type Max;

    fn min(x: X, y: Y) -> Self::Min;

    fn max(x: X, y: Y) -> Self::Max;
}

/// Derives `Orderable` from `less`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessMcd;

/// Derives `Orderable` from `less_equal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessEqualMcd;

impl<T, U, X, Y> OrderableMcd<T, U, X, Y> for LessMcd
where
    T: LessImpl<X, Y, U>,
    U: LessImpl<Y, X, T>,
    <T as LessImpl<X, Y, U>>::Output: Negate,
    <U as LessImpl<Y, X, T>>::Output: Negate,
{
    type Less = <T as LessImpl<X, Y, U>>::Output;
    type LessEqual = NotOutput<<U as LessImpl<Y, X, T>>::Output>;
    type Greater = <U as LessImpl<Y, X, T>>::Output;
    type GreaterEqual = NotOutput<<T as LessImpl<X, Y, U>>::Output>;

    #[inline]
    fn less(x: &X, y: &Y) -> Self::Less {
        T::less_impl(x, y)
    }

    #[inline]
    fn less_equal(x: &X, y: &Y) -> Self::LessEqual {
        U::less_impl(y, x).negate()
    }

    #[inline]
    fn greater(x: &X, y: &Y) -> Self::Greater {
        U::less_impl(y, x)
    }

    #[inline]
    fn greater_equal(x: &X, y: &Y) -> Self::GreaterEqual {
        T::less_impl(x, y).negate()
    }
}

impl<T, U, X, Y> OrderableMcd<T, U, X, Y> for LessEqualMcd
where
    T: LessEqualImpl<X, Y, U>,
    U: LessEqualImpl<Y, X, T>,
    <T as LessEqualImpl<X, Y, U>>::Output: Negate,
    <U as LessEqualImpl<Y, X, T>>::Output: Negate,
{
    type Less = NotOutput<<U as LessEqualImpl<Y, X, T>>::Output>;
    type LessEqual = <T as LessEqualImpl<X, Y, U>>::Output;
    type Greater = NotOutput<<T as LessEqualImpl<X, Y, U>>::Output>;
    type GreaterEqual = <U as LessEqualImpl<Y, X, T>>::Output;

    #[inline]
    fn less(x: &X, y: &Y) -> Self::Less {
        U::less_equal_impl(y, x).negate()
    }

    #[inline]
    fn less_equal(x: &X, y: &Y) -> Self::LessEqual {
        T::less_equal_impl(x, y)
    }

    #[inline]
    fn greater(x: &X, y: &Y) -> Self::Greater {
        T::less_equal_impl(x, y).negate()
    }

    #[inline]
    fn greater_equal(x: &X, y: &Y) -> Self::GreaterEqual {
        U::less_equal_impl(y, x)
    }
}

impl<T, U, X, Y> OrderableMinMax<T, U, X, Y> for LessMcd
where
    T: LessImpl<X, Y, U>,
    <T as LessImpl<X, Y, U>>::Output: Select<X, Y> + Select<Y, X>,
{
    type Min = <<T as LessImpl<X, Y, U>>::Output as Select<X, Y>>::Output;
    type Max = <<T as LessImpl<X, Y, U>>::Output as Select<Y, X>>::Output;

    #[inline]
    fn min(x: X, y: Y) -> Self::Min {
        T::less_impl(&x, &y).select(x, y)
    }

    #[inline]
    fn max(x: X, y: Y) -> Self::Max {
        T::less_impl(&x, &y).select(y, x)
    }
}

impl<T, U, X, Y> OrderableMinMax<T, U, X, Y> for LessEqualMcd
where
    T: LessEqualImpl<X, Y, U>,
    <T as LessEqualImpl<X, Y, U>>::Output: Select<X, Y> + Select<Y, X>,
{
    type Min = <<T as LessEqualImpl<X, Y, U>>::Output as Select<X, Y>>::Output;
    type Max = <<T as LessEqualImpl<X, Y, U>>::Output as Select<Y, X>>::Output;

    #[inline]
    fn min(x: X, y: Y) -> Self::Min {
        T::less_equal_impl(&x, &y).select(x, y)
    }

    #[inline]
    fn max(x: X, y: Y) -> Self::Max {
        T::less_equal_impl(&x, &y).select(y, x)
    }
}

/// The MCD selected for ordering `X` against `Y`.
pub type OrderableMcdOf<X, Y> = <TagOf<X> as Orderable<X, Y, TagOf<Y>>>::Mcd;

/// Value-level view of the `Orderable` comparisons.
pub trait OrderWith<Y> {
    type Less;
    type LessEqual;
    type Greater;
    type GreaterEqual;

    fn less_than(&self, y: &Y) -> Self::Less;

    fn less_equal(&self, y: &Y) -> Self::LessEqual;

    fn greater_than(&self, y: &Y) -> Self::Greater;

    fn greater_equal(&self, y: &Y) -> Self::GreaterEqual;
}

impl<X, Y> OrderWith<Y> for X
where
    X: Datatype,
    Y: Datatype,
    TagOf<X>: Orderable<X, Y, TagOf<Y>>,
    OrderableMcdOf<X, Y>: OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>,
{
    type Less = <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::Less;
    type LessEqual = <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::LessEqual;
    type Greater = <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::Greater;
    type GreaterEqual =
        <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::GreaterEqual;

    #[inline]
    fn less_than(&self, y: &Y) -> Self::Less {
        <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::less(self, y)
    }

    #[inline]
    fn less_equal(&self, y: &Y) -> Self::LessEqual {
        <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::less_equal(self, y)
    }

    #[inline]
    fn greater_than(&self, y: &Y) -> Self::Greater {
        <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::greater(self, y)
    }

    #[inline]
    fn greater_equal(&self, y: &Y) -> Self::GreaterEqual {
        <OrderableMcdOf<X, Y> as OrderableMcd<TagOf<X>, TagOf<Y>, X, Y>>::greater_equal(self, y)
    }
}

/// Value-level view of `min` and `max`.
pub trait MinMaxWith<Y>: Sized {
    type Min;
    type Max;

    fn min_with(self, y: Y) -> Self::Min;

    fn max_with(self, y: Y) -> Self::Max;
}

impl<X, Y> MinMaxWith<Y> for X
where
    X: Datatype,
    Y: Datatype,
    TagOf<X>: Orderable<X, Y, TagOf<Y>>,
    OrderableMcdOf<X, Y>: OrderableMinMax<TagOf<X>, TagOf<Y>, X, Y>,
{
    type Min = <OrderableMcdOf<X, Y> as OrderableMinMax<TagOf<X>, TagOf<Y>, X, Y>>::Min;
    type Max = <OrderableMcdOf<X, Y> as OrderableMinMax<TagOf<X>, TagOf<Y>, X, Y>>::Max;

    #[inline]
    fn min_with(self, y: Y) -> Self::Min {
        <OrderableMcdOf<X, Y> as OrderableMinMax<TagOf<X>, TagOf<Y>, X, Y>>::min(self, y)
    }

    #[inline]
    fn max_with(self, y: Y) -> Self::Max {
        <OrderableMcdOf<X, Y> as OrderableMinMax<TagOf<X>, TagOf<Y>, X, Y>>::max(self, y)
    }
}

pub type LessOutput<X, Y> = <X as OrderWith<Y>>::Less;
pub type LessEqualOutput<X, Y> = <X as OrderWith<Y>>::LessEqual;
pub type GreaterOutput<X, Y> = <X as OrderWith<Y>>::Greater;
pub type GreaterEqualOutput<X, Y> = <X as OrderWith<Y>>::GreaterEqual;
pub type MinOutput<X, Y> = <X as MinMaxWith<Y>>::Min;
pub type MaxOutput<X, Y> = <X as MinMaxWith<Y>>::Max;

/// Whether `x` is strictly less than `y`.
#[inline]
pub fn less<X: OrderWith<Y>, Y>(x: &X, y: &Y) -> LessOutput<X, Y> {
    x.less_than(y)
}

/// Whether `x` is less than or equal to `y`.
#[inline]
pub fn less_equal<X: OrderWith<Y>, Y>(x: &X, y: &Y) -> LessEqualOutput<X, Y> {
    x.less_equal(y)
}

/// Whether `x` is strictly greater than `y`.
#[inline]
pub fn greater<X: OrderWith<Y>, Y>(x: &X, y: &Y) -> GreaterOutput<X, Y> {
    x.greater_than(y)
}

/// Whether `x` is greater than or equal to `y`.
#[inline]
pub fn greater_equal<X: OrderWith<Y>, Y>(x: &X, y: &Y) -> GreaterEqualOutput<X, Y> {
    x.greater_equal(y)
}

/// The smaller of `x` and `y`; `y` when they are equivalent.
#[inline]
pub fn min<X: MinMaxWith<Y>, Y>(x: X, y: Y) -> MinOutput<X, Y> {
    x.min_with(y)
}

/// The larger of `x` and `y`; `x` when they are equivalent.
#[inline]
pub fn max<X: MinMaxWith<Y>, Y>(x: X, y: Y) -> MaxOutput<X, Y> {
    x.max_with(y)
}
