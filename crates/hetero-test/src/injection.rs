//! Pairwise-distinct element types for heterogeneous tests.
//!
//! `X<0>`, `X<1>`, ... are different types that all share [`XTag`], so a
//! tuple of them is heterogeneous while every element stays Comparable
//! and Orderable with every other one. `X<N>` equals `X<M>` exactly when
//! `N == M`.
//!
//! # Example
//!
//! ```
//! use hetero::{equal, less, tuple};
//! use hetero_test::injection::x;
//!
//! let xs = tuple![x::<0>(), x::<1>(), x::<2>()];
//! assert!(equal(&xs, &tuple![x::<0>(), x::<1>(), x::<2>()]));
//! assert!(less(&x::<1>(), &x::<2>()));
//! ```

use std::fmt;

use hetero::{
    impl_operators, Comparable, Datatype, EqualImpl, EqualMcd, LessImpl, LessMcd, Mapper,
    Orderable,
};

/// The `N`th injected value.
#[derive(Clone, Copy, Default, Hash)]
pub struct X<const N: usize>;

/// Tag shared by every `X<N>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct XTag;

/// Creates `X<N>`.
pub const fn x<const N: usize>() -> X<N> {
    X
}

impl<const N: usize> X<N> {
    pub const INDEX: usize = N;
}

impl<const N: usize> fmt::Debug for X<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x<{N}>")
    }
}

impl<const N: usize> Datatype for X<N> {
    type Tag = XTag;
}

impl<const N: usize, const M: usize> Comparable<X<N>, X<M>> for XTag {
    type Mcd = EqualMcd;
}

impl<const N: usize, const M: usize> EqualImpl<X<N>, X<M>> for XTag {
    type Output = bool;

    fn equal_impl(_: &X<N>, _: &X<M>) -> bool {
        N == M
    }
}

impl<const N: usize, const M: usize> Orderable<X<N>, X<M>> for XTag {
    type Mcd = LessMcd;
}

impl<const N: usize, const M: usize> LessImpl<X<N>, X<M>> for XTag {
    type Output = bool;

    fn less_impl(_: &X<N>, _: &X<M>) -> bool {
        N < M
    }
}

impl_operators!([const N: usize] X<N>: Comparable, Orderable);

/// Maps every `X<N>` to `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordinal;

impl<const N: usize> Mapper<X<N>> for Ordinal {
    type Output = usize;

    fn map(&mut self, _: X<N>) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hetero::{greater_equal, transform, tuple};

    #[test]
    fn test_distinct_indices_compare_by_index() {
        assert_eq!(x::<3>(), x::<3>());
        assert_ne!(x::<3>(), x::<4>());
        assert!(x::<3>() < x::<4>());
        assert!(greater_equal(&x::<4>(), &x::<4>()));
        assert_eq!(X::<7>::INDEX, 7);
        assert_eq!(format!("{:?}", x::<2>()), "x<2>");
    }

    #[test]
    fn test_ordinal_maps_each_element() {
        let xs = transform(tuple![x::<0>(), x::<5>(), x::<2>()], Ordinal);
        assert_eq!(xs, tuple![0usize, 5usize, 2usize]);
    }
}
