//! A two-slot container whose Functor instance only defines `transform`.
//!
//! `adjust`, `replace` and `fill` on a [`Pair`] are all derived by the
//! transform MCD, which makes it the counterpart of tuples (whose instance
//! defines `adjust` only).
//!
//! # Example
//!
//! ```
//! use hetero::{fill, transform};
//! use hetero_test::pair::Pair;
//!
//! assert_eq!(transform(Pair::new(1, 2), |x: i32| x * 2), Pair::new(2, 4));
//! assert_eq!(fill(Pair::new(1, 'c'), "f"), Pair::new("f", "f"));
//! ```

use hetero::{
    Comparable, CompareWith, Datatype, EqualImpl, EqualMcd, Functor, IntoBool, Mapper, Operators,
    TransformImpl, TransformMcd,
};

#[derive(Debug, Clone, Copy, Default, Hash, Datatype, Operators)]
#[datatype(tag = PairTag)]
#[operators(Comparable)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

/// Tag of every [`Pair`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PairTag;

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B, C, D> Comparable<Pair<A, B>, Pair<C, D>> for PairTag {
    type Mcd = EqualMcd;
}

impl<A, B, C, D> EqualImpl<Pair<A, B>, Pair<C, D>> for PairTag
where
    A: CompareWith<C>,
    B: CompareWith<D>,
    <A as CompareWith<C>>::Equal: IntoBool,
    <B as CompareWith<D>>::Equal: IntoBool,
{
    type Output = bool;

    fn equal_impl(x: &Pair<A, B>, y: &Pair<C, D>) -> bool {
        x.first.equal_to(&y.first).to_bool() && x.second.equal_to(&y.second).to_bool()
    }
}

impl<A, B> Functor<Pair<A, B>> for PairTag {
    type Mcd = TransformMcd;
}

impl<A, B, F> TransformImpl<Pair<A, B>, F> for PairTag
where
    F: Mapper<A> + Mapper<B>,
{
    type Output = Pair<<F as Mapper<A>>::Output, <F as Mapper<B>>::Output>;

    fn transform_impl(xs: Pair<A, B>, mut f: F) -> Self::Output {
        let first = f.map(xs.first);
        let second = f.map(xs.second);
        Pair { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hetero::{adjust, equal, replace};

    #[test]
    fn test_equality_across_element_types() {
        assert!(equal(&Pair::new(1, "a"), &Pair::new(1, String::from("a"))));
        assert!(Pair::new('x', 2u8) != Pair::new('x', 3u8));
    }

    #[test]
    fn test_derived_adjust_and_replace() {
        let p = adjust(Pair::new(3, 10), |x: &i32| *x > 5, |x: i32| -x);
        assert_eq!(p, Pair::new(3, -10));
        assert_eq!(replace(Pair::new(3, 3), |x: &i32| *x == 3, 0), Pair::new(0, 0));
    }
}
