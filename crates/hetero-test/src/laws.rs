//! Generic assertions for the concept laws.
//!
//! Every checker panics with a message naming the broken law, so they can
//! be called from plain tests and from `proptest!` bodies alike.
//!
//! # Example
//!
//! ```
//! use hetero_test::laws::{check_comparable, check_orderable};
//! use hetero_test::numeric::Numeric;
//!
//! check_comparable(&Numeric(1), &Numeric(2));
//! check_orderable(&Numeric(1), &Numeric(2));
//! ```

use std::fmt::Debug;

use hetero::{CompareWith, IntoBool, Negate, OrderWith, Select};
use proptest::prelude::*;

use crate::numeric::Numeric;

/// `not_equal(x, y) == !equal(x, y)`, and equality is symmetric.
pub fn check_comparable<X, Y>(x: &X, y: &Y)
where
    X: CompareWith<Y> + Debug,
    Y: CompareWith<X> + Debug,
    <X as CompareWith<Y>>::Equal: IntoBool,
    <X as CompareWith<Y>>::NotEqual: IntoBool,
    <Y as CompareWith<X>>::Equal: IntoBool,
{
    let eq = x.equal_to(y).to_bool();
    assert_eq!(
        x.not_equal_to(y).to_bool(),
        !eq,
        "not_equal is not the negation of equal for {x:?} and {y:?}"
    );
    assert_eq!(
        y.equal_to(x).to_bool(),
        eq,
        "equal is not symmetric for {x:?} and {y:?}"
    );
}

/// `x == x` and `!(x != x)`.
pub fn check_reflexive<X>(x: &X)
where
    X: CompareWith<X> + Debug,
    <X as CompareWith<X>>::Equal: IntoBool,
    <X as CompareWith<X>>::NotEqual: IntoBool,
{
    assert!(x.equal_to(x).to_bool(), "{x:?} is not equal to itself");
    assert!(!x.not_equal_to(x).to_bool(), "{x:?} is not_equal to itself");
}

/// The derived comparisons agree with `less` and exactly one of
/// `less`, `equal`, `greater` holds.
pub fn check_orderable<X, Y>(x: &X, y: &Y)
where
    X: OrderWith<Y> + CompareWith<Y> + Debug,
    Y: OrderWith<X> + Debug,
    <X as OrderWith<Y>>::Less: IntoBool,
    <X as OrderWith<Y>>::LessEqual: IntoBool,
    <X as OrderWith<Y>>::Greater: IntoBool,
    <X as OrderWith<Y>>::GreaterEqual: IntoBool,
    <X as CompareWith<Y>>::Equal: IntoBool,
    <Y as OrderWith<X>>::Less: IntoBool,
{
    let lt = x.less_than(y).to_bool();
    let gt = x.greater_than(y).to_bool();
    let eq = x.equal_to(y).to_bool();

    assert_eq!(
        gt,
        y.less_than(x).to_bool(),
        "greater(x, y) != less(y, x) for {x:?} and {y:?}"
    );
    assert_eq!(
        x.less_equal(y).to_bool(),
        !gt,
        "less_equal(x, y) != !greater(x, y) for {x:?} and {y:?}"
    );
    assert_eq!(
        x.greater_equal(y).to_bool(),
        !lt,
        "greater_equal(x, y) != !less(x, y) for {x:?} and {y:?}"
    );
    assert_eq!(
        usize::from(lt) + usize::from(eq) + usize::from(gt),
        1,
        "trichotomy fails for {x:?} and {y:?}"
    );
}

/// `not_(not_(x))` is truthy exactly when `x` is, and `and_`/`or_` agree
/// with the runtime connectives.
pub fn check_logical<X>(x: X, y: X)
where
    X: Clone + Debug + IntoBool + Negate + Select<X, X, Output = X>,
    <X as Negate>::Output: Negate,
    <<X as Negate>::Output as Negate>::Output: IntoBool,
{
    let bx = x.clone().to_bool();
    let by = y.clone().to_bool();
    let twice = x.clone().negate().negate().to_bool();
    assert_eq!(twice, bx, "not_(not_(x)) changed the truth of {x:?}");
    assert_eq!(
        hetero::and_(x.clone(), y.clone()).to_bool(),
        bx && by,
        "and_ disagrees with && for {x:?} and {y:?}"
    );
    assert_eq!(
        hetero::or_(x.clone(), y.clone()).to_bool(),
        bx || by,
        "or_ disagrees with || for {x:?} and {y:?}"
    );
}

/// Arbitrary [`Numeric`] values, biased towards zero so that falsy values
/// and ties show up.
pub fn numeric() -> impl Strategy<Value = Numeric> {
    prop_oneof![Just(0i32), -3i32..=3, any::<i32>()].prop_map(Numeric)
}
