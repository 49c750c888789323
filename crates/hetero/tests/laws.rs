//! Concept laws checked over the shared fixtures.

use hetero::prelude::*;
use hetero_test::injection::{x, Ordinal};
use hetero_test::laws::{check_comparable, check_logical, check_orderable, check_reflexive, numeric};
use hetero_test::numeric::Numeric;
use hetero_test::pair::Pair;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_numeric_comparable(a in numeric(), b in numeric()) {
        check_reflexive(&a);
        check_comparable(&a, &b);
    }

    #[test]
    fn prop_numeric_orderable(a in numeric(), b in numeric()) {
        check_orderable(&a, &b);
        prop_assert_eq!(less_equal(&a, &b), !less(&b, &a));
        prop_assert_eq!(min(a, b), if less(&a, &b) { a } else { b });
        prop_assert_eq!(max(a, b), if less(&a, &b) { b } else { a });
    }

    #[test]
    fn prop_numeric_logical(a in numeric(), b in numeric()) {
        check_logical(a, b);
    }

    #[test]
    fn prop_scalars_follow_the_laws(a in any::<i64>(), b in any::<i64>()) {
        check_comparable(&a, &b);
        check_orderable(&a, &b);
    }

    #[test]
    fn prop_bool_logical(a in any::<bool>(), b in any::<bool>()) {
        check_logical(a, b);
    }

    #[test]
    fn prop_tuple_ordering_is_lexicographic(a in any::<(i16, i16)>(), b in any::<(i16, i16)>()) {
        let (ta, tb) = (tuple![a.0, a.1], tuple![b.0, b.1]);
        check_orderable(&ta, &tb);
        prop_assert_eq!(less(&ta, &tb), a < b);
        prop_assert_eq!(equal(&ta, &tb), a == b);
    }
}

#[test]
fn test_injected_values_follow_the_laws() {
    check_reflexive(&x::<0>());
    check_comparable(&x::<0>(), &x::<1>());
    check_orderable(&x::<0>(), &x::<1>());
    check_orderable(&x::<2>(), &x::<2>());
    check_orderable(&tuple![x::<0>(), x::<1>()], &tuple![x::<0>(), x::<2>()]);
}

#[test]
fn test_compile_time_booleans_follow_the_laws() {
    check_comparable(&TRUE, &FALSE);
    check_orderable(&FALSE, &TRUE);
    check_reflexive(&FALSE);
}

#[test]
fn test_functor_identity() {
    let xs = tuple![x::<0>(), 1, 'c'];
    struct Identity;
    impl<T> hetero::Mapper<T> for Identity {
        type Output = T;
        fn map(&mut self, x: T) -> T {
            x
        }
    }
    assert_eq!(transform(xs, Identity), xs);
    assert_eq!(transform(Pair::new(1, "a"), Identity), Pair::new(1, "a"));
}

#[test]
fn test_functor_equations() {
    let xs = tuple![1, 2, 3, 4];
    let even = |x: &i32| x % 2 == 0;

    // replace(xs, p, v) == adjust(xs, p, always(v))
    assert_eq!(replace(xs, even, 0), adjust(xs, even, hetero::always(0)));
    // fill(xs, v) == replace(xs, always(TRUE), v)
    assert_eq!(fill(xs, 9), replace(xs, hetero::always(TRUE), 9));
    // transform(xs, f) == adjust(xs, always(TRUE), f)
    assert_eq!(
        transform(xs, |x: i32| x * x),
        adjust(xs, hetero::always(TRUE), |x: i32| x * x)
    );
    // adjust with a predicate that never holds is the identity
    assert_eq!(adjust(xs, hetero::always(false), |x: i32| x + 1), xs);
}

#[test]
fn test_transform_agrees_across_functor_mcds() {
    let via_tuple = transform(tuple![x::<3>(), x::<8>()], Ordinal);
    let via_pair = transform(Pair::new(x::<3>(), x::<8>()), Ordinal);
    assert_eq!(via_tuple, tuple![via_pair.first, via_pair.second]);
}

#[test]
fn test_numeric_instances_agree_with_operators() {
    let values = [Numeric(-1), Numeric(0), Numeric(2)];
    for a in values {
        for b in values {
            assert_eq!(a == b, equal(&a, &b));
            assert_eq!(a < b, less(&a, &b));
        }
    }
}
