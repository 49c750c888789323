//! Operator sugar agrees with the concept operations it forwards to.

use hetero::prelude::*;
use hetero::{operators_enabled, ComparableOps, LogicalOps, OrderableOps};
use hetero_test::injection::{x, X};
use hetero_test::numeric::Numeric;
use proptest::prelude::*;

#[test]
fn test_opted_in_types_report_their_concepts() {
    assert!(operators_enabled::<Numeric, ComparableOps>());
    assert!(operators_enabled::<Numeric, OrderableOps>());
    assert!(operators_enabled::<Numeric, LogicalOps>());
    assert!(operators_enabled::<X<0>, OrderableOps>());
    assert!(operators_enabled::<True, LogicalOps>());
}

#[test]
fn test_compile_time_booleans_keep_their_types() {
    let _: False = !TRUE;
    let _: True = TRUE & TRUE;
    let _: False = TRUE & FALSE;
    let _: True = FALSE | TRUE;
    assert!(TRUE == TRUE);
    assert!(FALSE < TRUE);
}

#[test]
fn test_tuples_compare_with_operators() {
    assert!(tuple![x::<0>(), 1] == tuple![x::<0>(), 1]);
    assert!(tuple![x::<0>(), 1] < tuple![x::<0>(), 2]);
    assert!(tuple![x::<1>()] > tuple![x::<0>(), 7]);
}

proptest! {
    #[test]
    fn prop_comparison_operators_match_functions(
        a in hetero_test::laws::numeric(),
        b in hetero_test::laws::numeric(),
    ) {
        prop_assert_eq!(a == b, equal(&a, &b));
        prop_assert_eq!(a != b, not_equal(&a, &b));
        prop_assert_eq!(a < b, less(&a, &b));
        prop_assert_eq!(a <= b, less_equal(&a, &b));
        prop_assert_eq!(a > b, greater(&a, &b));
        prop_assert_eq!(a >= b, greater_equal(&a, &b));
    }

    #[test]
    fn prop_logical_operators_match_functions(
        a in hetero_test::laws::numeric(),
        b in hetero_test::laws::numeric(),
    ) {
        prop_assert_eq!(!a, not_(a));
        prop_assert_eq!(a & b, and_(a, b));
        prop_assert_eq!(a | b, or_(a, b));
    }
}
