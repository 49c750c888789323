//! `make::<SetTag, _>` against set literals, over injected elements.

use hetero::prelude::*;
use hetero::SetTag;
use hetero_test::injection::x;

#[test]
fn test_make_without_elements_is_the_empty_set() {
    assert_eq!(make::<SetTag, _>(tuple![]), set![]);
    assert_eq!(make_set!(), set![]);
}

#[test]
fn test_make_with_one_element() {
    assert_eq!(make::<SetTag, _>(tuple![x::<0>()]), set![x::<0>()]);
    assert_ne!(make::<SetTag, _>(tuple![x::<0>()]), set![x::<1>()]);
}

#[test]
fn test_make_with_distinct_elements() {
    let made = make::<SetTag, _>(tuple![x::<0>(), x::<1>(), x::<2>()]);
    assert_eq!(made, set![x::<0>(), x::<1>(), x::<2>()]);
    assert_eq!(made, set![x::<2>(), x::<0>(), x::<1>()]);
    assert_eq!(made.len(), 3);
    assert_ne!(made, set![x::<0>(), x::<1>()]);
}

#[test]
fn test_repeated_elements_collapse() {
    let made = make_set!(x::<4>(), x::<4>(), x::<5>());
    assert_eq!(made.len(), 2);
    assert_eq!(made, set![x::<5>(), x::<4>()]);
}
