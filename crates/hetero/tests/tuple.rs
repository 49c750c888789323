//! Tuples of injected values through the public facade.

use hetero::prelude::*;
use hetero::tuple::Folder;
use hetero::{drop_while, fold_left, take_while, Predicate, I3};
use hetero_test::injection::{x, X};

/// True below `X<2>`, False from `X<2>` on.
struct BelowTwo;

impl Predicate<X<0>> for BelowTwo {
    type Output = True;

    fn test(&mut self, _: &X<0>) -> True {
        TRUE
    }
}

impl Predicate<X<1>> for BelowTwo {
    type Output = True;

    fn test(&mut self, _: &X<1>) -> True {
        TRUE
    }
}

impl Predicate<X<2>> for BelowTwo {
    type Output = False;

    fn test(&mut self, _: &X<2>) -> False {
        FALSE
    }
}

#[test]
fn test_tuple_t_and_tuple_c_are_make_tuple_shorthands() {
    assert_eq!(tuple_t![X<0>, u8], make_tuple!(type_::<X<0>>(), type_::<u8>()));
    assert_eq!(
        tuple_c![usize; 0, 1],
        make_tuple!(integral_c::<usize, 0>(), integral_c::<usize, 1>())
    );
}

#[test]
fn test_take_while_and_drop_while_split_by_type() {
    let xs = tuple![x::<0>(), x::<1>(), x::<2>(), x::<0>()];
    assert_eq!(take_while(xs, BelowTwo), tuple![x::<0>(), x::<1>()]);
    assert_eq!(drop_while(xs, BelowTwo), tuple![x::<2>(), x::<0>()]);
    assert_eq!(*xs.at::<I3>(), x::<0>());
}

#[test]
fn test_fold_left_over_injected_values() {
    let xs = tuple![x::<3>(), x::<1>(), x::<4>()];
    let digits = fold_left(xs, Vec::<usize>::new(), Accumulate);
    assert_eq!(digits, vec![3, 1, 4]);
}

struct Accumulate;

impl<const N: usize> Folder<Vec<usize>, X<N>> for Accumulate {
    type Output = Vec<usize>;

    fn fold(&mut self, mut acc: Vec<usize>, _: X<N>) -> Vec<usize> {
        acc.push(N);
        acc
    }
}
