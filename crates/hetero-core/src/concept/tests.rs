use std::cell::Cell;

use super::*;
use crate::datatype::Datatype;
use crate::integral::{False, True, FALSE, TRUE};
use crate::{impl_operators, tuple};

/// A value compared through `not_equal`.
#[derive(Debug, Clone, Copy)]
struct Code(u8);

impl Datatype for Code {
    type Tag = Code;
}

impl Comparable<Code, Code> for Code {
    type Mcd = NotEqualMcd;
}

impl NotEqualImpl<Code, Code> for Code {
    type Output = bool;

    fn not_equal_impl(x: &Code, y: &Code) -> bool {
        x.0 != y.0
    }
}

/// A value ordered through `less_equal` on `key`; `label` is never compared.
#[derive(Debug, Clone, Copy)]
struct Rank {
    key: i32,
    label: char,
}

fn rank(key: i32, label: char) -> Rank {
    Rank { key, label }
}

impl Datatype for Rank {
    type Tag = Rank;
}

impl Comparable<Rank, Rank> for Rank {
    type Mcd = EqualMcd;
}

impl EqualImpl<Rank, Rank> for Rank {
    type Output = bool;

    fn equal_impl(x: &Rank, y: &Rank) -> bool {
        x.key == y.key
    }
}

impl Orderable<Rank, Rank> for Rank {
    type Mcd = LessEqualMcd;
}

impl LessEqualImpl<Rank, Rank> for Rank {
    type Output = bool;

    fn less_equal_impl(x: &Rank, y: &Rank) -> bool {
        x.key <= y.key
    }
}

impl_operators!(Rank: Comparable, Orderable);

/// A value in one of several numbered lanes, ordered across lanes.
#[derive(Debug, Clone, Copy)]
struct Lane<const N: usize>(u8);

#[derive(Debug, Clone, Copy, Default)]
struct LaneTag;

impl<const N: usize> Datatype for Lane<N> {
    type Tag = LaneTag;
}

impl<const N: usize, const M: usize> Comparable<Lane<N>, Lane<M>> for LaneTag {
    type Mcd = EqualMcd;
}

impl<const N: usize, const M: usize> EqualImpl<Lane<N>, Lane<M>> for LaneTag {
    type Output = bool;

    fn equal_impl(x: &Lane<N>, y: &Lane<M>) -> bool {
        x.0 == y.0
    }
}

impl<const N: usize, const M: usize> Orderable<Lane<N>, Lane<M>> for LaneTag {
    type Mcd = LessMcd;
}

impl<const N: usize, const M: usize> LessImpl<Lane<N>, Lane<M>> for LaneTag {
    type Output = bool;

    fn less_impl(x: &Lane<N>, y: &Lane<M>) -> bool {
        x.0 < y.0
    }
}

impl_operators!([const N: usize] Lane<N>: Orderable);

/// A two-slot container mapped through `transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Twin<A, B>(A, B);

#[derive(Debug, Clone, Copy, Default)]
struct TwinTag;

impl<A, B> Datatype for Twin<A, B> {
    type Tag = TwinTag;
}

impl<A, B> Functor<Twin<A, B>> for TwinTag {
    type Mcd = TransformMcd;
}

impl<A, B, F> TransformImpl<Twin<A, B>, F> for TwinTag
where
    F: Mapper<A> + Mapper<B>,
{
    type Output = Twin<<F as Mapper<A>>::Output, <F as Mapper<B>>::Output>;

    fn transform_impl(xs: Twin<A, B>, mut f: F) -> Self::Output {
        let a = f.map(xs.0);
        let b = f.map(xs.1);
        Twin(a, b)
    }
}

#[test]
fn test_runtime_logical_laws() {
    for x in [true, false] {
        assert_eq!(not_(not_(x)), x);
        for y in [true, false] {
            assert_eq!(and_(x, y), x && y);
            assert_eq!(or_(x, y), x || y);
        }
    }
    assert_eq!(if_(false, "then", "else"), "else");
    assert!(to_bool(true));
}

#[test]
fn test_runtime_eval_if_runs_only_the_taken_branch() {
    let runs = Cell::new(0);
    let picked = eval_if(
        true,
        |_: ()| {
            runs.set(runs.get() + 1);
            1
        },
        |_: ()| -> i32 { panic!("untaken branch ran") },
    );
    assert_eq!(picked, 1);
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_eval_if_with_moves_argument_into_branch() {
    let owned = String::from("moved");
    let len = eval_if_with(TRUE, owned, |s: String| s.len(), |_: String| -> f64 { 0.0 });
    assert_eq!(len, 5);
}

#[test]
fn test_compile_time_eval_if_ignores_untaken_branch() {
    let out: &str = eval_if(FALSE, |_: ()| -> Vec<u8> { panic!("untaken") }, |_: ()| "else");
    assert_eq!(out, "else");
    let _: True = and_(TRUE, TRUE);
    let _: False = or_(FALSE, FALSE);
}

#[test]
fn test_not_equal_mcd_derives_equal() {
    assert!(equal(&Code(1), &Code(1)));
    assert!(!equal(&Code(1), &Code(2)));
    assert!(not_equal(&Code(1), &Code(2)));
}

#[test]
fn test_less_equal_mcd_derives_everything() {
    let (a, b) = (rank(1, 'a'), rank(2, 'b'));
    assert!(less(&a, &b));
    assert!(!less(&a, &a));
    assert!(less_equal(&a, &a));
    assert!(greater(&b, &a));
    assert!(greater_equal(&b, &b));
    assert_eq!(min(a, b).key, 1);
    assert_eq!(max(a, b).key, 2);
    assert_eq!(min(b, a).label, 'a');
}

#[test]
fn test_less_equal_mcd_ties_follow_argument_order() {
    let (a, b) = (rank(5, 'a'), rank(5, 'b'));
    assert!(a == b);
    // min(x, y) = if_(less_equal(x, y), x, y)
    assert_eq!(min(a, b).label, 'a');
    assert_eq!(min(b, a).label, 'b');
    // max(x, y) = if_(less_equal(x, y), y, x)
    assert_eq!(max(a, b).label, 'b');
    assert_eq!(max(b, a).label, 'a');
    assert!(a <= b && a >= b && !(a < b));
}

#[test]
fn test_generic_orderable_opt_in_brings_equality() {
    use crate::operators::{operators_enabled, ComparableOps, OrderableOps};

    assert!(operators_enabled::<Lane<0>, OrderableOps>());
    assert!(operators_enabled::<Lane<0>, ComparableOps>());
    assert!(Lane::<0>(1) < Lane::<2>(4));
    assert!(Lane::<1>(4) >= Lane::<0>(4));
    assert!(Lane::<1>(4) == Lane::<3>(4));
    assert!(Lane::<1>(4) != Lane::<1>(5));
}

#[test]
fn test_transform_mcd_derives_adjust_replace_fill() {
    let twin = Twin(2, "two");
    struct Describe;
    impl Mapper<i32> for Describe {
        type Output = String;
        fn map(&mut self, x: i32) -> String {
            format!("int {x}")
        }
    }
    impl Mapper<&'static str> for Describe {
        type Output = String;
        fn map(&mut self, x: &'static str) -> String {
            format!("str {x}")
        }
    }

    assert_eq!(
        transform(twin, Describe),
        Twin(String::from("int 2"), String::from("str two"))
    );
    assert_eq!(transform(Twin(1, 2), |x: i32| x + 1), Twin(2, 3));
    assert_eq!(
        adjust(Twin(1, 9), |x: &i32| *x > 5, |x: i32| x * 10),
        Twin(1, 90)
    );
    assert_eq!(replace(Twin(4, 5), |x: &i32| *x == 4, 0), Twin(0, 5));
    assert_eq!(fill(Twin(1, 'x'), "f"), Twin("f", "f"));
}

#[test]
fn test_both_functor_mcds_agree_on_tuples() {
    let via_tuple = transform(tuple![1, 2], |x: i32| x * 3);
    let Twin(a, b) = transform(Twin(1, 2), |x: i32| x * 3);
    assert_eq!(via_tuple, tuple![a, b]);
}

#[test]
fn test_always_ignores_its_argument() {
    let mut a = always(7);
    assert_eq!(Mapper::<&str>::map(&mut a, "ignored"), 7);
    assert_eq!(Predicate::<u8>::test(&mut a, &0), 7);
}
