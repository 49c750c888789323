//! Concept instances for tuples: Comparable, Orderable, Functor and Make.

use super::{Cons, HList, Nil, TupleTag};
use crate::concept::comparable::{Comparable, CompareWith, EqualImpl, EqualMcd};
use crate::concept::functor::{AdjustImpl, AdjustMcd, Apply, Functor, Keep, Predicate};
use crate::concept::logical::{EvalIfWith, IntoBool};
use crate::concept::orderable::{LessImpl, LessMcd, OrderWith, Orderable};
use crate::make::Make;

/// Element-wise equality. Tuples of different lengths are never equal.
pub trait EqualElements<Rhs> {
    fn equal_elements(&self, rhs: &Rhs) -> bool;
}

impl EqualElements<Nil> for Nil {
    #[inline]
    fn equal_elements(&self, _: &Nil) -> bool {
        true
    }
}

impl<H, T> EqualElements<Cons<H, T>> for Nil {
    #[inline]
    fn equal_elements(&self, _: &Cons<H, T>) -> bool {
        false
    }
}

impl<H, T> EqualElements<Nil> for Cons<H, T> {
    #[inline]
    fn equal_elements(&self, _: &Nil) -> bool {
        false
    }
}

impl<H1, T1, H2, T2> EqualElements<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: CompareWith<H2>,
    <H1 as CompareWith<H2>>::Equal: IntoBool,
    T1: EqualElements<T2>,
{
    #[inline]
    fn equal_elements(&self, rhs: &Cons<H2, T2>) -> bool {
        self.head.equal_to(&rhs.head).to_bool() && self.tail.equal_elements(&rhs.tail)
    }
}

/// Lexicographic `less`. A proper prefix is less than the tuple it prefixes.
pub trait LessElements<Rhs> {
    fn less_elements(&self, rhs: &Rhs) -> bool;
}

impl LessElements<Nil> for Nil {
    #[inline]
    fn less_elements(&self, _: &Nil) -> bool {
        false
    }
}

impl<H, T> LessElements<Cons<H, T>> for Nil {
    #[inline]
    fn less_elements(&self, _: &Cons<H, T>) -> bool {
        true
    }
}

impl<H, T> LessElements<Nil> for Cons<H, T> {
    #[inline]
    fn less_elements(&self, _: &Nil) -> bool {
        false
    }
}

impl<H1, T1, H2, T2> LessElements<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: OrderWith<H2>,
    H2: OrderWith<H1>,
    <H1 as OrderWith<H2>>::Less: IntoBool,
    <H2 as OrderWith<H1>>::Less: IntoBool,
    T1: LessElements<T2>,
{
    fn less_elements(&self, rhs: &Cons<H2, T2>) -> bool {
        if self.head.less_than(&rhs.head).to_bool() {
            true
        } else if rhs.head.less_than(&self.head).to_bool() {
            false
        } else {
            self.tail.less_elements(&rhs.tail)
        }
    }
}

/// Applies `f` to the elements satisfying `pred`, threading `f` through
/// the elements in order.
pub trait AdjustElements<P, F> {
    type Output;

    fn adjust_elements(self, pred: &mut P, f: F) -> (Self::Output, F);
}

impl<P, F> AdjustElements<P, F> for Nil {
    type Output = Nil;

    #[inline]
    fn adjust_elements(self, _: &mut P, f: F) -> (Nil, F) {
        (Nil, f)
    }
}

impl<H, T, P, F, O> AdjustElements<P, F> for Cons<H, T>
where
    P: Predicate<H>,
    P::Output: EvalIfWith<(H, F), Apply, Keep, Output = (O, F)>,
    T: AdjustElements<P, F>,
{
    type Output = Cons<O, T::Output>;

    #[inline]
    fn adjust_elements(self, pred: &mut P, f: F) -> (Self::Output, F) {
        let cond = pred.test(&self.head);
        let (head, f) = cond.eval_if_with((self.head, f), Apply, Keep);
        let (tail, f) = self.tail.adjust_elements(pred, f);
        (Cons::new(head, tail), f)
    }
}

impl<X, Y> Comparable<X, Y> for TupleTag {
    type Mcd = EqualMcd;
}

impl<X, Y> EqualImpl<X, Y> for TupleTag
where
    X: EqualElements<Y>,
{
    type Output = bool;

    #[inline]
    fn equal_impl(x: &X, y: &Y) -> bool {
        x.equal_elements(y)
    }
}

impl<X, Y> Orderable<X, Y> for TupleTag {
    type Mcd = LessMcd;
}

impl<X, Y> LessImpl<X, Y> for TupleTag
where
    X: LessElements<Y>,
{
    type Output = bool;

    #[inline]
    fn less_impl(x: &X, y: &Y) -> bool {
        x.less_elements(y)
    }
}

impl<Xs> Functor<Xs> for TupleTag {
    type Mcd = AdjustMcd;
}

impl<Xs, P, F> AdjustImpl<Xs, P, F> for TupleTag
where
    Xs: AdjustElements<P, F>,
{
    type Output = Xs::Output;

    #[inline]
    fn adjust_impl(xs: Xs, mut pred: P, f: F) -> Self::Output {
        xs.adjust_elements(&mut pred, f).0
    }
}

impl<L: HList> Make<L> for TupleTag {
    type Output = L;

    #[inline]
    fn make(args: L) -> L {
        args
    }
}

crate::impl_operators!(Nil: Comparable, Orderable);
crate::impl_operators!([H, T] Cons<H, T>: Comparable, Orderable);
