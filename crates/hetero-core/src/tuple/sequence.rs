//! Sequence operations on tuples.
//!
//! Operations that change the shape of a tuple are traits recursing over
//! the cons list; [`Sequence`] gathers them as methods on every tuple.
//! `take_while` and `drop_while` decide the length of their result, so
//! their predicates must answer with [`True`] or [`False`].

use std::any::{type_name, Any};

use super::construct::ConvertInto;
use super::index::{At, DynElements, Z};
use super::{Cons, HList, Nil};
use crate::concept::functor::Predicate;
use crate::error::{HeteroError, Result};
use crate::integral::{False, True};

/// Adds `X` after the last element.
pub trait Append<X> {
    type Output;

    fn append_element(self, x: X) -> Self::Output;
}

impl<X> Append<X> for Nil {
    type Output = Cons<X, Nil>;

    #[inline]
    fn append_element(self, x: X) -> Self::Output {
        Cons::new(x, Nil)
    }
}

impl<H, T, X> Append<X> for Cons<H, T>
where
    T: Append<X>,
{
    type Output = Cons<H, T::Output>;

    #[inline]
    fn append_element(self, x: X) -> Self::Output {
        Cons::new(self.head, self.tail.append_element(x))
    }
}

/// Joins two tuples.
pub trait Concat<R> {
    type Output;

    fn concat_tuple(self, rhs: R) -> Self::Output;
}

impl<R> Concat<R> for Nil {
    type Output = R;

    #[inline]
    fn concat_tuple(self, rhs: R) -> R {
        rhs
    }
}

impl<H, T, R> Concat<R> for Cons<H, T>
where
    T: Concat<R>,
{
    type Output = Cons<H, T::Output>;

    #[inline]
    fn concat_tuple(self, rhs: R) -> Self::Output {
        Cons::new(self.head, self.tail.concat_tuple(rhs))
    }
}

/// Pushes the elements, last first, onto the front of `Acc`.
pub trait ReverseInto<Acc> {
    type Output;

    fn reverse_into(self, acc: Acc) -> Self::Output;
}

impl<Acc> ReverseInto<Acc> for Nil {
    type Output = Acc;

    #[inline]
    fn reverse_into(self, acc: Acc) -> Acc {
        acc
    }
}

impl<H, T, Acc> ReverseInto<Acc> for Cons<H, T>
where
    T: ReverseInto<Cons<H, Acc>>,
{
    type Output = T::Output;

    #[inline]
    fn reverse_into(self, acc: Acc) -> Self::Output {
        self.tail.reverse_into(Cons::new(self.head, acc))
    }
}

/// A binary step function for [`FoldLeft`].
pub trait Folder<Acc, X> {
    type Output;

    fn fold(&mut self, acc: Acc, x: X) -> Self::Output;
}

impl<F, Acc, X, O> Folder<Acc, X> for F
where
    F: FnMut(Acc, X) -> O,
{
    type Output = O;

    #[inline]
    fn fold(&mut self, acc: Acc, x: X) -> O {
        self(acc, x)
    }
}

/// Left fold; the accumulator type may change at every element.
pub trait FoldLeft<Acc, F> {
    type Output;

    fn fold_left_with(self, acc: Acc, f: F) -> Self::Output;
}

impl<Acc, F> FoldLeft<Acc, F> for Nil {
    type Output = Acc;

    #[inline]
    fn fold_left_with(self, acc: Acc, _: F) -> Acc {
        acc
    }
}

impl<H, T, Acc, F> FoldLeft<Acc, F> for Cons<H, T>
where
    F: Folder<Acc, H>,
    T: FoldLeft<<F as Folder<Acc, H>>::Output, F>,
{
    type Output = T::Output;

    #[inline]
    fn fold_left_with(self, acc: Acc, mut f: F) -> Self::Output {
        let acc = f.fold(acc, self.head);
        self.tail.fold_left_with(acc, f)
    }
}

/// Keeps the longest prefix whose elements satisfy `P`.
pub trait TakeWhile<P> {
    type Output;

    fn take_while_with(self, pred: &mut P) -> Self::Output;
}

/// What `take_while` does with `head` given the predicate's answer.
pub trait TakeWhileStep<H, T, P> {
    type Output;

    fn step(head: H, tail: T, pred: &mut P) -> Self::Output;
}

impl<H, T, P> TakeWhileStep<H, T, P> for True
where
    T: TakeWhile<P>,
{
    type Output = Cons<H, T::Output>;

    #[inline]
    fn step(head: H, tail: T, pred: &mut P) -> Self::Output {
        Cons::new(head, tail.take_while_with(pred))
    }
}

impl<H, T, P> TakeWhileStep<H, T, P> for False {
    type Output = Nil;

    #[inline]
    fn step(_: H, _: T, _: &mut P) -> Nil {
        Nil
    }
}

impl<P> TakeWhile<P> for Nil {
    type Output = Nil;

    #[inline]
    fn take_while_with(self, _: &mut P) -> Nil {
        Nil
    }
}

impl<H, T, P> TakeWhile<P> for Cons<H, T>
where
    P: Predicate<H>,
    P::Output: TakeWhileStep<H, T, P>,
{
    type Output = <P::Output as TakeWhileStep<H, T, P>>::Output;

    #[inline]
    fn take_while_with(self, pred: &mut P) -> Self::Output {
        pred.test(&self.head);
        <P::Output as TakeWhileStep<H, T, P>>::step(self.head, self.tail, pred)
    }
}

/// Drops the longest prefix whose elements satisfy `P`.
pub trait DropWhile<P> {
    type Output;

    fn drop_while_with(self, pred: &mut P) -> Self::Output;
}

/// What `drop_while` does with `head` given the predicate's answer.
pub trait DropWhileStep<H, T, P> {
    type Output;

    fn step(head: H, tail: T, pred: &mut P) -> Self::Output;
}

impl<H, T, P> DropWhileStep<H, T, P> for True
where
    T: DropWhile<P>,
{
    type Output = T::Output;

    #[inline]
    fn step(_: H, tail: T, pred: &mut P) -> Self::Output {
        tail.drop_while_with(pred)
    }
}

impl<H, T, P> DropWhileStep<H, T, P> for False {
    type Output = Cons<H, T>;

    #[inline]
    fn step(head: H, tail: T, _: &mut P) -> Self::Output {
        Cons::new(head, tail)
    }
}

impl<P> DropWhile<P> for Nil {
    type Output = Nil;

    #[inline]
    fn drop_while_with(self, _: &mut P) -> Nil {
        Nil
    }
}

impl<H, T, P> DropWhile<P> for Cons<H, T>
where
    P: Predicate<H>,
    P::Output: DropWhileStep<H, T, P>,
{
    type Output = <P::Output as DropWhileStep<H, T, P>>::Output;

    #[inline]
    fn drop_while_with(self, pred: &mut P) -> Self::Output {
        pred.test(&self.head);
        <P::Output as DropWhileStep<H, T, P>>::step(self.head, self.tail, pred)
    }
}

/// Sequence operations, available on every tuple.
pub trait Sequence: HList {
    /// Number of elements.
    #[inline]
    fn len(&self) -> usize {
        Self::LEN
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// The element at compile-time position `I`.
    #[inline]
    fn at<I>(&self) -> &<Self as At<I>>::Output
    where
        Self: At<I>,
    {
        At::get(self)
    }

    #[inline]
    fn at_mut<I>(&mut self) -> &mut <Self as At<I>>::Output
    where
        Self: At<I>,
    {
        At::get_mut(self)
    }

    /// The first element; does not compile on the empty tuple.
    #[inline]
    fn front(&self) -> &<Self as At<Z>>::Output
    where
        Self: At<Z>,
    {
        At::get(self)
    }

    /// The element at runtime position `index`.
    fn get_dyn(&self, index: usize) -> Result<&dyn Any>
    where
        Self: DynElements,
    {
        self.element_dyn(index)
            .map(|(value, _)| value)
            .ok_or(HeteroError::IndexOutOfBounds {
                index,
                len: Self::LEN,
            })
    }

    /// The element at runtime position `index`, which must be a `T`.
    fn get_as<T: Any>(&self, index: usize) -> Result<&T>
    where
        Self: DynElements,
    {
        let (value, found) = self
            .element_dyn(index)
            .ok_or(HeteroError::IndexOutOfBounds {
                index,
                len: Self::LEN,
            })?;
        value.downcast_ref::<T>().ok_or(HeteroError::TypeMismatch {
            index,
            expected: type_name::<T>(),
            found,
        })
    }

    /// Element-wise `From` conversion into a tuple of the same length.
    #[inline]
    fn convert<U>(self) -> U
    where
        Self: ConvertInto<U>,
    {
        self.convert_into()
    }

    #[inline]
    fn prepend<X>(self, x: X) -> Cons<X, Self> {
        Cons::new(x, self)
    }

    #[inline]
    fn append<X>(self, x: X) -> <Self as Append<X>>::Output
    where
        Self: Append<X>,
    {
        self.append_element(x)
    }

    #[inline]
    fn concat<R>(self, rhs: R) -> <Self as Concat<R>>::Output
    where
        Self: Concat<R>,
    {
        self.concat_tuple(rhs)
    }

    #[inline]
    fn reverse(self) -> <Self as ReverseInto<Nil>>::Output
    where
        Self: ReverseInto<Nil>,
    {
        self.reverse_into(Nil)
    }

    #[inline]
    fn fold_left<Acc, F>(self, acc: Acc, f: F) -> <Self as FoldLeft<Acc, F>>::Output
    where
        Self: FoldLeft<Acc, F>,
    {
        self.fold_left_with(acc, f)
    }

    #[inline]
    fn take_while<P>(self, mut pred: P) -> <Self as TakeWhile<P>>::Output
    where
        Self: TakeWhile<P>,
    {
        self.take_while_with(&mut pred)
    }

    #[inline]
    fn drop_while<P>(self, mut pred: P) -> <Self as DropWhile<P>>::Output
    where
        Self: DropWhile<P>,
    {
        self.drop_while_with(&mut pred)
    }
}

impl<L: HList> Sequence for L {}

/// Free-function form of [`Sequence::take_while`].
#[inline]
pub fn take_while<Xs, P>(xs: Xs, pred: P) -> <Xs as TakeWhile<P>>::Output
where
    Xs: Sequence + TakeWhile<P>,
{
    Sequence::take_while(xs, pred)
}

/// Free-function form of [`Sequence::drop_while`].
#[inline]
pub fn drop_while<Xs, P>(xs: Xs, pred: P) -> <Xs as DropWhile<P>>::Output
where
    Xs: Sequence + DropWhile<P>,
{
    Sequence::drop_while(xs, pred)
}

/// Free-function form of [`Sequence::fold_left`].
#[inline]
pub fn fold_left<Xs, Acc, F>(xs: Xs, acc: Acc, f: F) -> <Xs as FoldLeft<Acc, F>>::Output
where
    Xs: Sequence + FoldLeft<Acc, F>,
{
    Sequence::fold_left(xs, acc, f)
}
