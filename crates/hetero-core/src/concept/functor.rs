//! The `Functor` concept: structure-preserving maps over containers.
//!
//! Minimal complete definitions:
//!
//! - [`TransformMcd`]: supply [`TransformImpl`]. `adjust(xs, pred, f)` is
//!   `transform(xs, |x| if_(pred(x), f(x), x))`, which clones `f` for
//!   every element.
//! - [`AdjustMcd`]: supply [`AdjustImpl`]. `transform(xs, f)` is
//!   `adjust(xs, always(TRUE), f)`.
//!
//! Both derive `replace(xs, pred, v) = adjust(xs, pred, always(v))` and
//! `fill(xs, v) = replace(xs, always(TRUE), v)`.
//!
//! Functions are [`Mapper`]s and predicates are [`Predicate`]s. Closures
//! qualify for homogeneous data; a type implementing `Mapper<X>` for several
//! `X` maps every element of a heterogeneous tuple.
//!
//! ```
//! use hetero_core::{adjust, fill, transform, tuple};
//!
//! let xs = transform(tuple![1, 2, 3], |x: i32| x * 10);
//! assert_eq!(xs, tuple![10, 20, 30]);
//!
//! let xs = adjust(tuple![1, 2, 3], |x: &i32| *x > 1, |x: i32| -x);
//! assert_eq!(xs, tuple![1, -2, -3]);
//!
//! assert_eq!(fill(tuple![1, 2], 'z'), tuple!['z', 'z']);
//! ```

use super::logical::{Branch, EvalIfWith};
use crate::datatype::{Datatype, TagOf};
use crate::integral::{True, TRUE};

/// A function applied to values of type `X`.
pub trait Mapper<X> {
    type Output;

    fn map(&mut self, x: X) -> Self::Output;
}

impl<F, X, O> Mapper<X> for F
where
    F: FnMut(X) -> O,
{
    type Output = O;

    #[inline]
    fn map(&mut self, x: X) -> O {
        self(x)
    }
}

/// A test applied to values of type `X`, returning a Logical value.
pub trait Predicate<X> {
    type Output;

    fn test(&mut self, x: &X) -> Self::Output;
}

impl<F, X, B> Predicate<X> for F
where
    F: FnMut(&X) -> B,
{
    type Output = B;

    #[inline]
    fn test(&mut self, x: &X) -> B {
        self(x)
    }
}

/// Ignores its argument and returns a clone of the held value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always<V>(pub V);

/// Builds an [`Always`].
#[inline]
pub fn always<V>(value: V) -> Always<V> {
    Always(value)
}

impl<V: Clone, X> Mapper<X> for Always<V> {
    type Output = V;

    #[inline]
    fn map(&mut self, _: X) -> V {
        self.0.clone()
    }
}

impl<V: Clone, X> Predicate<X> for Always<V> {
    type Output = V;

    #[inline]
    fn test(&mut self, _: &X) -> V {
        self.0.clone()
    }
}

/// Branch applying a mapper to the element and handing the mapper back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apply;

/// Branch returning the element unchanged along with the mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keep;

impl<X, F: Mapper<X>> Branch<(X, F)> for Apply {
    type Output = (F::Output, F);

    #[inline]
    fn run(self, (x, mut f): (X, F)) -> Self::Output {
        let y = f.map(x);
        (y, f)
    }
}

impl<X, F> Branch<(X, F)> for Keep {
    type Output = (X, F);

    #[inline]
    fn run(self, arg: (X, F)) -> (X, F) {
        arg
    }
}

/// Mapper applying `f` only where `pred` holds. Used by [`TransformMcd`]
/// to derive `adjust`.
#[derive(Debug, Clone)]
pub struct Adjusting<P, F> {
    pred: P,
    f: F,
}

impl<P, F> Adjusting<P, F> {
    pub fn new(pred: P, f: F) -> Self {
        Self { pred, f }
    }
}

impl<P, F, X, O> Mapper<X> for Adjusting<P, F>
where
    P: Predicate<X>,
    F: Clone,
    P::Output: EvalIfWith<(X, F), Apply, Keep, Output = (O, F)>,
{
    type Output = O;

    #[inline]
    fn map(&mut self, x: X) -> O {
        let cond = self.pred.test(&x);
        let (y, _) = cond.eval_if_with((x, self.f.clone()), Apply, Keep);
        y
    }
}

/// Registers the `Functor` instance for containers `Xs`, implemented on
/// their tag.
pub trait Functor<Xs> {
    /// Minimal complete definition used by this instance.
    type Mcd;
}

/// `transform` primitive, required by [`TransformMcd`].
pub trait TransformImpl<Xs, F> {
    type Output;

    fn transform_impl(xs: Xs, f: F) -> Self::Output;
}

/// `adjust` primitive, required by [`AdjustMcd`].
pub trait AdjustImpl<Xs, P, F> {
    type Output;

    fn adjust_impl(xs: Xs, pred: P, f: F) -> Self::Output;
}

/// `transform` as provided by an MCD for tag `T`.
pub trait FunctorTransform<T, Xs, F> {
    type Output;

    fn transform(xs: Xs, f: F) -> Self::Output;
}

/// `adjust` as provided by an MCD for tag `T`.
pub trait FunctorAdjust<T, Xs, P, F> {
    type Output;

    fn adjust(xs: Xs, pred: P, f: F) -> Self::Output;
}

/// Derives `Functor` from `transform`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformMcd;

/// Derives `Functor` from `adjust`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjustMcd;

impl<T, Xs, F> FunctorTransform<T, Xs, F> for TransformMcd
where
    T: TransformImpl<Xs, F>,
{
    type Output = T::Output;

    #[inline]
    fn transform(xs: Xs, f: F) -> Self::Output {
        T::transform_impl(xs, f)
    }
}

impl<T, Xs, P, F> FunctorAdjust<T, Xs, P, F> for TransformMcd
where
    T: TransformImpl<Xs, Adjusting<P, F>>,
{
    type Output = T::Output;

    #[inline]
    fn adjust(xs: Xs, pred: P, f: F) -> Self::Output {
        T::transform_impl(xs, Adjusting::new(pred, f))
    }
}

impl<T, Xs, P, F> FunctorAdjust<T, Xs, P, F> for AdjustMcd
where
    T: AdjustImpl<Xs, P, F>,
{
    type Output = T::Output;

    #[inline]
    fn adjust(xs: Xs, pred: P, f: F) -> Self::Output {
        T::adjust_impl(xs, pred, f)
    }
}

impl<T, Xs, F> FunctorTransform<T, Xs, F> for AdjustMcd
where
    T: AdjustImpl<Xs, Always<True>, F>,
{
    type Output = T::Output;

    #[inline]
    fn transform(xs: Xs, f: F) -> Self::Output {
        T::adjust_impl(xs, always(TRUE), f)
    }
}

/// The MCD selected for containers of type `Xs`.
pub type FunctorMcdOf<Xs> = <TagOf<Xs> as Functor<Xs>>::Mcd;

/// Value-level view of `transform`.
pub trait Transform<F>: Sized {
    type Output;

    fn transform_with(self, f: F) -> Self::Output;
}

impl<Xs, F> Transform<F> for Xs
where
    Xs: Datatype,
    TagOf<Xs>: Functor<Xs>,
    FunctorMcdOf<Xs>: FunctorTransform<TagOf<Xs>, Xs, F>,
{
    type Output = <FunctorMcdOf<Xs> as FunctorTransform<TagOf<Xs>, Xs, F>>::Output;

    #[inline]
    fn transform_with(self, f: F) -> Self::Output {
        <FunctorMcdOf<Xs> as FunctorTransform<TagOf<Xs>, Xs, F>>::transform(self, f)
    }
}

/// Value-level view of `adjust`.
pub trait Adjust<P, F>: Sized {
    type Output;

    fn adjust_with(self, pred: P, f: F) -> Self::Output;
}

impl<Xs, P, F> Adjust<P, F> for Xs
where
    Xs: Datatype,
    TagOf<Xs>: Functor<Xs>,
    FunctorMcdOf<Xs>: FunctorAdjust<TagOf<Xs>, Xs, P, F>,
{
    type Output = <FunctorMcdOf<Xs> as FunctorAdjust<TagOf<Xs>, Xs, P, F>>::Output;

    #[inline]
    fn adjust_with(self, pred: P, f: F) -> Self::Output {
        <FunctorMcdOf<Xs> as FunctorAdjust<TagOf<Xs>, Xs, P, F>>::adjust(self, pred, f)
    }
}

pub type TransformOutput<Xs, F> = <Xs as Transform<F>>::Output;
pub type AdjustOutput<Xs, P, F> = <Xs as Adjust<P, F>>::Output;
pub type ReplaceOutput<Xs, P, V> = <Xs as Adjust<P, Always<V>>>::Output;
pub type FillOutput<Xs, V> = <Xs as Adjust<Always<True>, Always<V>>>::Output;

/// Applies `f` to every element.
#[inline]
pub fn transform<Xs, F>(xs: Xs, f: F) -> TransformOutput<Xs, F>
where
    Xs: Transform<F>,
{
    xs.transform_with(f)
}

/// Applies `f` to the elements satisfying `pred`.
#[inline]
pub fn adjust<Xs, P, F>(xs: Xs, pred: P, f: F) -> AdjustOutput<Xs, P, F>
where
    Xs: Adjust<P, F>,
{
    xs.adjust_with(pred, f)
}

/// Replaces the elements satisfying `pred` with `value`.
#[inline]
pub fn replace<Xs, P, V>(xs: Xs, pred: P, value: V) -> ReplaceOutput<Xs, P, V>
where
    Xs: Adjust<P, Always<V>>,
{
    xs.adjust_with(pred, always(value))
}

/// Replaces every element with `value`.
#[inline]
pub fn fill<Xs, V>(xs: Xs, value: V) -> FillOutput<Xs, V>
where
    Xs: Adjust<Always<True>, Always<V>>,
{
    replace(xs, always(TRUE), value)
}
