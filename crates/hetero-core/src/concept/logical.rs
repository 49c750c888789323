//! The `Logical` concept: values that can drive a conditional.
//!
//! Minimal complete definition: `not_` ([`Logical`]) and `eval_if`
//! ([`EvalIf`]). Everything else is derived:
//!
//! ```text
//! if_(c, t, e) = eval_if(c, |_| t, |_| e)
//! and_(x, y)   = if_(x, y, x)
//! or_(x, y)    = if_(x, x, y)
//! to_bool(x)   = if_(x, true, false)
//! ```
//!
//! The derivations work the same for runtime `bool` and for the
//! compile-time booleans [`True`](crate::True) and [`False`](crate::False).
//! With a runtime condition both branches must produce the same type and
//! only the selected one runs. With a compile-time condition the untaken
//! branch is never run and its type does not take part in the result.
//!
//! ```
//! use hetero_core::{and_, eval_if, if_, not_, or_, FALSE, TRUE};
//!
//! assert_eq!(if_(true, 1, 2), 1);
//! assert!(!and_(true, false));
//!
//! // Branch types may differ when the condition is known at compile time.
//! let picked: &str = if_(TRUE, "yes", 0u8);
//! assert_eq!(picked, "yes");
//!
//! let n: i32 = eval_if(FALSE, |_: ()| -> i32 { unreachable!() }, |_| 7);
//! assert_eq!(n, 7);
//!
//! let _: hetero_core::False = not_(TRUE);
//! let _: hetero_core::True = or_(FALSE, TRUE);
//! ```

use crate::datatype::{Datatype, TagOf};

/// `Logical` instance for values of type `X`, implemented on `X`'s tag.
///
/// Supplies the `not_` primitive; the instance must also implement
/// [`EvalIf`] for its condition type.
pub trait Logical<X> {
    /// Result of negating an `X`.
    type Not;

    fn not_impl(x: X) -> Self::Not;
}

/// `eval_if` primitive for condition type `C`, implemented on `C`'s tag.
///
/// `arg` is handed to whichever branch is selected, so a value can be
/// moved into the conditional without committing to a branch.
pub trait EvalIf<C, A, Th, El> {
    type Output;

    fn eval_if_impl(cond: C, arg: A, then: Th, otherwise: El) -> Self::Output;
}

/// One arm of a conditional.
pub trait Branch<A> {
    type Output;

    fn run(self, arg: A) -> Self::Output;
}

impl<F, A, T> Branch<A> for F
where
    F: FnOnce(A) -> T,
{
    type Output = T;

    #[inline]
    fn run(self, arg: A) -> T {
        self(arg)
    }
}

/// Branch returning the first half of a `(then, else)` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeFirst;

/// Branch returning the second half of a `(then, else)` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeSecond;

impl<T, E> Branch<(T, E)> for TakeFirst {
    type Output = T;

    #[inline]
    fn run(self, (then, _): (T, E)) -> T {
        then
    }
}

impl<T, E> Branch<(T, E)> for TakeSecond {
    type Output = E;

    #[inline]
    fn run(self, (_, otherwise): (T, E)) -> E {
        otherwise
    }
}

/// Value-level view of `not_`.
pub trait Negate: Sized {
    type Output;

    fn negate(self) -> Self::Output;
}

impl<X> Negate for X
where
    X: Datatype,
    TagOf<X>: Logical<X>,
{
    type Output = <TagOf<X> as Logical<X>>::Not;

    #[inline]
    fn negate(self) -> Self::Output {
        <TagOf<X> as Logical<X>>::not_impl(self)
    }
}

/// Value-level view of `eval_if`, resolved through the condition's tag.
pub trait EvalIfWith<A, Th, El>: Sized {
    type Output;

    fn eval_if_with(self, arg: A, then: Th, otherwise: El) -> Self::Output;
}

impl<C, A, Th, El> EvalIfWith<A, Th, El> for C
where
    C: Datatype,
    TagOf<C>: EvalIf<C, A, Th, El>,
{
    type Output = <TagOf<C> as EvalIf<C, A, Th, El>>::Output;

    #[inline]
    fn eval_if_with(self, arg: A, then: Th, otherwise: El) -> Self::Output {
        <TagOf<C> as EvalIf<C, A, Th, El>>::eval_if_impl(self, arg, then, otherwise)
    }
}

/// Value-level view of `if_`.
pub trait Select<T, E>: Sized {
    type Output;

    fn select(self, then: T, otherwise: E) -> Self::Output;
}

impl<C, T, E> Select<T, E> for C
where
    C: EvalIfWith<(T, E), TakeFirst, TakeSecond>,
{
    type Output = <C as EvalIfWith<(T, E), TakeFirst, TakeSecond>>::Output;

    #[inline]
    fn select(self, then: T, otherwise: E) -> Self::Output {
        self.eval_if_with((then, otherwise), TakeFirst, TakeSecond)
    }
}

/// Collapses any Logical value to a runtime `bool`.
pub trait IntoBool {
    fn to_bool(self) -> bool;
}

impl<X> IntoBool for X
where
    X: Select<bool, bool, Output = bool>,
{
    #[inline]
    fn to_bool(self) -> bool {
        self.select(true, false)
    }
}

/// Result of `not_(x)`.
pub type NotOutput<X> = <X as Negate>::Output;

/// Result of `if_(c, t, e)`.
pub type IfOutput<C, T, E> = <C as Select<T, E>>::Output;

/// Result of `and_(x, y)`.
pub type AndOutput<X, Y> = <X as Select<Y, X>>::Output;

/// Result of `or_(x, y)`.
pub type OrOutput<X, Y> = <X as Select<X, Y>>::Output;

/// Logical negation.
#[inline]
pub fn not_<X: Negate>(x: X) -> NotOutput<X> {
    x.negate()
}

/// Runs `then(())` if `cond` holds and `otherwise(())` if it does not.
#[inline]
pub fn eval_if<C, Th, El>(cond: C, then: Th, otherwise: El) -> C::Output
where
    C: EvalIfWith<(), Th, El>,
{
    cond.eval_if_with((), then, otherwise)
}

/// Like [`eval_if`], moving `arg` into the selected branch.
#[inline]
pub fn eval_if_with<C, A, Th, El>(cond: C, arg: A, then: Th, otherwise: El) -> C::Output
where
    C: EvalIfWith<A, Th, El>,
{
    cond.eval_if_with(arg, then, otherwise)
}

/// `then` if `cond` holds, `otherwise` if not.
#[inline]
pub fn if_<C, T, E>(cond: C, then: T, otherwise: E) -> IfOutput<C, T, E>
where
    C: Select<T, E>,
{
    cond.select(then, otherwise)
}

/// Logical conjunction: `if_(x, y, x)`.
#[inline]
pub fn and_<X, Y>(x: X, y: Y) -> AndOutput<X, Y>
where
    X: Clone + Select<Y, X>,
{
    x.clone().select(y, x)
}

/// Logical disjunction: `if_(x, x, y)`.
#[inline]
pub fn or_<X, Y>(x: X, y: Y) -> OrOutput<X, Y>
where
    X: Clone + Select<X, Y>,
{
    x.clone().select(x, y)
}

/// Collapses a Logical value to a runtime `bool`.
#[inline]
pub fn to_bool<X: IntoBool>(x: X) -> bool {
    x.to_bool()
}

// Runtime booleans are the canonical Logical.

impl Logical<bool> for bool {
    type Not = bool;

    #[inline]
    fn not_impl(x: bool) -> bool {
        !x
    }
}

impl<A, Th, El, T> EvalIf<bool, A, Th, El> for bool
where
    Th: Branch<A, Output = T>,
    El: Branch<A, Output = T>,
{
    type Output = T;

    #[inline]
    fn eval_if_impl(cond: bool, arg: A, then: Th, otherwise: El) -> T {
        if cond {
            then.run(arg)
        } else {
            otherwise.run(arg)
        }
    }
}
