//! Heterogeneous tuples.
//!
//! A tuple is a cons list: [`Cons`] holds one element and the rest of the
//! tuple, [`Nil`] ends it. Elements are stored inline and by value, and
//! every sequence of element types is its own type. The [`tuple!`] and
//! [`Tuple!`] macros hide the nesting:
//!
//! ```
//! use hetero_core::{tuple, Sequence, Tuple, I1};
//!
//! let xs: Tuple![i32, &str, char] = tuple![1, "two", '3'];
//! assert_eq!(xs.len(), 3);
//! assert_eq!(*xs.at::<I1>(), "two");
//! ```
//!
//! Every tuple has the tag [`TupleTag`] and is Comparable, Orderable
//! (lexicographically) and a Functor.

mod construct;
mod index;
mod instances;
mod sequence;


use std::fmt;

use crate::datatype::Datatype;

pub use construct::{AssignFrom, ConvertInto, IntoNative};
pub use index::{
    At, DynElements, I0, I1, I10, I11, I12, I13, I14, I15, I2, I3, I4, I5, I6, I7, I8, I9, S, Z,
};
pub use instances::{AdjustElements, EqualElements, LessElements};
pub use sequence::{
    drop_while, fold_left, take_while, Append, Concat, DropWhile, DropWhileStep, FoldLeft, Folder,
    ReverseInto, Sequence, TakeWhile, TakeWhileStep,
};

/// The empty tuple.
#[derive(Clone, Copy, Default, Hash)]
pub struct Nil;

/// A tuple with at least one element: `head` followed by the tuple `tail`.
#[derive(Clone, Copy, Default, Hash)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

/// Tag shared by every tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TupleTag;

impl Datatype for Nil {
    type Tag = TupleTag;
}

impl<H, T> Datatype for Cons<H, T> {
    type Tag = TupleTag;
}

/// Implemented by [`Nil`] and by every [`Cons`] list ending in `Nil`.
pub trait HList: Sized {
    /// Number of elements.
    const LEN: usize;
}

impl HList for Nil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Writes each element of a tuple into a `DebugTuple`.
pub trait DebugElements {
    fn debug_elements(&self, out: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugElements for Nil {
    fn debug_elements(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<H: fmt::Debug, T: DebugElements> DebugElements for Cons<H, T> {
    fn debug_elements(&self, out: &mut fmt::DebugTuple<'_, '_>) {
        out.field(&self.head);
        self.tail.debug_elements(out);
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl<H: fmt::Debug, T: DebugElements> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_tuple("");
        self.debug_elements(&mut out);
        out.finish()
    }
}

/// Builds a tuple from its elements.
#[macro_export]
macro_rules! tuple {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons { head: $head, tail: $crate::tuple![$($tail),*] }
    };
}

/// The type of a tuple with the given element types.
#[macro_export]
macro_rules! Tuple {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::Tuple![$($tail),*]>
    };
}

/// Builds a tuple through `make::<TupleTag, _>`, inferring every element
/// type from its argument.
///
/// Arguments are moved in by value and keep their types exactly: passing
/// `&x` stores a reference, so clone or copy first to store an owned value.
///
/// ```
/// use hetero_core::{make_tuple, Sequence, I0};
///
/// let name = String::from("a");
/// let borrowed = make_tuple!(&name);
/// let _: &&String = borrowed.at::<I0>();
/// let owned = make_tuple!(name.clone());
/// let _: &String = owned.at::<I0>();
/// ```
#[macro_export]
macro_rules! make_tuple {
    ($($x:expr),* $(,)?) => {
        $crate::make::<$crate::TupleTag, _>($crate::tuple![$($x),*])
    };
}

/// A tuple of [`Type`](crate::Type) values, one per listed type.
///
/// Equal to `make_tuple!(type_::<A>(), type_::<B>(), ...)` but built
/// without any argument expressions.
#[macro_export]
macro_rules! tuple_t {
    ($($t:ty),* $(,)?) => {
        $crate::tuple![$($crate::Type::<$t>::new()),*]
    };
}

/// A tuple of [`IntegralConstant`](crate::IntegralConstant)s of type `T`.
///
/// `tuple_c![i32; 1, 2]` equals `make_tuple!(integral_c::<i32, 1>(),
/// integral_c::<i32, 2>())`. Every value must fit in `T`:
///
/// ```compile_fail
/// use hetero_core::tuple_c;
///
/// let _ = tuple_c![u8; 256, 0];
/// ```
#[macro_export]
macro_rules! tuple_c {
    ($t:ty; $($v:expr),* $(,)?) => {
        $crate::tuple![$($crate::IntegralConstant::<$t, { $v }>::new()),*]
    };
}
