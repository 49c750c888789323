//! Element-wise construction, conversion and assignment.
//!
//! Each operation exists only when every element supports it. `Clone`,
//! `Copy`, `Default` and `Hash` are derived on [`Cons`] and [`Nil`] and
//! follow the same rule. A tuple holding a non-`Default` element has no
//! `default()`:
//!
//! ```compile_fail
//! use hetero_core::Tuple;
//!
//! struct NoDefault;
//!
//! let _: Tuple![i32, NoDefault] = Default::default();
//! ```
//!
//! and converting needs `From` at every position:
//!
//! ```compile_fail
//! use hetero_core::{tuple, Sequence, Tuple};
//!
//! let _: Tuple![i64, u8] = tuple![1i32, 300i32].convert();
//! ```

use super::{Cons, Nil};

/// Element-wise conversion into a tuple of the same length.
pub trait ConvertInto<Target> {
    fn convert_into(self) -> Target;
}

impl ConvertInto<Nil> for Nil {
    #[inline]
    fn convert_into(self) -> Nil {
        Nil
    }
}

impl<H, T, H2, T2> ConvertInto<Cons<H2, T2>> for Cons<H, T>
where
    H2: From<H>,
    T: ConvertInto<T2>,
{
    #[inline]
    fn convert_into(self) -> Cons<H2, T2> {
        Cons::new(H2::from(self.head), self.tail.convert_into())
    }
}

/// Element-wise assignment from a tuple of the same length, taken by value
/// or by reference.
pub trait AssignFrom<Src> {
    fn assign_from(&mut self, src: Src);
}

impl AssignFrom<Nil> for Nil {
    #[inline]
    fn assign_from(&mut self, _: Nil) {}
}

impl<'a> AssignFrom<&'a Nil> for Nil {
    #[inline]
    fn assign_from(&mut self, _: &'a Nil) {}
}

impl<H, T, H2, T2> AssignFrom<Cons<H2, T2>> for Cons<H, T>
where
    H: From<H2>,
    T: AssignFrom<T2>,
{
    #[inline]
    fn assign_from(&mut self, src: Cons<H2, T2>) {
        self.head = H::from(src.head);
        self.tail.assign_from(src.tail);
    }
}

impl<'a, H, T, H2, T2> AssignFrom<&'a Cons<H2, T2>> for Cons<H, T>
where
    H: From<H2>,
    H2: Clone,
    T: AssignFrom<&'a T2>,
{
    #[inline]
    fn assign_from(&mut self, src: &'a Cons<H2, T2>) {
        self.head = H::from(src.head.clone());
        self.tail.assign_from(&src.tail);
    }
}

/// Conversion into the built-in tuple with the same elements.
pub trait IntoNative {
    type Native;

    fn into_native(self) -> Self::Native;
}

impl IntoNative for Nil {
    type Native = ();

    #[inline]
    fn into_native(self) {}
}

impl From<()> for Nil {
    #[inline]
    fn from(_: ()) -> Nil {
        Nil
    }
}

macro_rules! cons_pattern {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => {
        Cons { head: $head, tail: cons_pattern!($($tail),*) }
    };
}

macro_rules! impl_native {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> From<($($ty,)+)> for crate::Tuple![$($ty),+] {
            #[inline]
            fn from(native: ($($ty,)+)) -> Self {
                let ($($var,)+) = native;
                crate::tuple![$($var),+]
            }
        }

        impl<$($ty),+> IntoNative for crate::Tuple![$($ty),+] {
            type Native = ($($ty,)+);

            #[inline]
            fn into_native(self) -> Self::Native {
                let cons_pattern!($($var),+) = self;
                ($($var,)+)
            }
        }
    };
}

macro_rules! impl_native_up_to {
    () => {};
    ($ty:ident $var:ident $(, $rest_ty:ident $rest_var:ident)*) => {
        impl_native!($ty $var $(, $rest_ty $rest_var)*);
        impl_native_up_to!($($rest_ty $rest_var),*);
    };
}

impl_native_up_to!(
    A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l
);
