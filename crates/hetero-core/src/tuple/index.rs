//! Element access, by compile-time position and by runtime index.

use std::any::{type_name, Any};

use super::{Cons, Nil};

/// Position zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Z;

/// The position after `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct S<N>(N);

pub type I0 = Z;
pub type I1 = S<I0>;
pub type I2 = S<I1>;
pub type I3 = S<I2>;
pub type I4 = S<I3>;
pub type I5 = S<I4>;
pub type I6 = S<I5>;
pub type I7 = S<I6>;
pub type I8 = S<I7>;
pub type I9 = S<I8>;
pub type I10 = S<I9>;
pub type I11 = S<I10>;
pub type I12 = S<I11>;
pub type I13 = S<I12>;
pub type I14 = S<I13>;
pub type I15 = S<I14>;

/// Access to the element at position `I`.
///
/// Indexing past the end does not compile:
///
/// ```compile_fail
/// use hetero_core::{tuple, Sequence, I2};
///
/// let xs = tuple![1, 2];
/// let _ = xs.at::<I2>();
/// ```
pub trait At<I> {
    type Output;

    fn get(&self) -> &Self::Output;

    fn get_mut(&mut self) -> &mut Self::Output;

    fn take(self) -> Self::Output;
}

impl<H, T> At<Z> for Cons<H, T> {
    type Output = H;

    #[inline]
    fn get(&self) -> &H {
        &self.head
    }

    #[inline]
    fn get_mut(&mut self) -> &mut H {
        &mut self.head
    }

    #[inline]
    fn take(self) -> H {
        self.head
    }
}

impl<H, T, N> At<S<N>> for Cons<H, T>
where
    T: At<N>,
{
    type Output = T::Output;

    #[inline]
    fn get(&self) -> &Self::Output {
        self.tail.get()
    }

    #[inline]
    fn get_mut(&mut self) -> &mut Self::Output {
        self.tail.get_mut()
    }

    #[inline]
    fn take(self) -> Self::Output {
        self.tail.take()
    }
}

/// Type-erased access to elements by runtime index.
pub trait DynElements {
    /// The element at `index` and the name of its type, if there is one.
    fn element_dyn(&self, index: usize) -> Option<(&dyn Any, &'static str)>;
}

impl DynElements for Nil {
    #[inline]
    fn element_dyn(&self, _: usize) -> Option<(&dyn Any, &'static str)> {
        None
    }
}

impl<H: Any, T: DynElements> DynElements for Cons<H, T> {
    fn element_dyn(&self, index: usize) -> Option<(&dyn Any, &'static str)> {
        match index {
            0 => Some((&self.head, type_name::<H>())),
            _ => self.tail.element_dyn(index - 1),
        }
    }
}
