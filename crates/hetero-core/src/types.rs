//! Types as values.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::concept::comparable::{Comparable, EqualImpl, EqualMcd};
use crate::datatype::Datatype;

/// A zero-sized value standing for the type `T`.
///
/// Two `Type`s are equal exactly when they wrap the same type.
///
/// ```
/// use hetero_core::{equal, type_, type_of};
///
/// assert!(equal(&type_::<i32>(), &type_of(&5i32)));
/// assert!(!equal(&type_::<i32>(), &type_::<u32>()));
/// assert_eq!(type_::<str>().name(), "str");
/// ```
pub struct Type<T: ?Sized>(PhantomData<fn() -> *const T>);

/// Tag shared by every [`Type`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeTag;

impl<T: ?Sized> Type<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Name of the wrapped type, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// The [`Type`] standing for `T`.
#[inline]
pub const fn type_<T: ?Sized>() -> Type<T> {
    Type::new()
}

/// The [`Type`] of `value`.
#[inline]
pub fn type_of<T: ?Sized>(_value: &T) -> Type<T> {
    Type::new()
}

impl<T: ?Sized> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Type<T> {}

impl<T: ?Sized> Default for Type<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> Hash for Type<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TypeId::of::<T>().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type_<{}>", type_name::<T>())
    }
}

impl<T: ?Sized> Datatype for Type<T> {
    type Tag = TypeTag;
}

impl<A: ?Sized, B: ?Sized> Comparable<Type<A>, Type<B>> for TypeTag {
    type Mcd = EqualMcd;
}

impl<A, B> EqualImpl<Type<A>, Type<B>> for TypeTag
where
    A: ?Sized + 'static,
    B: ?Sized + 'static,
{
    type Output = bool;

    #[inline]
    fn equal_impl(_: &Type<A>, _: &Type<B>) -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }
}

crate::impl_operators!([T: ?Sized] Type<T>: Comparable);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::not_equal;

    #[test]
    fn test_type_equality() {
        assert_eq!(type_::<String>(), type_::<String>());
        assert_ne!(type_::<String>(), type_::<&'static str>());
        assert!(not_equal(&type_::<u8>(), &type_::<i8>()));
    }

    #[test]
    fn test_type_of_strips_nothing_but_the_value() {
        let v = vec![1u8];
        assert_eq!(type_of(&v), type_::<Vec<u8>>());
        assert!(type_of(&v).name().ends_with("Vec<u8>"));
    }
}
