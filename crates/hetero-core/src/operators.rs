//! Opt-in operator sugar.
//!
//! A type gets native operators for a concept only when it asks for them,
//! through [`impl_operators!`](crate::impl_operators) or
//! `#[derive(Operators)]`. The generated impls forward to the concept
//! operations, so `a == b` and `equal(&a, &b)` can never disagree:
//!
//! | concept      | operators                  | forwards to                              |
//! |--------------|----------------------------|------------------------------------------|
//! | `Comparable` | `==` `!=`                  | `equal`, `not_equal`, then `to_bool`     |
//! | `Orderable`  | `<` `<=` `>` `>=`          | `less`, `less_equal`, `greater`, ...     |
//! | `Logical`    | `!` `&` `\|`               | `not_`, `and_`, `or_`                    |
//!
//! `==` and `<` must produce a `bool`, so their results pass through
//! `to_bool`. The Logical operators return the concept's own outputs: on
//! [`True`](crate::True) and [`False`](crate::False) they stay compile-time.
//!
//! `PartialOrd` requires `PartialEq`, so opting into `Orderable` also
//! provides the `Comparable` operators.
//!
//! Operators are implemented on the left operand only. `a == b` compiles
//! when `a`'s type opted in and `CompareWith` relates it to `b`'s type,
//! whether or not `b`'s type opted in; `b == a` then needs `b`'s opt-in.

/// Marker selecting the `Comparable` operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparableOps;

/// Marker selecting the `Orderable` operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderableOps;

/// Marker selecting the `Logical` operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalOps;

/// Implemented for every type that opted into the operators of concept `C`.
pub trait EnableOperators<C> {}

/// Whether `T` opted into the operators of concept `C`.
pub const fn operators_enabled<T: EnableOperators<C>, C>() -> bool {
    true
}

/// Implements the native operators of the listed concepts for a type.
///
/// Generic parameters go in brackets ahead of the type:
///
/// ```
/// use hetero_core::{equal, impl_operators, Comparable, Datatype, EqualImpl, EqualMcd};
///
/// #[derive(Debug)]
/// struct Meters(u32);
///
/// impl Datatype for Meters {
///     type Tag = Meters;
/// }
///
/// impl Comparable<Meters, Meters> for Meters {
///     type Mcd = EqualMcd;
/// }
///
/// impl EqualImpl<Meters, Meters> for Meters {
///     type Output = bool;
///
///     fn equal_impl(x: &Meters, y: &Meters) -> bool {
///         x.0 == y.0
///     }
/// }
///
/// impl_operators!(Meters: Comparable);
///
/// assert!(Meters(3) == Meters(3));
/// assert_eq!(Meters(3) != Meters(4), !equal(&Meters(3), &Meters(4)));
/// ```
///
/// Opting into `Orderable` alone gives `==` as well:
///
/// ```
/// use hetero_core::{impl_operators, Comparable, Datatype, EqualImpl, EqualMcd};
/// use hetero_core::{LessImpl, LessMcd, Orderable};
///
/// struct Age(u8);
///
/// impl Datatype for Age {
///     type Tag = Age;
/// }
///
/// impl Comparable<Age, Age> for Age {
///     type Mcd = EqualMcd;
/// }
///
/// impl EqualImpl<Age, Age> for Age {
///     type Output = bool;
///
///     fn equal_impl(x: &Age, y: &Age) -> bool {
///         x.0 == y.0
///     }
/// }
///
/// impl Orderable<Age, Age> for Age {
///     type Mcd = LessMcd;
/// }
///
/// impl LessImpl<Age, Age> for Age {
///     type Output = bool;
///
///     fn less_impl(x: &Age, y: &Age) -> bool {
///         x.0 < y.0
///     }
/// }
///
/// impl_operators!(Age: Orderable);
///
/// assert!(Age(3) < Age(4));
/// assert!(Age(4) == Age(4));
/// ```
///
/// Without the opt-in there are no operators:
///
/// ```compile_fail
/// use hetero_core::{Comparable, Datatype, EqualImpl, EqualMcd};
///
/// struct Meters(u32);
///
/// impl Datatype for Meters {
///     type Tag = Meters;
/// }
///
/// impl Comparable<Meters, Meters> for Meters {
///     type Mcd = EqualMcd;
/// }
///
/// impl EqualImpl<Meters, Meters> for Meters {
///     type Output = bool;
///
///     fn equal_impl(x: &Meters, y: &Meters) -> bool {
///         x.0 == y.0
///     }
/// }
///
/// let _ = Meters(3) == Meters(3);
/// ```
#[macro_export]
macro_rules! impl_operators {
    (@concept [$($gen:tt)*] $ty:ty, Comparable) => {
        impl<$($gen)*> $crate::operators::EnableOperators<$crate::operators::ComparableOps> for $ty {}

        impl<__Rhs, $($gen)*> ::core::cmp::PartialEq<__Rhs> for $ty
        where
            $ty: $crate::CompareWith<__Rhs>,
            <$ty as $crate::CompareWith<__Rhs>>::Equal: $crate::IntoBool,
            <$ty as $crate::CompareWith<__Rhs>>::NotEqual: $crate::IntoBool,
        {
            #[inline]
            fn eq(&self, other: &__Rhs) -> bool {
                $crate::IntoBool::to_bool($crate::CompareWith::equal_to(self, other))
            }

            #[allow(clippy::partialeq_ne_impl)]
            #[inline]
            fn ne(&self, other: &__Rhs) -> bool {
                $crate::IntoBool::to_bool($crate::CompareWith::not_equal_to(self, other))
            }
        }
    };

    (@concept [$($gen:tt)*] $ty:ty, Orderable) => {
        impl<$($gen)*> $crate::operators::EnableOperators<$crate::operators::OrderableOps> for $ty {}

        impl<__Rhs, $($gen)*> ::core::cmp::PartialOrd<__Rhs> for $ty
        where
            $ty: $crate::CompareWith<__Rhs> + $crate::OrderWith<__Rhs>,
            <$ty as $crate::CompareWith<__Rhs>>::Equal: $crate::IntoBool,
            <$ty as $crate::CompareWith<__Rhs>>::NotEqual: $crate::IntoBool,
            <$ty as $crate::OrderWith<__Rhs>>::Less: $crate::IntoBool,
            <$ty as $crate::OrderWith<__Rhs>>::LessEqual: $crate::IntoBool,
            <$ty as $crate::OrderWith<__Rhs>>::Greater: $crate::IntoBool,
            <$ty as $crate::OrderWith<__Rhs>>::GreaterEqual: $crate::IntoBool,
        {
            fn partial_cmp(&self, other: &__Rhs) -> ::core::option::Option<::core::cmp::Ordering> {
                if $crate::IntoBool::to_bool($crate::OrderWith::less_than(self, other)) {
                    ::core::option::Option::Some(::core::cmp::Ordering::Less)
                } else if $crate::IntoBool::to_bool($crate::OrderWith::greater_than(self, other)) {
                    ::core::option::Option::Some(::core::cmp::Ordering::Greater)
                } else if $crate::IntoBool::to_bool($crate::CompareWith::equal_to(self, other)) {
                    ::core::option::Option::Some(::core::cmp::Ordering::Equal)
                } else {
                    ::core::option::Option::None
                }
            }

            #[inline]
            fn lt(&self, other: &__Rhs) -> bool {
                $crate::IntoBool::to_bool($crate::OrderWith::less_than(self, other))
            }

            #[inline]
            fn le(&self, other: &__Rhs) -> bool {
                $crate::IntoBool::to_bool($crate::OrderWith::less_equal(self, other))
            }

            #[inline]
            fn gt(&self, other: &__Rhs) -> bool {
                $crate::IntoBool::to_bool($crate::OrderWith::greater_than(self, other))
            }

            #[inline]
            fn ge(&self, other: &__Rhs) -> bool {
                $crate::IntoBool::to_bool($crate::OrderWith::greater_equal(self, other))
            }
        }
    };

    (@concept [$($gen:tt)*] $ty:ty, Logical) => {
        impl<$($gen)*> $crate::operators::EnableOperators<$crate::operators::LogicalOps> for $ty {}

        impl<$($gen)*> ::core::ops::Not for $ty
        where
            $ty: $crate::Negate,
        {
            type Output = <$ty as $crate::Negate>::Output;

            #[inline]
            fn not(self) -> Self::Output {
                $crate::Negate::negate(self)
            }
        }

        impl<__Rhs, $($gen)*> ::core::ops::BitAnd<__Rhs> for $ty
        where
            $ty: ::core::clone::Clone + $crate::Select<__Rhs, $ty>,
        {
            type Output = <$ty as $crate::Select<__Rhs, $ty>>::Output;

            #[inline]
            fn bitand(self, rhs: __Rhs) -> Self::Output {
                $crate::and_(self, rhs)
            }
        }

        impl<__Rhs, $($gen)*> ::core::ops::BitOr<__Rhs> for $ty
        where
            $ty: ::core::clone::Clone + $crate::Select<$ty, __Rhs>,
        {
            type Output = <$ty as $crate::Select<$ty, __Rhs>>::Output;

            #[inline]
            fn bitor(self, rhs: __Rhs) -> Self::Output {
                $crate::or_(self, rhs)
            }
        }
    };

    (@scan $gens:tt $ty:ty; $c:tt $o:tt $l:tt; Comparable $(, $rest:ident)*) => {
        $crate::impl_operators!(@scan $gens $ty; [yes] $o $l; $($rest),*);
    };
    (@scan $gens:tt $ty:ty; $c:tt $o:tt $l:tt; Orderable $(, $rest:ident)*) => {
        $crate::impl_operators!(@scan $gens $ty; $c [yes] $l; $($rest),*);
    };
    (@scan $gens:tt $ty:ty; $c:tt $o:tt $l:tt; Logical $(, $rest:ident)*) => {
        $crate::impl_operators!(@scan $gens $ty; $c $o [yes]; $($rest),*);
    };
    (@scan $gens:tt $ty:ty; $c:tt $o:tt $l:tt;) => {
        $crate::impl_operators!(@comparable $gens $ty; $c $o);
        $crate::impl_operators!(@when $gens $ty; $o Orderable);
        $crate::impl_operators!(@when $gens $ty; $l Logical);
    };

    // `<` needs `==`, so Orderable brings the Comparable operators along.
    (@comparable $gens:tt $ty:ty; [] []) => {};
    (@comparable $gens:tt $ty:ty; $c:tt $o:tt) => {
        $crate::impl_operators!(@concept $gens $ty, Comparable);
    };

    (@when $gens:tt $ty:ty; [] $concept:ident) => {};
    (@when $gens:tt $ty:ty; [yes] $concept:ident) => {
        $crate::impl_operators!(@concept $gens $ty, $concept);
    };

    ([$($gen:tt)*] $ty:ty : $($concept:ident),+ $(,)?) => {
        $crate::impl_operators!(@scan [$($gen)*] $ty; [] [] []; $($concept),+);
    };
    ($ty:ty : $($concept:ident),+ $(,)?) => {
        $crate::impl_operators!([] $ty : $($concept),+);
    };
}
