//! Compile-time constants: booleans and typed integers.
//!
//! [`Bool`] carries its value in the type, so Logical operations on
//! [`True`] and [`False`] are resolved entirely by the trait solver and the
//! branches of a conditional may have different types.
//! [`IntegralConstant`] does the same for integers; comparisons between
//! integral constants produce runtime `bool`s, since stable Rust cannot
//! compute a type from const generic arithmetic.
//!
//! A constant must fit its integer type. Out-of-range values are rejected
//! when the constant is built:
//!
//! ```compile_fail
//! use hetero_core::integral_c;
//!
//! let _ = integral_c::<u8, 300>();
//! ```

use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_traits::AsPrimitive;

use crate::concept::comparable::{Comparable, EqualImpl, EqualMcd};
use crate::concept::logical::{Branch, EvalIf, Logical};
use crate::concept::orderable::{LessImpl, LessMcd, Orderable};
use crate::datatype::Datatype;

/// A boolean known at compile time.
#[derive(Clone, Copy, Default, Hash)]
pub struct Bool<const B: bool>;

/// The compile-time `true`.
pub type True = Bool<true>;

/// The compile-time `false`.
pub type False = Bool<false>;

pub const TRUE: True = Bool;
pub const FALSE: False = Bool;

/// Tag shared by [`True`] and [`False`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolTag;

impl<const B: bool> Bool<B> {
    pub const VALUE: bool = B;

    #[inline]
    pub const fn value(self) -> bool {
        B
    }
}

impl<const B: bool> Datatype for Bool<B> {
    type Tag = BoolTag;
}

impl<const B: bool> From<Bool<B>> for bool {
    fn from(_: Bool<B>) -> bool {
        B
    }
}

impl<const B: bool> fmt::Debug for Bool<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if B { "TRUE" } else { "FALSE" })
    }
}

impl<const B: bool> fmt::Display for Bool<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", B)
    }
}

impl Logical<True> for BoolTag {
    type Not = False;

    #[inline]
    fn not_impl(_: True) -> False {
        FALSE
    }
}

impl Logical<False> for BoolTag {
    type Not = True;

    #[inline]
    fn not_impl(_: False) -> True {
        TRUE
    }
}

impl<A, Th, El> EvalIf<True, A, Th, El> for BoolTag
where
    Th: Branch<A>,
{
    type Output = Th::Output;

    #[inline]
    fn eval_if_impl(_: True, arg: A, then: Th, _: El) -> Self::Output {
        then.run(arg)
    }
}

impl<A, Th, El> EvalIf<False, A, Th, El> for BoolTag
where
    El: Branch<A>,
{
    type Output = El::Output;

    #[inline]
    fn eval_if_impl(_: False, arg: A, _: Th, otherwise: El) -> Self::Output {
        otherwise.run(arg)
    }
}

impl<const A: bool, const B: bool> Comparable<Bool<A>, Bool<B>> for BoolTag {
    type Mcd = EqualMcd;
}

impl<const A: bool, const B: bool> Orderable<Bool<A>, Bool<B>> for BoolTag {
    type Mcd = LessMcd;
}

/// Generates the type-level truth table of a binary relation on `Bool`.
macro_rules! bool_relation {
    ($primitive:ident :: $method:ident => $(($a:literal, $b:literal) -> $out:ident),+ $(,)?) => {
        $(
            impl $primitive<Bool<$a>, Bool<$b>> for BoolTag {
                type Output = $out;

                #[inline]
                fn $method(_: &Bool<$a>, _: &Bool<$b>) -> $out {
                    Bool
                }
            }
        )+
    };
}

bool_relation!(EqualImpl::equal_impl =>
    (true, true) -> True,
    (true, false) -> False,
    (false, true) -> False,
    (false, false) -> True,
);

bool_relation!(LessImpl::less_impl =>
    (true, true) -> False,
    (true, false) -> False,
    (false, true) -> True,
    (false, false) -> False,
);

crate::impl_operators!([const B: bool] Bool<B>: Comparable, Orderable, Logical);

/// Primitive integer types usable in an [`IntegralConstant`].
pub trait Integer: Copy + 'static {
    /// Smallest value, widened to `i128`.
    const MIN: i128;
    /// Largest value, widened to `i128` (saturating for `u128`).
    const MAX: i128;
}

macro_rules! impl_integer {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Integer for $t {
                const MIN: i128 = <$t>::MIN as i128;
                const MAX: i128 = <$t>::MAX as i128;
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl Integer for u128 {
    const MIN: i128 = 0;
    const MAX: i128 = i128::MAX;
}

/// An integer of type `T` known at compile time.
///
/// The value is stored as `i128` in the type and converted to `T` on
/// demand. Building one checks at compile time that `V` fits in `T`.
pub struct IntegralConstant<T, const V: i128>(PhantomData<fn() -> T>);

/// Tag shared by every [`IntegralConstant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntegralTag;

impl<T, const V: i128> IntegralConstant<T, V> {
    pub const VALUE: i128 = V;
}

impl<T: Integer, const V: i128> IntegralConstant<T, V> {
    const IN_RANGE: () = assert!(
        V >= T::MIN && V <= T::MAX,
        "integral constant out of range for its type"
    );

    #[inline]
    pub const fn new() -> Self {
        let () = Self::IN_RANGE;
        Self(PhantomData)
    }

    /// The constant as a `T`.
    #[inline]
    pub fn value(self) -> T
    where
        i128: AsPrimitive<T>,
    {
        V.as_()
    }
}

/// Builds the integral constant `V` of type `T`.
#[inline]
pub const fn integral_c<T: Integer, const V: i128>() -> IntegralConstant<T, V> {
    IntegralConstant::new()
}

impl<T, const V: i128> Clone for IntegralConstant<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const V: i128> Copy for IntegralConstant<T, V> {}

impl<T: Integer, const V: i128> Default for IntegralConstant<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const V: i128> Hash for IntegralConstant<T, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        V.hash(state);
    }
}

impl<T, const V: i128> fmt::Debug for IntegralConstant<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integral_c<{}, {}>", type_name::<T>(), V)
    }
}

impl<T, const V: i128> fmt::Display for IntegralConstant<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", V)
    }
}

impl<T, const V: i128> Datatype for IntegralConstant<T, V> {
    type Tag = IntegralTag;
}

impl<T, U, const A: i128, const B: i128> Comparable<IntegralConstant<T, A>, IntegralConstant<U, B>>
    for IntegralTag
{
    type Mcd = EqualMcd;
}

impl<T, U, const A: i128, const B: i128> EqualImpl<IntegralConstant<T, A>, IntegralConstant<U, B>>
    for IntegralTag
{
    type Output = bool;

    #[inline]
    fn equal_impl(_: &IntegralConstant<T, A>, _: &IntegralConstant<U, B>) -> bool {
        A == B
    }
}

impl<T, U, const A: i128, const B: i128> Orderable<IntegralConstant<T, A>, IntegralConstant<U, B>>
    for IntegralTag
{
    type Mcd = LessMcd;
}

impl<T, U, const A: i128, const B: i128> LessImpl<IntegralConstant<T, A>, IntegralConstant<U, B>>
    for IntegralTag
{
    type Output = bool;

    #[inline]
    fn less_impl(_: &IntegralConstant<T, A>, _: &IntegralConstant<U, B>) -> bool {
        A < B
    }
}

crate::impl_operators!([T, const V: i128] IntegralConstant<T, V>: Comparable, Orderable);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::{and_, equal, if_, less, max, not_, or_, to_bool};

    #[test]
    fn test_bool_truth_tables() {
        let _: False = not_(TRUE);
        let _: True = not_(not_(TRUE));
        let _: False = and_(TRUE, FALSE);
        let _: True = and_(TRUE, TRUE);
        let _: True = or_(FALSE, TRUE);
        let _: False = or_(FALSE, FALSE);
        assert!(to_bool(TRUE));
        assert!(!to_bool(FALSE));
    }

    #[test]
    fn test_bool_comparisons_stay_compile_time() {
        let _: True = equal(&TRUE, &TRUE);
        let _: False = equal(&TRUE, &FALSE);
        let _: True = less(&FALSE, &TRUE);
        let _: False = less(&TRUE, &TRUE);
        assert_eq!(TRUE, TRUE);
        assert_ne!(TRUE, FALSE);
        assert!(FALSE < TRUE);
    }

    #[test]
    fn test_bool_operators() {
        let _: False = !TRUE;
        let _: True = TRUE & TRUE;
        let _: False = TRUE & FALSE;
        let _: True = FALSE | TRUE;
    }

    #[test]
    fn test_untaken_branch_type_is_free() {
        let s: &str = if_(TRUE, "text", 1.5f64);
        assert_eq!(s, "text");
        let n: u8 = if_(FALSE, 'c', 3u8);
        assert_eq!(n, 3);
    }

    #[test]
    fn test_integral_constant_value() {
        assert_eq!(integral_c::<u8, 200>().value(), 200u8);
        assert_eq!(integral_c::<i64, -3>().value(), -3i64);
        assert_eq!(IntegralConstant::<i32, 7>::VALUE, 7);
        assert_eq!(format!("{}", integral_c::<i32, 42>()), "42");
    }

    #[test]
    fn test_integral_constant_bounds() {
        assert_eq!(integral_c::<u8, 255>().value(), u8::MAX);
        assert_eq!(integral_c::<i8, -128>().value(), i8::MIN);
        assert_eq!(<u64 as Integer>::MAX, u64::MAX as i128);
        assert_eq!(<u128 as Integer>::MAX, i128::MAX);
    }

    #[test]
    fn test_equal_values_compare_equal() {
        let a = integral_c::<u8, 44>();
        let b = integral_c::<u16, 44>();
        assert_eq!(a.value() as u16, b.value());
        assert!(equal(&a, &b));
    }

    #[test]
    fn test_integral_constants_compare_across_types() {
        assert!(equal(&integral_c::<i32, 1>(), &integral_c::<i64, 1>()));
        assert!(!equal(&integral_c::<i32, 1>(), &integral_c::<i32, 2>()));
        assert!(less(&integral_c::<u8, 1>(), &integral_c::<i64, 9>()));
        assert!(integral_c::<i32, 3>() > integral_c::<i32, 2>());
        assert_eq!(integral_c::<i32, 5>(), integral_c::<u16, 5>());
    }

    #[test]
    fn test_max_of_integral_constants_keeps_runtime_branch_type() {
        let m = max(integral_c::<i32, 2>(), integral_c::<i32, 2>());
        assert_eq!(m.value(), 2);
    }
}
