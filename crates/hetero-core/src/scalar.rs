//! Comparable and Orderable instances for built-in scalars.
//!
//! Scalars are their own tag. Equality and ordering are the native ones and
//! produce runtime `bool`s. `String` and `&'static str` are also comparable
//! with each other.
//!
//! Every integer type has its own instances, so an unsuffixed literal has
//! no single candidate and needs a concrete type:
//!
//! ```
//! use hetero_core::equal;
//!
//! assert!(equal(&3u16, &3u16));
//! let n: i64 = 3;
//! assert!(equal(&n, &3i64));
//! ```
//!
//! ```compile_fail
//! use hetero_core::equal;
//!
//! let _ = equal(&3, &3);
//! ```

use crate::concept::comparable::{Comparable, EqualImpl, EqualMcd};
use crate::concept::orderable::{LessImpl, LessMcd, Orderable};

macro_rules! impl_scalar_concepts {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl_scalar_concepts!(@pair $ty, $ty);
        )+
    };
    (@pair $x:ty, $y:ty) => {
        impl Comparable<$x, $y, $y> for $x {
            type Mcd = EqualMcd;
        }

        impl EqualImpl<$x, $y, $y> for $x {
            type Output = bool;

            #[inline]
            fn equal_impl(x: &$x, y: &$y) -> bool {
                x == y
            }
        }

        impl Orderable<$x, $y, $y> for $x {
            type Mcd = LessMcd;
        }

        impl LessImpl<$x, $y, $y> for $x {
            type Output = bool;

            #[inline]
            fn less_impl(x: &$x, y: &$y) -> bool {
                x < y
            }
        }
    };
}

impl_scalar_concepts!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

/// Owned and borrowed strings compare through their `str` view.
macro_rules! impl_str_cross {
    ($($x:ty => $y:ty),+ $(,)?) => {
        $(
            impl Comparable<$x, $y, $y> for $x {
                type Mcd = EqualMcd;
            }

            impl EqualImpl<$x, $y, $y> for $x {
                type Output = bool;

                #[inline]
                fn equal_impl(x: &$x, y: &$y) -> bool {
                    <$x as AsRef<str>>::as_ref(x) == <$y as AsRef<str>>::as_ref(y)
                }
            }

            impl Orderable<$x, $y, $y> for $x {
                type Mcd = LessMcd;
            }

            impl LessImpl<$x, $y, $y> for $x {
                type Output = bool;

                #[inline]
                fn less_impl(x: &$x, y: &$y) -> bool {
                    <$x as AsRef<str>>::as_ref(x) < <$y as AsRef<str>>::as_ref(y)
                }
            }
        )+
    };
}

impl_str_cross!(String => &'static str, &'static str => String);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::concept::{equal, greater, greater_equal, less, less_equal, max, min, not_equal};

    #[test]
    fn test_scalar_equality() {
        assert!(equal(&3i32, &3i32));
        assert!(not_equal(&'a', &'b'));
        assert!(equal(&String::from("x"), &"x"));
        assert!(equal(&"x", &String::from("x")));
    }

    #[test]
    fn test_scalar_ordering() {
        assert!(less(&1u8, &2u8));
        assert!(less_equal(&2.5f64, &2.5f64));
        assert!(greater(&"b", &"a"));
        assert!(!less(&true, &false));
        assert!(less(&String::from("abc"), &"abd"));
    }

    #[test]
    fn test_min_max_prefer_documented_side_on_ties() {
        // 0.0 and -0.0 are equivalent but distinguishable by sign.
        assert!(min(0.0f64, -0.0f64).is_sign_negative());
        assert!(max(0.0f64, -0.0f64).is_sign_positive());
        assert_eq!(min(3i32, 7i32), 3);
        assert_eq!(max('a', 'z'), 'z');
    }

    proptest! {
        #[test]
        fn prop_scalar_instances_match_std(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(equal(&a, &b), a == b);
            prop_assert_eq!(not_equal(&a, &b), a != b);
            prop_assert_eq!(less(&a, &b), a < b);
            prop_assert_eq!(less_equal(&a, &b), a <= b);
            prop_assert_eq!(greater(&a, &b), a > b);
            prop_assert_eq!(greater_equal(&a, &b), a >= b);
            prop_assert_eq!(min(a, b), a.min(b));
            prop_assert_eq!(max(a, b), a.max(b));
        }

        #[test]
        fn prop_strings_match_std(a in "[a-c]{0,3}", b in "[a-c]{0,3}") {
            prop_assert_eq!(less(&a, &b), a < b);
            prop_assert_eq!(equal(&a, &b), a == b);
        }
    }
}
