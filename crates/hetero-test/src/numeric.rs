//! A runtime number with hand-written concept instances.
//!
//! `Numeric` registers Comparable through the Equal MCD by default and
//! through the NotEqual MCD when the `not-equal-mcd` feature is on. Both
//! primitives are implemented so either registration is complete, and the
//! tests run once per MCD.
//!
//! # Example
//!
//! ```
//! use hetero::{and_, equal, not_, to_bool};
//! use hetero_test::numeric::Numeric;
//!
//! assert!(equal(&Numeric(3), &Numeric(3)));
//! assert_eq!(not_(Numeric(0)), Numeric(1));
//! assert!(!to_bool(and_(Numeric(4), Numeric(0))));
//! ```

use hetero::{
    Branch, Comparable, Datatype, EqualImpl, EvalIf, LessImpl, Logical, NotEqualImpl, Operators,
    Orderable,
};

/// An integer whose truthiness is "non-zero".
#[derive(Debug, Clone, Copy, Default, Datatype, Operators)]
#[datatype(tag = NumericTag)]
#[operators(Comparable, Orderable, Logical)]
pub struct Numeric(pub i32);

/// Tag of [`Numeric`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NumericTag;

impl Numeric {
    /// Whether the value counts as true.
    pub fn truthy(self) -> bool {
        self.0 != 0
    }
}

impl Comparable<Numeric, Numeric> for NumericTag {
    #[cfg(not(feature = "not-equal-mcd"))]
    type Mcd = hetero::EqualMcd;
    #[cfg(feature = "not-equal-mcd")]
    type Mcd = hetero::NotEqualMcd;
}

impl EqualImpl<Numeric, Numeric> for NumericTag {
    type Output = bool;

    fn equal_impl(x: &Numeric, y: &Numeric) -> bool {
        x.0 == y.0
    }
}

impl NotEqualImpl<Numeric, Numeric> for NumericTag {
    type Output = bool;

    fn not_equal_impl(x: &Numeric, y: &Numeric) -> bool {
        x.0 != y.0
    }
}

impl Orderable<Numeric, Numeric> for NumericTag {
    type Mcd = hetero::LessMcd;
}

impl LessImpl<Numeric, Numeric> for NumericTag {
    type Output = bool;

    fn less_impl(x: &Numeric, y: &Numeric) -> bool {
        x.0 < y.0
    }
}

impl Logical<Numeric> for NumericTag {
    type Not = Numeric;

    fn not_impl(x: Numeric) -> Numeric {
        Numeric(i32::from(!x.truthy()))
    }
}

impl<A, Th, El, T> EvalIf<Numeric, A, Th, El> for NumericTag
where
    Th: Branch<A, Output = T>,
    El: Branch<A, Output = T>,
{
    type Output = T;

    fn eval_if_impl(cond: Numeric, arg: A, then: Th, otherwise: El) -> T {
        if cond.truthy() {
            then.run(arg)
        } else {
            otherwise.run(arg)
        }
    }
}
