//! Concepts and their minimal complete definitions.
//!
//! Each concept is a registration trait implemented on a tag, a set of
//! primitive traits, and marker types (MCDs) that derive the remaining
//! operations from the primitives. Free functions resolve the tags of
//! their arguments and dispatch through the selected MCD.

pub mod comparable;
pub mod functor;
pub mod logical;
pub mod orderable;

#[cfg(test)]
mod tests;

pub use comparable::{
    equal, not_equal, Comparable, ComparableMcd, CompareWith, EqualImpl, EqualMcd,
    NotEqualImpl, NotEqualMcd,
};
pub use functor::{
    adjust, always, fill, replace, transform, Adjust, AdjustImpl, AdjustMcd, Always, Functor,
    FunctorAdjust, FunctorTransform, Mapper, Predicate, Transform, TransformImpl, TransformMcd,
};
pub use logical::{
    and_, eval_if, eval_if_with, if_, not_, or_, to_bool, Branch, EvalIf, EvalIfWith, IntoBool,
    Logical, Negate, Select,
};
pub use orderable::{
    greater, greater_equal, less, less_equal, max, min, LessEqualImpl, LessEqualMcd, LessImpl,
    LessMcd, MinMaxWith, OrderWith, Orderable, OrderableMcd, OrderableMinMax,
};
