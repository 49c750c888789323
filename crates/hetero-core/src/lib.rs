//! hetero Core - Concepts, tags and heterogeneous containers
//!
//! This crate provides the fundamental abstractions for hetero:
//! - Tags (`Datatype`) grouping data types into concept families
//! - Concepts (Comparable, Orderable, Logical, Functor) with their
//!   minimal complete definitions
//! - Compile-time constants (`Bool`, `IntegralConstant`, `Type`)
//! - Heterogeneous containers (`Tuple`, `Set`)
//! - Opt-in operator sugar

pub mod concept;
pub mod datatype;
pub mod error;
pub mod integral;
mod make;
pub mod operators;
mod scalar;
#[cfg(feature = "serde")]
pub mod serde_impls;
pub mod set;
pub mod tuple;
pub mod types;

pub use concept::{
    adjust, always, and_, equal, eval_if, eval_if_with, fill, greater, greater_equal, if_, less,
    less_equal, max, min, not_, not_equal, or_, replace, to_bool, transform, Adjust, AdjustImpl,
    AdjustMcd, Always, Branch, Comparable, ComparableMcd, CompareWith, EqualImpl, EqualMcd,
    EvalIf, EvalIfWith, Functor, FunctorAdjust, FunctorTransform, IntoBool, LessEqualImpl,
    LessEqualMcd, LessImpl, LessMcd, Logical, Mapper, MinMaxWith, Negate, NotEqualImpl,
    NotEqualMcd, OrderWith, Orderable, OrderableMcd, OrderableMinMax, Predicate, Select,
    Transform, TransformImpl, TransformMcd,
};
pub use datatype::{tag_of, Datatype, TagOf};
pub use error::{HeteroError, Result};
pub use integral::{
    integral_c, Bool, BoolTag, False, Integer, IntegralConstant, IntegralTag, True, FALSE, TRUE,
};
pub use make::{make, Make};
pub use operators::{ComparableOps, EnableOperators, LogicalOps, OrderableOps};
pub use set::{Set, SetTag};
pub use tuple::{
    drop_while, fold_left, take_while, At, Cons, HList, Nil, Sequence, TupleTag, I0, I1, I10,
    I11, I12, I13, I14, I15, I2, I3, I4, I5, I6, I7, I8, I9, S, Z,
};
pub use types::{type_, type_of, Type, TypeTag};
