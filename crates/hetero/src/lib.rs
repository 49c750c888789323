//! hetero - Heterogeneous containers and concept-based generic programming
//!
//! Data types belong to tags, tags implement concepts, and every concept
//! operation dispatches on the tags of its arguments. Instances only supply
//! a minimal complete definition; the rest is derived.
//!
//! # Example
//!
//! ```rust
//! use hetero::prelude::*;
//!
//! let xs = tuple![1, "two", 3.0];
//! assert_eq!(xs.len(), 3);
//! assert_eq!(*xs.at::<I1>(), "two");
//!
//! assert_eq!(set![1, 2, 2], make_set!(2, 1));
//! assert!(equal(&tuple![1, 'a'], &tuple![1, 'a']));
//! let _: True = not_(FALSE);
//! ```
//!
//! User types join a concept by naming a tag and an MCD:
//!
//! ```rust
//! use hetero::prelude::*;
//! use hetero::{EqualImpl, EqualMcd};
//!
//! #[derive(Debug, Clone, Copy, Datatype, Operators)]
//! #[operators(Comparable)]
//! struct Celsius(i32);
//!
//! impl Comparable<Celsius, Celsius> for Celsius {
//!     type Mcd = EqualMcd;
//! }
//!
//! impl EqualImpl<Celsius, Celsius> for Celsius {
//!     type Output = bool;
//!
//!     fn equal_impl(x: &Celsius, y: &Celsius) -> bool {
//!         x.0 == y.0
//!     }
//! }
//!
//! assert!(Celsius(20) == Celsius(20));
//! assert!(not_equal(&Celsius(20), &Celsius(21)));
//! ```

// Derive macros
pub use hetero_macros::{Datatype, Operators};

// Concepts and their MCDs
pub use hetero_core::concept;
pub use hetero_core::{
    adjust, always, and_, equal, eval_if, eval_if_with, fill, greater, greater_equal, if_, less,
    less_equal, max, min, not_, not_equal, or_, replace, to_bool, transform, Adjust, AdjustImpl,
    AdjustMcd, Always, Branch, Comparable, ComparableMcd, CompareWith, EqualImpl, EqualMcd,
    EvalIf, EvalIfWith, Functor, FunctorAdjust, FunctorTransform, IntoBool, LessEqualImpl,
    LessEqualMcd, LessImpl, LessMcd, Logical, Mapper, MinMaxWith, Negate, NotEqualImpl,
    NotEqualMcd, OrderWith, Orderable, OrderableMcd, OrderableMinMax, Predicate, Select,
    Transform, TransformImpl, TransformMcd,
};

// Tags
pub use hetero_core::{make, tag_of, Datatype, Make, TagOf};

// Compile-time constants
pub use hetero_core::{
    integral_c, type_, type_of, Bool, BoolTag, False, Integer, IntegralConstant, IntegralTag, True,
    Type, TypeTag, FALSE, TRUE,
};

// Containers
pub use hetero_core::set;
pub use hetero_core::tuple;
pub use hetero_core::{
    drop_while, fold_left, take_while, At, Cons, HList, Nil, Sequence, Set, SetTag, TupleTag, I0,
    I1, I10, I11, I12, I13, I14, I15, I2, I3, I4, I5, I6, I7, I8, I9, S, Z,
};
pub use hetero_core::{make_set, make_tuple, tuple_c, tuple_t, Tuple};

// Operator sugar
pub use hetero_core::impl_operators;
pub use hetero_core::operators::{
    operators_enabled, ComparableOps, EnableOperators, LogicalOps, OrderableOps,
};

// Errors
pub use hetero_core::{HeteroError, Result};

/// Internal items for macro-generated code. Do not use directly.
#[doc(hidden)]
pub mod __internal {
    pub use hetero_core::operators::{ComparableOps, EnableOperators, LogicalOps, OrderableOps};
    pub use hetero_core::{
        and_, or_, CompareWith, Datatype, IntoBool, Negate, OrderWith, Select,
    };
}

pub mod prelude {
    pub use super::{Datatype, Operators};
    pub use super::{
        adjust, and_, equal, eval_if, fill, greater, greater_equal, if_, less, less_equal, max,
        min, not_, not_equal, or_, replace, to_bool, transform,
    };
    pub use super::{Comparable, Functor, Logical, Orderable};
    pub use super::{integral_c, make, type_, False, True, FALSE, TRUE};
    pub use super::{make_set, make_tuple, set, tuple, tuple_c, tuple_t, Tuple};
    pub use super::{At, Sequence, Set, I0, I1, I2, I3, I4, I5, I6, I7};
}
