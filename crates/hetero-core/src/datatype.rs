//! Tags: the key every concept instance is looked up by.

/// Associates a data type with the tag identifying its concept family.
///
/// Every data type has exactly one tag. Scalars and `String` are their own
/// tag; every tuple shares [`TupleTag`](crate::tuple::TupleTag), every set
/// shares [`SetTag`](crate::set::SetTag), and so on. Concept instances are
/// implemented on tags, so a single instance covers a whole family.
///
/// # Examples
///
/// ```
/// use hetero_core::{Datatype, TagOf, TupleTag};
///
/// fn same_tag<A: Datatype<Tag = T>, B: Datatype<Tag = T>, T>(_: &A, _: &B) {}
///
/// same_tag(&hetero_core::tuple![1, "a"], &hetero_core::tuple![2.5]);
/// let _: TagOf<i32> = 0i32;
/// let _tag: Option<TupleTag> = None::<TagOf<hetero_core::Tuple![u8]>>;
/// ```
pub trait Datatype {
    /// The tag of this data type.
    type Tag;
}

/// The tag of `X`.
pub type TagOf<X> = <X as Datatype>::Tag;

/// Returns a value of `X`'s tag, for tags that are unit structs.
pub fn tag_of<X>(_: &X) -> TagOf<X>
where
    X: Datatype,
    TagOf<X>: Default,
{
    TagOf::<X>::default()
}

/// Implements `Datatype` for types that are their own tag.
macro_rules! impl_self_tagged {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::datatype::Datatype for $ty {
                type Tag = $ty;
            }
        )+
    };
}

impl_self_tagged!(
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

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_name<X: Datatype>() -> &'static str {
        std::any::type_name::<TagOf<X>>()
    }

    #[test]
    fn test_scalars_are_their_own_tag() {
        assert_eq!(tag_name::<i32>(), "i32");
        assert_eq!(tag_name::<bool>(), "bool");
        assert_eq!(tag_name::<&'static str>(), "&str");
    }
}
