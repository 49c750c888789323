//! Construction of data types from a tuple of arguments, dispatched on a tag.

/// Builds a value of the data type identified by `Self` (a tag) from `Args`.
pub trait Make<Args> {
    type Output;

    fn make(args: Args) -> Self::Output;
}

/// Builds the data type identified by `Tag` from a tuple of arguments.
///
/// ```
/// use hetero_core::{make, set, tuple, SetTag, TupleTag};
///
/// let xs = make::<TupleTag, _>(tuple![1, 'a']);
/// assert_eq!(xs, tuple![1, 'a']);
///
/// let s = make::<SetTag, _>(tuple![3, 1, 3]);
/// assert_eq!(s, set![1, 3]);
/// ```
#[inline]
pub fn make<Tag, Args>(args: Args) -> Tag::Output
where
    Tag: Make<Args>,
{
    Tag::make(args)
}
