//! Unordered, duplicate-insensitive collections of heterogeneous elements.
//!
//! A [`Set`] stores its elements in a tuple but compares by mutual
//! inclusion, so neither the order of the elements nor repeated elements
//! affect equality:
//!
//! ```
//! use hetero_core::{make, set, tuple, SetTag};
//!
//! assert_eq!(make::<SetTag, _>(tuple![1, 2, 3]), set![3, 1, 2]);
//! assert_eq!(set![2, 1, 1], set![1, 2]);
//! assert_eq!(set![1, 2].len(), 2);
//! assert_eq!(set![1, 1].len(), 1);
//! ```
//!
//! Membership tests compare elements with `equal`, so every pair of
//! element types in a set must be Comparable:
//!
//! ```compile_fail
//! use hetero_core::set;
//!
//! let _ = set![1, "one"].len();
//! ```

use std::fmt;

use crate::concept::comparable::{Comparable, CompareWith, EqualImpl, EqualMcd};
use crate::concept::logical::IntoBool;
use crate::datatype::Datatype;
use crate::make::Make;
use crate::tuple::{Cons, DebugElements, HList, Nil};

/// A set whose elements are held by the tuple `L`.
#[derive(Clone, Copy, Default, Hash)]
pub struct Set<L> {
    elements: L,
}

/// Tag shared by every [`Set`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SetTag;

impl<L> Datatype for Set<L> {
    type Tag = SetTag;
}

/// Whether some element equals `X`.
pub trait ContainsElement<X> {
    fn contains_element(&self, x: &X) -> bool;
}

impl<X> ContainsElement<X> for Nil {
    #[inline]
    fn contains_element(&self, _: &X) -> bool {
        false
    }
}

impl<H, T, X> ContainsElement<X> for Cons<H, T>
where
    H: CompareWith<X>,
    <H as CompareWith<X>>::Equal: IntoBool,
    T: ContainsElement<X>,
{
    #[inline]
    fn contains_element(&self, x: &X) -> bool {
        self.head.equal_to(x).to_bool() || self.tail.contains_element(x)
    }
}

/// Whether every element is contained in `R`.
pub trait SubsetOf<R> {
    fn subset_of(&self, rhs: &R) -> bool;
}

impl<R> SubsetOf<R> for Nil {
    #[inline]
    fn subset_of(&self, _: &R) -> bool {
        true
    }
}

impl<H, T, R> SubsetOf<R> for Cons<H, T>
where
    R: ContainsElement<H>,
    T: SubsetOf<R>,
{
    #[inline]
    fn subset_of(&self, rhs: &R) -> bool {
        rhs.contains_element(&self.head) && self.tail.subset_of(rhs)
    }
}

/// Number of pairwise-distinct elements.
pub trait CountDistinct {
    fn count_distinct(&self) -> usize;
}

impl CountDistinct for Nil {
    #[inline]
    fn count_distinct(&self) -> usize {
        0
    }
}

impl<H, T> CountDistinct for Cons<H, T>
where
    T: ContainsElement<H> + CountDistinct,
{
    fn count_distinct(&self) -> usize {
        let rest = self.tail.count_distinct();
        if self.tail.contains_element(&self.head) {
            rest
        } else {
            rest + 1
        }
    }
}

impl Set<Nil> {
    /// The empty set.
    #[inline]
    pub const fn new() -> Self {
        Set { elements: Nil }
    }
}

impl<L: HList> Set<L> {
    /// A set holding the elements of `elements`.
    #[inline]
    pub fn from_tuple(elements: L) -> Self {
        Set { elements }
    }

    /// Whether `x` equals one of the elements.
    #[inline]
    pub fn contains<X>(&self, x: &X) -> bool
    where
        L: ContainsElement<X>,
    {
        self.elements.contains_element(x)
    }

    /// Adds `x`. The set is unchanged, as far as equality is concerned, if
    /// it already held an equal element.
    #[inline]
    pub fn insert<X>(self, x: X) -> Set<Cons<X, L>> {
        Set {
            elements: Cons::new(x, self.elements),
        }
    }

    /// Number of distinct elements.
    #[inline]
    pub fn len(&self) -> usize
    where
        L: CountDistinct,
    {
        self.elements.count_distinct()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// Whether every element of `self` is in `other`.
    #[inline]
    pub fn is_subset<R>(&self, other: &Set<R>) -> bool
    where
        L: SubsetOf<R>,
    {
        self.elements.subset_of(&other.elements)
    }

    /// The stored elements, in insertion order and including repeats.
    #[inline]
    pub fn as_tuple(&self) -> &L {
        &self.elements
    }

    #[inline]
    pub fn into_tuple(self) -> L {
        self.elements
    }
}

impl<L: DebugElements> fmt::Debug for Set<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("set")?;
        let mut out = f.debug_tuple("");
        self.elements.debug_elements(&mut out);
        out.finish()
    }
}

impl<A, B> Comparable<Set<A>, Set<B>> for SetTag {
    type Mcd = EqualMcd;
}

impl<A, B> EqualImpl<Set<A>, Set<B>> for SetTag
where
    A: SubsetOf<B>,
    B: SubsetOf<A>,
{
    type Output = bool;

    #[inline]
    fn equal_impl(x: &Set<A>, y: &Set<B>) -> bool {
        x.elements.subset_of(&y.elements) && y.elements.subset_of(&x.elements)
    }
}

impl<L: HList> Make<L> for SetTag {
    type Output = Set<L>;

    #[inline]
    fn make(args: L) -> Set<L> {
        Set::from_tuple(args)
    }
}

crate::impl_operators!([L] Set<L>: Comparable);

/// Builds a set literal.
#[macro_export]
macro_rules! set {
    ($($x:expr),* $(,)?) => {
        $crate::Set::from_tuple($crate::tuple![$($x),*])
    };
}

/// Builds a set through `make::<SetTag, _>`.
#[macro_export]
macro_rules! make_set {
    ($($x:expr),* $(,)?) => {
        $crate::make::<$crate::SetTag, _>($crate::tuple![$($x),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::integral::integral_c;
    use crate::types::type_;
    use crate::{make, make_set, set, tuple, Set, SetTag};

    #[test]
    fn test_make_empty_set_equals_literal() {
        assert_eq!(make::<SetTag, _>(tuple![]), set![]);
        assert_eq!(make_set!(), Set::new());
        assert!(set![].is_empty());
        assert_eq!(set![].len(), 0);
    }

    #[test]
    fn test_make_singleton_equals_literal() {
        assert_eq!(make::<SetTag, _>(tuple!['a']), set!['a']);
        assert_ne!(set!['a'], set!['b']);
    }

    #[test]
    fn test_order_and_duplicates_do_not_matter() {
        assert_eq!(make::<SetTag, _>(tuple![1, 2, 3]), set![1, 2, 3]);
        assert_eq!(set![1, 2, 3], set![3, 2, 1]);
        assert_eq!(set![1, 1, 2], set![2, 1]);
        assert_ne!(set![1, 2], set![1, 2, 3]);
    }

    #[test]
    fn test_heterogeneous_elements() {
        let s = set![type_::<i32>(), type_::<String>()];
        assert!(s.contains(&type_::<String>()));
        assert!(!s.contains(&type_::<u8>()));
        assert_eq!(s, set![type_::<String>(), type_::<i32>(), type_::<i32>()]);

        let c = set![integral_c::<i32, 1>(), integral_c::<i64, 2>()];
        assert!(c.contains(&integral_c::<u8, 2>()));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_insert_and_subset() {
        let s = set![1, 2].insert(3);
        assert_eq!(s, set![1, 2, 3]);
        assert_eq!(s.insert(2).len(), 3);
        assert!(set![2].is_subset(&s));
        assert!(!s.is_subset(&set![2]));
        assert_eq!(s.into_tuple(), tuple![3, 1, 2]);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", set![1, 2]), "set(1, 2)");
    }
}
