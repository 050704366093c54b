use crate::{
    category::{Category, Deque, HashedSet, List, Mapping, OrderedMapping, OrderedSet, Sequence},
    strategy::Binding,
};
use std::{
    array,
    collections::{
        btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque, BTreeMap, BTreeSet,
        HashMap, HashSet, LinkedList, VecDeque,
    },
    iter::{Cloned, Map},
    slice, vec,
};

/// Input of an operation, together with how it is bound.
///
/// Borrowed inputs hand out clones of their elements, owned and literal
/// inputs hand out the elements themselves. Mappings hand out
/// `(key, value)` pairs.
pub trait Source: Sized {
    type Elem;

    /// Category of the input, and of the output when the caller doesn't pick one.
    type Category: Category;

    type Elements: Iterator<Item = Self::Elem>;

    const BINDING: Binding;

    /// Number of elements `elements` will yield.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Traverses in the input's own order.
    fn elements(self) -> Self::Elements;
}

type ClonePair<'a, K, V> = fn((&'a K, &'a V)) -> (K, V);

fn clone_pair<K: Clone, V: Clone>((key, value): (&K, &V)) -> (K, V) {
    (key.clone(), value.clone())
}

macro_rules! source {
    ($binding:ident $category:ident for [$($g:tt)*] $ty:ty {
        elem: $elem:ty,
        elements: $iter:ty = |$this:ident| $elements:expr,
        len: |$that:ident| $len:expr $(,)?
    }) => {
        impl<$($g)*> Source for $ty {
            type Elem = $elem;
            type Category = $category;
            type Elements = $iter;

            const BINDING: Binding = Binding::$binding;

            fn len(&self) -> usize {
                let $that = self;
                $len
            }

            fn elements(self) -> Self::Elements {
                let $this = self;
                $elements
            }
        }
    };
}

// ***************************************** Borrowed ********************************************* //

source!(Borrowed Sequence for ['a, U: Clone] &'a Vec<U> {
    elem: U,
    elements: Cloned<slice::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |this| Vec::len(this),
});

source!(Borrowed Sequence for ['a, U: Clone] &'a [U] {
    elem: U,
    elements: Cloned<slice::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |this| <[U]>::len(this),
});

source!(Borrowed Sequence for ['a, U: Clone, const N: usize] &'a [U; N] {
    elem: U,
    elements: Cloned<slice::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |_this| N,
});

source!(Borrowed Deque for ['a, U: Clone] &'a VecDeque<U> {
    elem: U,
    elements: Cloned<vec_deque::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |this| VecDeque::len(this),
});

source!(Borrowed List for ['a, U: Clone] &'a LinkedList<U> {
    elem: U,
    elements: Cloned<linked_list::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |this| LinkedList::len(this),
});

source!(Borrowed OrderedSet for ['a, U: Clone] &'a BTreeSet<U> {
    elem: U,
    elements: Cloned<btree_set::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |this| BTreeSet::len(this),
});

source!(Borrowed HashedSet for ['a, U: Clone, S] &'a HashSet<U, S> {
    elem: U,
    elements: Cloned<hash_set::Iter<'a, U>> = |this| this.iter().cloned(),
    len: |this| HashSet::len(this),
});

source!(Borrowed OrderedMapping for ['a, K: Clone, V: Clone] &'a BTreeMap<K, V> {
    elem: (K, V),
    elements: Map<btree_map::Iter<'a, K, V>, ClonePair<'a, K, V>> =
        |this| this.iter().map(clone_pair as ClonePair<'a, K, V>),
    len: |this| BTreeMap::len(this),
});

source!(Borrowed Mapping for ['a, K: Clone, V: Clone, S] &'a HashMap<K, V, S> {
    elem: (K, V),
    elements: Map<hash_map::Iter<'a, K, V>, ClonePair<'a, K, V>> =
        |this| this.iter().map(clone_pair as ClonePair<'a, K, V>),
    len: |this| HashMap::len(this),
});

// ***************************************** Owned ********************************************* //

source!(Owned Sequence for [U] Vec<U> {
    elem: U,
    elements: vec::IntoIter<U> = |this| this.into_iter(),
    len: |this| Vec::len(this),
});

source!(Owned Deque for [U] VecDeque<U> {
    elem: U,
    elements: vec_deque::IntoIter<U> = |this| this.into_iter(),
    len: |this| VecDeque::len(this),
});

source!(Owned List for [U] LinkedList<U> {
    elem: U,
    elements: linked_list::IntoIter<U> = |this| this.into_iter(),
    len: |this| LinkedList::len(this),
});

source!(Owned OrderedSet for [U] BTreeSet<U> {
    elem: U,
    elements: btree_set::IntoIter<U> = |this| this.into_iter(),
    len: |this| BTreeSet::len(this),
});

source!(Owned HashedSet for [U, S] HashSet<U, S> {
    elem: U,
    elements: hash_set::IntoIter<U> = |this| this.into_iter(),
    len: |this| HashSet::len(this),
});

source!(Owned OrderedMapping for [K, V] BTreeMap<K, V> {
    elem: (K, V),
    elements: btree_map::IntoIter<K, V> = |this| this.into_iter(),
    len: |this| BTreeMap::len(this),
});

source!(Owned Mapping for [K, V, S] HashMap<K, V, S> {
    elem: (K, V),
    elements: hash_map::IntoIter<K, V> = |this| this.into_iter(),
    len: |this| HashMap::len(this),
});

// ***************************************** Literal ********************************************* //

source!(Literal Sequence for [U, const N: usize] [U; N] {
    elem: U,
    elements: array::IntoIter<U, N> = |this| IntoIterator::into_iter(this),
    len: |_this| N,
});
