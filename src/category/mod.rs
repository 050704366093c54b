mod collection;

pub use collection::Collection;

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    hash::Hash,
};

#[cfg(feature = "hashed")]
pub type HashState = ahash::RandomState;
#[cfg(not(feature = "hashed"))]
pub type HashState = std::collections::hash_map::RandomState;

/// Hash map produced by `zip` and by the `Mapping` category.
pub type Hashmap<K, V> = HashMap<K, V, HashState>;

/// Hash set produced by the `HashedSet` category.
pub type Hashset<T> = HashSet<T, HashState>;

/// A kind of collection, independent of what it stores.
///
/// Categories are zero sized markers. They are never instantiated,
/// only named as type parameters to pick the output of an operation.
pub trait Category: 'static {
    const NAME: &'static str;
}

/// Category `Self` rebound to element type `V`.
pub trait Holds<V>: Category {
    type Output: Collection<V>;
}

/// Ordered sequence, appends in traversal order.
pub struct Sequence;

/// Double ended sequence, appends at the back.
pub struct Deque;

/// Linked list, appends at the back.
pub struct List;

/// Set ordered by `Ord`.
pub struct OrderedSet;

/// Set hashed by `Hash`.
pub struct HashedSet;

/// Mapping ordered by key. Elements are `(key, value)` pairs.
pub struct OrderedMapping;

/// Mapping hashed by key. Elements are `(key, value)` pairs.
pub struct Mapping;

impl Category for Sequence {
    const NAME: &'static str = "sequence";
}

impl<V> Holds<V> for Sequence {
    type Output = Vec<V>;
}

impl Category for Deque {
    const NAME: &'static str = "deque";
}

impl<V> Holds<V> for Deque {
    type Output = VecDeque<V>;
}

impl Category for List {
    const NAME: &'static str = "list";
}

impl<V> Holds<V> for List {
    type Output = LinkedList<V>;
}

impl Category for OrderedSet {
    const NAME: &'static str = "ordered set";
}

impl<V: Ord> Holds<V> for OrderedSet {
    type Output = BTreeSet<V>;
}

impl Category for HashedSet {
    const NAME: &'static str = "hashed set";
}

impl<V: Eq + Hash> Holds<V> for HashedSet {
    type Output = Hashset<V>;
}

impl Category for OrderedMapping {
    const NAME: &'static str = "ordered mapping";
}

impl<K: Ord, W> Holds<(K, W)> for OrderedMapping {
    type Output = BTreeMap<K, W>;
}

impl Category for Mapping {
    const NAME: &'static str = "mapping";
}

impl<K: Eq + Hash, W> Holds<(K, W)> for Mapping {
    type Output = Hashmap<K, W>;
}

/// Builds `O` by passing every item through `f` and putting the result,
/// in iteration order.
pub(crate) fn collect<O, I, F, V>(iter: I, mut f: F) -> O
where
    O: Collection<V>,
    I: Iterator,
    F: FnMut(I::Item) -> V,
{
    let mut output = O::with_capacity(iter.size_hint().0);
    for item in iter {
        output.put(f(item));
    }
    output
}
