use crate::{
    category::{collect, Hashmap, Hashset, Holds},
    source::Source,
    strategy::{reuses_storage, Binding, Plan, Strategy},
    util::recycle,
};
use log::*;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    hash::Hash,
};

/// Maps `f` over `input` keeping its category.
///
/// Which path is taken depends on how `input` is bound:
/// - `&C` clones every element into a new `C`.
/// - `C` moves every element into a new `C`, or rewrites `C` in place when
///   it's a buffer backed sequence and the element type keeps its layout.
/// - `[U; N]` builds a `Vec`.
///
/// `Plan::map` tells which one, without running it.
pub fn map<I, F, V>(f: F, input: I) -> I::Output
where
    I: Map<V>,
    F: FnMut(I::Elem) -> V,
{
    trace!("map {}", Plan::map::<I, V>());
    input.map_with(f)
}

/// Maps `f` over `input` into a new collection of category `O`.
///
/// Elements are put in input traversal order, so whether duplicates
/// survive is up to `O`.
pub fn map_to<O, I, F, V>(f: F, input: I) -> O::Output
where
    O: Holds<V>,
    I: Source,
    F: FnMut(I::Elem) -> V,
{
    trace!("map to {} {}", O::NAME, Plan::map_to::<O, I, V>());
    collect(input.elements(), f)
}

/// Category preserving map of a bound input.
///
/// Only owned `Vec` and `VecDeque` reuse their storage. Lists, sets and
/// mappings always build a fresh output, even when the element type is kept.
pub trait Map<V>: Source {
    type Output;

    const STRATEGY: Strategy;

    fn map_with<F: FnMut(Self::Elem) -> V>(self, f: F) -> Self::Output;
}

/// Implements `Map` by collecting into a fresh output.
macro_rules! map_by_collecting {
    ($strategy:ident for [$($g:tt)*] $ty:ty => $output:ty as $v:ty) => {
        impl<$($g)*> Map<$v> for $ty {
            type Output = $output;

            const STRATEGY: Strategy = Strategy::$strategy;

            fn map_with<F: FnMut(Self::Elem) -> $v>(self, f: F) -> Self::Output {
                collect(self.elements(), f)
            }
        }
    };
}

map_by_collecting!(CopyConvert for ['a, U: Clone, V] &'a Vec<U> => Vec<V> as V);
map_by_collecting!(CopyConvert for ['a, U: Clone, V] &'a [U] => Vec<V> as V);
map_by_collecting!(CopyConvert for ['a, U: Clone, V, const N: usize] &'a [U; N] => Vec<V> as V);
map_by_collecting!(CopyConvert for ['a, U: Clone, V] &'a VecDeque<U> => VecDeque<V> as V);
map_by_collecting!(CopyConvert for ['a, U: Clone, V] &'a LinkedList<U> => LinkedList<V> as V);
map_by_collecting!(CopyConvert for ['a, U: Clone, V: Ord] &'a BTreeSet<U> => BTreeSet<V> as V);
map_by_collecting!(CopyConvert for ['a, U: Clone, S, V: Eq + Hash] &'a HashSet<U, S> => Hashset<V> as V);
map_by_collecting!(CopyConvert for ['a, K: Clone, W: Clone, K2: Ord, W2]
    &'a BTreeMap<K, W> => BTreeMap<K2, W2> as (K2, W2));
map_by_collecting!(CopyConvert for ['a, K: Clone, W: Clone, S, K2: Eq + Hash, W2]
    &'a HashMap<K, W, S> => Hashmap<K2, W2> as (K2, W2));

map_by_collecting!(MoveConvert for [U, V] LinkedList<U> => LinkedList<V> as V);
map_by_collecting!(MoveConvert for [U, V: Ord] BTreeSet<U> => BTreeSet<V> as V);
map_by_collecting!(MoveConvert for [U, S, V: Eq + Hash] HashSet<U, S> => Hashset<V> as V);
map_by_collecting!(MoveConvert for [K, W, K2: Ord, W2] BTreeMap<K, W> => BTreeMap<K2, W2> as (K2, W2));
map_by_collecting!(MoveConvert for [K, W, S, K2: Eq + Hash, W2]
    HashMap<K, W, S> => Hashmap<K2, W2> as (K2, W2));

map_by_collecting!(LiteralConvert for [U, V, const N: usize] [U; N] => Vec<V> as V);

impl<U, V> Map<V> for Vec<U> {
    type Output = Vec<V>;

    const STRATEGY: Strategy = Strategy::select(Binding::Owned, false, reuses_storage::<U, V>());

    fn map_with<F: FnMut(U) -> V>(self, f: F) -> Vec<V> {
        match <Self as Map<V>>::STRATEGY {
            Strategy::MoveInPlace => recycle(self, f),
            _ => collect(self.into_iter(), f),
        }
    }
}

impl<U, V> Map<V> for VecDeque<U> {
    type Output = VecDeque<V>;

    const STRATEGY: Strategy = Strategy::select(Binding::Owned, false, reuses_storage::<U, V>());

    fn map_with<F: FnMut(U) -> V>(self, f: F) -> VecDeque<V> {
        match <Self as Map<V>>::STRATEGY {
            // Neither conversion reallocates.
            Strategy::MoveInPlace => VecDeque::from(recycle(Vec::from(self), f)),
            _ => collect(self.into_iter(), f),
        }
    }
}
