use crate::{
    category::{collect, Collection, Hashmap, Holds},
    source::Source,
};
use log::*;
use std::{
    any::type_name,
    hash::Hash,
    iter::{Take, Zip},
};

/// Pairs `a` and `b` by position into a collection of category `O`.
///
/// Stops at the shorter of the two, the rest of the longer one is never visited.
pub fn zipto<O, A, B>(a: A, b: B) -> O::Output
where
    O: Holds<(A::Elem, B::Elem)>,
    A: Source,
    B: Source,
{
    trace!(
        "zip to {}: {} x {} -> {}",
        O::NAME,
        type_name::<A>(),
        type_name::<B>(),
        type_name::<O::Output>()
    );
    collect(pairs(a, b), |pair| pair)
}

/// Pairs `a` and `b` by position into a mapping from `a` to `b`.
///
/// Stops at the shorter of the two. If `a` repeats a key, the pair at the
/// later position wins.
pub fn zip<A, B>(a: A, b: B) -> Hashmap<A::Elem, B::Elem>
where
    A: Source,
    B: Source,
    A::Elem: Eq + Hash,
{
    trace!(
        "zip: {} x {} -> {}",
        type_name::<A>(),
        type_name::<B>(),
        type_name::<Hashmap<A::Elem, B::Elem>>()
    );

    // Straight into the map, no intermediate pair sequence.
    let mut output = <Hashmap<_, _> as Collection<_>>::with_capacity(a.len().min(b.len()));
    for (key, value) in pairs(a, b) {
        output.insert(key, value);
    }
    output
}

/// Elements of both, position by position, limited to the shorter.
fn pairs<A: Source, B: Source>(
    a: A,
    b: B,
) -> Zip<Take<A::Elements>, Take<B::Elements>> {
    // Bounding both sides keeps zip from pulling, and so cloning,
    // one element past the end of the shorter.
    let len = a.len().min(b.len());
    a.elements().take(len).zip(b.elements().take(len))
}
