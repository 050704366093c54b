//! # Goal
//! The main goal of this library is to transform whole collections with a
//! single call, without writing a loop for every pairing of input and output
//! collection, element type, and ownership.
//!
//! Primary attribute of the library is that the caller only picks a function and
//! how the input is bound. Everything else, including reuse of the input's
//! storage, follows from the types.
//!
//! # Features
//! - Map, through `map` and `map_to`.
//!      - Responsible for: Which collection comes out and are elements cloned, moved, or rewritten in place?
//! - Zip, through `zipto` and `zip`.
//!      - Responsible for: Which positions get paired and which pair wins on a repeated key?
//!
//! # Architecture
//! There are several pieces that interact/are composable with one another:
//! - Categories - kinds of collections (sequence, set, mapping), named by marker types.
//! - Collections - concrete containers of a category, they decide how an element is inserted.
//! - Sources - inputs together with their binding: borrowed, owned, or literal.
//! - Strategies - execution paths of map, chosen from the binding and the element layouts.
//!
//! ```
//! use recollect::{category::OrderedSet, map, map_to, zip};
//!
//! assert_eq!(map(|x| x * 2, vec![1, 2, 3]), vec![2, 4, 6]);
//! assert_eq!(map_to::<OrderedSet, _, _, _>(|x| x % 2, [1, 2, 3, 4]).len(), 2);
//! assert_eq!(zip([1, 1, 2], ["a", "b", "c"])[&1], "b");
//! ```

//? Important decisions:
//? - Output categories are marker types rather than generic-over-generic parameters.
//?   A mapping is a category over (key, value) pairs, so a set and a mapping are rebound the same way.
//?
//? - In place rewrite is decided by layout, not type identity. Same type always qualifies,
//?   layout twins qualify too. Only buffer backed sequences can do it.
//?
//? - Zip never errors on length mismatch, it stops at the shorter input.

pub mod category;
pub mod map;
pub mod source;
pub mod strategy;
pub mod util;
pub mod zip;

pub use category::{Category, Collection, Hashmap, Hashset, Holds};
pub use map::{map, map_to, Map};
pub use source::Source;
pub use strategy::{Binding, Plan, Strategy};
pub use zip::{zip, zipto};
