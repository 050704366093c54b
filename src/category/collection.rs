use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    hash::{BuildHasher, Hash},
};

/// Insertion contract of a container category.
///
/// Sequences append. Sets and mappings insert-or-overwrite, the later
/// of two equal elements/keys wins.
pub trait Collection<T>: Sized {
    fn empty() -> Self;

    /// Hint only, categories without preallocation ignore it.
    fn with_capacity(_capacity: usize) -> Self {
        Self::empty()
    }

    fn put(&mut self, item: T);
}

impl<T> Collection<T> for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn put(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Collection<T> for VecDeque<T> {
    fn empty() -> Self {
        VecDeque::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn put(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Collection<T> for LinkedList<T> {
    fn empty() -> Self {
        LinkedList::new()
    }

    fn put(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }

    fn put(&mut self, item: T) {
        self.replace(item);
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> Collection<T> for HashSet<T, S> {
    fn empty() -> Self {
        HashSet::with_hasher(S::default())
    }

    fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity_and_hasher(capacity, S::default())
    }

    fn put(&mut self, item: T) {
        self.replace(item);
    }
}

impl<K: Ord, V> Collection<(K, V)> for BTreeMap<K, V> {
    fn empty() -> Self {
        BTreeMap::new()
    }

    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> Collection<(K, V)> for HashMap<K, V, S> {
    fn empty() -> Self {
        HashMap::with_hasher(S::default())
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn put(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    /// Equal by `key` only, so replacement is observable through `tag`.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: u32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl Hash for Tagged {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.key.hash(state);
        }
    }

    #[test]
    fn ordered_set_overwrites() {
        let mut set: BTreeSet<Tagged> = Collection::empty();
        set.put(Tagged { key: 1, tag: 'a' });
        set.put(Tagged { key: 1, tag: 'b' });
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().tag, 'b');
    }

    #[test]
    fn hashed_set_overwrites() {
        let mut set = <HashSet<Tagged> as Collection<Tagged>>::with_capacity(2);
        set.put(Tagged { key: 1, tag: 'a' });
        set.put(Tagged { key: 1, tag: 'b' });
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().tag, 'b');
    }

    #[test]
    fn vec_appends() {
        let mut vec = <Vec<u32> as Collection<u32>>::with_capacity(4);
        assert!(vec.capacity() >= 4);
        vec.put(2);
        vec.put(2);
        vec.put(1);
        assert_eq!(vec, vec![2, 2, 1]);
    }

    #[test]
    fn hash_map_overwrites() {
        let mut map: HashMap<u32, char> = Collection::empty();
        map.put((1, 'a'));
        map.put((2, 'b'));
        map.put((1, 'c'));
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], 'c');
    }

    #[test]
    fn list_ignores_capacity() {
        let mut list = <LinkedList<u32> as Collection<u32>>::with_capacity(16);
        assert!(list.is_empty());
        list.put(1);
        list.put(1);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 1]);
    }
}
