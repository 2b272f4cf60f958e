use crate::{
    bucket::Bucket,
    key_value::KeyValue,
    utilities::{hash_key, slot_index},
};
use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, BuildHasherDefault, Hash},
    slice,
};

/// Number of buckets used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 743;

/// Hasher builder producing the same hash for a key on every run.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// Hash table with separate chaining over a fixed number of buckets.
///
/// The bucket count is chosen at construction and never changes. The table
/// does not grow when its load factor rises; chains simply get longer.
///
/// Mutation takes `&mut self`, so sharing a table between threads requires
/// an external lock around it.
#[derive(Clone, Debug)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    size: usize,
    buckets: Vec<Bucket<K, V>>,
    hash_builder: S,
}

impl<K, V> HashTable<K, V> {
    /// Creates a table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with a given number of buckets. Zero is treated as
    /// one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Creates a table with a given number of buckets and hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let mut buckets = Vec::with_capacity(capacity.max(1));
        buckets.resize_with(capacity.max(1), Bucket::new);

        Self {
            size: 0,
            buckets,
            hash_builder,
        }
    }

    /// Returns a number of entries in a table.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if a table has no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns a ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Returns a number of buckets holding at least one entry.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }

    /// Returns entries in bucket order, then chain order within a bucket.
    pub fn iter(&self) -> HashTableIterator<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashTable<K, V, S> {
    fn slot<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        slot_index(hash_key(&self.hash_builder, key), self.capacity())
    }

    /// Inserts a key-value pair, replacing the value of an equal key if one
    /// exists. Returns true if the key was not present before.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let index = self.slot(&key);
        let inserted = self.buckets[index].insert(key, value);

        self.size += inserted as usize;

        inserted
    }

    /// Finds a value corresponding to a key.
    pub fn get<Q: Hash + Eq + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.buckets[self.slot(key)].find(key)
    }

    /// Finds a mutable value corresponding to a key.
    pub fn get_mut<Q: Hash + Eq + ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
    {
        let index = self.slot(key);

        self.buckets[index].find_mut(key)
    }

    /// Checks if a key is present.
    pub fn contains_key<Q: Hash + Eq + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.get(key).is_some()
    }

    /// Removes an entry and returns its value, if any.
    pub fn remove<Q: Hash + Eq + ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        let index = self.slot(key);
        let value = self.buckets[index].delete(key)?;

        self.size -= 1;

        Some(value)
    }
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut table = Self::new();

        for (key, value) in iterator {
            table.put(key, value);
        }

        table
    }
}

#[derive(Debug)]
pub struct HashTableIterator<'a, K: 'a, V: 'a> {
    buckets: slice::Iter<'a, Bucket<K, V>>,
    chain: slice::Iter<'a, KeyValue<K, V>>,
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type IntoIter = HashTableIterator<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        HashTableIterator {
            buckets: self.buckets.iter(),
            chain: Default::default(),
        }
    }
}

impl<'a, K, V> Iterator for HashTableIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key_value) = self.chain.next() {
                return Some((key_value.key(), key_value.value()));
            }

            self.chain = self.buckets.next()?.entries().iter();
        }
    }
}
