use crate::key_value::KeyValue;
use std::borrow::Borrow;

/// Chain of entries whose keys share a slot, kept in insertion order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket<K, V>(Vec<KeyValue<K, V>>);

impl<K, V> Bucket<K, V> {
    pub fn new() -> Self {
        Bucket(Vec::new())
    }

    pub fn entries(&self) -> &[KeyValue<K, V>] {
        &self.0
    }

    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> Bucket<K, V> {
    fn find_index<Q: Eq + ?Sized>(&self, k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
    {
        self.0.iter().position(|key_value| key_value.key().borrow() == k)
    }

    /// Returns true if the key was not in the chain before.
    pub fn insert(&mut self, k: K, v: V) -> bool {
        match self.find_index(&k) {
            Some(i) => {
                *self.0[i].value_mut() = v;
                false
            }
            None => {
                self.0.push(KeyValue::new(k, v));
                true
            }
        }
    }

    pub fn delete<Q: Eq + ?Sized>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        self.find_index(k).map(|i| self.0.remove(i).into_value())
    }

    pub fn find<Q: Eq + ?Sized>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.find_index(k).map(|i| self.0[i].value())
    }

    pub fn find_mut<Q: Eq + ?Sized>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
    {
        self.find_index(k).map(|i| self.0[i].value_mut())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bucket(kvs: &[(i32, i32)]) -> Bucket<i32, i32> {
        let mut b = Bucket::new();

        for &(k, v) in kvs {
            b.insert(k, v);
        }

        b
    }

    #[test]
    fn new() {
        let b = Bucket::<usize, usize>::new();

        assert!(b.is_empty());
        assert_eq!(b.size(), 0);
    }

    #[test]
    fn insert() {
        let mut b = Bucket::new();

        assert!(b.insert(42, 0));
        assert_eq!(b.size(), 1);

        assert!(b.insert(0, 0));
        assert_eq!(b.size(), 2);
    }

    #[test]
    fn insert_existing_key_replaces_value() {
        let mut b = bucket(&[(42, 0), (7, 0)]);

        assert!(!b.insert(42, 1));
        assert_eq!(b.size(), 2);
        assert_eq!(b.find(&42), Some(&1));
        assert_eq!(b.entries()[0], KeyValue::new(42, 1));
    }

    #[test]
    fn delete() {
        let mut b = bucket(&[(42, 0)]);

        assert_eq!(b.delete(&0), None);
        assert_eq!(b.delete(&42), Some(0));
        assert!(b.is_empty());
        assert_eq!(b.delete(&42), None);
    }

    #[test]
    fn delete_keeps_order_of_rest() {
        let mut b = bucket(&[(1, 10), (2, 20), (3, 30)]);

        b.delete(&2);

        assert_eq!(b, bucket(&[(1, 10), (3, 30)]));
    }

    #[test]
    fn find() {
        let b = bucket(&[(42, 0)]);

        assert_eq!(b.find(&42), Some(&0));
        assert_eq!(b.find(&0), None);
    }

    #[test]
    fn find_mut() {
        let mut b = bucket(&[(42, 0)]);

        *b.find_mut(&42).unwrap() += 5;

        assert_eq!(b.find(&42), Some(&5));
        assert_eq!(b.find_mut(&0), None);
    }

    #[test]
    fn find_borrowed() {
        let mut b = Bucket::new();

        b.insert(String::from("Heat"), 1);

        assert_eq!(b.find("Heat"), Some(&1));
        assert_eq!(b.find("heat"), None);
    }
}
