use std::hash::{BuildHasher, Hash};

pub fn hash_key(builder: &impl BuildHasher, key: &(impl Hash + ?Sized)) -> u64 {
    builder.hash_one(key)
}

pub fn slot_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}
