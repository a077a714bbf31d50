//! Hash collection constructors used across the crate
//!
//! Every map and set in fontmerge goes through these helpers so the hasher
//! choice lives in one place. ahash gives fast, `DoS`-resistant hashing for the
//! short string keys (style names, font identifiers) the engine works with.

use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// `HashMap` using the crate's hasher
pub type AHashMap<K, V> = HashMap<K, V, RandomState>;

/// `HashSet` using the crate's hasher
pub type AHashSet<T> = HashSet<T, RandomState>;

/// Create a new `HashMap` with the crate's hasher
///
/// # Example
///
/// ```rust
/// use fontmerge_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<&str, usize>();
/// map.insert("Default", 0);
/// assert_eq!(map.get("Default"), Some(&0));
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> AHashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashSet` with the crate's hasher
#[must_use]
pub fn create_hash_set<T>() -> AHashSet<T> {
    HashSet::with_hasher(RandomState::new())
}

/// Create a new `HashSet` with pre-allocated capacity
///
/// Useful when the number of entries is known up front, e.g. when matching a
/// used-font set against a catalog.
#[must_use]
pub fn create_hash_set_with_capacity<T>(capacity: usize) -> AHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_basic_operations() {
        let mut map = create_hash_map::<String, u16>();
        map.insert("Default".to_string(), 400);
        map.insert("Bold".to_string(), 700);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Bold"), Some(&700));
        assert_eq!(map.get("Missing"), None);
    }

    #[test]
    fn hash_set_rejects_duplicates() {
        let mut set = create_hash_set::<&str>();
        assert!(set.insert("Arial"));
        assert!(!set.insert("Arial"));
        assert!(set.insert("arial"));
    }

    #[test]
    fn hash_set_with_capacity_preallocates() {
        let set = create_hash_set_with_capacity::<&str>(32);
        assert!(set.capacity() >= 32);
        assert!(set.is_empty());
    }
}
