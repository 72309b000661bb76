use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type that remembers insertion order.
///
/// Lookups go through a hash index, iteration follows the order in which keys
/// were first inserted. Replacing the value of an existing key keeps its position.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::new();
/// map.insert_type::<u8>("u8");
/// map.insert_type::<bool>("bool");
/// map.insert_type::<u8>("byte");
///
/// let values: Vec<_> = map.values().copied().collect();
/// assert_eq!(values, ["byte", "bool"]);
/// assert_eq!(map.get(&TypeId::of::<bool>()), Some(&"bool"));
/// ```
pub struct TypeIdMap<V> {
    indices: HashMap<TypeId, usize, NoOpHashState>,
    entries: Vec<(TypeId, V)>,
}

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            indices: HashMap::with_hasher(NoOpHashState),
            entries: Vec::new(),
        }
    }

    /// Creates an empty `TypeIdMap` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity_and_hasher(capacity, NoOpHashState),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair, returning the previous value of the key.
    ///
    /// A new key is appended at the end; an existing key keeps its position.
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        match self.indices.entry(type_id) {
            Entry::Occupied(entry) => {
                let slot = &mut self.entries[*entry.get()].1;
                Some(core::mem::replace(slot, value))
            }
            Entry::Vacant(entry) => {
                entry.insert(self.entries.len());
                self.entries.push((type_id, value));
                None
            }
        }
    }

    /// Inserts a value keyed by the type `T`.
    #[inline(always)]
    pub fn insert_type<T: ?Sized + 'static>(&mut self, value: V) -> Option<V> {
        self.insert(TypeId::of::<T>(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        let index = *self.indices.get(type_id)?;
        Some(&self.entries[index].1)
    }

    /// Returns a reference to the value keyed by the type `T`.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.indices.contains_key(type_id)
    }

    /// Returns the number of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// An iterator visiting all key-value pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// An iterator visiting all values in insertion order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// An iterator visiting all keys in insertion order.
    #[inline]
    pub fn types(&self) -> impl ExactSizeIterator<Item = &TypeId> {
        self.entries.iter().map(|(key, _)| key)
    }
}

// -----------------------------------------------------------------------------
// Traits

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self {
            indices: self.indices.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> FromIterator<(TypeId, V)> for TypeIdMap<V> {
    fn from_iter<I: IntoIterator<Item = (TypeId, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn keeps_first_insertion_order() {
        let mut map = TypeIdMap::new();
        assert_eq!(map.insert_type::<i32>(1), None);
        assert_eq!(map.insert_type::<f64>(2), None);
        assert_eq!(map.insert_type::<char>(3), None);
        assert_eq!(map.insert_type::<f64>(20), Some(2));

        let keys: alloc::vec::Vec<_> = map.types().copied().collect();
        assert_eq!(
            keys,
            [TypeId::of::<i32>(), TypeId::of::<f64>(), TypeId::of::<char>()]
        );
        assert_eq!(map.get_type::<f64>(), Some(&20));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn missing_keys() {
        let map: TypeIdMap<u8> = TypeIdMap::default();
        assert!(map.is_empty());
        assert!(!map.contains(&TypeId::of::<u8>()));
        assert_eq!(map.get_type::<u8>(), None);
    }

    #[test]
    fn collect_replaces_duplicates() {
        let map: TypeIdMap<&str> = [
            (TypeId::of::<u8>(), "a"),
            (TypeId::of::<u16>(), "b"),
            (TypeId::of::<u8>(), "c"),
        ]
        .into_iter()
        .collect();

        let values: alloc::vec::Vec<_> = map.values().copied().collect();
        assert_eq!(values, ["c", "b"]);
    }
}
