use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Values grouped by key in a single pass.
///
/// Keys are kept in order of first appearance, and each group keeps its values in the order they
/// were pushed. No sorting happens at any point.
#[derive(Debug, Clone)]
pub struct Grouped<K, V> {
    lookup_map: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K, V> Default for Grouped<K, V> {
    fn default() -> Self {
        Self {
            lookup_map: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Grouped<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: K, value: V) {
        if let Some(&index) = self.lookup_map.get(&key) {
            self.groups[index].1.push(value);
            return;
        }

        self.lookup_map.insert(key.clone(), self.groups.len());
        self.groups.push((key, vec![value]));
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        return self
            .lookup_map
            .get(key)
            .map(|&index| self.groups[index].1.as_slice());
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Grouped<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut grouped = Self::new();

        for (key, value) in iter {
            grouped.push(key, value);
        }

        grouped
    }
}

impl<K, V> IntoIterator for Grouped<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

// Key order is part of the value, the lookup map is derived from it
impl<K: PartialEq, V: PartialEq> PartialEq for Grouped<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K: Serialize, V: Serialize> Serialize for Grouped<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;

        for (key, values) in self.groups.iter() {
            map.serialize_entry(key, values)?;
        }

        map.end()
    }
}
