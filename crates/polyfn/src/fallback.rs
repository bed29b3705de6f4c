//! Maps that resolve missing keys through a fallback layer.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// A map that looks up keys it does not hold in a shared fallback map.
///
/// Useful where a form of inheritance is needed: a core table is maintained
/// in one place, and derived tables resolve against it transparently.
/// Writes always land in the local layer; the fallback is shared and never
/// mutated through a derived map. Fallbacks chain: a fallback may itself
/// have a fallback.
#[derive(Debug, Clone)]
pub struct FallbackMap<K, V> {
    local: HashMap<K, V>,
    fallback: Option<Arc<FallbackMap<K, V>>>,
}

impl<K, V> Default for FallbackMap<K, V> {
    fn default() -> Self {
        Self {
            local: HashMap::new(),
            fallback: None,
        }
    }
}

impl<K: Eq + Hash, V> FallbackMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: Arc<FallbackMap<K, V>>) -> Self {
        Self {
            local: HashMap::new(),
            fallback: Some(fallback),
        }
    }

    /// Chooses a new map to resolve missing keys in.
    pub fn set_fallback(&mut self, fallback: Option<Arc<FallbackMap<K, V>>>) {
        self.fallback = fallback;
    }

    pub fn fallback(&self) -> Option<&Arc<FallbackMap<K, V>>> {
        self.fallback.as_ref()
    }

    /// Local layer first, then the fallback chain.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.local
            .get(key)
            .or_else(|| self.fallback.as_ref().and_then(|f| f.get(key)))
    }

    /// Always writes to the local layer, never the fallback.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.local.insert(key, value)
    }

    /// Removes from the local layer only; a fallback entry under the same
    /// key becomes visible again.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.local.remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.local.contains_key(key)
            || self.fallback.as_ref().is_some_and(|f| f.contains_key(key))
    }

    /// Iterates the local layer, then the fallback chain. A key present in
    /// both layers appears once per layer.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        match &self.fallback {
            Some(f) => Box::new(self.local.iter().chain(f.iter())),
            None => Box::new(self.local.iter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Arc<FallbackMap<&'static str, i64>> {
        let mut base = FallbackMap::new();
        base.insert("shared", 1);
        base.insert("base_only", 2);
        Arc::new(base)
    }

    #[test]
    fn test_lookup_falls_through() {
        let mut derived = FallbackMap::with_fallback(base());
        derived.insert("own", 10);

        assert_eq!(derived.get(&"own"), Some(&10));
        assert_eq!(derived.get(&"base_only"), Some(&2));
        assert_eq!(derived.get(&"missing"), None);
        assert!(derived.contains_key(&"base_only"));
    }

    #[test]
    fn test_local_shadows_fallback() {
        let mut derived = FallbackMap::with_fallback(base());
        derived.insert("shared", 99);
        assert_eq!(derived.get(&"shared"), Some(&99));

        // Removing the local entry uncovers the fallback value.
        assert_eq!(derived.remove(&"shared"), Some(99));
        assert_eq!(derived.get(&"shared"), Some(&1));
    }

    #[test]
    fn test_fallbacks_chain() {
        let mid = Arc::new(FallbackMap::with_fallback(base()));
        let top = FallbackMap::with_fallback(mid);
        assert_eq!(top.get(&"base_only"), Some(&2));
    }

    #[test]
    fn test_iter_chains_layers() {
        let mut derived = FallbackMap::with_fallback(base());
        derived.insert("shared", 99);

        let mut seen: Vec<&str> = derived.iter().map(|(k, _)| *k).collect();
        seen.sort_unstable();
        // "shared" appears once per layer.
        assert_eq!(seen, ["base_only", "shared", "shared"]);
    }

    #[test]
    fn test_detached_map_has_no_fallback() {
        let mut map: FallbackMap<&str, i64> = FallbackMap::new();
        map.insert("k", 1);
        assert!(map.fallback().is_none());
        assert_eq!(map.get(&"missing"), None);

        map.set_fallback(Some(base()));
        assert_eq!(map.get(&"base_only"), Some(&2));
    }
}
