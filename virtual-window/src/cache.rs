use crate::geometry::is_valid_size;
use crate::key::{KeyCacheKey, KeySizeMap};

/// Measured sizes by id, plus the running mean used as the size estimate.
#[derive(Clone, Debug)]
pub(crate) struct SizeCache<K> {
    sizes: KeySizeMap<K>,
    sum: f64,
}

impl<K: KeyCacheKey> SizeCache<K> {
    pub(crate) fn new() -> Self {
        Self {
            sizes: KeySizeMap::<K>::new(),
            sum: 0.0,
        }
    }

    pub(crate) fn get(&self, id: &K) -> Option<f64> {
        self.sizes.get(id).copied()
    }

    pub(crate) fn contains(&self, id: &K) -> bool {
        self.sizes.contains_key(id)
    }

    /// Records `size` for `id`, replacing (not adding to) any previous contribution to the mean.
    pub(crate) fn insert(&mut self, id: K, size: f64) -> Option<f64> {
        debug_assert!(is_valid_size(size), "invalid size reached the cache: {size}");
        let prev = self.sizes.insert(id, size);
        self.sum += size - prev.unwrap_or(0.0);
        prev
    }

    pub(crate) fn len(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.sizes.clear();
        self.sum = 0.0;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.sizes.iter().map(|(k, v)| (k, *v))
    }

    /// Mean of all recorded sizes, `None` while nothing has been measured.
    pub(crate) fn average(&self) -> Option<f64> {
        if self.sizes.is_empty() {
            return None;
        }
        Some(self.sum / self.sizes.len() as f64)
    }
}
