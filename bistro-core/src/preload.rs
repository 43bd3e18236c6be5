//! Image preload bookkeeping.
use std::collections::HashSet;

/// URLs already requested for preloading. Owned by the app root and shared by
/// reference; never cleared, bounded by the size of the bundled content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadCache {
    requested: HashSet<String>,
}

impl PreloadCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as requested. Returns `true` only the first time.
    pub fn claim(&mut self, url: &str) -> bool {
        if url.is_empty() || self.requested.contains(url) {
            return false;
        }
        self.requested.insert(url.to_string())
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.requested.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requested.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PreloadCache;

    #[test]
    fn claim_is_true_once_per_url() {
        let mut cache = PreloadCache::new();
        assert!(cache.claim("/img/a.webp"));
        assert!(!cache.claim("/img/a.webp"));
        assert!(cache.claim("/img/b.webp"));
        assert!(!cache.claim(""));
        assert_eq!(cache.len(), 2);
    }
}
