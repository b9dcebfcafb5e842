//! One-shot reveal-on-scroll tracking.
//!
//! Content blocks start hidden and become visible the first time enough of
//! them scrolls into the viewport. Each observation fires at most once and is
//! dropped right after, so scrolling away and back never re-arms it.
//! Blocks observed independently fire in no particular order relative to
//! each other.

use crate::core::error::DomainError;
use std::collections::HashSet;
use std::hash::Hash;

/// Default fraction of a block that must be on screen before it reveals
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Vertical extent of a block or viewport, in rows from the top of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub top: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Rows shared with `other`
    pub fn overlap(&self, other: &Extent) -> u32 {
        let start = self.top.max(other.top);
        let end = self.bottom().min(other.bottom());
        end.saturating_sub(start)
    }

    /// Fraction of `self` that lies inside `viewport`, in `[0, 1]`
    pub fn intersection_ratio(&self, viewport: &Extent) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.overlap(viewport) as f32 / self.height as f32
    }
}

type Callback<K> = Box<dyn FnOnce(&K) + Send>;

struct Observation<K> {
    key: K,
    extent: Extent,
    on_first_visible: Option<Callback<K>>,
}

/// Tracks which blocks have been revealed.
///
/// Dropping the tracker tears down every pending observation.
pub struct RevealTracker<K> {
    threshold: f32,
    pending: Vec<Observation<K>>,
    revealed: HashSet<K>,
}

impl<K: Clone + Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            pending: Vec::new(),
            revealed: HashSet::new(),
        }
    }

    /// Create a tracker with a custom threshold in `(0, 1]`
    pub fn with_threshold(threshold: f32) -> Result<Self, DomainError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(DomainError::InvalidThreshold(threshold.to_string()));
        }
        Ok(Self {
            threshold,
            ..Self::new()
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Observe a block and run `on_first_visible` the first time it shows.
    ///
    /// Returns `false` (and drops the callback) if the key is already
    /// revealed or already observed.
    pub fn observe<F>(&mut self, key: K, extent: Extent, on_first_visible: F) -> bool
    where
        F: FnOnce(&K) + Send + 'static,
    {
        self.insert(key, extent, Some(Box::new(on_first_visible)))
    }

    /// Observe a block without a callback; read the result from [`update`](Self::update)
    pub fn track(&mut self, key: K, extent: Extent) -> bool {
        self.insert(key, extent, None)
    }

    fn insert(&mut self, key: K, extent: Extent, callback: Option<Callback<K>>) -> bool {
        if self.revealed.contains(&key) || self.is_observing(&key) {
            return false;
        }
        self.pending.push(Observation {
            key,
            extent,
            on_first_visible: callback,
        });
        true
    }

    /// Move a still-pending block (layout changed). Revealed blocks are ignored.
    pub fn relocate(&mut self, key: &K, extent: Extent) {
        if let Some(obs) = self.pending.iter_mut().find(|o| &o.key == key) {
            obs.extent = extent;
        }
    }

    /// Stop observing a block without revealing it
    pub fn unobserve(&mut self, key: &K) {
        self.pending.retain(|o| &o.key != key);
    }

    /// Check every pending block against the viewport.
    ///
    /// Blocks crossing the threshold fire their callback, stop being
    /// observed, and are returned.
    pub fn update(&mut self, viewport: Extent) -> Vec<K> {
        let threshold = self.threshold;
        let (hit, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|o| {
                    o.extent.overlap(&viewport) > 0
                        && o.extent.intersection_ratio(&viewport) >= threshold
                });
        self.pending = rest;

        let mut fired = Vec::with_capacity(hit.len());
        for obs in hit {
            if let Some(callback) = obs.on_first_visible {
                callback(&obs.key);
            }
            self.revealed.insert(obs.key.clone());
            fired.push(obs.key);
        }
        fired
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn is_observing(&self, key: &K) -> bool {
        self.pending.iter().any(|o| &o.key == key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<K: Clone + Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_intersection_ratio() {
        let block = Extent::new(10, 10);
        assert_eq!(block.intersection_ratio(&Extent::new(0, 10)), 0.0);
        assert_eq!(block.intersection_ratio(&Extent::new(0, 11)), 0.1);
        assert_eq!(block.intersection_ratio(&Extent::new(0, 100)), 1.0);
        assert_eq!(Extent::new(5, 0).intersection_ratio(&Extent::new(0, 100)), 0.0);
    }

    #[test]
    fn test_fires_once_past_threshold() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut tracker = RevealTracker::new();
        let counter = calls.clone();
        assert!(tracker.observe("projects", Extent::new(40, 20), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        // Only 1 of 20 rows visible: 5% < 10%
        assert!(tracker.update(Extent::new(0, 41)).is_empty());
        assert!(!tracker.is_revealed(&"projects"));

        // 2 of 20 rows: exactly 10%
        assert_eq!(tracker.update(Extent::new(0, 42)), vec!["projects"]);
        assert!(tracker.is_revealed(&"projects"));
        assert!(!tracker.is_observing(&"projects"));

        // Scroll away and back: not re-armed
        assert!(tracker.update(Extent::new(200, 20)).is_empty());
        assert!(tracker.update(Extent::new(40, 20)).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observe_revealed_key_is_rejected() {
        let mut tracker = RevealTracker::new();
        tracker.track(1u8, Extent::new(0, 5));
        tracker.update(Extent::new(0, 10));
        assert!(!tracker.track(1u8, Extent::new(0, 5)));
        assert!(!tracker.observe(1u8, Extent::new(0, 5), |_| panic!("must not run")));
        assert_eq!(tracker.pending_count(), 0);
    }

    #[test]
    fn test_duplicate_observe_is_rejected() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.track("a", Extent::new(0, 5)));
        assert!(!tracker.track("a", Extent::new(50, 5)));
        assert_eq!(tracker.pending_count(), 1);
    }

    #[test]
    fn test_independent_blocks() {
        let mut tracker = RevealTracker::new();
        tracker.track("hero", Extent::new(0, 10));
        tracker.track("contact", Extent::new(100, 10));

        let mut first = tracker.update(Extent::new(0, 30));
        first.sort();
        assert_eq!(first, vec!["hero"]);
        assert!(tracker.is_observing(&"contact"));

        assert_eq!(tracker.update(Extent::new(95, 30)), vec!["contact"]);
    }

    #[test]
    fn test_relocate_and_unobserve() {
        let mut tracker = RevealTracker::new();
        tracker.track("a", Extent::new(100, 10));
        tracker.relocate(&"a", Extent::new(0, 10));
        assert_eq!(tracker.update(Extent::new(0, 10)), vec!["a"]);

        tracker.track("b", Extent::new(0, 10));
        tracker.unobserve(&"b");
        assert!(tracker.update(Extent::new(0, 10)).is_empty());
        assert!(!tracker.is_revealed(&"b"));
    }

    #[test]
    fn test_custom_threshold_validation() {
        assert!(RevealTracker::<u8>::with_threshold(0.5).is_ok());
        assert!(RevealTracker::<u8>::with_threshold(1.0).is_ok());
        assert!(RevealTracker::<u8>::with_threshold(0.0).is_err());
        assert!(RevealTracker::<u8>::with_threshold(1.5).is_err());
        assert!(RevealTracker::<u8>::with_threshold(f32::NAN).is_err());
    }

    #[test]
    fn test_full_threshold_requires_whole_block() {
        let mut tracker = RevealTracker::with_threshold(1.0).unwrap();
        tracker.track("a", Extent::new(10, 10));
        assert!(tracker.update(Extent::new(0, 19)).is_empty());
        assert_eq!(tracker.update(Extent::new(0, 20)), vec!["a"]);
    }
}
