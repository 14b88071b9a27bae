//! # Concurrent Area Access
//!
//! Thread-safe facade over an [`AreaFactory`].
//!
//! ## Thread Safety
//!
//! Sharing one cached [`Area`] across threads would race on its cache slot
//! and wreck the access locality the cache exists to exploit. Instead every
//! worker thread gets its own lazily built, private `Area`:
//!
//! - The thread registry (`RwLock<HashMap<ThreadId, Mutex<Area>>>`) takes a
//!   write lock only on a thread's first query.
//! - Each slot `Mutex` is only ever locked by the thread that owns the slot,
//!   so it is always uncontended.
//!
//! Results are identical across threads because the underlying computation
//! is a pure function of `(seed, layer topology, x, z)`.

use std::collections::HashMap;
use std::thread::{self, ThreadId};

use parking_lot::{Mutex, RwLock};

use crate::area::{Area, AreaFactory, LayerValue};

/// Thread-safe accessor over a layer pipeline.
///
/// Owns an [`AreaFactory`] and a table of per-thread [`Area`] instances.
/// Queried once per required block column by chunk-generation workers;
/// dropped when the owning generation session ends.
pub struct ConcurrentArea<T> {
    /// Recipe for per-thread accessors.
    factory: AreaFactory<T>,
    /// One private cached accessor per worker thread.
    slots: RwLock<HashMap<ThreadId, Mutex<Area<T>>>>,
}

impl<T: LayerValue> ConcurrentArea<T> {
    /// Wraps a factory for concurrent consumption.
    #[must_use]
    pub fn new(factory: AreaFactory<T>) -> Self {
        tracing::info!(
            magnification = factory.magnification(),
            "concurrent area created"
        );
        Self {
            factory,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the value at `(x, z)`; callable from any thread.
    ///
    /// First call from a given thread builds that thread's private [`Area`];
    /// later calls reuse it. Regardless of interleaving, the result equals
    /// what the pure pipeline function produces for `(x, z)`.
    pub fn get(&self, x: i32, z: i32) -> T {
        let id = thread::current().id();

        {
            let slots = self.slots.read();
            if let Some(slot) = slots.get(&id) {
                return slot.lock().get(x, z);
            }
        }

        // First query from this thread: registration path.
        tracing::debug!(thread = ?id, "building private area for thread");
        let mut slots = self.slots.write();
        let value = slots
            .entry(id)
            .or_insert_with(|| Mutex::new(self.factory.build()))
            .lock()
            .get(x, z);
        value
    }

    /// Number of worker threads that have queried this area so far.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.slots.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::source;
    use crate::seed::{AreaContext, LayerSalt, WorldSeed};

    fn small_field() -> ConcurrentArea<u8> {
        let ctx = AreaContext::new(WorldSeed::new(77), LayerSalt::new(0));
        let factory = source(ctx, &[0u8, 1, 2, 3]).expect("non-empty candidates");
        ConcurrentArea::new(factory)
    }

    #[test]
    fn test_single_thread_registration() {
        let area = small_field();
        assert_eq!(area.thread_count(), 0);

        let v = area.get(3, 4);
        assert_eq!(area.thread_count(), 1);
        assert_eq!(area.get(3, 4), v);
        assert_eq!(area.thread_count(), 1, "Same thread must reuse its slot");
    }

    #[test]
    fn test_threads_agree_on_values() {
        let area = small_field();

        let baseline: Vec<u8> = (0..64).map(|i| area.get(i, -i)).collect();

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (i, &expected) in baseline.iter().enumerate() {
                        let i = i as i32;
                        assert_eq!(
                            area.get(i, -i),
                            expected,
                            "Cross-thread value mismatch at ({i}, {})",
                            -i
                        );
                    }
                });
            }
        });

        assert!(area.thread_count() >= 2);
    }
}
