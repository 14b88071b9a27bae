//! # Cached Area Accessors
//!
//! [`Area`] maps integer coordinates to discrete values through a composed
//! pipeline function, memoizing the most recent cell in a single-slot cache.
//! [`AreaFactory`] is the stateless recipe that builds them.
//!
//! ## Why a single-slot cache?
//!
//! Transform layers read 2-9 neighboring parent cells per output cell, and
//! adjacent output cells re-read the same parent cells. One cached slot turns
//! that O(k) parent recomputation into amortized O(1) for row-major and
//! chain-local traversal, with no grid allocation and no invalidation logic.

use std::sync::Arc;

/// Marker for value types a layer pipeline can carry.
///
/// Discrete identifiers only: copyable, comparable, and shareable across
/// worker threads. Blanket-implemented; never implement it manually.
pub trait LayerValue: Copy + Eq + Send + Sync + 'static {}

impl<T: Copy + Eq + Send + Sync + 'static> LayerValue for T {}

/// A freshly instantiated cell computation, private to one `Area`.
pub(crate) type CellFn<T> = Box<dyn FnMut(i32, i32) -> T + Send>;

/// A cached, single-threaded accessor over a pure coordinate function.
///
/// Created by [`AreaFactory::build`]. Not safe for concurrent use: the cache
/// slot is mutated on every query. Wrap the factory in a
/// [`ConcurrentArea`](crate::ConcurrentArea) for multi-threaded access.
pub struct Area<T> {
    /// The composed pipeline below this accessor.
    cell: CellFn<T>,
    /// Most recently computed `(x, z, value)`.
    cache: Option<(i32, i32, T)>,
}

impl<T: LayerValue> Area<T> {
    /// Wraps a cell computation in a fresh accessor with a cold cache.
    pub(crate) fn from_cell(cell: CellFn<T>) -> Self {
        Self { cell, cache: None }
    }

    /// Returns the value at `(x, z)`.
    ///
    /// A repeat of the previous coordinate is served from the cache without
    /// recomputation. The result is a pure function of the pipeline and the
    /// coordinates; the cache never changes what is returned, only how fast.
    #[inline]
    pub fn get(&mut self, x: i32, z: i32) -> T {
        if let Some((cx, cz, value)) = self.cache {
            if cx == x && cz == z {
                return value;
            }
        }
        let value = (self.cell)(x, z);
        self.cache = Some((x, z, value));
        value
    }
}

/// A deterministic, stateless builder of [`Area`] instances.
///
/// Essentially a composed chain of closures over parent factories and an
/// [`AreaContext`](crate::AreaContext). Cloning is cheap (one `Arc` bump) and
/// building twice yields functionally identical, independently cached
/// accessors.
pub struct AreaFactory<T> {
    /// Instantiates one private cell-computation chain.
    make: Arc<dyn Fn() -> CellFn<T> + Send + Sync>,
    /// Resolution relative to the pipeline's source layer (source = 1,
    /// doubled per zoom stage, quadrupled by the voronoi stage).
    magnification: u32,
}

impl<T> core::fmt::Debug for AreaFactory<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AreaFactory")
            .field("magnification", &self.magnification)
            .finish_non_exhaustive()
    }
}

impl<T> Clone for AreaFactory<T> {
    fn clone(&self) -> Self {
        Self {
            make: Arc::clone(&self.make),
            magnification: self.magnification,
        }
    }
}

impl<T: LayerValue> AreaFactory<T> {
    /// Assembles a factory from a magnification and an instantiation closure.
    pub(crate) fn from_parts<F>(magnification: u32, make: F) -> Self
    where
        F: Fn() -> CellFn<T> + Send + Sync + 'static,
    {
        Self {
            make: Arc::new(make),
            magnification,
        }
    }

    /// Builds a new, independently cached accessor.
    ///
    /// Idempotent and side-effect-free: every returned [`Area`] computes the
    /// same mathematical function of `(x, z)`.
    #[must_use]
    pub fn build(&self) -> Area<T> {
        Area::from_cell((self.make)())
    }

    /// Resolution of this factory relative to its pipeline's source layer.
    #[inline]
    #[must_use]
    pub const fn magnification(&self) -> u32 {
        self.magnification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Factory whose cells count how often the underlying function runs.
    fn counting_factory(hits: Arc<AtomicU32>) -> AreaFactory<i32> {
        AreaFactory::from_parts(1, move || {
            let hits = Arc::clone(&hits);
            Box::new(move |x, z| {
                hits.fetch_add(1, Ordering::Relaxed);
                x.wrapping_mul(31).wrapping_add(z)
            })
        })
    }

    #[test]
    fn test_cache_serves_repeat_queries() {
        let hits = Arc::new(AtomicU32::new(0));
        let mut area = counting_factory(Arc::clone(&hits)).build();

        let first = area.get(5, -3);
        let second = area.get(5, -3);
        let third = area.get(5, -3);

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(
            hits.load(Ordering::Relaxed),
            1,
            "Repeat queries must hit the single-slot cache"
        );
    }

    #[test]
    fn test_cache_evicts_on_new_coordinate() {
        let hits = Arc::new(AtomicU32::new(0));
        let mut area = counting_factory(Arc::clone(&hits)).build();

        let a = area.get(0, 0);
        let _ = area.get(1, 0);
        let a_again = area.get(0, 0);

        assert_eq!(a, a_again, "Eviction must not change results");
        assert_eq!(hits.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_new_instance_isolation() {
        let hits = Arc::new(AtomicU32::new(0));
        let factory = counting_factory(Arc::clone(&hits));

        let mut first = factory.build();
        let mut second = factory.build();

        assert_eq!(first.get(7, 7), second.get(7, 7));
        // Both instances computed independently: caches are not shared.
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }
}
