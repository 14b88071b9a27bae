//! # Pipeline Assembly
//!
//! [`LayerStack`] is the fluent composition helper: it owns the world seed,
//! hands every stage a fresh stage-unique salt, tracks the running
//! magnification, and finishes as an [`AreaFactory`] or [`ConcurrentArea`].
//!
//! Composing a pipeline is nested application of the operator functions in
//! [`crate::layer`]; the stack only automates salting and bookkeeping. No
//! stage ever mutates another stage's state.

use crate::area::{AreaFactory, LayerValue};
use crate::concurrent::ConcurrentArea;
use crate::config::StackConfig;
use crate::error::LayerResult;
use crate::layer;
use crate::ordinal::Ordinal;
use crate::seed::{AreaContext, LayerSalt, WorldSeed};

/// A pipeline under construction.
///
/// Starts from a source stage and grows by wrapping the current factory in
/// transform stages. Each stage consumes one salt from a monotone counter,
/// so no two stages in the stack share a random stream.
#[derive(Debug)]
pub struct LayerStack<T> {
    /// Seed every stage's context derives from.
    seed: WorldSeed,
    /// Next stage-unique salt.
    next_salt: u64,
    /// The factory composed so far.
    factory: AreaFactory<T>,
}

impl<T: LayerValue> LayerStack<T> {
    /// Opens a pipeline with a source stage, salts starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::EmptyCandidates`](crate::LayerError::EmptyCandidates)
    /// for an empty candidate list.
    pub fn source(seed: WorldSeed, candidates: &[T]) -> LayerResult<Self> {
        Self::source_from(seed, LayerSalt::new(0), candidates)
    }

    /// Opens a pipeline with a source stage and an explicit first salt.
    ///
    /// Use distinct salt bases for pipelines that will later be merged with
    /// [`overlay_with`](Self::overlay_with), so their stages never share
    /// streams.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::EmptyCandidates`](crate::LayerError::EmptyCandidates)
    /// for an empty candidate list.
    pub fn source_from(seed: WorldSeed, first_salt: LayerSalt, candidates: &[T]) -> LayerResult<Self> {
        let mut next_salt = first_salt.value();
        let ctx = AreaContext::new(seed, LayerSalt::new(next_salt));
        next_salt += 1;
        let factory = layer::source(ctx, candidates)?;
        tracing::debug!(
            salt = next_salt - 1,
            candidates = candidates.len(),
            "source stage opened"
        );
        Ok(Self {
            seed,
            next_salt,
            factory,
        })
    }

    /// Consumes the next stage salt.
    fn next_ctx(&mut self) -> AreaContext {
        let ctx = AreaContext::new(self.seed, LayerSalt::new(self.next_salt));
        self.next_salt += 1;
        ctx
    }

    /// Adds a fuzzy 2x zoom stage.
    #[must_use]
    pub fn fuzzy_zoom(mut self) -> Self {
        let ctx = self.next_ctx();
        self.factory = layer::fuzzy_zoom(ctx, &self.factory);
        tracing::debug!(
            salt = self.next_salt - 1,
            magnification = self.factory.magnification(),
            "fuzzy zoom stage added"
        );
        self
    }

    /// Adds a majority-biased 2x zoom stage.
    #[must_use]
    pub fn zoom(mut self) -> Self {
        let ctx = self.next_ctx();
        self.factory = layer::zoom(ctx, &self.factory);
        tracing::debug!(
            salt = self.next_salt - 1,
            magnification = self.factory.magnification(),
            "zoom stage added"
        );
        self
    }

    /// Adds `n` zoom stages, smoothing after each one.
    #[must_use]
    pub fn zoom_n(mut self, n: u32) -> Self {
        for _ in 0..n {
            self = self.zoom().smooth();
        }
        self
    }

    /// Adds an island-removal stage at the current resolution.
    #[must_use]
    pub fn smooth(mut self) -> Self {
        let ctx = self.next_ctx();
        self.factory = layer::smooth(ctx, &self.factory);
        tracing::debug!(salt = self.next_salt - 1, "smooth stage added");
        self
    }

    /// Adds the final 4x voronoi magnification stage.
    #[must_use]
    pub fn voronoi(mut self) -> Self {
        let ctx = self.next_ctx();
        self.factory = layer::voronoi_zoom(ctx, &self.factory);
        tracing::debug!(
            salt = self.next_salt - 1,
            magnification = self.factory.magnification(),
            "voronoi stage added"
        );
        self
    }

    /// Merges another pipeline into this one by probabilistic override.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::ScaleMismatch`](crate::LayerError::ScaleMismatch)
    /// when the two pipelines run at different magnifications, and
    /// [`LayerError::InvalidConfig`](crate::LayerError::InvalidConfig) for a
    /// zero chance denominator.
    pub fn overlay_with(mut self, secondary: &Self, one_in: u32) -> LayerResult<Self> {
        let ctx = self.next_ctx();
        self.factory = layer::overlay(ctx, &self.factory, &secondary.factory, one_in)?;
        tracing::debug!(salt = self.next_salt - 1, one_in, "overlay stage added");
        Ok(self)
    }

    /// Resolution composed so far, relative to the source layer.
    #[must_use]
    pub const fn magnification(&self) -> u32 {
        self.factory.magnification()
    }

    /// Finishes the pipeline as a single-threaded factory.
    #[must_use]
    pub fn build(self) -> AreaFactory<T> {
        self.factory
    }

    /// Finishes the pipeline wrapped for concurrent consumption.
    #[must_use]
    pub fn build_concurrent(self) -> ConcurrentArea<T> {
        ConcurrentArea::new(self.factory)
    }
}

impl<T: Ordinal> LayerStack<T> {
    /// Adds a diffusion stage; ordinal domains only.
    #[must_use]
    pub fn mix(mut self) -> Self {
        self.factory = layer::mix(&self.factory);
        tracing::debug!("mix stage added");
        self
    }

    /// Assembles a whole pipeline from a declarative recipe.
    ///
    /// # Errors
    ///
    /// Propagates recipe validation failures and source-stage errors.
    pub fn from_config(
        seed: WorldSeed,
        candidates: &[T],
        config: &StackConfig,
    ) -> LayerResult<Self> {
        config.validate()?;

        let mut stack = Self::source(seed, candidates)?;
        if config.fuzzy_zoom {
            stack = stack.fuzzy_zoom();
        }
        for _ in 0..config.zoom_steps {
            stack = stack.zoom();
            if config.smooth_after_zoom {
                stack = stack.smooth();
            }
        }
        for _ in 0..config.mix_passes {
            stack = stack.mix();
        }
        if config.voronoi {
            stack = stack.voronoi();
        }
        Ok(stack)
    }
}
