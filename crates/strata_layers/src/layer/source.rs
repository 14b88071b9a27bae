//! Source layer: the leaf of every pipeline.

use std::sync::Arc;

use crate::area::{AreaFactory, CellFn, LayerValue};
use crate::error::{LayerError, LayerResult};
use crate::seed::AreaContext;

/// Produces raw values purely from context and coordinates, with no parent.
///
/// Each cell picks one of the configured candidate values with uniform
/// probability. Candidates typically come from configuration-loading
/// collaborators (named rock categories, biome identifiers, ordinal bands).
///
/// # Errors
///
/// Returns [`LayerError::EmptyCandidates`] if `candidates` is empty; an
/// empty source is a misconfigured pipeline and must never reach query time.
pub fn source<T: LayerValue>(ctx: AreaContext, candidates: &[T]) -> LayerResult<AreaFactory<T>> {
    if candidates.is_empty() {
        return Err(LayerError::EmptyCandidates);
    }
    let candidates: Arc<[T]> = candidates.into();

    Ok(AreaFactory::from_parts(1, move || {
        let candidates = Arc::clone(&candidates);
        Box::new(move |x, z| ctx.cell_rng(x, z).pick(&candidates)) as CellFn<T>
    }))
}
