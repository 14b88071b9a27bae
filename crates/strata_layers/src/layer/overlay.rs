//! Overlay layer: probabilistic merge of two pipelines.

use crate::area::{AreaFactory, CellFn, LayerValue};
use crate::error::{LayerError, LayerResult};
use crate::seed::AreaContext;

/// Merges a secondary field into a primary one by probabilistic override.
///
/// Each cell keeps the primary value except with a 1-in-`one_in` chance of
/// substituting the secondary value. Used to inject a rare feature category
/// into an otherwise-majority field.
///
/// # Errors
///
/// Returns [`LayerError::ScaleMismatch`] when the operands run at different
/// resolutions - mixing cell spacings is a pipeline-assembly bug, caught
/// here rather than silently producing garbage. Returns
/// [`LayerError::InvalidConfig`] for a zero chance denominator.
pub fn overlay<T: LayerValue>(
    ctx: AreaContext,
    primary: &AreaFactory<T>,
    secondary: &AreaFactory<T>,
    one_in: u32,
) -> LayerResult<AreaFactory<T>> {
    if primary.magnification() != secondary.magnification() {
        return Err(LayerError::ScaleMismatch {
            primary: primary.magnification(),
            secondary: secondary.magnification(),
        });
    }
    if one_in == 0 {
        return Err(LayerError::InvalidConfig(
            "overlay chance denominator must be non-zero".into(),
        ));
    }

    let magnification = primary.magnification();
    let primary = primary.clone();
    let secondary = secondary.clone();

    Ok(AreaFactory::from_parts(magnification, move || {
        let mut primary = primary.build();
        let mut secondary = secondary.build();
        Box::new(move |x, z| {
            if ctx.cell_rng(x, z).next_bounded(one_in) == 0 {
                secondary.get(x, z)
            } else {
                primary.get(x, z)
            }
        }) as CellFn<T>
    }))
}
