//! # Domain Presets
//!
//! Ready-made pipelines for the two value families the engine serves:
//! categorical identifiers (rock categories, biome ids) and ordinal bands
//! (drainage, vegetation density). They encode the composition order the
//! operators expect - fuzzy zoom first, smooth after every zoom, mix only
//! over an already coherent field, voronoi last.

use crate::area::{AreaFactory, LayerValue};
use crate::error::LayerResult;
use crate::ordinal::Ordinal;
use crate::seed::{LayerSalt, WorldSeed};
use crate::stack::LayerStack;

/// Salt base for secondary pipelines, far away from primary stage salts.
const SECONDARY_SALT_BASE: u64 = 0x1000;

/// Categorical field at block scale: continent-sized patches of the
/// candidate identifiers with organic boundaries.
///
/// # Errors
///
/// Fails for an empty candidate list.
pub fn category_field<T: LayerValue>(
    seed: WorldSeed,
    candidates: &[T],
) -> LayerResult<AreaFactory<T>> {
    Ok(LayerStack::source(seed, candidates)?
        .fuzzy_zoom()
        .zoom_n(3)
        .voronoi()
        .build())
}

/// Ordinal band field at block scale: like [`category_field`] but with
/// diffusion passes so bands step gradually instead of cliffing.
///
/// # Errors
///
/// Fails for an empty band list.
pub fn ordinal_field<T: Ordinal>(seed: WorldSeed, bands: &[T]) -> LayerResult<AreaFactory<T>> {
    Ok(LayerStack::source(seed, bands)?
        .fuzzy_zoom()
        .zoom_n(2)
        .mix()
        .zoom_n(1)
        .mix()
        .voronoi()
        .build())
}

/// Categorical field with a rare feature category sprinkled in.
///
/// The rare candidates come from an independently salted pipeline and
/// override the majority field in roughly one cell in `one_in` before the
/// final zooms, so rare patches are coherent regions rather than speckle.
///
/// # Errors
///
/// Fails when either candidate list is empty or `one_in` is zero.
pub fn category_field_with_rare<T: LayerValue>(
    seed: WorldSeed,
    majority: &[T],
    rare: &[T],
    one_in: u32,
) -> LayerResult<AreaFactory<T>> {
    let primary = LayerStack::source(seed, majority)?.fuzzy_zoom().zoom_n(1);
    let secondary = LayerStack::source_from(seed, LayerSalt::new(SECONDARY_SALT_BASE), rare)?
        .fuzzy_zoom()
        .zoom_n(1);

    Ok(primary
        .overlay_with(&secondary, one_in)?
        .zoom_n(2)
        .voronoi()
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_field_values_and_scale() {
        let factory = category_field(WorldSeed::new(11), &[1u8, 2, 3]).unwrap();
        // fuzzy (x2) * three zooms (x8) * voronoi (x4)
        assert_eq!(factory.magnification(), 64);

        let mut area = factory.build();
        for x in -32..32 {
            for z in -32..32 {
                assert!([1, 2, 3].contains(&area.get(x, z)));
            }
        }
    }

    #[test]
    fn test_ordinal_field_bounded() {
        let factory = ordinal_field(WorldSeed::new(22), &[0u8, 1, 2, 3, 4]).unwrap();
        let mut area = factory.build();

        for x in -32..32 {
            for z in -32..32 {
                assert!(area.get(x, z) <= 4);
            }
        }
    }

    #[test]
    fn test_rare_category_appears_sparsely() {
        let factory =
            category_field_with_rare(WorldSeed::new(33), &[0u8], &[9u8], 6).unwrap();
        let mut area = factory.build();

        // Stride past the final magnification so samples land in distinct
        // overlay-scale cells.
        let mut rare = 0u32;
        let mut total = 0u32;
        for x in 0..96 {
            for z in 0..96 {
                total += 1;
                if area.get(x * 16, z * 16) == 9 {
                    rare += 1;
                }
            }
        }
        assert!(rare > 0, "Rare category never appeared");
        assert!(rare < total / 2, "Rare category dominates: {rare}/{total}");
    }
}
