//! Mix layer: diffusion over ordinal fields.

use crate::area::{AreaFactory, CellFn};
use crate::ordinal::Ordinal;

/// Diffuses sharp steps in an ordinal field toward gradual bands.
///
/// A cell two or more ranks below some orthogonal neighbor steps up by one;
/// two or more ranks above some neighbor steps down by one; when both
/// directions pull at once the cell stays put. Results are clamped to the
/// domain's `[MIN_RANK, MAX_RANK]` range.
///
/// Needs no randomness, so it takes no context. Apply it after a zoom or
/// smooth stage: it assumes an already coherent spatial field.
#[must_use]
pub fn mix<T: Ordinal>(parent: &AreaFactory<T>) -> AreaFactory<T> {
    let magnification = parent.magnification();
    let parent = parent.clone();

    AreaFactory::from_parts(magnification, move || {
        let mut parent = parent.build();
        Box::new(move |x, z| {
            let center = parent.get(x, z).rank();
            let neighbors = [
                parent.get(x - 1, z).rank(),
                parent.get(x + 1, z).rank(),
                parent.get(x, z - 1).rank(),
                parent.get(x, z + 1).rank(),
            ];

            let raise = neighbors.iter().any(|&n| n >= center + 2);
            let lower = neighbors.iter().any(|&n| n <= center - 2);

            let rank = match (raise, lower) {
                (true, false) => center + 1,
                (false, true) => center - 1,
                _ => center,
            };
            T::from_rank(rank.clamp(T::MIN_RANK, T::MAX_RANK))
        }) as CellFn<T>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::source;
    use crate::seed::{AreaContext, LayerSalt, WorldSeed};

    fn ctx() -> AreaContext {
        AreaContext::new(WorldSeed::new(2024), LayerSalt::new(0))
    }

    #[test]
    fn test_stays_in_ordinal_range() {
        let parent = source(ctx(), &[0u8, 1, 2, 3, 4]).unwrap();
        let mixed = mix(&parent);
        let mut area = mixed.build();

        for x in -64..64 {
            for z in -64..64 {
                let v = area.get(x, z);
                assert!(v <= 4, "Mix escaped the input range: {v} at ({x}, {z})");
            }
        }
    }

    #[test]
    fn test_step_edge_is_softened() {
        // Hard step: rank 0 west of x=0, rank 4 from x=0 on.
        let parent = AreaFactory::from_parts(1, || {
            Box::new(|x, _| if x < 0 { 0u8 } else { 4 }) as CellFn<u8>
        });
        let mixed = mix(&parent);
        let mut area = mixed.build();

        // Cells flanking the edge move one rank toward each other.
        assert_eq!(area.get(-1, 0), 1);
        assert_eq!(area.get(0, 0), 3);
        // Cells away from the edge are untouched.
        assert_eq!(area.get(-2, 0), 0);
        assert_eq!(area.get(1, 0), 4);
    }

    #[test]
    fn test_gentle_gradient_unchanged() {
        // Steps of one rank never trigger diffusion.
        let parent = AreaFactory::from_parts(1, || {
            Box::new(|x: i32, _| (x.rem_euclid(5)) as u8) as CellFn<u8>
        });
        // rem_euclid wraps 4 -> 0, a 4-rank cliff, so restrict to one period.
        let mixed = mix(&parent);
        let mut before = parent.build();
        let mut after = mixed.build();

        for x in 1..4 {
            for z in -16..16 {
                assert_eq!(after.get(x, z), before.get(x, z));
            }
        }
    }

    #[test]
    fn test_opposing_pulls_cancel() {
        // Center 2 with neighbors 0 and 4 on the same axis: both directions
        // pull, so the cell keeps its value.
        let parent = AreaFactory::from_parts(1, || {
            Box::new(|x, _| match x {
                i32::MIN..=-1 => 0u8,
                0 => 2,
                _ => 4,
            }) as CellFn<u8>
        });
        let mixed = mix(&parent);
        let mut area = mixed.build();

        assert_eq!(area.get(0, 0), 2);
    }
}
