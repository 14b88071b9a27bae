//! Smooth layer: single-cell island removal.

use crate::area::{AreaFactory, CellFn, LayerValue};
use crate::seed::AreaContext;

/// Removes single-cell noise artifacts at the parent's resolution.
///
/// A cell is replaced when an opposite-neighbor pair agrees with itself but
/// disagrees with the cell: the cell is then an island in that axis and takes
/// the pair's value. When both axes qualify the replacement is a random pick
/// between the two pair values. Fields without such islands pass through
/// unchanged, so the operator is idempotent once a field is smooth.
#[must_use]
pub fn smooth<T: LayerValue>(ctx: AreaContext, parent: &AreaFactory<T>) -> AreaFactory<T> {
    let magnification = parent.magnification();
    let parent = parent.clone();

    AreaFactory::from_parts(magnification, move || {
        let mut parent = parent.build();
        Box::new(move |x, z| {
            let center = parent.get(x, z);
            let west = parent.get(x - 1, z);
            let east = parent.get(x + 1, z);
            let north = parent.get(x, z - 1);
            let south = parent.get(x, z + 1);

            let lateral = west == east && west != center;
            let axial = north == south && north != center;

            match (lateral, axial) {
                (true, true) => {
                    if west == north || ctx.cell_rng(x, z).next_bounded(2) == 0 {
                        west
                    } else {
                        north
                    }
                }
                (true, false) => west,
                (false, true) => north,
                (false, false) => center,
            }
        }) as CellFn<T>
    })
}
