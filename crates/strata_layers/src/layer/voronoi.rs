//! Voronoi zoom layer: final-stage 4x magnification.

use crate::area::{AreaFactory, CellFn, LayerValue};
use crate::seed::{AreaContext, CellRng};

/// Half a parent cell, in output-grid units.
const HALF_CELL: f64 = 2.0;
/// Jitter amplitude around a candidate point, in output-grid units.
const JITTER_SPAN: f64 = 3.6;
/// Granularity of the jitter draw.
const JITTER_STEPS: u32 = 1024;

/// Quadruples the parent's resolution with organic region boundaries.
///
/// Each output cell takes the value of the nearest of four randomly jittered
/// candidate points, one per surrounding parent cell, compared by squared
/// distance. The jitter keeps boundaries from being perfectly regular, so
/// regions meet in irregular curves instead of blocky steps. Used only as
/// the last stage before consumption.
#[must_use]
pub fn voronoi_zoom<T: LayerValue>(ctx: AreaContext, parent: &AreaFactory<T>) -> AreaFactory<T> {
    let magnification = parent.magnification().saturating_mul(4);
    let parent = parent.clone();

    AreaFactory::from_parts(magnification, move || {
        let mut parent = parent.build();
        Box::new(move |x, z| {
            // Shift so the four candidate cells bracket the query point.
            let px = (x - 2) >> 2;
            let pz = (z - 2) >> 2;

            let mut best_cell = (px, pz);
            let mut best_dist = f64::INFINITY;
            for (dx, dz) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let cx = px + dx;
                let cz = pz + dz;
                let mut rng = ctx.cell_rng(cx, cz);

                let candidate_x = f64::from(cx) * 4.0 + HALF_CELL + jitter(&mut rng);
                let candidate_z = f64::from(cz) * 4.0 + HALF_CELL + jitter(&mut rng);
                let dist = (candidate_x - f64::from(x)).powi(2)
                    + (candidate_z - f64::from(z)).powi(2);

                if dist < best_dist {
                    best_dist = dist;
                    best_cell = (cx, cz);
                }
            }

            // Single parent query keeps the parent's cache slot hot.
            parent.get(best_cell.0, best_cell.1)
        }) as CellFn<T>
    })
}

/// Uniform draw in roughly `[-1.8, 1.8]`, quantized so the jitter is a pure
/// function of the cell stream.
#[inline]
fn jitter(rng: &mut CellRng) -> f64 {
    (f64::from(rng.next_bounded(JITTER_STEPS)) / f64::from(JITTER_STEPS) - 0.5) * JITTER_SPAN
}
