//! Zoom layers: 2x magnification.

use crate::area::{AreaFactory, CellFn, LayerValue};
use crate::seed::{AreaContext, CellRng};

/// Doubles the parent's resolution, biasing seam cells toward the majority
/// of the surrounding parent values.
///
/// Output cells coincident with a parent cell copy it verbatim; edge cells
/// pick between the two flanking parent values; corner cells take the
/// dominant value of the surrounding four, random tie-break. Selecting only
/// among surrounding parent values guarantees no new value class appears at
/// a zoom boundary. Applied repeatedly to go from continent-scale to
/// block-scale.
#[must_use]
pub fn zoom<T: LayerValue>(ctx: AreaContext, parent: &AreaFactory<T>) -> AreaFactory<T> {
    magnify(ctx, parent, false)
}

/// Like [`zoom`], but seam cells pick uniformly among the surrounding parent
/// values instead of biasing toward the majority.
///
/// Used once, early, to break up accidental large uniform regions coming out
/// of the source layer.
#[must_use]
pub fn fuzzy_zoom<T: LayerValue>(ctx: AreaContext, parent: &AreaFactory<T>) -> AreaFactory<T> {
    magnify(ctx, parent, true)
}

fn magnify<T: LayerValue>(ctx: AreaContext, parent: &AreaFactory<T>, fuzzy: bool) -> AreaFactory<T> {
    let magnification = parent.magnification().saturating_mul(2);
    let parent = parent.clone();

    AreaFactory::from_parts(magnification, move || {
        let mut parent = parent.build();
        Box::new(move |x, z| {
            // Parent cell this output cell falls into (floor division).
            let px = x >> 1;
            let pz = z >> 1;
            let on_x = x & 1 == 0;
            let on_z = z & 1 == 0;

            let anchor = parent.get(px, pz);
            if on_x && on_z {
                return anchor;
            }

            let mut rng = ctx.cell_rng(x, z);
            match (on_x, on_z) {
                (false, true) => {
                    let east = parent.get(px + 1, pz);
                    if rng.next_bounded(2) == 0 { anchor } else { east }
                }
                (true, false) => {
                    let south = parent.get(px, pz + 1);
                    if rng.next_bounded(2) == 0 { anchor } else { south }
                }
                _ => {
                    let east = parent.get(px + 1, pz);
                    let south = parent.get(px, pz + 1);
                    let corner = parent.get(px + 1, pz + 1);
                    let quad = [anchor, east, south, corner];
                    if fuzzy {
                        rng.pick(&quad)
                    } else {
                        dominant(&mut rng, quad)
                    }
                }
            }
        }) as CellFn<T>
    })
}

/// Majority vote over four parent values, random tie-break.
fn dominant<T: Copy + Eq>(rng: &mut CellRng, quad: [T; 4]) -> T {
    let count = |v: T| quad.iter().filter(|&&q| q == v).count();

    for v in quad {
        if count(v) >= 3 {
            return v;
        }
    }

    let mut pair = None;
    for v in quad {
        if count(v) == 2 {
            match pair {
                None => pair = Some(v),
                // Two distinct pairs: no majority exists.
                Some(p) if p != v => return rng.pick(&quad),
                Some(_) => {}
            }
        }
    }

    match pair {
        Some(p) => p,
        // All four distinct.
        None => rng.pick(&quad),
    }
}
