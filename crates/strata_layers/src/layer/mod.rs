//! # Layer Operators
//!
//! The reusable spatial operators every pipeline is composed from.
//!
//! A transform layer is a plain function `AreaFactory<T> -> AreaFactory<T>`
//! (binary combinators take two factories), not a subclass of anything: the
//! composition graph is explicit data, assembled once at construction time.
//! Layers read parent cells at the parent's resolution and write one value
//! per output cell; none of them can fail at query time.
//!
//! | Operator       | Resolution | Purpose                                    |
//! |----------------|------------|--------------------------------------------|
//! | [`source`]     | x1         | uniform pick among candidate values        |
//! | [`zoom`]       | x2         | magnify, majority vote at seams            |
//! | [`fuzzy_zoom`] | x2         | magnify, uniform pick at seams             |
//! | [`smooth`]     | x1         | remove single-cell islands                 |
//! | [`voronoi_zoom`] | x4       | organic boundaries for final consumption   |
//! | [`mix`]        | x1         | diffuse ordinal bands toward gradients     |
//! | [`overlay`]    | x1         | probabilistically inject a secondary field |

mod mix;
mod overlay;
mod smooth;
mod source;
mod voronoi;
mod zoom;

pub use mix::mix;
pub use overlay::overlay;
pub use smooth::smooth;
pub use source::source;
pub use voronoi::voronoi_zoom;
pub use zoom::{fuzzy_zoom, zoom};
