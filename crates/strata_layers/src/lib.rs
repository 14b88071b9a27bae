//! # STRATA Layer Generation
//!
//! Deterministic, layered 2D field generation for infinite, reproducible
//! worlds.
//!
//! Large discrete-valued grids (biome identifiers, rock categories, climate
//! bands, vegetation density classes) are derived from a single 64-bit world
//! seed through a chain of small transformation stages operating at
//! progressively finer resolution.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same seed = same field, for any coordinate, in any
//!    query order, on any thread
//! 2. **Composable**: every transform is a function from factory to factory;
//!    the pipeline graph is explicit data
//! 3. **Shared-nothing reads**: worker threads get private cached accessors,
//!    never a shared mutable cache
//! 4. **Fail at assembly**: a misconfigured pipeline is rejected when built,
//!    never at query time
//!
//! ## Core Components
//!
//! - `AreaContext`: per-layer seeded randomness source
//! - `Area` / `AreaFactory`: cached accessor and its stateless builder
//! - `layer::*`: the operators (source, zoom, smooth, voronoi, mix, overlay)
//! - `LayerStack`: fluent pipeline assembly with automatic salting
//! - `ConcurrentArea`: thread-safe facade for generation workers
//!
//! ## Example
//!
//! ```rust,ignore
//! use strata_layers::{LayerStack, WorldSeed};
//!
//! let rocks = LayerStack::source(WorldSeed::new(12345), &[0u8, 1, 2, 3])?
//!     .fuzzy_zoom()
//!     .zoom_n(3)
//!     .voronoi()
//!     .build_concurrent();
//!
//! // Queried per block column from any number of worker threads.
//! let rock = rocks.get(100, -250);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod area;
pub mod concurrent;
pub mod config;
pub mod error;
pub mod layer;
pub mod ordinal;
pub mod presets;
pub mod seed;
pub mod stack;

pub use area::{Area, AreaFactory, LayerValue};
pub use concurrent::ConcurrentArea;
pub use config::StackConfig;
pub use error::{LayerError, LayerResult};
pub use ordinal::Ordinal;
pub use seed::{AreaContext, CellRng, LayerSalt, WorldSeed};
pub use stack::LayerStack;
