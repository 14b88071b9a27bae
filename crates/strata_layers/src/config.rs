//! # Pipeline Recipes
//!
//! Declarative pipeline shape, loadable from TOML by configuration
//! collaborators. A recipe only describes stage counts and ordering; the
//! seed and candidate values arrive separately at construction time.

use serde::{Deserialize, Serialize};

use crate::error::{LayerError, LayerResult};

/// Upper bound on zoom stages; beyond this the magnification arithmetic is
/// certainly a recipe typo.
const MAX_ZOOM_STEPS: u32 = 16;

/// Declarative shape of a layer pipeline.
///
/// Assembled into a stack by
/// [`LayerStack::from_config`](crate::LayerStack::from_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Break up the raw source with one fuzzy zoom before the regular zooms.
    pub fuzzy_zoom: bool,
    /// Number of 2x zoom stages.
    pub zoom_steps: u32,
    /// Insert a smooth stage after every zoom.
    pub smooth_after_zoom: bool,
    /// Diffusion passes after zooming; ordinal domains only.
    pub mix_passes: u32,
    /// Finish with the 4x voronoi stage.
    pub voronoi: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            fuzzy_zoom: true,
            zoom_steps: 4,
            smooth_after_zoom: true,
            mix_passes: 0,
            voronoi: true,
        }
    }
}

impl StackConfig {
    /// Parses and validates a recipe from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidConfig`] for unparseable text or a
    /// recipe that fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> LayerResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| LayerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks recipe bounds.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::InvalidConfig`] when `zoom_steps` exceeds the
    /// supported maximum.
    pub fn validate(&self) -> LayerResult<()> {
        if self.zoom_steps > MAX_ZOOM_STEPS {
            return Err(LayerError::InvalidConfig(format!(
                "zoom_steps {} exceeds maximum {MAX_ZOOM_STEPS}",
                self.zoom_steps
            )));
        }
        Ok(())
    }
}
