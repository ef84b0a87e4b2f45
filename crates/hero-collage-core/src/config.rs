use crate::model::ScaleFactor;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Collage layout modes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Hero only, scaled to fit and centered on the canvas.
    Single,
    /// Hero anchored at the origin, secondary images packed into the leftover band.
    Screenshots,
}

impl FromStr for LayoutMode {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "screenshots" => Ok(Self::Screenshots),
            _ => Err(()),
        }
    }
}

/// How leftover space along the band is distributed between fitted images.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpacingPolicy {
    /// First image at the start, last image flush with the far edge, middle images evenly spaced.
    AnchoredEnds,
    /// Images back-to-back from the start with `remaining / (n - 1)` between them, capped.
    UniformRemainder,
}

impl FromStr for SpacingPolicy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anchored" | "anchored_ends" => Ok(Self::AnchoredEnds),
            "uniform" | "uniform_remainder" => Ok(Self::UniformRemainder),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollageConfig {
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    #[serde(default = "default_mode")]
    pub mode: LayoutMode,
    #[serde(default = "default_spacing")]
    pub spacing: SpacingPolicy,

    /// Canvas fill color (opaque RGB).
    #[serde(default)]
    pub fill: [u8; 3],
    /// Gap between the hero and the band.
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Largest magnification applied to a secondary image.
    #[serde(default = "default_max_upscale")]
    pub max_upscale: ScaleFactor,
    /// Cap on the gap between images under `UniformRemainder`.
    #[serde(default = "default_max_spacing")]
    pub max_spacing: u32,
    /// Floor on the gap between images under `AnchoredEnds`.
    #[serde(default = "default_min_spacing")]
    pub min_spacing: u32,
    /// Draw red outlines around every placement (debug).
    #[serde(default)]
    pub outlines: bool,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            mode: default_mode(),
            spacing: default_spacing(),
            fill: [0, 0, 0],
            margin: default_margin(),
            max_upscale: default_max_upscale(),
            max_spacing: default_max_spacing(),
            min_spacing: default_min_spacing(),
            outlines: false,
        }
    }
}

impl CollageConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - Canvas dimensions are zero
    /// - The margin alone consumes a whole canvas axis
    /// - The upscale cap is not a positive ratio
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::CollageError;

        if self.width == 0 || self.height == 0 {
            return Err(CollageError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.margin >= self.width || self.margin >= self.height {
            return Err(CollageError::InvalidConfig(format!(
                "margin ({}) leaves no room on a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }

        if !self.max_upscale.is_positive() {
            return Err(CollageError::InvalidConfig(format!(
                "max_upscale must be positive, got {}/{}",
                self.max_upscale.num, self.max_upscale.den
            )));
        }

        Ok(())
    }

    /// Minimum gap reserved between fitted images while packing the band.
    pub fn min_gap(&self) -> u32 {
        match self.spacing {
            SpacingPolicy::AnchoredEnds => self.min_spacing,
            SpacingPolicy::UniformRemainder => 0,
        }
    }
}

fn default_mode() -> LayoutMode {
    LayoutMode::Screenshots
}
fn default_spacing() -> SpacingPolicy {
    SpacingPolicy::AnchoredEnds
}
fn default_margin() -> u32 {
    2
}
fn default_max_upscale() -> ScaleFactor {
    ScaleFactor::new(2, 1)
}
fn default_max_spacing() -> u32 {
    10
}
fn default_min_spacing() -> u32 {
    2
}

/// Builder for `CollageConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct CollageConfigBuilder {
    cfg: CollageConfig,
}

impl CollageConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: CollageConfig::default(),
        }
    }
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn mode(mut self, v: LayoutMode) -> Self {
        self.cfg.mode = v;
        self
    }
    pub fn spacing(mut self, v: SpacingPolicy) -> Self {
        self.cfg.spacing = v;
        self
    }
    pub fn fill(mut self, v: [u8; 3]) -> Self {
        self.cfg.fill = v;
        self
    }
    pub fn margin(mut self, v: u32) -> Self {
        self.cfg.margin = v;
        self
    }
    pub fn max_upscale(mut self, v: ScaleFactor) -> Self {
        self.cfg.max_upscale = v;
        self
    }
    pub fn max_spacing(mut self, v: u32) -> Self {
        self.cfg.max_spacing = v;
        self
    }
    pub fn min_spacing(mut self, v: u32) -> Self {
        self.cfg.min_spacing = v;
        self
    }
    pub fn outlines(mut self, v: bool) -> Self {
        self.cfg.outlines = v;
        self
    }
    pub fn build(self) -> CollageConfig {
        self.cfg
    }
}

impl CollageConfig {
    /// Create a fluent builder for `CollageConfig`.
    pub fn builder() -> CollageConfigBuilder {
        CollageConfigBuilder::new()
    }
}
