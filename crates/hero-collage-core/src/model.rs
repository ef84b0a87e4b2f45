use crate::config::{LayoutMode, SpacingPolicy};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge (`x + w`).
    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
    /// Returns true if `self` lies fully inside a `width x height` canvas.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }
    /// Returns true if the two rectangles share at least one pixel.
    pub fn intersects(&self, r: &Rect) -> bool {
        (self.x as u64) < r.right()
            && (r.x as u64) < self.right()
            && (self.y as u64) < r.bottom()
            && (r.y as u64) < self.bottom()
    }
}

/// Exact uniform scale factor `num / den`.
///
/// Scaled extents are `floor(dim * num / den)`, so `400 * (665/400)` is exactly 665.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScaleFactor {
    pub num: u64,
    pub den: u64,
}

impl ScaleFactor {
    pub fn new(num: u64, den: u64) -> Self {
        Self { num, den }
    }
    /// Factor that maps `from` onto `to`.
    pub fn fit(to: u32, from: u32) -> Self {
        Self::new(to as u64, from as u64)
    }
    pub fn is_positive(&self) -> bool {
        self.num > 0 && self.den > 0
    }
    pub fn as_f64(&self) -> f64 {
        if self.den == 0 {
            return 0.0;
        }
        self.num as f64 / self.den as f64
    }
    /// Scales `dim`, truncating toward zero.
    pub fn apply(&self, dim: u32) -> u32 {
        if self.den == 0 {
            return 0;
        }
        let v = dim as u128 * self.num as u128 / self.den as u128;
        v.min(u32::MAX as u128) as u32
    }
    /// True if `self` is strictly larger than `other`.
    pub fn exceeds(&self, other: &ScaleFactor) -> bool {
        self.num as u128 * other.den as u128 > other.num as u128 * self.den as u128
    }
    /// Returns the smaller factor; `self` wins ties.
    pub fn min(self, other: ScaleFactor) -> ScaleFactor {
        if self.exceeds(&other) { other } else { self }
    }
}

/// Hero orientation; a square hero is portrait.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if height >= width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// One image placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement<K = String> {
    /// User-specified key (e.g., file path).
    pub key: K,
    /// Destination rectangle on the canvas (scaled size).
    pub frame: Rect,
    /// Decoded size before scaling.
    pub source_size: (u32, u32),
    pub scale: ScaleFactor,
}

/// What happened in the secondary band of a `Screenshots` layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BandReport {
    pub policy: SpacingPolicy,
    /// Band size across its long axis (the extent every image is scaled to).
    pub available: u32,
    /// Fixed cross-axis offset of every band image (`hero extent + margin`).
    pub offset: u32,
    /// Candidates offered to the band.
    pub candidates: usize,
    /// Prefix of candidates that fit.
    pub fitted: usize,
    /// Index of the first rejected candidate, if any.
    pub rejected_at: Option<usize>,
    /// Gap applied between images (between middle images for `AnchoredEnds`).
    pub spacing: u32,
}

/// Full layout of one collage: the hero and the fitted secondary images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollagePlan<K = String> {
    pub width: u32,
    pub height: u32,
    pub mode: LayoutMode,
    /// Hero orientation (`Screenshots` only).
    pub orientation: Option<Orientation>,
    pub hero: Placement<K>,
    /// Secondary placements in listing order.
    pub images: Vec<Placement<K>>,
    /// `None` when the band is empty or the mode has no band.
    pub band: Option<BandReport>,
}

/// Canvas coverage statistics for a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollageStats {
    /// Hero plus secondary images.
    pub num_images: usize,
    pub num_secondary: usize,
    /// Candidates that were offered but not placed.
    pub num_rejected: usize,
    pub canvas_area: u64,
    /// Area of the hero, clipped to the canvas, plus every secondary frame.
    pub covered_area: u64,
    /// covered_area / canvas_area (0.0 to 1.0).
    pub coverage: f64,
}

impl<K> CollagePlan<K> {
    /// Iterates over every placement, hero first.
    pub fn placements(&self) -> impl Iterator<Item = &Placement<K>> {
        std::iter::once(&self.hero).chain(self.images.iter())
    }

    pub fn stats(&self) -> CollageStats {
        let canvas_area = self.width as u64 * self.height as u64;
        let hero = self.hero.frame;
        let hero_area = (hero.right().min(self.width as u64) - hero.x as u64)
            * (hero.bottom().min(self.height as u64) - hero.y as u64);
        let covered_area = hero_area + self.images.iter().map(|p| p.frame.area()).sum::<u64>();
        let num_rejected = self
            .band
            .map(|b| b.candidates.saturating_sub(b.fitted))
            .unwrap_or(0);
        let coverage = if canvas_area > 0 {
            covered_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        CollageStats {
            num_images: 1 + self.images.len(),
            num_secondary: self.images.len(),
            num_rejected,
            canvas_area,
            covered_area,
            coverage,
        }
    }
}

impl CollageStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Images: {} (secondary: {}, rejected: {}), Coverage: {:.2}%, Canvas Area: {} px², Covered Area: {} px²",
            self.num_images,
            self.num_secondary,
            self.num_rejected,
            self.coverage * 100.0,
            self.canvas_area,
            self.covered_area,
        )
    }

    /// Returns uncovered canvas area in pixels.
    pub fn uncovered_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.covered_area)
    }
}
