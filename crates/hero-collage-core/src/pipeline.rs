use crate::compositing::{outline_rgb, paste_rgb};
use crate::config::CollageConfig;
use crate::error::{CollageError, Result};
use crate::layout::{LayoutItem, plan_layout_items};
use crate::model::{CollagePlan, CollageStats, Placement};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// In-memory image to lay out (key + decoded image).
#[derive(Debug, Clone)]
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a collage run: the plan and the composited RGB canvas.
pub struct CollageOutput {
    pub plan: CollagePlan,
    pub canvas: RgbImage,
}

impl CollageOutput {
    /// Computes coverage statistics for this output.
    /// This is a convenience method that delegates to `plan.stats()`.
    pub fn stats(&self) -> CollageStats {
        self.plan.stats()
    }

    /// Encode the canvas to `path`; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        save_canvas(&self.canvas, path)
    }
}

/// Encode `canvas` to `path`; the format follows the file extension.
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path).map_err(|source| CollageError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(skip_all)]
/// Lays out `hero` and `secondaries` on a `cfg.width x cfg.height` canvas and composites them.
///
/// Notes:
/// - `secondaries` are considered in the given order; the band takes the longest prefix that fits.
/// - All images are coerced to opaque RGB; alpha is dropped.
/// - The result depends only on the inputs, so repeated calls produce identical canvases.
pub fn build(
    hero: &InputImage,
    secondaries: &[InputImage],
    cfg: &CollageConfig,
) -> Result<CollageOutput> {
    let items: Vec<LayoutItem<&str>> = secondaries
        .iter()
        .map(|s| LayoutItem::new(s.key.as_str(), s.image.width(), s.image.height()))
        .collect();
    let plan = plan_layout_items(
        LayoutItem::new(hero.key.as_str(), hero.image.width(), hero.image.height()),
        items,
        cfg,
    )?;

    let mut canvas = RgbImage::from_pixel(cfg.width, cfg.height, Rgb(cfg.fill));

    let hero_rgb = scaled_rgb(&hero.image, &plan.hero);
    paste_rgb(&hero_rgb, &mut canvas, plan.hero.frame.x, plan.hero.frame.y);

    // plan.images is a prefix of `secondaries`
    let fitted = &secondaries[..plan.images.len()];
    #[cfg(feature = "parallel")]
    let scaled: Vec<RgbImage> = fitted
        .par_iter()
        .zip(plan.images.par_iter())
        .map(|(img, p)| scaled_rgb(&img.image, p))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let scaled: Vec<RgbImage> = fitted
        .iter()
        .zip(plan.images.iter())
        .map(|(img, p)| scaled_rgb(&img.image, p))
        .collect();

    for (rgb, p) in scaled.iter().zip(plan.images.iter()) {
        paste_rgb(rgb, &mut canvas, p.frame.x, p.frame.y);
    }

    if cfg.outlines {
        let red = Rgb([255, 0, 0]);
        for p in plan.placements() {
            outline_rgb(&mut canvas, &p.frame, red);
        }
    }

    debug!(
        secondary = plan.images.len(),
        candidates = secondaries.len(),
        "collage composited"
    );
    Ok(CollageOutput { plan, canvas })
}

/// Converts to RGB and resizes to the placement's frame size (Lanczos3).
fn scaled_rgb(image: &DynamicImage, placement: &Placement) -> RgbImage {
    let (w, h) = (placement.frame.w, placement.frame.h);
    if w == 0 || h == 0 {
        return RgbImage::new(w, h);
    }
    let rgb = image.to_rgb8();
    if rgb.dimensions() == (w, h) {
        return rgb;
    }
    imageops::resize(&rgb, w, h, FilterType::Lanczos3)
}
