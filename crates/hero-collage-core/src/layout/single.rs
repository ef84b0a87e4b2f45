use crate::config::{CollageConfig, LayoutMode};
use crate::layout::LayoutItem;
use crate::model::{CollagePlan, Placement, Rect, ScaleFactor};
use tracing::debug;

/// Scale factor for the hero in `Single` mode.
///
/// A hero wider than tall is fitted to the canvas width, anything else to the
/// canvas height. If that factor would overflow the other axis, the smaller of
/// the two fits is used so the hero always lands fully on the canvas.
pub fn single_scale(hero_w: u32, hero_h: u32, width: u32, height: u32) -> ScaleFactor {
    let by_width = ScaleFactor::fit(width, hero_w);
    let by_height = ScaleFactor::fit(height, hero_h);
    let preferred = if hero_w > hero_h { by_width } else { by_height };
    if preferred.apply(hero_w) > width || preferred.apply(hero_h) > height {
        by_width.min(by_height)
    } else {
        preferred
    }
}

pub(crate) fn plan_single(hero: LayoutItem<String>, cfg: &CollageConfig) -> CollagePlan<String> {
    let scale = single_scale(hero.w, hero.h, cfg.width, cfg.height);
    let (w, h) = (scale.apply(hero.w), scale.apply(hero.h));
    let pad_left = cfg.width.saturating_sub(w) / 2;
    let pad_top = cfg.height.saturating_sub(h) / 2;
    debug!(w, h, pad_left, pad_top, "single hero placed");
    CollagePlan {
        width: cfg.width,
        height: cfg.height,
        mode: LayoutMode::Single,
        orientation: None,
        hero: Placement {
            key: hero.key,
            frame: Rect::new(pad_left, pad_top, w, h),
            source_size: (hero.w, hero.h),
            scale,
        },
        images: Vec::new(),
        band: None,
    }
}
