use crate::config::{CollageConfig, LayoutMode};
use crate::layout::{LayoutItem, spacer_for};
use crate::model::{BandReport, CollagePlan, Orientation, Placement, Rect, ScaleFactor};
use tracing::debug;

/// Hero frame for `Screenshots` mode, anchored at the origin.
///
/// Portrait heroes are scaled to the canvas height, landscape heroes to the
/// canvas width. The other extent follows proportionally and may exceed the
/// canvas; the compositor clips it.
pub fn hero_frame(
    orientation: Orientation,
    hero_w: u32,
    hero_h: u32,
    width: u32,
    height: u32,
) -> (Rect, ScaleFactor) {
    match orientation {
        Orientation::Portrait => {
            let scale = ScaleFactor::fit(height, hero_h);
            (Rect::new(0, 0, scale.apply(hero_w), height), scale)
        }
        Orientation::Landscape => {
            let scale = ScaleFactor::fit(width, hero_w);
            (Rect::new(0, 0, width, scale.apply(hero_h)), scale)
        }
    }
}

/// Scale for one band image: fit its cross dimension to `available`, never
/// magnifying beyond `max_upscale`.
pub fn band_scale(cross_dim: u32, available: u32, max_upscale: ScaleFactor) -> ScaleFactor {
    ScaleFactor::fit(available, cross_dim).min(max_upscale)
}

/// Greedy, order-preserving fit along a band of length `long`.
///
/// Returns how many leading extents fit. Stops at the first extent whose
/// inclusion (with `min_gap` reserved between fitted images) would pass
/// `long`; nothing after it is considered. Zero extents are unplaceable and
/// stop the pass as well.
pub fn fit_prefix(extents: &[u32], long: u32, min_gap: u32) -> usize {
    let mut total = 0u64;
    for (i, ext) in extents.iter().enumerate() {
        let need = total + *ext as u64 + i as u64 * min_gap as u64;
        if *ext == 0 || need > long as u64 {
            return i;
        }
        total += *ext as u64;
    }
    extents.len()
}

pub(crate) fn plan_screenshots(
    hero: LayoutItem<String>,
    secondaries: Vec<LayoutItem<String>>,
    cfg: &CollageConfig,
) -> CollagePlan<String> {
    let orientation = Orientation::of(hero.w, hero.h);
    let (frame, scale) = hero_frame(orientation, hero.w, hero.h, cfg.width, cfg.height);

    let mut plan = CollagePlan {
        width: cfg.width,
        height: cfg.height,
        mode: LayoutMode::Screenshots,
        orientation: Some(orientation),
        hero: Placement {
            key: hero.key,
            frame,
            source_size: (hero.w, hero.h),
            scale,
        },
        images: Vec::new(),
        band: None,
    };

    // (canvas extent across the band, hero extent across it, band length)
    let (cross_total, hero_extent, long) = match orientation {
        Orientation::Portrait => (cfg.width, frame.w, cfg.height),
        Orientation::Landscape => (cfg.height, frame.h, cfg.width),
    };
    let available = cross_total as i64 - hero_extent as i64 - cfg.margin as i64;
    if available <= 0 {
        debug!(?orientation, available, "no room for a band");
        return plan;
    }
    let available = available as u32;
    let offset = hero_extent + cfg.margin;

    let scaled: Vec<(LayoutItem<String>, ScaleFactor, u32, u32)> = secondaries
        .into_iter()
        .map(|it| {
            let cross = match orientation {
                Orientation::Portrait => it.w,
                Orientation::Landscape => it.h,
            };
            let s = band_scale(cross, available, cfg.max_upscale);
            let (w, h) = (s.apply(it.w), s.apply(it.h));
            (it, s, w, h)
        })
        .collect();
    let along = |w: u32, h: u32| match orientation {
        Orientation::Portrait => h,
        Orientation::Landscape => w,
    };
    let extents: Vec<u32> = scaled
        .iter()
        .map(|(_, _, w, h)| if *w == 0 || *h == 0 { 0 } else { along(*w, *h) })
        .collect();

    let spacer = spacer_for(cfg.spacing, cfg);
    let candidates = extents.len();
    let fitted = fit_prefix(&extents, long, spacer.min_gap());
    let dist = spacer.distribute(long, &extents[..fitted]);

    for ((it, s, w, h), pos) in scaled.into_iter().take(fitted).zip(dist.offsets) {
        let frame = match orientation {
            Orientation::Portrait => Rect::new(offset, pos, w, h),
            Orientation::Landscape => Rect::new(pos, offset, w, h),
        };
        plan.images.push(Placement {
            key: it.key,
            frame,
            source_size: (it.w, it.h),
            scale: s,
        });
    }

    let rejected_at = (fitted < candidates).then_some(fitted);
    debug!(
        ?orientation,
        available,
        candidates,
        fitted,
        ?rejected_at,
        spacing = dist.spacing,
        "band packed"
    );
    plan.band = Some(BandReport {
        policy: cfg.spacing,
        available,
        offset,
        candidates,
        fitted,
        rejected_at,
        spacing: dist.spacing,
    });
    plan
}
