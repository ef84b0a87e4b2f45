use crate::config::{CollageConfig, LayoutMode, SpacingPolicy};
use crate::error::{CollageError, Result};
use crate::model::CollagePlan;
use tracing::instrument;

pub mod anchored;
pub mod screenshots;
pub mod single;
pub mod uniform;

/// Offsets of fitted band images along the band's long axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// One offset per extent, in input order.
    pub offsets: Vec<u32>,
    /// Gap reported for the band.
    pub spacing: u32,
}

/// A spacer distributes fitted images along a band of length `long`.
///
/// Implementations may assume `sum(extents) + (n - 1) * min_gap() <= long`;
/// the greedy fit pass guarantees it. Offsets must keep every image inside
/// `[0, long)` and must not overlap.
pub trait Spacer {
    /// Gap reserved between images while fitting.
    fn min_gap(&self) -> u32;
    fn distribute(&self, long: u32, extents: &[u32]) -> Distribution;
}

/// Returns the spacer for `policy`, parameterised from `cfg`.
pub fn spacer_for(policy: SpacingPolicy, cfg: &CollageConfig) -> Box<dyn Spacer> {
    match policy {
        SpacingPolicy::AnchoredEnds => Box::new(anchored::AnchoredEnds::new(cfg.min_spacing)),
        SpacingPolicy::UniformRemainder => {
            Box::new(uniform::UniformRemainder::new(cfg.max_spacing))
        }
    }
}

/// Layout-only item (key + decoded size).
#[derive(Debug, Clone)]
pub struct LayoutItem<K = String> {
    pub key: K,
    pub w: u32,
    pub h: u32,
}

impl<K> LayoutItem<K> {
    pub fn new(key: K, w: u32, h: u32) -> Self {
        Self { key, w, h }
    }
}

/// Plans a collage from sizes only; no pixel data is touched.
/// `hero` and `secondaries` are `(key, width, height)`; secondaries keep their order.
pub fn plan_layout<K: Into<String>>(
    hero: (K, u32, u32),
    secondaries: Vec<(K, u32, u32)>,
    cfg: &CollageConfig,
) -> Result<CollagePlan<String>> {
    let (k, w, h) = hero;
    let items = secondaries
        .into_iter()
        .map(|(k, w, h)| LayoutItem::new(k, w, h))
        .collect();
    plan_layout_items(LayoutItem::new(k, w, h), items, cfg)
}

#[instrument(skip_all)]
/// Plans a collage from layout items.
pub fn plan_layout_items<K: Into<String>>(
    hero: LayoutItem<K>,
    secondaries: Vec<LayoutItem<K>>,
    cfg: &CollageConfig,
) -> Result<CollagePlan<String>> {
    cfg.validate()?;

    if hero.w == 0 || hero.h == 0 {
        return Err(CollageError::InvalidInput(format!(
            "hero image has zero size ({}x{})",
            hero.w, hero.h
        )));
    }
    let hero = LayoutItem::new(hero.key.into(), hero.w, hero.h);

    let plan = match cfg.mode {
        LayoutMode::Single => single::plan_single(hero, cfg),
        LayoutMode::Screenshots => {
            let items: Vec<LayoutItem<String>> = secondaries
                .into_iter()
                .map(|it| LayoutItem::new(it.key.into(), it.w, it.h))
                .collect();
            screenshots::plan_screenshots(hero, items, cfg)
        }
    };
    Ok(plan)
}
