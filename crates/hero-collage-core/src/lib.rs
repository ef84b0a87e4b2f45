//! Core library for hero collages.
//!
//! - Modes: `Single` (hero centered) and `Screenshots` (hero at the origin, secondary images in the leftover band)
//! - Band spacing: anchored ends or uniform remainder
//! - Layout-only planning (`plan_layout`) and full compositing (`build`); plans are serde-serializable.
//!
//! Quick example:
//! ```ignore
//! use hero_collage_core::{CollageConfig, LayoutMode, build, load_hero, load_secondaries};
//! # fn main() -> anyhow::Result<()> {
//! let hero = load_hero("hero.png".as_ref())?;
//! let paths = vec!["shots/a.png".into(), "shots/b.png".into()];
//! let loaded = load_secondaries(&paths, "hero.png".as_ref());
//! let cfg = CollageConfig::builder()
//!     .with_dimensions(1200, 800)
//!     .mode(LayoutMode::Screenshots)
//!     .build();
//! let out = build(&hero, &loaded.images, &cfg)?;
//! out.save("collage.jpg".as_ref())?;
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod source;

pub use config::*;
pub use error::*;
pub use export::*;
pub use layout::{LayoutItem, plan_layout, plan_layout_items};
pub use model::*;
pub use pipeline::*;
pub use source::*;

/// Convenience prelude for common types and functions.
/// Importing `hero_collage_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{CollageConfig, CollageConfigBuilder, LayoutMode, SpacingPolicy};
    pub use crate::layout::{Distribution, LayoutItem, Spacer};
    pub use crate::model::{
        BandReport, CollagePlan, CollageStats, Orientation, Placement, Rect, ScaleFactor,
    };
    pub use crate::source::{LoadedImages, SkippedImage};
    pub use crate::{
        CollageOutput, InputImage, build, load_hero, load_secondaries, plan_layout,
        plan_layout_items, to_json,
    };
}
