use crate::model::{CollagePlan, Placement};
use serde_json::{Value, json};

fn placement_json<K: ToString>(p: &Placement<K>) -> Value {
    json!({
        "key": p.key.to_string(),
        "frame": {"x": p.frame.x, "y": p.frame.y, "w": p.frame.w, "h": p.frame.h},
        "sourceSize": {"w": p.source_size.0, "h": p.source_size.1},
        "scale": p.scale.as_f64(),
    })
}

/// Serialize a plan as `{ canvas, hero, images, band, stats, meta }`.
/// `images` keep listing order; `band` is null when nothing was attempted.
pub fn to_json<K: ToString>(plan: &CollagePlan<K>) -> Value {
    let images: Vec<Value> = plan.images.iter().map(placement_json).collect();
    let stats = plan.stats();
    json!({
        "canvas": {"w": plan.width, "h": plan.height},
        "hero": placement_json(&plan.hero),
        "images": images,
        "band": plan.band,
        "stats": {
            "images": stats.num_images,
            "rejected": stats.num_rejected,
            "coverage": stats.coverage,
        },
        "meta": {
            "app": "hero-collage",
            "version": env!("CARGO_PKG_VERSION"),
            "mode": plan.mode,
            "orientation": plan.orientation,
            "format": "RGB888",
        },
    })
}
