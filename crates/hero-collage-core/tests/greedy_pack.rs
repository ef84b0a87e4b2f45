use hero_collage_core::layout::screenshots::fit_prefix;
use hero_collage_core::prelude::*;

#[test]
fn stops_at_first_rejection() {
    // 100 would fit after 500, but 400 is rejected first
    assert_eq!(fit_prefix(&[500, 400, 100], 800, 0), 1);
}

#[test]
fn reserves_min_gap_between_images() {
    assert_eq!(fit_prefix(&[400, 400], 800, 0), 2);
    assert_eq!(fit_prefix(&[400, 400], 800, 2), 1);
    assert_eq!(fit_prefix(&[399, 399], 800, 2), 2);
}

#[test]
fn exact_fit_is_accepted() {
    assert_eq!(fit_prefix(&[800], 800, 2), 1);
    assert_eq!(fit_prefix(&[801], 800, 0), 0);
}

#[test]
fn zero_extent_is_unplaceable() {
    assert_eq!(fit_prefix(&[10, 0, 10], 800, 0), 1);
}

#[test]
fn later_small_image_is_excluded_from_plan() {
    let cfg = CollageConfig::builder()
        .with_dimensions(1200, 800)
        .mode(LayoutMode::Screenshots)
        .build();
    let plan = plan_layout(
        ("hero", 600, 900),
        vec![("a", 665, 400), ("b", 665, 500), ("c", 665, 100)],
        &cfg,
    )
    .expect("plan");
    let keys: Vec<&str> = plan.images.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["a"]);
    let band = plan.band.expect("band");
    assert_eq!(band.rejected_at, Some(1));
    assert_eq!(plan.stats().num_rejected, 2);
}

#[test]
fn listing_order_is_preserved() {
    let cfg = CollageConfig::builder()
        .with_dimensions(1200, 800)
        .mode(LayoutMode::Screenshots)
        .build();
    let plan = plan_layout(
        ("hero", 600, 900),
        vec![("z", 665, 100), ("a", 665, 300), ("m", 665, 200)],
        &cfg,
    )
    .expect("plan");
    let keys: Vec<&str> = plan.images.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}
