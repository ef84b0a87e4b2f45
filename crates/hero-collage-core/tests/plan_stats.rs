use hero_collage_core::prelude::*;

#[test]
fn coverage_counts_hero_and_band() {
    let cfg = CollageConfig::builder().with_dimensions(1200, 800).build();
    let plan = plan_layout(("hero", 600, 900), vec![("a", 400, 300)], &cfg).expect("plan");
    let stats = plan.stats();

    assert_eq!(stats.num_images, 2);
    assert_eq!(stats.num_secondary, 1);
    assert_eq!(stats.num_rejected, 0);
    assert_eq!(stats.canvas_area, 960_000);
    assert_eq!(stats.covered_area, 533 * 800 + 665 * 498);
    assert!((stats.coverage - stats.covered_area as f64 / 960_000.0).abs() < 1e-12);
    assert_eq!(stats.uncovered_area(), 960_000 - stats.covered_area);
    assert!(stats.summary().contains("Coverage"));
}

#[test]
fn clipped_hero_counts_only_visible_area() {
    let cfg = CollageConfig::builder().with_dimensions(60, 100).build();
    let plan = plan_layout(("hero", 50, 50), vec![], &cfg).expect("plan");
    let stats = plan.stats();
    assert_eq!(stats.covered_area, 60 * 100);
    assert_eq!(stats.coverage, 1.0);
}

#[test]
fn placements_yield_hero_first() {
    let cfg = CollageConfig::builder().with_dimensions(1200, 800).build();
    let plan = plan_layout(
        ("hero", 600, 900),
        vec![("a", 400, 100), ("b", 400, 100)],
        &cfg,
    )
    .expect("plan");
    let keys: Vec<&str> = plan.placements().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["hero", "a", "b"]);
}
