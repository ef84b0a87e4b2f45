use hero_collage_core::layout::screenshots::band_scale;
use hero_collage_core::prelude::*;

#[test]
fn small_secondary_is_capped_at_two() {
    let cfg = CollageConfig::builder()
        .with_dimensions(1200, 800)
        .mode(LayoutMode::Screenshots)
        .build();
    let plan = plan_layout(("hero", 600, 900), vec![("tiny", 100, 50)], &cfg).expect("plan");
    let p = &plan.images[0];
    assert_eq!(p.scale, ScaleFactor::new(2, 1));
    assert_eq!(p.scale.as_f64(), 2.0);
    assert_eq!((p.frame.w, p.frame.h), (200, 100));
}

#[test]
fn clamp_applies_regardless_of_available_space() {
    let max = ScaleFactor::new(2, 1);
    for available in [201, 500, 10_000] {
        let s = band_scale(100, available, max);
        assert_eq!(s, max, "available={available}");
    }
    assert_eq!(band_scale(100, 200, max).as_f64(), 2.0);
    assert_eq!(band_scale(100, 150, max), ScaleFactor::new(150, 100));
}

#[test]
fn downscale_is_never_clamped() {
    let s = band_scale(4000, 665, ScaleFactor::new(2, 1));
    assert_eq!(s, ScaleFactor::new(665, 4000));
    assert_eq!(s.apply(4000), 665);
}

#[test]
fn custom_cap_is_honored() {
    let cfg = CollageConfig::builder()
        .with_dimensions(1200, 800)
        .max_upscale(ScaleFactor::new(3, 2))
        .build();
    let plan = plan_layout(("hero", 600, 900), vec![("tiny", 100, 50)], &cfg).expect("plan");
    assert_eq!((plan.images[0].frame.w, plan.images[0].frame.h), (150, 75));
}

#[test]
fn aspect_ratio_is_preserved() {
    let s = ScaleFactor::new(665, 400);
    assert_eq!((s.apply(400), s.apply(300)), (665, 498));
}
