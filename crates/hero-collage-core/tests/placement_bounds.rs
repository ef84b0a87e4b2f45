use hero_collage_core::prelude::*;

fn sizes() -> Vec<(String, u32, u32)> {
    let raw = [
        (1080, 1920),
        (1920, 1080),
        (640, 480),
        (300, 900),
        (50, 40),
        (1280, 720),
        (720, 1280),
        (200, 200),
        (3000, 100),
        (100, 3000),
    ];
    raw.iter()
        .enumerate()
        .map(|(i, (w, h))| (format!("img{i}"), *w, *h))
        .collect()
}

fn assert_disjoint_and_inside(plan: &CollagePlan) {
    for p in &plan.images {
        assert!(
            p.frame.fits_within(plan.width, plan.height),
            "{} out of bounds: {:?}",
            p.key,
            p.frame
        );
        assert!(!p.frame.intersects(&plan.hero.frame), "{} overlaps hero", p.key);
    }
    for (i, a) in plan.images.iter().enumerate() {
        for b in plan.images.iter().skip(i + 1) {
            assert!(!a.frame.intersects(&b.frame), "{} overlaps {}", a.key, b.key);
        }
    }
}

#[test]
fn band_images_never_overflow_or_overlap() {
    let canvases = [(1200, 800), (800, 1200), (1000, 1000), (400, 300), (1920, 400)];
    let heroes = [(600, 900), (800, 400), (100, 100), (1000, 300)];
    for policy in [SpacingPolicy::AnchoredEnds, SpacingPolicy::UniformRemainder] {
        for (cw, ch) in canvases {
            for (hw, hh) in heroes {
                let cfg = CollageConfig::builder()
                    .with_dimensions(cw, ch)
                    .spacing(policy)
                    .build();
                let plan = plan_layout(("hero".to_string(), hw, hh), sizes(), &cfg).expect("plan");
                assert_disjoint_and_inside(&plan);
            }
        }
    }
}

#[test]
fn band_scale_matches_available_extent() {
    let cfg = CollageConfig::builder().with_dimensions(1200, 800).build();
    let plan = plan_layout(("hero".to_string(), 600, 900), sizes(), &cfg).expect("plan");
    let band = plan.band.expect("band");
    for p in &plan.images {
        assert!(p.frame.w <= band.available);
        assert_eq!(p.frame.x, band.offset);
    }
}
