use hero_collage_core::prelude::*;

#[test]
fn export_json_smoke() {
    let cfg = CollageConfig::builder().with_dimensions(1200, 800).build();
    let plan = plan_layout(("hero", 600, 900), vec![("a", 400, 300)], &cfg).expect("plan");

    let v = to_json(&plan);
    let obj = v.as_object().expect("object");
    for key in ["canvas", "hero", "images", "band", "stats", "meta"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(v["canvas"]["w"], 1200);
    assert_eq!(v["hero"]["frame"]["w"], 533);
    assert_eq!(v["images"][0]["key"], "a");
    assert_eq!(v["images"][0]["frame"]["x"], 535);
    assert_eq!(v["band"]["policy"], "anchored_ends");
    assert_eq!(v["meta"]["mode"], "screenshots");
    assert_eq!(v["meta"]["orientation"], "portrait");
}

#[test]
fn export_without_band_is_null() {
    let cfg = CollageConfig::builder()
        .with_dimensions(1200, 800)
        .mode(LayoutMode::Single)
        .build();
    let plan = plan_layout(("hero", 600, 900), vec![], &cfg).expect("plan");
    let v = to_json(&plan);
    assert!(v["band"].is_null());
    assert!(v["images"].as_array().expect("array").is_empty());
}

#[test]
fn plan_round_trips_through_serde() {
    let cfg = CollageConfig::builder().with_dimensions(1200, 800).build();
    let plan = plan_layout(("hero", 800, 400), vec![("a", 300, 100)], &cfg).expect("plan");
    let s = serde_json::to_string(&plan).expect("serialize");
    let back: CollagePlan = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(back.images[0].frame, plan.images[0].frame);
    assert_eq!(back.band, plan.band);
}
