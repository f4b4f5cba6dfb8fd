//! Integration tests for the public placement API.

use rand::{SeedableRng, rngs::StdRng};

use perimeter::{
    Engine, PlacementBuilder, PlacementPolicy, PlacementSet,
    config::AppConfig,
    export::Viewport,
    place_items,
    random::FnSource,
    viewport::ViewportClass,
};

fn assert_separated(set: &PlacementSet, min_distance: f32) {
    let placements = set.as_slice();
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            let distance = a.position().distance_to(b.position());
            assert!(
                distance >= min_distance,
                "items {} and {} are {distance} apart",
                a.index(),
                b.index()
            );
        }
    }
}

#[test]
fn test_thirteen_items_on_wide_viewport() {
    let zone = ViewportClass::Wide.exclusion_zone();

    for seed in 0..50 {
        let items: Vec<usize> = (0..13).collect();
        let set = place_items(&items, Some(1280.0), &mut StdRng::seed_from_u64(seed));

        assert!((1..=13).contains(&set.len()), "seed {seed}: {} placed", set.len());
        assert_separated(&set, 8.0);
        for placement in &set {
            assert!(!zone.contains(placement.position()));
            assert!(placement.side().band().contains(placement.position()));
        }
    }
}

#[test]
fn test_empty_input_for_any_width() {
    let empty: [(); 0] = [];
    for width in [None, Some(0.0), Some(320.0), Some(800.0), Some(1920.0)] {
        let set = place_items(&empty, width, &mut StdRng::seed_from_u64(3));
        assert!(set.is_empty());
        assert!(set.is_complete());
    }
}

#[test]
fn test_fixed_randomness_is_deterministic() {
    let builder = PlacementBuilder::default();

    let first = builder
        .place(Some(900.0), &mut StdRng::seed_from_u64(77))
        .expect("default config is valid");
    let second = builder
        .place(Some(900.0), &mut StdRng::seed_from_u64(77))
        .expect("default config is valid");
    assert_eq!(first, second);

    let mut draws = (0..).map(|i| ((i * 37) % 100) as f32 / 100.0);
    let mut source = FnSource::new(move || draws.next().unwrap_or(0.0));
    let scripted = Engine::default().place(13, &mut source);

    let mut draws = (0..).map(|i| ((i * 37) % 100) as f32 / 100.0);
    let mut source = FnSource::new(move || draws.next().unwrap_or(0.0));
    assert_eq!(scripted, Engine::default().place(13, &mut source));
}

#[test]
fn test_overfull_policy_drops_items_without_error() {
    let policy = PlacementPolicy::for_class(ViewportClass::Narrow)
        .with_min_distance(60.0)
        .expect("positive distance is valid");

    let set = Engine::new(policy).place(13, &mut StdRng::seed_from_u64(8));
    assert!(set.len() < 13);
    assert!(set.dropped() > 0);
    assert_separated(&set, 60.0);
}

#[test]
fn test_reinvocation_replaces_result() {
    let builder = PlacementBuilder::default();
    let mut rng = StdRng::seed_from_u64(12);

    let first = builder.place(Some(1280.0), &mut rng).unwrap();
    let second = builder.place(Some(375.0), &mut rng).unwrap();

    assert!(second.len() <= 13);
    assert_eq!(second.requested(), first.requested());
    assert_separated(&second, 14.0);
}

#[test]
fn test_invalid_config_fails_at_boundary() {
    let config: AppConfig = toml::from_str("[placement]\nmin_distance = -1.0").unwrap();
    let builder = PlacementBuilder::new(config);

    let result = builder.place(Some(1280.0), &mut StdRng::seed_from_u64(0));
    assert!(result.is_err());
}

#[test]
fn test_render_svg() {
    let config: AppConfig = toml::from_str(
        r##"
        [style]
        background_color = "#101018"
        show_exclusion_zone = true
        "##,
    )
    .unwrap();
    let builder = PlacementBuilder::new(config);
    let set = builder
        .place(Some(1280.0), &mut StdRng::seed_from_u64(4))
        .unwrap();

    let svg = builder
        .render_svg(&set, Viewport::new(1280.0, 800.0))
        .expect("Failed to render");

    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("stroke-dasharray"));
    assert_eq!(svg.matches("<circle").count(), set.len());
}

#[test]
fn test_outline_matches_zone_used_for_placement() {
    let config: AppConfig = toml::from_str(
        r#"
        [placement]
        fallback_class = "narrow"

        [style]
        show_exclusion_zone = true
        "#,
    )
    .unwrap();
    let builder = PlacementBuilder::new(config);
    let narrow = ViewportClass::Narrow.exclusion_zone();

    let set = builder.place(None, &mut StdRng::seed_from_u64(6)).unwrap();
    assert_eq!(set.exclusion_zone(), narrow);

    // Narrow zone {10, 90, 25, 75} on a 1280x900 canvas.
    let svg = builder
        .render_svg(&set, Viewport::new(1280.0, 900.0))
        .expect("Failed to render");
    assert!(svg.contains(r#"x="128""#), "{svg}");
    assert!(svg.contains(r#"y="225""#), "{svg}");
    assert!(svg.contains(r#"width="1024""#), "{svg}");

    // A zero width classifies as narrow even though the preview is wider.
    let config: AppConfig = toml::from_str("[style]\nshow_exclusion_zone = true").unwrap();
    let builder = PlacementBuilder::new(config);
    let set = builder.place(Some(0.0), &mut StdRng::seed_from_u64(6)).unwrap();
    assert_eq!(set.exclusion_zone(), narrow);
    let svg = builder
        .render_svg(&set, Viewport::new(1280.0, 900.0))
        .expect("Failed to render");
    assert!(svg.contains(r#"x="128""#), "{svg}");
}

#[test]
fn test_write_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.svg");
    let builder = PlacementBuilder::default();
    let set = builder
        .place(Some(1280.0), &mut StdRng::seed_from_u64(9))
        .unwrap();

    builder
        .write_svg(&set, Viewport::default(), &path)
        .expect("Failed to write");

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("<circle").count(), set.len());

    let missing = dir.path().join("missing").join("preview.svg");
    assert!(builder.write_svg(&set, Viewport::default(), missing).is_err());
}
