use pixmanip_core::grading::{hsl, threshold, tone};
use pixmanip_core::{Adjustment, Hsl, Raster, Recipe, Rgb, apply_recipe, geometry};

fn primaries_2x2() -> Raster {
    Raster::from_pixels(
        2,
        2,
        vec![
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
        ],
    )
    .expect("4 pixels for 2x2")
}

/// Deterministic pseudo-random image (xorshift), distinct enough for stats.
fn noise(width: u32, height: u32, seed: u32) -> Raster {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state & 0xff) as u8
    };
    let pixels = (0..width * height)
        .map(|_| Rgb::new(next(), next(), next()))
        .collect();
    Raster::from_pixels(width, height, pixels).expect("buffer sized from dimensions")
}

#[test]
fn invert_primaries_end_to_end() {
    let out = tone::invert(primaries_2x2());
    assert_eq!(
        out.pixels(),
        &[
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 0, 0),
        ]
    );
}

#[test]
fn hue_500_behaves_like_360() {
    let img = noise(16, 9, 7);
    assert_eq!(hsl::set_hue(img.clone(), 500.0), hsl::set_hue(img, 360.0));
}

#[test]
fn grayscale_is_floor_average_for_every_pixel() {
    let img = noise(20, 10, 3);
    let out = tone::grayscale(img.clone());
    for (before, after) in img.pixels().iter().zip(out.pixels()) {
        let avg = ((before.r as u32 + before.g as u32 + before.b as u32) / 3) as u8;
        assert_eq!(*after, Rgb::new(avg, avg, avg));
    }
}

#[test]
fn invert_twice_restores_large_image() {
    // Large enough to take the parallel path.
    let img = noise(400, 300, 11);
    assert_eq!(tone::invert(tone::invert(img.clone())), img);
}

#[test]
fn hsl_roundtrip_within_one_unit() {
    let img = noise(64, 64, 5);
    for px in img.pixels() {
        let back = Hsl::from_rgb(*px).to_rgb();
        for (a, b) in [(px.r, back.r), (px.g, back.g), (px.b, back.b)] {
            assert!((a as i16 - b as i16).abs() <= 1, "{px:?} -> {back:?}");
        }
    }
}

#[test]
fn median_threshold_splits_population() {
    let img = noise(33, 17, 19);
    let n = img.len();
    let out = threshold::median_threshold(img);
    let black = out.pixels().iter().filter(|px| **px == Rgb::BLACK).count();
    let white = out.pixels().iter().filter(|px| **px == Rgb::WHITE).count();
    assert_eq!(black + white, n);
    // Ties at the median go white, so black never exceeds half.
    assert!(black <= n / 2, "{black} black of {n}");
}

#[test]
fn rotation_four_times_is_identity() {
    let img = noise(13, 7, 23);
    let once = geometry::rotate_clockwise(img.clone());
    assert_eq!(once.dimensions(), (7, 13));
    let back = (0..3).fold(once, |acc, _| geometry::rotate_clockwise(acc));
    assert_eq!(back, img);
}

#[test]
fn json_recipe_drives_the_chain() {
    let recipe = Recipe::from_json(
        r#"{ "steps": [ { "op": "saturation", "value": 0 }, { "op": "invert" } ] }"#,
    )
    .expect("valid recipe");
    assert_eq!(recipe.steps[1], Adjustment::Invert);
    let out = apply_recipe(noise(8, 8, 2), &recipe, None).expect("no overlays needed");
    assert!(out.pixels().iter().all(|px| px.is_achromatic()));
}
