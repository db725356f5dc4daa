//! Full-frame scenarios through the public `Guide` API

use guidemask_overlay::renderer::create_buffer;
use guidemask_overlay::types::{Anchor, Fit, GuideConfig, HighlightShape, PaddingSpec, Placement};
use guidemask_overlay::{ElementId, Guide, Rect, Size, TouchRegion, hit_test};

const WIDTH: u32 = 1080;
const HEIGHT: u32 = 1920;

fn alpha_at(surface: &[u8], width: u32, x: u32, y: u32) -> u8 {
    surface[((y * width + x) * 4 + 3) as usize]
}

fn phone_guide() -> Guide {
    let config = GuideConfig {
        padding: PaddingSpec::uniform(20.0),
        shape: HighlightShape::rounded_rect(8.0),
        mask_alpha: 200,
        decorations: vec![Placement::new(Anchor::Left, Fit::Center)],
        ..Default::default()
    };
    let mut guide = Guide::new(config);
    guide.set_target(Some(Rect::from_ltrb(100.0, 200.0, 300.0, 400.0)));
    guide
}

#[test]
fn phone_scenario_highlight_and_label() {
    let mut guide = phone_guide();
    guide.measure(WIDTH, HEIGHT);

    let mut surface = create_buffer(WIDTH, HEIGHT);
    let frame = guide
        .render(&mut surface, WIDTH, HEIGHT, &[Size::new(50.0, 30.0)])
        .unwrap();

    assert_eq!(frame.highlight, Rect::from_ltrb(80.0, 180.0, 320.0, 420.0));
    assert_eq!(frame.decorations[0].id, ElementId(0));
    assert_eq!(
        frame.decorations[0].rect,
        Rect::from_ltrb(30.0, 285.0, 80.0, 315.0)
    );

    // Hole is clear, the rest of the surface is dimmed
    assert_eq!(alpha_at(&surface, WIDTH, 200, 300), 0);
    assert_eq!(alpha_at(&surface, WIDTH, 1000, 1800), 200);
    assert_eq!(hit_test(frame.highlight, 200.0, 300.0), TouchRegion::Highlight);
}

#[test]
fn keyboard_open_shifts_highlight_once() {
    let mut guide = phone_guide();

    let mut surface = create_buffer(WIDTH, HEIGHT);
    let before = guide.render(&mut surface, WIDTH, HEIGHT, &[]).unwrap();

    // Keyboard takes 300px off the bottom of the surface
    let shrunk = HEIGHT - 300;
    let mut surface = create_buffer(WIDTH, shrunk);
    let after = guide.render(&mut surface, WIDTH, shrunk, &[]).unwrap();
    assert_eq!(after.highlight.top, before.highlight.top - 300.0);
    assert_eq!(after.highlight.bottom, before.highlight.bottom - 300.0);

    let mut surface = create_buffer(WIDTH, shrunk);
    let again = guide.render(&mut surface, WIDTH, shrunk, &[]).unwrap();
    assert_eq!(again.highlight, after.highlight);
}

#[test]
fn circle_over_entire_target_has_no_hole() {
    let config = GuideConfig {
        shape: HighlightShape::Circle,
        overlay_target: true,
        mask_alpha: 128,
        ..Default::default()
    };
    let mut guide = Guide::new(config);
    guide.set_target(Some(Rect::from_ltrb(100.0, 100.0, 200.0, 200.0)));

    let mut surface = create_buffer(400, 400);
    guide.render(&mut surface, 400, 400, &[]).unwrap();
    for y in 100..200 {
        for x in 100..200 {
            assert_eq!(alpha_at(&surface, 400, x, y), 128);
        }
    }
}

#[test]
fn missing_target_then_recovery() {
    let mut guide = Guide::new(GuideConfig::default());
    let mut surface = create_buffer(200, 200);

    let err = guide.render(&mut surface, 200, 200, &[]).unwrap_err();
    assert!(err.is_recoverable());

    guide.set_target(Some(Rect::from_ltrb(50.0, 50.0, 150.0, 150.0)));
    let frame = guide.render(&mut surface, 200, 200, &[]).unwrap();
    assert_eq!(frame.highlight, Rect::from_ltrb(50.0, 50.0, 150.0, 150.0));
    assert_eq!(alpha_at(&surface, 200, 100, 100), 0);
    assert_eq!(alpha_at(&surface, 200, 10, 10), 255);
}

#[test]
fn negative_padding_shrinks_the_hole() {
    let config = GuideConfig {
        padding: PaddingSpec::uniform(-15.0),
        mask_alpha: 200,
        ..Default::default()
    };
    let mut guide = Guide::new(config);
    guide.set_target(Some(Rect::from_ltrb(100.0, 200.0, 300.0, 400.0)));

    let mut surface = create_buffer(400, 600);
    let frame = guide.render(&mut surface, 400, 600, &[]).unwrap();
    assert_eq!(frame.highlight, Rect::from_ltrb(115.0, 215.0, 285.0, 385.0));

    // Inside the raw target but outside the contracted hole
    assert_eq!(alpha_at(&surface, 400, 105, 300), 200);
    assert_eq!(alpha_at(&surface, 400, 200, 300), 0);
}
