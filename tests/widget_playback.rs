mod common;

use common::{DrawCall, RecordingSurface};
use mandrake_rust::{
    config::WidgetConfig,
    geometry::Rect,
    sprite::{animation::FrameRange, preset::AnimationPreset},
    widget::SpriteWidget,
};

fn default_widget() -> SpriteWidget {
    SpriteWidget::from_config(&WidgetConfig::default())
}

#[test]
fn test_starts_on_full_range() {
    let widget = default_widget();
    assert_eq!(widget.animation.frame_index(), 0);
    assert_eq!(widget.animation.range(), FrameRange::new(0, 355));
    assert_eq!(widget.layout.container_width, 480.0);
    assert_eq!(widget.layout.container_height, 450.0);
}

#[test]
fn test_tick_draws_then_advances() {
    let mut widget = default_widget();
    let mut surface = RecordingSurface::new(480.0, 450.0, 1.0);
    widget.on_resize(&mut surface, 480.0, 450.0, 1.0).unwrap();
    surface.calls.clear();

    widget.select_preset(AnimationPreset::Wink).unwrap();
    widget.on_tick(&mut surface);

    assert_eq!(
        surface.calls,
        vec![
            DrawCall::Clear(Rect::from(0.0, 0.0, 480.0, 450.0)),
            DrawCall::Tile {
                src: Rect::from_size(1024.0, 1024.0, 256.0, 256.0),
                dst: Rect::from_size(132.0, 117.0, 216.0, 216.0),
            },
        ]
    );
    assert_eq!(widget.animation.frame_index(), 77);
}

#[test]
fn test_wink_cycle_over_forty_ticks() {
    let mut widget = default_widget();
    let mut surface = RecordingSurface::new(480.0, 450.0, 1.0);
    widget.select_preset(AnimationPreset::Wink).unwrap();

    let mut drawn = Vec::new();
    for _ in 0..40 {
        drawn.push(widget.animation.frame_index());
        widget.on_tick(&mut surface);
    }

    let expected: Vec<u32> = (76..=112).chain(76..79).collect();
    assert_eq!(drawn, expected);
    assert_eq!(drawn.iter().filter(|frame| **frame == 112).count(), 1);
    assert_eq!(surface.tiles().len(), 40);
}

#[test]
fn test_selecting_preset_rewinds_mid_cycle() {
    let mut widget = default_widget();
    let mut surface = RecordingSurface::new(480.0, 450.0, 1.0);
    widget.select_preset(AnimationPreset::Float).unwrap();
    for _ in 0..10 {
        widget.on_tick(&mut surface);
    }
    assert_eq!(widget.animation.frame_index(), 123);

    widget.select_preset(AnimationPreset::Hide).unwrap();
    assert_eq!(widget.animation.frame_index(), 263);
    assert_eq!(widget.animation.range(), FrameRange::new(263, 355));
}

#[test]
fn test_resize_recomputes_layout_and_redraws() {
    let mut widget = default_widget();
    let mut surface = RecordingSurface::new(0.0, 0.0, 1.0);
    widget.on_resize(&mut surface, 800.0, 600.0, 2.0).unwrap();

    assert_eq!(
        surface.calls[0],
        DrawCall::Resize {
            width: 1600,
            height: 1200,
            ratio: 2.0
        }
    );
    assert_eq!(surface.calls[1], DrawCall::Clear(Rect::from(0.0, 0.0, 800.0, 600.0)));
    let (_, dst) = surface.tiles()[0];
    assert_eq!(dst, Rect::from_size(270.0, 170.0, 260.0, 260.0));
    // Redrawing on resize does not move playback forward.
    assert_eq!(widget.animation.frame_index(), 0);
}

#[test]
fn test_repeated_resize_is_stable() {
    let mut widget = default_widget();
    let mut surface = RecordingSurface::new(0.0, 0.0, 1.0);
    widget.on_resize(&mut surface, 640.0, 360.0, 1.5).unwrap();
    let first = widget.layout;
    widget.on_resize(&mut surface, 640.0, 360.0, 1.5).unwrap();
    assert_eq!(widget.layout, first);
}

#[test]
fn test_broken_image_keeps_playing() {
    let mut widget = default_widget();
    let mut surface = RecordingSurface::new(480.0, 450.0, 1.0);
    surface.broken_image = true;

    widget.on_resize(&mut surface, 480.0, 450.0, 1.0).unwrap();
    for _ in 0..5 {
        widget.on_tick(&mut surface);
    }
    assert_eq!(widget.animation.frame_index(), 5);
    assert!(surface.tiles().is_empty());
}

#[test]
fn test_select_range_validates_against_sheet() {
    let mut widget = default_widget();
    assert!(widget.select_range(120, 80).is_err());
    assert!(widget.select_range(0, 400).is_err());
    assert_eq!(widget.animation.range(), FrameRange::new(0, 355));

    widget.select_range(10, 20).unwrap();
    assert_eq!(widget.animation.frame_index(), 10);
}

#[test]
fn test_small_sheet_rejects_presets_it_cannot_hold() {
    let config =
        WidgetConfig::from_json(r#"{ "sheet": { "frameCount": 100 }, "initialAnimation": "grow" }"#)
            .unwrap();
    let mut widget = SpriteWidget::from_config(&config);
    let mut surface = RecordingSurface::new(480.0, 450.0, 1.0);
    widget.on_tick(&mut surface);

    assert!(widget.select_preset(AnimationPreset::Hide).is_err());
    assert!(widget.select_preset(AnimationPreset::All).is_err());
    assert_eq!(widget.animation.range(), FrameRange::new(0, 75));
    assert_eq!(widget.animation.frame_index(), 1);

    widget.on_tick(&mut surface);
    let rows = config.sheet.frame_count.div_ceil(config.sheet.columns) as f64;
    for (src, _) in surface.tiles() {
        assert!(src.bottom <= rows * config.sheet.tile_height as f64);
    }
}
