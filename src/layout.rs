use serde::Deserialize;

use crate::{
    error::{WidgetError, WidgetErrorCode},
    geometry::Rect,
    sprite::sheet::SpriteSheet,
};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutParams {
    /// Upper bound of the on-screen sprite width, in layout pixels.
    pub max_sprite_width: f64,
    /// Share of the container width the sprite may take.
    pub width_fraction: f64,
    pub fallback_width: f64,
    pub fallback_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            max_sprite_width: 260.0,
            width_fraction: 0.45,
            fallback_width: 480.0,
            fallback_height: 450.0,
        }
    }
}

impl LayoutParams {
    pub fn validate(&self) -> Result<(), WidgetError> {
        let fields = [
            ("maxSpriteWidth", self.max_sprite_width),
            ("widthFraction", self.width_fraction),
            ("fallbackWidth", self.fallback_width),
            ("fallbackHeight", self.fallback_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(WidgetError::new_code(
                    WidgetErrorCode::InvalidConfig,
                    format!("layout.{} must be a positive number, got {}", name, value),
                ));
            }
        }
        Ok(())
    }
}

/// Where and how big the sprite is drawn for one container size. Container
/// and sprite values are in layout (CSS) pixels, backing values in device
/// pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutState {
    pub container_width: f64,
    pub container_height: f64,
    pub pixel_ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
    pub sprite_scale: f64,
    pub draw_width: f64,
    pub draw_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl LayoutState {
    pub fn container_rect(&self) -> Rect {
        Rect::from_size(0.0, 0.0, self.container_width, self.container_height)
    }

    pub fn sprite_rect(&self) -> Rect {
        Rect::from_size(self.origin_x, self.origin_y, self.draw_width, self.draw_height)
    }
}

fn usable_extent(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn backing_extent(size: f64, pixel_ratio: f64) -> u32 {
    (size * pixel_ratio).round().max(1.0) as u32
}

pub fn compute_layout(
    container_width: f64,
    container_height: f64,
    pixel_ratio: f64,
    params: &LayoutParams,
    sheet: &SpriteSheet,
) -> LayoutState {
    let container_width = usable_extent(container_width, params.fallback_width);
    let container_height = usable_extent(container_height, params.fallback_height);
    let pixel_ratio = usable_extent(pixel_ratio, 1.0);

    let desired_width = params
        .max_sprite_width
        .min(container_width * params.width_fraction);
    let sprite_scale = desired_width / sheet.tile_width as f64;
    let draw_width = sheet.tile_width as f64 * sprite_scale;
    let draw_height = sheet.tile_height as f64 * sprite_scale;

    LayoutState {
        container_width,
        container_height,
        pixel_ratio,
        backing_width: backing_extent(container_width, pixel_ratio),
        backing_height: backing_extent(container_height, pixel_ratio),
        sprite_scale,
        draw_width,
        draw_height,
        origin_x: (container_width - draw_width) / 2.0,
        origin_y: (container_height - draw_height) / 2.0,
    }
}
