use wasm_bindgen::prelude::*;

use crate::{
    error::WidgetError,
    geometry::Rect,
    layout::LayoutState,
    sprite::{animation::AnimationState, sheet::SpriteSheet},
};

/// Size of the drawing area as the host currently reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

/// The 2D drawing operations the widget needs from its host.
pub trait DrawSurface {
    fn measure(&self) -> SurfaceMetrics;

    /// Resizes the backing store to the layout's backing size and maps further
    /// drawing to layout pixels. Resizing clears whatever was drawn before.
    fn resize_backing(&mut self, layout: &LayoutState) -> Result<(), WidgetError>;

    fn clear_rect(&mut self, rect: &Rect);

    /// Copies `src` from the sprite sheet into `dst`.
    fn draw_tile(&mut self, src: &Rect, dst: &Rect) -> Result<(), WidgetError>;
}

pub fn draw_sprite_frame<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &LayoutState,
    animation: &AnimationState,
    sheet: &SpriteSheet,
) -> Result<(), WidgetError> {
    surface.clear_rect(&layout.container_rect());
    surface.draw_tile(&animation.source_rect(sheet), &layout.sprite_rect())
}

pub struct CanvasSurface {
    pub canvas: web_sys::HtmlCanvasElement,
    pub ctx2d: web_sys::CanvasRenderingContext2d,
    pub sprite_image: web_sys::HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(
        canvas: web_sys::HtmlCanvasElement,
        sprite_image: web_sys::HtmlImageElement,
    ) -> Result<CanvasSurface, WidgetError> {
        let ctx2d = canvas
            .get_context("2d")?
            .ok_or_else(|| WidgetError::new("canvas has no 2d context".to_string()))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| WidgetError::new("2d context has an unexpected type".to_string()))?;

        Ok(CanvasSurface {
            canvas,
            ctx2d,
            sprite_image,
        })
    }

    pub fn is_sprite_loaded(&self) -> bool {
        self.sprite_image.complete() && self.sprite_image.natural_width() != 0
    }
}

impl DrawSurface for CanvasSurface {
    fn measure(&self) -> SurfaceMetrics {
        let pixel_ratio = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0);
        SurfaceMetrics {
            width: self.canvas.client_width() as f64,
            height: self.canvas.client_height() as f64,
            pixel_ratio,
        }
    }

    fn resize_backing(&mut self, layout: &LayoutState) -> Result<(), WidgetError> {
        self.canvas.set_width(layout.backing_width);
        self.canvas.set_height(layout.backing_height);
        let ratio = layout.pixel_ratio;
        self.ctx2d.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
        Ok(())
    }

    fn clear_rect(&mut self, rect: &Rect) {
        self.ctx2d
            .clear_rect(rect.left, rect.top, rect.width(), rect.height());
    }

    fn draw_tile(&mut self, src: &Rect, dst: &Rect) -> Result<(), WidgetError> {
        self.ctx2d
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.sprite_image,
                src.left,
                src.top,
                src.width(),
                src.height(),
                dst.left,
                dst.top,
                dst.width(),
                dst.height(),
            )?;
        Ok(())
    }
}
