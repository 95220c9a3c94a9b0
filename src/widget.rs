use log::debug;

use crate::{
    config::WidgetConfig,
    error::WidgetError,
    layout::{compute_layout, LayoutParams, LayoutState},
    rendering::{draw_sprite_frame, DrawSurface},
    sprite::{
        animation::{AnimationState, FrameRange},
        preset::AnimationPreset,
        sheet::SpriteSheet,
    },
};

/// All mutable widget state. Handlers receive it and the drawing surface
/// explicitly, so nothing here touches the DOM.
pub struct SpriteWidget {
    pub animation: AnimationState,
    pub layout: LayoutState,
    pub sheet: SpriteSheet,
    pub layout_params: LayoutParams,
}

impl SpriteWidget {
    pub fn new(
        sheet: SpriteSheet,
        layout_params: LayoutParams,
        initial: AnimationPreset,
    ) -> SpriteWidget {
        SpriteWidget {
            animation: AnimationState::new(sheet.columns, initial.range()),
            layout: compute_layout(0.0, 0.0, 1.0, &layout_params, &sheet),
            sheet,
            layout_params,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> SpriteWidget {
        SpriteWidget::new(config.sheet, config.layout, config.initial_animation)
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), WidgetError> {
        draw_sprite_frame(surface, &self.layout, &self.animation, &self.sheet)
    }

    fn redraw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        // A sprite that failed to load makes every draw fail; playback goes on.
        if let Err(err) = self.draw(surface) {
            debug!("draw failed at frame {}: {}", self.animation.frame_index(), err);
        }
    }

    pub fn on_resize<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        width: f64,
        height: f64,
        pixel_ratio: f64,
    ) -> Result<(), WidgetError> {
        self.layout = compute_layout(width, height, pixel_ratio, &self.layout_params, &self.sheet);
        debug!(
            "layout {}x{} @{} -> backing {}x{}, scale {}",
            self.layout.container_width,
            self.layout.container_height,
            self.layout.pixel_ratio,
            self.layout.backing_width,
            self.layout.backing_height,
            self.layout.sprite_scale
        );
        surface.resize_backing(&self.layout)?;
        self.redraw(surface);
        Ok(())
    }

    pub fn on_tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.redraw(surface);
        self.animation.advance();
    }

    /// Presets are fixed to the mandrake sheet; a smaller configured sheet
    /// rejects the ones it cannot hold and keeps the current animation.
    pub fn select_preset(&mut self, preset: AnimationPreset) -> Result<(), WidgetError> {
        debug!("selected animation {}", preset);
        self.animation.set_range_checked(preset.range(), &self.sheet)
    }

    pub fn select_range(&mut self, min_frame: u32, max_frame: u32) -> Result<(), WidgetError> {
        self.animation
            .set_range_checked(FrameRange::new(min_frame, max_frame), &self.sheet)
    }
}
