use log::{debug, warn};

use crate::{
    error::WidgetError,
    rendering::DrawSurface,
    sprite::preset::AnimationPreset,
    widget::SpriteWidget,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Container or viewport changed size.
    Resize,
    /// One render tick from the animation frame scheduler.
    Tick,
    SelectPreset(AnimationPreset),
    SelectRange(u32, u32),
    AssetReady,
    AssetFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    /// The caller must schedule the first render tick.
    StartRenderLoop,
}

/// Tracks whether the render loop has been scheduled. Once started it runs
/// for the lifetime of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderLoopState {
    pub started: bool,
}

impl RenderLoopState {
    fn start(&mut self) -> EventOutcome {
        if self.started {
            return EventOutcome::Handled;
        }
        self.started = true;
        EventOutcome::StartRenderLoop
    }
}

pub fn route_event<S: DrawSurface + ?Sized>(
    widget: &mut SpriteWidget,
    surface: &mut S,
    render_loop: &mut RenderLoopState,
    event: WidgetEvent,
) -> Result<EventOutcome, WidgetError> {
    match event {
        WidgetEvent::Resize => {
            let metrics = surface.measure();
            widget.on_resize(surface, metrics.width, metrics.height, metrics.pixel_ratio)?;
            Ok(EventOutcome::Handled)
        }
        WidgetEvent::Tick => {
            widget.on_tick(surface);
            Ok(EventOutcome::Handled)
        }
        WidgetEvent::SelectPreset(preset) => {
            widget.select_preset(preset)?;
            Ok(EventOutcome::Handled)
        }
        WidgetEvent::SelectRange(min_frame, max_frame) => {
            widget.select_range(min_frame, max_frame)?;
            Ok(EventOutcome::Handled)
        }
        WidgetEvent::AssetReady => {
            debug!("sprite sheet ready");
            route_event(widget, surface, render_loop, WidgetEvent::Resize)?;
            Ok(render_loop.start())
        }
        WidgetEvent::AssetFailed => {
            warn!("Mandrake sprite failed to load. Check the image URL or file path.");
            route_event(widget, surface, render_loop, WidgetEvent::Resize)?;
            Ok(render_loop.start())
        }
    }
}
