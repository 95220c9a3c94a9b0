use std::{cell::RefCell, rc::Rc};

use log::{debug, info};
use wasm_bindgen::prelude::*;

use crate::{
    config::WidgetConfig,
    console_error, console_warn,
    error::{WidgetError, WidgetErrorCode},
    events::{route_event, EventOutcome, RenderLoopState, WidgetEvent},
    rendering::CanvasSurface,
    sprite::preset::AnimationPreset,
    widget::SpriteWidget,
};

pub struct WidgetHost {
    pub widget: SpriteWidget,
    pub surface: CanvasSurface,
    pub render_loop: RenderLoopState,
}

thread_local! {
    pub static WIDGET_HOST: RefCell<Option<WidgetHost>> = RefCell::new(None);
}

pub fn with_widget_host_mut<F, R>(f: F) -> Result<R, WidgetError>
where
    F: FnOnce(&mut WidgetHost) -> R,
{
    WIDGET_HOST.with_borrow_mut(|host| match host.as_mut() {
        Some(host) => Ok(f(host)),
        None => Err(WidgetError::new_code(
            WidgetErrorCode::NotAttached,
            "widget is not attached to a canvas".to_string(),
        )),
    })
}

pub fn widget_dispatch(event: WidgetEvent) -> Result<(), WidgetError> {
    let outcome = with_widget_host_mut(|host| {
        route_event(
            &mut host.widget,
            &mut host.surface,
            &mut host.render_loop,
            event,
        )
    })??;
    if outcome == EventOutcome::StartRenderLoop {
        start_render_loop()?;
    }
    Ok(())
}

/// Event listeners have nobody to return an error to.
fn dispatch_from_listener(event: WidgetEvent) {
    if let Err(err) = widget_dispatch(event) {
        console_error!("{:?} failed: {}", event, err);
    }
}

fn window() -> Result<web_sys::Window, WidgetError> {
    web_sys::window().ok_or_else(|| WidgetError::new("no global window".to_string()))
}

fn get_element_by_id<T: JsCast>(document: &web_sys::Document, id: &str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| {
            WidgetError::new_code(WidgetErrorCode::MissingElement, format!("no element #{}", id))
        })?
        .dyn_into::<T>()
        .map_err(|_| {
            WidgetError::new_code(
                WidgetErrorCode::MissingElement,
                format!("element #{} has the wrong type", id),
            )
        })
}

fn add_listener(
    target: &web_sys::EventTarget,
    event_name: &str,
    event: WidgetEvent,
) -> Result<(), WidgetError> {
    let closure = Closure::<dyn FnMut()>::new(move || dispatch_from_listener(event));
    target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(closure: &Closure<dyn FnMut()>) -> Result<i32, WidgetError> {
    Ok(window()?.request_animation_frame(closure.as_ref().unchecked_ref())?)
}

fn start_render_loop() -> Result<(), WidgetError> {
    info!("starting render loop");
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_tick = Rc::clone(&tick);
    *tick.borrow_mut() = Some(Closure::new(move || {
        dispatch_from_listener(WidgetEvent::Tick);
        if let Some(closure) = next_tick.borrow().as_ref() {
            if let Err(err) = request_animation_frame(closure) {
                console_error!("render loop stopped: {}", err);
            }
        }
    }));
    if let Some(closure) = tick.borrow().as_ref() {
        request_animation_frame(closure)?;
    }
    Ok(())
}

fn wire_controls(document: &web_sys::Document) -> Result<(), WidgetError> {
    for preset in AnimationPreset::ALL {
        match document.get_element_by_id(preset.name()) {
            Some(element) => add_listener(&element, "click", WidgetEvent::SelectPreset(preset))?,
            None => debug!("no control for animation {}", preset),
        }
    }
    Ok(())
}

/// The observer stays alive for as long as it has an observed target.
fn observe_container(document: &web_sys::Document, canvas: &web_sys::HtmlCanvasElement) {
    let target: web_sys::Element = match canvas.parent_element() {
        Some(parent) => parent,
        None => match document.body() {
            Some(body) => body.into(),
            None => return,
        },
    };
    let closure = Closure::<dyn FnMut()>::new(|| dispatch_from_listener(WidgetEvent::Resize));
    let observer = match web_sys::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(_) => {
            console_warn!("ResizeObserver unavailable, only window resizes are tracked");
            return;
        }
    };
    closure.forget();
    observer.observe(&target);
}

fn wire_sprite_image(image: &web_sys::HtmlImageElement) -> Result<(), WidgetError> {
    if image.complete() {
        let event = if image.natural_width() != 0 {
            WidgetEvent::AssetReady
        } else {
            WidgetEvent::AssetFailed
        };
        return widget_dispatch(event);
    }
    add_listener(image, "load", WidgetEvent::AssetReady)?;
    add_listener(image, "error", WidgetEvent::AssetFailed)?;
    Ok(())
}

pub fn attach_widget(config: WidgetConfig) -> Result<(), WidgetError> {
    config.validate()?;
    if WIDGET_HOST.with_borrow(|host| host.is_some()) {
        return Err(WidgetError::new_code(
            WidgetErrorCode::AlreadyAttached,
            "widget is already attached".to_string(),
        ));
    }
    log::set_max_level(config.log_level_filter()?);

    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::new("window has no document".to_string()))?;
    let canvas: web_sys::HtmlCanvasElement = get_element_by_id(&document, &config.canvas_id)?;
    let image: web_sys::HtmlImageElement = get_element_by_id(&document, &config.sprite_id)?;

    let surface = CanvasSurface::new(canvas.clone(), image.clone())?;
    debug!("sprite loaded at attach: {}", surface.is_sprite_loaded());
    let host = WidgetHost {
        widget: SpriteWidget::from_config(&config),
        surface,
        render_loop: RenderLoopState::default(),
    };
    WIDGET_HOST.with_borrow_mut(|slot| *slot = Some(host));

    wire_controls(&document)?;
    observe_container(&document, &canvas);
    add_listener(&window, "resize", WidgetEvent::Resize)?;
    wire_sprite_image(&image)
}
