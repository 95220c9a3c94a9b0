pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod rendering;
pub mod sprite;
pub mod utils;
pub mod widget;

use config::WidgetConfig;
use dom::{widget_dispatch, with_widget_host_mut};
use events::WidgetEvent;
use sprite::preset::AnimationPreset;
use utils::{init_logging, set_panic_hook};
use wasm_bindgen::prelude::*;

/// Attaches the widget to the page. `config_json` is an optional JSON object
/// with the keys of [`WidgetConfig`]; omitted keys use the defaults.
#[wasm_bindgen]
pub fn widget_attach(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => WidgetConfig::from_json(&json)?,
        None => WidgetConfig::default(),
    };
    dom::attach_widget(config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn widget_select_animation(name: &str) -> Result<(), JsValue> {
    let preset: AnimationPreset = name.parse()?;
    widget_dispatch(WidgetEvent::SelectPreset(preset))?;
    Ok(())
}

#[wasm_bindgen]
pub fn widget_set_range(min_frame: u32, max_frame: u32) -> Result<(), JsValue> {
    widget_dispatch(WidgetEvent::SelectRange(min_frame, max_frame))?;
    Ok(())
}

#[wasm_bindgen]
pub fn widget_resize() -> Result<(), JsValue> {
    widget_dispatch(WidgetEvent::Resize)?;
    Ok(())
}

#[wasm_bindgen]
pub fn widget_frame_index() -> Result<u32, JsValue> {
    Ok(with_widget_host_mut(|host| host.widget.animation.frame_index())?)
}

#[wasm_bindgen(start)]
pub fn main() {
    set_panic_hook();
    init_logging();
}
