use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::{
    error::{WidgetError, WidgetErrorCode},
    layout::LayoutParams,
    sprite::{preset::AnimationPreset, sheet::SpriteSheet},
};

/// Settings accepted by `widget_attach` as a JSON object. Every key is
/// optional; missing keys keep the mandrake page defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub canvas_id: String,
    pub sprite_id: String,
    pub sheet: SpriteSheet,
    pub layout: LayoutParams,
    pub initial_animation: AnimationPreset,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            canvas_id: "canvas1".to_string(),
            sprite_id: "mandrake".to_string(),
            sheet: SpriteSheet::default(),
            layout: LayoutParams::default(),
            initial_animation: AnimationPreset::All,
            log_level: "warn".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<WidgetConfig, WidgetError> {
        let config: WidgetConfig = serde_json::from_str(json).map_err(|err| {
            WidgetError::new_code(
                WidgetErrorCode::InvalidConfig,
                format!("invalid widget config: {}", err),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WidgetError> {
        self.sheet.validate()?;
        self.layout.validate()?;
        let range = self.initial_animation.range();
        if range.max > self.sheet.last_frame() {
            return Err(WidgetError::new_code(
                WidgetErrorCode::InvalidConfig,
                format!(
                    "initial animation {} needs frame {}, the sheet ends at {}",
                    self.initial_animation,
                    range.max,
                    self.sheet.last_frame()
                ),
            ));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, WidgetError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            WidgetError::new_code(
                WidgetErrorCode::InvalidConfig,
                format!("unknown log level {:?}", self.log_level),
            )
        })
    }
}
