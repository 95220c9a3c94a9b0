use serde::Deserialize;

use crate::{
    error::{WidgetError, WidgetErrorCode},
    geometry::Rect,
};

use super::animation::TileCoord;

/// Fixed tile grid of the sprite sheet image. The image itself is owned by the
/// drawing surface; this only describes how to address it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpriteSheet {
    pub tile_width: u32,
    pub tile_height: u32,
    pub columns: u32,
    /// Number of frames actually present on the sheet.
    pub frame_count: u32,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        SpriteSheet {
            tile_width: 256,
            tile_height: 256,
            columns: 18,
            frame_count: 356,
        }
    }
}

impl SpriteSheet {
    pub fn last_frame(&self) -> u32 {
        self.frame_count.saturating_sub(1)
    }

    pub fn tile_rect(&self, tile: TileCoord) -> Rect {
        Rect::from_size(
            tile.column as f64 * self.tile_width as f64,
            tile.row as f64 * self.tile_height as f64,
            self.tile_width as f64,
            self.tile_height as f64,
        )
    }

    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(WidgetError::new_code(
                WidgetErrorCode::InvalidConfig,
                format!("sheet tiles must be non-empty, got {}x{}", self.tile_width, self.tile_height),
            ));
        }
        if self.columns == 0 {
            return Err(WidgetError::new_code(
                WidgetErrorCode::InvalidConfig,
                "sheet must have at least one column".to_string(),
            ));
        }
        if self.frame_count == 0 {
            return Err(WidgetError::new_code(
                WidgetErrorCode::InvalidConfig,
                "sheet must have at least one frame".to_string(),
            ));
        }
        Ok(())
    }
}
