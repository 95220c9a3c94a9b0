use log::debug;

use crate::{
    error::{WidgetError, WidgetErrorCode},
    geometry::Rect,
};

use super::sheet::SpriteSheet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCoord {
    pub column: u32,
    pub row: u32,
}

/// Inclusive range of frame indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRange {
    pub min: u32,
    pub max: u32,
}

impl FrameRange {
    pub const fn new(min: u32, max: u32) -> FrameRange {
        FrameRange { min, max }
    }
}

/// Playback position within a frame range. Playback is continuous: there is
/// no paused state, every tick moves exactly one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationState {
    frame_index: u32,
    min_frame: u32,
    max_frame: u32,
    columns: u32,
}

impl AnimationState {
    pub fn new(columns: u32, range: FrameRange) -> AnimationState {
        AnimationState {
            frame_index: range.min,
            min_frame: range.min,
            max_frame: range.max,
            columns: columns.max(1),
        }
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn range(&self) -> FrameRange {
        FrameRange::new(self.min_frame, self.max_frame)
    }

    pub fn advance(&mut self) {
        self.frame_index = if self.frame_index < self.max_frame {
            self.frame_index + 1
        } else {
            self.min_frame
        };
    }

    /// Switches to a new range and rewinds to its first frame. The range is
    /// trusted; see [`AnimationState::set_range_checked`] for host input.
    pub fn set_range(&mut self, min_frame: u32, max_frame: u32) {
        debug!("animation range {}..={}", min_frame, max_frame);
        self.min_frame = min_frame;
        self.max_frame = max_frame;
        self.frame_index = min_frame;
    }

    pub fn set_range_checked(
        &mut self,
        range: FrameRange,
        sheet: &SpriteSheet,
    ) -> Result<(), WidgetError> {
        if range.min > range.max {
            return Err(WidgetError::new_code(
                WidgetErrorCode::InvalidRange,
                format!("min frame {} is after max frame {}", range.min, range.max),
            ));
        }
        if range.max > sheet.last_frame() {
            return Err(WidgetError::new_code(
                WidgetErrorCode::InvalidRange,
                format!(
                    "max frame {} is past the last frame {} of the sheet",
                    range.max,
                    sheet.last_frame()
                ),
            ));
        }
        self.set_range(range.min, range.max);
        Ok(())
    }

    pub fn tile(&self) -> TileCoord {
        TileCoord {
            column: self.frame_index % self.columns,
            row: self.frame_index / self.columns,
        }
    }

    pub fn source_rect(&self, sheet: &SpriteSheet) -> Rect {
        sheet.tile_rect(self.tile())
    }
}
