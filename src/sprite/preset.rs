use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::{WidgetError, WidgetErrorCode};

use super::animation::FrameRange;

/// Named animation ranges of the mandrake sheet. Each name doubles as the id
/// of the page control that selects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPreset {
    #[default]
    All,
    Grow,
    Wink,
    Float,
    Hide,
}

impl AnimationPreset {
    pub const ALL: [AnimationPreset; 5] = [
        AnimationPreset::All,
        AnimationPreset::Grow,
        AnimationPreset::Wink,
        AnimationPreset::Float,
        AnimationPreset::Hide,
    ];

    pub const fn range(&self) -> FrameRange {
        match self {
            AnimationPreset::All => FrameRange::new(0, 355),
            AnimationPreset::Grow => FrameRange::new(0, 75),
            AnimationPreset::Wink => FrameRange::new(76, 112),
            AnimationPreset::Float => FrameRange::new(113, 262),
            AnimationPreset::Hide => FrameRange::new(263, 355),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            AnimationPreset::All => "all",
            AnimationPreset::Grow => "grow",
            AnimationPreset::Wink => "wink",
            AnimationPreset::Float => "float",
            AnimationPreset::Hide => "hide",
        }
    }
}

impl fmt::Display for AnimationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationPreset {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        AnimationPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| {
                WidgetError::new_code(
                    WidgetErrorCode::UnknownAnimation,
                    format!("unknown animation {:?}", s),
                )
            })
    }
}
