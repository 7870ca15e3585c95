use crate::constants::palette;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Network status an icon represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Connected,
    Disconnected,
    Error,
    Connecting,
    /// Renders without the center dot. Not used by the built-in icon sets.
    Disabled,
    /// Anything unrecognized; rendered like `Disconnected`
    #[serde(other)]
    Unknown,
}

/// Stroke color and number of concentric arcs for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub color: Rgba<u8>,
    pub arc_count: u32,
}

impl Status {
    pub fn style(self) -> StatusStyle {
        let (color, arc_count) = match self {
            Status::Connected => (palette::BLACK, 3),
            Status::Disconnected => (palette::GRAY, 1),
            Status::Error => (palette::RED, 3),
            Status::Connecting => (palette::BLUE, 2),
            Status::Disabled | Status::Unknown => (palette::GRAY, 1),
        };

        StatusStyle {
            color: Rgba(color),
            arc_count,
        }
    }

    pub fn draws_dot(self) -> bool {
        self != Status::Disabled
    }

    pub fn has_error_badge(self) -> bool {
        self == Status::Error
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Connected => "connected",
            Status::Disconnected => "disconnected",
            Status::Error => "error",
            Status::Connecting => "connecting",
            Status::Disabled => "disabled",
            Status::Unknown => "unknown",
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    /// Never fails: anything but an exact lowercase status name falls back to
    /// `Status::Unknown`, matching how config files are read
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "connected" => Status::Connected,
            "disconnected" => Status::Disconnected,
            "error" => Status::Error,
            "connecting" => Status::Connecting,
            "disabled" => Status::Disabled,
            _ => Status::Unknown,
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
