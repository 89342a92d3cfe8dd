use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Text direction of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl FromStr for TextDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ltr => f.write_str("ltr"),
            Self::Rtl => f.write_str("rtl"),
        }
    }
}

/// Axis along which a list's items are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl Layout {
    /// Left/Right (inline) keys move the active item.
    pub fn inline(&self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Up/Down (block) keys move the active item.
    pub fn block(&self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "both" => Ok(Self::Both),
            _ => Err(Error::InvalidLayout(s.to_string())),
        }
    }
}
