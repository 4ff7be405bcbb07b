//! Exclusive image sources.

use crate::types::{Bitmap, Color, Url};

/// Source of a cell's icon: an inline bitmap or a URI reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellIcon {
    /// No icon.
    #[default]
    Empty,
    /// A decoded bitmap owned by the theme.
    Bitmap(Bitmap),
    /// An image to be loaded from a URI.
    Uri(Url),
}

impl CellIcon {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellIcon::Empty)
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        match self {
            CellIcon::Bitmap(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    pub fn uri(&self) -> Option<&Url> {
        match self {
            CellIcon::Uri(uri) => Some(uri),
            _ => None,
        }
    }
}

/// Source of a cell's background: a bitmap, a URI reference or a solid color.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellBackground {
    /// No background.
    #[default]
    Empty,
    /// A decoded bitmap owned by the theme.
    Bitmap(Bitmap),
    /// An image to be loaded from a URI.
    Uri(Url),
    /// A solid fill.
    Color(Color),
}

impl CellBackground {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellBackground::Empty)
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        match self {
            CellBackground::Bitmap(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    pub fn uri(&self) -> Option<&Url> {
        match self {
            CellBackground::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            CellBackground::Color(color) => Some(*color),
            _ => None,
        }
    }
}
