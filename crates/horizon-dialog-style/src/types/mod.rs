//! Value types used by themes.

mod bitmap;
mod cell;
mod color;
mod font;
mod geometry;

pub use bitmap::Bitmap;
pub use cell::{Accessory, BarStyle, CellStyle, SeparatorStyle, TableViewStyle, TextAlignment};
pub use color::Color;
pub use font::{Font, FontStyle, FontWeight};
pub use geometry::{Point, Rect, Size};

/// URI references for images loaded elsewhere.
pub use url::Url;
