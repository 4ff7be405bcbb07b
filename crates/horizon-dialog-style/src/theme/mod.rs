//! Theme descriptors.
//!
//! A [`Theme`] groups every visual attribute a list node can carry. Most
//! attributes are optional; the image groups are exclusive unions so a theme
//! can never hold two competing image sources at once.

mod descriptor;
mod sources;
mod text;

pub use descriptor::{DrawContentViewAction, Theme};
pub use sources::{CellBackground, CellIcon};
pub use text::TextStyle;
