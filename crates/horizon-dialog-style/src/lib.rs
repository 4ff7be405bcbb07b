//! Cascading theme descriptors for Horizon Dialog.
//!
//! This crate provides the style half of the dialog layer:
//!
//! - **Types**: Colors, sizes, fonts, bitmaps and the cell/list/bar enums
//! - **Theme**: A descriptor with independently settable attribute groups
//! - **Resolution**: Field-by-field merge of a child theme with its parent
//! - **Cell adoption**: Pulling attributes from an already realized cell
//!
//! # Example
//!
//! ```
//! use horizon_dialog_style::prelude::*;
//!
//! let mut parent = Theme::default();
//! parent.name = Some("settings".into());
//! parent.set_cell_background_color(Color::LIGHT_GRAY);
//!
//! let child = Theme::derive(Some(&parent));
//! assert_eq!(child.name.as_deref(), Some("settings"));
//! assert_eq!(child.cell_background().color(), Some(Color::LIGHT_GRAY));
//! ```

pub mod cell;
pub mod resolve;
pub mod theme;
pub mod types;

mod error;

pub use error::{Result, StyleError};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::cell::{CellHandle, Label, LabelHandle, RealizedCell};
    pub use crate::theme::{CellBackground, CellIcon, DrawContentViewAction, TextStyle, Theme};
    pub use crate::types::{
        Accessory, BarStyle, Bitmap, CellStyle, Color, Font, FontStyle, FontWeight, Rect,
        SeparatorStyle, Size, TableViewStyle, TextAlignment, Url,
    };
}
