//! Realized cell integration.
//!
//! Themes never draw anything themselves. They talk to the platform toolkit
//! through two small seams:
//!
//! - [`Label`]: a realized text label whose appearance a theme can read and
//!   adjust (background, font, colors, shadow)
//! - [`RealizedCell`]: a cell already created by the toolkit, from which a
//!   theme can pull its current attributes

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::{Accessory, Bitmap, Color, Font, Size};

/// Shared handle to a realized label.
pub type LabelHandle = Arc<Label>;

/// Shared handle to a realized cell.
pub type CellHandle = Arc<dyn RealizedCell>;

#[derive(Debug, Clone, Default)]
struct LabelState {
    background: Option<Color>,
    font: Option<Font>,
    text_color: Option<Color>,
    shadow_offset: Size,
    shadow_color: Option<Color>,
}

/// A realized text label owned by the toolkit.
///
/// All attributes use interior mutability so a label can be shared between
/// a cell and the themes that style it.
#[derive(Default)]
pub struct Label {
    state: RwLock<LabelState>,
}

impl Label {
    /// Create an unstyled label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a label and wrap it in a shared handle.
    pub fn shared() -> LabelHandle {
        Arc::new(Self::new())
    }

    pub fn background(&self) -> Option<Color> {
        self.state.read().background
    }

    pub fn set_background(&self, color: Color) {
        self.state.write().background = Some(color);
    }

    pub fn font(&self) -> Option<Font> {
        self.state.read().font.clone()
    }

    pub fn set_font(&self, font: Font) {
        self.state.write().font = Some(font);
    }

    pub fn text_color(&self) -> Option<Color> {
        self.state.read().text_color
    }

    pub fn set_text_color(&self, color: Color) {
        self.state.write().text_color = Some(color);
    }

    pub fn shadow_offset(&self) -> Size {
        self.state.read().shadow_offset
    }

    pub fn set_shadow_offset(&self, offset: Size) {
        self.state.write().shadow_offset = offset;
    }

    pub fn shadow_color(&self) -> Option<Color> {
        self.state.read().shadow_color
    }

    pub fn set_shadow_color(&self, color: Color) {
        self.state.write().shadow_color = Some(color);
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Label")
            .field("background", &state.background)
            .field("font", &state.font)
            .field("text_color", &state.text_color)
            .finish_non_exhaustive()
    }
}

/// A cell that the platform toolkit has already created.
///
/// Implementations typically wrap a native table cell. Only the attributes
/// a theme can adopt are exposed.
pub trait RealizedCell: Send + Sync {
    /// The accessory currently shown by the cell.
    fn accessory(&self) -> Accessory;

    /// The image currently shown in the cell's image slot, if any.
    fn image(&self) -> Option<Bitmap>;

    /// The cell's primary text label.
    fn text_label(&self) -> Option<LabelHandle>;

    /// The cell's detail text label.
    fn detail_text_label(&self) -> Option<LabelHandle>;

    /// Ask the toolkit to redraw the cell.
    fn set_needs_display(&self);
}

impl fmt::Debug for dyn RealizedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealizedCell")
            .field("accessory", &self.accessory())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_attributes_are_shared_through_handles() {
        let label = Label::shared();
        let other = Arc::clone(&label);

        other.set_text_color(Color::RED);
        other.set_shadow_offset(Size::new(0.0, 1.0));

        assert_eq!(label.text_color(), Some(Color::RED));
        assert_eq!(label.shadow_offset(), Size::new(0.0, 1.0));
        assert_eq!(label.background(), None);
    }
}
