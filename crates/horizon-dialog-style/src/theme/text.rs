//! Typography groups.

use crate::cell::LabelHandle;
use crate::types::{Color, Font, Size, TextAlignment};

/// Typography of one text slot (primary, detail, header or footer).
///
/// A zero `shadow_offset` means no offset has been set.
#[derive(Debug, Clone, Default)]
pub struct TextStyle {
    /// The realized label this slot draws into, once known.
    pub label: Option<LabelHandle>,
    pub font: Option<Font>,
    pub alignment: TextAlignment,
    pub color: Option<Color>,
    pub shadow_offset: Size,
    pub shadow_color: Option<Color>,
}

impl TextStyle {
    /// Create a text style with the given alignment and nothing else set.
    pub fn aligned(alignment: TextAlignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    /// Make the realized label's background transparent, if there is one.
    pub(crate) fn clear_label_background(&self) {
        if let Some(label) = &self.label {
            label.set_background(Color::TRANSPARENT);
        }
    }
}
