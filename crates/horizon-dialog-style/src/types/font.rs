//! Font descriptors.
//!
//! Fonts here are plain descriptions; loading and shaping belong to the
//! platform toolkit.

/// Font weight, typically ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font style (normal, italic, or oblique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Normal upright style.
    #[default]
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// A font request: family, point size, weight and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// The platform's default system font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new("system-ui", size)
    }

    /// The platform's bold system font at the given size.
    pub fn bold_system(size: f32) -> Self {
        Self::system(size).with_weight(FontWeight::BOLD)
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_is_clamped() {
        assert_eq!(FontWeight::new(50).value(), 100);
        assert_eq!(FontWeight::new(1000).value(), 900);
    }

    #[test]
    fn test_bold_system_font() {
        let font = Font::bold_system(17.0);
        assert_eq!(font.family(), "system-ui");
        assert_eq!(font.weight(), FontWeight::BOLD);
        assert_eq!(font.size(), 17.0);
    }
}
