//! Cell, list and bar chrome enumerations.

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge.
    Right,
    /// Justify text (stretch to fill width).
    Justified,
    /// Follow the script's natural direction.
    Natural,
}

/// Layout of the labels inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    /// Single left-aligned label with optional image.
    #[default]
    Default,
    /// Left label with a right-aligned detail label.
    Value1,
    /// Right-aligned caption with a left-aligned detail label.
    Value2,
    /// Label with a smaller detail label below.
    Subtitle,
}

/// Accessory shown on the trailing edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accessory {
    #[default]
    None,
    DisclosureIndicator,
    DetailDisclosureButton,
    Checkmark,
}

/// Separator drawn between list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorStyle {
    None,
    SingleLine,
    SingleLineEtched,
}

/// Overall list presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableViewStyle {
    Plain,
    Grouped,
}

/// Navigation bar appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarStyle {
    Default,
    Black,
    BlackTranslucent,
}
