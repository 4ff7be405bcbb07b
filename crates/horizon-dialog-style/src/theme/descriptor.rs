//! The theme descriptor.

use std::fmt;
use std::sync::Arc;

use crate::cell::{CellHandle, RealizedCell};
use crate::error::{Result, StyleError};
use crate::types::{
    Accessory, BarStyle, Bitmap, CellStyle, Color, Rect, SeparatorStyle, TableViewStyle,
    TextAlignment, Url,
};

use super::sources::{CellBackground, CellIcon};
use super::text::TextStyle;

const TARGET: &str = "horizon_dialog_style::theme";

/// Custom paint callback run after a cell's content view is drawn.
pub type DrawContentViewAction = Arc<dyn Fn(Rect, &dyn RealizedCell) + Send + Sync>;

/// Visual attributes of a list node.
///
/// Plain attributes are public fields. The icon and background groups are
/// exclusive and only reachable through setters: assigning one source clears
/// the others and releases any bitmap the theme held. Text and detail-text
/// colors also have setters, which additionally make the realized labels'
/// backgrounds transparent.
///
/// # Example
///
/// ```
/// use horizon_dialog_style::prelude::*;
///
/// let mut theme = Theme::default();
/// theme.set_cell_background_color(Color::WHITE);
/// theme.set_cell_background_image(Bitmap::solid(1, 1, Color::BLACK));
///
/// // The color was replaced by the bitmap.
/// assert!(theme.cell_background().color().is_none());
/// assert!(theme.cell_background().bitmap().is_some());
/// ```
#[derive(Clone)]
pub struct Theme {
    /// Identity of the theme; always inherited.
    pub name: Option<String>,
    pub draw_when_highlighted: bool,

    // === Placeholder ===
    pub placeholder_color: Option<Color>,
    pub placeholder_alignment: TextAlignment,

    // === List chrome ===
    pub separator_color: Option<Color>,
    pub separator_style: Option<SeparatorStyle>,
    pub table_view_style: Option<TableViewStyle>,

    // === Navigation bar chrome ===
    pub bar_style: Option<BarStyle>,
    pub bar_tint_color: Option<Color>,
    pub bar_image: Option<String>,
    pub bar_translucent: bool,

    // === Cell chrome ===
    pub cell_style: CellStyle,
    pub accessory: Accessory,
    pub(crate) cell: Option<CellHandle>,
    icon: CellIcon,
    background: CellBackground,

    // === Typography ===
    pub text: TextStyle,
    pub detail_text: TextStyle,
    pub header_text: TextStyle,
    pub footer_text: TextStyle,

    /// Custom paint callback.
    pub draw_content_view: Option<DrawContentViewAction>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: None,
            draw_when_highlighted: false,
            placeholder_color: None,
            placeholder_alignment: TextAlignment::Right,
            separator_color: None,
            separator_style: None,
            table_view_style: None,
            bar_style: None,
            bar_tint_color: None,
            bar_image: None,
            bar_translucent: false,
            cell_style: CellStyle::Default,
            accessory: Accessory::None,
            cell: None,
            icon: CellIcon::Empty,
            background: CellBackground::Empty,
            text: TextStyle::aligned(TextAlignment::Left),
            detail_text: TextStyle::aligned(TextAlignment::Right),
            header_text: TextStyle::default(),
            footer_text: TextStyle::default(),
            draw_content_view: None,
        }
    }
}

impl Theme {
    /// Create a theme with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named theme with default attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The realized cell this theme was initialized from, if any.
    pub fn cell(&self) -> Option<&CellHandle> {
        self.cell.as_ref()
    }

    // =========================================================================
    // Icon group
    // =========================================================================

    pub fn cell_icon(&self) -> &CellIcon {
        &self.icon
    }

    pub fn cell_image_icon(&self) -> Option<&Bitmap> {
        self.icon.bitmap()
    }

    pub fn cell_image_icon_uri(&self) -> Option<&Url> {
        self.icon.uri()
    }

    /// Use an inline bitmap as the icon, dropping any URI reference.
    pub fn set_cell_image_icon(&mut self, bitmap: Bitmap) {
        self.replace_icon(CellIcon::Bitmap(bitmap));
    }

    /// Use a URI reference as the icon, releasing any inline bitmap.
    pub fn set_cell_image_icon_uri(&mut self, uri: Url) {
        self.replace_icon(CellIcon::Uri(uri));
    }

    /// Parse `uri` and use it as the icon.
    pub fn set_cell_image_icon_uri_str(&mut self, uri: &str) -> Result<()> {
        let parsed = Url::parse(uri).map_err(|e| StyleError::invalid_uri(uri, e))?;
        self.set_cell_image_icon_uri(parsed);
        Ok(())
    }

    /// Remove the icon, releasing any inline bitmap.
    pub fn clear_cell_icon(&mut self) {
        self.replace_icon(CellIcon::Empty);
    }

    fn replace_icon(&mut self, icon: CellIcon) {
        let previous = std::mem::replace(&mut self.icon, icon);
        if let CellIcon::Bitmap(bitmap) = previous {
            tracing::trace!(target: TARGET, owners = bitmap.owner_count(), "releasing cell icon bitmap");
        }
    }

    // =========================================================================
    // Background group
    // =========================================================================

    pub fn cell_background(&self) -> &CellBackground {
        &self.background
    }

    pub fn cell_background_image(&self) -> Option<&Bitmap> {
        self.background.bitmap()
    }

    pub fn cell_background_uri(&self) -> Option<&Url> {
        self.background.uri()
    }

    pub fn cell_background_color(&self) -> Option<Color> {
        self.background.color()
    }

    /// Use an inline bitmap as the background, dropping URI and color.
    pub fn set_cell_background_image(&mut self, bitmap: Bitmap) {
        self.replace_background(CellBackground::Bitmap(bitmap));
    }

    /// Use a URI reference as the background, releasing any inline bitmap.
    pub fn set_cell_background_uri(&mut self, uri: Url) {
        self.replace_background(CellBackground::Uri(uri));
    }

    /// Parse `uri` and use it as the background.
    pub fn set_cell_background_uri_str(&mut self, uri: &str) -> Result<()> {
        let parsed = Url::parse(uri).map_err(|e| StyleError::invalid_uri(uri, e))?;
        self.set_cell_background_uri(parsed);
        Ok(())
    }

    /// Use a solid color as the background, releasing any inline bitmap.
    ///
    /// The realized text labels are made transparent so the color shows
    /// through them.
    pub fn set_cell_background_color(&mut self, color: Color) {
        self.replace_background(CellBackground::Color(color));
        self.clear_background();
    }

    /// Remove the background, releasing any inline bitmap.
    pub fn clear_cell_background(&mut self) {
        self.replace_background(CellBackground::Empty);
    }

    fn replace_background(&mut self, background: CellBackground) {
        let previous = std::mem::replace(&mut self.background, background);
        if let CellBackground::Bitmap(bitmap) = previous {
            tracing::trace!(target: TARGET, owners = bitmap.owner_count(), "releasing cell background bitmap");
        }
    }

    // =========================================================================
    // Text colors
    // =========================================================================

    /// Set the primary text color and clear the labels' backgrounds.
    pub fn set_text_color(&mut self, color: Color) {
        self.text.color = Some(color);
        self.clear_background();
    }

    /// Set the detail text color and clear the labels' backgrounds.
    pub fn set_detail_text_color(&mut self, color: Color) {
        self.detail_text.color = Some(color);
        self.clear_background();
    }

    /// Make the primary and detail labels' backgrounds transparent.
    ///
    /// Labels that are not set are left alone. Calling this repeatedly has
    /// the same effect as calling it once.
    pub fn clear_background(&self) {
        self.text.clear_label_background();
        self.detail_text.clear_label_background();
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("cell_style", &self.cell_style)
            .field("accessory", &self.accessory)
            .field("icon", &self.icon)
            .field("background", &self.background)
            .field("text", &self.text)
            .field("detail_text", &self.detail_text)
            .field("header_text", &self.header_text)
            .field("footer_text", &self.footer_text)
            .field("has_cell", &self.cell.is_some())
            .field("has_draw_content_view", &self.draw_content_view.is_some())
            .finish_non_exhaustive()
    }
}
