//! Parent-to-child theme merge.

use crate::theme::{CellBackground, CellIcon, TextStyle, Theme};
use crate::types::{Accessory, CellStyle, TextAlignment};

const TARGET: &str = "horizon_dialog_style::theme";

/// Copy each listed `Option` field from `source` when `target` has none.
macro_rules! inherit_if_unset {
    ($target:expr, $source:expr; $($prop:ident),+ $(,)?) => {
        $(
            if $target.$prop.is_none() && $source.$prop.is_some() {
                $target.$prop = $source.$prop.clone();
            }
        )+
    };
}

impl TextStyle {
    /// Inherit a parent's typography.
    ///
    /// Alignment is always taken from the parent; the remaining attributes
    /// only fill gaps. The color is left to the caller.
    fn inherit_from(&mut self, parent: &TextStyle) {
        self.alignment = parent.alignment;

        inherit_if_unset!(self, parent; label, font, shadow_color);

        if self.shadow_offset.is_zero() && !parent.shadow_offset.is_zero() {
            self.shadow_offset = parent.shadow_offset;
        }
    }
}

impl Theme {
    /// Merge `parent` into this theme in place.
    ///
    /// A `None` parent leaves the theme untouched. Otherwise:
    ///
    /// - `name`, `accessory` and the four text alignments are always copied
    /// - `placeholder_alignment` is copied when the parent's is not `Right`
    /// - `bar_translucent` and `draw_when_highlighted` are copied when the
    ///   parent's is `true`
    /// - `cell_style` is copied when the parent's is not `Default` and this
    ///   theme's still is
    /// - every other attribute is copied only when the parent has a value
    ///   and this theme does not, except the realized cell, which stays with
    ///   the theme it was adopted into
    ///
    /// Inherited primary and detail text colors are applied through
    /// [`Theme::set_text_color`] and [`Theme::set_detail_text_color`], so the
    /// labels' backgrounds are cleared as with any other assignment.
    ///
    /// Icon and background members the parent holds go through the exclusive
    /// setters, so an inherited bitmap clears this theme's URI or color.
    pub fn merge_from(&mut self, parent: Option<&Theme>) {
        let Some(parent) = parent else {
            return;
        };

        tracing::trace!(
            target: TARGET,
            child = ?self.name,
            parent = ?parent.name,
            "merging theme"
        );

        self.name = parent.name.clone();
        self.accessory = parent.accessory;

        if parent.cell_style != CellStyle::Default && self.cell_style == CellStyle::Default {
            self.cell_style = parent.cell_style;
        }
        if parent.placeholder_alignment != TextAlignment::Right {
            self.placeholder_alignment = parent.placeholder_alignment;
        }
        if parent.bar_translucent {
            self.bar_translucent = true;
        }
        if parent.draw_when_highlighted {
            self.draw_when_highlighted = true;
        }

        inherit_if_unset!(
            self, parent;
            // Placeholder
            placeholder_color,
            // List chrome
            separator_color,
            separator_style,
            table_view_style,
            // Navigation bar
            bar_style,
            bar_tint_color,
            bar_image,
            // Cell
            draw_content_view,
        );

        self.text.inherit_from(&parent.text);
        self.detail_text.inherit_from(&parent.detail_text);
        self.header_text.inherit_from(&parent.header_text);
        self.footer_text.inherit_from(&parent.footer_text);

        if self.text.color.is_none()
            && let Some(color) = parent.text.color
        {
            self.set_text_color(color);
        }
        if self.detail_text.color.is_none()
            && let Some(color) = parent.detail_text.color
        {
            self.set_detail_text_color(color);
        }
        inherit_if_unset!(self.header_text, parent.header_text; color);
        inherit_if_unset!(self.footer_text, parent.footer_text; color);

        self.inherit_icon(parent.cell_icon());
        self.inherit_background(parent.cell_background());
    }

    /// Return a copy of this theme with `parent` merged in.
    pub fn merged(&self, parent: Option<&Theme>) -> Theme {
        let mut theme = self.clone();
        theme.merge_from(parent);
        theme
    }

    /// Create a default theme with `parent` merged in.
    pub fn derive(parent: Option<&Theme>) -> Theme {
        let mut theme = Theme::default();
        theme.merge_from(parent);
        theme
    }

    fn inherit_icon(&mut self, parent: &CellIcon) {
        match parent {
            CellIcon::Bitmap(bitmap) if self.cell_image_icon().is_none() => {
                self.set_cell_image_icon(bitmap.clone());
            }
            CellIcon::Uri(uri) if self.cell_image_icon_uri().is_none() => {
                self.set_cell_image_icon_uri(uri.clone());
            }
            _ => {}
        }
    }

    fn inherit_background(&mut self, parent: &CellBackground) {
        match parent {
            CellBackground::Bitmap(bitmap) if self.cell_background_image().is_none() => {
                self.set_cell_background_image(bitmap.clone());
            }
            CellBackground::Uri(uri) if self.cell_background_uri().is_none() => {
                self.set_cell_background_uri(uri.clone());
            }
            CellBackground::Color(color) if self.cell_background_color().is_none() => {
                self.set_cell_background_color(*color);
            }
            _ => {}
        }
    }
}

/// Whether the accessory slot still holds its default.
#[inline]
pub(crate) fn accessory_unset(accessory: Accessory) -> bool {
    accessory == Accessory::None
}
