//! Adopting attributes from a realized cell.

use crate::cell::{CellHandle, Label, LabelHandle};
use crate::theme::{TextStyle, Theme};
use crate::types::Color;

use super::merge::accessory_unset;

impl TextStyle {
    /// Take the cell's label, or fill gaps from it when a label is already set.
    ///
    /// Returns the label's text color when this style has none; the owning
    /// theme applies it.
    fn adopt_label(&mut self, label: Option<LabelHandle>) -> Option<Color> {
        let label = label?;

        if self.label.is_none() {
            self.label = Some(label);
            return None;
        }

        self.fill_from_label(&label)
    }

    fn fill_from_label(&mut self, label: &Label) -> Option<Color> {
        if self.font.is_none() {
            self.font = label.font();
        }
        if self.shadow_offset.is_zero() {
            self.shadow_offset = label.shadow_offset();
        }
        if self.shadow_color.is_none() {
            self.shadow_color = label.shadow_color();
        }
        if self.color.is_none() {
            label.text_color()
        } else {
            None
        }
    }
}

impl Theme {
    /// Initialize unset attributes from a cell the toolkit already created.
    ///
    /// Only attributes this theme does not own yet are taken. The cell is
    /// always asked to redraw afterwards.
    pub fn adopt_from_cell(&mut self, cell: CellHandle) {
        tracing::trace!(target: "horizon_dialog_style::theme", theme = ?self.name, "adopting realized cell");

        if accessory_unset(self.accessory) {
            self.accessory = cell.accessory();
        }

        if self.cell_icon().is_empty()
            && let Some(image) = cell.image()
        {
            self.set_cell_image_icon(image);
        }

        if let Some(color) = self.text.adopt_label(cell.text_label()) {
            self.set_text_color(color);
        }
        if let Some(color) = self.detail_text.adopt_label(cell.detail_text_label()) {
            self.set_detail_text_color(color);
        }

        cell.set_needs_display();
        self.cell = Some(cell);
    }
}
