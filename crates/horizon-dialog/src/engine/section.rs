//! Sections and elements built from enumerable data.

use horizon_dialog_core::logging::{PerfSpan, span_names, targets};
use horizon_dialog_core::{
    DataContextCode, DataValue, Element, Result, Root, RootId, Section, Tree, TypeTag,
};

use super::BindingEngine;
use crate::caption::capitalize;

impl BindingEngine {
    /// Populate a section of `root_id` from `data`.
    ///
    /// Non-enumerable data yields the supplied section untouched, or an empty
    /// one when none was supplied. Otherwise the section (supplied or fresh)
    /// is attached to `root_id` and receives one element per item, in order.
    #[tracing::instrument(skip(self, tree, section, data), target = "horizon_dialog::binding", level = "trace")]
    pub fn build_section(
        &self,
        tree: &Tree,
        root_id: RootId,
        section: Option<Section>,
        data: &DataValue,
        element_type: Option<TypeTag>,
        pop_on_selection: bool,
    ) -> Result<Section> {
        let _perf = PerfSpan::new(span_names::SECTION);
        let Some(items) = data.items() else {
            tracing::trace!(target: targets::BINDING, "data is not enumerable");
            return Ok(section.unwrap_or_default());
        };

        let root = tree.root(root_id)?;
        let mut section = section.unwrap_or_default();
        section.parent = Some(root_id);
        section.pop_on_selection = pop_on_selection;

        for item in &items {
            section.push(self.build_element_from_object(item, Some(root), element_type)?);
        }

        tracing::trace!(target: targets::BINDING, items = items.len(), "populated section");
        Ok(section)
    }

    /// Build one element for a data item.
    ///
    /// The caption is the item's text, or the capitalized name of the root's
    /// view type when that text is empty. With a root, the element inherits
    /// its view type, member accessor, editing style and theme.
    pub fn build_element_from_object(
        &self,
        item: &DataValue,
        root: Option<&Root>,
        element_type: Option<TypeTag>,
    ) -> Result<Element> {
        let mut caption = item.display_text();
        if caption.is_empty() {
            let fallback = root
                .and_then(|root| root.view_binding.view_type)
                .or_else(|| item.type_tag());
            caption = fallback.map(|tag| capitalize(tag.name())).unwrap_or_default();
        }

        let kind = element_type.unwrap_or(self.kinds.element);
        let mut element = self.registry.create_element(kind)?;
        element.caption = caption;
        element.data_context = item.clone();
        element.view_binding.data_context_code = DataContextCode::Object;

        if let Some(root) = root {
            element.view_binding.view_type = root.view_binding.view_type;
            element.view_binding.member = root.view_binding.member.clone();
            element.editing_style = root.editing_style;
            element.theme.merge_from(Some(&root.theme));
        }

        if let DataValue::View(view) = item {
            element.view_binding.view = Some(view.clone());
        }

        if element.view_binding.view_type.is_none() {
            element.view_binding.view_type = item.type_tag();
        }

        Ok(element)
    }
}
