//! Construction strategy for an enumerable of objects, each with its own view.

use horizon_dialog_core::logging::targets;
use horizon_dialog_core::{Result, Root, RootId, Section, Tree};

use super::BindingEngine;

impl BindingEngine {
    /// Build the root for a `ViewEnumerable` binding.
    ///
    /// The new root takes the caller's caption, data context, binding and
    /// editing style, and holds exactly one section populated from the
    /// caller's data context. Elements default to the configured enumerable
    /// kind. The caller's theme is merged into the new root last, unless the
    /// engine is configured to merge it before the section is populated.
    ///
    /// When an element cannot be built, the partially built root is removed
    /// again and the tree is left as it was.
    #[tracing::instrument(skip_all, target = "horizon_dialog::binding", level = "trace", fields(caption = %root.caption))]
    pub fn build_view_enumerable_root(&self, tree: &mut Tree, root: &Root) -> Result<RootId> {
        let element_type = root
            .view_binding
            .element_type
            .unwrap_or(self.kinds.enumerable_element);
        let theme_first = self.config.binding.theme_before_sections;

        let mut new_root = Root {
            caption: root.caption.clone(),
            data_context: root.data_context.clone(),
            view_binding: root.view_binding.clone(),
            editing_style: root.editing_style,
            ..Root::default()
        };
        if theme_first {
            new_root.theme.merge_from(Some(&root.theme));
        }
        let id = tree.insert(new_root);

        let mut section = Section::new();
        section.view_binding = root.view_binding.clone();
        let populated = self.build_section(
            tree,
            id,
            Some(section),
            &root.data_context,
            Some(element_type),
            false,
        );
        let section = match populated {
            Ok(section) => section,
            Err(err) => {
                tree.remove(id)?;
                tracing::debug!(target: targets::BINDING, ?id, %err, "discarded partial view enumerable root");
                return Err(err);
            }
        };

        tree.add_section(id, section)?;
        let new_root = tree.root_mut(id)?;
        if !theme_first {
            new_root.theme.merge_from(Some(&root.theme));
        }

        tracing::debug!(
            target: targets::BINDING,
            ?id,
            items = new_root.element_count(),
            %element_type,
            "built view enumerable root"
        );
        Ok(id)
    }
}
