//! Construction strategy for a single object rendered through its view.

use horizon_dialog_core::logging::targets;
use horizon_dialog_core::{BindingError, DataValue, Result, Root, RootId, Tree, ViewHandle};

use super::BindingEngine;

impl BindingEngine {
    /// Build the root for an `Object` binding.
    ///
    /// The view is the one already on the binding, replaced by the bound
    /// member's value when that value is a view. Without a view on the
    /// binding, a fresh view of the declared type is created. A view that
    /// holds a data context receives the root's data context, after which the
    /// model and then the view are initialized. The view is then parsed into
    /// the new root.
    #[tracing::instrument(skip_all, target = "horizon_dialog::binding", level = "trace", fields(caption = %root.caption))]
    pub fn build_object_root(&self, tree: &mut Tree, root: &Root) -> Result<RootId> {
        let view = self.resolve_view(root)?;

        if let Some(holder) = view.data_context_holder() {
            holder.set_data_context(root.data_context.clone());

            if let Some(hook) = root.data_context.initializable() {
                hook.initialize();
            }
            if let Some(hook) = view.initializable() {
                hook.initialize();
            }
        }

        let mut new_root = self.parser.parse(&view, &root.caption, Some(&root.theme))?;
        new_root.view_binding = root.view_binding.clone();
        new_root.view_binding.view = Some(view);

        let id = tree.insert(new_root);
        tracing::debug!(target: targets::BINDING, ?id, "built object root");
        Ok(id)
    }

    fn resolve_view(&self, root: &Root) -> Result<ViewHandle> {
        let binding = &root.view_binding;

        if let Some(view) = &binding.view {
            if let Some(member) = &binding.member
                && binding.data_context.is_some()
                && let DataValue::View(member_view) = member.get(&binding.data_context)
            {
                tracing::trace!(target: targets::BINDING, member = member.name(), "using view from bound member");
                return Ok(member_view);
            }
            return Ok(view.clone());
        }

        match binding.view_type {
            Some(view_type) => self.registry.create_view(view_type),
            None => Err(BindingError::invalid_input(format!(
                "root '{}' has neither a view nor a view type",
                root.caption
            ))),
        }
    }
}
