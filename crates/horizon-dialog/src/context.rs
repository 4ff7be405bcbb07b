//! Binding contexts and model write-back.

use horizon_dialog_core::logging::{span_names, targets};
use horizon_dialog_core::{Result, RootId, Tree, ViewHandle};
use horizon_dialog_style::theme::Theme;

use crate::expression::BindingExpressionSource;
use crate::parser::ViewParser;

/// A parsed view and the root it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingContext {
    root: RootId,
}

impl BindingContext {
    /// Parse `view` into a root titled `title` and insert it into `tree`.
    pub fn new(
        parser: &dyn ViewParser,
        tree: &mut Tree,
        view: &ViewHandle,
        title: &str,
        theme: Option<&Theme>,
    ) -> Result<Self> {
        let root = parser.parse(view, title, theme)?;
        let root = tree.insert(root);
        tracing::debug!(target: targets::BINDING, ?root, view = %view.type_tag(), "created binding context");
        Ok(Self { root })
    }

    /// Wrap a root that is already in a tree.
    pub fn from_root(root: RootId) -> Self {
        Self { root }
    }

    /// The context's root.
    pub fn root(&self) -> RootId {
        self.root
    }

    /// Commit every active expression of the root's elements back into the
    /// model. Returns the number of expressions committed.
    pub fn fetch(&self, tree: &Tree, expressions: &dyn BindingExpressionSource) -> Result<usize> {
        fetch_root(tree, self.root, expressions)
    }
}

/// Commit every active expression of `root`'s elements back into the model.
///
/// Sections are visited in order, then elements, then each element's
/// expressions in registration order. Nested roots are not visited.
pub fn fetch_root(
    tree: &Tree,
    root: RootId,
    expressions: &dyn BindingExpressionSource,
) -> Result<usize> {
    let span = tracing::trace_span!(target: "horizon_dialog::binding", "fetch", operation = span_names::FETCH, ?root);
    let _guard = span.enter();

    let mut committed = 0;
    for element in tree.root(root)?.elements() {
        for expression in expressions.expressions_for(element) {
            expression.update_source();
            committed += 1;
        }
    }

    tracing::debug!(target: targets::BINDING, ?root, committed, "fetched bindings");
    Ok(committed)
}
