//! Binding expressions and where to find them.
//!
//! An expression links one element to one member of its model. Writing
//! values back into the model (see [`BindingContext::fetch`]) asks a
//! [`BindingExpressionSource`] for each element's active expressions.
//!
//! [`BindingContext::fetch`]: crate::BindingContext::fetch

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use horizon_dialog_core::{Element, ElementId, NodeRef, Result, RootId, Tree};
use parking_lot::RwLock;

/// A live link between an element and a model member.
pub trait BindingExpression: Send + Sync {
    /// Commit the element's current value back into the model.
    fn update_source(&self);

    /// Refresh the element from the model.
    fn update_target(&self) {}

    /// Inactive expressions are skipped during write-back.
    fn is_active(&self) -> bool {
        true
    }
}

/// Shared handle to an expression.
pub type ExpressionHandle = Arc<dyn BindingExpression>;

/// Looks up the expressions attached to an element.
pub trait BindingExpressionSource {
    /// Active expressions for `element`, in registration order.
    fn expressions_for(&self, element: &Element) -> Vec<ExpressionHandle>;
}

/// Thread-safe expression store keyed by element.
#[derive(Default)]
pub struct ExpressionRegistry {
    expressions: RwLock<HashMap<ElementId, Vec<ExpressionHandle>>>,
}

impl ExpressionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an expression to an element.
    pub fn register(&self, element: ElementId, expression: ExpressionHandle) {
        self.expressions
            .write()
            .entry(element)
            .or_default()
            .push(expression);
    }

    /// Detach every expression of an element, returning how many there were.
    pub fn clear_element(&self, element: ElementId) -> usize {
        self.expressions
            .write()
            .remove(&element)
            .map_or(0, |removed| removed.len())
    }

    /// Detach the expressions of every element under `root`, nested roots
    /// included, returning how many were removed.
    ///
    /// Call this before removing the root from `tree`; the registry does not
    /// observe removals on its own.
    pub fn clear_root(&self, tree: &Tree, root: RootId) -> Result<usize> {
        let mut elements = Vec::new();
        tree.walk(root, |node, _| {
            if let NodeRef::Element(element) = node {
                elements.push(element.id);
            }
        })?;

        let mut expressions = self.expressions.write();
        let removed: usize = elements
            .iter()
            .filter_map(|id| expressions.remove(id))
            .map(|list| list.len())
            .sum();
        tracing::trace!(target: "horizon_dialog::binding", ?root, removed, "cleared root expressions");
        Ok(removed)
    }

    /// Total number of registered expressions.
    pub fn len(&self) -> usize {
        self.expressions.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BindingExpressionSource for ExpressionRegistry {
    fn expressions_for(&self, element: &Element) -> Vec<ExpressionHandle> {
        self.expressions
            .read()
            .get(&element.id)
            .map(|list| list.iter().filter(|e| e.is_active()).cloned().collect())
            .unwrap_or_default()
    }
}

impl fmt::Debug for ExpressionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expressions = self.expressions.read();
        f.debug_struct("ExpressionRegistry")
            .field("elements", &expressions.len())
            .field("expressions", &expressions.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
