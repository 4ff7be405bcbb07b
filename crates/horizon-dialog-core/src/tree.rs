//! Arena storage for presentation trees.
//!
//! Every [`Root`] lives in a [`Tree`] and is addressed by a [`RootId`].
//! Sections point back at their root by key and elements reference nested
//! roots by key, so the structure never holds reference cycles.
//!
//! Removing a root removes every root nested beneath it, the same cascade an
//! object registry performs for child objects.

use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::error::{BindingError, Result};
use crate::logging::targets;
use crate::node::{Element, NodeRef, Root, Section};

new_key_type! {
    /// A stable identifier for a root in a [`Tree`].
    ///
    /// Keys stay valid while the tree changes and become invalid once the
    /// root is removed.
    pub struct RootId;
}

impl RootId {
    /// Convert the key to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Arena of roots.
#[derive(Debug, Default)]
pub struct Tree {
    roots: SlotMap<RootId, Root>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            roots: SlotMap::with_key(),
        }
    }

    /// Insert a root and return its key.
    ///
    /// Every section of the root is re-parented to the new key.
    pub fn insert(&mut self, root: Root) -> RootId {
        let id = self.roots.insert(root);
        if let Some(root) = self.roots.get_mut(id) {
            for section in &mut root.sections {
                section.parent = Some(id);
            }
        }
        tracing::trace!(target: targets::TREE, ?id, "inserted root");
        id
    }

    pub fn get(&self, id: RootId) -> Option<&Root> {
        self.roots.get(id)
    }

    pub fn get_mut(&mut self, id: RootId) -> Option<&mut Root> {
        self.roots.get_mut(id)
    }

    /// Get a root, failing with [`BindingError::UnknownRoot`].
    pub fn root(&self, id: RootId) -> Result<&Root> {
        self.roots.get(id).ok_or(BindingError::UnknownRoot(id))
    }

    /// Get a root mutably, failing with [`BindingError::UnknownRoot`].
    pub fn root_mut(&mut self, id: RootId) -> Result<&mut Root> {
        self.roots.get_mut(id).ok_or(BindingError::UnknownRoot(id))
    }

    pub fn contains(&self, id: RootId) -> bool {
        self.roots.contains_key(id)
    }

    /// Number of roots, nested ones included.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Roots not hosted by any element.
    pub fn top_level(&self) -> Vec<RootId> {
        let hosted: Vec<RootId> = self
            .roots
            .values()
            .flat_map(Root::elements)
            .filter_map(|element| element.sub_root)
            .collect();
        self.roots
            .keys()
            .filter(|id| !hosted.contains(id))
            .collect()
    }

    /// Attach a section to a root in the tree and return its index.
    ///
    /// The section's parent becomes `id`, replacing any earlier parent.
    pub fn add_section(&mut self, id: RootId, mut section: Section) -> Result<usize> {
        let root = self.root_mut(id)?;
        section.parent = Some(id);
        root.sections.push(section);
        tracing::trace!(target: targets::TREE, ?id, sections = root.sections.len(), "attached section");
        Ok(root.sections.len() - 1)
    }

    /// Get an element by coordinates.
    pub fn element(&self, id: RootId, section: usize, index: usize) -> Result<&Element> {
        self.root(id)?
            .element(section, index)
            .ok_or(BindingError::ElementOutOfRange { section, index })
    }

    /// Get an element mutably by coordinates.
    pub fn element_mut(&mut self, id: RootId, section: usize, index: usize) -> Result<&mut Element> {
        self.root_mut(id)?
            .element_mut(section, index)
            .ok_or(BindingError::ElementOutOfRange { section, index })
    }

    /// Remove a root and every root nested beneath it.
    #[tracing::instrument(skip(self), target = "horizon_dialog_core::tree", level = "trace")]
    pub fn remove(&mut self, id: RootId) -> Result<Root> {
        let nested = self.collect_nested(id)?;
        tracing::trace!(target: targets::TREE, ?id, nested_count = nested.len(), "removing root");

        for nested_id in nested {
            self.roots.remove(nested_id);
        }
        self.roots.remove(id).ok_or(BindingError::UnknownRoot(id))
    }

    /// Collect nested root keys depth first, innermost before outer.
    fn collect_nested(&self, id: RootId) -> Result<Vec<RootId>> {
        let mut result = Vec::new();
        self.collect_nested_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_nested_recursive(&self, id: RootId, result: &mut Vec<RootId>) -> Result<()> {
        let root = self.root(id)?;
        for sub_root in root.elements().filter_map(|element| element.sub_root) {
            if sub_root == id || result.contains(&sub_root) || !self.contains(sub_root) {
                continue;
            }
            self.collect_nested_recursive(sub_root, result)?;
            result.push(sub_root);
        }
        Ok(())
    }

    /// Visit every node beneath `id` in pre-order, descending into nested
    /// roots. The callback receives the node and its depth.
    pub fn walk<F>(&self, id: RootId, mut visit: F) -> Result<()>
    where
        F: FnMut(NodeRef<'_>, usize),
    {
        let mut seen = Vec::new();
        self.walk_recursive(id, 0, &mut seen, &mut visit)
    }

    fn walk_recursive<F>(
        &self,
        id: RootId,
        depth: usize,
        seen: &mut Vec<RootId>,
        visit: &mut F,
    ) -> Result<()>
    where
        F: FnMut(NodeRef<'_>, usize),
    {
        let root = self.root(id)?;
        seen.push(id);
        visit(NodeRef::Root(root), depth);
        for section in &root.sections {
            visit(NodeRef::Section(section), depth + 1);
            for element in section {
                visit(NodeRef::Element(element), depth + 2);
                if let Some(sub_root) = element.sub_root
                    && !seen.contains(&sub_root)
                    && self.contains(sub_root)
                {
                    self.walk_recursive(sub_root, depth + 3, seen, visit)?;
                }
            }
        }
        Ok(())
    }
}

/// A tree shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedTree {
    inner: Arc<RwLock<Tree>>,
}

impl SharedTree {
    /// Wrap a tree.
    pub fn new(tree: Tree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Run `f` with shared access.
    pub fn with_read<R>(&self, f: impl FnOnce(&Tree) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut Tree) -> R) -> R {
        f(&mut self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::TypeTag;
    use crate::node::{RootElement, Section};

    fn root_with_children(caption: &str, children: &[Option<RootId>]) -> Root {
        let mut section = Section::new();
        for (i, sub_root) in children.iter().enumerate() {
            let mut element =
                Element::new(TypeTag::of::<RootElement>()).with_caption(format!("{caption}.{i}"));
            element.sub_root = *sub_root;
            section.push(element);
        }
        let mut root = Root::new(caption);
        root.add_section(section);
        root
    }

    #[test]
    fn test_insert_reparents_sections() {
        let mut tree = Tree::new();
        let mut root = Root::new("r");
        root.add_section(Section::new());
        root.add_section(Section::new());

        let id = tree.insert(root);

        let root = tree.root(id).unwrap();
        assert!(root.sections.iter().all(|s| s.parent == Some(id)));
    }

    #[test]
    fn test_add_section_moves_parent() {
        let mut tree = Tree::new();
        let first = tree.insert(Root::new("first"));
        let second = tree.insert(Root::new("second"));

        let index = tree.add_section(first, Section::with_caption("moving")).unwrap();
        assert_eq!(index, 0);
        assert_eq!(tree.root(first).unwrap().sections[0].parent, Some(first));

        let section = tree.root_mut(first).unwrap().sections.remove(0);
        tree.add_section(second, Section::new()).unwrap();
        let index = tree.add_section(second, section).unwrap();

        let moved = &tree.root(second).unwrap().sections[index];
        assert_eq!(index, 1);
        assert_eq!(moved.caption, "moving");
        assert_eq!(moved.parent, Some(second));
        assert!(tree.root(first).unwrap().sections.is_empty());
    }

    #[test]
    fn test_add_section_to_unknown_root() {
        let mut tree = Tree::new();
        let id = tree.insert(Root::new("gone"));
        tree.remove(id).unwrap();

        assert_eq!(
            tree.add_section(id, Section::new()).unwrap_err(),
            BindingError::UnknownRoot(id)
        );
    }

    #[test]
    fn test_remove_cascades_to_nested_roots() {
        let mut tree = Tree::new();
        let leaf = tree.insert(root_with_children("leaf", &[]));
        let middle = tree.insert(root_with_children("middle", &[Some(leaf)]));
        let top = tree.insert(root_with_children("top", &[Some(middle), None]));
        let other = tree.insert(root_with_children("other", &[]));

        assert_eq!(tree.top_level().len(), 2);

        let removed = tree.remove(top).unwrap();
        assert_eq!(removed.caption, "top");
        assert!(!tree.contains(middle));
        assert!(!tree.contains(leaf));
        assert!(tree.contains(other));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_unknown_root() {
        let mut tree = Tree::new();
        let id = tree.insert(Root::new("gone"));
        tree.remove(id).unwrap();

        assert_eq!(tree.root(id).unwrap_err(), BindingError::UnknownRoot(id));
        assert!(tree.remove(id).is_err());
    }

    #[test]
    fn test_element_coordinates() {
        let mut tree = Tree::new();
        let id = tree.insert(root_with_children("r", &[None, None]));

        assert_eq!(tree.element(id, 0, 1).unwrap().caption, "r.1");
        assert_eq!(
            tree.element(id, 0, 5).unwrap_err(),
            BindingError::ElementOutOfRange { section: 0, index: 5 }
        );
    }

    #[test]
    fn test_walk_visits_nested_roots() {
        let mut tree = Tree::new();
        let inner = tree.insert(root_with_children("inner", &[None]));
        let outer = tree.insert(root_with_children("outer", &[Some(inner)]));

        let mut visited = Vec::new();
        tree.walk(outer, |node, depth| visited.push((node.kind_name(), depth)))
            .unwrap();

        assert_eq!(
            visited,
            [
                ("Root", 0),
                ("Section", 1),
                ("RootElement", 2),
                ("Root", 3),
                ("Section", 4),
                ("RootElement", 5),
            ]
        );
    }

    #[test]
    fn test_shared_tree_access() {
        let shared = SharedTree::default();
        let id = shared.with_write(|tree| tree.insert(Root::new("shared")));
        let caption = shared.with_read(|tree| tree.root(id).map(|r| r.caption.clone()));
        assert_eq!(caption.unwrap(), "shared");
    }
}
