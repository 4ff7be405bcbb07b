//! Presentation nodes: roots, sections and elements.
//!
//! A [`Root`] owns an ordered list of [`Section`]s, each owning an ordered
//! list of [`Element`]s. Elements can host a nested root, stored elsewhere in
//! the same [`Tree`](crate::tree::Tree) and referenced by key.

use std::sync::atomic::{AtomicU64, Ordering};

use horizon_dialog_style::theme::Theme;

use crate::binding::ViewBinding;
use crate::meta::TypeTag;
use crate::tree::RootId;
use crate::value::DataValue;

// =============================================================================
// Built-in element kinds
// =============================================================================

/// A single-choice row. Default kind for elements built from objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioElement;

/// A row that opens a nested root. Default kind for view enumerables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootElement;

/// A plain text row.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringElement;

/// Counter for generating unique element IDs.
static ELEMENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(ELEMENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// Row editing affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditingStyle {
    #[default]
    None,
    Delete,
    Insert,
}

// =============================================================================
// Element
// =============================================================================

/// A single row in a section.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    /// The element kind this row was created as.
    pub kind: TypeTag,
    pub caption: String,
    pub data_context: DataValue,
    pub view_binding: ViewBinding,
    pub editing_style: EditingStyle,
    pub theme: Theme,
    /// Nested root hosted by this element, once built.
    pub sub_root: Option<RootId>,
}

impl Element {
    /// Create an element of the given kind with a fresh ID.
    pub fn new(kind: TypeTag) -> Self {
        Self {
            id: ElementId::next(),
            kind,
            caption: String::new(),
            data_context: DataValue::None,
            view_binding: ViewBinding::default(),
            editing_style: EditingStyle::None,
            theme: Theme::default(),
            sub_root: None,
        }
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Whether this element is of kind `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.kind == TypeTag::of::<T>()
    }
}

// =============================================================================
// Section
// =============================================================================

/// An ordered group of elements within a root.
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub caption: String,
    pub view_binding: ViewBinding,
    /// Root that contains this section.
    pub parent: Option<RootId>,
    /// Whether selecting an element navigates back.
    pub pop_on_selection: bool,
    elements: Vec<Element>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty section with a caption.
    pub fn with_caption(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            ..Self::default()
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Root
// =============================================================================

/// The top of a presentation tree.
///
/// A root carries every attribute an element has, so it can be described by
/// an element ([`Root::from_element`]) and hosted by one
/// ([`Element::sub_root`]).
#[derive(Debug, Clone, Default)]
pub struct Root {
    pub caption: String,
    pub data_context: DataValue,
    pub view_binding: ViewBinding,
    pub editing_style: EditingStyle,
    pub theme: Theme,
    pub sections: Vec<Section>,
}

impl Root {
    /// Create an empty root with a caption.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            ..Self::default()
        }
    }

    /// Set the binding.
    pub fn with_binding(mut self, view_binding: ViewBinding) -> Self {
        self.view_binding = view_binding;
        self
    }

    /// Set the data context.
    pub fn with_data_context(mut self, data_context: impl Into<DataValue>) -> Self {
        self.data_context = data_context.into();
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Describe the subtree an element hosts.
    ///
    /// Copies the element's caption, data context, binding, editing style and
    /// theme. The result has no sections.
    pub fn from_element(element: &Element) -> Self {
        Self {
            caption: element.caption.clone(),
            data_context: element.data_context.clone(),
            view_binding: element.view_binding.clone(),
            editing_style: element.editing_style,
            theme: element.theme.clone(),
            sections: Vec::new(),
        }
    }

    /// Append a section and return its index.
    ///
    /// The section is detached from whatever root it named before. It gets
    /// this root's key when the root is inserted into a [`Tree`]; for a root
    /// already in a tree use [`Tree::add_section`].
    ///
    /// [`Tree`]: crate::tree::Tree
    /// [`Tree::add_section`]: crate::tree::Tree::add_section
    pub fn add_section(&mut self, mut section: Section) -> usize {
        section.parent = None;
        self.sections.push(section);
        self.sections.len() - 1
    }

    pub fn element(&self, section: usize, index: usize) -> Option<&Element> {
        self.sections.get(section)?.element(index)
    }

    pub fn element_mut(&mut self, section: usize, index: usize) -> Option<&mut Element> {
        self.sections.get_mut(section)?.element_mut(index)
    }

    /// All elements, section by section.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.sections.iter().flat_map(Section::iter)
    }

    /// Total number of elements across all sections.
    pub fn element_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}

/// A borrowed node of any level.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Root(&'a Root),
    Section(&'a Section),
    Element(&'a Element),
}

impl<'a> NodeRef<'a> {
    pub fn caption(&self) -> &'a str {
        match self {
            NodeRef::Root(root) => &root.caption,
            NodeRef::Section(section) => &section.caption,
            NodeRef::Element(element) => &element.caption,
        }
    }

    /// Short name of the node's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeRef::Root(_) => "Root",
            NodeRef::Section(_) => "Section",
            NodeRef::Element(element) => element.kind.name(),
        }
    }

    /// The node's binding.
    pub fn view_binding(&self) -> &'a ViewBinding {
        match self {
            NodeRef::Root(root) => &root.view_binding,
            NodeRef::Section(section) => &section.view_binding,
            NodeRef::Element(element) => &element.view_binding,
        }
    }

    /// The node's theme. Sections have none.
    pub fn theme(&self) -> Option<&'a Theme> {
        match self {
            NodeRef::Root(root) => Some(&root.theme),
            NodeRef::Section(_) => None,
            NodeRef::Element(element) => Some(&element.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::DataContextCode;

    #[test]
    fn test_element_ids_are_unique() {
        let a = Element::new(TypeTag::of::<RadioElement>());
        let b = Element::new(TypeTag::of::<RadioElement>());
        assert_ne!(a.id, b.id);
        assert!(a.is::<RadioElement>());
        assert!(!a.is::<RootElement>());
    }

    #[test]
    fn test_root_from_element_copies_description() {
        let mut element = Element::new(TypeTag::of::<RootElement>()).with_caption("Friends");
        element.data_context = DataValue::from(vec![DataValue::from("ann")]);
        element.editing_style = EditingStyle::Delete;
        element.view_binding = ViewBinding::new(DataContextCode::ViewEnumerable);
        element.theme.name = Some("list".into());

        let root = Root::from_element(&element);

        assert_eq!(root.caption, "Friends");
        assert_eq!(root.data_context, element.data_context);
        assert_eq!(root.editing_style, EditingStyle::Delete);
        assert_eq!(root.view_binding.data_context_code, DataContextCode::ViewEnumerable);
        assert_eq!(root.theme.name.as_deref(), Some("list"));
        assert!(root.sections.is_empty());
    }

    #[test]
    fn test_element_lookup() {
        let mut section = Section::with_caption("A");
        section.push(Element::new(TypeTag::of::<StringElement>()).with_caption("one"));
        section.push(Element::new(TypeTag::of::<StringElement>()).with_caption("two"));

        let mut root = Root::new("root");
        let index = root.add_section(section);

        assert_eq!(index, 0);
        assert_eq!(root.sections[0].parent, None);
        assert_eq!(root.element(0, 1).map(|e| e.caption.as_str()), Some("two"));
        assert!(root.element(0, 2).is_none());
        assert!(root.element(1, 0).is_none());
        assert_eq!(root.element_count(), 2);
        let captions: Vec<_> = root.elements().map(|e| e.caption.as_str()).collect();
        assert_eq!(captions, ["one", "two"]);
    }

    #[test]
    fn test_node_ref_accessors() {
        let element = Element::new(TypeTag::of::<RadioElement>()).with_caption("x");
        let node = NodeRef::Element(&element);
        assert_eq!(node.caption(), "x");
        assert_eq!(node.kind_name(), "RadioElement");
        assert!(node.theme().is_some());

        let section = Section::new();
        assert!(NodeRef::Section(&section).theme().is_none());
    }
}
