//! Binding descriptors attached to every node.

use crate::meta::{MemberAccessor, TypeTag};
use crate::value::DataValue;
use crate::view::ViewHandle;

/// How a node's data context is projected into a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataContextCode {
    /// A single choice among an enum's values.
    Enum,
    /// A collection of enum values.
    EnumCollection,
    /// A multi-select list.
    MultiselectCollection,
    /// A plain enumerable of values.
    Enumerable,
    /// A single object rendered through its own view.
    #[default]
    Object,
    /// An enumerable of objects, each with its own view.
    ViewEnumerable,
}

impl DataContextCode {
    /// All codes, in declaration order.
    pub const ALL: [DataContextCode; 6] = [
        DataContextCode::Enum,
        DataContextCode::EnumCollection,
        DataContextCode::MultiselectCollection,
        DataContextCode::Enumerable,
        DataContextCode::Object,
        DataContextCode::ViewEnumerable,
    ];
}

/// Describes how a node is bound to its model.
///
/// Cloned onto child nodes during construction, then selectively
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct ViewBinding {
    pub data_context_code: DataContextCode,
    /// Object the member accessor reads from.
    pub data_context: DataValue,
    /// View type instantiated for this node.
    pub view_type: Option<TypeTag>,
    /// Element kind used for child elements.
    pub element_type: Option<TypeTag>,
    pub member: Option<MemberAccessor>,
    /// A view instance already bound to this node.
    pub view: Option<ViewHandle>,
}

impl ViewBinding {
    /// Create a binding with the given code and nothing else set.
    pub fn new(data_context_code: DataContextCode) -> Self {
        Self {
            data_context_code,
            ..Self::default()
        }
    }

    /// Set the view type.
    pub fn with_view_type(mut self, view_type: TypeTag) -> Self {
        self.view_type = Some(view_type);
        self
    }

    /// Set the element kind.
    pub fn with_element_type(mut self, element_type: TypeTag) -> Self {
        self.element_type = Some(element_type);
        self
    }

    /// Set the member accessor and the object it reads from.
    pub fn with_member(mut self, member: MemberAccessor, data_context: DataValue) -> Self {
        self.member = Some(member);
        self.data_context = data_context;
        self
    }

    /// Set an existing view.
    pub fn with_view(mut self, view: ViewHandle) -> Self {
        self.view = Some(view);
        self
    }

    /// Whether a view handle or a view type is available.
    pub fn has_view_source(&self) -> bool {
        self.view.is_some() || self.view_type.is_some()
    }
}
