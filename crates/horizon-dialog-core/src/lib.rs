//! Core node model for Horizon Dialog.
//!
//! This crate provides the data structures the binding engine builds and
//! walks:
//!
//! - **Values**: [`DataValue`], the live model value a binding carries
//! - **Type information**: [`TypeTag`], [`MemberAccessor`] and the
//!   [`TypeRegistry`] of element and view factories
//! - **Bindings**: [`ViewBinding`] and its [`DataContextCode`]
//! - **Nodes**: [`Root`], [`Section`] and [`Element`]
//! - **Arena**: [`Tree`], keyed by [`RootId`], with cascade removal
//! - **Logging**: `tracing` targets, [`TreeDebug`] and [`PerfSpan`]
//!
//! # Example
//!
//! ```
//! use horizon_dialog_core::prelude::*;
//!
//! let mut section = Section::with_caption("Fruit");
//! section.push(Element::new(TypeTag::of::<StringElement>()).with_caption("Apple"));
//!
//! let mut root = Root::new("Basket");
//! root.add_section(section);
//!
//! let mut tree = Tree::new();
//! let id = tree.insert(root);
//! assert_eq!(tree.root(id).unwrap().sections[0].parent, Some(id));
//! ```

pub mod binding;
mod error;
pub mod logging;
pub mod meta;
pub mod node;
pub mod tree;
pub mod value;
pub mod view;

pub use binding::{DataContextCode, ViewBinding};
pub use error::{BindingError, Result};
pub use logging::{PerfSpan, TreeDebug, TreeFormatOptions, TreeStyle};
pub use meta::{MemberAccessor, TypeRegistry, TypeTag};
pub use node::{
    EditingStyle, Element, ElementId, NodeRef, RadioElement, Root, RootElement, Section,
    StringElement,
};
pub use tree::{RootId, SharedTree, Tree};
pub use value::{DataValue, Model, ModelRef};
pub use view::{DataContextHolder, Initialize, View, ViewHandle};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::binding::{DataContextCode, ViewBinding};
    pub use crate::error::{BindingError, Result};
    pub use crate::meta::{MemberAccessor, TypeRegistry, TypeTag};
    pub use crate::node::{
        EditingStyle, Element, ElementId, NodeRef, RadioElement, Root, RootElement, Section,
        StringElement,
    };
    pub use crate::tree::{RootId, Tree};
    pub use crate::value::{DataValue, Model, ModelRef};
    pub use crate::view::{DataContextHolder, Initialize, View, ViewHandle};
}
