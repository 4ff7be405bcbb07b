//! Horizon Dialog - data binding of view models onto dialog-style list trees.
//!
//! This is the main umbrella crate. It provides the [`BindingEngine`], which
//! projects a model value onto a tree of roots, sections and elements, and
//! re-exports the node model and the theme system.
//!
//! # Example
//!
//! ```
//! use horizon_dialog::prelude::*;
//!
//! let parser = FnViewParser::new(|_view, title, theme| {
//!     Ok(Root::new(title).with_theme(Theme::derive(theme)))
//! });
//! let engine = BindingEngine::new(parser);
//!
//! let mut theme = Theme::named("contacts");
//! theme.set_text_color(Color::DARK_GRAY);
//!
//! let root = Root::new("Contacts")
//!     .with_binding(
//!         ViewBinding::new(DataContextCode::ViewEnumerable)
//!             .with_view_type(TypeTag::of::<String>()),
//!     )
//!     .with_data_context(vec![DataValue::from("Ann"), DataValue::from("Bob")])
//!     .with_theme(theme);
//!
//! let mut tree = Tree::new();
//! let id = engine.build(&mut tree, &root)?.expect("view enumerables always build");
//!
//! let built = tree.root(id)?;
//! assert_eq!(built.theme.name.as_deref(), Some("contacts"));
//! let captions: Vec<_> = built.elements().map(|e| e.caption.as_str()).collect();
//! assert_eq!(captions, ["Ann", "Bob"]);
//! # Ok::<(), BindingError>(())
//! ```

pub use horizon_dialog_core::*;

/// Theme descriptors and resolution.
pub mod style {
    pub use horizon_dialog_style::*;
}

pub mod caption;
mod config;
mod context;
mod engine;
mod expression;
mod parser;
pub mod prelude;

pub use config::{BindingConfig, ConfigError, EngineConfig};
pub use context::{BindingContext, fetch_root};
pub use engine::BindingEngine;
pub use expression::{
    BindingExpression, BindingExpressionSource, ExpressionHandle, ExpressionRegistry,
};
pub use parser::{FnViewParser, ViewParser};
