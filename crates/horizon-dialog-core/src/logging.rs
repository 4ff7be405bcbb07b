//! Logging and debugging facilities for Horizon Dialog.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output
//! - Debug visualization for presentation trees
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Dialog uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_dialog=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! Use [`TreeDebug`] to render a tree built by the binding engine:
//!
//! ```
//! use horizon_dialog_core::logging::TreeDebug;
//! use horizon_dialog_core::{Root, Tree};
//!
//! let mut tree = Tree::new();
//! let id = tree.insert(Root::new("Settings"));
//! let output = TreeDebug::new().format_root(&tree, id).unwrap();
//! assert!(output.contains("Settings"));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::error::Result;
use crate::node::NodeRef;
use crate::tree::{RootId, Tree};

/// Span names used throughout Horizon Dialog for tracing.
pub mod span_names {
    /// Dispatch on a root's data-context code.
    pub const BUILD: &str = "horizon_dialog::build";
    /// Population of a section from an enumerable.
    pub const SECTION: &str = "horizon_dialog::section";
    /// Write-back of binding expressions.
    pub const FETCH: &str = "horizon_dialog::fetch";
}

/// Target names for log filtering.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "horizon_dialog_core";
    /// Binding engine target.
    pub const BINDING: &str = "horizon_dialog::binding";
    /// Tree arena target.
    pub const TREE: &str = "horizon_dialog_core::tree";
    /// Theme resolution target.
    pub const THEME: &str = "horizon_dialog_style::theme";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show element IDs.
    pub show_ids: bool,
    /// Whether to show node kinds.
    pub show_types: bool,
    /// Whether to show binding codes and theme names.
    pub show_bindings: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            show_bindings: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_bindings: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_bindings: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing presentation trees.
#[derive(Debug, Clone, Default)]
pub struct TreeDebug {
    options: TreeFormatOptions,
}

impl TreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every top-level root in the tree.
    pub fn format_all(&self, tree: &Tree) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "Tree ({} roots):", tree.len());

        let top_level = tree.top_level();
        if top_level.is_empty() {
            let _ = writeln!(output, "  (empty)");
        }
        for id in top_level {
            output.push_str(&self.format_root(tree, id)?);
        }
        Ok(output)
    }

    /// Format the subtree starting at `id`, nested roots included.
    pub fn format_root(&self, tree: &Tree, id: RootId) -> Result<String> {
        let mut output = String::new();
        tree.walk(id, |node, depth| {
            if self.options.max_depth.is_some_and(|max| depth > max) {
                return;
            }
            self.format_node(node, depth, &mut output);
        })?;
        Ok(output)
    }

    fn format_node(&self, node: NodeRef<'_>, depth: usize, output: &mut String) {
        output.push_str(&self.build_prefix(depth));

        let caption = node.caption();
        output.push_str(if caption.is_empty() { "(untitled)" } else { caption });

        if self.options.show_ids
            && let NodeRef::Element(element) = node
        {
            let _ = write!(output, " [#{}]", element.id.as_raw());
        }

        if self.options.show_types {
            let _ = write!(output, " ({})", node.kind_name());
        }

        if self.options.show_bindings {
            let _ = write!(output, " {{{:?}", node.view_binding().data_context_code);
            if let Some(name) = node.theme().and_then(|theme| theme.name.as_deref()) {
                let _ = write!(output, ", theme={name}");
            }
            output.push('}');
        }

        output.push('\n');
    }

    /// Build the prefix string for a tree node.
    fn build_prefix(&self, depth: usize) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, connector) = match self.options.style {
            TreeStyle::Ascii => ("|", "+-- "),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500} "),
            TreeStyle::Compact => ("", "- "),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(connector);
        prefix
    }
}

/// Renders a whole tree through `Display`.
pub struct DisplayTree<'a> {
    debug: &'a TreeDebug,
    tree: &'a Tree,
}

impl TreeDebug {
    /// Borrow a tree for display.
    pub fn display<'a>(&'a self, tree: &'a Tree) -> DisplayTree<'a> {
        DisplayTree { debug: self, tree }
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.debug.format_all(self.tree) {
            Ok(output) => write!(f, "{output}"),
            Err(e) => write!(f, "Error formatting tree: {e}"),
        }
    }
}

/// A guard that emits a tracing span when dropped.
///
/// Useful for tracking the duration of tree builds.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span, active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_dialog::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace on the core target.
#[macro_export]
macro_rules! dialog_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_dialog_core", $($arg)*)
    };
}
