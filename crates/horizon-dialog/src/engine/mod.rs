//! The binding engine.
//!
//! [`BindingEngine::build`] looks at the [`DataContextCode`] of a root's
//! binding and picks a construction strategy:
//!
//! | Code                    | Strategy                                   |
//! |-------------------------|--------------------------------------------|
//! | `Object`                | [`BindingEngine::build_object_root`]       |
//! | `ViewEnumerable`        | [`BindingEngine::build_view_enumerable_root`] |
//! | `Enum`, `EnumCollection`, `MultiselectCollection`, `Enumerable` | none (`Ok(None)`) |
//!
//! Codes without a strategy degrade to an empty result and never fail.

mod enumerable;
mod object;
mod section;

use std::fmt;
use std::sync::Arc;

use horizon_dialog_core::logging::{PerfSpan, span_names, targets};
use horizon_dialog_core::{
    BindingError, DataContextCode, Result, Root, RootId, Tree, TypeRegistry, TypeTag, ViewHandle,
};
use horizon_dialog_style::theme::Theme;

use crate::config::{EngineConfig, ResolvedKinds};
use crate::context::BindingContext;
use crate::parser::ViewParser;

/// Builds presentation trees from bound roots.
///
/// # Example
///
/// ```
/// use horizon_dialog::prelude::*;
///
/// let parser = FnViewParser::new(|_view, title, theme| {
///     Ok(Root::new(title).with_theme(Theme::derive(theme)))
/// });
/// let engine = BindingEngine::new(parser);
///
/// let names = DataValue::from(vec![DataValue::from("Ann"), DataValue::from("Bob")]);
/// let root = Root::new("People")
///     .with_binding(
///         ViewBinding::new(DataContextCode::ViewEnumerable)
///             .with_view_type(TypeTag::of::<String>()),
///     )
///     .with_data_context(names);
///
/// let mut tree = Tree::new();
/// let id = engine.build(&mut tree, &root)?.unwrap();
/// assert_eq!(tree.root(id)?.sections[0].len(), 2);
/// # Ok::<(), BindingError>(())
/// ```
pub struct BindingEngine {
    registry: TypeRegistry,
    parser: Arc<dyn ViewParser>,
    config: EngineConfig,
    kinds: ResolvedKinds,
}

impl BindingEngine {
    /// Create an engine with the built-in element kinds and default
    /// configuration.
    pub fn new(parser: impl ViewParser + 'static) -> Self {
        let registry = TypeRegistry::with_builtins();
        let kinds = ResolvedKinds {
            element: TypeTag::of::<horizon_dialog_core::RadioElement>(),
            enumerable_element: TypeTag::of::<horizon_dialog_core::RootElement>(),
        };
        Self {
            registry,
            parser: Arc::new(parser),
            config: EngineConfig::default(),
            kinds,
        }
    }

    /// Create an engine from explicit parts.
    ///
    /// Fails with [`BindingError::Config`] when a configured element kind is
    /// not registered.
    pub fn with_parts(
        registry: TypeRegistry,
        parser: Arc<dyn ViewParser>,
        config: EngineConfig,
    ) -> Result<Self> {
        let kinds = config.resolve(&registry)?;
        tracing::debug!(
            target: targets::BINDING,
            element = %kinds.element,
            enumerable_element = %kinds.enumerable_element,
            "binding engine configured"
        );
        Ok(Self {
            registry,
            parser,
            config,
            kinds,
        })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parser(&self) -> &Arc<dyn ViewParser> {
        &self.parser
    }

    /// Build the subtree described by `root` and insert it into `tree`.
    ///
    /// Returns `Ok(None)` for data-context codes without a construction
    /// strategy. For the others, the binding must carry a view or a view
    /// type, otherwise [`BindingError::InvalidInput`] is returned before any
    /// work is done.
    #[tracing::instrument(
        skip_all,
        target = "horizon_dialog::binding",
        level = "debug",
        fields(code = ?root.view_binding.data_context_code, caption = %root.caption)
    )]
    pub fn build(&self, tree: &mut Tree, root: &Root) -> Result<Option<RootId>> {
        let _perf = PerfSpan::new(span_names::BUILD);
        let code = root.view_binding.data_context_code;

        match code {
            DataContextCode::Enum
            | DataContextCode::EnumCollection
            | DataContextCode::MultiselectCollection
            | DataContextCode::Enumerable => {
                tracing::debug!(target: targets::BINDING, ?code, "no construction strategy for code");
                Ok(None)
            }
            DataContextCode::Object => {
                Self::check_view_source(root)?;
                self.build_object_root(tree, root).map(Some)
            }
            DataContextCode::ViewEnumerable => {
                Self::check_view_source(root)?;
                self.build_view_enumerable_root(tree, root).map(Some)
            }
        }
    }

    /// Build the subtree hosted by an element and remember it on the element.
    ///
    /// An element that already hosts a live subtree returns it unchanged.
    pub fn expand_element(
        &self,
        tree: &mut Tree,
        root_id: RootId,
        section: usize,
        index: usize,
    ) -> Result<Option<RootId>> {
        let element = tree.element(root_id, section, index)?;
        if let Some(existing) = element.sub_root
            && tree.contains(existing)
        {
            return Ok(Some(existing));
        }

        let description = Root::from_element(element);
        let built = self.build(tree, &description)?;
        tree.element_mut(root_id, section, index)?.sub_root = built;

        tracing::trace!(target: targets::BINDING, ?root_id, section, index, ?built, "expanded element");
        Ok(built)
    }

    /// Parse `view` with this engine's parser and bind it as a new context.
    pub fn bind_view(
        &self,
        tree: &mut Tree,
        view: &ViewHandle,
        title: &str,
        theme: Option<&Theme>,
    ) -> Result<BindingContext> {
        BindingContext::new(self.parser.as_ref(), tree, view, title, theme)
    }

    fn check_view_source(root: &Root) -> Result<()> {
        if root.view_binding.has_view_source() {
            Ok(())
        } else {
            Err(BindingError::invalid_input(format!(
                "root '{}' has neither a view nor a view type",
                root.caption
            )))
        }
    }
}

impl fmt::Debug for BindingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingEngine")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
