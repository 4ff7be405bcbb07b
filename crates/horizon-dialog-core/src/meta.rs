//! Runtime type information for bindings.
//!
//! Bindings refer to view and element types by [`TypeTag`] and read model
//! members through [`MemberAccessor`] closures. The [`TypeRegistry`] turns a
//! tag back into a fresh instance.
//!
//! # Example
//!
//! ```
//! use horizon_dialog_core::meta::{TypeRegistry, TypeTag};
//! use horizon_dialog_core::node::RadioElement;
//!
//! let registry = TypeRegistry::with_builtins();
//! let element = registry.create_element(TypeTag::of::<RadioElement>()).unwrap();
//! assert_eq!(element.kind.name(), "RadioElement");
//! ```

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{BindingError, Result};
use crate::node::{Element, RadioElement, RootElement, StringElement};
use crate::value::DataValue;
use crate::view::ViewHandle;

/// Stable identifier of a Rust type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    type_name: &'static str,
}

impl TypeTag {
    /// Get the tag of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name.
    pub fn full_name(&self) -> &'static str {
        self.type_name
    }

    /// The type name without its module path or generic arguments.
    pub fn name(&self) -> &'static str {
        let base = self.type_name.split('<').next().unwrap_or(self.type_name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Getter = dyn Fn(&DataValue) -> DataValue + Send + Sync;

/// A named accessor that reads one member of a model value.
#[derive(Clone)]
pub struct MemberAccessor {
    name: Arc<str>,
    getter: Arc<Getter>,
}

impl MemberAccessor {
    /// Create an accessor from a closure.
    pub fn new<F>(name: impl Into<Arc<str>>, getter: F) -> Self
    where
        F: Fn(&DataValue) -> DataValue + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            getter: Arc::new(getter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the member from `target`.
    pub fn get(&self, target: &DataValue) -> DataValue {
        (self.getter)(target)
    }
}

impl fmt::Debug for MemberAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemberAccessor").field(&self.name).finish()
    }
}

type ElementFactory = Arc<dyn Fn() -> Element + Send + Sync>;
type ViewFactory = Arc<dyn Fn() -> ViewHandle + Send + Sync>;

/// Factories for the element and view types a binding may name.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    elements: HashMap<TypeTag, ElementFactory>,
    views: HashMap<TypeTag, ViewFactory>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in element kinds.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_element_kind::<RadioElement>();
        registry.register_element_kind::<RootElement>();
        registry.register_element_kind::<StringElement>();
        registry
    }

    // =========================================================================
    // Elements
    // =========================================================================

    /// Register `T` as an element kind built with [`Element::new`].
    pub fn register_element_kind<T: 'static>(&mut self) {
        let kind = TypeTag::of::<T>();
        self.register_element_with(kind, move || Element::new(kind));
    }

    /// Register a custom element factory under `kind`.
    pub fn register_element_with<F>(&mut self, kind: TypeTag, factory: F)
    where
        F: Fn() -> Element + Send + Sync + 'static,
    {
        crate::dialog_trace!(%kind, "registered element kind");
        self.elements.insert(kind, Arc::new(factory));
    }

    /// Check whether an element kind is registered.
    pub fn has_element(&self, kind: TypeTag) -> bool {
        self.elements.contains_key(&kind)
    }

    /// Look up a registered element kind by its short name.
    ///
    /// Fails with [`BindingError::Config`] when more than one registered kind
    /// has that short name.
    pub fn element_kind(&self, name: &str) -> Result<Option<TypeTag>> {
        let mut matches: Vec<TypeTag> = self
            .elements
            .keys()
            .copied()
            .filter(|kind| kind.name() == name)
            .collect();

        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            _ => {
                let mut candidates: Vec<_> = matches.iter().map(TypeTag::full_name).collect();
                candidates.sort_unstable();
                Err(BindingError::Config(format!(
                    "element kind '{name}' is ambiguous: {}",
                    candidates.join(", ")
                )))
            }
        }
    }

    /// Instantiate an element of the given kind.
    pub fn create_element(&self, kind: TypeTag) -> Result<Element> {
        let factory = self.elements.get(&kind).ok_or_else(|| {
            BindingError::instantiation(kind.name(), "not a registered element kind")
        })?;
        let mut element = factory();
        element.kind = kind;
        Ok(element)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Register `V` as a view type built with `V::default()`.
    pub fn register_view<V>(&mut self)
    where
        V: crate::view::View + Default,
    {
        self.register_view_with(TypeTag::of::<V>(), || Arc::new(V::default()) as ViewHandle);
    }

    /// Register a custom view factory under `view_type`.
    pub fn register_view_with<F>(&mut self, view_type: TypeTag, factory: F)
    where
        F: Fn() -> ViewHandle + Send + Sync + 'static,
    {
        crate::dialog_trace!(%view_type, "registered view type");
        self.views.insert(view_type, Arc::new(factory));
    }

    /// Check whether a view type is registered.
    pub fn has_view(&self, view_type: TypeTag) -> bool {
        self.views.contains_key(&view_type)
    }

    /// Instantiate a view of the given type.
    pub fn create_view(&self, view_type: TypeTag) -> Result<ViewHandle> {
        let factory = self.views.get(&view_type).ok_or_else(|| {
            BindingError::instantiation(view_type.name(), "no default constructor registered")
        })?;
        Ok(factory())
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements: Vec<_> = self.elements.keys().map(TypeTag::name).collect();
        let mut views: Vec<_> = self.views.keys().map(TypeTag::name).collect();
        elements.sort_unstable();
        views.sort_unstable();
        f.debug_struct("TypeRegistry")
            .field("elements", &elements)
            .field("views", &views)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    #[derive(Default)]
    struct ProfileView;

    impl View for ProfileView {
        fn type_tag(&self) -> TypeTag {
            TypeTag::of::<Self>()
        }
    }

    struct Custom;

    #[test]
    fn test_short_names_strip_paths_and_generics() {
        assert_eq!(TypeTag::of::<RadioElement>().name(), "RadioElement");
        assert_eq!(TypeTag::of::<Vec<DataValue>>().name(), "Vec");
        assert_eq!(TypeTag::of::<i64>().name(), "i64");
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = TypeRegistry::with_builtins();
        assert!(registry.has_element(TypeTag::of::<RadioElement>()));
        assert!(registry.has_element(TypeTag::of::<RootElement>()));
        assert_eq!(
            registry.element_kind("StringElement"),
            Ok(Some(TypeTag::of::<StringElement>()))
        );
        assert_eq!(registry.element_kind("Nope"), Ok(None));
    }

    mod forms {
        pub struct Row;
    }

    mod menus {
        pub struct Row;
    }

    #[test]
    fn test_shared_short_name_is_ambiguous() {
        let mut registry = TypeRegistry::with_builtins();
        registry.register_element_kind::<forms::Row>();
        assert_eq!(
            registry.element_kind("Row"),
            Ok(Some(TypeTag::of::<forms::Row>()))
        );

        registry.register_element_kind::<menus::Row>();
        let err = registry.element_kind("Row").unwrap_err();
        let BindingError::Config(message) = err else {
            panic!("expected a config error, got {err:?}");
        };
        assert!(message.contains("forms::Row"));
        assert!(message.contains("menus::Row"));
        assert_eq!(
            registry.element_kind("RadioElement"),
            Ok(Some(TypeTag::of::<RadioElement>()))
        );
    }

    #[test]
    fn test_unknown_element_kind_fails() {
        let registry = TypeRegistry::new();
        let err = registry.create_element(TypeTag::of::<Custom>()).unwrap_err();
        assert!(matches!(err, BindingError::Instantiation { ref type_name, .. } if type_name == "Custom"));
    }

    #[test]
    fn test_custom_factory_keeps_kind() {
        let mut registry = TypeRegistry::new();
        registry.register_element_with(TypeTag::of::<Custom>(), || {
            let mut element = Element::new(TypeTag::of::<RadioElement>());
            element.caption = "preset".into();
            element
        });

        let element = registry.create_element(TypeTag::of::<Custom>()).unwrap();
        assert_eq!(element.kind, TypeTag::of::<Custom>());
        assert_eq!(element.caption, "preset");
    }

    #[test]
    fn test_views_are_created_from_defaults() {
        let mut registry = TypeRegistry::new();
        registry.register_view::<ProfileView>();

        let view = registry.create_view(TypeTag::of::<ProfileView>()).unwrap();
        assert_eq!(view.type_tag().name(), "ProfileView");
        assert!(registry.create_view(TypeTag::of::<Custom>()).is_err());
    }

    #[test]
    fn test_accessor_reads_member() {
        let accessor = MemberAccessor::new("len", |value| match value {
            DataValue::String(s) => DataValue::Int(s.len() as i64),
            _ => DataValue::None,
        });
        assert_eq!(accessor.name(), "len");
        assert_eq!(accessor.get(&DataValue::from("abc")), DataValue::Int(3));
    }
}
