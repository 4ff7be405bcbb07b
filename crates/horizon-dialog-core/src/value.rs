//! Live model values carried through a binding.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::meta::TypeTag;
use crate::view::{Initialize, ViewHandle};

/// Shared handle to a model object.
pub type ModelRef = Arc<dyn Model>;

/// A view-model object that can be projected onto a tree.
pub trait Model: Any + Send + Sync {
    /// Runtime type of the model.
    fn type_tag(&self) -> TypeTag;

    /// Textual representation, used for element captions.
    fn display_text(&self) -> String {
        String::new()
    }

    /// The items of a collection-like model. `None` means not enumerable.
    fn items(&self) -> Option<Vec<DataValue>> {
        None
    }

    /// The model's initialization hook, if it has one.
    fn initializable(&self) -> Option<&dyn Initialize> {
        None
    }
}

impl dyn Model {
    /// Downcast to a concrete model type.
    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// A model value.
///
/// Scalars are held inline, objects through shared handles. Cloning a value
/// never deep-copies a model or view.
///
/// # Example
///
/// ```
/// use horizon_dialog_core::DataValue;
///
/// let items = DataValue::from(vec![DataValue::from("a"), DataValue::from(2)]);
/// assert_eq!(items.items().map(|v| v.len()), Some(2));
/// assert_eq!(DataValue::from(2).display_text(), "2");
///
/// // Text is a single value, not a sequence of characters.
/// assert!(DataValue::from("abc").items().is_none());
/// ```
#[derive(Clone, Default)]
pub enum DataValue {
    /// No value.
    #[default]
    None,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// An ordered sequence of values.
    List(Vec<DataValue>),
    /// A model object.
    Model(ModelRef),
    /// A realizable view.
    View(ViewHandle),
}

impl DataValue {
    /// Wrap a model object.
    pub fn model<M: Model>(model: M) -> Self {
        DataValue::Model(Arc::new(model))
    }

    /// Wrap a view.
    pub fn view<V: crate::view::View>(view: V) -> Self {
        DataValue::View(Arc::new(view))
    }

    /// Returns `true` if this is `DataValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, DataValue::None)
    }

    /// Returns `true` if this holds a value.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Textual representation of the value.
    ///
    /// `None` and lists have no textual form and yield an empty string.
    pub fn display_text(&self) -> String {
        match self {
            DataValue::None | DataValue::List(_) => String::new(),
            DataValue::String(s) => s.clone(),
            DataValue::Int(n) => n.to_string(),
            DataValue::Float(n) => n.to_string(),
            DataValue::Bool(b) => b.to_string(),
            DataValue::Model(model) => model.display_text(),
            DataValue::View(view) => view.display_text(),
        }
    }

    /// The items of an enumerable value.
    ///
    /// Lists and models that expose items are enumerable. Everything else,
    /// strings included, yields `None`.
    pub fn items(&self) -> Option<Vec<DataValue>> {
        match self {
            DataValue::List(items) => Some(items.clone()),
            DataValue::Model(model) => model.items(),
            _ => None,
        }
    }

    /// Whether [`items`](Self::items) would return `Some`.
    pub fn is_enumerable(&self) -> bool {
        match self {
            DataValue::List(_) => true,
            DataValue::Model(model) => model.items().is_some(),
            _ => false,
        }
    }

    /// Runtime type of the value. `None` has no type.
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            DataValue::None => None,
            DataValue::String(_) => Some(TypeTag::of::<String>()),
            DataValue::Int(_) => Some(TypeTag::of::<i64>()),
            DataValue::Float(_) => Some(TypeTag::of::<f64>()),
            DataValue::Bool(_) => Some(TypeTag::of::<bool>()),
            DataValue::List(_) => Some(TypeTag::of::<Vec<DataValue>>()),
            DataValue::Model(model) => Some(model.type_tag()),
            DataValue::View(view) => Some(view.type_tag()),
        }
    }

    /// Attempts to get the value as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a model handle.
    pub fn as_model(&self) -> Option<&ModelRef> {
        match self {
            DataValue::Model(model) => Some(model),
            _ => None,
        }
    }

    /// Attempts to get the value as a view handle.
    pub fn as_view(&self) -> Option<&ViewHandle> {
        match self {
            DataValue::View(view) => Some(view),
            _ => None,
        }
    }

    /// The initialization hook of a model or view value.
    pub fn initializable(&self) -> Option<&dyn Initialize> {
        match self {
            DataValue::Model(model) => model.initializable(),
            DataValue::View(view) => view.initializable(),
            _ => None,
        }
    }

    /// Attempts to downcast a model value to `T`.
    pub fn downcast_model<T: Model>(&self) -> Option<&T> {
        self.as_model().and_then(|model| model.downcast_ref::<T>())
    }
}

impl PartialEq for DataValue {
    /// Scalars compare by value, models and views by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataValue::None, DataValue::None) => true,
            (DataValue::String(a), DataValue::String(b)) => a == b,
            (DataValue::Int(a), DataValue::Int(b)) => a == b,
            (DataValue::Float(a), DataValue::Float(b)) => a == b,
            (DataValue::Bool(a), DataValue::Bool(b)) => a == b,
            (DataValue::List(a), DataValue::List(b)) => a == b,
            (DataValue::Model(a), DataValue::Model(b)) => Arc::ptr_eq(a, b),
            (DataValue::View(a), DataValue::View(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::None => write!(f, "None"),
            DataValue::String(s) => f.debug_tuple("String").field(s).finish(),
            DataValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            DataValue::Float(n) => f.debug_tuple("Float").field(n).finish(),
            DataValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            DataValue::List(items) => f.debug_tuple("List").field(items).finish(),
            DataValue::Model(model) => write!(f, "Model({})", model.type_tag()),
            DataValue::View(view) => write!(f, "View({})", view.type_tag()),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(n: i64) -> Self {
        DataValue::Int(n)
    }
}

impl From<i32> for DataValue {
    fn from(n: i32) -> Self {
        DataValue::Int(n as i64)
    }
}

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Float(n)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(items: Vec<DataValue>) -> Self {
        DataValue::List(items)
    }
}

impl From<ModelRef> for DataValue {
    fn from(model: ModelRef) -> Self {
        DataValue::Model(model)
    }
}

impl From<ViewHandle> for DataValue {
    fn from(view: ViewHandle) -> Self {
        DataValue::View(view)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(DataValue::None, Into::into)
    }
}
