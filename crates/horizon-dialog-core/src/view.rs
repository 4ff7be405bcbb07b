//! Views and the capabilities bindings look for on them.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::meta::TypeTag;
use crate::value::DataValue;

/// Shared handle to a realizable view.
pub type ViewHandle = Arc<dyn View>;

/// A realizable view a binding can parse into a root.
///
/// Optional capabilities are exposed through accessor methods that return
/// `None` by default.
pub trait View: Any + Send + Sync {
    /// Runtime type of the view.
    fn type_tag(&self) -> TypeTag;

    /// Textual representation used when the view is itself a list item.
    fn display_text(&self) -> String {
        String::new()
    }

    /// The view's data-context slot, if it has one.
    fn data_context_holder(&self) -> Option<&dyn DataContextHolder> {
        None
    }

    /// The view's initialization hook, if it has one.
    fn initializable(&self) -> Option<&dyn Initialize> {
        None
    }
}

impl dyn View {
    /// Downcast to a concrete view type.
    pub fn downcast_ref<T: View>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "View({})", self.type_tag())
    }
}

/// One-shot initialization hook run after a data context is assigned.
pub trait Initialize: Send + Sync {
    fn initialize(&self);
}

/// A view that carries a data context.
///
/// Views are shared, so the slot uses interior mutability.
pub trait DataContextHolder: Send + Sync {
    fn set_data_context(&self, value: DataValue);

    fn data_context(&self) -> DataValue;
}
