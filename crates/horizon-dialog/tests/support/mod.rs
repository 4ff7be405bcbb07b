//! Shared fixtures for engine tests.

#![allow(dead_code)]

use std::sync::Arc;

use horizon_dialog::prelude::*;
use parking_lot::{Mutex, RwLock};

/// Records lifecycle calls in order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A model with a name and an initialization hook.
pub struct Person {
    pub name: String,
    pub log: CallLog,
}

impl Person {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: Arc::clone(log),
        }
    }
}

impl Model for Person {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }

    fn display_text(&self) -> String {
        self.name.clone()
    }

    fn initializable(&self) -> Option<&dyn Initialize> {
        Some(self)
    }
}

impl Initialize for Person {
    fn initialize(&self) {
        self.log.lock().push(format!("model:{}", self.name));
    }
}

/// A model whose text is empty.
pub struct Anonymous;

impl Model for Anonymous {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }
}

/// A view that holds a data context and initializes after it.
#[derive(Default)]
pub struct PersonView {
    pub context: RwLock<DataValue>,
    pub log: Option<CallLog>,
}

impl PersonView {
    pub fn with_log(log: &CallLog) -> Self {
        Self {
            context: RwLock::new(DataValue::None),
            log: Some(Arc::clone(log)),
        }
    }
}

impl View for PersonView {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }

    fn data_context_holder(&self) -> Option<&dyn DataContextHolder> {
        Some(self)
    }

    fn initializable(&self) -> Option<&dyn Initialize> {
        Some(self)
    }
}

impl DataContextHolder for PersonView {
    fn set_data_context(&self, value: DataValue) {
        if let Some(log) = &self.log {
            log.lock().push("view:context".to_string());
        }
        *self.context.write() = value;
    }

    fn data_context(&self) -> DataValue {
        self.context.read().clone()
    }
}

impl Initialize for PersonView {
    fn initialize(&self) {
        if let Some(log) = &self.log {
            log.lock().push("view:init".to_string());
        }
    }
}

/// A view with no capabilities.
#[derive(Default)]
pub struct Foo;

impl View for Foo {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }
}

/// Parser that produces one section with a row per view, titled after the
/// view type and styled from the incoming theme.
pub fn echo_parser() -> FnViewParser<
    impl Fn(&ViewHandle, &str, Option<&Theme>) -> horizon_dialog::Result<Root> + Send + Sync,
> {
    FnViewParser::new(|view: &ViewHandle, title: &str, theme: Option<&Theme>| {
        let mut section = Section::with_caption(view.type_tag().name());
        section.push(Element::new(TypeTag::of::<StringElement>()).with_caption(title));
        let mut root = Root::new(title).with_theme(Theme::derive(theme));
        root.add_section(section);
        Ok(root)
    })
}

/// An engine whose registry knows the fixture views.
pub fn engine() -> BindingEngine {
    engine_with(EngineConfig::default())
}

pub fn engine_with(config: EngineConfig) -> BindingEngine {
    let mut registry = TypeRegistry::with_builtins();
    registry.register_view::<PersonView>();
    registry.register_view::<Foo>();
    BindingEngine::with_parts(registry, Arc::new(echo_parser()), config)
        .expect("fixture config is valid")
}
