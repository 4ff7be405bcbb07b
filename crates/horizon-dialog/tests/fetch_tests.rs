//! Tests for committing element values back into models.

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use horizon_dialog::prelude::*;
use horizon_dialog::{ExpressionHandle, fetch_root};
use support::{CallLog, Foo, Person, PersonView, call_log, engine};

struct Recording {
    label: String,
    log: CallLog,
    active: AtomicBool,
}

impl Recording {
    fn handle(label: &str, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            log: Arc::clone(log),
            active: AtomicBool::new(true),
        })
    }
}

impl BindingExpression for Recording {
    fn update_source(&self) {
        self.log.lock().push(self.label.clone());
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

fn two_section_root(tree: &mut Tree) -> RootId {
    let mut first = Section::with_caption("first");
    first.push(Element::new(TypeTag::of::<StringElement>()).with_caption("a"));
    first.push(Element::new(TypeTag::of::<StringElement>()).with_caption("b"));
    let mut second = Section::with_caption("second");
    second.push(Element::new(TypeTag::of::<StringElement>()).with_caption("c"));

    let mut root = Root::new("form");
    root.add_section(first);
    root.add_section(second);
    tree.insert(root)
}

fn register(
    tree: &Tree,
    registry: &ExpressionRegistry,
    root: RootId,
    section: usize,
    index: usize,
    expression: ExpressionHandle,
) {
    let element = tree.element(root, section, index).unwrap();
    registry.register(element.id, expression);
}

#[test]
fn test_fetch_visits_sections_then_elements_then_expressions() {
    let mut tree = Tree::new();
    let root = two_section_root(&mut tree);
    let log = call_log();
    let registry = ExpressionRegistry::new();

    register(&tree, &registry, root, 1, 0, Recording::handle("c", &log));
    register(&tree, &registry, root, 0, 1, Recording::handle("b", &log));
    register(&tree, &registry, root, 0, 0, Recording::handle("a1", &log));
    register(&tree, &registry, root, 0, 0, Recording::handle("a2", &log));

    let context = BindingContext::from_root(root);
    assert_eq!(context.fetch(&tree, &registry), Ok(4));
    assert_eq!(*log.lock(), ["a1", "a2", "b", "c"].map(String::from));
}

#[test]
fn test_fetch_skips_inactive_expressions() {
    let mut tree = Tree::new();
    let root = two_section_root(&mut tree);
    let log = call_log();
    let registry = ExpressionRegistry::new();

    let paused = Recording::handle("paused", &log);
    paused.active.store(false, Ordering::SeqCst);
    register(&tree, &registry, root, 0, 0, paused.clone());
    register(&tree, &registry, root, 0, 1, Recording::handle("live", &log));

    assert_eq!(fetch_root(&tree, root, &registry), Ok(1));
    assert_eq!(*log.lock(), ["live".to_string()]);

    paused.active.store(true, Ordering::SeqCst);
    assert_eq!(fetch_root(&tree, root, &registry), Ok(2));
}

#[test]
fn test_fetch_without_expressions_commits_nothing() {
    let mut tree = Tree::new();
    let root = two_section_root(&mut tree);
    assert_eq!(fetch_root(&tree, root, &ExpressionRegistry::new()), Ok(0));
}

#[test]
fn test_fetch_does_not_descend_into_nested_roots() {
    let engine = engine();
    let mut tree = Tree::new();
    let log = call_log();
    let people = DataValue::from(vec![DataValue::model(Person::new("Ann", &log))]);
    let root = Root::new("People")
        .with_binding(
            ViewBinding::new(DataContextCode::ViewEnumerable)
                .with_view_type(TypeTag::of::<PersonView>()),
        )
        .with_data_context(people);

    let id = engine.build(&mut tree, &root).unwrap().unwrap();
    let nested = engine.expand_element(&mut tree, id, 0, 0).unwrap().unwrap();

    let registry = ExpressionRegistry::new();
    register(&tree, &registry, nested, 0, 0, Recording::handle("nested", &log));

    assert_eq!(fetch_root(&tree, id, &registry), Ok(0));
    assert_eq!(fetch_root(&tree, nested, &registry), Ok(1));
}

#[test]
fn test_fetch_unknown_root() {
    let mut tree = Tree::new();
    let root = two_section_root(&mut tree);
    tree.remove(root).unwrap();

    assert_eq!(
        fetch_root(&tree, root, &ExpressionRegistry::new()),
        Err(BindingError::UnknownRoot(root))
    );
}

#[test]
fn test_bind_view_creates_context() {
    let engine = engine();
    let mut tree = Tree::new();
    let view: ViewHandle = Arc::new(Foo);

    let mut theme = Theme::named("sheet");
    theme.set_text_color(Color::BLUE);
    let context = engine
        .bind_view(&mut tree, &view, "Settings", Some(&theme))
        .unwrap();

    let root = tree.root(context.root()).unwrap();
    assert_eq!(root.caption, "Settings");
    assert_eq!(root.theme.name.as_deref(), Some("sheet"));
    assert_eq!(root.theme.text.color, Some(Color::BLUE));
    assert_eq!(root.element_count(), 1);

    let log = call_log();
    let registry = ExpressionRegistry::new();
    register(&tree, &registry, context.root(), 0, 0, Recording::handle("row", &log));
    assert_eq!(context.fetch(&tree, &registry), Ok(1));
}

#[test]
fn test_cleared_element_is_not_fetched() {
    let mut tree = Tree::new();
    let root = two_section_root(&mut tree);
    let log = call_log();
    let registry = ExpressionRegistry::new();
    register(&tree, &registry, root, 0, 0, Recording::handle("a", &log));
    register(&tree, &registry, root, 0, 0, Recording::handle("a", &log));

    let element = tree.element(root, 0, 0).unwrap().id;
    assert_eq!(registry.clear_element(element), 2);
    assert!(registry.is_empty());
    assert_eq!(fetch_root(&tree, root, &registry), Ok(0));
}
