//! Horizon Dialog Contacts Example
//!
//! Binds a list of contacts as a view enumerable, expands one row into its
//! detail view and prints the resulting tree.
//!
//! Run with: RUST_LOG=horizon_dialog=trace cargo run -p horizon-dialog --example contacts

use std::sync::Arc;

use horizon_dialog::prelude::*;
use horizon_dialog::{TreeDebug, TreeFormatOptions};
use parking_lot::RwLock;

struct Contact {
    name: String,
    email: String,
}

impl Model for Contact {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }

    fn display_text(&self) -> String {
        self.name.clone()
    }
}

/// Detail view for a single contact.
#[derive(Default)]
struct ContactView {
    context: RwLock<DataValue>,
}

impl View for ContactView {
    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }

    fn data_context_holder(&self) -> Option<&dyn DataContextHolder> {
        Some(self)
    }
}

impl DataContextHolder for ContactView {
    fn set_data_context(&self, value: DataValue) {
        *self.context.write() = value;
    }

    fn data_context(&self) -> DataValue {
        self.context.read().clone()
    }
}

/// Lays a contact view out as two rows.
fn parse_contact(view: &ViewHandle, title: &str, theme: Option<&Theme>) -> Result<Root> {
    let mut section = Section::with_caption("Contact");
    if let Some(contact_view) = view.downcast_ref::<ContactView>()
        && let Some(contact) = contact_view.data_context().downcast_model::<Contact>()
    {
        section.push(Element::new(TypeTag::of::<StringElement>()).with_caption(contact.name.as_str()));
        section.push(Element::new(TypeTag::of::<StringElement>()).with_caption(contact.email.as_str()));
    }

    let mut root = Root::new(title).with_theme(Theme::derive(theme));
    root.add_section(section);
    Ok(root)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut registry = TypeRegistry::with_builtins();
    registry.register_view::<ContactView>();
    let engine = BindingEngine::with_parts(
        registry,
        Arc::new(FnViewParser::new(parse_contact)),
        EngineConfig::new().with_theme_before_sections(true),
    )?;

    let contacts: Vec<DataValue> = [("Ada", "ada@example.com"), ("Grace", "grace@example.com")]
        .into_iter()
        .map(|(name, email)| {
            DataValue::model(Contact {
                name: name.to_string(),
                email: email.to_string(),
            })
        })
        .collect();

    let mut theme = Theme::named("contacts");
    theme.set_text_color(Color::DARK_GRAY);
    theme.accessory = Accessory::DisclosureIndicator;

    let root = Root::new("Contacts")
        .with_binding(
            ViewBinding::new(DataContextCode::ViewEnumerable)
                .with_view_type(TypeTag::of::<ContactView>()),
        )
        .with_data_context(contacts)
        .with_theme(theme);

    let mut tree = Tree::new();
    let Some(id) = engine.build(&mut tree, &root)? else {
        return Ok(());
    };
    engine.expand_element(&mut tree, id, 0, 1)?;

    println!("{}", TreeDebug::new().display(&tree));
    println!("{}", TreeDebug::with_options(TreeFormatOptions::minimal()).format_root(&tree, id)?);
    Ok(())
}
