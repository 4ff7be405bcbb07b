//! Property tests for theme merging and the exclusive image groups.

use std::sync::Arc;

use horizon_dialog_style::prelude::*;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

fn alignment() -> impl Strategy<Value = TextAlignment> {
    prop_oneof![
        Just(TextAlignment::Left),
        Just(TextAlignment::Center),
        Just(TextAlignment::Right),
        Just(TextAlignment::Justified),
        Just(TextAlignment::Natural),
    ]
}

fn font() -> impl Strategy<Value = Font> {
    (8.0f32..32.0, any::<bool>()).prop_map(|(size, bold)| {
        if bold {
            Font::bold_system(size)
        } else {
            Font::system(size)
        }
    })
}

prop_compose! {
    fn parent_theme()(
        name in proptest::option::of("[a-z]{1,8}"),
        text_alignment in alignment(),
        detail_alignment in alignment(),
        placeholder_color in proptest::option::of(color()),
        separator_color in proptest::option::of(color()),
        bar_tint_color in proptest::option::of(color()),
        text_color in proptest::option::of(color()),
        text_font in proptest::option::of(font()),
        detail_shadow in proptest::option::of(color()),
        background in proptest::option::of(color()),
    ) -> Theme {
        let mut theme = Theme::default();
        theme.name = name;
        theme.text.alignment = text_alignment;
        theme.detail_text.alignment = detail_alignment;
        theme.placeholder_color = placeholder_color;
        theme.separator_color = separator_color;
        theme.bar_tint_color = bar_tint_color;
        theme.text.color = text_color;
        theme.text.font = text_font;
        theme.detail_text.shadow_color = detail_shadow;
        if let Some(background) = background {
            theme.set_cell_background_color(background);
        }
        theme
    }
}

#[derive(Debug, Clone)]
enum GroupOp {
    IconBitmap,
    IconUri,
    ClearIcon,
    BackgroundBitmap,
    BackgroundUri,
    BackgroundColor(Color),
    ClearBackground,
}

fn group_op() -> impl Strategy<Value = GroupOp> {
    prop_oneof![
        Just(GroupOp::IconBitmap),
        Just(GroupOp::IconUri),
        Just(GroupOp::ClearIcon),
        Just(GroupOp::BackgroundBitmap),
        Just(GroupOp::BackgroundUri),
        color().prop_map(GroupOp::BackgroundColor),
        Just(GroupOp::ClearBackground),
    ]
}

fn apply(theme: &mut Theme, op: &GroupOp) {
    let uri = Url::parse("https://example.com/image.png").unwrap();
    match op {
        GroupOp::IconBitmap => theme.set_cell_image_icon(Bitmap::solid(1, 1, Color::RED)),
        GroupOp::IconUri => theme.set_cell_image_icon_uri(uri),
        GroupOp::ClearIcon => theme.clear_cell_icon(),
        GroupOp::BackgroundBitmap => {
            theme.set_cell_background_image(Bitmap::solid(1, 1, Color::BLUE))
        }
        GroupOp::BackgroundUri => theme.set_cell_background_uri(uri),
        GroupOp::BackgroundColor(color) => theme.set_cell_background_color(*color),
        GroupOp::ClearBackground => theme.clear_cell_background(),
    }
}

proptest! {
    #[test]
    fn test_fresh_child_takes_parent_values(parent in parent_theme()) {
        let child = Theme::derive(Some(&parent));

        prop_assert_eq!(&child.name, &parent.name);
        prop_assert_eq!(child.text.alignment, parent.text.alignment);
        prop_assert_eq!(child.detail_text.alignment, parent.detail_text.alignment);
        prop_assert_eq!(child.placeholder_color, parent.placeholder_color);
        prop_assert_eq!(child.separator_color, parent.separator_color);
        prop_assert_eq!(child.bar_tint_color, parent.bar_tint_color);
        prop_assert_eq!(child.text.color, parent.text.color);
        prop_assert_eq!(&child.text.font, &parent.text.font);
        prop_assert_eq!(child.detail_text.shadow_color, parent.detail_text.shadow_color);
        prop_assert_eq!(child.cell_background_color(), parent.cell_background_color());
    }

    #[test]
    fn test_set_child_values_are_kept(
        parent in parent_theme(),
        own_separator in color(),
        own_text_color in color(),
    ) {
        let mut child = Theme::default();
        child.separator_color = Some(own_separator);
        child.text.color = Some(own_text_color);

        child.merge_from(Some(&parent));

        prop_assert_eq!(child.separator_color, Some(own_separator));
        prop_assert_eq!(child.text.color, Some(own_text_color));
        prop_assert_eq!(&child.name, &parent.name);
    }

    #[test]
    fn test_merging_nothing_changes_nothing(parent in parent_theme()) {
        let mut theme = parent.clone();
        theme.merge_from(None);

        prop_assert_eq!(&theme.name, &parent.name);
        prop_assert_eq!(theme.text.alignment, parent.text.alignment);
        prop_assert_eq!(theme.placeholder_color, parent.placeholder_color);
        prop_assert_eq!(theme.cell_background(), parent.cell_background());
    }

    #[test]
    fn test_image_groups_hold_at_most_one_source(ops in proptest::collection::vec(group_op(), 0..24)) {
        let mut theme = Theme::default();
        for op in &ops {
            apply(&mut theme, op);

            let icons = [
                theme.cell_image_icon().is_some(),
                theme.cell_image_icon_uri().is_some(),
            ];
            let backgrounds = [
                theme.cell_background_image().is_some(),
                theme.cell_background_uri().is_some(),
                theme.cell_background_color().is_some(),
            ];
            prop_assert!(icons.iter().filter(|set| **set).count() <= 1);
            prop_assert!(backgrounds.iter().filter(|set| **set).count() <= 1);
        }
    }
}

#[test]
fn test_replacing_background_releases_bitmap_once() {
    init_tracing();
    let bitmap = Bitmap::solid(4, 4, Color::GREEN);
    let mut theme = Theme::default();
    theme.set_cell_background_image(bitmap.clone());
    assert_eq!(bitmap.owner_count(), 2);

    theme.set_cell_background_color(Color::BLACK);
    assert_eq!(bitmap.owner_count(), 1);

    theme.clear_cell_background();
    assert_eq!(bitmap.owner_count(), 1);
}

#[test]
fn test_inherited_bitmap_is_shared_not_copied() {
    init_tracing();
    let bitmap = Bitmap::solid(2, 2, Color::RED);
    let mut parent = Theme::default();
    parent.set_cell_image_icon(bitmap.clone());

    let child = Theme::derive(Some(&parent));
    assert_eq!(bitmap.owner_count(), 3);
    assert!(child.cell_image_icon().is_some_and(|b| b.ptr_eq(&bitmap)));

    drop(parent);
    drop(child);
    assert_eq!(bitmap.owner_count(), 1);
}

#[test]
fn test_inherited_colors_clear_labels_down_the_tree() {
    init_tracing();
    let label = Label::shared();
    label.set_background(Color::RED);

    let mut root = Theme::named("root");
    root.set_text_color(Color::BLACK);

    let mut section = Theme::default();
    section.text.label = Some(Arc::clone(&label));
    section.merge_from(Some(&root));
    assert_eq!(label.background(), Some(Color::TRANSPARENT));

    label.set_background(Color::RED);
    let row = Theme::derive(Some(&section));
    assert_eq!(row.text.color, Some(Color::BLACK));
    assert_eq!(label.background(), Some(Color::TRANSPARENT));
}
