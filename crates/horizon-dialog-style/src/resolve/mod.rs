//! Theme resolution.
//!
//! Two directions of inheritance are supported:
//!
//! - [`Theme::merge_from`] pulls attributes from a parent theme (the
//!   structural parent of a node in the list tree)
//! - [`Theme::adopt_from_cell`] pulls attributes from a cell the toolkit has
//!   already realized
//!
//! [`Theme::merge_from`]: crate::theme::Theme::merge_from
//! [`Theme::adopt_from_cell`]: crate::theme::Theme::adopt_from_cell

mod cell;
mod merge;
