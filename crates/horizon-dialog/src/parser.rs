//! The view-parsing seam.
//!
//! Discovering the bindable members of a view is left to the application.
//! The engine only needs something that turns a view into a [`Root`].

use std::fmt;

use horizon_dialog_core::{Result, Root, ViewHandle};
use horizon_dialog_style::theme::Theme;

/// Turns a realizable view into a presentation root.
pub trait ViewParser: Send + Sync {
    /// Parse `view` into a root titled `title`, styled from `theme`.
    fn parse(&self, view: &ViewHandle, title: &str, theme: Option<&Theme>) -> Result<Root>;
}

/// A [`ViewParser`] backed by a closure.
///
/// # Example
///
/// ```
/// use horizon_dialog::prelude::*;
///
/// let parser = FnViewParser::new(|_view, title, theme| {
///     Ok(Root::new(title).with_theme(Theme::derive(theme)))
/// });
/// # let _ = parser;
/// ```
pub struct FnViewParser<F> {
    parse: F,
}

impl<F> FnViewParser<F>
where
    F: Fn(&ViewHandle, &str, Option<&Theme>) -> Result<Root> + Send + Sync,
{
    pub fn new(parse: F) -> Self {
        Self { parse }
    }
}

impl<F> ViewParser for FnViewParser<F>
where
    F: Fn(&ViewHandle, &str, Option<&Theme>) -> Result<Root> + Send + Sync,
{
    fn parse(&self, view: &ViewHandle, title: &str, theme: Option<&Theme>) -> Result<Root> {
        (self.parse)(view, title, theme)
    }
}

impl<F> fmt::Debug for FnViewParser<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnViewParser").finish_non_exhaustive()
    }
}
