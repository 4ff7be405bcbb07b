//! Prelude module for Horizon Dialog.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_dialog::prelude::*;
//! ```

// ============================================================================
// Engine
// ============================================================================

pub use crate::{BindingContext, BindingEngine, EngineConfig, FnViewParser, ViewParser};

// ============================================================================
// Expressions
// ============================================================================

pub use crate::{BindingExpression, BindingExpressionSource, ExpressionRegistry};

// ============================================================================
// Node model
// ============================================================================

pub use horizon_dialog_core::prelude::*;

// ============================================================================
// Themes
// ============================================================================

pub use horizon_dialog_style::prelude::*;
