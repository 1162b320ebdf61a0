//! Labels that annotate source spans within a diagnostic.

use netsim_source::Span;
use serde::{Deserialize, Serialize};

/// Visual style of a label.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LabelStyle {
    /// Marks the main error location with `^^^`.
    Primary,
    /// Marks related context.
    Secondary,
}

/// An annotated span inside a diagnostic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    /// The annotated span.
    pub span: Span,
    /// Text printed next to the underline.
    pub message: String,
    /// Primary or secondary.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    /// Creates a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }
}
