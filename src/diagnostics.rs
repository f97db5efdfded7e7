//! Structured reporting for recoverable render problems.
//!
//! The engine's policy is "best-effort complete deck": a bad shape, a broken
//! connection reference or a failed image fetch is skipped, not fatal. Every
//! such skip is recorded here so callers can inspect what was dropped instead
//! of scraping console output.

use serde::Serialize;
use std::fmt;

/// Where in the specification a diagnostic originated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticContext {
    /// Zero-based slide index, if the problem is scoped to a slide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<usize>,
    /// Zero-based shape index within the slide, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<usize>,
}

impl DiagnosticContext {
    pub fn slide(index: usize) -> Self {
        Self {
            slide: Some(index),
            shape: None,
        }
    }

    pub fn shape(slide: usize, shape: usize) -> Self {
        Self {
            slide: Some(slide),
            shape: Some(shape),
        }
    }
}

impl fmt::Display for DiagnosticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.slide, self.shape) {
            (Some(s), Some(sh)) => write!(f, "slide {}, shape {}", s + 1, sh + 1),
            (Some(s), None) => write!(f, "slide {}", s + 1),
            _ => write!(f, "presentation"),
        }
    }
}

/// One recoverable problem encountered during rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(flatten)]
    pub context: DiagnosticContext,
    pub message: String,
}

/// Collector for [`Diagnostic`] entries over one render pass.
///
/// Warnings are mirrored to the `log` facade so CLI users still see them on
/// the console, but the entries themselves travel with the render result.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a recoverable skip. The render continues.
    pub fn warn(&mut self, context: DiagnosticContext, message: impl Into<String>) {
        let message = message.into();
        log::warn!("[{}] {}", context, message);
        self.entries.push(Diagnostic { context, message });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_display_is_one_based() {
        let ctx = DiagnosticContext::shape(0, 2);
        assert_eq!(ctx.to_string(), "slide 1, shape 3");
        assert_eq!(DiagnosticContext::default().to_string(), "presentation");
    }

    #[test]
    fn warn_accumulates_entries() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());
        diags.warn(DiagnosticContext::slide(1), "unknown shape type 'blob'");
        diags.warn(DiagnosticContext::default(), "something else");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.entries()[0].message, "unknown shape type 'blob'");
    }
}
