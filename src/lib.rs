//! deckforge compiles a declarative presentation specification into a
//! populated, serializable presentation document model.
//!
//! The pipeline is strictly sequential: one specification produces one
//! [`doc::presentation::Document`] via a single pass over
//! presentation → slides → shapes. Recoverable problems (an unknown shape
//! kind, a broken flowchart connection, a missing image) never abort the
//! pass; they surface in the returned diagnostics list.

pub mod assets;
pub mod diagnostics;
pub mod doc;
pub mod errors;
pub mod render;
pub mod spec;

pub use diagnostics::Diagnostic;
pub use doc::presentation::Document;
pub use errors::{EngineError, Result};
pub use render::{save_document, PresentationBuilder, RenderOutcome};
pub use spec::RootSpec;
