//! The declarative input specification model.
//!
//! Everything here is deserialized wholesale from the caller's JSON and is
//! immutable input to the render pass. Optional fields mean "use the engine
//! default", never "absent value"; the resolution rules live in
//! [`crate::render`].

pub mod chart;
pub mod flowchart;
pub mod presentation;
pub mod shape;
pub mod slide;
pub mod style;
pub mod table;

pub use presentation::{PresentationSpec, RootSpec};
pub use shape::{ShapeNode, ShapeSpec};
pub use slide::SlideSpec;
