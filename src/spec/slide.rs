use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::spec::shape::ShapeNode;
use crate::spec::style::{ColorSpec, FillSpec};

/// Slide background: either a bare color string (shorthand for a solid
/// fill) or a full fill block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundSpec {
    Fill(FillSpec),
    Color(ColorSpec),
}

/// Content for a numbered layout placeholder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceholderContentSpec {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Speaker notes: one string or an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotesSpec {
    Plain(String),
    Paragraphs(Vec<String>),
}

/// One slide of the specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Index into the document's layout list; 6 is the blank layout.
    #[serde(default = "default_layout")]
    pub layout: usize,
    #[serde(default)]
    pub background: Option<BackgroundSpec>,
    #[serde(default)]
    pub shapes: Vec<ShapeNode>,
    /// Placeholder content keyed by the placeholder's index, order
    /// preserved as authored.
    #[serde(default)]
    pub placeholders: IndexMap<String, PlaceholderContentSpec>,
    #[serde(default)]
    pub notes: Option<NotesSpec>,
}

fn default_layout() -> usize {
    6
}
