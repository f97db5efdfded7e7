use serde::{Deserialize, Serialize};

use crate::doc::elements::Element;
use crate::doc::fill::Fill;

/// Content placed into a numbered layout placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderContent {
    Text(String),
    Image { source: String },
}

/// A filled placeholder: the layout slot index plus its resolved content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderFill {
    pub index: u32,
    pub content: PlaceholderContent,
}

/// A rendered slide.
///
/// Element order is draw order: index 0 is drawn first (bottom-most), which
/// is why a picture background is inserted at the front of the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub layout_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Fill>,
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub placeholders: Vec<PlaceholderFill>,
    /// Speaker notes, one entry per paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl Slide {
    pub fn new(layout_index: usize) -> Self {
        Self {
            layout_index,
            background: None,
            elements: Vec::new(),
            placeholders: Vec::new(),
            notes: None,
        }
    }

    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Inserts an element at the lowest draw position (behind all others).
    pub fn push_element_bottom(&mut self, element: Element) {
        self.elements.insert(0, element);
    }
}
