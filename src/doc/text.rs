use serde::{Deserialize, Serialize};

use crate::doc::colors::Color;
use crate::doc::common::Length;

/// Resolved character formatting for a run of text.
///
/// Fields left as `None` are intentionally unresolved: the host formatting
/// layer supplies its own default for them (typeface, theme size, ...). The
/// cascade only fills a field when some level of the spec provided it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Font {
    /// True when no level of the cascade supplied anything.
    pub fn is_unset(&self) -> bool {
        self.family.is_none()
            && self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.color.is_none()
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical anchoring of a text body within its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

/// A run of text with consistent styling within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "Font::is_unset")]
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
            hyperlink: None,
        }
    }
}

/// A paragraph: ordered runs plus paragraph-level formatting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Bullet indentation level; `Some(0)` is a top-level bullet, `None`
    /// means the paragraph carries no bullet at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_level: Option<u8>,
    /// Extra space above the paragraph, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f64>,
    /// Extra space below the paragraph, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f64>,
    /// Line spacing as a multiple of single spacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f64>,
}

/// Interior margins of a text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub left: Length,
    pub right: Length,
    pub top: Length,
    pub bottom: Length,
}

/// The textual content of a shape or table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_anchor: Option<VerticalAnchor>,
}

impl TextBody {
    /// A body holding a single unstyled paragraph.
    pub fn from_plain(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph {
                runs: vec![TextRun::plain(text)],
                ..Paragraph::default()
            }],
            ..TextBody::default()
        }
    }
}
