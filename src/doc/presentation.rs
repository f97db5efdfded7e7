use serde::{Deserialize, Serialize};

use crate::doc::common::Length;
use crate::doc::page::Slide;

/// Document-level core properties (title, author, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// The page size shared by every slide in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width: Length,
    pub height: Length,
}

impl Default for PageSize {
    /// 16:9 widescreen, 13.333 × 7.5 inches.
    fn default() -> Self {
        PageSize {
            width: Length::from_inches(40.0 / 3.0),
            height: Length::from_inches(7.5),
        }
    }
}

/// A fully rendered presentation document, ready for serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub properties: CoreProperties,
    #[serde(default)]
    pub page_size: PageSize,
    pub slides: Vec<Slide>,
}
