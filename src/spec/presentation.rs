use serde::{Deserialize, Serialize};

use crate::spec::slide::SlideSpec;

/// Document-level properties written into the output's core properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertiesSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Page size in one of the two supported unit systems. Centimeters convert
/// at the fixed ratio of 2.54 cm per inch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Inches { width_in: f64, height_in: f64 },
    Cm { width_cm: f64, height_cm: f64 },
}

/// The presentation specification proper.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresentationSpec {
    #[serde(default)]
    pub properties: Option<PropertiesSpec>,
    #[serde(default)]
    pub size: Option<SizeSpec>,
    /// The slide list. Its absence is the one fatal structural defect: with
    /// no slides there is nothing to render.
    #[serde(default)]
    pub slides: Option<Vec<SlideSpec>>,
}

/// The root of a specification document: `{ "presentation": { ... } }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RootSpec {
    #[serde(default)]
    pub presentation: Option<PresentationSpec>,
}
