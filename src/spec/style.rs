use serde::{Deserialize, Serialize};

/// A color as written in a specification.
///
/// Accepted forms: a hex string (`"#2ecc71"` or `"2ecc71"`), a theme token
/// (`"accent1"`), an explicit `{r, g, b}` object, an `{rgb: [r, g, b]}`
/// triple, or `{hex: "..."}`. Anything else is captured by `Other` and
/// resolved to black with a diagnostic, since a malformed color must never abort
/// a multi-slide render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(String),
    Rgb { r: u8, g: u8, b: u8 },
    RgbTriple { rgb: [u8; 3] },
    Hex { hex: String },
    Other(serde_json::Value),
}

/// One gradient stop; position is normalized 0..=1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStopSpec {
    pub position: f64,
    pub color: ColorSpec,
}

/// A fill as written in a specification. Absence of the whole block means
/// "engine default for this shape kind", never "no fill".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillSpec {
    Solid {
        #[serde(default)]
        color: Option<ColorSpec>,
    },
    Gradient {
        #[serde(default)]
        stops: Vec<GradientStopSpec>,
    },
    Pattern {
        #[serde(default)]
        pattern: Option<String>,
        #[serde(default)]
        fore_color: Option<ColorSpec>,
        #[serde(default)]
        back_color: Option<ColorSpec>,
    },
    Picture {
        path: String,
    },
    None,
}

/// A line / border as written in a specification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSpec {
    #[serde(default)]
    pub color: Option<ColorSpec>,
    /// Line width in points.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub dash: Option<String>,
    /// When set, the line resolves to "no line" regardless of other fields.
    #[serde(default)]
    pub transparent: bool,
}

/// Character formatting as written in a specification. Every field optional;
/// the cascade merges run, paragraph, shape and engine-default levels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontSpec {
    #[serde(default)]
    pub name: Option<String>,
    /// Size in points.
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub italic: Option<bool>,
    #[serde(default)]
    pub underline: Option<bool>,
    #[serde(default)]
    pub color: Option<ColorSpec>,
}

impl FontSpec {
    /// Returns `self` with any unset field taken from `fallback`.
    /// This is the single merge step the cascade is built from.
    pub fn or(&self, fallback: &FontSpec) -> FontSpec {
        FontSpec {
            name: self.name.clone().or_else(|| fallback.name.clone()),
            size: self.size.or(fallback.size),
            bold: self.bold.or(fallback.bold),
            italic: self.italic.or(fallback.italic),
            underline: self.underline.or(fallback.underline),
            color: self.color.clone().or_else(|| fallback.color.clone()),
        }
    }
}

/// Paragraph formatting as written in a specification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParagraphSpec {
    #[serde(default)]
    pub alignment: Option<String>,
    /// Extra space above, in points.
    #[serde(default)]
    pub space_before: Option<f64>,
    /// Extra space below, in points.
    #[serde(default)]
    pub space_after: Option<f64>,
    /// Multiple of single line spacing.
    #[serde(default)]
    pub line_spacing: Option<f64>,
}

/// Shadow as written in a specification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowSpec {
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub color: Option<ColorSpec>,
    /// "outer" (default) or "inner".
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Text frame configuration: interior margins, wrapping, vertical anchor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextFrameSpec {
    /// Margins in inches.
    #[serde(default)]
    pub margin_left: Option<f64>,
    #[serde(default)]
    pub margin_right: Option<f64>,
    #[serde(default)]
    pub margin_top: Option<f64>,
    #[serde(default)]
    pub margin_bottom: Option<f64>,
    #[serde(default)]
    pub word_wrap: Option<bool>,
    /// "top", "middle" or "bottom".
    #[serde(default)]
    pub vertical_anchor: Option<String>,
}

/// The style block shared by most shape kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleSpec {
    #[serde(default)]
    pub fill: Option<FillSpec>,
    #[serde(default)]
    pub line: Option<LineSpec>,
    #[serde(default)]
    pub font: Option<FontSpec>,
    #[serde(default)]
    pub shadow: Option<ShadowSpec>,
}
