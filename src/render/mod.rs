//! The rendering pipeline: specification in, populated document model out.
//!
//! Rendering is single-threaded and strictly sequential: one linear pass
//! over presentation → slides → shapes. The only blocking operation is
//! remote asset resolution, which is synchronous with a fixed timeout and
//! degrades to placeholders on failure.

pub mod chart;
pub mod flowchart;
pub mod geometry;
pub mod shapes;
pub mod slide;
pub mod style;
pub mod table;

use std::path::{Path, PathBuf};

use crate::assets::{AssetResolver, DefaultAssetResolver};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::doc::common::Length;
use crate::doc::presentation::{CoreProperties, Document, PageSize};
use crate::errors::{EngineError, Result};
use crate::spec::presentation::{RootSpec, SizeSpec};
use flowchart::FlowchartStyles;
use style::{Palette, StyleResolver};

/// Shared read-only state handed down to every builder in one render pass.
pub struct RenderContext<'a> {
    pub resolver: &'a StyleResolver,
    pub flowchart: &'a FlowchartStyles,
    pub assets: &'a dyn AssetResolver,
    pub base_dir: &'a Path,
    pub page_size: PageSize,
}

/// The result of a render pass: the populated document plus every
/// recoverable problem encountered along the way.
#[derive(Debug)]
pub struct RenderOutcome {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Top-level orchestrator. Construct once, render any number of
/// specifications; no state crosses render calls.
pub struct PresentationBuilder {
    resolver: StyleResolver,
    flowchart_styles: FlowchartStyles,
    assets: Box<dyn AssetResolver>,
    base_dir: PathBuf,
}

impl Default for PresentationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationBuilder {
    pub fn new() -> Self {
        Self {
            resolver: StyleResolver::default(),
            flowchart_styles: FlowchartStyles::default(),
            assets: Box::new(DefaultAssetResolver),
            base_dir: PathBuf::from("."),
        }
    }

    /// Replaces the theme palette used for color resolution.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.resolver = StyleResolver::new(palette);
        self
    }

    /// Replaces the flowchart kind → style table.
    pub fn with_flowchart_styles(mut self, styles: FlowchartStyles) -> Self {
        self.flowchart_styles = styles;
        self
    }

    /// Injects an asset resolver (tests stub this out).
    pub fn with_assets(mut self, assets: Box<dyn AssetResolver>) -> Self {
        self.assets = assets;
        self
    }

    /// Base directory relative image paths resolve against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Renders a parsed specification into a document model.
    ///
    /// Fatal only on a structurally unusable root; everything below the
    /// slide list degrades per the skip-and-warn policy and surfaces in the
    /// outcome's diagnostics.
    pub fn render(&self, root: &RootSpec) -> Result<RenderOutcome> {
        let spec = root
            .presentation
            .as_ref()
            .ok_or_else(|| EngineError::InvalidSpec("no 'presentation' object".to_string()))?;
        let slides = spec
            .slides
            .as_ref()
            .ok_or_else(|| EngineError::InvalidSpec("presentation has no slide list".to_string()))?;

        let mut diags = Diagnostics::new();

        let properties = spec
            .properties
            .as_ref()
            .map(|p| CoreProperties {
                title: p.title.clone(),
                author: p.author.clone(),
                subject: p.subject.clone(),
                keywords: p.keywords.clone(),
                comments: p.comments.clone(),
                category: p.category.clone(),
            })
            .unwrap_or_default();

        let page_size = match spec.size {
            None => PageSize::default(),
            Some(SizeSpec::Inches {
                width_in,
                height_in,
            }) => PageSize {
                width: Length::from_inches(width_in),
                height: Length::from_inches(height_in),
            },
            Some(SizeSpec::Cm {
                width_cm,
                height_cm,
            }) => PageSize {
                width: Length::from_inches(geometry::cm_to_inches(width_cm)),
                height: Length::from_inches(geometry::cm_to_inches(height_cm)),
            },
        };

        let rc = RenderContext {
            resolver: &self.resolver,
            flowchart: &self.flowchart_styles,
            assets: self.assets.as_ref(),
            base_dir: &self.base_dir,
            page_size,
        };

        let mut document = Document {
            properties,
            page_size,
            slides: Vec::with_capacity(slides.len()),
        };
        for (index, slide_spec) in slides.iter().enumerate() {
            document
                .slides
                .push(slide::build_slide(slide_spec, index, &rc, &mut diags));
        }

        Ok(RenderOutcome {
            document,
            diagnostics: diags.into_entries(),
        })
    }

    /// Parses a JSON specification string and renders it.
    pub fn render_json(&self, json: &str) -> Result<RenderOutcome> {
        let root: RootSpec = serde_json::from_str(json)?;
        self.render(&root)
    }
}

/// Serializes a rendered document as JSON to `path`, all-or-nothing.
/// Missing parent directories are created.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetError;
    use crate::doc::elements::ElementKind;
    use serde_json::json;
    use std::collections::HashSet;

    /// Test resolver: succeeds for registered names, fails for the rest.
    struct StaticAssets {
        known: HashSet<String>,
    }

    impl StaticAssets {
        fn with(names: &[&str]) -> Box<Self> {
            Box::new(Self {
                known: names.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    impl AssetResolver for StaticAssets {
        fn fetch(&self, location: &str, _base_dir: &Path) -> std::result::Result<Vec<u8>, AssetError> {
            if self.known.contains(location) {
                Ok(vec![0u8; 4])
            } else {
                Err(AssetError::NotFound(location.to_string()))
            }
        }
    }

    fn builder() -> PresentationBuilder {
        PresentationBuilder::new().with_assets(StaticAssets::with(&["ok.png", "bg.png"]))
    }

    #[test]
    fn missing_slide_list_is_fatal() {
        let spec = json!({"presentation": {}}).to_string();
        let err = builder().render_json(&spec).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSpec(_)));

        let spec = json!({}).to_string();
        let err = builder().render_json(&spec).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSpec(_)));
    }

    #[test]
    fn properties_and_inch_size_are_applied() {
        let spec = json!({
            "presentation": {
                "properties": {"title": "Deck", "author": "Author"},
                "size": {"width_in": 16.0, "height_in": 9.0},
                "slides": []
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        assert_eq!(outcome.document.properties.title.as_deref(), Some("Deck"));
        assert_eq!(outcome.document.page_size.width, Length::from_inches(16.0));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn cm_size_converts_at_fixed_ratio() {
        let spec = json!({
            "presentation": {
                "size": {"width_cm": 33.867, "height_cm": 19.05},
                "slides": []
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let width_in = outcome.document.page_size.width.inches();
        assert!((width_in - 33.867 / 2.54).abs() < 1e-6);
        assert_eq!(
            outcome.document.page_size.height,
            Length::from_inches(7.5)
        );
    }

    #[test]
    fn unknown_shape_kind_warns_and_render_continues() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [
                        {"type": "hologram", "x": 1, "y": 1},
                        {"type": "text", "text": "still here"}
                    ]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].message.contains("hologram"));
        assert_eq!(outcome.document.slides[0].elements.len(), 1);
    }

    #[test]
    fn missing_image_substitutes_placeholder_and_continues() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [
                        {"type": "image", "path": "missing.png", "x": 1, "y": 1, "w": 2, "h": 2},
                        {"type": "text", "text": "after the image"}
                    ]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let elements = &outcome.document.slides[0].elements;
        assert_eq!(elements.len(), 2);
        let ElementKind::AutoShape(placeholder) = &elements[0].kind else {
            panic!("expected placeholder autoshape");
        };
        let label = &placeholder.body.as_ref().unwrap().paragraphs[0].runs[0].text;
        assert!(label.contains("missing.png"));
        assert!(matches!(elements[1].kind, ElementKind::TextBox(_)));
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn fetched_image_becomes_picture_element() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{"type": "image", "path": "ok.png", "x": 0, "y": 0, "w": 4, "h": 3}]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let elements = &outcome.document.slides[0].elements;
        assert!(matches!(elements[0].kind, ElementKind::Picture(_)));
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn background_picture_lands_behind_all_shapes() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "background": {"type": "picture", "path": "bg.png"},
                    "shapes": [{"type": "text", "text": "on top"}]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let slide = &outcome.document.slides[0];
        assert!(matches!(slide.elements[0].kind, ElementKind::Picture(_)));
        assert!(matches!(slide.elements[1].kind, ElementKind::TextBox(_)));
        // The background picture stretches to the full page.
        assert_eq!(slide.elements[0].rect.width, outcome.document.page_size.width);
    }

    #[test]
    fn solid_string_background_and_notes() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "background": "#112233",
                    "shapes": [],
                    "notes": ["first point", "second point"]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let slide = &outcome.document.slides[0];
        assert!(matches!(slide.background, Some(crate::doc::fill::Fill::Solid { .. })));
        assert_eq!(
            slide.notes.as_deref(),
            Some(["first point".to_string(), "second point".to_string()].as_slice())
        );
    }

    #[test]
    fn placeholders_fill_by_index() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "layout": 0,
                    "placeholders": {
                        "0": {"text": "Title text"},
                        "1": {"image_path": "ok.png"},
                        "nope": {"text": "skipped"}
                    },
                    "shapes": []
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let slide = &outcome.document.slides[0];
        assert_eq!(slide.layout_index, 0);
        assert_eq!(slide.placeholders.len(), 2);
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn default_layout_is_blank() {
        let spec = json!({
            "presentation": {"slides": [{"shapes": []}]}
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        assert_eq!(outcome.document.slides[0].layout_index, 6);
    }

    #[test]
    fn flowchart_end_to_end_through_dispatcher() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{
                        "type": "flowchart",
                        "x": 0, "y": 0, "w": 10, "h": 7,
                        "elements": [
                            {"id": "s", "flowchart_type": "start", "text": "Start",
                             "x": 2, "y": 1, "w": 2, "h": 1},
                            {"id": "e", "flowchart_type": "end", "text": "End",
                             "x": 2, "y": 3.5, "w": 2, "h": 1}
                        ],
                        "connections": [
                            {"from": "s", "to": "e", "label": "go"}
                        ]
                    }]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        // Two nodes, one connector, one label box.
        assert_eq!(outcome.document.slides[0].elements.len(), 4);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn group_nests_children() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{
                        "type": "group",
                        "x": 1, "y": 1, "w": 6, "h": 4,
                        "shapes": [
                            {"type": "text", "text": "child"},
                            {"type": "autoshape", "shape_type": "OVAL"}
                        ]
                    }]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let ElementKind::Group(group) = &outcome.document.slides[0].elements[0].kind else {
            panic!("expected group");
        };
        assert_eq!(group.children.len(), 2);
    }

    #[test]
    fn freeform_curve_degrades_to_line() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{
                        "type": "freeform",
                        "x": 0, "y": 0, "w": 4, "h": 4,
                        "points": [
                            {"x": 0.0, "y": 0.0},
                            {"x": 1.0, "y": 1.0, "action": "line_to"},
                            {"x": 2.0, "y": 0.5, "action": "curve_to"}
                        ]
                    }]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let ElementKind::Freeform(freeform) = &outcome.document.slides[0].elements[0].kind else {
            panic!("expected freeform");
        };
        use crate::doc::elements::PathAction;
        assert_eq!(freeform.path[0].action, PathAction::MoveTo);
        assert_eq!(freeform.path[2].action, PathAction::LineTo);
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn bullet_items_carry_their_level() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{
                        "type": "bullet",
                        "items": ["alpha", "beta"],
                        "level": 1,
                        "font": {"size": 16}
                    }]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let ElementKind::TextBox(text_box) = &outcome.document.slides[0].elements[0].kind else {
            panic!("expected bullet textbox");
        };
        assert_eq!(text_box.body.paragraphs.len(), 2);
        for paragraph in &text_box.body.paragraphs {
            assert_eq!(paragraph.bullet_level, Some(1));
            assert_eq!(paragraph.runs[0].font.size, Some(16.0));
        }
    }

    #[test]
    fn unknown_autoshape_type_warns_and_skips() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{"type": "autoshape", "shape_type": "MOEBIUS_STRIP"}]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        assert!(outcome.document.slides[0].elements.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].message.contains("MOEBIUS_STRIP"));
    }

    #[test]
    fn rich_text_runs_cascade_and_keep_hyperlinks() {
        let spec = json!({
            "presentation": {
                "slides": [{
                    "shapes": [{
                        "type": "text",
                        "font": {"size": 12, "name": "Arial"},
                        "text": [{
                            "runs": [
                                {"text": "plain "},
                                {"text": "link", "hyperlink": "https://example.com",
                                 "font": {"bold": true}}
                            ],
                            "alignment": "center"
                        }]
                    }]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let ElementKind::TextBox(text_box) = &outcome.document.slides[0].elements[0].kind else {
            panic!("expected textbox");
        };
        let paragraph = &text_box.body.paragraphs[0];
        assert_eq!(
            paragraph.alignment,
            Some(crate::doc::text::Alignment::Center)
        );
        // Shape-level font flows into every run; the run-level bold only
        // into the second.
        assert_eq!(paragraph.runs[0].font.size, Some(12.0));
        assert_eq!(paragraph.runs[0].font.bold, None);
        assert_eq!(paragraph.runs[1].font.bold, Some(true));
        assert_eq!(paragraph.runs[1].font.family.as_deref(), Some("Arial"));
        assert_eq!(
            paragraph.runs[1].hyperlink.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn rendered_document_round_trips_through_json() {
        let spec = json!({
            "presentation": {
                "properties": {"title": "Round trip"},
                "slides": [{
                    "shapes": [
                        {"type": "text", "text": ["line one", "line two"],
                         "font": {"size": 20, "bold": true, "color": "#222222"}},
                        {"type": "table", "rows": 2, "cols": 2,
                         "data": [["a", "b"], ["c", "d"]]}
                    ]
                }]
            }
        })
        .to_string();
        let outcome = builder().render_json(&spec).unwrap();
        let json = serde_json::to_string(&outcome.document).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome.document);
    }
}
