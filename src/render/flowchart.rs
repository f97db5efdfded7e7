//! The flowchart sub-engine: kind-styled nodes, id-resolved connections and
//! auto-layout helpers.
//!
//! One [`FlowchartEngine::render`] call handles exactly one flowchart shape.
//! The element registry is created inside the call and dropped with it, so
//! ids never leak between flowcharts, not across slides and not between two
//! flowcharts on the same slide.

use std::collections::HashMap;

use crate::diagnostics::{DiagnosticContext, Diagnostics};
use crate::doc::colors::Color;
use crate::doc::common::{Length, Point, Rect};
use crate::doc::elements::{
    AutoShapeElement, AutoShapeKind, ConnectorElement, ConnectorKind, Element, ElementKind,
    TextBoxElement,
};
use crate::doc::fill::{DashStyle, Fill, Outline};
use crate::doc::page::Slide;
use crate::doc::text::{Alignment, Paragraph, TextBody, TextRun, VerticalAnchor};
use crate::render::geometry::{connection_point, midpoint, InchRect, Side};
use crate::render::style::StyleResolver;
use crate::spec::flowchart::{ConnectionSpec, FlowchartElementSpec, FlowchartPayload};
use crate::spec::style::FontSpec;

/// Default visual bundle for one node kind.
#[derive(Debug, Clone)]
pub struct KindStyle {
    pub shape: AutoShapeKind,
    pub fill: Color,
    pub line: Color,
    pub font_color: Color,
    pub font_size: f64,
}

/// The immutable kind → style table. Injected into the engine so callers can
/// swap palettes without touching engine code; the default mirrors the
/// classic flowchart colors (start green, end red, process blue, decision
/// orange, data purple, document teal, fallback grey).
#[derive(Debug, Clone)]
pub struct FlowchartStyles {
    kinds: HashMap<&'static str, KindStyle>,
    fallback: KindStyle,
}

impl Default for FlowchartStyles {
    fn default() -> Self {
        fn style(shape: AutoShapeKind, fill: u32, line: u32, size: f64) -> KindStyle {
            fn rgb(hex: u32) -> Color {
                Color::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
            }
            KindStyle {
                shape,
                fill: rgb(fill),
                line: rgb(line),
                font_color: Color::WHITE,
                font_size: size,
            }
        }

        use AutoShapeKind::*;
        let kinds = HashMap::from([
            ("start", style(Oval, 0x2ecc71, 0x27ae60, 14.0)),
            ("end", style(Oval, 0xe74c3c, 0xc0392b, 14.0)),
            ("process", style(Rectangle, 0x3498db, 0x2980b9, 12.0)),
            ("decision", style(Diamond, 0xf39c12, 0xe67e22, 12.0)),
            ("data", style(Parallelogram, 0x9b59b6, 0x8e44ad, 12.0)),
            ("document", style(FlowchartDocument, 0x1abc9c, 0x16a085, 12.0)),
            (
                "predefined_process",
                style(FlowchartPredefinedProcess, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "internal_storage",
                style(FlowchartInternalStorage, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "manual_input",
                style(FlowchartManualInput, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "manual_operation",
                style(FlowchartManualOperation, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "connector",
                style(FlowchartConnector, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "off_page_connector",
                style(FlowchartOffpageConnector, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "preparation",
                style(FlowchartPreparation, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            ("extract", style(FlowchartExtract, 0x95a5a6, 0x7f8c8d, 12.0)),
            ("merge", style(FlowchartMerge, 0x95a5a6, 0x7f8c8d, 12.0)),
            (
                "stored_data",
                style(FlowchartStoredData, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            ("delay", style(FlowchartDelay, 0x95a5a6, 0x7f8c8d, 12.0)),
            (
                "alternate_process",
                style(FlowchartAlternateProcess, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            ("card", style(FlowchartCard, 0x95a5a6, 0x7f8c8d, 12.0)),
            (
                "punched_tape",
                style(FlowchartPunchedTape, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "summing_junction",
                style(FlowchartSummingJunction, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            ("or", style(FlowchartOr, 0x95a5a6, 0x7f8c8d, 12.0)),
            ("collate", style(FlowchartCollate, 0x95a5a6, 0x7f8c8d, 12.0)),
            ("sort", style(FlowchartSort, 0x95a5a6, 0x7f8c8d, 12.0)),
            (
                "multidocument",
                style(FlowchartMultidocument, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            (
                "terminator",
                style(FlowchartTerminator, 0x95a5a6, 0x7f8c8d, 12.0),
            ),
            ("display", style(FlowchartDisplay, 0x95a5a6, 0x7f8c8d, 12.0)),
        ]);

        let mut fallback = style(Rectangle, 0x95a5a6, 0x7f8c8d, 12.0);
        fallback.font_color = Color::new(0x2c, 0x3e, 0x50);
        FlowchartStyles { kinds, fallback }
    }
}

impl FlowchartStyles {
    pub fn for_kind(&self, kind: &str) -> &KindStyle {
        self.kinds.get(kind).unwrap_or(&self.fallback)
    }
}

// Connector and label defaults.
const CONNECTOR_COLOR: Color = Color::new(0x2c, 0x3e, 0x50);
const LABEL_BORDER_COLOR: Color = Color::new(0xbd, 0xc3, 0xc7);
const DEFAULT_LABEL_W: f64 = 1.0;
const DEFAULT_LABEL_H: f64 = 0.3;

/// Renders flowchart payloads into slide elements.
pub struct FlowchartEngine<'a> {
    styles: &'a FlowchartStyles,
    resolver: &'a StyleResolver,
}

impl<'a> FlowchartEngine<'a> {
    pub fn new(styles: &'a FlowchartStyles, resolver: &'a StyleResolver) -> Self {
        Self { styles, resolver }
    }

    /// Renders one flowchart instance onto `slide`.
    ///
    /// Two passes: every element is built and registered before the first
    /// connection is resolved, so connections may reference siblings
    /// declared after them. A connection naming an unknown id is skipped
    /// with a diagnostic; every other connection still renders.
    pub fn render(
        &self,
        slide: &mut Slide,
        payload: &FlowchartPayload,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) {
        let mut registry: HashMap<&str, InchRect> = HashMap::new();

        for element in &payload.elements {
            let rect = self.build_element(slide, element, ctx, diags);
            registry.insert(element.id.as_str(), rect);
        }

        for connection in &payload.connections {
            self.build_connection(slide, connection, &registry, ctx, diags);
        }
    }

    fn build_element(
        &self,
        slide: &mut Slide,
        element: &FlowchartElementSpec,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> InchRect {
        let kind = element.kind.as_deref().unwrap_or("process");
        let style = self.styles.for_kind(kind);
        let rect = InchRect::new(element.x, element.y, element.w, element.h);

        let fill = self.resolver.resolve_fill(
            element.style.fill.as_ref(),
            Fill::Solid { color: style.fill },
            ctx,
            diags,
        );
        let outline = self.resolver.resolve_line(
            element.style.line.as_ref(),
            Some(Outline {
                color: style.line,
                weight: Length::from_points(2.0),
                dash: DashStyle::Solid,
            }),
            ctx,
            diags,
        );
        let shadow = self
            .resolver
            .resolve_shadow(element.style.shadow.as_ref(), ctx, diags);

        let body = element.text.as_ref().map(|text| {
            let default_font = FontSpec {
                color: Some(crate::spec::style::ColorSpec::Named(
                    style.font_color.to_hex(),
                )),
                bold: Some(true),
                size: Some(style.font_size),
                ..FontSpec::default()
            };
            let font = self.resolver.resolve_font_cascade(
                &[element.style.font.as_ref(), Some(&default_font)],
                ctx,
                diags,
            );
            TextBody {
                paragraphs: vec![Paragraph {
                    runs: vec![TextRun {
                        text: text.clone(),
                        font,
                        hyperlink: None,
                    }],
                    alignment: Some(Alignment::Center),
                    ..Paragraph::default()
                }],
                word_wrap: Some(true),
                vertical_anchor: Some(VerticalAnchor::Middle),
                ..TextBody::default()
            }
        });

        slide.push_element(Element::new(
            Rect::from_inches(rect.x, rect.y, rect.w, rect.h),
            ElementKind::AutoShape(AutoShapeElement {
                kind: style.shape,
                body,
                fill,
                outline,
                shadow,
            }),
        ));
        rect
    }

    fn build_connection(
        &self,
        slide: &mut Slide,
        connection: &ConnectionSpec,
        registry: &HashMap<&str, InchRect>,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) {
        let (Some(from_rect), Some(to_rect)) = (
            registry.get(connection.from_id.as_str()).copied(),
            registry.get(connection.to_id.as_str()).copied(),
        ) else {
            diags.warn(
                ctx.clone(),
                format!(
                    "connection references unknown element id: {} -> {}",
                    connection.from_id, connection.to_id
                ),
            );
            return;
        };

        let from_side = self.parse_side(connection.from_side.as_deref(), Side::Bottom, ctx, diags);
        let to_side = self.parse_side(connection.to_side.as_deref(), Side::Top, ctx, diags);

        let begin = connection_point(from_rect, from_side);
        let end = connection_point(to_rect, to_side);

        let kind = match connection
            .connector_type
            .as_deref()
            .map(str::to_ascii_uppercase)
            .as_deref()
        {
            Some("ELBOW") => ConnectorKind::Elbow,
            Some("CURVED") => ConnectorKind::Curved,
            _ => ConnectorKind::Straight,
        };

        let outline = self.resolver.resolve_line(
            connection.line.as_ref(),
            Some(Outline {
                color: CONNECTOR_COLOR,
                weight: Length::from_points(2.0),
                dash: DashStyle::Solid,
            }),
            ctx,
            diags,
        );

        let (bx, by) = begin;
        let (ex, ey) = end;
        slide.push_element(Element::new(
            Rect::from_inches(bx.min(ex), by.min(ey), (ex - bx).abs(), (ey - by).abs()),
            ElementKind::Connector(ConnectorElement {
                kind,
                begin: Point::from_inches(bx, by),
                end: Point::from_inches(ex, ey),
                outline,
            }),
        ));

        if let Some(label) = &connection.label {
            self.build_label(slide, label, connection, begin, end, ctx, diags);
        }
    }

    fn parse_side(
        &self,
        token: Option<&str>,
        default: Side,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Side {
        match token {
            None => default,
            Some(t) => Side::parse(t).unwrap_or_else(|| {
                diags.warn(
                    ctx.clone(),
                    format!("unrecognized connector side '{}', using center", t),
                );
                Side::Center
            }),
        }
    }

    /// Places the label textbox centered on the connector's midpoint: a
    /// small white box with a light border and bold centered text unless
    /// the label config overrides any of that.
    fn build_label(
        &self,
        slide: &mut Slide,
        label: &str,
        connection: &ConnectionSpec,
        begin: (f64, f64),
        end: (f64, f64),
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) {
        let config = connection.label_config.clone().unwrap_or_default();
        let w = config.w.unwrap_or(DEFAULT_LABEL_W);
        let h = config.h.unwrap_or(DEFAULT_LABEL_H);
        let (mx, my) = midpoint(begin, end);

        let default_font = FontSpec {
            size: Some(10.0),
            bold: Some(true),
            color: Some(crate::spec::style::ColorSpec::Named(
                CONNECTOR_COLOR.to_hex(),
            )),
            ..FontSpec::default()
        };
        let font = self.resolver.resolve_font_cascade(
            &[config.font.as_ref(), Some(&default_font)],
            ctx,
            diags,
        );

        let fill = self.resolver.resolve_fill(
            config.background.as_ref(),
            Fill::Solid {
                color: Color::WHITE,
            },
            ctx,
            diags,
        );
        let outline = if config.background.is_some() {
            None
        } else {
            Some(Outline {
                color: LABEL_BORDER_COLOR,
                weight: Length::from_points(1.0),
                dash: DashStyle::Solid,
            })
        };

        slide.push_element(Element::new(
            Rect::from_inches(mx - w / 2.0, my - h / 2.0, w, h),
            ElementKind::TextBox(TextBoxElement {
                body: TextBody {
                    paragraphs: vec![Paragraph {
                        runs: vec![TextRun {
                            text: label.to_string(),
                            font,
                            hyperlink: None,
                        }],
                        alignment: Some(Alignment::Center),
                        ..Paragraph::default()
                    }],
                    vertical_anchor: Some(VerticalAnchor::Middle),
                    ..TextBody::default()
                },
                fill,
                outline,
                shadow: None,
            }),
        ));
    }
}

// --- Auto-layout helpers ---
//
// Pure functions over element specs: callers use them to generate node
// geometry before invoking the engine. None of them is required at render
// time.

#[derive(Debug, Clone, Copy)]
pub struct VerticalLayout {
    pub start_x: f64,
    pub start_y: f64,
    pub spacing_y: f64,
    pub element_width: f64,
    pub element_height: f64,
}

impl Default for VerticalLayout {
    fn default() -> Self {
        Self {
            start_x: 2.0,
            start_y: 1.0,
            spacing_y: 1.5,
            element_width: 2.5,
            element_height: 1.0,
        }
    }
}

/// Stacks elements top to bottom at a fixed x.
pub fn vertical_layout(
    elements: &[FlowchartElementSpec],
    opts: VerticalLayout,
) -> Vec<FlowchartElementSpec> {
    let mut out = Vec::with_capacity(elements.len());
    let mut y = opts.start_y;
    for element in elements {
        let mut positioned = element.clone();
        positioned.x = opts.start_x;
        positioned.y = y;
        positioned.w = opts.element_width;
        positioned.h = opts.element_height;
        out.push(positioned);
        y += opts.element_height + opts.spacing_y;
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct HorizontalLayout {
    pub start_x: f64,
    pub start_y: f64,
    pub spacing_x: f64,
    pub element_width: f64,
    pub element_height: f64,
}

impl Default for HorizontalLayout {
    fn default() -> Self {
        Self {
            start_x: 1.0,
            start_y: 2.0,
            spacing_x: 3.0,
            element_width: 2.5,
            element_height: 1.0,
        }
    }
}

/// Stacks elements left to right at a fixed y.
pub fn horizontal_layout(
    elements: &[FlowchartElementSpec],
    opts: HorizontalLayout,
) -> Vec<FlowchartElementSpec> {
    let mut out = Vec::with_capacity(elements.len());
    let mut x = opts.start_x;
    for element in elements {
        let mut positioned = element.clone();
        positioned.x = x;
        positioned.y = opts.start_y;
        positioned.w = opts.element_width;
        positioned.h = opts.element_height;
        out.push(positioned);
        x += opts.element_width + opts.spacing_x;
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeLayout {
    pub start_x: f64,
    pub start_y: f64,
    pub level_spacing_y: f64,
    pub branch_spacing_x: f64,
}

impl Default for DecisionTreeLayout {
    fn default() -> Self {
        Self {
            start_x: 7.0,
            start_y: 1.0,
            level_spacing_y: 2.0,
            branch_spacing_x: 4.0,
        }
    }
}

/// Places element 0 as the root; remaining elements alternate left/right
/// branch columns, descending one level every two branch elements.
pub fn decision_tree_layout(
    elements: &[FlowchartElementSpec],
    opts: DecisionTreeLayout,
) -> Vec<FlowchartElementSpec> {
    let mut out = Vec::with_capacity(elements.len());
    let Some(root) = elements.first() else {
        return out;
    };

    let mut positioned = root.clone();
    positioned.x = opts.start_x;
    positioned.y = opts.start_y;
    positioned.w = 2.5;
    positioned.h = 1.0;
    out.push(positioned);

    let first_level_y = opts.start_y + opts.level_spacing_y;
    let branch_x = [
        opts.start_x - opts.branch_spacing_x,
        opts.start_x + opts.branch_spacing_x,
    ];
    for (i, element) in elements.iter().skip(1).enumerate() {
        let mut positioned = element.clone();
        positioned.x = branch_x[i % 2];
        positioned.y = first_level_y + (i / 2) as f64 * opts.level_spacing_y;
        positioned.w = 2.5;
        positioned.h = 1.0;
        out.push(positioned);
    }
    out
}

/// Generates the N-1 bottom→top connections linking consecutive ids.
pub fn auto_connect_sequential(ids: &[&str], connector_type: &str) -> Vec<ConnectionSpec> {
    ids.windows(2)
        .map(|pair| {
            let mut conn = ConnectionSpec::new(pair[0], pair[1]);
            conn.connector_type = Some(connector_type.to_string());
            conn.from_side = Some("bottom".to_string());
            conn.to_side = Some("top".to_string());
            conn
        })
        .collect()
}

/// Generates one connection per branch from a root id, alternating
/// bottom-left/bottom-right source sides, with optional per-branch labels.
pub fn auto_connect_decision_tree(
    root_id: &str,
    branch_ids: &[&str],
    labels: Option<&[&str]>,
) -> Vec<ConnectionSpec> {
    branch_ids
        .iter()
        .enumerate()
        .map(|(i, branch)| {
            let mut conn = ConnectionSpec::new(root_id, *branch);
            conn.connector_type = Some("STRAIGHT".to_string());
            conn.from_side = Some(if i % 2 == 0 {
                "bottom-left".to_string()
            } else {
                "bottom-right".to_string()
            });
            conn.to_side = Some("top".to_string());
            if let Some(labels) = labels {
                if let Some(label) = labels.get(i) {
                    conn.label = Some(label.to_string());
                    conn.label_config = Some(crate::spec::flowchart::LabelConfigSpec {
                        font: Some(FontSpec {
                            size: Some(9.0),
                            color: Some(crate::spec::style::ColorSpec::Named(
                                CONNECTOR_COLOR.to_hex(),
                            )),
                            ..FontSpec::default()
                        }),
                        ..Default::default()
                    });
                }
            }
            conn
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::elements::ElementKind;

    fn engine_parts() -> (FlowchartStyles, StyleResolver) {
        (FlowchartStyles::default(), StyleResolver::default())
    }

    fn element(id: &str, kind: &str, x: f64, y: f64) -> FlowchartElementSpec {
        let mut e = FlowchartElementSpec::new(id, kind, id.to_uppercase());
        e.x = x;
        e.y = y;
        e
    }

    fn render_payload(payload: &FlowchartPayload) -> (Slide, Diagnostics) {
        let (styles, resolver) = engine_parts();
        let engine = FlowchartEngine::new(&styles, &resolver);
        let mut slide = Slide::new(6);
        let mut diags = Diagnostics::new();
        engine.render(&mut slide, payload, &DiagnosticContext::slide(0), &mut diags);
        (slide, diags)
    }

    #[test]
    fn connections_resolve_ids_declared_after_them() {
        // Every element is registered before any connection resolves, so
        // declaration order between the two lists never matters.
        let payload = FlowchartPayload {
            elements: vec![element("a", "start", 2.0, 1.0), element("b", "end", 2.0, 3.5)],
            connections: vec![ConnectionSpec::new("a", "b")],
        };
        let (slide, diags) = render_payload(&payload);
        assert!(diags.is_empty());
        // Two nodes plus one connector.
        assert_eq!(slide.elements.len(), 3);
        let Some(ElementKind::Connector(conn)) =
            slide.elements.last().map(|e| &e.kind)
        else {
            panic!("expected connector last");
        };
        // a: bottom of (2,1,2,1) = (3,2); b: top of (2,3.5,2,1) = (3,3.5).
        assert_eq!(conn.begin, Point::from_inches(3.0, 2.0));
        assert_eq!(conn.end, Point::from_inches(3.0, 3.5));
    }

    #[test]
    fn unknown_id_skips_that_connection_only() {
        let payload = FlowchartPayload {
            elements: vec![element("a", "process", 0.0, 0.0), element("b", "process", 0.0, 2.0)],
            connections: vec![
                ConnectionSpec::new("a", "ghost"),
                ConnectionSpec::new("a", "b"),
            ],
        };
        let (slide, diags) = render_payload(&payload);
        assert_eq!(diags.len(), 1);
        assert!(diags.entries()[0].message.contains("ghost"));
        // Both nodes and exactly one connector (the valid one).
        assert_eq!(slide.elements.len(), 3);
    }

    #[test]
    fn kind_table_styles_apply_and_overrides_win() {
        let mut custom = element("a", "start", 0.0, 0.0);
        custom.style.fill = Some(crate::spec::style::FillSpec::Solid {
            color: Some(crate::spec::style::ColorSpec::Named("#123456".into())),
        });
        let payload = FlowchartPayload {
            elements: vec![custom, element("b", "decision", 0.0, 2.0)],
            connections: vec![],
        };
        let (slide, _) = render_payload(&payload);

        let ElementKind::AutoShape(a) = &slide.elements[0].kind else {
            panic!("expected autoshape");
        };
        assert_eq!(a.kind, AutoShapeKind::Oval);
        assert_eq!(
            a.fill,
            Fill::Solid {
                color: Color::new(0x12, 0x34, 0x56)
            }
        );

        let ElementKind::AutoShape(b) = &slide.elements[1].kind else {
            panic!("expected autoshape");
        };
        assert_eq!(b.kind, AutoShapeKind::Diamond);
        assert_eq!(
            b.fill,
            Fill::Solid {
                color: Color::new(0xf3, 0x9c, 0x12)
            }
        );
    }

    #[test]
    fn unknown_kind_uses_fallback_style() {
        let payload = FlowchartPayload {
            elements: vec![element("a", "teleporter", 0.0, 0.0)],
            connections: vec![],
        };
        let (slide, _) = render_payload(&payload);
        let ElementKind::AutoShape(a) = &slide.elements[0].kind else {
            panic!("expected autoshape");
        };
        assert_eq!(a.kind, AutoShapeKind::Rectangle);
        assert_eq!(
            a.fill,
            Fill::Solid {
                color: Color::new(0x95, 0xa5, 0xa6)
            }
        );
    }

    #[test]
    fn unrecognized_side_token_warns_and_uses_center() {
        let mut conn = ConnectionSpec::new("a", "b");
        conn.from_side = Some("diagonal".into());
        let payload = FlowchartPayload {
            elements: vec![element("a", "process", 2.0, 1.0), element("b", "process", 2.0, 4.0)],
            connections: vec![conn],
        };
        let (slide, diags) = render_payload(&payload);
        assert_eq!(diags.len(), 1);
        let Some(ElementKind::Connector(conn)) = slide.elements.last().map(|e| &e.kind) else {
            panic!("expected connector");
        };
        // Center of (2,1,2,1) is (3, 1.5).
        assert_eq!(conn.begin, Point::from_inches(3.0, 1.5));
    }

    #[test]
    fn label_lands_on_connector_midpoint() {
        let mut conn = ConnectionSpec::new("a", "b");
        conn.label = Some("yes".into());
        let payload = FlowchartPayload {
            elements: vec![element("a", "process", 2.0, 1.0), element("b", "process", 2.0, 4.0)],
            connections: vec![conn],
        };
        let (slide, _) = render_payload(&payload);
        // nodes, connector, label box.
        assert_eq!(slide.elements.len(), 4);
        let label = slide.elements.last().unwrap();
        let ElementKind::TextBox(text_box) = &label.kind else {
            panic!("expected label textbox");
        };
        assert_eq!(text_box.body.paragraphs[0].runs[0].text, "yes");
        // Connector runs (3,2) -> (3,4); midpoint (3,3). Label 1x0.3 box
        // centered there.
        assert_eq!(label.rect, Rect::from_inches(2.5, 2.85, 1.0, 0.3));
        assert_eq!(
            text_box.fill,
            Fill::Solid {
                color: Color::WHITE
            }
        );
        assert!(text_box.outline.is_some());
    }

    #[test]
    fn registry_does_not_leak_between_render_calls() {
        let (styles, resolver) = engine_parts();
        let engine = FlowchartEngine::new(&styles, &resolver);
        let mut slide = Slide::new(6);
        let mut diags = Diagnostics::new();

        let first = FlowchartPayload {
            elements: vec![element("a", "start", 0.0, 0.0)],
            connections: vec![],
        };
        engine.render(&mut slide, &first, &DiagnosticContext::slide(0), &mut diags);

        // Second flowchart on the same slide references "a", which only
        // exists in the first instance. Must warn and skip.
        let second = FlowchartPayload {
            elements: vec![element("b", "end", 0.0, 2.0)],
            connections: vec![ConnectionSpec::new("a", "b")],
        };
        engine.render(&mut slide, &second, &DiagnosticContext::slide(0), &mut diags);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn vertical_layout_spacing() {
        let elements = vec![
            element("e0", "start", 0.0, 0.0),
            element("e1", "process", 0.0, 0.0),
            element("e2", "end", 0.0, 0.0),
        ];
        let opts = VerticalLayout {
            start_y: 1.0,
            spacing_y: 1.5,
            element_height: 1.0,
            ..VerticalLayout::default()
        };
        let positioned = vertical_layout(&elements, opts);
        let ys: Vec<f64> = positioned.iter().map(|e| e.y).collect();
        assert_eq!(ys, vec![1.0, 3.5, 6.0]);
    }

    #[test]
    fn horizontal_layout_spacing() {
        let elements = vec![element("a", "start", 0.0, 0.0), element("b", "end", 0.0, 0.0)];
        let positioned = horizontal_layout(&elements, HorizontalLayout::default());
        assert_eq!(positioned[0].x, 1.0);
        assert_eq!(positioned[1].x, 6.5); // 1 + 2.5 + 3
        assert!(positioned.iter().all(|e| e.y == 2.0));
    }

    #[test]
    fn decision_tree_layout_alternates_and_descends() {
        let elements: Vec<_> = ["root", "b1", "b2", "b3", "b4"]
            .iter()
            .map(|id| element(id, "process", 0.0, 0.0))
            .collect();
        let positioned = decision_tree_layout(&elements, DecisionTreeLayout::default());
        assert_eq!((positioned[0].x, positioned[0].y), (7.0, 1.0));
        assert_eq!((positioned[1].x, positioned[1].y), (3.0, 3.0));
        assert_eq!((positioned[2].x, positioned[2].y), (11.0, 3.0));
        // Third branch starts the next level.
        assert_eq!((positioned[3].x, positioned[3].y), (3.0, 5.0));
        assert_eq!((positioned[4].x, positioned[4].y), (11.0, 5.0));
    }

    #[test]
    fn sequential_auto_connect_links_consecutive_ids() {
        let conns = auto_connect_sequential(&["a", "b", "c"], "STRAIGHT");
        assert_eq!(conns.len(), 2);
        assert_eq!(conns[0].from_id, "a");
        assert_eq!(conns[0].to_id, "b");
        assert_eq!(conns[0].from_side.as_deref(), Some("bottom"));
        assert_eq!(conns[1].to_side.as_deref(), Some("top"));
    }

    #[test]
    fn decision_tree_auto_connect_alternates_sides() {
        let conns = auto_connect_decision_tree("root", &["yes", "no"], Some(&["Yes", "No"]));
        assert_eq!(conns[0].from_side.as_deref(), Some("bottom-left"));
        assert_eq!(conns[1].from_side.as_deref(), Some("bottom-right"));
        assert_eq!(conns[0].label.as_deref(), Some("Yes"));
        assert_eq!(conns[1].label.as_deref(), Some("No"));
    }
}
