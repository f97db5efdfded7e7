//! The shape dispatcher: one builder per shape kind, exhaustive over the
//! closed spec union. A shape that cannot be built is skipped with a
//! diagnostic; the rest of the slide always renders.

use crate::assets::resolve_location;
use crate::diagnostics::{DiagnosticContext, Diagnostics};
use crate::doc::colors::Color;
use crate::doc::common::{Length, Point, Rect};
use crate::doc::elements::{
    AutoShapeElement, AutoShapeKind, ConnectorElement, ConnectorKind, Element, ElementKind,
    FreeformElement, GroupElement, PathAction, PathPoint, PictureElement, TextBoxElement,
};
use crate::doc::fill::{DashStyle, Fill, Outline};
use crate::doc::page::Slide;
use crate::doc::text::{Alignment, Paragraph, TextBody, TextRun, VerticalAnchor};
use crate::render::flowchart::FlowchartEngine;
use crate::render::RenderContext;
use crate::spec::shape::{
    AutoShape, BulletShape, ConnectorShape, FreeformShape, Geometry, GroupShape, ImageShape,
    ShapeNode, ShapeSpec, TextContentSpec, TextShape,
};
use crate::spec::style::{FontSpec, ParagraphSpec, TextFrameSpec};

fn rect_of(geometry: &Geometry) -> Rect {
    Rect::from_inches(geometry.x, geometry.y, geometry.w.max(0.0), geometry.h.max(0.0))
}

/// Builds one shape entry into the slide's element list.
pub fn build_shape(
    slide: &mut Slide,
    node: &ShapeNode,
    slide_idx: usize,
    shape_idx: usize,
    rc: &RenderContext<'_>,
    diags: &mut Diagnostics,
) {
    let ctx = DiagnosticContext::shape(slide_idx, shape_idx);
    let spec = match node {
        ShapeNode::Known(spec) => spec.as_ref(),
        ShapeNode::Unknown(_) => {
            diags.warn(
                ctx,
                match node.raw_kind() {
                    Some(kind) => format!("unknown or malformed shape of type '{}', skipping", kind),
                    None => "shape entry has no 'type' field, skipping".to_string(),
                },
            );
            return;
        }
    };

    match spec {
        ShapeSpec::Text(text) => build_text(slide, text, rc, &ctx, diags),
        ShapeSpec::Bullet(bullet) => build_bullet(slide, bullet, rc, &ctx, diags),
        ShapeSpec::Image(image) => build_image(slide, image, rc, &ctx, diags),
        ShapeSpec::Chart(chart) => {
            if let Some(built) = super::chart::build_chart(&chart.chart, &ctx, diags) {
                slide.push_element(Element::new(
                    rect_of(&chart.geometry),
                    ElementKind::Chart(built),
                ));
            }
        }
        ShapeSpec::Table(table) => {
            let built = super::table::build_table(&table.table, rc.resolver, &ctx, diags);
            slide.push_element(Element::new(
                rect_of(&table.geometry),
                ElementKind::Table(built),
            ));
        }
        ShapeSpec::Autoshape(autoshape) => build_autoshape(slide, autoshape, rc, &ctx, diags),
        ShapeSpec::Connector(connector) => build_connector(slide, connector, rc, &ctx, diags),
        ShapeSpec::Flowchart(flowchart) => {
            FlowchartEngine::new(rc.flowchart, rc.resolver).render(
                slide,
                &flowchart.flowchart,
                &ctx,
                diags,
            );
        }
        ShapeSpec::Group(group) => build_group(slide, group, slide_idx, shape_idx, rc, diags),
        ShapeSpec::Freeform(freeform) => build_freeform(slide, freeform, rc, &ctx, diags),
    }
}

/// Shared text-body construction for text and bullet shapes. The font
/// cascade runs per run: run-level → paragraph/shape-level → engine default.
fn build_text_body(
    content: &TextContentSpec,
    shape_font: Option<&FontSpec>,
    paragraph_spec: Option<&ParagraphSpec>,
    frame: Option<&TextFrameSpec>,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) -> TextBody {
    let mut body = TextBody::default();
    match content {
        TextContentSpec::Plain(text) => {
            let font = rc
                .resolver
                .resolve_font_cascade(&[shape_font], ctx, diags);
            let mut paragraph = Paragraph {
                runs: vec![TextRun {
                    text: text.clone(),
                    font,
                    hyperlink: None,
                }],
                ..Paragraph::default()
            };
            if let Some(spec) = paragraph_spec {
                rc.resolver.apply_paragraph(spec, &mut paragraph);
            }
            body.paragraphs.push(paragraph);
        }
        TextContentSpec::Paragraphs(items) => {
            for item in items {
                let font = rc
                    .resolver
                    .resolve_font_cascade(&[shape_font], ctx, diags);
                let mut paragraph = Paragraph {
                    runs: vec![TextRun {
                        text: item.clone(),
                        font,
                        hyperlink: None,
                    }],
                    ..Paragraph::default()
                };
                if let Some(spec) = paragraph_spec {
                    rc.resolver.apply_paragraph(spec, &mut paragraph);
                }
                body.paragraphs.push(paragraph);
            }
        }
        TextContentSpec::Rich(paragraphs) => {
            for rich in paragraphs {
                let mut paragraph = Paragraph::default();
                for run in &rich.runs {
                    let font = rc.resolver.resolve_font_cascade(
                        &[run.font.as_ref(), rich.font.as_ref(), shape_font],
                        ctx,
                        diags,
                    );
                    paragraph.runs.push(TextRun {
                        text: run.text.clone(),
                        font,
                        hyperlink: run.hyperlink.clone(),
                    });
                }
                if let Some(spec) = paragraph_spec {
                    rc.resolver.apply_paragraph(spec, &mut paragraph);
                }
                rc.resolver.apply_paragraph(&rich.paragraph, &mut paragraph);
                body.paragraphs.push(paragraph);
            }
        }
    }
    if let Some(frame) = frame {
        rc.resolver.apply_text_frame(frame, &mut body);
    }
    body
}

fn build_text(
    slide: &mut Slide,
    shape: &TextShape,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let body = build_text_body(
        &shape.text,
        shape.style.font.as_ref(),
        shape.paragraph.as_ref(),
        shape.text_frame.as_ref(),
        rc,
        ctx,
        diags,
    );
    // Textboxes compose invisibly over backgrounds unless the spec says
    // otherwise: no fill, no border.
    let fill = rc
        .resolver
        .resolve_fill(shape.style.fill.as_ref(), Fill::None, ctx, diags);
    let outline = rc
        .resolver
        .resolve_line(shape.style.line.as_ref(), None, ctx, diags);
    let shadow = rc
        .resolver
        .resolve_shadow(shape.style.shadow.as_ref(), ctx, diags);
    slide.push_element(Element::new(
        rect_of(&shape.geometry),
        ElementKind::TextBox(TextBoxElement {
            body,
            fill,
            outline,
            shadow,
        }),
    ));
}

fn build_bullet(
    slide: &mut Slide,
    shape: &BulletShape,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let mut body = TextBody::default();
    for item in &shape.items {
        let font = rc
            .resolver
            .resolve_font_cascade(&[shape.style.font.as_ref()], ctx, diags);
        let mut paragraph = Paragraph {
            runs: vec![TextRun {
                text: item.clone(),
                font,
                hyperlink: None,
            }],
            bullet_level: Some(shape.level),
            ..Paragraph::default()
        };
        if let Some(spec) = &shape.paragraph {
            rc.resolver.apply_paragraph(spec, &mut paragraph);
        }
        body.paragraphs.push(paragraph);
    }
    if let Some(frame) = &shape.text_frame {
        rc.resolver.apply_text_frame(frame, &mut body);
    }
    let fill = rc
        .resolver
        .resolve_fill(shape.style.fill.as_ref(), Fill::None, ctx, diags);
    let outline = rc
        .resolver
        .resolve_line(shape.style.line.as_ref(), None, ctx, diags);
    let shadow = rc
        .resolver
        .resolve_shadow(shape.style.shadow.as_ref(), ctx, diags);
    slide.push_element(Element::new(
        rect_of(&shape.geometry),
        ElementKind::TextBox(TextBoxElement {
            body,
            fill,
            outline,
            shadow,
        }),
    ));
}

fn build_image(
    slide: &mut Slide,
    shape: &ImageShape,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let rect = rect_of(&shape.geometry);
    match rc.assets.fetch(&shape.path, rc.base_dir) {
        Ok(_) => {
            let outline = rc
                .resolver
                .resolve_line(shape.line.as_ref(), None, ctx, diags);
            let shadow = rc
                .resolver
                .resolve_shadow(shape.shadow.as_ref(), ctx, diags);
            slide.push_element(Element::new(
                rect,
                ElementKind::Picture(PictureElement {
                    source: resolve_location(&shape.path, rc.base_dir),
                    outline,
                    shadow,
                }),
            ));
        }
        Err(err) => {
            diags.warn(
                ctx.clone(),
                format!("image unavailable ({}), substituting placeholder", err),
            );
            slide.push_element(image_placeholder(rect, &shape.path));
        }
    }
}

/// The labeled grey rectangle substituted for an image that could not be
/// fetched or opened.
fn image_placeholder(rect: Rect, path: &str) -> Element {
    Element::new(
        rect,
        ElementKind::AutoShape(AutoShapeElement {
            kind: AutoShapeKind::Rectangle,
            body: Some(TextBody {
                paragraphs: vec![Paragraph {
                    runs: vec![TextRun {
                        text: format!("Image unavailable: {}", path),
                        font: crate::doc::text::Font {
                            size: Some(10.0),
                            color: Some(Color::new(0x7f, 0x8c, 0x8d)),
                            ..Default::default()
                        },
                        hyperlink: None,
                    }],
                    alignment: Some(Alignment::Center),
                    ..Paragraph::default()
                }],
                word_wrap: Some(true),
                vertical_anchor: Some(VerticalAnchor::Middle),
                ..TextBody::default()
            }),
            fill: Fill::Solid {
                color: Color::new(0xec, 0xf0, 0xf1),
            },
            outline: Some(Outline {
                color: Color::new(0xbd, 0xc3, 0xc7),
                weight: Length::from_points(1.0),
                dash: DashStyle::Dash,
            }),
            shadow: None,
        }),
    )
}

/// Parses an auto-shape preset name. Unknown names return `None`; the
/// dispatcher warns and skips.
pub fn parse_autoshape_kind(name: &str) -> Option<AutoShapeKind> {
    use AutoShapeKind::*;
    match name {
        "RECTANGLE" => Some(Rectangle),
        "ROUNDED_RECTANGLE" => Some(RoundedRectangle),
        "OVAL" => Some(Oval),
        "DIAMOND" => Some(Diamond),
        "PARALLELOGRAM" => Some(Parallelogram),
        "TRAPEZOID" => Some(Trapezoid),
        "TRIANGLE" | "ISOCELES_TRIANGLE" => Some(Triangle),
        "RIGHT_TRIANGLE" => Some(RightTriangle),
        "PENTAGON" => Some(Pentagon),
        "HEXAGON" => Some(Hexagon),
        "OCTAGON" => Some(Octagon),
        "CHEVRON" => Some(Chevron),
        "ARC" => Some(Arc),
        "CLOUD" => Some(Cloud),
        "HEART" => Some(Heart),
        "LIGHTNING_BOLT" => Some(LightningBolt),
        "STAR_5_POINT" | "STAR_5" => Some(Star5),
        "RIGHT_ARROW" => Some(RightArrow),
        "LEFT_ARROW" => Some(LeftArrow),
        "UP_ARROW" => Some(UpArrow),
        "DOWN_ARROW" => Some(DownArrow),
        "FLOWCHART_DOCUMENT" => Some(FlowchartDocument),
        "FLOWCHART_PREDEFINED_PROCESS" => Some(FlowchartPredefinedProcess),
        "FLOWCHART_INTERNAL_STORAGE" => Some(FlowchartInternalStorage),
        "FLOWCHART_MANUAL_INPUT" => Some(FlowchartManualInput),
        "FLOWCHART_MANUAL_OPERATION" => Some(FlowchartManualOperation),
        "FLOWCHART_CONNECTOR" => Some(FlowchartConnector),
        "FLOWCHART_OFFPAGE_CONNECTOR" => Some(FlowchartOffpageConnector),
        "FLOWCHART_PREPARATION" => Some(FlowchartPreparation),
        "FLOWCHART_EXTRACT" => Some(FlowchartExtract),
        "FLOWCHART_MERGE" => Some(FlowchartMerge),
        "FLOWCHART_STORED_DATA" => Some(FlowchartStoredData),
        "FLOWCHART_DELAY" => Some(FlowchartDelay),
        "FLOWCHART_ALTERNATE_PROCESS" => Some(FlowchartAlternateProcess),
        "FLOWCHART_CARD" => Some(FlowchartCard),
        "FLOWCHART_PUNCHED_TAPE" => Some(FlowchartPunchedTape),
        "FLOWCHART_SUMMING_JUNCTION" => Some(FlowchartSummingJunction),
        "FLOWCHART_OR" => Some(FlowchartOr),
        "FLOWCHART_COLLATE" => Some(FlowchartCollate),
        "FLOWCHART_SORT" => Some(FlowchartSort),
        "FLOWCHART_MULTIDOCUMENT" => Some(FlowchartMultidocument),
        "FLOWCHART_TERMINATOR" => Some(FlowchartTerminator),
        "FLOWCHART_DISPLAY" => Some(FlowchartDisplay),
        _ => None,
    }
}

fn build_autoshape(
    slide: &mut Slide,
    shape: &AutoShape,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let type_name = shape.shape_type.as_deref().unwrap_or("RECTANGLE");
    let Some(kind) = parse_autoshape_kind(type_name) else {
        diags.warn(
            ctx.clone(),
            format!("unsupported auto shape type: {}", type_name),
        );
        return;
    };

    let body = shape.text.as_ref().map(|text| {
        let font = rc
            .resolver
            .resolve_font_cascade(&[shape.style.font.as_ref()], ctx, diags);
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
            vertical_anchor: Some(VerticalAnchor::Middle),
            ..TextBody::default()
        }
    });

    // Auto shapes default to a solid accent fill with a hairline border,
    // matching the host's default preset appearance.
    let fill = rc.resolver.resolve_fill(
        shape.style.fill.as_ref(),
        Fill::Solid {
            color: Color::new(0x44, 0x72, 0xc4),
        },
        ctx,
        diags,
    );
    let outline = rc.resolver.resolve_line(
        shape.style.line.as_ref(),
        Some(Outline {
            color: Color::new(0x2f, 0x52, 0x8f),
            weight: Length::from_points(1.0),
            dash: DashStyle::Solid,
        }),
        ctx,
        diags,
    );
    let shadow = rc
        .resolver
        .resolve_shadow(shape.style.shadow.as_ref(), ctx, diags);

    slide.push_element(Element::new(
        rect_of(&shape.geometry),
        ElementKind::AutoShape(AutoShapeElement {
            kind,
            body,
            fill,
            outline,
            shadow,
        }),
    ));
}

fn build_connector(
    slide: &mut Slide,
    shape: &ConnectorShape,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let kind = match shape
        .connector_type
        .as_deref()
        .map(str::to_ascii_uppercase)
        .as_deref()
    {
        Some("ELBOW") => ConnectorKind::Elbow,
        Some("CURVED") => ConnectorKind::Curved,
        _ => ConnectorKind::Straight,
    };
    let outline = rc.resolver.resolve_line(
        shape.line.as_ref(),
        Some(Outline {
            color: Color::BLACK,
            weight: Length::from_points(1.0),
            dash: DashStyle::Solid,
        }),
        ctx,
        diags,
    );
    let g = &shape.geometry;
    slide.push_element(Element::new(
        rect_of(g),
        ElementKind::Connector(ConnectorElement {
            kind,
            begin: Point::from_inches(g.x, g.y),
            end: Point::from_inches(g.x + g.w, g.y + g.h),
            outline,
        }),
    ));
}

fn build_group(
    slide: &mut Slide,
    shape: &GroupShape,
    slide_idx: usize,
    shape_idx: usize,
    rc: &RenderContext<'_>,
    diags: &mut Diagnostics,
) {
    let mut inner = Slide::new(slide.layout_index);
    // Child diagnostics keep the parent shape's index so reports stay
    // addressable in the authored spec.
    for child in &shape.shapes {
        build_shape(&mut inner, child, slide_idx, shape_idx, rc, diags);
    }
    slide.push_element(Element::new(
        rect_of(&shape.geometry),
        ElementKind::Group(GroupElement {
            children: inner.elements,
        }),
    ));
}

fn build_freeform(
    slide: &mut Slide,
    shape: &FreeformShape,
    rc: &RenderContext<'_>,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) {
    let mut path = Vec::with_capacity(shape.points.len());
    for (i, point) in shape.points.iter().enumerate() {
        let action = if i == 0 {
            PathAction::MoveTo
        } else {
            match point.action.as_deref().unwrap_or("line_to") {
                "move_to" => PathAction::MoveTo,
                "line_to" => PathAction::LineTo,
                "curve_to" => {
                    // Curves degrade to straight segments; the host geometry
                    // has no native curve support here.
                    diags.warn(
                        ctx.clone(),
                        "curve_to not supported, degrading to line_to".to_string(),
                    );
                    PathAction::LineTo
                }
                other => {
                    diags.warn(
                        ctx.clone(),
                        format!("unknown path action '{}', treating as line_to", other),
                    );
                    PathAction::LineTo
                }
            }
        };
        path.push(PathPoint {
            action,
            at: Point::from_inches(point.x, point.y),
        });
    }

    let fill = rc
        .resolver
        .resolve_fill(shape.fill.as_ref(), Fill::None, ctx, diags);
    let outline = rc.resolver.resolve_line(
        shape.line.as_ref(),
        Some(Outline {
            color: Color::BLACK,
            weight: Length::from_points(1.0),
            dash: DashStyle::Solid,
        }),
        ctx,
        diags,
    );
    slide.push_element(Element::new(
        rect_of(&shape.geometry),
        ElementKind::Freeform(FreeformElement {
            path,
            fill,
            outline,
        }),
    ));
}
