//! Slide construction: background, shape dispatch, placeholder content and
//! speaker notes.

use crate::diagnostics::{DiagnosticContext, Diagnostics};
use crate::doc::common::{Length, Rect};
use crate::doc::elements::{Element, ElementKind, PictureElement};
use crate::doc::fill::Fill;
use crate::doc::page::{PlaceholderContent, PlaceholderFill, Slide};
use crate::render::shapes::build_shape;
use crate::render::RenderContext;
use crate::spec::slide::{BackgroundSpec, NotesSpec, SlideSpec};
use crate::spec::style::FillSpec;

pub fn build_slide(
    spec: &SlideSpec,
    index: usize,
    rc: &RenderContext<'_>,
    diags: &mut Diagnostics,
) -> Slide {
    let ctx = DiagnosticContext::slide(index);
    let mut slide = Slide::new(spec.layout);

    // A picture background becomes a full-bleed element behind everything
    // else; color/gradient backgrounds set the slide's background fill.
    let mut background_picture: Option<String> = None;
    match &spec.background {
        None => {}
        Some(BackgroundSpec::Color(color)) => match rc.resolver.parse_color(color) {
            Some(c) => slide.background = Some(Fill::Solid { color: c }),
            None => diags.warn(
                ctx.clone(),
                format!("unrecognized background color {:?}, skipping background", color),
            ),
        },
        Some(BackgroundSpec::Fill(fill_spec)) => match fill_spec {
            FillSpec::Picture { path } => match rc.assets.fetch(path, rc.base_dir) {
                Ok(_) => {
                    background_picture =
                        Some(crate::assets::resolve_location(path, rc.base_dir));
                }
                Err(err) => diags.warn(
                    ctx.clone(),
                    format!("background picture unavailable ({}), skipping background", err),
                ),
            },
            other => {
                slide.background =
                    Some(rc.resolver.resolve_fill(Some(other), Fill::None, &ctx, diags));
            }
        },
    }

    for (shape_idx, node) in spec.shapes.iter().enumerate() {
        build_shape(&mut slide, node, index, shape_idx, rc, diags);
    }

    // Insert the background picture last so it lands at the lowest draw
    // position, behind every shape built above.
    if let Some(source) = background_picture {
        slide.push_element_bottom(Element::new(
            Rect::new(
                Length::ZERO,
                Length::ZERO,
                rc.page_size.width,
                rc.page_size.height,
            ),
            ElementKind::Picture(PictureElement {
                source,
                outline: None,
                shadow: None,
            }),
        ));
    }

    for (key, content) in &spec.placeholders {
        let Ok(placeholder_index) = key.parse::<u32>() else {
            diags.warn(
                ctx.clone(),
                format!("placeholder key '{}' is not an index, skipping", key),
            );
            continue;
        };
        let resolved = if let Some(text) = &content.text {
            PlaceholderContent::Text(text.clone())
        } else if let Some(path) = &content.image_path {
            PlaceholderContent::Image {
                source: crate::assets::resolve_location(path, rc.base_dir),
            }
        } else {
            diags.warn(
                ctx.clone(),
                format!("placeholder {} has neither text nor image_path, skipping", key),
            );
            continue;
        };
        slide.placeholders.push(PlaceholderFill {
            index: placeholder_index,
            content: resolved,
        });
    }

    slide.notes = spec.notes.as_ref().map(|notes| match notes {
        NotesSpec::Plain(text) => vec![text.clone()],
        NotesSpec::Paragraphs(paragraphs) => paragraphs.clone(),
    });

    slide
}
