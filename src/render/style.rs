//! Style resolution: spec-side style blocks into concrete document styles.
//!
//! Every function here is total. Malformed input degrades to a documented
//! default (usually black) with a diagnostic instead of erroring, because a
//! visual defect on one shape is preferable to aborting a multi-slide
//! render. Resolution is idempotent: the same spec always produces the same
//! concrete style.

use std::collections::HashMap;

use crate::diagnostics::{DiagnosticContext, Diagnostics};
use crate::doc::colors::{Color, ThemeColor};
use crate::doc::common::Length;
use crate::doc::fill::{DashStyle, Fill, GradientStop, Outline, Shadow, ShadowKind};
use crate::doc::text::{Alignment, Font, Margins, TextBody, VerticalAnchor};
use crate::spec::style::{
    ColorSpec, FillSpec, FontSpec, LineSpec, ParagraphSpec, ShadowSpec, TextFrameSpec,
};

/// The theme palette: an immutable token → color table injected at resolver
/// construction. The default palette mirrors the common office theme.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<ThemeColor, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = HashMap::from([
            (ThemeColor::Dark1, Color::new(0x00, 0x00, 0x00)),
            (ThemeColor::Light1, Color::new(0xff, 0xff, 0xff)),
            (ThemeColor::Dark2, Color::new(0x44, 0x54, 0x6a)),
            (ThemeColor::Light2, Color::new(0xe7, 0xe6, 0xe6)),
            (ThemeColor::Accent1, Color::new(0x44, 0x72, 0xc4)),
            (ThemeColor::Accent2, Color::new(0xed, 0x7d, 0x31)),
            (ThemeColor::Accent3, Color::new(0xa5, 0xa5, 0xa5)),
            (ThemeColor::Accent4, Color::new(0xff, 0xc0, 0x00)),
            (ThemeColor::Accent5, Color::new(0x54, 0x72, 0x9b)),
            (ThemeColor::Accent6, Color::new(0x70, 0xad, 0x47)),
            (ThemeColor::Hyperlink, Color::new(0x05, 0x63, 0xc1)),
        ]);
        Palette { colors }
    }
}

impl Palette {
    pub fn lookup(&self, token: ThemeColor) -> Option<Color> {
        self.colors.get(&token).copied()
    }
}

fn theme_token(name: &str) -> Option<ThemeColor> {
    match name {
        "dark1" => Some(ThemeColor::Dark1),
        "light1" => Some(ThemeColor::Light1),
        "dark2" => Some(ThemeColor::Dark2),
        "light2" => Some(ThemeColor::Light2),
        "accent1" => Some(ThemeColor::Accent1),
        "accent2" => Some(ThemeColor::Accent2),
        "accent3" => Some(ThemeColor::Accent3),
        "accent4" => Some(ThemeColor::Accent4),
        "accent5" => Some(ThemeColor::Accent5),
        "accent6" => Some(ThemeColor::Accent6),
        "hyperlink" => Some(ThemeColor::Hyperlink),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::new(r, g, b))
}

/// Resolves style specs against an injected palette. Stateless beyond the
/// palette; safe to share across a whole render pass.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    palette: Palette,
}

impl StyleResolver {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Attempts to parse a color spec. `None` means the spec is malformed
    /// (as opposed to absent); the caller decides between the silent default
    /// and a diagnostic.
    pub fn parse_color(&self, spec: &ColorSpec) -> Option<Color> {
        match spec {
            ColorSpec::Named(s) => {
                parse_hex(s).or_else(|| theme_token(s).and_then(|t| self.palette.lookup(t)))
            }
            ColorSpec::Rgb { r, g, b } => Some(Color::new(*r, *g, *b)),
            ColorSpec::RgbTriple { rgb } => Some(Color::new(rgb[0], rgb[1], rgb[2])),
            ColorSpec::Hex { hex } => parse_hex(hex),
            ColorSpec::Other(_) => None,
        }
    }

    /// Resolves an optional color to a concrete one. An absent color is the
    /// silent default; a present-but-malformed color warns and degrades to
    /// the same default.
    pub fn resolve_color(
        &self,
        spec: Option<&ColorSpec>,
        default: Color,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Color {
        match spec {
            None => default,
            Some(c) => self.parse_color(c).unwrap_or_else(|| {
                diags.warn(
                    ctx.clone(),
                    format!("unrecognized color {:?}, using {}", c, default.to_hex()),
                );
                default
            }),
        }
    }

    /// Resolves a fill spec. `default` is the engine default for the shape
    /// kind at hand (textboxes pass `Fill::None`, flowchart nodes their kind
    /// color, and so on).
    pub fn resolve_fill(
        &self,
        spec: Option<&FillSpec>,
        default: Fill,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Fill {
        let Some(spec) = spec else { return default };
        match spec {
            FillSpec::None => Fill::None,
            FillSpec::Solid { color } => Fill::Solid {
                color: self.resolve_color(color.as_ref(), Color::BLACK, ctx, diags),
            },
            FillSpec::Gradient { stops } => {
                let mut resolved: Vec<GradientStop> = stops
                    .iter()
                    .map(|s| GradientStop {
                        position: s.position.clamp(0.0, 1.0),
                        color: self.resolve_color(Some(&s.color), Color::BLACK, ctx, diags),
                    })
                    .collect();
                resolved.sort_by(|a, b| {
                    a.position
                        .partial_cmp(&b.position)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                Fill::Gradient { stops: resolved }
            }
            FillSpec::Pattern {
                pattern,
                fore_color,
                back_color,
            } => Fill::Pattern {
                pattern: pattern.clone().unwrap_or_else(|| "cross".to_string()),
                fore: self.resolve_color(fore_color.as_ref(), Color::BLACK, ctx, diags),
                back: self.resolve_color(back_color.as_ref(), Color::WHITE, ctx, diags),
            },
            FillSpec::Picture { path } => Fill::Picture {
                source: path.clone(),
            },
        }
    }

    /// Resolves a line spec into an outline. An absent spec keeps the
    /// per-shape default; a `transparent` line resolves to no outline.
    pub fn resolve_line(
        &self,
        spec: Option<&LineSpec>,
        default: Option<Outline>,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Option<Outline> {
        let Some(spec) = spec else { return default };
        if spec.transparent {
            return None;
        }
        Some(Outline {
            color: self.resolve_color(spec.color.as_ref(), Color::BLACK, ctx, diags),
            weight: Length::from_points(spec.width.unwrap_or(1.0)),
            dash: spec.dash.as_deref().map(parse_dash).unwrap_or_default(),
        })
    }

    /// Converts a (possibly cascaded) font spec into a concrete font.
    /// Fields no cascade level supplied stay `None` and pass through to the
    /// host formatting layer's default.
    pub fn resolve_font(
        &self,
        spec: &FontSpec,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Font {
        Font {
            family: spec.name.clone(),
            size: spec.size,
            bold: spec.bold,
            italic: spec.italic,
            underline: spec.underline,
            color: spec
                .color
                .as_ref()
                .map(|c| self.resolve_color(Some(c), Color::BLACK, ctx, diags)),
        }
    }

    /// Merges the cascade levels (run → paragraph/shape → engine default;
    /// earliest level wins per field) and resolves the result.
    pub fn resolve_font_cascade(
        &self,
        levels: &[Option<&FontSpec>],
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Font {
        let mut merged = FontSpec::default();
        for level in levels.iter().rev().flatten() {
            merged = level.or(&merged);
        }
        self.resolve_font(&merged, ctx, diags)
    }

    pub fn resolve_shadow(
        &self,
        spec: Option<&ShadowSpec>,
        ctx: &DiagnosticContext,
        diags: &mut Diagnostics,
    ) -> Option<Shadow> {
        let spec = spec?;
        let kind = match spec.kind.as_deref() {
            Some("inner") => ShadowKind::Inner,
            _ => ShadowKind::Outer,
        };
        Some(Shadow {
            kind,
            visible: spec.visible.unwrap_or(true),
            color: self.resolve_color(spec.color.as_ref(), Color::BLACK, ctx, diags),
        })
    }

    /// Applies paragraph-level spec fields onto a document paragraph.
    pub fn apply_paragraph(
        &self,
        spec: &ParagraphSpec,
        paragraph: &mut crate::doc::text::Paragraph,
    ) {
        if let Some(alignment) = spec.alignment.as_deref().and_then(parse_alignment) {
            paragraph.alignment = Some(alignment);
        }
        if spec.space_before.is_some() {
            paragraph.space_before = spec.space_before;
        }
        if spec.space_after.is_some() {
            paragraph.space_after = spec.space_after;
        }
        if spec.line_spacing.is_some() {
            paragraph.line_spacing = spec.line_spacing;
        }
    }

    /// Applies text-frame spec fields (margins, wrap, anchor) onto a body.
    pub fn apply_text_frame(&self, spec: &TextFrameSpec, body: &mut TextBody) {
        let has_margin = spec.margin_left.is_some()
            || spec.margin_right.is_some()
            || spec.margin_top.is_some()
            || spec.margin_bottom.is_some();
        if has_margin {
            body.margins = Some(Margins {
                left: Length::from_inches(spec.margin_left.unwrap_or(0.1)),
                right: Length::from_inches(spec.margin_right.unwrap_or(0.1)),
                top: Length::from_inches(spec.margin_top.unwrap_or(0.05)),
                bottom: Length::from_inches(spec.margin_bottom.unwrap_or(0.05)),
            });
        }
        if spec.word_wrap.is_some() {
            body.word_wrap = spec.word_wrap;
        }
        if let Some(anchor) = spec.vertical_anchor.as_deref() {
            body.vertical_anchor = match anchor {
                "top" => Some(VerticalAnchor::Top),
                "middle" => Some(VerticalAnchor::Middle),
                "bottom" => Some(VerticalAnchor::Bottom),
                _ => body.vertical_anchor,
            };
        }
    }
}

fn parse_alignment(token: &str) -> Option<Alignment> {
    match token {
        "left" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        "justify" => Some(Alignment::Justify),
        _ => None,
    }
}

fn parse_dash(token: &str) -> DashStyle {
    match token {
        "dot" => DashStyle::Dot,
        "dash" => DashStyle::Dash,
        "dash_dot" => DashStyle::DashDot,
        "long_dash" => DashStyle::LongDash,
        "long_dash_dot" => DashStyle::LongDashDot,
        _ => DashStyle::Solid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> StyleResolver {
        StyleResolver::default()
    }

    fn ctx() -> DiagnosticContext {
        DiagnosticContext::default()
    }

    #[test]
    fn hex_color_forms() {
        let r = resolver();
        assert_eq!(
            r.parse_color(&ColorSpec::Named("#2ecc71".into())),
            Some(Color::new(46, 204, 113))
        );
        assert_eq!(
            r.parse_color(&ColorSpec::Named("2ecc71".into())),
            Some(Color::new(46, 204, 113))
        );
        assert_eq!(
            r.parse_color(&ColorSpec::Rgb { r: 1, g: 2, b: 3 }),
            Some(Color::new(1, 2, 3))
        );
        assert_eq!(
            r.parse_color(&ColorSpec::Hex {
                hex: "ffffff".into()
            }),
            Some(Color::WHITE)
        );
    }

    #[test]
    fn malformed_color_degrades_to_black_with_warning() {
        let r = resolver();
        let mut diags = Diagnostics::new();
        let color = r.resolve_color(
            Some(&ColorSpec::Named("#12345".into())),
            Color::BLACK,
            &ctx(),
            &mut diags,
        );
        assert_eq!(color, Color::BLACK);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn theme_token_resolves_through_palette() {
        let r = resolver();
        let c = r.parse_color(&ColorSpec::Named("accent1".into()));
        assert_eq!(c, Some(Color::new(0x44, 0x72, 0xc4)));
    }

    #[test]
    fn absent_fill_keeps_shape_default() {
        let r = resolver();
        let mut diags = Diagnostics::new();
        let fill = r.resolve_fill(None, Fill::None, &ctx(), &mut diags);
        assert_eq!(fill, Fill::None);
        assert!(diags.is_empty());
    }

    #[test]
    fn gradient_stops_are_clamped_and_ordered() {
        let r = resolver();
        let mut diags = Diagnostics::new();
        let spec = FillSpec::Gradient {
            stops: vec![
                crate::spec::style::GradientStopSpec {
                    position: 1.5,
                    color: ColorSpec::Named("#ffffff".into()),
                },
                crate::spec::style::GradientStopSpec {
                    position: 0.0,
                    color: ColorSpec::Named("#000000".into()),
                },
            ],
        };
        let Fill::Gradient { stops } = r.resolve_fill(Some(&spec), Fill::None, &ctx(), &mut diags)
        else {
            panic!("expected gradient");
        };
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[1].position, 1.0);
    }

    #[test]
    fn transparent_line_resolves_to_no_outline() {
        let r = resolver();
        let mut diags = Diagnostics::new();
        let spec = LineSpec {
            transparent: true,
            ..LineSpec::default()
        };
        assert_eq!(r.resolve_line(Some(&spec), None, &ctx(), &mut diags), None);
    }

    #[test]
    fn font_cascade_earliest_level_wins() {
        let r = resolver();
        let mut diags = Diagnostics::new();
        let run = FontSpec {
            bold: Some(true),
            ..FontSpec::default()
        };
        let shape = FontSpec {
            bold: Some(false),
            size: Some(18.0),
            ..FontSpec::default()
        };
        let font =
            r.resolve_font_cascade(&[Some(&run), None, Some(&shape)], &ctx(), &mut diags);
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.size, Some(18.0));
        assert_eq!(font.family, None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let r = resolver();
        let spec = FillSpec::Solid {
            color: Some(ColorSpec::Named("#3498db".into())),
        };
        let mut d1 = Diagnostics::new();
        let mut d2 = Diagnostics::new();
        let a = r.resolve_fill(Some(&spec), Fill::None, &ctx(), &mut d1);
        let b = r.resolve_fill(Some(&spec), Fill::None, &ctx(), &mut d2);
        assert_eq!(a, b);
        let ja = serde_json::to_string(&a).unwrap();
        let jb = serde_json::to_string(&b).unwrap();
        assert_eq!(ja, jb);
    }
}
