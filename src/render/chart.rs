//! Chart construction: chart-type parsing and per-family data preparation.

use crate::diagnostics::{DiagnosticContext, Diagnostics};
use crate::doc::chart::{
    BubbleSeries, CategorySeries, Chart, ChartData, ChartFamily, ChartKind, Legend,
    LegendPosition, XySeries,
};
use crate::spec::chart::ChartPayload;

/// Parses a chart-type name. Unknown names return `None` so the dispatcher
/// can warn and skip the shape.
pub fn parse_chart_kind(name: &str) -> Option<ChartKind> {
    match name {
        "COLUMN_CLUSTERED" => Some(ChartKind::ColumnClustered),
        "COLUMN_STACKED" => Some(ChartKind::ColumnStacked),
        "BAR_CLUSTERED" => Some(ChartKind::BarClustered),
        "BAR_STACKED" => Some(ChartKind::BarStacked),
        "LINE" => Some(ChartKind::Line),
        "LINE_MARKERS" => Some(ChartKind::LineMarkers),
        "PIE" => Some(ChartKind::Pie),
        "DOUGHNUT" => Some(ChartKind::Doughnut),
        "AREA" => Some(ChartKind::Area),
        "AREA_STACKED" => Some(ChartKind::AreaStacked),
        "RADAR" => Some(ChartKind::Radar),
        "XY_SCATTER" => Some(ChartKind::XyScatter),
        "XY_SCATTER_LINES" => Some(ChartKind::XyScatterLines),
        "BUBBLE" => Some(ChartKind::Bubble),
        _ => None,
    }
}

/// Builds a chart from its payload, or `None` when the chart type is
/// unrecognized. Series whose payload does not match the chart's family are
/// dropped with a diagnostic; remaining series still render.
pub fn build_chart(
    payload: &ChartPayload,
    ctx: &DiagnosticContext,
    diags: &mut Diagnostics,
) -> Option<Chart> {
    let type_name = payload.chart_type.as_deref().unwrap_or("COLUMN_CLUSTERED");
    let Some(kind) = parse_chart_kind(type_name) else {
        diags.warn(ctx.clone(), format!("unsupported chart type: {}", type_name));
        return None;
    };

    let data = match kind.family() {
        ChartFamily::Category => {
            let mut series = Vec::new();
            for s in &payload.series {
                match &s.values {
                    Some(values) => series.push(CategorySeries {
                        name: s.name.clone().unwrap_or_else(|| "Series".to_string()),
                        values: values.clone(),
                    }),
                    None => diags.warn(
                        ctx.clone(),
                        format!(
                            "series '{}' has no values for category chart, dropping it",
                            s.name.as_deref().unwrap_or("?")
                        ),
                    ),
                }
            }
            ChartData::Category {
                categories: payload.categories.clone(),
                series,
            }
        }
        ChartFamily::Xy => {
            let mut series = Vec::new();
            for s in &payload.series {
                match &s.xy_points {
                    Some(points) => series.push(XySeries {
                        name: s.name.clone().unwrap_or_else(|| "Series".to_string()),
                        points: points.clone(),
                    }),
                    None => diags.warn(
                        ctx.clone(),
                        format!(
                            "series '{}' has no xy_points for scatter chart, dropping it",
                            s.name.as_deref().unwrap_or("?")
                        ),
                    ),
                }
            }
            ChartData::Xy { series }
        }
        ChartFamily::Bubble => {
            let mut series = Vec::new();
            for s in &payload.series {
                match &s.points {
                    Some(points) => series.push(BubbleSeries {
                        name: s.name.clone().unwrap_or_else(|| "Series".to_string()),
                        points: points.clone(),
                    }),
                    None => diags.warn(
                        ctx.clone(),
                        format!(
                            "series '{}' has no points for bubble chart, dropping it",
                            s.name.as_deref().unwrap_or("?")
                        ),
                    ),
                }
            }
            ChartData::Bubble { series }
        }
    };

    let formatting = payload.formatting.as_ref();
    let title = formatting.and_then(|f| f.title.clone());
    let legend = formatting.and_then(|f| f.legend.as_ref()).map(|l| Legend {
        visible: l.visible.unwrap_or(true),
        position: match l.position.as_deref() {
            Some("left") => LegendPosition::Left,
            Some("top") => LegendPosition::Top,
            Some("bottom") => LegendPosition::Bottom,
            _ => LegendPosition::Right,
        },
    });

    Some(Chart {
        kind,
        data,
        title,
        legend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::chart::{ChartFormattingSpec, LegendSpec, SeriesSpec};

    fn ctx() -> DiagnosticContext {
        DiagnosticContext::default()
    }

    #[test]
    fn unknown_chart_type_warns_and_returns_none() {
        let payload = ChartPayload {
            chart_type: Some("SPIDER".into()),
            categories: vec![],
            series: vec![],
            formatting: None,
        };
        let mut diags = Diagnostics::new();
        assert!(build_chart(&payload, &ctx(), &mut diags).is_none());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn category_chart_collects_named_series() {
        let payload = ChartPayload {
            chart_type: None, // defaults to COLUMN_CLUSTERED
            categories: vec!["Q1".into(), "Q2".into()],
            series: vec![SeriesSpec {
                name: Some("Revenue".into()),
                values: Some(vec![10.0, 12.5]),
                ..SeriesSpec::default()
            }],
            formatting: Some(ChartFormattingSpec {
                title: Some("Revenue by quarter".into()),
                legend: Some(LegendSpec {
                    visible: Some(true),
                    position: Some("bottom".into()),
                }),
            }),
        };
        let mut diags = Diagnostics::new();
        let chart = build_chart(&payload, &ctx(), &mut diags).unwrap();
        assert_eq!(chart.kind, ChartKind::ColumnClustered);
        assert_eq!(chart.title.as_deref(), Some("Revenue by quarter"));
        assert_eq!(
            chart.legend.as_ref().map(|l| l.position),
            Some(LegendPosition::Bottom)
        );
        let ChartData::Category { categories, series } = &chart.data else {
            panic!("expected category data");
        };
        assert_eq!(categories.len(), 2);
        assert_eq!(series[0].values, vec![10.0, 12.5]);
        assert!(diags.is_empty());
    }

    #[test]
    fn scatter_series_without_points_is_dropped_not_fatal() {
        let payload = ChartPayload {
            chart_type: Some("XY_SCATTER".into()),
            categories: vec![],
            series: vec![
                SeriesSpec {
                    name: Some("good".into()),
                    xy_points: Some(vec![(1.0, 2.0), (3.0, 4.0)]),
                    ..SeriesSpec::default()
                },
                SeriesSpec {
                    name: Some("bad".into()),
                    values: Some(vec![1.0]),
                    ..SeriesSpec::default()
                },
            ],
            formatting: None,
        };
        let mut diags = Diagnostics::new();
        let chart = build_chart(&payload, &ctx(), &mut diags).unwrap();
        let ChartData::Xy { series } = &chart.data else {
            panic!("expected xy data");
        };
        assert_eq!(series.len(), 1);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn bubble_family_takes_triples() {
        let payload = ChartPayload {
            chart_type: Some("BUBBLE".into()),
            categories: vec![],
            series: vec![SeriesSpec {
                name: Some("s".into()),
                points: Some(vec![(1.0, 2.0, 0.5)]),
                ..SeriesSpec::default()
            }],
            formatting: None,
        };
        let mut diags = Diagnostics::new();
        let chart = build_chart(&payload, &ctx(), &mut diags).unwrap();
        assert!(matches!(chart.data, ChartData::Bubble { .. }));
    }
}
