//! Chart-ready series.
//!
//! Charts are plain data: axis titles, x labels and optional y values per
//! trace. Rendering belongs to the consumer.

use crate::{CompositeScore, Metric, MetricsTable};
use derive_more::Display;
use serde::Serialize;

/// How a chart should be drawn.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Lines with markers over periods
    Line,
    /// Bars over periods
    Bar,
    /// Closed polygon over named axes
    Radar,
}

/// One named series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// Legend entry
    pub name: String,
    /// Category labels (periods or radar axes)
    pub x: Vec<String>,
    /// Values; `None` renders as a gap
    pub y: Vec<Option<f64>>,
}

/// A chart specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Stable key for the consumer (e.g. `liquidity`)
    pub key: &'static str,
    /// Chart title
    pub title: &'static str,
    /// X axis title
    pub x_axis: &'static str,
    /// Y axis title
    pub y_axis: &'static str,
    /// Drawing style
    pub kind: ChartKind,
    /// Series to draw
    pub traces: Vec<Trace>,
}

struct ChartGroup {
    key: &'static str,
    title: &'static str,
    y_axis: &'static str,
    kind: ChartKind,
    metrics: &'static [Metric],
}

const GROUPS: &[ChartGroup] = &[
    ChartGroup {
        key: "liquidity",
        title: "Liquidity Ratios",
        y_axis: "Ratio Value",
        kind: ChartKind::Line,
        metrics: &[Metric::CurrentRatio, Metric::QuickRatio],
    },
    ChartGroup {
        key: "efficiency",
        title: "Asset Turnover Ratios",
        y_axis: "Turnover Ratio",
        kind: ChartKind::Line,
        metrics: &[Metric::CurrentAssetTurnover, Metric::TotalAssetTurnover],
    },
    ChartGroup {
        key: "profitability",
        title: "Profitability Ratios",
        y_axis: "Ratio Value",
        kind: ChartKind::Line,
        metrics: &[
            Metric::ProfitMargin,
            Metric::ReturnOnEquity,
            Metric::BasicEarningPower,
        ],
    },
    ChartGroup {
        key: "solvency",
        title: "Debt Ratio",
        y_axis: "Ratio Value",
        kind: ChartKind::Bar,
        metrics: &[Metric::DebtRatio],
    },
    ChartGroup {
        key: "dso",
        title: "Days Sales Outstanding",
        y_axis: "Days",
        kind: ChartKind::Line,
        metrics: &[Metric::DaysSalesOutstanding],
    },
];

/// Time-series charts for the metrics table.
///
/// Only optional metrics are conditional: DSO without receivables data is left
/// out along with its chart. Other undefined values render as gaps.
pub fn metric_charts(table: &MetricsTable) -> Vec<Chart> {
    let periods: Vec<String> = table.periods().iter().map(ToString::to_string).collect();

    GROUPS
        .iter()
        .filter_map(|group| {
            let traces: Vec<Trace> = group
                .metrics
                .iter()
                .filter(|metric| table.is_reported(**metric))
                .filter_map(|metric| {
                    Some(Trace {
                        name: metric.label().to_string(),
                        x: periods.clone(),
                        y: table.series(*metric)?.to_vec(),
                    })
                })
                .collect();

            (!traces.is_empty()).then(|| Chart {
                key: group.key,
                title: group.title,
                x_axis: "Year",
                y_axis: group.y_axis,
                kind: group.kind,
                traces,
            })
        })
        .collect()
}

/// Radar chart comparing the composite score with the industry reference.
pub fn radar_chart(score: &CompositeScore, company: &str) -> Chart {
    let axes: Vec<String> = CompositeScore::LABELS.iter().map(ToString::to_string).collect();
    let trace = |name: &str, values: [f64; 4]| Trace {
        name: name.to_string(),
        x: axes.clone(),
        y: values.into_iter().map(Some).collect(),
    };

    Chart {
        key: "radar",
        title: "Financial Health Comparison",
        x_axis: "",
        y_axis: "Score vs Industry",
        kind: ChartKind::Radar,
        traces: vec![
            trace(company, score.to_values()),
            trace("Industry Average", CompositeScore::baseline().to_values()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Period;
    use std::collections::BTreeMap;

    fn table(dso: Vec<Option<f64>>) -> MetricsTable {
        let periods = vec![
            Period::from_ymd(2024, 12, 31).unwrap(),
            Period::from_ymd(2023, 12, 31).unwrap(),
        ];
        let mut columns: BTreeMap<Metric, Vec<Option<f64>>> = Metric::ALL
            .into_iter()
            .map(|m| (m, vec![Some(1.0), Some(2.0)]))
            .collect();
        columns.insert(Metric::DaysSalesOutstanding, dso);
        MetricsTable::new(periods, columns).unwrap()
    }

    #[test]
    fn test_charts_skip_undefined_dso() {
        let charts = metric_charts(&table(vec![None, None]));
        let keys: Vec<&str> = charts.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["liquidity", "efficiency", "profitability", "solvency"]);
    }

    #[test]
    fn test_charts_include_partial_dso() {
        let charts = metric_charts(&table(vec![Some(40.0), None]));
        let dso = charts.iter().find(|c| c.key == "dso").unwrap();
        assert_eq!(dso.traces[0].y, vec![Some(40.0), None]);
        assert_eq!(dso.traces[0].x, ["2024-12-31", "2023-12-31"]);
    }

    #[test]
    fn test_undefined_required_metric_is_still_charted() {
        let periods = vec![
            Period::from_ymd(2024, 12, 31).unwrap(),
            Period::from_ymd(2023, 12, 31).unwrap(),
        ];
        let columns = Metric::ALL
            .into_iter()
            .map(|m| match m {
                Metric::ReturnOnEquity => (m, vec![None, None]),
                _ => (m, vec![Some(1.0), Some(2.0)]),
            })
            .collect();
        let table = MetricsTable::new(periods, columns).unwrap();

        let charts = metric_charts(&table);
        let chart = charts.iter().find(|c| c.key == "profitability").unwrap();
        assert_eq!(chart.traces.len(), 3);
        assert_eq!(chart.traces[1].name, "Return on Equity");
        assert_eq!(chart.traces[1].y, vec![None, None]);
    }

    #[test]
    fn test_profitability_chart_traces() {
        let charts = metric_charts(&table(vec![None, None]));
        let chart = charts.iter().find(|c| c.key == "profitability").unwrap();
        let names: Vec<&str> = chart.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Profit Margin", "Return on Equity", "Basic Earning Power"]);
        assert_eq!(chart.kind, ChartKind::Line);
    }

    #[test]
    fn test_radar_chart() {
        let score = CompositeScore {
            liquidity: 1.2,
            efficiency: 0.9,
            profitability: 2.5,
            solvency: 0.4,
        };
        let chart = radar_chart(&score, "AAPL");

        assert_eq!(chart.kind, ChartKind::Radar);
        assert_eq!(chart.traces.len(), 2);
        assert_eq!(chart.traces[0].name, "AAPL");
        assert_eq!(chart.traces[0].y[2], Some(2.5));
        assert!(chart.traces[1].y.iter().all(|v| *v == Some(1.0)));
        assert_eq!(chart.traces[1].x, CompositeScore::LABELS);
    }
}
