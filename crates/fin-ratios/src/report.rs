//! Report tables and narrative facts.
//!
//! Document assembly (spreadsheets, word processing) belongs to the consumer;
//! this module only produces the named tables and comparison facts it needs.

use crate::{
    AlignedStatements, IndustryBaseline, Metric, MetricsTable, RatioRegistry, Result,
    statement::StatementKind,
};
use derive_more::Display;
use polars::prelude::*;
use serde::Serialize;

/// A named table destined for one sheet or section of a report.
#[derive(Debug, Clone)]
pub struct ReportSheet {
    /// Sheet name
    pub name: &'static str,
    /// Sheet contents
    pub frame: DataFrame,
}

/// Metric / Formula table for every registered ratio.
pub fn formulas_frame(registry: &RatioRegistry) -> Result<DataFrame> {
    let metrics: Vec<&str> = registry.iter().map(|r| r.metric().label()).collect();
    let formulas: Vec<&str> = registry.iter().map(|r| r.formula()).collect();

    Ok(DataFrame::new(vec![
        Column::new("Metric".into(), metrics),
        Column::new("Formula".into(), formulas),
    ])?)
}

/// The standard report: metrics with industry averages, the three aligned
/// statements, and the formulas used.
pub fn report_sheets(
    metrics: &MetricsTable,
    statements: &AlignedStatements,
    registry: &RatioRegistry,
    baseline: &IndustryBaseline,
) -> Result<Vec<ReportSheet>> {
    let mut sheets = vec![ReportSheet {
        name: "Financial Metrics",
        frame: metrics.to_display_frame(Some(baseline))?,
    }];

    for kind in [
        StatementKind::BalanceSheet,
        StatementKind::IncomeStatement,
        StatementKind::CashFlow,
    ] {
        sheets.push(ReportSheet {
            name: kind.title(),
            frame: statements.get(kind).to_frame()?,
        });
    }

    sheets.push(ReportSheet {
        name: "Formulas",
        frame: formulas_frame(registry)?,
    });

    Ok(sheets)
}

/// How a metric compares with its benchmark.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// Better than the benchmark in the metric's favourable direction
    #[display("better than industry average")]
    Favorable,
    /// Within tolerance of the benchmark
    #[display("in line with industry average")]
    InLine,
    /// Worse than the benchmark in the metric's favourable direction
    #[display("worse than industry average")]
    Unfavorable,
}

/// Relative distance from the benchmark treated as in line.
pub const IN_LINE_TOLERANCE: f64 = 0.05;

/// One metric's latest value against its benchmark, ready for prose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricFact {
    /// The metric
    pub metric: Metric,
    /// Most recent value; `None` when undefined
    pub latest: Option<f64>,
    /// Benchmark value
    pub baseline: f64,
    /// Comparison; `None` when the latest value is undefined or not finite
    pub assessment: Option<Assessment>,
}

/// Latest-period facts for every reported metric, in display order.
///
/// Optional metrics that are undefined in every period (DSO without
/// receivables) are left out.
pub fn metric_facts(metrics: &MetricsTable, baseline: &IndustryBaseline) -> Vec<MetricFact> {
    metrics
        .metrics()
        .filter(|metric| metrics.is_reported(*metric))
        .map(|metric| {
            let latest = metrics.value(0, metric);
            let benchmark = baseline.get(metric);
            MetricFact {
                metric,
                latest,
                baseline: benchmark,
                assessment: latest.and_then(|value| assess(metric, value, benchmark)),
            }
        })
        .collect()
}

fn assess(metric: Metric, value: f64, benchmark: f64) -> Option<Assessment> {
    if !value.is_finite() || !benchmark.is_finite() {
        return None;
    }
    if (value - benchmark).abs() <= IN_LINE_TOLERANCE * benchmark.abs() {
        return Some(Assessment::InLine);
    }
    let above = value > benchmark;
    Some(if above == metric.higher_is_better() {
        Assessment::Favorable
    } else {
        Assessment::Unfavorable
    })
}

impl std::fmt::Display for MetricFact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.latest, self.assessment) {
            (Some(value), Some(assessment)) => write!(
                f,
                "{} was {:.2}, {} ({:.2})",
                self.metric, value, assessment, self.baseline
            ),
            (Some(value), None) => write!(f, "{} was {}", self.metric, value),
            (None, _) => write!(f, "{} is not available", self.metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Period;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[test]
    fn test_formulas_frame() {
        let frame = formulas_frame(&RatioRegistry::with_defaults()).unwrap();
        assert_eq!(frame.shape(), (9, 2));
        let formulas = frame.column("Formula").unwrap().str().unwrap();
        assert_eq!(formulas.get(0), Some("Current Assets / Current Liabilities"));
    }

    #[rstest]
    #[case(Metric::CurrentRatio, 2.0, 1.5, Some(Assessment::Favorable))]
    #[case(Metric::CurrentRatio, 1.0, 1.5, Some(Assessment::Unfavorable))]
    #[case(Metric::CurrentRatio, 1.52, 1.5, Some(Assessment::InLine))]
    #[case(Metric::DebtRatio, 0.8, 0.5, Some(Assessment::Unfavorable))]
    #[case(Metric::DaysSalesOutstanding, 30.0, 45.0, Some(Assessment::Favorable))]
    #[case(Metric::ReturnOnEquity, f64::INFINITY, 0.15, None)]
    fn test_assess(
        #[case] metric: Metric,
        #[case] value: f64,
        #[case] benchmark: f64,
        #[case] expected: Option<Assessment>,
    ) {
        assert_eq!(assess(metric, value, benchmark), expected);
    }

    #[test]
    fn test_metric_facts() {
        let table = MetricsTable::new(
            vec![Period::from_ymd(2024, 12, 31).unwrap()],
            BTreeMap::from([
                (Metric::CurrentRatio, vec![Some(3.0)]),
                (Metric::ReturnOnEquity, vec![None]),
                (Metric::DaysSalesOutstanding, vec![None]),
            ]),
        )
        .unwrap();

        let facts = metric_facts(&table, &IndustryBaseline::default());
        let metrics: Vec<Metric> = facts.iter().map(|f| f.metric).collect();
        assert_eq!(metrics, [Metric::CurrentRatio, Metric::ReturnOnEquity]);
        assert_eq!(facts[0].assessment, Some(Assessment::Favorable));
        assert_eq!(
            facts[0].to_string(),
            "Current Ratio was 3.00, better than industry average (1.50)"
        );
        assert_eq!(facts[1].to_string(), "Return on Equity is not available");
    }

    #[rstest]
    #[case(Metric::DebtRatio, 0.3, "Debt Ratio was 0.30, better than industry average (0.50)")]
    #[case(Metric::DebtRatio, 0.6, "Debt Ratio was 0.60, worse than industry average (0.50)")]
    #[case(
        Metric::DaysSalesOutstanding,
        30.0,
        "Days Sales Outstanding was 30.00, better than industry average (45.00)"
    )]
    #[case(
        Metric::DaysSalesOutstanding,
        60.0,
        "Days Sales Outstanding was 60.00, worse than industry average (45.00)"
    )]
    fn test_lower_is_better_wording(
        #[case] metric: Metric,
        #[case] value: f64,
        #[case] expected: &str,
    ) {
        let table = MetricsTable::new(
            vec![Period::from_ymd(2024, 12, 31).unwrap()],
            BTreeMap::from([(metric, vec![Some(value)])]),
        )
        .unwrap();

        let facts = metric_facts(&table, &IndustryBaseline::default());
        assert_eq!(facts[0].to_string(), expected);
    }

    #[test]
    fn test_report_drops_undefined_dso() {
        let periods = vec![Period::from_ymd(2024, 12, 31).unwrap()];
        let columns = Metric::ALL
            .into_iter()
            .map(|m| match m {
                Metric::DaysSalesOutstanding => (m, vec![None]),
                _ => (m, vec![Some(1.0)]),
            })
            .collect();
        let table = MetricsTable::new(periods, columns).unwrap();

        let frame = table.to_display_frame(Some(&IndustryBaseline::default())).unwrap();
        let labels: Vec<Option<&str>> = frame.column("Metric").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(labels.len(), 8);
        assert!(!labels.contains(&Some("Days Sales Outstanding")));

        let facts = metric_facts(&table, &IndustryBaseline::default());
        assert_eq!(facts.len(), 8);
        assert!(facts.iter().all(|f| f.metric != Metric::DaysSalesOutstanding));
    }
}
