//! Full pipeline over DataFrame-imported statements.

use approx::assert_relative_eq;
use fin_ratios::{
    AnalysisConfig, CompositeScore, FinancialStatement, IndustryBaseline, Metric, Pipeline,
    RatioError, StatementSet, StatementSource, chart::metric_charts, scoring::LIQUIDITY_CAP,
};
use polars::prelude::*;

fn balance_sheet() -> DataFrame {
    df![
        "index" => [
            "Total Current Assets",
            "Total Current Liabilities",
            "Inventory",
            "Net Receivables",
            "Total Assets",
            "Total Stockholder Equity",
        ],
        "2024-09-28 00:00:00" => [300.0, 150.0, 50.0, 80.0, 1000.0, 400.0],
        "2023-09-30 00:00:00" => [200.0, 120.0, 40.0, 60.0, 900.0, 380.0],
        "2022-09-24 00:00:00" => [100.0, 90.0, 30.0, 50.0, 800.0, 350.0],
        "2021-09-25 00:00:00" => [90.0, 80.0, 20.0, 40.0, 700.0, 300.0]
    ]
    .unwrap()
}

fn income_statement() -> DataFrame {
    df![
        "index" => ["Total Revenue", "Net Income", "Interest Expense", "Income Tax Expense"],
        "2024-09-28 00:00:00" => [730.0, 100.0, 20.0, 30.0],
        "2023-09-30 00:00:00" => [600.0, 90.0, 15.0, 25.0],
        "2022-09-24 00:00:00" => [500.0, 70.0, 10.0, 20.0]
    ]
    .unwrap()
}

fn cash_flow() -> DataFrame {
    df![
        "index" => ["Operating Cash Flow"],
        "2024-09-28 00:00:00" => [120.0],
        "2023-09-30 00:00:00" => [110.0]
    ]
    .unwrap()
}

fn statements(balance: DataFrame) -> StatementSet {
    StatementSet::new(
        FinancialStatement::from_frame(&balance, "index").unwrap(),
        FinancialStatement::from_frame(&income_statement(), "index").unwrap(),
        FinancialStatement::from_frame(&cash_flow(), "index").unwrap(),
    )
}

fn without(frame: DataFrame, label: &str) -> DataFrame {
    let mask = frame
        .column("index")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|l| l != Some(label))
        .collect::<BooleanChunked>();
    frame.filter(&mask).unwrap()
}

#[test]
fn test_full_analysis() {
    let analysis = Pipeline::default()
        .run(&statements(balance_sheet()), 5)
        .unwrap();
    let metrics = analysis.metrics();

    // three common periods, most recent first
    let periods: Vec<String> = metrics.periods().iter().map(ToString::to_string).collect();
    assert_eq!(periods, ["2024-09-28", "2023-09-30", "2022-09-24"]);

    assert_relative_eq!(metrics.value(0, Metric::CurrentRatio).unwrap(), 2.0);
    assert_relative_eq!(metrics.value(0, Metric::QuickRatio).unwrap(), 250.0 / 150.0);
    // average current assets: 250, 150, 100
    assert_relative_eq!(metrics.value(0, Metric::CurrentAssetTurnover).unwrap(), 730.0 / 250.0);
    assert_relative_eq!(metrics.value(2, Metric::CurrentAssetTurnover).unwrap(), 5.0);
    assert_relative_eq!(metrics.value(0, Metric::DaysSalesOutstanding).unwrap(), 40.0);
    // derived liabilities 600, derived EBIT 150
    assert_relative_eq!(metrics.value(0, Metric::DebtRatio).unwrap(), 0.6);
    assert_relative_eq!(metrics.value(0, Metric::BasicEarningPower).unwrap(), 0.15);
    assert_relative_eq!(metrics.value(0, Metric::ReturnOnEquity).unwrap(), 0.25);
}

#[test]
fn test_lookback_limits_periods() {
    let analysis = Pipeline::default()
        .run(&statements(balance_sheet()), 2)
        .unwrap();
    assert_eq!(analysis.metrics().len(), 2);
    assert_eq!(analysis.statements().cash_flow().periods().len(), 2);
}

#[test]
fn test_no_common_periods() {
    let income = df![
        "index" => ["Total Revenue", "Net Income"],
        "2019-12-31" => [1.0, 1.0]
    ]
    .unwrap();
    let statements = StatementSet::new(
        FinancialStatement::from_frame(&balance_sheet(), "index").unwrap(),
        FinancialStatement::from_frame(&income, "index").unwrap(),
        FinancialStatement::from_frame(&cash_flow(), "index").unwrap(),
    );

    let err = Pipeline::default().run(&statements, 5).unwrap_err();
    assert!(matches!(err, RatioError::Alignment { .. }));
}

#[test]
fn test_missing_inventory_quick_equals_current() {
    let analysis = Pipeline::default()
        .run(&statements(without(balance_sheet(), "Inventory")), 5)
        .unwrap();
    let metrics = analysis.metrics();

    assert_eq!(
        metrics.series(Metric::QuickRatio),
        metrics.series(Metric::CurrentRatio)
    );
}

#[test]
fn test_missing_receivables_drops_dso() {
    let pipeline = Pipeline::default();
    let analysis = pipeline
        .run(&statements(without(balance_sheet(), "Net Receivables")), 5)
        .unwrap();

    assert!(analysis.metrics().is_undefined(Metric::DaysSalesOutstanding));
    assert!(metric_charts(analysis.metrics()).iter().all(|c| c.key != "dso"));
    assert!(analysis.score().efficiency.is_finite());

    let sheets = pipeline.report_sheets(&analysis).unwrap();
    let labels: Vec<Option<&str>> = sheets[0]
        .frame
        .column("Metric")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(labels.len(), 8);
    assert!(!labels.contains(&Some("Days Sales Outstanding")));

    let facts = pipeline.facts(&analysis);
    assert!(facts.iter().all(|f| f.metric != Metric::DaysSalesOutstanding));
}

#[test]
fn test_non_period_column_is_ignored() {
    let balance = balance_sheet()
        .hstack(&[Column::new("TTM".into(), vec![1.0; 6])])
        .unwrap();
    let analysis = Pipeline::default().run(&statements(balance), 5).unwrap();
    assert_eq!(analysis.metrics().len(), 3);
}

#[test]
fn test_missing_required_row_lists_available() {
    let err = Pipeline::default()
        .run(&statements(without(balance_sheet(), "Total Current Assets")), 5)
        .unwrap_err();

    assert!(matches!(err, RatioError::RequiredRowNotFound { .. }));
    let message = err.to_string();
    for label in [
        "Total Current Liabilities",
        "Inventory",
        "Net Receivables",
        "Total Assets",
        "Total Stockholder Equity",
    ] {
        assert!(message.contains(label), "{message}");
    }
}

#[test]
fn test_liquidity_capped() {
    let config = AnalysisConfig {
        baseline: IndustryBaseline {
            current_ratio: 0.2,
            quick_ratio: 0.1,
            ..IndustryBaseline::default()
        },
        ..AnalysisConfig::default()
    };
    let analysis = Pipeline::new(config)
        .run(&statements(balance_sheet()), 5)
        .unwrap();
    assert_eq!(analysis.score().liquidity, LIQUIDITY_CAP);
}

#[test]
fn test_self_baseline_parity() {
    let analysis = Pipeline::default()
        .run(&statements(balance_sheet()), 5)
        .unwrap();
    let baseline = IndustryBaseline::from_snapshot(analysis.latest());

    let rescored = Pipeline::new(AnalysisConfig {
        baseline,
        ..AnalysisConfig::default()
    })
    .run(&statements(balance_sheet()), 5)
    .unwrap();

    assert_eq!(*rescored.score(), CompositeScore::baseline());
}

struct Offline;

impl StatementSource for Offline {
    type Error = &'static str;

    fn fetch(&self, _ticker: &str) -> Result<StatementSet, Self::Error> {
        Err("connection refused")
    }
}

#[test]
fn test_source_failure_is_one_diagnostic() {
    let err = Pipeline::default().run_for(&Offline, "AAPL", 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to retrieve statements for AAPL: connection refused"
    );
}
