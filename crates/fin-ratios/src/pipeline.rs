//! End-to-end analysis: align, compute, score.

use crate::{
    AlignedStatements, AnalysisConfig, CompositeScore, MetricEngine, MetricsTable, RatioError,
    Result, StatementSet,
    chart::{self, Chart},
    metrics::RatioSnapshot,
    report::{self, MetricFact, ReportSheet},
    scoring,
};
use std::fmt::Display;
use tracing::{info, instrument};

/// Provider of a company's three statements.
///
/// Implementations own their transport and error type; the pipeline only sees
/// the diagnostic text.
pub trait StatementSource {
    /// Provider error
    type Error: Display;

    /// Fetch the balance sheet, income statement and cash flow for `ticker`.
    fn fetch(&self, ticker: &str) -> std::result::Result<StatementSet, Self::Error>;
}

/// Result of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    statements: AlignedStatements,
    metrics: MetricsTable,
    latest: RatioSnapshot,
    score: CompositeScore,
}

impl Analysis {
    /// Statements restricted to the analyzed periods.
    pub const fn statements(&self) -> &AlignedStatements {
        &self.statements
    }

    /// Ratios for every analyzed period, most recent first.
    pub const fn metrics(&self) -> &MetricsTable {
        &self.metrics
    }

    /// Ratios of the most recent period.
    pub const fn latest(&self) -> &RatioSnapshot {
        &self.latest
    }

    /// Composite score of the most recent period.
    pub const fn score(&self) -> &CompositeScore {
        &self.score
    }

    /// Time-series charts followed by the radar chart labelled `company`.
    pub fn charts(&self, company: &str) -> Vec<Chart> {
        let mut charts = chart::metric_charts(&self.metrics);
        charts.push(chart::radar_chart(&self.score, company));
        charts
    }
}

/// Runs analyses with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: AnalysisConfig,
    engine: MetricEngine,
}

impl Pipeline {
    /// Create a pipeline with the default ratio set.
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_engine(config, MetricEngine::default())
    }

    /// Create a pipeline with a custom engine.
    pub const fn with_engine(config: AnalysisConfig, engine: MetricEngine) -> Self {
        Self { config, engine }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The metric engine in use.
    pub const fn engine(&self) -> &MetricEngine {
        &self.engine
    }

    /// Analyze the `lookback_years` most recent common periods.
    #[instrument(skip(self, statements))]
    pub fn run(&self, statements: &StatementSet, lookback_years: usize) -> Result<Analysis> {
        let aligned = statements.align(lookback_years)?;
        let metrics = self.engine.compute(&aligned)?;
        let latest = metrics.latest().ok_or(RatioError::InsufficientData {
            required: 1,
            available: 0,
        })?;
        let score = scoring::score(&latest, &self.config.baseline);

        info!(
            periods = metrics.len(),
            latest = %latest.period,
            liquidity = score.liquidity,
            efficiency = score.efficiency,
            profitability = score.profitability,
            solvency = score.solvency,
            "analysis complete"
        );

        Ok(Analysis {
            statements: aligned,
            metrics,
            latest,
            score,
        })
    }

    /// Fetch statements for `ticker` from `source` and analyze them.
    ///
    /// # Errors
    ///
    /// Provider failures become [`RatioError::Source`]; analysis failures are
    /// returned unchanged.
    pub fn run_for<S: StatementSource>(
        &self,
        source: &S,
        ticker: &str,
        lookback_years: usize,
    ) -> Result<Analysis> {
        let statements = source.fetch(ticker).map_err(|e| RatioError::Source {
            ticker: ticker.to_string(),
            message: e.to_string(),
        })?;
        self.run(&statements, lookback_years)
    }

    /// Report sheets for `analysis` using this pipeline's ratios and baseline.
    pub fn report_sheets(&self, analysis: &Analysis) -> Result<Vec<ReportSheet>> {
        report::report_sheets(
            &analysis.metrics,
            &analysis.statements,
            self.engine.registry(),
            &self.config.baseline,
        )
    }

    /// Latest-period facts against this pipeline's baseline.
    pub fn facts(&self, analysis: &Analysis) -> Vec<MetricFact> {
        report::metric_facts(&analysis.metrics, &self.config.baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FinancialStatement, Metric, Period};
    use approx::assert_relative_eq;

    fn statement(rows: &[(&str, [f64; 2])]) -> FinancialStatement {
        FinancialStatement::new(
            vec![
                Period::from_ymd(2024, 9, 30).unwrap(),
                Period::from_ymd(2023, 9, 30).unwrap(),
            ],
            rows.iter()
                .map(|(label, values)| (label.to_string(), values.map(Some).to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn statements() -> StatementSet {
        StatementSet::new(
            statement(&[
                ("Current Assets", [150.0, 130.0]),
                ("Current Liabilities", [100.0, 90.0]),
                ("Inventory", [30.0, 20.0]),
                ("Accounts Receivable", [50.0, 40.0]),
                ("Total Assets", [400.0, 360.0]),
                ("Total Liabilities", [250.0, 230.0]),
                ("Stockholders Equity", [150.0, 130.0]),
            ]),
            statement(&[
                ("Total Revenue", [365.0, 300.0]),
                ("Net Income", [36.5, 30.0]),
                ("EBIT", [60.0, 50.0]),
            ]),
            statement(&[("Operating Cash Flow", [70.0, 60.0])]),
        )
    }

    struct Fixed(Option<StatementSet>);

    impl StatementSource for Fixed {
        type Error = String;

        fn fetch(&self, ticker: &str) -> std::result::Result<StatementSet, Self::Error> {
            self.0
                .clone()
                .ok_or_else(|| format!("no data for {ticker}"))
        }
    }

    #[test]
    fn test_run() {
        let analysis = Pipeline::default().run(&statements(), 5).unwrap();

        assert_eq!(analysis.metrics().len(), 2);
        assert_eq!(analysis.latest().period.to_string(), "2024-09-30");
        assert_relative_eq!(analysis.latest().get(Metric::CurrentRatio).unwrap(), 1.5);
        assert_relative_eq!(analysis.latest().get(Metric::QuickRatio).unwrap(), 1.2);
        assert_relative_eq!(analysis.latest().get(Metric::DaysSalesOutstanding).unwrap(), 50.0);
        assert_relative_eq!(analysis.latest().get(Metric::DebtRatio).unwrap(), 0.625);
        assert!(analysis.score().solvency.is_finite());
    }

    #[test]
    fn test_run_lookback_one() {
        let analysis = Pipeline::default().run(&statements(), 1).unwrap();
        assert_eq!(analysis.metrics().len(), 1);
        assert_eq!(analysis.statements().len(), 1);
    }

    #[test]
    fn test_run_for_source_failure() {
        let err = Pipeline::default()
            .run_for(&Fixed(None), "ZZZZ", 5)
            .unwrap_err();
        assert!(matches!(err, RatioError::Source { ref ticker, .. } if ticker == "ZZZZ"));
        assert_eq!(
            err.to_string(),
            "Failed to retrieve statements for ZZZZ: no data for ZZZZ"
        );
    }

    #[test]
    fn test_run_for_success() {
        let analysis = Pipeline::default()
            .run_for(&Fixed(Some(statements())), "AAPL", 5)
            .unwrap();
        let charts = analysis.charts("Apple Inc.");
        assert_eq!(charts.last().unwrap().key, "radar");
        assert_eq!(charts.last().unwrap().traces[0].name, "Apple Inc.");
    }

    #[test]
    fn test_report_sheets() {
        let pipeline = Pipeline::default();
        let analysis = pipeline.run(&statements(), 5).unwrap();
        let sheets = pipeline.report_sheets(&analysis).unwrap();
        let names: Vec<&str> = sheets.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["Financial Metrics", "Balance Sheet", "Income Statement", "Cash Flow", "Formulas"]
        );
        assert_eq!(pipeline.facts(&analysis).len(), 9);
    }
}
