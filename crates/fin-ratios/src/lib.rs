#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fin-ratios/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod baseline;
pub mod chart;
pub mod config;
pub mod efficiency;
pub mod engine;
pub mod error;
pub mod liquidity;
pub mod metric;
pub mod metrics;
pub mod period;
pub mod pipeline;
pub mod profitability;
pub mod registry;
pub mod report;
pub mod rows;
pub mod scoring;
pub mod solvency;
pub mod statement;
pub mod traits;

// Re-export core types
pub use align::{AlignedStatements, align};
pub use baseline::IndustryBaseline;
pub use chart::{Chart, ChartKind, Trace};
pub use config::{AnalysisConfig, DEFAULT_LOOKBACK_YEARS};
pub use engine::MetricEngine;
pub use error::{RatioError, Result};
pub use metric::Metric;
pub use metrics::{MetricsTable, RatioSnapshot};
pub use period::Period;
pub use pipeline::{Analysis, Pipeline, StatementSource};
pub use registry::{RatioCategory, RatioInfo, RatioRegistry};
pub use report::{Assessment, MetricFact, ReportSheet};
pub use rows::CanonicalRow;
pub use scoring::{CompositeScore, score};
pub use statement::{FinancialStatement, StatementKind, StatementSet};
pub use traits::{ConfigurableRatio, Ratio, RatioConfig, RowInputs};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
