pub mod config;
pub mod error;
pub mod harness;
pub mod report;

pub use config::BenchConfig;
pub use error::BenchError;
pub use harness::{run_benchmark, winner, BenchResult, InstabilityRule};
pub use report::{
    critical_radius_table, fair_comparison_section, full_report, performance_section, preview,
    stability_table, timing_table,
};
