//! Report assembly and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{
    formatter_for, ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter,
};
pub use report::ScoreReport;
