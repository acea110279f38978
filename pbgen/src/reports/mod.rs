//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod diagnostics;
mod generate;
mod output;
mod providers;

pub use check::CheckReport;
pub use generate::{
    FileStatus, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};
pub use output::{Report, TerminalOutput};
pub use providers::ProvidersReport;
