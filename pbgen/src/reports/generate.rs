//! Generate command report data structures.

use std::path::PathBuf;

use pbgen_codegen::pipeline::Diagnostic;

use super::{
    diagnostics::render_diagnostics,
    output::{Output, Report},
};

/// Report data from the generate command.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk (or left alone because they exist).
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when generation ran for real.
#[derive(Debug)]
pub struct WrittenResult {
    /// Diagnostics from the pipeline (empty when the bootstrap was skipped).
    pub diagnostics: Vec<Diagnostic>,
    /// The bootstrap file.
    pub bootstrap: FileStatus,
    /// The `prisma.config.ts` scaffold, when enabled.
    pub prisma_config: Option<FileStatus>,
}

/// What happened to one build-once file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: PathBuf,
    /// `false` when the file already existed.
    pub written: bool,
}

/// Result of a dry-run preview.
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Diagnostics from the pipeline.
    pub diagnostics: Vec<Diagnostic>,
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    /// Files that exist and would be left untouched.
    pub existing: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => render_written(out, written),
            GenerationResult::Preview(preview) => render_preview(out, preview),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    render_diagnostics(out, &written.diagnostics);
    if !written.diagnostics.is_empty() {
        out.newline();
    }

    let files = std::iter::once(&written.bootstrap).chain(written.prisma_config.as_ref());
    let (created, kept): (Vec<&FileStatus>, Vec<&FileStatus>) = files.partition(|f| f.written);

    if !created.is_empty() {
        out.section("Generated");
        for file in created {
            out.added_item(&file.path.display().to_string());
        }
    }

    if !kept.is_empty() {
        out.section("Already present (delete to regenerate)");
        for file in kept {
            out.kept_item(&file.path.display().to_string());
        }
    }
}

fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
    render_diagnostics(out, &preview.diagnostics);

    for file in &preview.files {
        out.divider(&file.path.display().to_string());
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    let count = preview.files.len();
    out.preformatted(&format!(
        "{} file{} would be generated",
        count,
        if count == 1 { "" } else { "s" }
    ));
    for path in &preview.existing {
        out.kept_item(&format!("{} (exists, left untouched)", path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written_groups_files() {
        let report = GenerateReport {
            result: GenerationResult::Written(WrittenResult {
                diagnostics: vec![
                    Diagnostic::warning("verify-dependency", "missing adapter package 'x'")
                        .with_help("install it with: npm install x"),
                ],
                bootstrap: FileStatus {
                    path: PathBuf::from("/app/server/utils/prisma.ts"),
                    written: true,
                },
                prisma_config: Some(FileStatus {
                    path: PathBuf::from("/app/prisma.config.ts"),
                    written: false,
                }),
            }),
        };

        assert_eq!(
            RecordingOutput::render(&report),
            vec![
                "warning: missing adapter package 'x'",
                "help: install it with: npm install x",
                "",
                "Generated:",
                "+ /app/server/utils/prisma.ts",
                "Already present (delete to regenerate):",
                "= /app/prisma.config.ts",
            ]
        );
    }

    #[test]
    fn test_render_preview_summary() {
        let report = GenerateReport {
            result: GenerationResult::Preview(PreviewResult {
                diagnostics: Vec::new(),
                files: vec![PreviewFile {
                    path: PathBuf::from("server/utils/prisma.ts"),
                    content: "export {};".to_string(),
                }],
                existing: Vec::new(),
            }),
        };

        assert_eq!(
            RecordingOutput::render(&report),
            vec![
                "-- server/utils/prisma.ts --",
                "export {};",
                "-- Summary --",
                "1 file would be generated",
            ]
        );
    }
}
