//! Generate operation - the existence-gated bootstrap write.

use std::path::Path;

use eyre::{Context, Result};
use pbgen_codegen::pipeline::EnsureOutcome;
use pbgen_codegen_typescript::{Generator, files::PrismaConfigTs};
use pbgen_core::{GeneratedFile, WriteResult, relative_to};
use pbgen_manifest::Config;

use crate::reports::{
    FileStatus, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Render without writing anything.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Writes the bootstrap file (and the optional `prisma.config.ts`) when it
/// is missing. Existing files are never touched.
pub fn generate(root: &Path, config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let inputs = super::inputs(root, config);
    let pipeline = super::pipeline();
    let prisma_config = config
        .scaffold_prisma_config
        .then(|| PrismaConfigTs::new(&relative_to(&inputs.schema, root)));

    if opts.dry_run {
        let mut preview = PreviewResult::default();

        let target_exists = inputs
            .target
            .try_exists()
            .wrap_err_with(|| format!("failed to check '{}'", inputs.target.display()))?;
        if target_exists {
            preview.existing.push(inputs.target.clone());
        } else {
            let (ctx, file) = pipeline.preview(inputs, &Generator::new())?;
            preview.diagnostics = ctx.diagnostics;
            preview.files.push(PreviewFile {
                path: file.path,
                content: file.content,
            });
        }

        if let Some(prisma_config) = &prisma_config {
            let path = prisma_config.path(root);
            let exists = path
                .try_exists()
                .wrap_err_with(|| format!("failed to check '{}'", path.display()))?;
            if exists {
                preview.existing.push(path);
            } else {
                preview.files.push(PreviewFile {
                    path,
                    content: prisma_config.render(),
                });
            }
        }

        return Ok(GenerateReport {
            result: GenerationResult::Preview(preview),
        });
    }

    let outcome = pipeline.ensure(inputs, &Generator::new())?;
    let bootstrap = FileStatus {
        path: outcome.path().to_path_buf(),
        written: outcome.is_generated(),
    };
    let diagnostics = match outcome {
        EnsureOutcome::Generated { diagnostics, .. } => diagnostics,
        EnsureOutcome::Skipped { .. } => Vec::new(),
    };

    let prisma_config = prisma_config
        .map(|file| {
            let path = file.path(root);
            let written = file
                .write(root)
                .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
            Ok::<_, eyre::Report>(FileStatus {
                path,
                written: written == WriteResult::Written,
            })
        })
        .transpose()?;

    Ok(GenerateReport {
        result: GenerationResult::Written(WrittenResult {
            diagnostics,
            bootstrap,
            prisma_config,
        }),
    })
}
