//! Pipeline diagnostics rendering shared by reports.

use pbgen_codegen::pipeline::{Diagnostic, Severity};

use super::output::Output;

pub(super) fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        match diag.severity {
            Severity::Info => out.note(&diag.message),
            Severity::Warning | Severity::Error => out.warning(&diag.message),
        }
        if let Some(location) = &diag.location {
            out.hint("-->", location);
        }
        if let Some(help) = &diag.help {
            out.hint("help:", help);
        }
    }
}
