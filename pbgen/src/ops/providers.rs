//! Providers operation - the adapter registry listing.

use pbgen_codegen::adapters::AdapterResolver;

use crate::reports::ProvidersReport;

/// List every provider `resolver` accepts.
pub fn providers(resolver: &dyn AdapterResolver) -> ProvidersReport {
    ProvidersReport {
        providers: resolver.providers(),
    }
}

#[cfg(test)]
mod tests {
    use pbgen_codegen_typescript::PrismaAdapters;

    use super::*;

    #[test]
    fn test_lists_prisma_providers() {
        let report = providers(&PrismaAdapters::new());
        let names: Vec<_> = report.providers.iter().map(|p| p.provider).collect();

        assert!(names.contains(&"postgresql"));
        assert!(names.contains(&"mariadb"));
        assert!(names.contains(&"libsql"));
    }
}
