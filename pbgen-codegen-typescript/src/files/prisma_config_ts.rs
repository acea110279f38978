//! prisma.config.ts scaffold.

use std::path::{Path, PathBuf};

use pbgen_core::{FileRules, GeneratedFile};

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

/// Name of the Prisma CLI config file.
pub const PRISMA_CONFIG_FILE: &str = "prisma.config.ts";

/// A default `prisma.config.ts` pointing the Prisma CLI at the schema and
/// reading the connection URL from `DATABASE_URL`.
///
/// Written only when missing: once created the file belongs to the user.
pub struct PrismaConfigTs {
    schema: String,
}

impl PrismaConfigTs {
    /// `schema` is the schema path relative to the project root.
    pub fn new(schema: &Path) -> Self {
        Self {
            schema: pbgen_core::to_import_specifier(schema)
                .trim_start_matches("./")
                .to_string(),
        }
    }

    fn migrations(&self) -> String {
        match self.schema.rsplit_once('/') {
            Some((dir, _)) => format!("{}/migrations", dir),
            None => "migrations".to_string(),
        }
    }
}

impl GeneratedFile for PrismaConfigTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(PRISMA_CONFIG_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        let config = format!(
            r#"export default defineConfig({{
  schema: "{}",
  migrations: {{
    path: "{}",
  }},
  datasource: {{
    url: env("DATABASE_URL"),
  }},
}});"#,
            self.schema,
            self.migrations()
        );

        CodeFile::new()
            .import(Import::new("dotenv/config"))
            .import(Import::new("prisma/config").named("defineConfig").named("env"))
            .add(RawCode::new(config))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pbgen_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_layout() {
        let file = PrismaConfigTs::new(Path::new("prisma/schema.prisma"));
        assert_eq!(
            file.render(),
            r#"import "dotenv/config";
import { defineConfig, env } from "prisma/config";

export default defineConfig({
  schema: "prisma/schema.prisma",
  migrations: {
    path: "prisma/migrations",
  },
  datasource: {
    url: env("DATABASE_URL"),
  },
});
"#
        );
    }

    #[test]
    fn test_schema_at_root() {
        let file = PrismaConfigTs::new(Path::new("schema.prisma"));
        assert_eq!(file.schema, "schema.prisma");
        assert_eq!(file.migrations(), "migrations");
    }

    #[test]
    fn test_existing_config_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PRISMA_CONFIG_FILE);
        fs::write(&path, "export default {};\n").unwrap();

        let file = PrismaConfigTs::new(Path::new("prisma/schema.prisma"));
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export default {};\n");
    }

    #[test]
    fn test_missing_config_is_written() {
        let temp = TempDir::new().unwrap();
        let file = PrismaConfigTs::new(Path::new("db/schema.prisma"));

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        let content = fs::read_to_string(temp.path().join(PRISMA_CONFIG_FILE)).unwrap();
        assert!(content.contains("path: \"db/migrations\""));
    }
}
