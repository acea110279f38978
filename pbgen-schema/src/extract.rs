//! Directive scanner for Prisma schema files.
//!
//! This is deliberately not a parser for the Prisma schema language. It
//! locates exactly two assignments:
//!
//! - `output = "<path>"` inside the `generator client { ... }` block
//! - `provider = "<id>"` inside a `datasource <name> { ... }` block
//!
//! The `generator` block carries its own `provider` (e.g. `prisma-client-js`),
//! which is why the provider search is anchored to the datasource block.

use std::{fmt, sync::LazyLock};

use regex::Regex;

static OUTPUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"generator\s+client\s*\{[^}]*?\boutput\s*=\s*"([^"]+)""#)
        .expect("output directive pattern is valid")
});

static PROVIDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"datasource\s+\w+\s*\{[^}]*?\bprovider\s*=\s*"([^"]+)""#)
        .expect("provider directive pattern is valid")
});

/// The raw directive values found in a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaExtraction {
    /// `output` of the `generator client` block, exactly as written.
    pub output: Option<String>,
    /// `provider` of the first `datasource` block.
    pub provider: Option<String>,
}

/// A directive the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Output,
    Provider,
}

impl Directive {
    /// The block the directive lives in.
    pub fn block(&self) -> &'static str {
        match self {
            Directive::Output => "generator client",
            Directive::Provider => "datasource",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Output => write!(f, "output"),
            Directive::Provider => write!(f, "provider"),
        }
    }
}

/// Extract the `output` and `provider` directives from raw schema text.
///
/// Never fails: either directive may be absent. When a directive appears
/// more than once, the first occurrence wins.
pub fn extract(text: &str) -> SchemaExtraction {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    };

    SchemaExtraction {
        output: capture(&OUTPUT_RE),
        provider: capture(&PROVIDER_RE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
generator client {
  provider = "prisma-client"
  output   = "../generated/client"
}

datasource db {
  provider = "postgresql"
}

model User {
  id    Int    @id @default(autoincrement())
  email String @unique
}
"#;

    #[test]
    fn test_extracts_both_directives() {
        let extraction = extract(FULL);
        assert_eq!(extraction.output.as_deref(), Some("../generated/client"));
        assert_eq!(extraction.provider.as_deref(), Some("postgresql"));
    }

    #[test]
    fn test_output_only() {
        let extraction = extract(
            r#"
generator client {
  provider = "prisma-client-js"
  output = "./client"
}
"#,
        );
        assert_eq!(extraction.output.as_deref(), Some("./client"));
        assert_eq!(extraction.provider, None);
    }

    #[test]
    fn test_generator_provider_is_not_the_datasource_provider() {
        let extraction = extract(
            r#"
generator client {
  provider = "prisma-client-js"
}
"#,
        );
        assert_eq!(extraction, SchemaExtraction::default());
    }

    #[test]
    fn test_provider_only() {
        let extraction = extract(
            r#"
datasource database {
  provider = "sqlite"
  url      = env("DATABASE_URL")
}
"#,
        );
        assert_eq!(extraction.output, None);
        assert_eq!(extraction.provider.as_deref(), Some("sqlite"));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract(""), SchemaExtraction::default());
    }

    #[test]
    fn test_first_match_wins() {
        let extraction = extract(
            r#"
datasource primary {
  provider = "mysql"
}

datasource replica {
  provider = "postgresql"
}

generator client {
  output = "./first"
  output = "./second"
}
"#,
        );
        assert_eq!(extraction.provider.as_deref(), Some("mysql"));
        assert_eq!(extraction.output.as_deref(), Some("./first"));
    }

    #[test]
    fn test_other_generators_are_ignored() {
        let extraction = extract(
            r#"
generator erd {
  provider = "prisma-erd-generator"
  output   = "./erd.svg"
}
"#,
        );
        assert_eq!(extraction.output, None);
    }

    #[test]
    fn test_keys_sharing_a_suffix_are_ignored() {
        let extraction = extract(
            r#"
generator client {
  custom_output = "./nope"
}
"#,
        );
        assert_eq!(extraction.output, None);
    }

    #[test]
    fn test_directive_display() {
        assert_eq!(Directive::Output.to_string(), "output");
        assert_eq!(Directive::Provider.block(), "datasource");
    }
}
