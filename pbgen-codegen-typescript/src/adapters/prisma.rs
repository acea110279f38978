//! Prisma driver adapters.
//!
//! Every supported datasource provider maps to one [`DriverFamily`]. The
//! descriptor is built from the family alone, so synonyms like `mysql` and
//! `mariadb` always produce identical descriptors.

use pbgen_codegen::adapters::{
    AdapterDescriptor, AdapterResolver, ImportSpec, ProviderInfo, UnknownProvider,
};

/// Provider identifiers in registry order.
const PROVIDERS: &[(&str, DriverFamily)] = &[
    ("postgresql", DriverFamily::Postgres),
    ("mysql", DriverFamily::MariaDb),
    ("mariadb", DriverFamily::MariaDb),
    ("sqlite", DriverFamily::BetterSqlite3),
    ("sqlserver", DriverFamily::Mssql),
    ("neon", DriverFamily::Neon),
    ("planetscale", DriverFamily::PlanetScale),
    ("libsql", DriverFamily::LibSql),
];

const PG_INIT: &str = r#"const connectionString = `${process.env.DATABASE_URL}`;
const adapter = new PrismaPg({ connectionString });"#;

const MARIADB_INIT: &str = r#"const adapter = new PrismaMariaDb({
  host: process.env.DATABASE_HOST,
  user: process.env.DATABASE_USER,
  password: process.env.DATABASE_PASSWORD,
  database: process.env.DATABASE_NAME,
  connectionLimit: 5,
});"#;

const BETTER_SQLITE3_INIT: &str = r#"const adapter = new PrismaBetterSqlite3({
  url: process.env.DATABASE_URL,
});"#;

const MSSQL_INIT: &str = r#"const sqlConfig = {
  user: process.env.DB_USER,
  password: process.env.DB_PASSWORD,
  database: process.env.DB_NAME,
  server: process.env.HOST,
  pool: {
    max: 10,
    min: 0,
    idleTimeoutMillis: 30000,
  },
  options: {
    encrypt: true,
    trustServerCertificate: false,
  },
};
const adapter = new PrismaMssql(sqlConfig);"#;

const NEON_INIT: &str = r#"const adapter = new PrismaNeon({ connectionString: process.env.DATABASE_URL });"#;

const PLANETSCALE_INIT: &str = r#"const adapter = new PrismaPlanetScale({
  url: process.env.DATABASE_URL,
  fetch: undiciFetch,
});"#;

const LIBSQL_INIT: &str = r#"const adapter = new PrismaLibSql({
  url: process.env.DATABASE_URL ?? "",
});"#;

/// The JavaScript driver a Prisma adapter wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverFamily {
    /// node-postgres
    Postgres,
    /// mariadb connector, also used for MySQL
    MariaDb,
    /// better-sqlite3
    BetterSqlite3,
    /// node-mssql
    Mssql,
    /// Neon serverless Postgres
    Neon,
    /// PlanetScale serverless MySQL
    PlanetScale,
    /// libSQL / Turso
    LibSql,
}

impl DriverFamily {
    /// Look up the family of a provider identifier, ignoring case.
    pub fn from_provider(provider: &str) -> Option<Self> {
        let provider = provider.to_ascii_lowercase();
        PROVIDERS
            .iter()
            .find(|(id, _)| *id == provider)
            .map(|(_, family)| *family)
    }

    /// Short driver name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "pg",
            Self::MariaDb => "mariadb",
            Self::BetterSqlite3 => "better-sqlite3",
            Self::Mssql => "mssql",
            Self::Neon => "neon",
            Self::PlanetScale => "planetscale",
            Self::LibSql => "libsql",
        }
    }

    /// npm package providing the adapter.
    pub fn package(&self) -> &'static str {
        match self {
            Self::Postgres => "@prisma/adapter-pg",
            Self::MariaDb => "@prisma/adapter-mariadb",
            Self::BetterSqlite3 => "@prisma/adapter-better-sqlite3",
            Self::Mssql => "@prisma/adapter-mssql",
            Self::Neon => "@prisma/adapter-neon",
            Self::PlanetScale => "@prisma/adapter-planetscale",
            Self::LibSql => "@prisma/adapter-libsql",
        }
    }

    /// Adapter class exported by [`package`](Self::package).
    pub fn adapter_symbol(&self) -> &'static str {
        match self {
            Self::Postgres => "PrismaPg",
            Self::MariaDb => "PrismaMariaDb",
            Self::BetterSqlite3 => "PrismaBetterSqlite3",
            Self::Mssql => "PrismaMssql",
            Self::Neon => "PrismaNeon",
            Self::PlanetScale => "PrismaPlanetScale",
            Self::LibSql => "PrismaLibSql",
        }
    }

    fn init_snippet(&self) -> &'static str {
        match self {
            Self::Postgres => PG_INIT,
            Self::MariaDb => MARIADB_INIT,
            Self::BetterSqlite3 => BETTER_SQLITE3_INIT,
            Self::Mssql => MSSQL_INIT,
            Self::Neon => NEON_INIT,
            Self::PlanetScale => PLANETSCALE_INIT,
            Self::LibSql => LIBSQL_INIT,
        }
    }

    fn extra_imports(&self) -> Vec<ImportSpec> {
        // Every snippet reads connection settings from the environment.
        let mut imports = vec![ImportSpec::new("dotenv/config")];
        if let Self::PlanetScale = self {
            imports.push(ImportSpec::new("undici").symbol_as("fetch", "undiciFetch"));
        }
        imports
    }

    /// Everything the bootstrap file needs to wire this driver.
    pub fn descriptor(&self) -> AdapterDescriptor {
        AdapterDescriptor {
            required_dependency: self.package().to_string(),
            adapter_symbol: self.adapter_symbol().to_string(),
            init_snippet: self.init_snippet().to_string(),
            extra_imports: self.extra_imports(),
        }
    }
}

/// The Prisma driver adapter registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrismaAdapters;

impl PrismaAdapters {
    pub fn new() -> Self {
        Self
    }
}

impl AdapterResolver for PrismaAdapters {
    fn resolve(&self, provider: &str) -> Result<AdapterDescriptor, UnknownProvider> {
        DriverFamily::from_provider(provider)
            .map(|family| family.descriptor())
            .ok_or_else(|| self.unknown(provider))
    }

    fn providers(&self) -> Vec<ProviderInfo> {
        PROVIDERS
            .iter()
            .map(|&(provider, family)| ProviderInfo {
                provider,
                family: family.name(),
                package: family.package(),
            })
            .collect()
    }
}
