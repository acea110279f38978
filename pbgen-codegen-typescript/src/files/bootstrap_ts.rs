//! The Prisma client bootstrap module.
//!
//! The generated module owns one lazily created `PrismaClient` through an
//! injectable lifecycle object instead of a global, and tears it down on
//! `beforeExit`.

use pbgen_codegen::{builder::CodeFragment, language::BootstrapPlan};

use super::GENERATED_HEADER;
use crate::{
    ast::{Const, Export, Fn, Import, Interface},
    code_file::{CodeFile, RawCode},
};

const LIFECYCLE_TYPE: &str = "PrismaLifecycle";

const BEFORE_EXIT_HOOK: &str = r#"process.on("beforeExit", async () => {
  await disconnectPrisma();
});"#;

/// Structured form of the bootstrap module: imports, the optional adapter
/// block and the client constructor call.
#[derive(Debug, Clone)]
pub struct BootstrapTs {
    imports: Vec<Import>,
    adapter_init: Option<String>,
    client_constructor: String,
}

impl BootstrapTs {
    pub fn new(plan: &BootstrapPlan) -> Self {
        let client = Import::new(&plan.client_import)
            .named("PrismaClient")
            .named("Prisma");

        let Some(adapter) = &plan.adapter else {
            return Self {
                imports: vec![client],
                adapter_init: None,
                client_constructor: "new PrismaClient()".to_string(),
            };
        };

        // Side-effect imports (dotenv) load before anything else.
        let (side_effects, helpers): (Vec<Import>, Vec<Import>) = adapter
            .extra_imports
            .iter()
            .map(Import::from)
            .partition(Import::is_side_effect);

        let mut imports = side_effects;
        imports.push(client);
        imports.push(Import::from(&adapter.adapter_import()));
        imports.extend(helpers);

        Self {
            imports,
            adapter_init: Some(adapter.init_snippet.clone()),
            client_constructor: "new PrismaClient({ adapter })".to_string(),
        }
    }

    /// Import statements in emission order.
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Whether a driver adapter is wired.
    pub fn has_adapter(&self) -> bool {
        self.adapter_init.is_some()
    }

    /// Expression that creates the client.
    pub fn client_constructor(&self) -> &str {
        &self.client_constructor
    }

    pub fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(self.imports.clone())
            .add_opt(self.adapter_init.as_deref().map(RawCode::new))
            .add(lifecycle_interface())
            .add(self.create_lifecycle_fn())
            .add(Const::new("lifecycle", "createPrismaLifecycle()").private())
            .add(get_prisma_fn())
            .add(disconnect_prisma_fn())
            .add(RawCode::new(BEFORE_EXIT_HOOK))
            .export(Export::new().named("Prisma"))
            .render()
    }

    fn create_lifecycle_fn(&self) -> Fn {
        let close = |s: &str| Some(s.to_string());

        let get_or_create = CodeFragment::block(
            "getOrCreate() {",
            vec![
                CodeFragment::block(
                    "if (!client) {",
                    vec![CodeFragment::line(format!(
                        "client = {};",
                        self.client_constructor
                    ))],
                    close("}"),
                ),
                CodeFragment::line("return client;"),
            ],
            close("},"),
        );

        let reset = CodeFragment::block(
            "async reset() {",
            vec![
                CodeFragment::line("const current = client;"),
                CodeFragment::line("client = undefined;"),
                CodeFragment::block(
                    "if (current) {",
                    vec![CodeFragment::line("await current.$disconnect();")],
                    close("}"),
                ),
            ],
            close("},"),
        );

        Fn::new("createPrismaLifecycle")
            .doc("Create an independent client lifecycle.")
            .returns(LIFECYCLE_TYPE)
            .body_line("let client: PrismaClient | undefined;")
            .body_blank()
            .body_fragment(CodeFragment::block(
                "return {",
                vec![get_or_create, reset],
                close("};"),
            ))
    }
}

fn lifecycle_interface() -> Interface {
    Interface::new(LIFECYCLE_TYPE)
        .doc("Owns one lazily created Prisma client.")
        .method("getOrCreate", "PrismaClient")
        .method("reset", "Promise<void>")
}

fn get_prisma_fn() -> Fn {
    Fn::new("getPrisma")
        .doc("Shared Prisma client, created on first use.")
        .returns("PrismaClient")
        .body_line("return lifecycle.getOrCreate();")
}

fn disconnect_prisma_fn() -> Fn {
    Fn::new("disconnectPrisma")
        .doc("Disconnect the shared client. Safe to call more than once.")
        .async_()
        .returns("Promise<void>")
        .body_line("await lifecycle.reset();")
}
