//! TypeScript AST builders for imports, declarations, functions and exports.
//!
//! Each node renders to [`CodeFragment`](pbgen_codegen::builder::CodeFragment)s
//! and is assembled into a file by [`CodeFile`](crate::CodeFile).

mod consts;
mod exports;
mod fns;
mod imports;
mod interface;

pub use consts::Const;
pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::Interface;
