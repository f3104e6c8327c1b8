//! TypeScript source analysis

pub mod parser;
pub mod project;

pub use parser::TypeScriptParser;
pub use project::TypeScriptProject;
