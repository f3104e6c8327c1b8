pub mod analyzer;
pub mod schema;
pub mod typescript;

pub use analyzer::SourceAnalyzer;
pub use schema::{ClassSchema, Constraint, PropertySchema, SourceFile};
pub use typescript::{TypeScriptParser, TypeScriptProject};
