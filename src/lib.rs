/// Render apidoc field annotations from TypeScript class declarations
pub mod annotation;
pub mod config;
pub mod error;
pub mod io;
pub mod parsing;

// Explicit exports for better API clarity
pub use annotation::{
    AnnotationFragment, AnnotationKind, ClassReference, ClassTransformer, Element, ElementParser,
    extract,
};
pub use config::Settings;
pub use error::{AnalysisError, AnalysisResult, ElementError, ElementResult};
pub use parsing::{ClassSchema, Constraint, PropertySchema, SourceAnalyzer, SourceFile};
pub use parsing::{TypeScriptParser, TypeScriptProject};
