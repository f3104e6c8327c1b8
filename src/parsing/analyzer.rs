//! Source-analysis service interface
//!
//! The transformer only ever reads from this service. Implementations own a
//! session that accumulates loaded files; opening the same path twice hands
//! back the same shared file.

use crate::error::AnalysisResult;
use crate::parsing::schema::SourceFile;
use std::path::Path;
use std::sync::Arc;

/// Read-only access to the class declarations of source files
pub trait SourceAnalyzer {
    /// Load (or fetch from the session) the file at `path`
    fn open_file(&mut self, path: &Path) -> AnalysisResult<Arc<SourceFile>>;
}

impl<A: SourceAnalyzer + ?Sized> SourceAnalyzer for &mut A {
    fn open_file(&mut self, path: &Path) -> AnalysisResult<Arc<SourceFile>> {
        (**self).open_file(path)
    }
}
